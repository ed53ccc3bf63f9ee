//! Property-based invariant tests for card rendering.
//!
//! Verifies, over arbitrary item lists and viewport widths:
//! 1. Exactly one card carries CardFirst and one carries CardLast (n ≥ 1)
//! 2. A single-item list puts both on the same card
//! 3. CardLarge never appears without CardFirst on the same card
//! 4. An unmeasured viewport never yields CardLarge, whatever the width
//! 5. Measuring wide changes only the first card's class set
//! 6. Narrowing below the threshold removes CardLarge and nothing else
//! 7. Class attributes are whitespace-clean: single-space joined, no edges
//! 8. Markup serialization is deterministic

use cardwall_components::{CardList, Component, RenderContext};
use cardwall_core::{Item, WIDE_MIN_WIDTH};
use cardwall_dom::{Element, Node};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_item() -> impl Strategy<Value = Item> {
    ("[a-zA-Z0-9 ]{1,24}", "[a-zA-Z0-9 .,]{0,64}").prop_map(|(title, body)| Item::new(title, body))
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_item(), 1..12)
}

fn arb_width() -> impl Strategy<Value = u32> {
    0u32..=2000
}

fn rendered_cards(items: &[Item], ctx: &RenderContext) -> Vec<String> {
    let node = CardList::new(items).render(ctx);
    let section = node.as_element().expect("list renders an element");
    section
        .child_nodes()
        .iter()
        .filter_map(Node::as_element)
        .map(|card: &Element| card.class_list().attr())
        .collect()
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn exactly_one_first_and_one_last(items in arb_items(), width in arb_width()) {
        let attrs = rendered_cards(&items, &RenderContext::with_width(width));
        let firsts = attrs.iter().filter(|a| a.contains("CardFirst")).count();
        let lasts = attrs.iter().filter(|a| a.contains("CardLast")).count();
        prop_assert_eq!(firsts, 1);
        prop_assert_eq!(lasts, 1);
    }

    #[test]
    fn single_item_carries_both(item in arb_item(), width in arb_width()) {
        let items = vec![item];
        let attrs = rendered_cards(&items, &RenderContext::with_width(width));
        prop_assert_eq!(attrs.len(), 1);
        prop_assert!(attrs[0].contains("CardFirst"));
        prop_assert!(attrs[0].contains("CardLast"));
    }

    #[test]
    fn large_implies_first(items in arb_items(), width in arb_width()) {
        let attrs = rendered_cards(&items, &RenderContext::with_width(width));
        for attr in &attrs {
            if attr.contains("CardLarge") {
                prop_assert!(attr.contains("CardFirst"), "large without first: {attr}");
            }
        }
    }

    #[test]
    fn unmeasured_never_large(items in arb_items()) {
        let attrs = rendered_cards(&items, &RenderContext::unmeasured());
        for attr in &attrs {
            prop_assert!(!attr.contains("CardLarge"));
        }
    }

    #[test]
    fn wide_measurement_changes_only_first_card(items in arb_items()) {
        let before = rendered_cards(&items, &RenderContext::unmeasured());
        let after = rendered_cards(&items, &RenderContext::with_width(WIDE_MIN_WIDTH));

        let expected_first = format!("{} CardLarge", before[0]);
        prop_assert_eq!(after[0].as_str(), expected_first.as_str());
        for i in 1..before.len() {
            prop_assert_eq!(&before[i], &after[i]);
        }
    }

    #[test]
    fn narrowing_removes_large_only(items in arb_items()) {
        let wide = rendered_cards(&items, &RenderContext::with_width(WIDE_MIN_WIDTH));
        let narrow = rendered_cards(&items, &RenderContext::with_width(WIDE_MIN_WIDTH - 1));

        prop_assert_eq!(narrow[0].as_str(), wide[0].trim_end_matches(" CardLarge"));
        for i in 1..wide.len() {
            prop_assert_eq!(&wide[i], &narrow[i]);
        }
    }

    #[test]
    fn class_attrs_whitespace_clean(items in arb_items(), width in arb_width()) {
        let attrs = rendered_cards(&items, &RenderContext::with_width(width));
        for attr in &attrs {
            prop_assert_eq!(attr.as_str(), attr.trim());
            prop_assert!(!attr.contains("  "), "double space in {attr:?}");
            for token in attr.split(' ') {
                prop_assert!(!token.is_empty());
            }
        }
    }

    #[test]
    fn markup_is_deterministic(items in arb_items(), width in arb_width()) {
        let ctx = RenderContext::with_width(width);
        let a = CardList::new(&items).render(&ctx).to_markup();
        let b = CardList::new(&items).render(&ctx).to_markup();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn empty_list_renders_zero_cards() {
    let attrs = rendered_cards(&[], &RenderContext::with_width(1200));
    assert!(attrs.is_empty());
}
