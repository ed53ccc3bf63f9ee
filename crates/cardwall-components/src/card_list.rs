#![forbid(unsafe_code)]

//! The list renderer.
//!
//! Walks an ordered item list, derives positional flags per index, and
//! renders one card per item inside a `section` carrying the `CardList`
//! container identifier. An empty list renders an empty section.
//!
//! Titles key the cards; duplicates are a caller error. The renderer
//! tolerates them (it warns once per render and keeps going) but identity
//! across re-renders is not guaranteed in that case.

use cardwall_core::{Item, Position, duplicate_titles};
use cardwall_dom::{Element, Node};
use cardwall_style::CARD_LIST;

use crate::card::Card;
use crate::{Component, RenderContext};

/// An ordered sequence of items rendered as cards.
#[derive(Debug, Clone, Copy)]
pub struct CardList<'a> {
    items: &'a [Item],
}

impl<'a> CardList<'a> {
    /// Create a list renderer over the given items.
    #[must_use]
    pub fn new(items: &'a [Item]) -> Self {
        Self { items }
    }

    /// Number of cards this list will render.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list renders zero cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Component for CardList<'_> {
    fn render(&self, ctx: &RenderContext) -> Node {
        let dups = duplicate_titles(self.items);
        if !dups.is_empty() {
            tracing::warn!(
                titles = ?dups,
                "duplicate card titles; identity across re-renders is not stable"
            );
        }

        let len = self.items.len();
        tracing::debug!(count = len, wide = ctx.viewport.is_wide(), "render card list");

        Element::new("section")
            .class(CARD_LIST)
            .children(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| Card::new(item, Position::of(i, len)).render(ctx)),
            )
            .into()
    }
}
