#![forbid(unsafe_code)]

//! Boxed terminal preview of a rendered pass.
//!
//! Draws each card as a bordered box so the pass-to-pass difference is
//! visible at a glance: enlarged cards get a wider box. Titles and
//! bodies are truncated grapheme-by-grapheme against their display
//! width, so double-width characters do not overflow the border.

use cardwall_dom::{Element, Node};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Inner width of a normal card box, in columns.
const CARD_COLS: usize = 34;
/// Inner width of an enlarged card box.
const LARGE_CARD_COLS: usize = 54;

/// Render a boxed preview of one pass tree.
#[must_use]
pub fn render_pass(tree: &Node) -> String {
    let mut out = String::new();
    let Some(root) = tree.as_element() else {
        return out;
    };

    for card in root
        .descendants()
        .filter(|el| el.tag() == "article")
    {
        render_card(card, &mut out);
    }
    out
}

fn render_card(card: &Element, out: &mut String) {
    let classes = card.class_list().attr();
    let large = classes.contains("CardLarge");
    let cols = if large { LARGE_CARD_COLS } else { CARD_COLS };

    let title = child_text(card, "h2");
    let body = child_text(card, "p");

    out.push('╭');
    out.push_str(&"─".repeat(cols + 2));
    out.push_str("╮\n");
    push_line(out, &title, cols);
    push_line(out, &body, cols);
    push_line(out, &classes, cols);
    out.push('╰');
    out.push_str(&"─".repeat(cols + 2));
    out.push_str("╯\n");
}

fn child_text(card: &Element, tag: &str) -> String {
    card.child_nodes()
        .iter()
        .filter_map(Node::as_element)
        .find(|el| el.tag() == tag)
        .map(Element::text_content)
        .unwrap_or_default()
}

fn push_line(out: &mut String, content: &str, cols: usize) {
    let clipped = truncate_to_width(content, cols);
    let pad = cols.saturating_sub(clipped.width());
    out.push_str("│ ");
    out.push_str(&clipped);
    out.push_str(&" ".repeat(pad));
    out.push_str(" │\n");
}

/// Truncate to at most `max` display columns, never splitting a
/// grapheme. A truncated string ends with `…`.
fn truncate_to_width(content: &str, max: usize) -> String {
    if content.width() <= max {
        return content.to_string();
    }
    let limit = max.saturating_sub(1);
    let mut used = 0;
    let mut clipped = String::new();
    for grapheme in content.graphemes(true) {
        let w = grapheme.width();
        if used + w > limit {
            break;
        }
        clipped.push_str(grapheme);
        used += w;
    }
    clipped.push('…');
    clipped
}
