#![forbid(unsafe_code)]

//! The card unit.
//!
//! Renders one item record plus its positional flags into an `article`
//! carrying the derived class identifiers, a heading with the title, and
//! a body paragraph. The viewport signal is read from the render context;
//! the card itself holds no state and registers nothing.

use cardwall_core::{Item, Position};
use cardwall_dom::{Element, Node};

use crate::variant::CardVariants;
use crate::{Component, RenderContext};

/// One item rendered as a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    item: &'a Item,
    position: Position,
}

impl<'a> Card<'a> {
    /// Create a card for an item with its positional flags.
    #[must_use]
    pub fn new(item: &'a Item, position: Position) -> Self {
        Self { item, position }
    }

    /// The variant flags this card renders with under the given context.
    #[must_use]
    pub fn variants(&self, ctx: &RenderContext) -> CardVariants {
        CardVariants::derive(self.position, ctx.viewport.is_wide())
    }
}

impl Component for Card<'_> {
    fn render(&self, ctx: &RenderContext) -> Node {
        let variants = self.variants(ctx);
        tracing::trace!(
            title = %self.item.title,
            variants = ?variants,
            "render card"
        );

        Element::new("article")
            .classes(variants.class_list())
            .key(self.item.title.clone())
            .child(Element::new("h2").text(self.item.title.clone()))
            .child(Element::new("p").text(self.item.body.clone()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item::new("Post 1", "First post")
    }

    fn render(card: &Card<'_>, ctx: &RenderContext) -> Element {
        match card.render(ctx) {
            Node::Element(el) => el,
            Node::Text(_) => panic!("card must render an element"),
        }
    }

    #[test]
    fn renders_article_with_heading_and_body() {
        let item = item();
        let card = Card::new(&item, Position::of(0, 2));
        let el = render(&card, &RenderContext::unmeasured());

        assert_eq!(el.tag(), "article");
        let tags: Vec<_> = el.descendants().map(Element::tag).collect();
        assert_eq!(tags, vec!["article", "h2", "p"]);
        assert_eq!(el.text_content(), "Post 1First post");
    }

    #[test]
    fn keyed_by_title() {
        let item = item();
        let card = Card::new(&item, Position::of(0, 1));
        let el = render(&card, &RenderContext::unmeasured());
        assert_eq!(el.key_ref(), Some("Post 1"));
    }

    #[test]
    fn first_pass_classes_without_measurement() {
        let item = item();
        let card = Card::new(&item, Position::of(0, 2));
        let el = render(&card, &RenderContext::unmeasured());
        assert_eq!(el.class_list().attr(), "Card CardFirst");
    }

    #[test]
    fn wide_pass_adds_large_to_first() {
        let item = item();
        let card = Card::new(&item, Position::of(0, 2));
        let el = render(&card, &RenderContext::with_width(800));
        assert_eq!(el.class_list().attr(), "Card CardFirst CardLarge");
    }

    #[test]
    fn wide_pass_leaves_last_card_alone() {
        let item = item();
        let card = Card::new(&item, Position::of(1, 2));

        let narrow = render(&card, &RenderContext::unmeasured());
        let wide = render(&card, &RenderContext::with_width(800));
        assert_eq!(narrow.class_list().attr(), "Card CardLast");
        assert_eq!(wide.class_list().attr(), "Card CardLast");
    }

    #[test]
    fn markup_matches_contract() {
        let item = item();
        let card = Card::new(&item, Position::of(0, 2));
        let markup = card.render(&RenderContext::unmeasured()).to_markup();
        assert_eq!(
            markup,
            r#"<article class="Card CardFirst" data-key="Post 1"><h2>Post 1</h2><p>First post</p></article>"#
        );
    }

    #[test]
    fn empty_fields_render_as_empty_text() {
        let item = Item::new("", "");
        let card = Card::new(&item, Position::of(0, 1));
        let el = render(&card, &RenderContext::unmeasured());
        assert_eq!(el.text_content(), "");
    }

    #[test]
    fn render_is_pure() {
        let item = item();
        let card = Card::new(&item, Position::of(0, 1));
        let ctx = RenderContext::with_width(700);
        assert_eq!(card.render(&ctx), card.render(&ctx));
    }
}
