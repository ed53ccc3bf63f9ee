#![forbid(unsafe_code)]

//! The demo's application model.
//!
//! [`WallModel`] owns the item list and the ambient viewport state. The
//! view wraps the card list in a `main.CardWall` container; the one
//! subscription is the viewport watcher over whatever probe the CLI
//! selected.

use std::sync::Arc;

use cardwall_components::{CardList, Component, RenderContext};
use cardwall_core::{Event, Item, ViewportState};
use cardwall_dom::{Element, Node};
use cardwall_runtime::{Cmd, Model, Subscription, ViewportProbe, ViewportWatch};
use cardwall_style::ClassName;

/// Container identifier for the page-level wrapper.
pub const CARD_WALL: ClassName = ClassName::from_static("CardWall");

/// Built-in sample posts, used when no item file is given.
pub const SAMPLE_ITEMS: &str = r#"[
  {"title": "Post 1", "body": "First post"},
  {"title": "Post 2", "body": "Second post"},
  {"title": "Post 3", "body": "Third post"}
]"#;

/// Messages the demo model handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// A viewport measurement arrived.
    Viewport { width: u32, height: u32 },
    /// Runtime housekeeping with no state effect.
    Nop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::ViewportResized { width, height } => Msg::Viewport { width, height },
            Event::Tick | Event::Quit => Msg::Nop,
        }
    }
}

/// Application state: the items and the viewport signal as last seen.
pub struct WallModel {
    items: Vec<Item>,
    viewport: ViewportState,
    probe: Arc<dyn ViewportProbe>,
}

impl WallModel {
    /// Create the model over the given items and measurement source.
    pub fn new(items: Vec<Item>, probe: Arc<dyn ViewportProbe>) -> Self {
        Self {
            items,
            viewport: ViewportState::unmeasured(),
            probe,
        }
    }

    /// The viewport state as of the latest update.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }
}

impl Model for WallModel {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        Cmd::log(format!("rendering {} cards", self.items.len()))
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Viewport { width, height } => {
                tracing::debug!(width, height, "viewport measurement");
                self.viewport.measure(width);
                Cmd::none()
            }
            Msg::Nop => Cmd::none(),
        }
    }

    fn view(&self) -> Node {
        let ctx = RenderContext {
            viewport: self.viewport,
        };
        Element::new("main")
            .class(CARD_WALL)
            .child(CardList::new(&self.items).render(&ctx))
            .into()
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
        vec![Box::new(ViewportWatch::new(
            Arc::clone(&self.probe),
            |dims| Msg::Viewport {
                width: dims.width,
                height: dims.height,
            },
        ))]
    }
}
