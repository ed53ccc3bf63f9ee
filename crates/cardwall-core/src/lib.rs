#![forbid(unsafe_code)]

//! Core data types for Cardwall.
//!
//! This crate holds everything the rendering layers agree on but none of
//! them own: the item records supplied by the data-loading step, the
//! positional flags derived from a record's place in its list, the
//! viewport predicate that is unknown until the environment reports a
//! measurement, and the canonical event type the runtime routes.
//!
//! # Role in Cardwall
//! `cardwall-core` sits below every other crate. It has no opinion about
//! markup or rendering; it only defines the values that flow one way
//! through the system: item list → positional flags → viewport predicate.

pub mod event;
pub mod item;
pub mod position;
pub mod viewport;

pub use event::Event;
pub use item::{Item, ItemError, duplicate_titles, parse_items};
pub use position::{Position, positions};
pub use viewport::{ViewportDims, ViewportState, WIDE_MIN_WIDTH};
