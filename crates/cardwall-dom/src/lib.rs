#![forbid(unsafe_code)]

//! Element tree and markup serialization.
//!
//! Components produce a [`Node`] tree; the tree serializes to markup.
//! The tree is the contract between the two rendering passes: the same
//! tree always yields the same markup, so comparing trees is enough to
//! decide whether a second pass changed anything.
//!
//! Design goals:
//! - Deterministic output (stable attribute order, stable escaping)
//! - No rendering state: a node is plain data, built once per pass
//! - Tiny surface: elements, text, classes, and an optional identity key

pub mod markup;
pub mod node;

pub use markup::write_markup;
pub use node::{Element, Node};
