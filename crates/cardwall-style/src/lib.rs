#![forbid(unsafe_code)]

//! Class tokens and the named-rule stylesheet.
//!
//! A card's visual variant is selected by the set of class identifiers on
//! its root element; the identifiers themselves carry no styling. This
//! crate owns both halves of that indirection: [`ClassName`]/[`ClassList`]
//! for the tokens attached to markup, and [`StyleSheet`] for the named
//! presentational rules an asset pipeline keys off those tokens.

pub mod class;
pub mod stylesheet;

pub use class::{CARD, CARD_FIRST, CARD_LARGE, CARD_LAST, CARD_LIST, ClassList, ClassName};
pub use stylesheet::{Decl, StyleSheet};
