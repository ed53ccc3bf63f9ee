#![forbid(unsafe_code)]

//! Item records.
//!
//! An [`Item`] is one unit of content to be rendered as a card: a title
//! and a body, both plain text. Items arrive whole from a data-loading
//! step and are read-only for the duration of a render.
//!
//! Titles double as the stable identity of a card across re-renders, so
//! they are expected to be unique within one list. Duplicates are a
//! caller error: tolerated, reported, never fatal.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One unit of content rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Card heading. Unique within a list; used as the card's identity.
    pub title: String,
    /// Card body text.
    #[serde(default)]
    pub body: String,
}

impl Item {
    /// Create an item from a title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Error loading item records.
#[derive(Debug)]
pub enum ItemError {
    /// I/O error reading an item source.
    Io(std::io::Error),
    /// The item source is not a JSON array of `{title, body}` records.
    Parse(serde_json::Error),
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::Io(e) => write!(f, "I/O error: {e}"),
            ItemError::Parse(e) => write!(f, "item parse error: {e}"),
        }
    }
}

impl std::error::Error for ItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ItemError::Io(e) => Some(e),
            ItemError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ItemError {
    fn from(e: std::io::Error) -> Self {
        ItemError::Io(e)
    }
}

impl From<serde_json::Error> for ItemError {
    fn from(e: serde_json::Error) -> Self {
        ItemError::Parse(e)
    }
}

/// Parse a JSON array of `{title, body}` records.
///
/// `body` may be omitted per record and defaults to the empty string.
pub fn parse_items(json: &str) -> Result<Vec<Item>, ItemError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    tracing::debug!(count = items.len(), "parsed item records");
    Ok(items)
}

/// Collect titles that appear more than once, in first-seen order.
///
/// Duplicate titles break the stable-identity contract for re-renders.
/// Callers log the result; nothing here crashes.
#[must_use]
pub fn duplicate_titles(items: &[Item]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for item in items {
        let title = item.title.as_str();
        if !seen.insert(title) && !dups.contains(&title) {
            dups.push(title);
        }
    }
    dups
}
