#![forbid(unsafe_code)]

//! Named-rule registry keyed by class identifier.
//!
//! The stylesheet is the asset-side half of the class indirection: a
//! registry of presentational declarations keyed by the same identifiers
//! the components attach to markup. Components never read it; it exists
//! so the demo can emit a complete page (markup + generated sheet) from
//! one source of truth.
//!
//! # Example
//! ```
//! use cardwall_style::{Decl, StyleSheet};
//!
//! let sheet = StyleSheet::new();
//! sheet.define("Card", Decl::new().padding(16).border(true));
//! sheet.define("CardLarge", Decl::new().font_scale(120));
//!
//! // Compose multiple rules (later ones take precedence)
//! let composed = sheet.compose(&["Card", "CardLarge"]);
//! assert_eq!(composed.font_scale, Some(120));
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::RwLock;

/// Presentational declarations for one rule.
///
/// Every field is optional so rules merge cleanly: a `None` field defers
/// to whatever an earlier rule in the composition said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decl {
    /// Inner padding in pixels.
    pub padding: Option<u16>,
    /// Whether the element draws a border.
    pub border: Option<bool>,
    /// Font size as a percentage of the base size.
    pub font_scale: Option<u16>,
    /// Whether the heading is emphasized.
    pub emphasis: Option<bool>,
    /// Grid column span inside the layout container.
    pub span: Option<u8>,
}

impl Decl {
    /// An empty declaration set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            padding: None,
            border: None,
            font_scale: None,
            emphasis: None,
            span: None,
        }
    }

    /// Set the inner padding in pixels.
    #[must_use]
    pub const fn padding(mut self, px: u16) -> Self {
        self.padding = Some(px);
        self
    }

    /// Enable or disable the border.
    #[must_use]
    pub const fn border(mut self, on: bool) -> Self {
        self.border = Some(on);
        self
    }

    /// Set the font size as a percentage of the base size.
    #[must_use]
    pub const fn font_scale(mut self, percent: u16) -> Self {
        self.font_scale = Some(percent);
        self
    }

    /// Emphasize the heading.
    #[must_use]
    pub const fn emphasis(mut self, on: bool) -> Self {
        self.emphasis = Some(on);
        self
    }

    /// Span this many columns of the layout container.
    #[must_use]
    pub const fn span(mut self, columns: u8) -> Self {
        self.span = Some(columns);
        self
    }

    /// Whether no declaration is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.padding.is_none()
            && self.border.is_none()
            && self.font_scale.is_none()
            && self.emphasis.is_none()
            && self.span.is_none()
    }

    /// Merge over a base: fields set on `self` win, unset fields defer
    /// to `base`.
    #[must_use]
    pub fn merge(&self, base: &Decl) -> Decl {
        Decl {
            padding: self.padding.or(base.padding),
            border: self.border.or(base.border),
            font_scale: self.font_scale.or(base.font_scale),
            emphasis: self.emphasis.or(base.emphasis),
            span: self.span.or(base.span),
        }
    }

    fn write_css(&self, out: &mut String) {
        if let Some(on) = self.border {
            let value = if on { "1px solid #cbd2d9" } else { "none" };
            let _ = writeln!(out, "  border: {value};");
        }
        if let Some(percent) = self.font_scale {
            let _ = writeln!(out, "  font-size: {percent}%;");
        }
        if let Some(on) = self.emphasis {
            let weight = if on { 600 } else { 400 };
            let _ = writeln!(out, "  font-weight: {weight};");
        }
        if let Some(columns) = self.span {
            let _ = writeln!(out, "  grid-column: span {columns};");
        }
        if let Some(px) = self.padding {
            let _ = writeln!(out, "  padding: {px}px;");
        }
    }
}

/// A registry of named rules for consistent theming.
///
/// Rules are defined by class identifier and looked up or composed later.
/// This decouples appearance from component logic: a theme can replace
/// the sheet without touching any component.
///
/// # Thread Safety
///
/// Uses an internal RwLock for thread-safe read access after
/// initialization. Multiple readers can access rules concurrently.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: RwLock<HashMap<String, Decl>>,
}

impl StyleSheet {
    /// Create a new empty stylesheet.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(HashMap::new()),
        }
    }

    /// The fixed sheet the demo ships: rules for the card identifiers.
    ///
    /// Any fixed sheet keyed off `Card`, `CardFirst`, `CardLast`,
    /// `CardLarge`, and `CardList` satisfies the rendering contract; this
    /// one makes the variants visibly distinct.
    #[must_use]
    pub fn card_defaults() -> Self {
        let sheet = Self::new();

        sheet.define("CardList", Decl::new().padding(24));
        sheet.define("Card", Decl::new().padding(16).border(true).font_scale(100));
        sheet.define("CardFirst", Decl::new().emphasis(true));
        sheet.define("CardLast", Decl::new().font_scale(95));
        sheet.define("CardLarge", Decl::new().span(2).font_scale(120));

        sheet
    }

    /// Define a rule for a class identifier.
    ///
    /// If a rule with this name already exists, it is replaced.
    pub fn define(&self, name: impl Into<String>, decl: Decl) {
        let name = name.into();
        let mut rules = self.rules.write().expect("StyleSheet lock poisoned");
        rules.insert(name, decl);
    }

    /// Remove a rule. Returns the removed declarations if present.
    pub fn remove(&self, name: &str) -> Option<Decl> {
        let mut rules = self.rules.write().expect("StyleSheet lock poisoned");
        rules.remove(name)
    }

    /// Look up a rule by class identifier.
    pub fn get(&self, name: &str) -> Option<Decl> {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        rules.get(name).copied()
    }

    /// Look up a rule, returning an empty declaration set if missing.
    pub fn get_or_default(&self, name: &str) -> Decl {
        self.get(name).unwrap_or_default()
    }

    /// Whether a rule with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        rules.contains_key(name)
    }

    /// Number of defined rules.
    pub fn len(&self) -> usize {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        rules.len()
    }

    /// Whether the sheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All rule names.
    pub fn names(&self) -> Vec<String> {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        rules.keys().cloned().collect()
    }

    /// Compose multiple rules by name, merging them in order.
    ///
    /// Rules merge left-to-right with later rules taking precedence for
    /// conflicting declarations. Missing names are silently ignored;
    /// a class on markup with no rule in the sheet is legal.
    pub fn compose(&self, names: &[&str]) -> Decl {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        let mut result = Decl::new();

        for name in names {
            if let Some(decl) = rules.get(*name) {
                result = decl.merge(&result);
            } else {
                tracing::trace!(name, "no rule for class");
            }
        }

        result
    }

    /// Like [`compose`](Self::compose), but `None` if any name is missing.
    pub fn compose_strict(&self, names: &[&str]) -> Option<Decl> {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        let mut result = Decl::new();

        for name in names {
            match rules.get(*name) {
                Some(decl) => result = decl.merge(&result),
                None => return None,
            }
        }

        Some(result)
    }

    /// Extend this sheet with rules from another.
    ///
    /// Rules from `other` override same-named rules in `self`.
    pub fn extend(&self, other: &StyleSheet) {
        let other_rules = other.rules.read().expect("StyleSheet lock poisoned");
        let mut self_rules = self.rules.write().expect("StyleSheet lock poisoned");

        for (name, decl) in other_rules.iter() {
            self_rules.insert(name.clone(), *decl);
        }
    }

    /// Remove all rules.
    pub fn clear(&self) {
        let mut rules = self.rules.write().expect("StyleSheet lock poisoned");
        rules.clear();
    }

    /// Render the sheet as a CSS text block.
    ///
    /// Rules are emitted in name order and properties in a fixed order,
    /// so the same sheet always produces the same text.
    #[must_use]
    pub fn css(&self) -> String {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        let mut names: Vec<&String> = rules.keys().collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            let decl = &rules[name];
            if decl.is_empty() {
                continue;
            }
            let _ = writeln!(out, ".{name} {{");
            decl.write_css(&mut out);
            out.push_str("}\n");
        }
        out
    }
}

impl Clone for StyleSheet {
    fn clone(&self) -> Self {
        let rules = self.rules.read().expect("StyleSheet lock poisoned");
        Self {
            rules: RwLock::new(rules.clone()),
        }
    }
}
