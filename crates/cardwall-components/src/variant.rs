#![forbid(unsafe_code)]

//! Variant flags and class derivation.
//!
//! The only real rule in the system. [`CardVariants`] holds the three
//! variant flags as bitflags; [`CardVariants::derive`] computes them from
//! the positional flags and the wide-viewport predicate, and
//! [`CardVariants::class_list`] maps them to class identifiers in the
//! canonical order: base, first, last, large.

use bitflags::bitflags;
use cardwall_core::Position;
use cardwall_style::{CARD, CARD_FIRST, CARD_LARGE, CARD_LAST, ClassList};

bitflags! {
    /// Variant flags controlling a card's class identifiers.
    ///
    /// `FIRST` and `LAST` come from positional flags alone and never
    /// change between passes. `LARGE` additionally depends on the
    /// viewport predicate, so it is the one flag that can flip after the
    /// first render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CardVariants: u8 {
        /// Card is first in its list.
        const FIRST = 1 << 0;
        /// Card is last in its list.
        const LAST = 1 << 1;
        /// Card is enlarged: first in its list on a wide viewport.
        const LARGE = 1 << 2;
    }
}

impl CardVariants {
    /// Derive the variant flags for one card.
    ///
    /// `LARGE` requires both the wide predicate and `is_first`; a wide
    /// viewport alone enlarges nothing.
    #[must_use]
    pub fn derive(position: Position, is_wide: bool) -> Self {
        let mut flags = CardVariants::empty();
        flags.set(CardVariants::FIRST, position.is_first);
        flags.set(CardVariants::LAST, position.is_last);
        flags.set(CardVariants::LARGE, is_wide && position.is_first);
        flags
    }

    /// Map the flags to class identifiers.
    ///
    /// Starts from the base `Card` identifier, then appends `CardFirst`,
    /// `CardLast`, `CardLarge` for the corresponding flags, in that
    /// order.
    #[must_use]
    pub fn class_list(self) -> ClassList {
        let mut classes = ClassList::with_base(CARD);
        classes.push_if(self.contains(CardVariants::FIRST), CARD_FIRST);
        classes.push_if(self.contains(CardVariants::LAST), CARD_LAST);
        classes.push_if(self.contains(CardVariants::LARGE), CARD_LARGE);
        classes
    }
}
