#![forbid(unsafe_code)]

//! Canonical event types.
//!
//! The runtime routes these to the model. The set is deliberately small:
//! Cardwall has no input surface beyond the viewport signal and the
//! housekeeping events the runtime itself emits.
//!
//! All events derive `Clone`, `PartialEq`, and `Eq` for use in tests and
//! pattern matching.

/// Canonical runtime event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The environment reported a viewport measurement.
    ///
    /// Emitted when the width ≥ threshold predicate may have changed;
    /// sources are free to suppress measurements inside one band.
    ViewportResized {
        /// Reported width in pixels.
        width: u32,
        /// Reported height in pixels.
        height: u32,
    },

    /// A housekeeping tick from the runtime.
    Tick,

    /// The runtime is shutting down.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_compare() {
        let a = Event::ViewportResized {
            width: 800,
            height: 600,
        };
        let b = Event::ViewportResized {
            width: 800,
            height: 600,
        };
        assert_eq!(a, b);
        assert_ne!(a, Event::Tick);
    }

    #[test]
    fn debug_names_variant() {
        let e = Event::ViewportResized {
            width: 1,
            height: 2,
        };
        assert!(format!("{e:?}").contains("ViewportResized"));
    }
}
