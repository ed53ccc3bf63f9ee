#![forbid(unsafe_code)]

//! Cardwall runtime.
//!
//! Ties the data and component crates into a running demo: an Elm-style
//! [`Program`] drives a [`Model`] through its render passes, and the
//! subscription system delivers the viewport signal once the program
//! activates.
//!
//! # Key components
//!
//! - [`Model`] - Trait for application state and behavior
//! - [`Cmd`] - Commands for side effects
//! - [`Program`] - Update/view loop with pass emission
//! - [`Subscription`] - Trait for continuous event sources
//! - [`ViewportWatch`] - The viewport-predicate subscription
//! - [`ViewportProbe`] - Where measurements come from
//!
//! # Two-phase contract
//! Pass 1 always renders before subscriptions start, so it can never see
//! a viewport measurement. If the watcher later resolves the wide
//! predicate, the resulting message drives exactly one further pass per
//! predicate edge.

pub mod program;
pub mod subscription;
pub mod viewport_watch;

pub use program::{Cmd, CollectSink, Model, PassSink, Program, ProgramConfig};
pub use subscription::{StopSignal, SubId, Subscription};
#[cfg(not(target_arch = "wasm32"))]
pub use viewport_watch::TerminalProbe;
pub use viewport_watch::{
    FixedProbe, SharedProbe, UnavailableProbe, ViewportProbe, ViewportWatch,
};
