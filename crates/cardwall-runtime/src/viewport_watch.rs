#![forbid(unsafe_code)]

//! The viewport watcher.
//!
//! [`ViewportWatch`] is the one subscription Cardwall ships: it reads a
//! [`ViewportProbe`] and reports measurements to the model. On start it
//! measures immediately, so the current state reaches the model without
//! waiting for a change. It then re-measures on an interval and reports
//! only when the wide predicate flips. Resizes that stay inside one band
//! produce no messages and therefore no render passes.
//!
//! A probe that cannot measure (a headless environment, a terminal that
//! does not report pixels) yields `None`; the watcher stays silent and
//! the model keeps the default narrow state permanently. Absence is a
//! degraded mode, not an error.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cardwall_core::{ViewportDims, WIDE_MIN_WIDTH};

use crate::subscription::{StopSignal, SubId, Subscription};

/// Stable subscription ID for the viewport watcher.
const VIEWPORT_WATCH_ID: SubId = 0x5649_4557; // "VIEW"

/// Source of viewport measurements.
///
/// `measure` returns the current dimensions, or `None` when the
/// environment cannot report them.
pub trait ViewportProbe: Send + Sync {
    /// Measure the viewport, if the environment allows it.
    fn measure(&self) -> Option<ViewportDims>;
}

/// A probe that always reports the same dimensions. Test and scripted-
/// demo constructor.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe {
    dims: ViewportDims,
}

impl FixedProbe {
    /// A probe pinned to the given width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            dims: ViewportDims { width, height },
        }
    }
}

impl ViewportProbe for FixedProbe {
    fn measure(&self) -> Option<ViewportDims> {
        Some(self.dims)
    }
}

/// A probe whose dimensions can be changed from outside while the
/// watcher runs. Used to script narrow→wide→narrow sequences.
#[derive(Debug, Clone, Default)]
pub struct SharedProbe {
    dims: Arc<Mutex<Option<ViewportDims>>>,
}

impl SharedProbe {
    /// A probe that starts unmeasurable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe that starts at the given dimensions.
    #[must_use]
    pub fn at(width: u32, height: u32) -> Self {
        let probe = Self::new();
        probe.set(width, height);
        probe
    }

    /// Update the dimensions the probe reports.
    pub fn set(&self, width: u32, height: u32) {
        let mut dims = self.dims.lock().expect("SharedProbe lock poisoned");
        *dims = Some(ViewportDims { width, height });
    }

    /// Make the probe unmeasurable again.
    pub fn clear(&self) {
        let mut dims = self.dims.lock().expect("SharedProbe lock poisoned");
        *dims = None;
    }
}

impl ViewportProbe for SharedProbe {
    fn measure(&self) -> Option<ViewportDims> {
        *self.dims.lock().expect("SharedProbe lock poisoned")
    }
}

/// A probe for environments with no viewport signal at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProbe;

impl ViewportProbe for UnavailableProbe {
    fn measure(&self) -> Option<ViewportDims> {
        None
    }
}

/// A probe backed by the real terminal's reported pixel size.
///
/// Terminals that do not implement the pixel-size report return zeros;
/// that reads as `None` here and the watcher degrades to the default.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

#[cfg(not(target_arch = "wasm32"))]
impl ViewportProbe for TerminalProbe {
    fn measure(&self) -> Option<ViewportDims> {
        match crossterm::terminal::window_size() {
            Ok(size) if size.width > 0 && size.height > 0 => Some(ViewportDims {
                width: u32::from(size.width),
                height: u32::from(size.height),
            }),
            Ok(_) => {
                tracing::debug!("terminal does not report pixel size");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "terminal size query failed");
                None
            }
        }
    }
}

/// Subscription that watches a probe and reports predicate edges.
pub struct ViewportWatch<M: Send + 'static> {
    probe: Arc<dyn ViewportProbe>,
    poll: Duration,
    threshold: u32,
    make_msg: Box<dyn Fn(ViewportDims) -> M + Send + Sync>,
}

impl<M: Send + 'static> ViewportWatch<M> {
    /// Default re-measure interval.
    pub const DEFAULT_POLL: Duration = Duration::from_millis(100);

    /// Watch `probe`, mapping each reported measurement through
    /// `make_msg`.
    pub fn new(
        probe: Arc<dyn ViewportProbe>,
        make_msg: impl Fn(ViewportDims) -> M + Send + Sync + 'static,
    ) -> Self {
        Self {
            probe,
            poll: Self::DEFAULT_POLL,
            threshold: WIDE_MIN_WIDTH,
            make_msg: Box::new(make_msg),
        }
    }

    /// Set the re-measure interval.
    #[must_use]
    pub fn with_poll(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    /// Set the wide threshold the watcher edges on.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }
}

impl<M: Send + 'static> Subscription<M> for ViewportWatch<M> {
    fn id(&self) -> SubId {
        VIEWPORT_WATCH_ID
    }

    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal) {
        // Immediate evaluation: the current state reaches the model
        // before any change can.
        let mut last_wide: Option<bool> = None;
        if let Some(dims) = self.probe.measure() {
            last_wide = Some(dims.width >= self.threshold);
            tracing::debug!(width = dims.width, "initial viewport measurement");
            if sender.send((self.make_msg)(dims)).is_err() {
                return;
            }
        } else {
            tracing::debug!("viewport probe unavailable; staying at default");
        }

        loop {
            if stop.wait_timeout(self.poll) {
                tracing::trace!("viewport watch stopped");
                return;
            }
            let Some(dims) = self.probe.measure() else {
                continue;
            };
            let wide = dims.width >= self.threshold;
            if last_wide == Some(wide) {
                continue;
            }
            last_wide = Some(wide);
            tracing::debug!(width = dims.width, wide, "viewport predicate edge");
            if sender.send((self.make_msg)(dims)).is_err() {
                return;
            }
        }
    }
}
