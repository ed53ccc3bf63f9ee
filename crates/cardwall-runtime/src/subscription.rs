#![forbid(unsafe_code)]

//! Subscription system for continuous event sources.
//!
//! A subscription is the runtime's handle on an external signal (here,
//! the viewport watcher). The model declares the set it wants active; the
//! runtime compares that set against what is running and starts or stops
//! subscriptions to match. Messages flow back through one channel and are
//! routed through `Model::update`.
//!
//! Lifecycle is scoped: a started subscription is stopped and its thread
//! joined when the model stops declaring it, when the runtime shuts down,
//! or when the manager is dropped, whichever comes first.

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

/// A unique identifier for a subscription.
///
/// Subscriptions with the same ID are considered identical; the runtime
/// uses the ID to avoid restarting unchanged subscriptions between
/// update cycles.
pub type SubId = u64;

/// A subscription produces messages from an external event source.
///
/// `run` is called on a background thread. Implementations should loop,
/// sending messages until the channel disconnects or the stop signal is
/// set.
pub trait Subscription<M: Send + 'static>: Send {
    /// Unique identifier for deduplication.
    fn id(&self) -> SubId;

    /// Start the subscription, sending messages through the channel.
    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal);
}

/// Signal a running subscription checks to know when to exit.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    /// Create a new stop signal pair (signal, trigger).
    pub(crate) fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        let trigger = StopTrigger { inner };
        (signal, trigger)
    }

    /// Whether the stop signal has been triggered.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().expect("StopSignal lock poisoned")
    }

    /// Wait for the stop signal or a timeout, whichever comes first.
    ///
    /// Returns `true` if stopped, `false` if the timeout elapsed. Blocks
    /// on a condition variable; spurious wakeups are handled.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let stopped = lock.lock().expect("StopSignal lock poisoned");
        let (stopped, _timeout) = cvar
            .wait_timeout_while(stopped, duration, |stopped| !*stopped)
            .expect("StopSignal lock poisoned");
        *stopped
    }
}

/// Runtime-side trigger that flips the paired [`StopSignal`].
pub(crate) struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    /// Signal the subscription to stop.
    pub(crate) fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().expect("StopSignal lock poisoned");
        *stopped = true;
        cvar.notify_all();
    }
}

/// A running subscription: its ID, its stop trigger, and its thread.
pub(crate) struct RunningSubscription {
    pub(crate) id: SubId,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl RunningSubscription {
    /// Stop the subscription and join its thread.
    pub(crate) fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RunningSubscription {
    fn drop(&mut self) {
        self.trigger.stop();
        // No join in drop; a wedged subscription must not block teardown.
    }
}

/// Manages the lifecycle of subscriptions for a program.
pub(crate) struct SubscriptionManager<M: Send + 'static> {
    active: Vec<RunningSubscription>,
    sender: mpsc::Sender<M>,
    receiver: mpsc::Receiver<M>,
}

impl<M: Send + 'static> SubscriptionManager<M> {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            active: Vec::new(),
            sender,
            receiver,
        }
    }

    /// Update the set of active subscriptions.
    ///
    /// Starts subscriptions whose ID is new, stops those no longer
    /// declared, and leaves unchanged ones running.
    pub(crate) fn reconcile(&mut self, subscriptions: Vec<Box<dyn Subscription<M>>>) {
        let new_ids: HashSet<SubId> = subscriptions.iter().map(|s| s.id()).collect();

        let mut remaining = Vec::new();
        for running in self.active.drain(..) {
            if new_ids.contains(&running.id) {
                remaining.push(running);
            } else {
                tracing::debug!(sub_id = running.id, "stopping subscription");
                running.stop();
            }
        }
        self.active = remaining;

        let mut active_ids: HashSet<SubId> = self.active.iter().map(|r| r.id).collect();
        for sub in subscriptions {
            let id = sub.id();
            if !active_ids.insert(id) {
                continue;
            }

            tracing::debug!(sub_id = id, "starting subscription");
            let (signal, trigger) = StopSignal::new();
            let sender = self.sender.clone();

            let thread = thread::spawn(move || {
                sub.run(sender, signal);
            });

            self.active.push(RunningSubscription {
                id,
                trigger,
                thread: Some(thread),
            });
        }

        tracing::trace!(active = self.active.len(), "subscription reconcile complete");
    }

    /// Block for the next message, up to `timeout`.
    pub(crate) fn recv_timeout(&self, timeout: Duration) -> Option<M> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Drain any messages already queued.
    pub(crate) fn drain_messages(&self) -> Vec<M> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.receiver.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Number of active subscriptions.
    #[inline]
    pub(crate) fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Stop all running subscriptions.
    pub(crate) fn stop_all(&mut self) {
        for running in self.active.drain(..) {
            running.stop();
        }
    }
}

impl<M: Send + 'static> Drop for SubscriptionManager<M> {
    fn drop(&mut self) {
        self.stop_all();
    }
}
