#![forbid(unsafe_code)]

//! Elm-style runtime for two-phase markup rendering.
//!
//! The program separates state ([`Model`]) from rendering (`view`) and
//! drives the update/view loop. The defining behavior: the first pass is
//! rendered *before* any subscription starts, so markup produced ahead of
//! activation can never see a subscription message, which is the state
//! of the world when markup is produced ahead of time. Activation then
//! starts the declared subscriptions, and each message that changes the
//! rendered tree produces one further pass.
//!
//! Rendering is single-threaded and event-driven; subscription threads
//! only ever send messages through the manager's channel.
//!
//! # Example
//!
//! ```ignore
//! struct Wall { wide: bool }
//!
//! enum Msg { Viewport(u32) }
//!
//! impl Model for Wall {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Viewport(width) => { self.wide = width >= 600; Cmd::none() }
//!         }
//!     }
//!
//!     fn view(&self) -> Node {
//!         // Build the element tree from the current state
//!     }
//! }
//! ```

use std::time::Duration;

use cardwall_core::Event;
use cardwall_dom::Node;

use crate::subscription::{Subscription, SubscriptionManager};

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state. Must be
    /// convertible from runtime events.
    type Message: From<Event> + Send + 'static;

    /// Initialize the model with startup commands.
    ///
    /// Called once before the first pass renders.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::None
    }

    /// Update the model in response to a message.
    ///
    /// The core state transition function. Returns commands for side
    /// effects.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to an element tree.
    fn view(&self) -> Node;

    /// Declare active subscriptions.
    ///
    /// Called at activation and after each update. The runtime compares
    /// the returned set (by `SubId`) against what is running and starts
    /// or stops subscriptions to match. The default is no subscriptions.
    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        vec![]
    }
}

/// Commands for side effects returned from `init`/`update`.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Stop the program after the current cycle.
    Quit,
    /// Feed a message back into the model.
    Msg(M),
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Emit a log line through the runtime's logger.
    Log(String),
}

impl<M> Cmd<M> {
    /// No operation.
    #[must_use]
    pub const fn none() -> Self {
        Cmd::None
    }

    /// Stop the program.
    #[must_use]
    pub const fn quit() -> Self {
        Cmd::Quit
    }

    /// Feed a message back into the model.
    #[must_use]
    pub fn msg(msg: M) -> Self {
        Cmd::Msg(msg)
    }

    /// Execute commands in order.
    #[must_use]
    pub fn batch(cmds: impl IntoIterator<Item = Cmd<M>>) -> Self {
        Cmd::Batch(cmds.into_iter().collect())
    }

    /// Emit a log line.
    #[must_use]
    pub fn log(line: impl Into<String>) -> Self {
        Cmd::Log(line.into())
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
        }
    }
}

/// Receives each rendered pass.
pub trait PassSink {
    /// Called once per pass with the 1-based pass number and the tree.
    fn emit(&mut self, pass: u32, tree: &Node);
}

/// Sink that collects each pass as markup. Test and demo helper.
#[derive(Debug, Default)]
pub struct CollectSink {
    /// Markup of each pass, in order.
    pub passes: Vec<String>,
}

impl CollectSink {
    /// An empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PassSink for CollectSink {
    fn emit(&mut self, _pass: u32, tree: &Node) {
        self.passes.push(tree.to_markup());
    }
}

/// Program run limits.
#[derive(Debug, Clone, Copy)]
pub struct ProgramConfig {
    /// Maximum number of passes to render before stopping.
    pub max_passes: u32,
    /// How long to wait for a subscription message before deciding the
    /// program has settled.
    pub settle: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            max_passes: 8,
            settle: Duration::from_millis(250),
        }
    }
}

/// Drives a model through its passes.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
}

impl<M: Model> Program<M> {
    /// Create a program with default limits.
    pub fn new(model: M) -> Self {
        Self::with_config(model, ProgramConfig::default())
    }

    /// Create a program with explicit limits.
    pub fn with_config(model: M, config: ProgramConfig) -> Self {
        Self { model, config }
    }

    /// Borrow the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the program, returning the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Run to completion, emitting each pass into `sink`.
    ///
    /// Returns the number of passes rendered. The program stops when a
    /// command quits it, when `max_passes` is reached, or when no
    /// subscription message arrives within the settle window.
    pub fn run(&mut self, sink: &mut dyn PassSink) -> u32 {
        let mut quit = false;

        let init_cmd = self.model.init();
        self.apply(init_cmd, &mut quit);

        // Pass 1 renders before any subscription starts: this markup can
        // never observe the viewport signal.
        let mut last = self.model.view();
        let mut passes = 1;
        sink.emit(passes, &last);
        tracing::debug!(pass = passes, "initial pass rendered");

        if quit || passes >= self.config.max_passes {
            return passes;
        }

        // Activation: start the declared subscriptions.
        let mut manager = SubscriptionManager::new();
        manager.reconcile(self.model.subscriptions());
        if manager.active_count() == 0 {
            tracing::debug!("no subscriptions declared; settled after one pass");
            return passes;
        }

        while !quit && passes < self.config.max_passes {
            let Some(msg) = manager.recv_timeout(self.config.settle) else {
                tracing::debug!(passes, "settled: no message within window");
                break;
            };
            let cmd = self.model.update(msg);
            self.apply(cmd, &mut quit);

            // Coalesce whatever else is already queued into this cycle.
            for msg in manager.drain_messages() {
                let cmd = self.model.update(msg);
                self.apply(cmd, &mut quit);
            }

            manager.reconcile(self.model.subscriptions());

            let tree = self.model.view();
            if tree != last {
                passes += 1;
                sink.emit(passes, &tree);
                tracing::debug!(pass = passes, "re-rendered");
                last = tree;
            }
        }

        manager.stop_all();
        passes
    }

    fn apply(&mut self, cmd: Cmd<M::Message>, quit: &mut bool) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => *quit = true,
            Cmd::Msg(msg) => {
                let next = self.model.update(msg);
                self.apply(next, quit);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.apply(cmd, quit);
                }
            }
            Cmd::Log(line) => tracing::info!("{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::{StopSignal, SubId};
    use cardwall_dom::Element;
    use std::sync::mpsc;

    struct Counter {
        count: u32,
        subs: Vec<u32>,
    }

    enum Msg {
        Add(u32),
        Noise,
        Quit,
    }

    impl From<Event> for Msg {
        fn from(event: Event) -> Self {
            match event {
                Event::ViewportResized { width, .. } => Msg::Add(width),
                Event::Tick => Msg::Noise,
                Event::Quit => Msg::Quit,
            }
        }
    }

    impl Model for Counter {
        type Message = Msg;

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Add(n) => {
                    self.count += n;
                    Cmd::none()
                }
                Msg::Noise => Cmd::none(),
                Msg::Quit => Cmd::quit(),
            }
        }

        fn view(&self) -> Node {
            Element::new("div").text(self.count.to_string()).into()
        }

        fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
            self.subs
                .iter()
                .map(|&n| Box::new(SendOnce(n)) as Box<dyn Subscription<Msg>>)
                .collect()
        }
    }

    /// Sends one Add(n) message, then idles until stopped.
    struct SendOnce(u32);

    impl Subscription<Msg> for SendOnce {
        fn id(&self) -> SubId {
            u64::from(self.0)
        }

        fn run(&self, sender: mpsc::Sender<Msg>, stop: StopSignal) {
            let _ = sender.send(Msg::Add(self.0));
            while !stop.wait_timeout(Duration::from_millis(10)) {}
        }
    }

    fn fast_config() -> ProgramConfig {
        ProgramConfig {
            max_passes: 8,
            settle: Duration::from_millis(50),
        }
    }

    #[test]
    fn no_subscriptions_renders_one_pass() {
        let mut program = Program::with_config(
            Counter {
                count: 0,
                subs: vec![],
            },
            fast_config(),
        );
        let mut sink = CollectSink::new();
        let passes = program.run(&mut sink);
        assert_eq!(passes, 1);
        assert_eq!(sink.passes, vec!["<div>0</div>"]);
    }

    #[test]
    fn subscription_message_triggers_second_pass() {
        let mut program = Program::with_config(
            Counter {
                count: 0,
                subs: vec![5],
            },
            fast_config(),
        );
        let mut sink = CollectSink::new();
        let passes = program.run(&mut sink);
        assert_eq!(passes, 2);
        assert_eq!(sink.passes, vec!["<div>0</div>", "<div>5</div>"]);
    }

    #[test]
    fn unchanged_tree_is_not_re_emitted() {
        struct Static;
        impl Model for Static {
            type Message = Msg;
            fn update(&mut self, _msg: Msg) -> Cmd<Msg> {
                Cmd::none()
            }
            fn view(&self) -> Node {
                Element::new("div").into()
            }
            fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
                vec![Box::new(SendOnce(1))]
            }
        }

        let mut program = Program::with_config(Static, fast_config());
        let mut sink = CollectSink::new();
        // The message arrives but the rendered tree is identical.
        let passes = program.run(&mut sink);
        assert_eq!(passes, 1);
    }

    #[test]
    fn init_messages_apply_before_first_pass() {
        struct Seeded(Counter);
        impl Model for Seeded {
            type Message = Msg;
            fn init(&mut self) -> Cmd<Msg> {
                Cmd::batch([Cmd::msg(Msg::Add(3)), Cmd::log("seeded")])
            }
            fn update(&mut self, msg: Msg) -> Cmd<Msg> {
                self.0.update(msg)
            }
            fn view(&self) -> Node {
                self.0.view()
            }
        }

        let mut program = Program::with_config(
            Seeded(Counter {
                count: 0,
                subs: vec![],
            }),
            fast_config(),
        );
        let mut sink = CollectSink::new();
        program.run(&mut sink);
        assert_eq!(sink.passes, vec!["<div>3</div>"]);
    }

    #[test]
    fn quit_from_init_stops_after_first_pass() {
        struct Quitter;
        impl Model for Quitter {
            type Message = Msg;
            fn init(&mut self) -> Cmd<Msg> {
                Cmd::quit()
            }
            fn update(&mut self, _msg: Msg) -> Cmd<Msg> {
                Cmd::none()
            }
            fn view(&self) -> Node {
                Element::new("div").into()
            }
            fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
                vec![Box::new(SendOnce(1))]
            }
        }

        let mut program = Program::with_config(Quitter, fast_config());
        let mut sink = CollectSink::new();
        assert_eq!(program.run(&mut sink), 1);
    }

    #[test]
    fn max_passes_caps_renders() {
        let mut program = Program::with_config(
            Counter {
                count: 0,
                subs: vec![1, 2, 3, 4],
            },
            ProgramConfig {
                max_passes: 2,
                settle: Duration::from_millis(50),
            },
        );
        let mut sink = CollectSink::new();
        let passes = program.run(&mut sink);
        assert!(passes <= 2);
    }

    #[test]
    fn custom_sink_receives_pass_numbers() {
        struct Numbered(Vec<(u32, String)>);
        impl PassSink for Numbered {
            fn emit(&mut self, pass: u32, tree: &Node) {
                self.0.push((pass, tree.to_markup()));
            }
        }

        let mut program = Program::with_config(
            Counter {
                count: 7,
                subs: vec![],
            },
            fast_config(),
        );
        let mut sink = Numbered(Vec::new());
        program.run(&mut sink);
        assert_eq!(sink.0, vec![(1, "<div>7</div>".to_string())]);
    }

    #[test]
    fn into_model_returns_final_state() {
        let mut program = Program::with_config(
            Counter {
                count: 0,
                subs: vec![9],
            },
            fast_config(),
        );
        let mut sink = CollectSink::new();
        program.run(&mut sink);
        assert_eq!(program.into_model().count, 9);
    }

    #[test]
    fn cmd_debug_names_variants() {
        let cmd: Cmd<u32> = Cmd::batch([Cmd::msg(1), Cmd::quit()]);
        let s = format!("{cmd:?}");
        assert!(s.contains("Batch"));
        assert!(s.contains("Quit"));
    }
}
