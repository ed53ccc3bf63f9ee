#![forbid(unsafe_code)]

//! Cardwall demo binary entry point.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use cardwall_core::{Item, parse_items};
use cardwall_demo::app::{SAMPLE_ITEMS, WallModel};
use cardwall_demo::cli::{Opts, ProbeKind};
use cardwall_demo::preview;
use cardwall_dom::Node;
use cardwall_runtime::{
    FixedProbe, PassSink, Program, ProgramConfig, TerminalProbe, UnavailableProbe, ViewportProbe,
};
use cardwall_style::StyleSheet;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let items = match load_items(&opts) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Failed to load items: {e}");
            std::process::exit(1);
        }
    };

    let probe: Arc<dyn ViewportProbe> = match opts.probe {
        ProbeKind::Scripted => Arc::new(FixedProbe::new(opts.width, opts.width * 3 / 4)),
        ProbeKind::Absent => Arc::new(UnavailableProbe),
        ProbeKind::Terminal => Arc::new(TerminalProbe),
    };

    let config = ProgramConfig {
        max_passes: opts.passes,
        settle: Duration::from_millis(opts.settle_ms),
    };

    if opts.css {
        println!("/* generated stylesheet */");
        println!("{}", StyleSheet::card_defaults().css());
    }

    let mut program = Program::with_config(WallModel::new(items, probe), config);
    let mut sink = PrintSink {
        preview: opts.preview,
    };
    let passes = program.run(&mut sink);

    let viewport = program.model().viewport();
    match viewport.width() {
        Some(width) => println!(
            "{passes} pass(es); viewport resolved at {width}px ({})",
            if viewport.is_wide() { "wide" } else { "narrow" }
        ),
        None => println!("{passes} pass(es); viewport signal never resolved"),
    }
}

/// Prints each pass as markup, with an optional boxed preview.
struct PrintSink {
    preview: bool,
}

impl PassSink for PrintSink {
    fn emit(&mut self, pass: u32, tree: &Node) {
        println!("── pass {pass} ──");
        println!("{}", tree.to_markup());
        if self.preview {
            print!("{}", preview::render_pass(tree));
        }
        println!();
    }
}

fn load_items(opts: &Opts) -> Result<Vec<Item>, Box<dyn std::error::Error>> {
    match &opts.items {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(parse_items(&json)?)
        }
        None => Ok(parse_items(SAMPLE_ITEMS)?),
    }
}
