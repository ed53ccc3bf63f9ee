#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via `CARDWALL_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Cardwall Demo: two render passes, one late viewport signal

USAGE:
    cardwall-demo [OPTIONS]

OPTIONS:
    --items=FILE     Load items from a JSON array of {title, body} records
    --width=PX       Scripted viewport width in pixels (default: 1024)
    --no-viewport    Run with no viewport signal source at all
    --terminal       Measure the real terminal's pixel size instead
    --css            Also print the generated stylesheet
    --passes=N       Maximum render passes (default: 4)
    --settle-ms=N    Settle window in milliseconds (default: 250)
    --no-preview     Skip the boxed terminal preview of each pass
    --help, -h       Show this help message
    --version, -V    Show version

The first pass always renders before the viewport signal can be observed,
so it never carries CardLarge. If the signal then resolves at or above
600px, the first card gains CardLarge in a second pass.

ENVIRONMENT VARIABLES:
    CARDWALL_ITEMS       Override --items
    CARDWALL_WIDTH       Override --width
    CARDWALL_PASSES      Override --passes
    CARDWALL_SETTLE_MS   Override --settle-ms";

/// Where viewport measurements come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    /// A scripted, fixed width.
    Scripted,
    /// No signal source at all.
    Absent,
    /// The real terminal's reported pixel size.
    Terminal,
}

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Path to a JSON item file, if any.
    pub items: Option<String>,
    /// Scripted viewport width in pixels.
    pub width: u32,
    /// Selected measurement source.
    pub probe: ProbeKind,
    /// Whether to print the generated stylesheet.
    pub css: bool,
    /// Maximum render passes.
    pub passes: u32,
    /// Settle window in milliseconds.
    pub settle_ms: u64,
    /// Whether to print the boxed preview.
    pub preview: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            items: None,
            width: 1024,
            probe: ProbeKind::Scripted,
            css: false,
            passes: 4,
            settle_ms: 250,
            preview: true,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("CARDWALL_ITEMS") {
            opts.items = Some(val);
        }
        if let Ok(val) = env::var("CARDWALL_WIDTH")
            && let Ok(width) = val.parse()
        {
            opts.width = width;
        }
        if let Ok(val) = env::var("CARDWALL_PASSES")
            && let Ok(passes) = val.parse()
        {
            opts.passes = passes;
        }
        if let Ok(val) = env::var("CARDWALL_SETTLE_MS")
            && let Ok(ms) = val.parse()
        {
            opts.settle_ms = ms;
        }

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("cardwall-demo {VERSION}");
                    process::exit(0);
                }
                "--no-viewport" => opts.probe = ProbeKind::Absent,
                "--terminal" => opts.probe = ProbeKind::Terminal,
                "--css" => opts.css = true,
                "--no-preview" => opts.preview = false,
                _ => {
                    if let Some(value) = arg.strip_prefix("--items=") {
                        opts.items = Some(value.to_string());
                    } else if let Some(value) = arg.strip_prefix("--width=") {
                        opts.width = parse_or_exit(value, "--width");
                    } else if let Some(value) = arg.strip_prefix("--passes=") {
                        opts.passes = parse_or_exit(value, "--passes");
                    } else if let Some(value) = arg.strip_prefix("--settle-ms=") {
                        opts.settle_ms = parse_or_exit(value, "--settle-ms");
                    } else {
                        eprintln!("unknown option: {arg}");
                        eprintln!("try --help");
                        process::exit(2);
                    }
                }
            }
        }

        opts
    }
}

fn parse_or_exit<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("invalid value for {flag}: {value}");
        process::exit(2);
    })
}
