//! Astral-style CLI output formatting.
//!
//! Every printer goes through [`emit`], which decides between three modes:
//! JSON (one `{"type", "payload"}` object per line), quiet (suppressed) and
//! human (colored, indented text). Colors follow `--color` through
//! owo-colors' global override.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level from repeated `-v`.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    *cell().read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *cell().write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Whether a line survives `--quiet`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Normal,
    Always,
}

/// Route one output event to JSON, nowhere, or the `human` printer.
fn emit(kind: &str, payload: Value, level: Level, human: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if level == Level::Always || !config.quiet {
        human();
    }
}

#[derive(Clone, Copy)]
enum Style {
    Bold,
    Dim,
    Green,
    Cyan,
    Yellow,
    Red,
}

/// Apply `style` when `stream` supports color (or `--color always`).
fn paint(stream: Stream, value: impl Display, style: Style) -> String {
    let value = value.to_string();
    match style {
        Style::Bold => value.if_supports_color(stream, |v| v.bold()).to_string(),
        Style::Dim => value.if_supports_color(stream, |v| v.dimmed()).to_string(),
        Style::Green => value.if_supports_color(stream, |v| v.green()).to_string(),
        Style::Cyan => value.if_supports_color(stream, |v| v.cyan()).to_string(),
        Style::Yellow => value.if_supports_color(stream, |v| v.yellow()).to_string(),
        Style::Red => value.if_supports_color(stream, |v| v.red()).to_string(),
    }
}

/// Print the application name and version.
pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "edgematch", "version": version }),
        Level::Normal,
        || {
            println!(
                "{} {}",
                paint(Stream::Stdout, "edgematch", Style::Bold),
                paint(Stream::Stdout, version, Style::Dim)
            );
            println!();
        },
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        Level::Normal,
        || {
            let label = format!("{label:<24}");
            println!("  {} {value}", paint(Stream::Stdout, label, Style::Dim));
        },
    );
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), Level::Normal, || {
        println!("  {} {message}", paint(Stream::Stdout, "✓", Style::Green));
    });
}

/// Print a warning. Shown even in quiet mode.
pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), Level::Always, || {
        println!("  {} {message}", paint(Stream::Stdout, "⚠", Style::Yellow));
    });
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), Level::Normal, || {
        println!();
        println!("{}", paint(Stream::Stdout, title, Style::Bold));
    });
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), Level::Normal, || {
        println!("  {}", paint(Stream::Stdout, message, Style::Dim));
    });
}

pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), Level::Normal, || {
        println!("  {} {message}", paint(Stream::Stdout, "hint:", Style::Cyan));
    });
}

/// Print pre-rendered multi-line content (e.g. a table), indented.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), Level::Normal, || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Print a complete JSON document on its own line.
pub fn json_output(value: Value) {
    println!("{value}");
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a progress spinner on stderr.
///
/// Hidden in JSON and quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let config = current();
    let pb = if config.json || config.quiet {
        ProgressBar::hidden()
    } else {
        let base = ProgressStyle::default_spinner().tick_strings(BRAILLE_SPINNER);
        let style = base
            .clone()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or(base);
        let pb = ProgressBar::new_spinner().with_style(style);
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };
    pb.set_message(message.to_string());
    pb
}

pub fn spinner_success(pb: &ProgressBar, message: &str) {
    finish(pb, paint(Stream::Stderr, "✓", Style::Green), message);
}

pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    finish(pb, paint(Stream::Stderr, "×", Style::Red), message);
}

fn finish(pb: &ProgressBar, mark: String, message: &str) {
    if pb.is_hidden() {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{mark} {message}"));
    }
}

/// Green in human mode, plain in JSON mode.
pub fn positive(value: impl Display) -> String {
    inline(value, Style::Green)
}

/// Cyan in human mode, plain in JSON mode.
pub fn highlight(value: impl Display) -> String {
    inline(value, Style::Cyan)
}

fn inline(value: impl Display, style: Style) -> String {
    if is_json() {
        value.to_string()
    } else {
        paint(Stream::Stdout, value, style)
    }
}
