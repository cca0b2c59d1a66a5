//! UI helpers for CLI display.

use console::style;

/// How a printed result should read at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Within the healthy range.
    Ok,
    /// Outside the healthy range.
    Attention,
}

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print an evaluation result.
pub fn print_result(text: &str, tone: Tone) {
    match (tone, is_color_disabled()) {
        (Tone::Ok, true) => println!("[OK] {text}"),
        (Tone::Attention, true) => println!("[!!] {text}"),
        (Tone::Ok, false) => println!("{} {text}", style("[OK]").green().bold()),
        (Tone::Attention, false) => println!("{} {text}", style("[!!]").yellow().bold()),
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
