// Rust guideline compliant 2026-10-16

//! Terminal UI utilities for the AFU-9 CLI.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns, or 80 if it cannot be determined.
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - Columns reserved to the left of the text
///
/// # Returns
/// The wrapped text, with continuation lines indented by `indent` spaces
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, indent, get_terminal_width())
}

fn wrap_to_width(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);
    if available_width < 10 {
        return text.to_string();
    }

    let indent_str = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > available_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(&format!("\n{}", indent_str))
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to color the prefix
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("✗", Color::Red, message, use_color);
}

/// Prints a warning message.
pub fn print_warning(message: &str, use_color: bool) {
    print_status("⚠", Color::Yellow, message, use_color);
}
