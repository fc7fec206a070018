// Rust guideline compliant 2026-10-16

//! AFU-9 CLI library.
//!
//! This library exposes the CLI modules for use in the `afu9` binary and in tests.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color, wrap_text};
