// src/cli/colors.rs
//! ANSI color helpers for the terminal chat

/// ANSI escape codes
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Carriage return + erase line
    pub const CLEAR_LINE: &str = "\r\x1b[2K";
}

use ansi::*;

/// Bot speaker label (cyan, bold)
pub fn bot_label(name: &str) -> String {
    format!("{}{}{}{}", BOLD, CYAN, name, RESET)
}

/// Limit notice title (yellow, bold)
pub fn limit_title(title: &str) -> String {
    format!("{}{}{}{}", BOLD, YELLOW, title, RESET)
}

/// Error notice title (red, bold)
pub fn error_title(title: &str) -> String {
    format!("{}{}{}{}", BOLD, RED, title, RESET)
}

/// Secondary text (dim)
pub fn dim(text: &str) -> String {
    format!("{}{}{}", DIM, text, RESET)
}

/// Status line (gray)
pub fn status(text: &str) -> String {
    format!("{}{}{}", GRAY, text, RESET)
}
