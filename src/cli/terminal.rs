//! Terminal capability detection and utilities

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Shortens `text` so that it fits the terminal after `used` columns.
///
/// Text is returned unchanged when the width is unknown.
pub fn truncate_to_width(text: &str, used: usize) -> String {
    let Some(width) = terminal_width() else {
        return text.to_string();
    };
    truncate(text, usize::from(width).saturating_sub(used))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut shortened: String = text.chars().take(max - 1).collect();
    shortened.push('…');
    shortened
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::truncate;

    #[test_case("Data Structures", 20, "Data Structures"; "fits")]
    #[test_case("Data Structures", 15, "Data Structures"; "exact fit")]
    #[test_case("Data Structures", 8, "Data St…"; "shortened")]
    #[test_case("Data Structures", 0, ""; "no room")]
    #[test_case("", 0, ""; "empty")]
    fn truncates(text: &str, max: usize, expected: &str) {
        assert_eq!(truncate(text, max), expected);
    }
}
