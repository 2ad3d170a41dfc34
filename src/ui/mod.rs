//! CLI UI utilities for terminal output.
//!
//! Colored status lines, subject icons, and number formatting for the
//! document tables.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::models::Subject;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Icons for the subject areas.
pub fn subject_icon(subject: Subject) -> &'static str {
    match subject {
        Subject::ComputerScience => "💻",
        Subject::Engineering => "⚙️",
        Subject::Medicine => "🏥",
        Subject::Physics => "⚛️",
        Subject::Chemistry => "🧪",
        Subject::Biology => "🧬",
        Subject::Mathematics => "📐",
        Subject::Management => "📊",
        Subject::SocialSciences => "🌍",
        Subject::Literature => "📖",
    }
}

/// Format a metric with thousands separators ("15420" -> "15,420").
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Print a bold section header, colored when stdout is a terminal.
pub fn section(title: &str) {
    if is_terminal() {
        println!("{}", title.bold().cyan());
    } else {
        println!("{title}");
    }
}

/// Print an error line to stderr, colored when stderr is a terminal.
pub fn error_line(message: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "✗".red().bold(), message);
    } else {
        eprintln!("✗ {message}");
    }
}

/// Print an informational line, dimmed when stdout is a terminal.
pub fn info_line(message: &str) {
    if is_terminal() {
        println!("{}", message.dimmed());
    } else {
        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(15420), "15,420");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_subject_icons_are_distinct_enough() {
        // Every subject renders some icon.
        for subject in Subject::ALL {
            assert!(!subject_icon(subject).is_empty());
        }
    }
}
