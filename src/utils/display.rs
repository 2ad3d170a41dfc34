//! Terminal display utilities for robust CLI output formatting.
//!
//! Handles different screen sizes and Unicode text when rendering document
//! tables.

use std::sync::OnceLock;
use terminal_size::terminal_size;

/// Default width when terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 100;

static TERMINAL_WIDTH: OnceLock<usize> = OnceLock::new();

/// Get the current terminal width in characters, cached on first call.
pub fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| {
        terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(DEFAULT_WIDTH)
    })
}

/// Truncate text to fit within the specified width using unicode-aware
/// truncation, appending an ellipsis if truncation occurred.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    // unicode-width handles wide characters properly
    let char_widths: Vec<(char, usize)> = text
        .chars()
        .map(|c| (c, unicode_width::UnicodeWidthChar::width(c).unwrap_or(1)))
        .collect();

    let total_width: usize = char_widths.iter().map(|(_, w)| *w).sum();

    if total_width <= max_width {
        return text.to_string();
    }

    let mut current_width = 0;
    let mut end_idx = 0;

    for (i, (_c, w)) in char_widths.iter().enumerate() {
        if current_width + w > max_width.saturating_sub(3) {
            // 3 chars reserved for the ellipsis
            break;
        }
        current_width += w;
        end_idx = i + 1;
    }

    if end_idx == 0 {
        return "...".to_string();
    }

    let truncated: String = char_widths[..end_idx].iter().map(|(c, _)| *c).collect();
    format!("{}...", truncated)
}
