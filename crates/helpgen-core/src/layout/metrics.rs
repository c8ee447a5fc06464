//! ANSI-aware text measurement
//!
//! Input strings may carry ANSI styling sequences that occupy no terminal
//! columns. All width math in the layout engine goes through this module so
//! styling never skews column alignment.

use unicode_width::UnicodeWidthStr;

/// Strip ANSI escape codes from a string
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip escape sequence
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we hit a letter (the command character)
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Display width of a string in terminal columns.
///
/// Styling sequences count zero columns; East Asian wide characters count
/// two. Always returns a non-negative width, including for empty input.
#[must_use]
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Display width of the widest line in a possibly multi-line string.
#[must_use]
pub fn max_line_width(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}
