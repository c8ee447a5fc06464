//! Terminal width lookup for screen rendering

/// Fallback width when the terminal size cannot be determined.
const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns.
///
/// Falls back to 80 columns when stdout is not attached to a terminal.
#[must_use]
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        _ => DEFAULT_WIDTH,
    }
}
