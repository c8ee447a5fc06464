//! Help format selection and ANSI styling
//!
//! Handles the target-surface choice for rendered help and the conditional
//! ANSI styling used by the screen renderer.

use std::io::IsTerminal;
use std::str::FromStr;

/// Target surface for rendered help
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HelpFormat {
    /// Fixed-width terminal screen
    #[default]
    Screen,
    /// Markdown document with a fixed column budget
    Markdown,
    /// Manual page; renders identically to screen output
    Man,
}

impl HelpFormat {
    /// Parse format from string argument.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_str(s).ok()
    }

    /// Check if this format may carry ANSI styling
    ///
    /// Markdown cannot render color; its output is always de-styled.
    #[must_use]
    pub fn supports_styling(&self) -> bool {
        match self {
            Self::Screen | Self::Man => true,
            Self::Markdown => false,
        }
    }
}

impl FromStr for HelpFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "screen" => Ok(Self::Screen),
            "markdown" | "md" => Ok(Self::Markdown),
            "man" => Ok(Self::Man),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for HelpFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Screen => write!(f, "screen"),
            Self::Markdown => write!(f, "markdown"),
            Self::Man => write!(f, "man"),
        }
    }
}

/// Render options passed alongside an article
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Target surface, fixed for the duration of one render call
    pub format: HelpFormat,
    /// Include hidden commands and flags. Consumed by the article builders,
    /// passed through untouched by the layout engine.
    pub all: bool,
}

/// Check whether styled screen output is appropriate for the environment
///
/// Checks (in order):
/// 1. `NO_COLOR` environment variable (forces plain)
/// 2. TTY detection (styled if stdout is a terminal)
#[must_use]
pub fn color_enabled() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// =============================================================================
// ANSI Color Constants
// =============================================================================

/// ANSI escape codes for terminal styling
#[allow(dead_code)]
pub mod colors {
    /// Reset all formatting
    pub const RESET: &str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &str = "\x1b[1m";
    /// Dim text
    pub const DIM: &str = "\x1b[2m";
    /// Underline text
    pub const UNDERLINE: &str = "\x1b[4m";
}

/// Style helper for conditional ANSI formatting
#[derive(Debug, Clone, Copy)]
pub struct Style {
    enabled: bool,
}

impl Style {
    /// Create a new style helper
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a style helper from the current environment
    #[must_use]
    pub fn detect() -> Self {
        Self::new(color_enabled())
    }

    /// Wrap text in the given ANSI code
    #[must_use]
    pub fn apply(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }

    /// Make text bold
    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        self.apply(colors::BOLD, text)
    }

    /// Make text dim
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        self.apply(colors::DIM, text)
    }
}
