//! Text-layout engine
//!
//! This module turns raw (possibly ANSI-styled, possibly multi-line) help
//! content into fixed-width text.
//!
//! # Architecture
//!
//! ```text
//! render_list → layout_compact ─┐
//!                 (overflow?)   ├→ String
//!               layout_stacked ─┘
//!                      ↓
//!                    wrap → display_width
//! ```
//!
//! All width math is in display columns: styling sequences count zero, wide
//! characters count two. The engine performs no I/O and never mutates its
//! inputs.

mod list;
mod metrics;
mod wrap;

pub use list::{render_list, ListOptions, MAX_COMPACT_LINES};
pub use metrics::{display_width, max_line_width, strip_ansi};
pub use wrap::{indent, wrap};
