//! Article renderers for the supported help surfaces
//!
//! This module provides consistent rendering of help articles across the
//! supported target surfaces.
//!
//! # Architecture
//!
//! ```text
//! Article → Renderer (screen | markdown) → String
//!                    ↓
//!          HelpFormat (screen/markdown/man)
//! ```
//!
//! # Surfaces
//!
//! - `screen`: fixed-width terminal output, styled when appropriate
//! - `markdown`: reproducible document output at a fixed column budget
//! - `man`: alias surface, renders as screen
//!
//! Renderers produce a single string and perform no I/O; writing the result
//! to a terminal or file is the caller's concern.

mod format;
mod markdown;
mod screen;

pub use format::{color_enabled, colors, HelpFormat, RenderOptions, Style};
pub use markdown::{MarkdownRenderer, MARKDOWN_WIDTH};
pub use screen::ScreenRenderer;

use crate::article::Article;
use crate::template::TemplateContext;
use crate::term;

/// Render an article for the requested format.
///
/// Screen and man output consult the current terminal width and environment
/// styling; Markdown output is independent of both.
#[must_use]
pub fn render_article(article: &Article, ctx: &TemplateContext, opts: &RenderOptions) -> String {
    match opts.format {
        HelpFormat::Screen | HelpFormat::Man => {
            ScreenRenderer::new(term::terminal_width(), Style::detect(), ctx).render(article)
        }
        HelpFormat::Markdown => MarkdownRenderer::new(ctx).render(article),
    }
}
