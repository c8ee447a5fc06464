//! helpgen-core: Core library for helpgen
//!
//! This crate provides the core functionality for `helpgen`, a renderer that
//! turns structured help articles into terminal or Markdown output.
//!
//! # Architecture
//!
//! ```text
//! Config (command catalog) → Article Builder → Article
//!                                                 ↓
//!                            Screen / Markdown Renderer
//!                                                 ↓
//!                     Column Layout Engine → Wrapper → Text Metrics
//! ```
//!
//! # Modules
//!
//! - `article`: help article data model
//! - `articles`: article builders over the command catalog
//! - `catalog`: command metadata and help-subject resolution
//! - `config`: configuration management
//! - `layout`: the text-layout engine (column layout, wrapping, metrics)
//! - `render`: screen and Markdown article renderers
//! - `template`: `{{config.*}}` placeholder substitution
//! - `term`: terminal width lookup
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod article;
pub mod articles;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod render;
pub mod template;
pub mod term;

pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
