//! Help article data model
//!
//! An [`Article`] is a titled, ordered collection of sections; sections render
//! in the given order and are never reordered or deduplicated. The body of a
//! section is a closed set of shapes ([`SectionBody`]): the renderer dispatch
//! over it is exhaustive, not open extension.

/// A titled, ordered collection of help sections.
#[derive(Debug, Clone, Default)]
pub struct Article {
    /// Optional article title (root banner or command name)
    pub title: Option<String>,
    /// Sections, rendered in order
    pub sections: Vec<Section>,
}

impl Article {
    /// Create an article with the given title and no sections.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            sections: Vec::new(),
        }
    }

    /// Append a section, preserving insertion order.
    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

/// One labeled block of help content.
#[derive(Debug, Clone)]
pub struct Section {
    /// Section heading (non-empty); case styling is applied per target
    pub heading: String,
    /// Section kind tag
    pub kind: SectionKind,
    /// Section body
    pub body: SectionBody,
}

impl Section {
    /// Prose section from a single string.
    #[must_use]
    pub fn prose(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Plain,
            body: SectionBody::Prose(body.into()),
        }
    }

    /// Prose section from ordered lines, joined with newline before wrapping.
    #[must_use]
    pub fn lines(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Plain,
            body: SectionBody::ProseLines(lines),
        }
    }

    /// List section from label/description entries.
    #[must_use]
    pub fn list(heading: impl Into<String>, entries: Vec<ListEntry>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Plain,
            body: SectionBody::List(entries),
        }
    }

    /// Code section; Markdown output wraps it in a shell-session fence.
    #[must_use]
    pub fn code(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Code,
            body: SectionBody::ProseLines(lines),
        }
    }
}

/// Section kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionKind {
    /// Regular help content
    #[default]
    Plain,
    /// Shell-session content (example invocations)
    Code,
}

/// Section body shapes.
///
/// Closed set: every renderer matches all three variants.
#[derive(Debug, Clone)]
pub enum SectionBody {
    /// A single prose string
    Prose(String),
    /// Ordered prose lines, joined with newline before wrapping
    ProseLines(Vec<String>),
    /// Ordered label/description pairs laid out by the column engine
    List(Vec<ListEntry>),
}

/// One label/description pair of a list section.
///
/// Either side may be absent; an entry with both sides absent renders to
/// nothing at all.
#[derive(Debug, Clone, Default)]
pub struct ListEntry {
    /// Left column content
    pub label: Option<String>,
    /// Right column content
    pub description: Option<String>,
}

impl ListEntry {
    /// Entry with both label and description.
    #[must_use]
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            description: Some(description.into()),
        }
    }

    /// Header-style entry with a label only.
    #[must_use]
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            description: None,
        }
    }
}
