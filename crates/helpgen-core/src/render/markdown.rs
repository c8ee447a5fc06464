//! Markdown article renderer
//!
//! Renders an article as a Markdown document against a fixed column budget so
//! the same article produces identical bytes regardless of the current
//! terminal. Markdown cannot render color: every string is de-styled before
//! it reaches the output.

use crate::article::{Article, ListEntry, Section, SectionBody, SectionKind};
use crate::layout::{display_width, render_list, strip_ansi, wrap, ListOptions};
use crate::template::TemplateContext;

/// Fixed column budget for Markdown output.
pub const MARKDOWN_WIDTH: usize = 100;

/// Margin subtracted from the budget for section content.
const MARGIN: usize = 2;

/// Renderer for the Markdown surface
pub struct MarkdownRenderer<'a> {
    ctx: &'a TemplateContext,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a Markdown renderer.
    #[must_use]
    pub fn new(ctx: &'a TemplateContext) -> Self {
        Self { ctx }
    }

    /// Render the article, returning the final string.
    #[must_use]
    pub fn render(&self, article: &Article) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(title) = &article.title {
            let title = strip_ansi(&self.ctx.expand(title));
            let underline = "-".repeat(display_width(&title));
            parts.push(format!("{title}\n{underline}"));
        }

        for section in &article.sections {
            parts.push(self.render_section(section));
        }

        parts.join("\n\n")
    }

    fn render_section(&self, section: &Section) -> String {
        let heading = capitalize(&strip_ansi(&self.ctx.expand(&section.heading)));
        let heading = format!("**{heading}**");

        let body = match section.kind {
            SectionKind::Code => self.render_code_body(&section.body),
            SectionKind::Plain => self.render_body(&section.body),
        };

        if body.is_empty() {
            heading
        } else {
            format!("{heading}\n\n{body}")
        }
    }

    fn render_body(&self, body: &SectionBody) -> String {
        let width = MARKDOWN_WIDTH - MARGIN;
        match body {
            SectionBody::Prose(text) => self.render_prose(text, width),
            SectionBody::ProseLines(lines) => self.render_prose(&lines.join("\n"), width),
            SectionBody::List(entries) => {
                let rendered = self.render_entries(entries, width);
                if rendered.is_empty() {
                    rendered
                } else {
                    fence(&rendered, "")
                }
            }
        }
    }

    /// Shell-session sections are fenced regardless of body shape.
    fn render_code_body(&self, body: &SectionBody) -> String {
        let width = MARKDOWN_WIDTH - MARGIN;
        let content = match body {
            SectionBody::Prose(text) => {
                wrap(&strip_ansi(&self.ctx.expand(text)), width, false)
            }
            SectionBody::ProseLines(lines) => {
                wrap(&strip_ansi(&self.ctx.expand(&lines.join("\n"))), width, false)
            }
            SectionBody::List(entries) => self.render_entries(entries, width),
        };

        if content.is_empty() {
            content
        } else {
            fence(&content, "sh-session")
        }
    }

    fn render_prose(&self, text: &str, width: usize) -> String {
        wrap(strip_ansi(&self.ctx.expand(text)).trim_end(), width, true)
    }

    fn render_entries(&self, entries: &[ListEntry], width: usize) -> String {
        let entries: Vec<_> = entries.iter().map(|e| self.ctx.expand_entry(e)).collect();
        render_list(
            &entries,
            width,
            ListOptions {
                strip_styling: true,
                ..Default::default()
            },
        )
    }
}

/// Wrap content in a fenced code block, preserving its bytes.
fn fence(content: &str, info: &str) -> String {
    format!("```{info}\n{content}\n```")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::article::{ListEntry, Section};

    use super::*;

    #[test]
    fn title_gets_a_dash_underline_of_its_width() {
        let ctx = TemplateContext::default();
        let article = Article::new("mycli").section(Section::prose("description", "A tool."));
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert_eq!(output, "mycli\n-----\n\n**Description**\n\nA tool.");
    }

    #[test]
    fn styled_titles_are_measured_after_de_styling() {
        let ctx = TemplateContext::default();
        let article = Article::new("\x1b[1mmycli\x1b[0m");
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert_eq!(output, "mycli\n-----");
    }

    #[test]
    fn list_bodies_are_fenced_and_de_styled() {
        let ctx = TemplateContext::default();
        let article = Article::new("mycli").section(Section::list(
            "flags",
            vec![ListEntry::new("\x1b[1m--force\x1b[0m", "Overwrite existing files")],
        ));
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert!(output.contains("**Flags**\n\n```\n--force  Overwrite existing files\n```"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn code_sections_use_a_shell_session_fence() {
        let ctx = TemplateContext::default();
        let article = Article::new("mycli").section(Section::code(
            "examples",
            vec!["$ mycli deploy".to_string()],
        ));
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert!(output.contains("**Examples**\n\n```sh-session\n$ mycli deploy\n```"));
    }

    #[test]
    fn fenced_content_keeps_trailing_whitespace() {
        let ctx = TemplateContext::default();
        let article = Article::new("mycli")
            .section(Section::code("examples", vec!["$ mycli run  ".to_string()]));
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert!(output.contains("$ mycli run  \n```"));
    }

    #[test]
    fn empty_bodied_section_is_heading_only() {
        let ctx = TemplateContext::default();
        let article = Article::new("mycli").section(Section::prose("notes", ""));
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert_eq!(output, "mycli\n-----\n\n**Notes**");
    }

    #[test]
    fn prose_wraps_at_the_fixed_budget() {
        let ctx = TemplateContext::default();
        let long = "word ".repeat(40);
        let article = Article::new("mycli").section(Section::prose("description", long));
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert!(crate::layout::max_line_width(&output) <= MARKDOWN_WIDTH - MARGIN);
    }

    #[test]
    fn wide_title_underline_matches_display_width() {
        let ctx = TemplateContext::default();
        let article = Article::new("日本語");
        let output = MarkdownRenderer::new(&ctx).render(&article);
        assert_eq!(output, "日本語\n------");
    }
}
