//! Screen article renderer
//!
//! Renders an article for a fixed-width terminal: styled title as-is,
//! emphasized upper-cased headings, section bodies indented by two columns.

use crate::article::{Article, Section, SectionBody};
use crate::layout::{indent, render_list, wrap, ListOptions};
use crate::template::TemplateContext;

use super::format::Style;

/// Columns of indentation applied to rendered section bodies.
const BODY_INDENT: usize = 2;

/// Renderer for the terminal surface
pub struct ScreenRenderer<'a> {
    width: usize,
    style: Style,
    ctx: &'a TemplateContext,
}

impl<'a> ScreenRenderer<'a> {
    /// Create a renderer for the given terminal width.
    #[must_use]
    pub fn new(width: usize, style: Style, ctx: &'a TemplateContext) -> Self {
        Self { width, style, ctx }
    }

    /// Render the article, returning the final string.
    ///
    /// The title keeps whatever styling it carries; sections are joined by a
    /// blank line, and an empty article renders to just the title.
    #[must_use]
    pub fn render(&self, article: &Article) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(title) = &article.title {
            parts.push(self.ctx.expand(title));
        }

        for section in &article.sections {
            parts.push(self.render_section(section));
        }

        parts.join("\n\n")
    }

    fn render_section(&self, section: &Section) -> String {
        let heading = self
            .style
            .bold(&self.ctx.expand(&section.heading).to_uppercase());
        let body = self.render_body(&section.body);

        if body.is_empty() {
            heading
        } else {
            format!("{heading}\n{}", indent(&body, BODY_INDENT))
        }
    }

    fn render_body(&self, body: &SectionBody) -> String {
        let width = self.width.saturating_sub(BODY_INDENT);
        match body {
            SectionBody::Prose(text) => wrap(self.ctx.expand(text).trim_end(), width, true),
            SectionBody::ProseLines(lines) => {
                wrap(self.ctx.expand(&lines.join("\n")).trim_end(), width, true)
            }
            SectionBody::List(entries) => {
                let entries: Vec<_> = entries.iter().map(|e| self.ctx.expand_entry(e)).collect();
                render_list(&entries, width, ListOptions::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::article::{ListEntry, Section};

    use super::*;

    fn renderer(ctx: &TemplateContext) -> ScreenRenderer<'_> {
        ScreenRenderer::new(80, Style::new(false), ctx)
    }

    #[test]
    fn headings_are_upper_cased_and_bodies_indented() {
        let ctx = TemplateContext::default();
        let article = Article::new("tool").section(Section::prose("description", "A tool."));
        let output = renderer(&ctx).render(&article);
        assert_eq!(output, "tool\n\nDESCRIPTION\n  A tool.");
    }

    #[test]
    fn empty_article_renders_just_the_title() {
        let ctx = TemplateContext::default();
        let output = renderer(&ctx).render(&Article::new("tool"));
        assert_eq!(output, "tool");
    }

    #[test]
    fn empty_bodied_section_contributes_only_its_heading() {
        let ctx = TemplateContext::default();
        let article = Article::new("tool").section(Section::prose("flags", ""));
        let output = renderer(&ctx).render(&article);
        assert_eq!(output, "tool\n\nFLAGS");
    }

    #[test]
    fn prose_lines_are_joined_before_wrapping() {
        let ctx = TemplateContext::default();
        let article = Article::new("tool").section(Section::lines(
            "notes",
            vec!["first line".to_string(), "second line".to_string()],
        ));
        let output = renderer(&ctx).render(&article);
        assert_eq!(output, "tool\n\nNOTES\n  first line\n  second line");
    }

    #[test]
    fn list_bodies_go_through_the_column_engine() {
        let ctx = TemplateContext::default();
        let article = Article::new("tool").section(Section::list(
            "flags",
            vec![
                ListEntry::new("-f, --force", "Overwrite existing files"),
                ListEntry::new("-q", "quiet"),
            ],
        ));
        let output = renderer(&ctx).render(&article);
        assert_eq!(
            output,
            "tool\n\nFLAGS\n  -f, --force  Overwrite existing files\n\n  -q           quiet"
        );
    }

    #[test]
    fn styled_titles_are_preserved() {
        let ctx = TemplateContext::default();
        let article = Article::new("\x1b[1mtool\x1b[0m");
        let output = renderer(&ctx).render(&article);
        assert_eq!(output, "\x1b[1mtool\x1b[0m");
    }

    #[test]
    fn headings_are_emphasized_when_styling_is_enabled() {
        let ctx = TemplateContext::default();
        let article = Article::new("tool").section(Section::prose("usage", "tool run"));
        let output = ScreenRenderer::new(80, Style::new(true), &ctx).render(&article);
        assert!(output.contains("\x1b[1mUSAGE\x1b[0m"));
    }

    #[test]
    fn placeholders_expand_in_titles_and_bodies() {
        let mut ctx = TemplateContext::default();
        ctx.set("config.bin", "mycli");
        let article = Article::new("{{config.bin}}")
            .section(Section::prose("usage", "{{config.bin}} [COMMAND]"));
        let output = renderer(&ctx).render(&article);
        assert_eq!(output, "mycli\n\nUSAGE\n  mycli [COMMAND]");
    }
}
