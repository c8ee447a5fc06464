//! Two-column list layout with stacked fallback
//!
//! Lays out label/description pairs either as a compact aligned table or, when
//! any description wraps past [`MAX_COMPACT_LINES`] lines, as stacked blocks.
//! The fallback applies to the whole list: mixing modes row by row would break
//! the visual rhythm of the table.

use crate::article::ListEntry;

use super::metrics::{display_width, strip_ansi};
use super::wrap::{indent, wrap};

/// Wrapped-description line count past which compact layout is abandoned.
///
/// Tunable heuristic; nothing in the layout math depends on this exact value.
pub const MAX_COMPACT_LINES: usize = 4;

/// Gap between the label column and the description column.
const COLUMN_GAP: usize = 2;

/// Indent for stacked-mode description blocks.
const STACKED_INDENT: usize = 4;

/// Options for list layout
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Always use the stacked layout, never attempt compact.
    pub force_multiline: bool,
    /// Remove ANSI styling from labels and descriptions before layout.
    pub strip_styling: bool,
}

/// A resolved row: empty sides normalized to absent, styling already handled.
struct Row {
    label: Option<String>,
    description: Option<String>,
}

/// Lay out label/description entries within `max_width` display columns.
///
/// Rows with both sides absent emit nothing. Attempts the compact two-column
/// layout first unless `force_multiline` is set, falling back to the stacked
/// layout when compact overflows.
#[must_use]
pub fn render_list(entries: &[ListEntry], max_width: usize, opts: ListOptions) -> String {
    let rows = resolve_rows(entries, opts.strip_styling);

    if opts.force_multiline {
        return layout_stacked(&rows, max_width);
    }

    layout_compact(&rows, max_width).unwrap_or_else(|| layout_stacked(&rows, max_width))
}

fn resolve_rows(entries: &[ListEntry], strip_styling: bool) -> Vec<Row> {
    let resolve = |side: Option<&String>| -> Option<String> {
        let value = side?;
        if value.is_empty() {
            return None;
        }
        if strip_styling {
            Some(strip_ansi(value))
        } else {
            Some(value.clone())
        }
    };

    entries
        .iter()
        .map(|entry| Row {
            label: resolve(entry.label.as_ref()),
            description: resolve(entry.description.as_ref()),
        })
        .filter(|row| row.label.is_some() || row.description.is_some())
        .collect()
}

/// Compact two-column layout.
///
/// Returns `None` when any row's wrapped description exceeds
/// [`MAX_COMPACT_LINES`] lines; the caller then re-renders the whole list in
/// stacked mode.
fn layout_compact(rows: &[Row], max_width: usize) -> Option<String> {
    let label_width = rows
        .iter()
        .filter_map(|row| row.label.as_deref())
        .map(display_width)
        .max()
        .unwrap_or(0);
    let body_width = max_width.saturating_sub(label_width + COLUMN_GAP);

    let mut output = String::new();
    let mut spacer = "";

    for row in rows {
        let Some(description) = row.description.as_deref() else {
            // Header-style rows group tightly with what follows.
            output.push_str(spacer);
            output.push_str(row.label.as_deref().unwrap_or("").trim());
            spacer = "\n";
            continue;
        };

        output.push_str(spacer);

        let label = row.label.as_deref().unwrap_or("");
        // Padding is measured in display columns so styled labels align too.
        let pad = (label_width + COLUMN_GAP).saturating_sub(display_width(label));
        output.push_str(label);
        output.push_str(&" ".repeat(pad));

        let wrapped = wrap(description.trim(), body_width, true);
        let mut line_count = 0;
        for (i, line) in wrapped.split('\n').enumerate() {
            line_count += 1;
            if i > 0 {
                output.push('\n');
                output.push_str(&" ".repeat(label_width + COLUMN_GAP));
            }
            output.push_str(line);
        }

        if line_count > MAX_COMPACT_LINES {
            return None;
        }

        spacer = "\n\n";
    }

    Some(output)
}

/// Stacked layout: label and description on separate indented line groups.
fn layout_stacked(rows: &[Row], max_width: usize) -> String {
    let body_width = max_width.saturating_sub(STACKED_INDENT);
    let mut blocks: Vec<String> = Vec::new();

    for row in rows {
        let mut block = String::new();

        if let Some(label) = row.label.as_deref() {
            block.push_str(&wrap(label.trim(), max_width, true));
        }

        if let Some(description) = row.description.as_deref() {
            if !block.is_empty() {
                block.push('\n');
            }
            block.push_str(&indent(
                &wrap(description.trim(), body_width, true),
                STACKED_INDENT,
            ));
        }

        blocks.push(block);
    }

    blocks.join("\n\n")
}
