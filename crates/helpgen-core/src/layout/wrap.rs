//! Hard wrapping at whitespace boundaries

use super::metrics::display_width;

/// Hard-wrap `text` to `max_width` display columns.
///
/// Breaks occur only at whitespace boundaries; a single whitespace-free token
/// wider than `max_width` is emitted on its own over-long line rather than
/// split mid-token, which also keeps embedded ANSI sequences intact. Existing
/// newlines are respected: each input line wraps independently.
///
/// With `trim_trailing` set, trailing whitespace is removed from every
/// produced line; otherwise it is preserved, which matters for byte-exact
/// Markdown fences.
///
/// A `max_width` of zero disables wrapping entirely (pass-through).
#[must_use]
pub fn wrap(text: &str, max_width: usize, trim_trailing: bool) -> String {
    if max_width == 0 {
        return text.to_string();
    }

    text.split('\n')
        .map(|line| wrap_line(line, max_width, trim_trailing))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, max_width: usize, trim_trailing: bool) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for token in split_runs(line) {
        let is_space = token.chars().next().is_some_and(char::is_whitespace);
        let token_width = display_width(token);

        if !is_space && current_width > 0 && current_width + token_width > max_width {
            lines.push(finish_line(current, trim_trailing));
            current = String::new();
            current_width = 0;
        }

        current.push_str(token);
        current_width += token_width;
    }

    lines.push(finish_line(current, trim_trailing));
    lines.join("\n")
}

fn finish_line(line: String, trim_trailing: bool) -> String {
    if trim_trailing {
        line.trim_end().to_string()
    } else {
        line
    }
}

/// Split a line into maximal runs of whitespace and non-whitespace.
///
/// Escape sequences contain no whitespace characters, so they always stay
/// inside a single run and survive wrapping uncorrupted.
fn split_runs(line: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev_is_space: Option<bool> = None;

    for (i, c) in line.char_indices() {
        let is_space = c.is_whitespace();
        if let Some(prev) = prev_is_space {
            if prev != is_space {
                runs.push(&line[start..i]);
                start = i;
            }
        }
        prev_is_space = Some(is_space);
    }

    if start < line.len() {
        runs.push(&line[start..]);
    }

    runs
}

/// Indent every non-empty line of `text` by `columns` spaces.
#[must_use]
pub fn indent(text: &str, columns: usize) -> String {
    let pad = " ".repeat(columns);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::super::metrics::max_line_width;
    use super::*;

    #[test]
    fn wraps_at_whitespace() {
        assert_eq!(wrap("one two three four", 9, true), "one two\nthree\nfour");
    }

    #[test]
    fn zero_width_is_pass_through() {
        assert_eq!(wrap("anything at all", 0, true), "anything at all");
    }

    #[test]
    fn overlong_token_gets_its_own_line() {
        let wrapped = wrap("a verylongtoken b", 6, true);
        assert_eq!(wrapped, "a\nverylongtoken\nb");
    }

    #[test]
    fn existing_newlines_are_respected() {
        assert_eq!(wrap("one\ntwo three", 20, true), "one\ntwo three");
        assert_eq!(wrap("a\n\nb", 20, true), "a\n\nb");
    }

    #[test]
    fn trailing_whitespace_is_preserved_when_not_trimming() {
        assert_eq!(wrap("code  ", 20, false), "code  ");
        assert_eq!(wrap("code  ", 20, true), "code");
    }

    #[test]
    fn styling_sequences_survive_wrapping() {
        let styled = "\x1b[32mgreen\x1b[0m text here";
        let wrapped = wrap(styled, 5, true);
        assert!(wrapped.contains("\x1b[32mgreen\x1b[0m"));
        assert!(max_line_width(&wrapped) <= 5);
    }

    #[test]
    fn wrapped_lines_fit_the_budget() {
        let wrapped = wrap("the quick brown fox jumps over the lazy dog", 10, true);
        assert!(max_line_width(&wrapped) <= 10);
    }

    #[test]
    fn indent_skips_empty_lines() {
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b");
    }
}
