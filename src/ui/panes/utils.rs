//! Shared pieces of the two code panes: a small per-line highlighter,
//! the bordered block, and scroll clamping.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Highlighting rules for one language
pub(crate) struct Syntax {
    /// Marker that starts a comment running to end of line
    pub line_comment: &'static str,
    /// Style for an identifier or keyword; the flag is set when `(` follows
    pub word_style: fn(&str, bool) -> Style,
    /// Style for a comment, given the comment text including its marker
    pub comment_style: fn(&str) -> Style,
}

/// Split one line into styled spans.
///
/// Works character by character on a single line; constructs spanning
/// lines (block comments) are not tracked.
pub(crate) fn highlight(line: &str, syntax: &Syntax) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = word_start.take() {
            spans.push(word_span(&line[start..i], c == '(', syntax));
        }

        if line[i..].starts_with(syntax.line_comment) {
            let comment = &line[i..];
            spans.push(Span::styled(
                comment.to_string(),
                (syntax.comment_style)(comment),
            ));
            return spans;
        }

        if c == '"' || c == '\'' {
            let end = quoted_end(line, i, c);
            spans.push(Span::styled(
                line[i..end].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            while chars.peek().is_some_and(|&(j, _)| j < end) {
                chars.next();
            }
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if let Some(start) = word_start {
        spans.push(word_span(&line[start..], false, syntax));
    }

    spans
}

fn word_span(word: &str, is_call: bool, syntax: &Syntax) -> Span<'static> {
    let style = if word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        (syntax.word_style)(word, is_call)
    };
    Span::styled(word.to_string(), style)
}

/// Byte index just past the closing quote, or the line end if unterminated
fn quoted_end(line: &str, start: usize, quote: char) -> usize {
    let body = start + quote.len_utf8();
    let mut escaped = false;
    for (j, c) in line[body..].char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return body + j + c.len_utf8();
        }
    }
    line.len()
}

pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Keep `offset` within the scrollable range
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

/// Render `text` with line numbers and highlighting, scrolled to `scroll`
pub(crate) fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    syntax: &Syntax,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(title, is_focused);
    let lines: Vec<&str> = text.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Borders

    clamp_scroll(scroll, lines.len(), visible_height);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let gutter = lines.len().to_string().len().max(3);
    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>width$} ", idx + 1, width = gutter),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight(line, syntax));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
