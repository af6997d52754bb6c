//! Python output pane
//!
//! Unhandled-construct markers and the parse-failure block are drawn in the
//! error colour so they stand out from ordinary comments.

use super::utils::{render_code_pane, Syntax};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

const UNHANDLED_MARKER: &str = "# [Unhandled:";

fn python_word_style(word: &str, is_call: bool) -> Style {
    match word {
        "def" | "return" | "if" | "elif" | "else" | "while" | "for" | "in" | "break"
        | "continue" | "pass" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "print" | "range" => Style::default().fg(DEFAULT_THEME.builtin),
        "None" => Style::default().fg(DEFAULT_THEME.number),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

fn python_comment_style(comment: &str) -> Style {
    if comment.starts_with(UNHANDLED_MARKER) {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else if comment.starts_with("# Error:") || comment.starts_with("# Details:") {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    }
}

pub(crate) const PYTHON_SYNTAX: Syntax = Syntax {
    line_comment: "#",
    word_style: python_word_style,
    comment_style: python_comment_style,
};

/// Render the Python output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    render_code_pane(
        frame,
        area,
        "Python",
        output,
        &PYTHON_SYNTAX,
        is_focused,
        scroll_offset,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panes::utils::highlight;

    #[test]
    fn test_inline_marker_is_emphasised() {
        let spans = highlight("y = # [Unhandled: TernaryOp]", &PYTHON_SYNTAX);
        let marker = spans.last().unwrap();

        assert_eq!(marker.content, "# [Unhandled: TernaryOp]");
        assert_eq!(marker.style.fg, Some(DEFAULT_THEME.error));
        assert!(marker.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_switch_comment_is_plain_comment() {
        let spans = highlight("# switch(x) equivalent", &PYTHON_SYNTAX);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.fg, Some(DEFAULT_THEME.comment));
    }

    #[test]
    fn test_python_keywords() {
        let spans = highlight("for i in range(0, 10):", &PYTHON_SYNTAX);
        let fg = |text: &str| spans.iter().find(|s| s.content == text).and_then(|s| s.style.fg);

        assert_eq!(fg("for"), Some(DEFAULT_THEME.keyword));
        assert_eq!(fg("in"), Some(DEFAULT_THEME.keyword));
        assert_eq!(fg("range"), Some(DEFAULT_THEME.builtin));
        assert_eq!(fg("10"), Some(DEFAULT_THEME.number));
    }
}
