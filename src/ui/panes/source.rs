//! C source pane
//!
//! Shows the input exactly as given, directives included, with line numbers
//! and keyword highlighting.

use super::utils::{render_code_pane, Syntax};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

fn c_word_style(word: &str, is_call: bool) -> Style {
    match word {
        "int" | "char" | "void" | "float" | "double" | "long" | "short" | "unsigned"
        | "signed" | "const" => {
            Style::default().fg(DEFAULT_THEME.type_name) // Types
        }
        "struct" | "return" | "if" | "else" | "while" | "for" | "do" | "switch" | "case"
        | "default" | "break" | "continue" | "goto" | "sizeof" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "NULL" => Style::default().fg(DEFAULT_THEME.number), // Constants
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

fn c_comment_style(_: &str) -> Style {
    Style::default().fg(DEFAULT_THEME.comment)
}

pub(crate) const C_SYNTAX: Syntax = Syntax {
    line_comment: "//",
    word_style: c_word_style,
    comment_style: c_comment_style,
};

/// Render the C source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    render_code_pane(
        frame,
        area,
        "C Source",
        source_code,
        &C_SYNTAX,
        is_focused,
        scroll_offset,
    );
}
