//! Status bar with translation counts and keybindings

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Numbers shown on the left of the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRenderData {
    pub source_lines: usize,
    pub output_lines: usize,
    pub unhandled: usize,
    pub parsed: bool,
}

impl StatusRenderData {
    fn badge(&self) -> (String, Color) {
        if !self.parsed {
            (" PARSE FAILED ".to_string(), DEFAULT_THEME.error)
        } else if self.unhandled > 0 {
            (format!(" {} unhandled ", self.unhandled), DEFAULT_THEME.secondary)
        } else {
            (" all handled ".to_string(), DEFAULT_THEME.success)
        }
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_bg) = data.badge();
    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(
                " C {} lines → Python {} lines ",
                data.source_lines, data.output_lines
            ),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings = [
        (" ⇥ ", " focus "),
        (" ↑/↓ ", " scroll "),
        (" PgUp/PgDn ", " page "),
        (" Home/End ", " jump "),
        ("q", " quit "),
    ];

    let mut right_spans = Vec::new();
    for (idx, (key, desc)) in bindings.into_iter().enumerate() {
        if idx > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
