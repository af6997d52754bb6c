//! Main TUI application state and logic

use crate::Translation;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

use super::panes::StatusRenderData;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// The C source as it was read
    pub source_code: String,

    /// Its translation, shown on the right
    pub translation: Translation,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets (clamped on render)
    pub source_scroll: usize,
    pub output_scroll: usize,

    /// Rows visible in a pane at the last render, used for paging
    pub page_height: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(source_code: String, translation: Translation) -> Self {
        App {
            source_code,
            translation,
            focused_pane: FocusedPane::Output,
            source_scroll: 0,
            output_scroll: 0,
            page_height: 1,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        self.page_height = columns[0].height.saturating_sub(2).max(1) as usize;

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &self.translation.text,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                source_lines: self.source_code.lines().count(),
                output_lines: self.translation.text.lines().count(),
                unhandled: self.translation.unhandled,
                parsed: self.translation.parsed,
            },
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let page = self.page_height;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(page);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(page);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                // Clamped to the last page on the next render
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }
}
