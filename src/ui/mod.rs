//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The viewer puts the C source and its Python translation side by side.
//! It is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus and scrolling
//! - **[`panes`]**: render functions for each visible pane (source, output, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! [`run`] owns the terminal: it enters raw mode and the alternate screen,
//! drives an [`App`] until the user quits, and restores the terminal even
//! when the event loop fails.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

use crate::Translation;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::debug;

/// Show `source` next to `translation` until the user quits.
pub fn run(source: String, translation: Translation) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    debug!("viewer started");
    let mut app = App::new(source, translation);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
