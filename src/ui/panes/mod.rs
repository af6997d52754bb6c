//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: the C input with line numbers and highlighting
//! - [`output`]: the generated Python, unhandled markers emphasised
//! - [`status`]: translation summary and keybindings
//! - `utils`: the line highlighter and code-pane rendering both panes share
//!
//! Each pane module exports a `render_*` function that draws into the area
//! it is given and clamps the scroll offset it is handed.

mod utils;

pub mod output;
pub mod source;
pub mod status;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::{render_status_bar, StatusRenderData};
