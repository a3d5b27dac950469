//! Terminal glue for the canvas.
//!
//! The core crate is pure; everything that touches the real terminal lives
//! here and stays deliberately thin:
//!
//! - [`size`]: where default canvas dimensions come from
//! - [`config`]: environment overrides for those dimensions
//! - [`renderer`]: writing a rendered frame to stdout (or any `Write`)

pub mod config;
pub mod renderer;
pub mod size;

pub use tui_canvas_core as core;
pub use tui_canvas_types as types;

pub use config::{CanvasConfig, COLUMNS_VAR, ROWS_VAR};
pub use renderer::{encode_frame_into, TerminalPrinter};
pub use size::{CrosstermSize, FixedSize, SizeProvider, FALLBACK_SIZE};
