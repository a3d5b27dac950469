//! TUI Canvas (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `tui_canvas::{core, term, types}`.

pub use tui_canvas_core as core;
pub use tui_canvas_term as term;
pub use tui_canvas_types as types;
