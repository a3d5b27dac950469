//! Canvas core - pure, deterministic, and testable
//!
//! This crate turns shape calls in continuous drawing space into a grid of
//! styled texels and serializes that grid to ANSI escape sequences. It has
//! **no I/O**: terminal size detection and printing live in the `term` crate.
//!
//! # Module Structure
//!
//! - [`transform`]: named drawing-space to grid-cell mappings
//! - [`buffer`]: the fixed-size texel grid with bounded partial writes
//! - [`raster`]: point, line, triangle, polygon, rectangle and text
//! - [`sgr`]: texel and frame serialization
//! - [`canvas`]: the composition of the above
//!
//! # Pipeline
//!
//! 1. A shape call hands drawing-space positions to the rasterizer.
//! 2. The rasterizer resolves the transform (the canvas default unless one is
//!    named) and writes each covered cell with the caller's [`Attrs`].
//! 3. Writes that land off the grid are dropped; writes on the grid overwrite
//!    only the attributes the caller named.
//! 4. [`Canvas::render`] serializes every texel, row by row.
//!
//! # Example
//!
//! ```
//! use tui_canvas_core::{Canvas, Shapes};
//! use tui_canvas_core::types::{Attrs, Palette};
//!
//! let mut canvas = Canvas::new(3, 3);
//! canvas
//!     .rectangle((0, 0), (2, 2), None, true, &Attrs::new().character('#'))
//!     .unwrap();
//! canvas
//!     .point((1, 1), None, &Attrs::new().fg(Palette::Red))
//!     .unwrap();
//!
//! let frame = canvas.render().unwrap();
//! assert_eq!(frame.lines().count(), 3);
//! assert!(frame.contains("\x1b[31;49m#\x1b[0m"));
//! ```
//!
//! [`Attrs`]: types::Attrs

pub mod buffer;
pub mod canvas;
pub mod raster;
pub mod sgr;
pub mod transform;

pub use tui_canvas_types as types;

// Re-export commonly used types for convenience
pub use buffer::Buffer;
pub use canvas::Canvas;
pub use raster::{Plot, Shapes};
pub use sgr::{render_buffer, render_texel, write_texel};
pub use transform::{scaled, unit, Transform, TransformRegistry, UNIT};
