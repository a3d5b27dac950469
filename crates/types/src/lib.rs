//! Core types module - shared data structures for the canvas
//!
//! This crate defines the plain data types used throughout the workspace:
//! positions in drawing space and grid space, colors, the per-cell attribute
//! record ([`Texel`]) and the sparse update applied to it ([`Attrs`]).
//! Nothing here performs I/O.
//!
//! # Coordinate Spaces
//!
//! - **Drawing space**: continuous `f64` positions ([`Point`]) used by every
//!   shape call.
//! - **Grid space**: signed integer cells ([`GridPos`]) produced by a
//!   transform. Column is the horizontal index, row 0 is the first output line.
//!   Negative or too-large cells are legal values; the buffer clips them.
//!
//! # Colors
//!
//! | Code | Color | Code | Color |
//! |------|-------|------|-------|
//! | `0` | terminal default | | |
//! | `k` | black | `K` | bright black |
//! | `r` | red | `R` | bright red |
//! | `g` | green | `G` | bright green |
//! | `y` | yellow | `Y` | bright yellow |
//! | `b` | blue | `B` | bright blue |
//! | `m` | magenta | `M` | bright magenta |
//! | `c` | cyan | `C` | bright cyan |
//! | `w` | white | `W` | bright white |
//!
//! True colors are given either as integers in 0-255 ([`Color::Rgb`]) or as
//! floats in 0.0-1.0 ([`Color::RgbF`]).
//!
//! # Examples
//!
//! ```
//! use tui_canvas_types::{Attrs, Color, Palette, Texel};
//!
//! let mut texel = Texel::default();
//! Attrs::new().character('#').fg(Palette::Red).apply(&mut texel);
//! Attrs::new().bg(Color::Rgb(0, 0, 255)).bold(true).apply(&mut texel);
//!
//! assert_eq!(texel.character, Some('#'));
//! assert_eq!(texel.fg, Color::Code('r'));
//! assert_eq!(texel.bg, Color::Rgb(0, 0, 255));
//! assert!(texel.bold);
//! ```

pub mod color;
pub mod error;
pub mod texel;

pub use color::{Color, Palette};
pub use error::CanvasError;
pub use texel::{Attrs, Texel};

/// A position in continuous drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `self` and `other`; `t = 0` is `self`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

/// An integer grid cell as produced by a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridPos {
    pub col: i64,
    pub row: i64,
}

impl GridPos {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    /// Chebyshev distance: the step count a line between the two cells needs.
    pub fn steps_to(self, other: GridPos) -> u64 {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc.max(dr)
    }
}

impl From<(i64, i64)> for GridPos {
    fn from((col, row): (i64, i64)) -> Self {
        Self { col, row }
    }
}
