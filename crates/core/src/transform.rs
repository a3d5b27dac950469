//! Transform registry - named mappings from drawing space to grid cells.
//!
//! A transform is any pure function `Point -> GridPos`. Each canvas owns its
//! own registry; nothing is global. The registry never checks that results
//! land on the grid, the buffer clips them later.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::types::{CanvasError, GridPos, Point};

/// Name of the built-in transform every registry starts with.
pub const UNIT: &str = "unit";

/// Maps a continuous drawing-space position to an integer grid cell.
///
/// Transforms must be `Send + Sync` so a canvas can move between threads.
pub trait Transform: Send + Sync {
    fn apply(&self, pos: Point) -> GridPos;
}

impl<F> Transform for F
where
    F: Fn(Point) -> GridPos + Send + Sync,
{
    fn apply(&self, pos: Point) -> GridPos {
        self(pos)
    }
}

/// Round to the nearest cell, halfway cases away from zero.
///
/// Non-finite input saturates (`NaN` becomes 0), which always ends up either
/// on the grid edge or clipped.
#[inline(always)]
fn round_cell(v: f64) -> i64 {
    v.round() as i64
}

/// The built-in `"unit"` transform: one drawing unit per cell.
///
/// # Examples
///
/// ```
/// use tui_canvas_core::transform::unit;
/// use tui_canvas_core::types::{GridPos, Point};
///
/// assert_eq!(unit(Point::new(1.4, 2.6)), GridPos::new(1, 3));
/// assert_eq!(unit(Point::new(0.5, -0.5)), GridPos::new(1, -1));
/// ```
pub fn unit(pos: Point) -> GridPos {
    GridPos::new(round_cell(pos.x), round_cell(pos.y))
}

/// A transform mapping `sx` by `sy` drawing units onto one cell.
///
/// `scaled(2.0, 4.0)` lets shapes be drawn at braille-dot resolution while
/// still landing on whole cells.
pub fn scaled(sx: f64, sy: f64) -> impl Transform {
    move |pos: Point| GridPos::new(round_cell(pos.x / sx), round_cell(pos.y / sy))
}

/// Named transforms with one designated default.
pub struct TransformRegistry {
    transforms: HashMap<String, Box<dyn Transform>>,
    default: String,
}

impl TransformRegistry {
    /// A registry holding only [`UNIT`], which is also the default.
    pub fn new() -> Self {
        let mut transforms: HashMap<String, Box<dyn Transform>> = HashMap::new();
        transforms.insert(UNIT.to_string(), Box::new(unit));
        Self {
            transforms,
            default: UNIT.to_string(),
        }
    }

    /// Store a transform under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, transform: impl Transform + 'static) {
        let name = name.into();
        debug!("registering transform '{}'", name);
        self.transforms.insert(name, Box::new(transform));
    }

    /// Look up a transform, falling back to the default when `name` is `None`.
    pub fn resolve(&self, name: Option<&str>) -> Result<&dyn Transform, CanvasError> {
        let name = name.unwrap_or(&self.default);
        self.transforms
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| CanvasError::unknown_transform(name))
    }

    /// Resolve and apply in one step.
    pub fn project(&self, pos: Point, name: Option<&str>) -> Result<GridPos, CanvasError> {
        Ok(self.resolve(name)?.apply(pos))
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), CanvasError> {
        if !self.contains(name) {
            return Err(CanvasError::unknown_transform(name));
        }
        debug!("default transform '{}' -> '{}'", self.default, name);
        self.default = name.to_string();
        Ok(())
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("names", &self.names())
            .field("default", &self.default)
            .finish()
    }
}
