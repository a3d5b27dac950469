//! Canvas - a buffer plus its transforms, drawable through [`Shapes`].
//!
//! [`Shapes`]: crate::raster::Shapes

use log::{debug, trace};

use crate::buffer::Buffer;
use crate::raster::Plot;
use crate::sgr;
use crate::transform::{Transform, TransformRegistry};
use crate::types::{Attrs, CanvasError, GridPos, Point, Texel};

/// A fixed-size character canvas.
///
/// The canvas exclusively owns its buffer and transform registry. It has no
/// internal locking; share it behind a `Mutex` if several threads draw.
#[derive(Debug)]
pub struct Canvas {
    buffer: Buffer,
    transforms: TransformRegistry,
    defaults: Attrs,
}

impl Canvas {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self::with_defaults(columns, rows, Attrs::new())
    }

    /// Create a canvas whose texels start with `defaults` applied.
    ///
    /// The same defaults are used again by [`Canvas::reset`].
    pub fn with_defaults(columns: u16, rows: u16, defaults: Attrs) -> Self {
        debug!("creating {}x{} canvas", columns, rows);
        Self {
            buffer: Buffer::new(columns, rows, &defaults),
            transforms: TransformRegistry::new(),
            defaults,
        }
    }

    /// `(columns, rows)`
    pub fn size(&self) -> (u16, u16) {
        self.buffer.size()
    }

    pub fn columns(&self) -> u16 {
        self.buffer.columns()
    }

    pub fn rows(&self) -> u16 {
        self.buffer.rows()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Texel at grid cell `(col, row)`, if on the grid.
    pub fn texel(&self, col: i64, row: i64) -> Option<&Texel> {
        self.buffer.get(GridPos::new(col, row))
    }

    pub fn defaults(&self) -> &Attrs {
        &self.defaults
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn register_transform(
        &mut self,
        name: impl Into<String>,
        transform: impl Transform + 'static,
    ) {
        self.transforms.register(name, transform);
    }

    pub fn set_default_transform(&mut self, name: &str) -> Result<(), CanvasError> {
        self.transforms.set_default(name)
    }

    /// Reinitialize every texel with `defaults`. Dimensions are unchanged.
    pub fn clear(&mut self, defaults: &Attrs) {
        debug!("clearing {}x{} canvas", self.columns(), self.rows());
        self.buffer.clear(defaults);
    }

    /// Clear back to the defaults the canvas was created with.
    pub fn reset(&mut self) {
        let defaults = self.defaults;
        self.clear(&defaults);
    }

    /// Render the whole canvas as one string of escape-coded rows.
    pub fn render(&self) -> Result<String, CanvasError> {
        sgr::render_buffer(&self.buffer)
    }
}

impl Plot for Canvas {
    fn project(&self, pos: Point, transform: Option<&str>) -> Result<GridPos, CanvasError> {
        self.transforms.project(pos, transform)
    }

    fn plot_cell(&mut self, cell: GridPos, attrs: &Attrs) {
        if !self.buffer.apply(cell, attrs) {
            trace!("clipped write at ({}, {})", cell.col, cell.row);
        }
    }
}
