//! Rasterizer - shapes built on top of a single bounded write.
//!
//! The shape algorithms only need two things from whatever they draw on:
//! a way to map a drawing-space position to a cell ([`Plot::project`]) and a
//! bounded partial write to one cell ([`Plot::plot_cell`]). Anything that
//! implements [`Plot`] gets every shape in [`Shapes`] for free.
//!
//! # Algorithms
//!
//! - **Line**: the step count is the Chebyshev distance between the
//!   *projected* endpoints, while the interpolation happens in drawing space.
//!   Every cell the line crosses receives at least one write, and transforms
//!   that pack several drawing units into one cell keep their sub-cell
//!   precision.
//! - **Triangle**: three edges, plus an optional fan of lines from each
//!   interior step of the first edge to the opposite vertex. Exact for convex
//!   triangles, approximate for very acute ones.
//! - **Polygon**: closed outline, or a fan of filled triangles around the
//!   vertex centroid. Filling is only correct for convex or star-shaped input.
//! - **Rectangle**: a polygon over the four corners.

use crate::types::{Attrs, CanvasError, GridPos, Point};

/// The write surface the rasterizer draws on.
pub trait Plot {
    /// Map `pos` to a grid cell with the named (or default) transform.
    fn project(&self, pos: Point, transform: Option<&str>) -> Result<GridPos, CanvasError>;

    /// Apply `attrs` to one cell. Off-grid cells are silently ignored.
    fn plot_cell(&mut self, cell: GridPos, attrs: &Attrs);

    /// Transform `pos` and write to the resulting cell.
    fn plot(
        &mut self,
        pos: Point,
        transform: Option<&str>,
        attrs: &Attrs,
    ) -> Result<(), CanvasError> {
        let cell = self.project(pos, transform)?;
        self.plot_cell(cell, attrs);
        Ok(())
    }
}

/// Shape drawing for every [`Plot`] surface.
pub trait Shapes: Plot {
    /// Draw a single point.
    fn point(
        &mut self,
        pos: impl Into<Point>,
        transform: Option<&str>,
        attrs: &Attrs,
    ) -> Result<(), CanvasError> {
        self.plot(pos.into(), transform, attrs)
    }

    /// Draw a gap-free line from `p0` to `p1`, both endpoints included.
    ///
    /// The cost is one write per grid step, clipped or not. Endpoints far off
    /// the grid (or a transform that saturates to `i64::MAX`) make this loop
    /// run for that many steps before returning.
    fn line(
        &mut self,
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        transform: Option<&str>,
        attrs: &Attrs,
    ) -> Result<(), CanvasError> {
        let (p0, p1) = (p0.into(), p1.into());
        let steps = self.steps_between(p0, p1, transform)?;
        if steps == 0 {
            return self.plot(p0, transform, attrs);
        }

        for i in 0..steps {
            let p = p0.lerp(p1, i as f64 / steps as f64);
            self.plot(p, transform, attrs)?;
        }
        // Exact endpoint, independent of interpolation rounding.
        self.plot(p1, transform, attrs)
    }

    /// Draw a triangle outline, optionally filled with a fan towards `p2`.
    fn triangle(
        &mut self,
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        transform: Option<&str>,
        fill: bool,
        attrs: &Attrs,
    ) -> Result<(), CanvasError> {
        let (p0, p1, p2) = (p0.into(), p1.into(), p2.into());

        self.line(p0, p1, transform, attrs)?;
        self.line(p1, p2, transform, attrs)?;
        self.line(p0, p2, transform, attrs)?;

        if !fill {
            return Ok(());
        }

        // Both ends of p0->p1 were drawn as part of the edges above.
        let steps = self.steps_between(p0, p1, transform)?;
        if steps >= 2 {
            for i in 1..steps {
                let p = p0.lerp(p1, i as f64 / steps as f64);
                self.line(p, p2, transform, attrs)?;
            }
        }
        Ok(())
    }

    /// Draw a closed polygon. The last vertex connects back to the first.
    ///
    /// An empty vertex list draws nothing.
    fn polygon<P>(
        &mut self,
        vertices: &[P],
        transform: Option<&str>,
        fill: bool,
        attrs: &Attrs,
    ) -> Result<(), CanvasError>
    where
        P: Copy + Into<Point>,
    {
        let Some(&last) = vertices.last() else {
            return Ok(());
        };

        let mut prev: Point = last.into();
        if fill {
            let center = centroid(vertices);
            for &v in vertices {
                let v: Point = v.into();
                self.triangle(center, prev, v, transform, true, attrs)?;
                prev = v;
            }
        } else {
            for &v in vertices {
                let v: Point = v.into();
                self.line(prev, v, transform, attrs)?;
                prev = v;
            }
        }
        Ok(())
    }

    /// Draw an axis-aligned rectangle with opposite corners `p0` and `p1`.
    fn rectangle(
        &mut self,
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        transform: Option<&str>,
        fill: bool,
        attrs: &Attrs,
    ) -> Result<(), CanvasError> {
        let (p0, p1) = (p0.into(), p1.into());
        let corners = [
            Point::new(p0.x, p0.y),
            Point::new(p0.x, p1.y),
            Point::new(p1.x, p1.y),
            Point::new(p1.x, p0.y),
        ];
        self.polygon(&corners, transform, fill, attrs)
    }

    /// Write `text` starting at the cell `pos` maps to.
    ///
    /// Glyphs advance one column each; `'\n'` starts a new row below the
    /// starting column. `attrs.character` is replaced by each glyph.
    fn text(
        &mut self,
        pos: impl Into<Point>,
        text: &str,
        transform: Option<&str>,
        attrs: &Attrs,
    ) -> Result<(), CanvasError> {
        let origin = self.project(pos.into(), transform)?;
        let mut glyph = *attrs;
        for (dr, line) in text.split('\n').enumerate() {
            for (dc, ch) in line.chars().enumerate() {
                glyph.character = Some(Some(ch));
                let cell = GridPos::new(
                    origin.col.saturating_add(dc as i64),
                    origin.row.saturating_add(dr as i64),
                );
                self.plot_cell(cell, &glyph);
            }
        }
        Ok(())
    }

    /// Line step count between two positions, measured in grid space.
    fn steps_between(
        &self,
        p0: Point,
        p1: Point,
        transform: Option<&str>,
    ) -> Result<u64, CanvasError> {
        let c0 = self.project(p0, transform)?;
        let c1 = self.project(p1, transform)?;
        Ok(c0.steps_to(c1))
    }
}

impl<T: Plot + ?Sized> Shapes for T {}

/// Arithmetic mean of the vertices (not area-weighted).
fn centroid<P: Copy + Into<Point>>(vertices: &[P]) -> Point {
    let n = vertices.len() as f64;
    let (sx, sy) = vertices.iter().fold((0.0, 0.0), |(sx, sy), &v| {
        let p: Point = v.into();
        (sx + p.x, sy + p.y)
    });
    Point::new(sx / n, sy / n)
}
