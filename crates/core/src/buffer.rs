//! Attribute buffer - the grid of texels behind a canvas.
//!
//! Texels are stored in a flat row-major `Vec` for cache locality. The
//! dimensions are fixed at construction. Every write goes through a bounds
//! check; writes outside the grid are dropped without an error.

use crate::types::{Attrs, GridPos, Texel};

/// 2D grid of texels, `columns x rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    columns: u16,
    rows: u16,
    texels: Vec<Texel>,
}

impl Buffer {
    /// Create a buffer whose texels all start as `defaults` applied to
    /// [`Texel::default`].
    pub fn new(columns: u16, rows: u16, defaults: &Attrs) -> Self {
        let len = (columns as usize) * (rows as usize);
        Self {
            columns,
            rows,
            texels: vec![Texel::from_attrs(defaults); len],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// `(columns, rows)`
    pub fn size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    /// All texels, row-major.
    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// Flat index of `pos`, or `None` if it lies outside the grid.
    #[inline(always)]
    fn idx(&self, pos: GridPos) -> Option<usize> {
        if pos.col < 0
            || pos.row < 0
            || pos.col >= i64::from(self.columns)
            || pos.row >= i64::from(self.rows)
        {
            return None;
        }
        Some((pos.row as usize) * (self.columns as usize) + (pos.col as usize))
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.idx(pos).is_some()
    }

    pub fn get(&self, pos: GridPos) -> Option<&Texel> {
        self.idx(pos).map(|i| &self.texels[i])
    }

    /// Apply `attrs` to the texel at `pos`.
    ///
    /// Returns false, and changes nothing, when `pos` is off the grid.
    pub fn apply(&mut self, pos: GridPos, attrs: &Attrs) -> bool {
        match self.idx(pos) {
            Some(i) => {
                attrs.apply(&mut self.texels[i]);
                true
            }
            None => false,
        }
    }

    /// Reset every texel to `defaults` applied to [`Texel::default`].
    pub fn clear(&mut self, defaults: &Attrs) {
        self.texels.fill(Texel::from_attrs(defaults));
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Texel]> + '_ {
        let width = self.columns as usize;
        (0..self.rows as usize).map(move |r| &self.texels[r * width..(r + 1) * width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Palette};

    #[test]
    fn new_buffer_is_seeded_with_defaults() {
        let buf = Buffer::new(4, 3, &Attrs::new().bg(Palette::BrightBlack));
        assert_eq!(buf.size(), (4, 3));
        assert_eq!(buf.texels().len(), 12);
        assert!(buf.texels().iter().all(|t| t.bg == Color::Code('K')));
        assert!(buf.texels().iter().all(|t| t.character.is_none()));
    }

    #[test]
    fn apply_outside_grid_is_a_no_op() {
        let mut buf = Buffer::new(3, 2, &Attrs::new());
        let before = buf.clone();
        let patch = Attrs::new().character('x');
        for pos in [
            GridPos::new(-1, 0),
            GridPos::new(0, -1),
            GridPos::new(3, 0),
            GridPos::new(0, 2),
            GridPos::new(i64::MAX, i64::MIN),
        ] {
            assert!(!buf.apply(pos, &patch));
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn apply_targets_row_major_index() {
        let mut buf = Buffer::new(3, 2, &Attrs::new());
        assert!(buf.apply(GridPos::new(2, 1), &Attrs::new().character('z')));
        assert_eq!(buf.texels()[5].character, Some('z'));
        assert_eq!(buf.get(GridPos::new(2, 1)).unwrap().character, Some('z'));
    }

    #[test]
    fn clear_keeps_dimensions_and_reseeds() {
        let mut buf = Buffer::new(2, 2, &Attrs::new());
        buf.apply(GridPos::new(0, 0), &Attrs::new().character('a').bold(true));
        buf.clear(&Attrs::new().fg(Palette::Green));

        assert_eq!(buf.size(), (2, 2));
        let t = buf.get(GridPos::new(0, 0)).unwrap();
        assert_eq!(t.character, None);
        assert!(!t.bold);
        assert_eq!(t.fg, Color::Code('g'));
    }

    #[test]
    fn zero_width_buffer_still_yields_rows() {
        let buf = Buffer::new(0, 3, &Attrs::new());
        let rows: Vec<_> = buf.rows_iter().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.is_empty()));
    }
}
