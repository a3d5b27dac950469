//! Rasterizer tests - coverage properties of every shape

use std::collections::BTreeSet;

use tui_canvas::core::{Canvas, Plot, Shapes};
use tui_canvas::types::{Attrs, CanvasError, GridPos, Point};

/// Counts writes and remembers the cells they hit.
#[derive(Default)]
struct CountingPlot {
    writes: usize,
    cells: BTreeSet<GridPos>,
}

impl Plot for CountingPlot {
    fn project(&self, pos: Point, transform: Option<&str>) -> Result<GridPos, CanvasError> {
        match transform {
            None => Ok(tui_canvas::core::unit(pos)),
            Some(name) => Err(CanvasError::unknown_transform(name)),
        }
    }

    fn plot_cell(&mut self, cell: GridPos, _attrs: &Attrs) {
        self.writes += 1;
        self.cells.insert(cell);
    }
}

fn set(cells: &[(i64, i64)]) -> BTreeSet<GridPos> {
    cells.iter().copied().map(GridPos::from).collect()
}

/// Cells of a canvas whose glyph is `ch`.
fn glyph_cells(canvas: &Canvas, ch: char) -> BTreeSet<GridPos> {
    let mut out = BTreeSet::new();
    for row in 0..canvas.rows() as i64 {
        for col in 0..canvas.columns() as i64 {
            if canvas.texel(col, row).unwrap().character == Some(ch) {
                out.insert(GridPos::new(col, row));
            }
        }
    }
    out
}

#[test]
fn test_horizontal_line_covers_exactly_six_cells() {
    let mut p = CountingPlot::default();
    p.line((0, 0), (5, 0), None, &Attrs::new()).unwrap();
    assert_eq!(p.writes, 6);
    assert_eq!(
        p.cells,
        set(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
    );
}

#[test]
fn test_degenerate_line_is_a_single_write() {
    let mut p = CountingPlot::default();
    p.line((2, 2), (2, 2), None, &Attrs::new()).unwrap();
    assert_eq!(p.writes, 1);
    assert_eq!(p.cells, set(&[(2, 2)]));

    // Sub-cell length still rounds to one cell.
    let mut p = CountingPlot::default();
    p.line((2.1, 2.0), (2.3, 1.8), None, &Attrs::new()).unwrap();
    assert_eq!(p.writes, 1);
}

#[test]
fn test_lines_have_no_gaps_in_any_direction() {
    let targets: [(i32, i32); 6] = [(7, 3), (-7, 3), (3, -7), (-3, -7), (7, 7), (0, -5)];
    for (tx, ty) in targets {
        let mut p = CountingPlot::default();
        p.line((0, 0), (tx, ty), None, &Attrs::new()).unwrap();

        let steps = tx.abs().max(ty.abs()) as usize;
        assert_eq!(p.writes, steps + 1, "line to ({}, {})", tx, ty);
        assert_eq!(p.cells.len(), steps + 1, "line to ({}, {})", tx, ty);
        assert!(p.cells.contains(&GridPos::new(0, 0)));
        assert!(p.cells.contains(&GridPos::new(tx as i64, ty as i64)));
    }
}

#[test]
fn test_line_is_direction_independent_for_axis_aligned_input() {
    let mut fwd = CountingPlot::default();
    fwd.line((1, 4), (1, 0), None, &Attrs::new()).unwrap();
    let mut back = CountingPlot::default();
    back.line((1, 0), (1, 4), None, &Attrs::new()).unwrap();
    assert_eq!(fwd.cells, back.cells);
}

#[test]
fn test_filled_triangle_is_strict_superset_of_outline() {
    let mut outline = CountingPlot::default();
    outline
        .triangle((0, 0), (4, 0), (0, 4), None, false, &Attrs::new())
        .unwrap();
    let mut filled = CountingPlot::default();
    filled
        .triangle((0, 0), (4, 0), (0, 4), None, true, &Attrs::new())
        .unwrap();

    assert!(filled.cells.is_superset(&outline.cells));
    assert!(filled.cells.len() > outline.cells.len());
    for interior in [(1, 1), (2, 1), (1, 2)] {
        assert!(!outline.cells.contains(&GridPos::from(interior)));
        assert!(filled.cells.contains(&GridPos::from(interior)));
    }
}

#[test]
fn test_triangle_outline_touches_only_edges() {
    let mut p = CountingPlot::default();
    p.triangle((0, 0), (4, 0), (0, 4), None, false, &Attrs::new())
        .unwrap();
    assert_eq!(
        p.cells,
        set(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (3, 1),
            (2, 2),
            (1, 3),
            (0, 4),
            (0, 1),
            (0, 2),
            (0, 3),
        ])
    );
}

#[test]
fn test_polygon_closes_without_explicit_last_vertex() {
    let mut open = CountingPlot::default();
    open.polygon(&[(0, 0), (4, 0), (4, 4)], None, false, &Attrs::new())
        .unwrap();
    let mut explicit = CountingPlot::default();
    explicit
        .polygon(&[(0, 0), (4, 0), (4, 4), (0, 0)], None, false, &Attrs::new())
        .unwrap();

    for diagonal in [(1, 1), (2, 2), (3, 3)] {
        assert!(open.cells.contains(&GridPos::from(diagonal)));
    }
    assert_eq!(open.cells, explicit.cells);
}

#[test]
fn test_filled_polygon_contains_outline_and_centroid() {
    let hexagon = [(2, 0), (5, 0), (7, 3), (5, 6), (2, 6), (0, 3)];

    let mut outline = Canvas::new(8, 8);
    outline
        .polygon(&hexagon, None, false, &Attrs::new().character('h'))
        .unwrap();
    let mut filled = Canvas::new(8, 8);
    filled
        .polygon(&hexagon, None, true, &Attrs::new().character('h'))
        .unwrap();

    let outline = glyph_cells(&outline, 'h');
    let filled = glyph_cells(&filled, 'h');
    assert!(filled.is_superset(&outline));
    // Vertex mean is (3.5, 3.0).
    assert!(filled.contains(&GridPos::new(4, 3)));
    // Fan fill is approximate, but covers most of the interior.
    assert!(filled.len() >= outline.len() + 15);
}

#[test]
fn test_rectangle_equals_polygon_of_corners() {
    for fill in [true, false] {
        let mut rect = Canvas::new(6, 6);
        rect.rectangle((0, 0), (2, 2), None, fill, &Attrs::new().character('#'))
            .unwrap();
        let mut poly = Canvas::new(6, 6);
        poly.polygon(
            &[(0, 0), (0, 2), (2, 2), (2, 0)],
            None,
            fill,
            &Attrs::new().character('#'),
        )
        .unwrap();
        assert_eq!(rect.buffer(), poly.buffer());
    }
}

#[test]
fn test_filled_rectangle_covers_its_area() {
    let mut canvas = Canvas::new(10, 10);
    canvas
        .rectangle((1, 2), (6, 5), None, true, &Attrs::new().character('#'))
        .unwrap();

    let mut expected = BTreeSet::new();
    for row in 2..=5 {
        for col in 1..=6 {
            expected.insert(GridPos::new(col, row));
        }
    }
    assert_eq!(glyph_cells(&canvas, '#'), expected);
}

#[test]
fn test_text_wraps_on_newline_and_clips() {
    let mut canvas = Canvas::new(5, 3);
    canvas
        .text((3, 1), "abc\nd", None, &Attrs::new().bold(true))
        .unwrap();

    assert_eq!(canvas.texel(3, 1).unwrap().character, Some('a'));
    assert_eq!(canvas.texel(4, 1).unwrap().character, Some('b'));
    assert_eq!(canvas.texel(3, 2).unwrap().character, Some('d'));
    assert!(canvas.texel(3, 2).unwrap().bold);
    // 'c' fell off the right edge.
    assert_eq!(glyph_cells(&canvas, 'c'), BTreeSet::new());
}
