//! Canvas demo (default binary).
//!
//! Draws a small scene exercising every shape and prints it once.
//! `TUI_CANVAS_COLUMNS` / `TUI_CANVAS_ROWS` override the 20x10 default size.
//! Pass `--fit` to size the canvas to the terminal instead. Set
//! `RUST_LOG=debug` to see canvas activity on stderr.

use anyhow::Result;

use tui_canvas::core::{Canvas, Shapes};
use tui_canvas::term::{CanvasConfig, CrosstermSize, FixedSize, SizeProvider, TerminalPrinter};
use tui_canvas::types::{Attrs, Palette};

const DEMO_SIZE: FixedSize = FixedSize(20, 10);

fn main() -> Result<()> {
    env_logger::init();

    let fit = std::env::args().skip(1).any(|arg| arg == "--fit");
    let sizes: &dyn SizeProvider = if fit { &CrosstermSize } else { &DEMO_SIZE };

    let mut canvas =
        CanvasConfig::from_env().build_canvas(sizes, Attrs::new().bg(Palette::BrightBlack));
    draw_scene(&mut canvas)?;
    log::debug!("scene drawn on {:?} canvas", canvas.size());

    TerminalPrinter::new().show(&canvas)
}

fn draw_scene(c: &mut Canvas) -> Result<()> {
    c.text((13, 0), "=======\nTCanvas\n=======", None, &Attrs::new())?;
    c.point((0, 0), None, &Attrs::new().character('*'))?;
    c.point((19, 9), None, &Attrs::new().character('#'))?;

    c.line((-1, 5), (10, -2), None, &Attrs::new().bg(Palette::Red))?;
    c.line(
        (2, -1),
        (6, 4),
        None,
        &Attrs::new().fg(Palette::BrightWhite).blink(true).character('x'),
    )?;

    c.triangle(
        (2.6, 4.6),
        (6.4, 8.4),
        (15.0, 7.0),
        None,
        true,
        &Attrs::new().bg(Palette::Cyan).fg(Palette::Black),
    )?;
    c.triangle((3, 5), (6, 8), (15, 7), None, false, &Attrs::new().character('t'))?;

    let pentagon = [(10, 5), (18, 6), (19, 8), (18, 9), (12, 6)];
    c.polygon(
        &pentagon,
        None,
        true,
        &Attrs::new().bg(Palette::Yellow).fg(Palette::Black),
    )?;
    c.polygon(&pentagon, None, false, &Attrs::new().character('p'))?;

    c.rectangle((17, 3), (19, 5), None, true, &Attrs::new().character('r'))?;
    Ok(())
}
