//! Serializer - texels to ANSI SGR escape sequences.
//!
//! Each texel becomes one self-contained sequence:
//!
//! ```text
//! ESC [ <fg> ; <bg> [; <style>...] m <glyph> ESC [0m
//! ```
//!
//! Style parameters follow a fixed order: bold (1), faint (2), italic (3),
//! underline (4), blink (5), inverse (7), cross (9), overline (53).
//! Palette colors use the 30-37/90-97 foreground range (plus 10 for
//! background), true colors use `38;2;r;g;b` / `48;2;r;g;b`.
//!
//! Colors are only validated here, so a bad palette code or float channel
//! surfaces when the frame is rendered and never when it is drawn.

use std::fmt::Write as _;

use arrayvec::ArrayVec;

use crate::buffer::Buffer;
use crate::types::color::unit_to_byte;
use crate::types::{CanvasError, Color, Palette, Texel};

/// Resets all attributes after each texel.
pub const RESET: &str = "\x1b[0m";

/// Two true colors (5 parameters each) plus every style flag.
const MAX_PARAMS: usize = 18;

type Params = ArrayVec<u8, MAX_PARAMS>;

#[derive(Clone, Copy)]
enum Layer {
    Fg,
    Bg,
}

fn push_color(params: &mut Params, color: Color, layer: Layer) -> Result<(), CanvasError> {
    let (r, g, b) = match color {
        Color::Code(code) => {
            let palette = Palette::from_code(code).ok_or_else(|| {
                CanvasError::invalid_color(format!("unknown palette code {:?}", code))
            })?;
            params.push(match layer {
                Layer::Fg => palette.fg_sgr(),
                Layer::Bg => palette.bg_sgr(),
            });
            return Ok(());
        }
        Color::Rgb(r, g, b) => (r, g, b),
        Color::RgbF(r, g, b) => {
            let channel = |v: f32| {
                unit_to_byte(v).ok_or_else(|| {
                    CanvasError::invalid_color(format!("channel {} outside 0.0-1.0", v))
                })
            };
            (channel(r)?, channel(g)?, channel(b)?)
        }
    };

    params.push(match layer {
        Layer::Fg => 38,
        Layer::Bg => 48,
    });
    params.push(2);
    params.push(r);
    params.push(g);
    params.push(b);
    Ok(())
}

fn texel_params(texel: &Texel) -> Result<Params, CanvasError> {
    let mut params = Params::new();
    push_color(&mut params, texel.fg, Layer::Fg)?;
    push_color(&mut params, texel.bg, Layer::Bg)?;

    let flags = [
        (texel.bold, 1),
        (texel.faint, 2),
        (texel.italic, 3),
        (texel.underline, 4),
        (texel.blink, 5),
        (texel.inverse, 7),
        (texel.cross, 9),
        (texel.overline, 53),
    ];
    for (on, code) in flags {
        if on {
            params.push(code);
        }
    }
    Ok(params)
}

/// Append the escape sequence for one texel to `out`.
///
/// On error `out` is left untouched.
pub fn write_texel(out: &mut String, texel: &Texel) -> Result<(), CanvasError> {
    let params = texel_params(texel)?;

    out.push_str("\x1b[");
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", p);
    }
    out.push('m');
    out.push(texel.character.unwrap_or(' '));
    out.push_str(RESET);
    Ok(())
}

/// Render one texel to a fresh string.
///
/// # Examples
///
/// ```
/// use tui_canvas_core::sgr::render_texel;
/// use tui_canvas_core::types::{Color, Texel};
///
/// let texel = Texel { bold: true, fg: Color::Code('r'), ..Texel::new('A') };
/// assert_eq!(render_texel(&texel).unwrap(), "\x1b[31;49;1mA\x1b[0m");
/// ```
pub fn render_texel(texel: &Texel) -> Result<String, CanvasError> {
    let mut out = String::with_capacity(24);
    write_texel(&mut out, texel)?;
    Ok(out)
}

/// Render a whole buffer: one line per row, joined by `'\n'`, no trailing
/// newline.
pub fn render_buffer(buffer: &Buffer) -> Result<String, CanvasError> {
    let (columns, rows) = buffer.size();
    let mut out = String::with_capacity((columns as usize) * (rows as usize) * 16);
    for (y, row) in buffer.rows_iter().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for texel in row {
            write_texel(&mut out, texel)?;
        }
    }
    Ok(out)
}
