//! Prints one labelled texel per color and style feature.

use anyhow::Result;

use tui_canvas::core::render_texel;
use tui_canvas::types::{Color, Texel};

fn main() -> Result<()> {
    env_logger::init();

    let samples: [(&str, Texel); 13] = [
        ("Empty:   ", Texel::default()),
        ("Default: ", Texel::new('D')),
        ("Inverse: ", Texel { inverse: true, ..Texel::new('I') }),
        (
            "Colours: ",
            Texel {
                fg: Color::Code('r'),
                bg: Color::Code('K'),
                ..Texel::new('C')
            },
        ),
        (
            "RGB:     ",
            Texel {
                fg: Color::Rgb(0, 255, 0),
                bg: Color::RgbF(1.0, 0.0, 1.0),
                ..Texel::new('R')
            },
        ),
        ("Bold:    ", Texel { bold: true, ..Texel::new('B') }),
        ("Faint:   ", Texel { faint: true, ..Texel::new('F') }),
        ("Italic:  ", Texel { italic: true, ..Texel::new('I') }),
        ("Under:   ", Texel { underline: true, ..Texel::new('U') }),
        ("Cross:   ", Texel { cross: true, ..Texel::new('S') }),
        ("Blink:   ", Texel { blink: true, ..Texel::new('B') }),
        ("Over:    ", Texel { overline: true, ..Texel::new('O') }),
        (
            "Blink c.:",
            Texel {
                blink: true,
                fg: Color::Code('b'),
                bg: Color::Code('y'),
                ..Texel::new('B')
            },
        ),
    ];

    log::debug!("rendering {} texel samples", samples.len());
    let mut out = String::from("=====\nTexel\n=====\n");
    for (label, texel) in &samples {
        out.push_str(label);
        out.push_str(&render_texel(texel)?);
        out.push('\n');
    }
    print!("{}", out);
    Ok(())
}
