//! Color values stored on texels.

/// The 17 symbolic terminal colors (`0` plus eight normal and eight bright).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    /// Terminal default foreground/background.
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Palette {
    pub const ALL: [Palette; 17] = [
        Palette::Default,
        Palette::Black,
        Palette::Red,
        Palette::Green,
        Palette::Yellow,
        Palette::Blue,
        Palette::Magenta,
        Palette::Cyan,
        Palette::White,
        Palette::BrightBlack,
        Palette::BrightRed,
        Palette::BrightGreen,
        Palette::BrightYellow,
        Palette::BrightBlue,
        Palette::BrightMagenta,
        Palette::BrightCyan,
        Palette::BrightWhite,
    ];

    /// Parse a single-character palette code (case-sensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_canvas_types::Palette;
    ///
    /// assert_eq!(Palette::from_code('r'), Some(Palette::Red));
    /// assert_eq!(Palette::from_code('R'), Some(Palette::BrightRed));
    /// assert_eq!(Palette::from_code('0'), Some(Palette::Default));
    /// assert_eq!(Palette::from_code('x'), None);
    /// ```
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Palette::Default),
            'k' => Some(Palette::Black),
            'r' => Some(Palette::Red),
            'g' => Some(Palette::Green),
            'y' => Some(Palette::Yellow),
            'b' => Some(Palette::Blue),
            'm' => Some(Palette::Magenta),
            'c' => Some(Palette::Cyan),
            'w' => Some(Palette::White),
            'K' => Some(Palette::BrightBlack),
            'R' => Some(Palette::BrightRed),
            'G' => Some(Palette::BrightGreen),
            'Y' => Some(Palette::BrightYellow),
            'B' => Some(Palette::BrightBlue),
            'M' => Some(Palette::BrightMagenta),
            'C' => Some(Palette::BrightCyan),
            'W' => Some(Palette::BrightWhite),
            _ => None,
        }
    }

    /// The single-character code for this color.
    pub fn code(self) -> char {
        match self {
            Palette::Default => '0',
            Palette::Black => 'k',
            Palette::Red => 'r',
            Palette::Green => 'g',
            Palette::Yellow => 'y',
            Palette::Blue => 'b',
            Palette::Magenta => 'm',
            Palette::Cyan => 'c',
            Palette::White => 'w',
            Palette::BrightBlack => 'K',
            Palette::BrightRed => 'R',
            Palette::BrightGreen => 'G',
            Palette::BrightYellow => 'Y',
            Palette::BrightBlue => 'B',
            Palette::BrightMagenta => 'M',
            Palette::BrightCyan => 'C',
            Palette::BrightWhite => 'W',
        }
    }

    /// SGR foreground parameter. The background parameter is this plus 10.
    pub fn fg_sgr(self) -> u8 {
        match self {
            Palette::Black => 30,
            Palette::Red => 31,
            Palette::Green => 32,
            Palette::Yellow => 33,
            Palette::Blue => 34,
            Palette::Magenta => 35,
            Palette::Cyan => 36,
            Palette::White => 37,
            Palette::Default => 39,
            Palette::BrightBlack => 90,
            Palette::BrightRed => 91,
            Palette::BrightGreen => 92,
            Palette::BrightYellow => 93,
            Palette::BrightBlue => 94,
            Palette::BrightMagenta => 95,
            Palette::BrightCyan => 96,
            Palette::BrightWhite => 97,
        }
    }

    pub fn bg_sgr(self) -> u8 {
        self.fg_sgr() + 10
    }
}

/// A foreground or background color.
///
/// Palette codes are kept as raw characters and only checked when the texel
/// is rendered, so an unknown code surfaces as
/// [`CanvasError::InvalidColor`](crate::CanvasError::InvalidColor) from the
/// serializer and never from a drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Single-character palette code, see [`Palette`].
    Code(char),
    /// True color with channels in 0-255.
    Rgb(u8, u8, u8),
    /// True color with channels in 0.0-1.0.
    RgbF(f32, f32, f32),
}

impl Default for Color {
    fn default() -> Self {
        Color::Code('0')
    }
}

impl From<Palette> for Color {
    fn from(p: Palette) -> Self {
        Color::Code(p.code())
    }
}

impl From<char> for Color {
    fn from(code: char) -> Self {
        Color::Code(code)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Color::RgbF(r, g, b)
    }
}

/// Scale a 0.0-1.0 channel to 0-255, truncating.
///
/// Returns `None` for NaN or values outside the unit range.
///
/// # Examples
///
/// ```
/// use tui_canvas_types::color::unit_to_byte;
///
/// assert_eq!(unit_to_byte(1.0), Some(255));
/// assert_eq!(unit_to_byte(0.5), Some(127));
/// assert_eq!(unit_to_byte(1.5), None);
/// ```
pub fn unit_to_byte(v: f32) -> Option<u8> {
    if !(0.0..=1.0).contains(&v) {
        return None;
    }
    Some((v * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_codes_round_trip() {
        for p in Palette::ALL {
            assert_eq!(Palette::from_code(p.code()), Some(p));
        }
    }

    #[test]
    fn background_codes_are_offset_by_ten() {
        assert_eq!(Palette::Default.bg_sgr(), 49);
        assert_eq!(Palette::Black.bg_sgr(), 40);
        assert_eq!(Palette::BrightWhite.bg_sgr(), 107);
    }

    #[test]
    fn nan_channel_is_rejected() {
        assert_eq!(unit_to_byte(f32::NAN), None);
        assert_eq!(unit_to_byte(-0.01), None);
        assert_eq!(unit_to_byte(0.0), Some(0));
    }
}
