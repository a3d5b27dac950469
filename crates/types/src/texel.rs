//! Per-cell attribute record and the sparse patch applied to it.

use crate::color::Color;

/// One character on the screen with its display attributes.
///
/// Every field always has a value; the defaults are no character, terminal
/// default colors and all style flags off.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Texel {
    /// Glyph to display. `None` renders as a single space.
    pub character: Option<char>,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverse: bool,
    pub cross: bool,
    pub overline: bool,
}

impl Texel {
    pub fn new(character: char) -> Self {
        Self {
            character: Some(character),
            ..Self::default()
        }
    }

    /// A default texel with `attrs` applied on top.
    pub fn from_attrs(attrs: &Attrs) -> Self {
        let mut texel = Self::default();
        attrs.apply(&mut texel);
        texel
    }
}

/// A sparse update to a [`Texel`].
///
/// Each field is `None` unless the caller named it. Applying the patch only
/// overwrites the named fields, so overlapping shapes drawn with different
/// attribute subsets compose instead of clobbering each other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attrs {
    /// `Some(None)` clears the glyph back to blank.
    pub character: Option<Option<char>>,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: Option<bool>,
    pub faint: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub blink: Option<bool>,
    pub inverse: Option<bool>,
    pub cross: Option<bool>,
    pub overline: Option<bool>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn character(mut self, ch: char) -> Self {
        self.character = Some(Some(ch));
        self
    }

    /// Set the glyph back to blank.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.character = Some(None);
        self
    }

    #[must_use]
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    #[must_use]
    pub fn faint(mut self, on: bool) -> Self {
        self.faint = Some(on);
        self
    }

    #[must_use]
    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    #[must_use]
    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    #[must_use]
    pub fn blink(mut self, on: bool) -> Self {
        self.blink = Some(on);
        self
    }

    #[must_use]
    pub fn inverse(mut self, on: bool) -> Self {
        self.inverse = Some(on);
        self
    }

    #[must_use]
    pub fn cross(mut self, on: bool) -> Self {
        self.cross = Some(on);
        self
    }

    #[must_use]
    pub fn overline(mut self, on: bool) -> Self {
        self.overline = Some(on);
        self
    }

    /// True if applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the named fields of `texel`, leaving the rest untouched.
    pub fn apply(&self, texel: &mut Texel) {
        if let Some(ch) = self.character {
            texel.character = ch;
        }
        if let Some(fg) = self.fg {
            texel.fg = fg;
        }
        if let Some(bg) = self.bg {
            texel.bg = bg;
        }
        if let Some(v) = self.bold {
            texel.bold = v;
        }
        if let Some(v) = self.faint {
            texel.faint = v;
        }
        if let Some(v) = self.italic {
            texel.italic = v;
        }
        if let Some(v) = self.underline {
            texel.underline = v;
        }
        if let Some(v) = self.blink {
            texel.blink = v;
        }
        if let Some(v) = self.inverse {
            texel.inverse = v;
        }
        if let Some(v) = self.cross {
            texel.cross = v;
        }
        if let Some(v) = self.overline {
            texel.overline = v;
        }
    }
}
