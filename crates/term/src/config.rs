//! Canvas configuration from the environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `TUI_CANVAS_COLUMNS` | canvas width in cells |
//! | `TUI_CANVAS_ROWS` | canvas height in cells |
//!
//! Missing, non-numeric or zero values are ignored and the dimension falls
//! back to the terminal size.

use std::env;

use tui_canvas_core::Canvas;
use tui_canvas_types::Attrs;

use crate::size::SizeProvider;

pub const COLUMNS_VAR: &str = "TUI_CANVAS_COLUMNS";
pub const ROWS_VAR: &str = "TUI_CANVAS_ROWS";

/// Optional explicit canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasConfig {
    pub columns: Option<u16>,
    pub rows: Option<u16>,
}

impl CanvasConfig {
    pub fn new(columns: Option<u16>, rows: Option<u16>) -> Self {
        Self { columns, rows }
    }

    /// Read `TUI_CANVAS_COLUMNS` / `TUI_CANVAS_ROWS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`CanvasConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dim = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|&n| n > 0)
        };
        Self {
            columns: dim(COLUMNS_VAR),
            rows: dim(ROWS_VAR),
        }
    }

    /// Fill in missing dimensions from `provider`.
    pub fn resolve(&self, provider: &dyn SizeProvider) -> (u16, u16) {
        match (self.columns, self.rows) {
            (Some(c), Some(r)) => (c, r),
            (columns, rows) => {
                let (tc, tr) = provider.size();
                (columns.unwrap_or(tc), rows.unwrap_or(tr))
            }
        }
    }

    /// Build a canvas sized by [`CanvasConfig::resolve`].
    pub fn build_canvas(&self, provider: &dyn SizeProvider, defaults: Attrs) -> Canvas {
        let (columns, rows) = self.resolve(provider);
        Canvas::with_defaults(columns, rows, defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::FixedSize;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn reads_both_dimensions() {
        let cfg = CanvasConfig::from_lookup(vars(&[(COLUMNS_VAR, "40"), (ROWS_VAR, " 12 ")]));
        assert_eq!(cfg, CanvasConfig::new(Some(40), Some(12)));
    }

    #[test]
    fn ignores_invalid_values() {
        let cfg = CanvasConfig::from_lookup(vars(&[(COLUMNS_VAR, "wide"), (ROWS_VAR, "0")]));
        assert_eq!(cfg, CanvasConfig::default());
    }

    #[test]
    fn missing_dimensions_come_from_provider() {
        let cfg = CanvasConfig::new(Some(10), None);
        assert_eq!(cfg.resolve(&FixedSize(80, 24)), (10, 24));
        assert_eq!(CanvasConfig::default().resolve(&FixedSize(7, 3)), (7, 3));
    }

    #[test]
    fn builds_canvas_of_resolved_size() {
        let canvas = CanvasConfig::new(None, Some(2)).build_canvas(&FixedSize(5, 9), Attrs::new());
        assert_eq!(canvas.size(), (5, 2));
    }
}
