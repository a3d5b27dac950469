//! Terminal size collaborator.
//!
//! The canvas core never asks the terminal anything; callers that omit
//! dimensions get them from a [`SizeProvider`] here.

/// Fallback used when the terminal cannot be queried (e.g. output is piped).
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Supplies `(columns, rows)` for a canvas.
pub trait SizeProvider {
    fn size(&self) -> (u16, u16);
}

/// Asks the attached terminal via crossterm.
///
/// A failed query, or one reporting a zero dimension, yields [`FALLBACK_SIZE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermSize;

impl SizeProvider for CrosstermSize {
    fn size(&self) -> (u16, u16) {
        match crossterm::terminal::size() {
            Ok((columns, rows)) if columns > 0 && rows > 0 => (columns, rows),
            Ok(size) => {
                log::debug!("terminal reported {:?}, using {:?}", size, FALLBACK_SIZE);
                FALLBACK_SIZE
            }
            Err(e) => {
                log::debug!("terminal size unavailable ({}), using {:?}", e, FALLBACK_SIZE);
                FALLBACK_SIZE
            }
        }
    }
}

/// A constant size, for tests and headless rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize(pub u16, pub u16);

impl SizeProvider for FixedSize {
    fn size(&self) -> (u16, u16) {
        (self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_reports_its_dimensions() {
        assert_eq!(FixedSize(12, 5).size(), (12, 5));
    }

    #[test]
    fn terminal_size_is_never_zero() {
        // Without a tty (CI, piped output) this is the fallback.
        let (columns, rows) = CrosstermSize.size();
        assert!(columns > 0);
        assert!(rows > 0);
    }
}
