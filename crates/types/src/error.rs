//! Error type shared by the canvas crates.

use thiserror::Error;

/// Errors surfaced by drawing and rendering calls.
///
/// Writes that land outside the grid are not errors; they are clipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// A drawing call named a transform that was never registered.
    #[error("unknown transform '{name}'")]
    UnknownTransform { name: String },

    /// A texel carries a color the serializer cannot encode.
    #[error("invalid color: {reason}")]
    InvalidColor { reason: String },
}

impl CanvasError {
    pub fn unknown_transform(name: &str) -> Self {
        CanvasError::UnknownTransform {
            name: name.to_string(),
        }
    }

    pub fn invalid_color(reason: impl Into<String>) -> Self {
        CanvasError::InvalidColor {
            reason: reason.into(),
        }
    }

    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CanvasError::UnknownTransform { .. } => "unknown_transform",
            CanvasError::InvalidColor { .. } => "invalid_color",
        }
    }
}
