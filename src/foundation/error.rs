/// Convenience result type used across lightgrid.
pub type LightgridResult<T> = Result<T, LightgridError>;

/// Top-level error taxonomy for the IO-facing layers (settings, codec, export).
///
/// The pixel engine itself never produces these: its rejections are plain values
/// (see [`EditRejected`]).
#[derive(thiserror::Error, Debug)]
pub enum LightgridError {
    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or encoding image data.
    #[error("codec error: {0}")]
    Codec(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LightgridError {
    /// Build a [`LightgridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LightgridError::Codec`] value.
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }

    /// Build a [`LightgridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Why an edit request did not touch the pixel buffer.
///
/// None of these are fatal; the buffer is left byte-identical.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditRejected {
    /// The cell is only visible because an offset shifted empty space into view.
    #[error("cell is padding introduced by the current offset")]
    PaddedArea,

    /// Row or column lies outside the frame.
    #[error("cell lies outside the frame")]
    OutOfFrame,

    /// The cell maps to a buffer index past the end of the pixel data.
    #[error("cell has no backing sample in the pixel buffer")]
    OutsideBuffer,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
