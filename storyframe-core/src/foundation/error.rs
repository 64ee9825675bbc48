/// Result alias used across the crate.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors produced while planning, masking, compositing, or exporting a story canvas.
///
/// Every check runs eagerly at the start of the operation that owns it. A session that hits
/// any of these aborts before a canvas is handed to the exporter.
#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    /// Source image is unusable (zero-sized, missing, or undecodable).
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Canvas size, padding ratios, or placement are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Corner radius does not fit the rectangle being masked.
    #[error("invalid radius: {0}")]
    InvalidRadius(String),

    /// Mask dimensions disagree with the rectangle being pasted.
    #[error("invalid mask: {0}")]
    InvalidMask(String),

    /// Encoding or writing the composited canvas failed.
    #[error("export failure: {0}")]
    Export(String),

    /// Any other error, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryError {
    /// Build a [`StoryError::InvalidImage`].
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Build a [`StoryError::InvalidConfig`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`StoryError::InvalidRadius`].
    pub fn invalid_radius(msg: impl Into<String>) -> Self {
        Self::InvalidRadius(msg.into())
    }

    /// Build a [`StoryError::InvalidMask`].
    pub fn invalid_mask(msg: impl Into<String>) -> Self {
        Self::InvalidMask(msg.into())
    }

    /// Build a [`StoryError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
