/// Convenience result type used across Stitchfx.
pub type StitchResult<T> = Result<T, StitchError>;

/// Top-level error taxonomy used by adapter APIs.
///
/// There is no per-pixel recoverable error path: effects are pure functions.
/// Errors surface only at the host boundary, before any pixel runs.
#[derive(thiserror::Error, Debug)]
pub enum StitchError {
    /// Invalid user-provided data (duplicate effect names, bad texture dims).
    #[error("validation error: {0}")]
    Validation(String),

    /// A pipeline binding does not match the fixed contract (wrong buffer
    /// size at a slot, missing texture unit). Fatal for the whole dispatch.
    #[error("binding error: {0}")]
    Binding(String),

    /// Errors while executing a dispatch over a viewport.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StitchError {
    /// Build a [`StitchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StitchError::Binding`] value.
    pub fn binding(msg: impl Into<String>) -> Self {
        Self::Binding(msg.into())
    }

    /// Build a [`StitchError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
