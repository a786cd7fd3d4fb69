/// Convenience result type used across Relume.
pub type RelumeResult<T> = Result<T, RelumeError>;

/// Top-level error taxonomy used by the draw-boundary APIs.
///
/// The per-pixel core itself is total: out-of-domain inputs are handled by
/// documented fallbacks (unknown viz codes, floored kernel arguments), never
/// by an error path. Errors only arise when the host hands a draw invalid
/// parameters or a malformed job description.
#[derive(thiserror::Error, Debug)]
pub enum RelumeError {
    /// Invalid caller-provided parameters (uv_scale, input_size, canvas).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while setting up or executing a draw.
    #[error("dispatch error: {0}")]
    Dispatch(String),

    /// Errors when serializing or deserializing job records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RelumeError {
    /// Build a [`RelumeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RelumeError::Dispatch`] value.
    pub fn dispatch(msg: impl Into<String>) -> Self {
        Self::Dispatch(msg.into())
    }

    /// Build a [`RelumeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
