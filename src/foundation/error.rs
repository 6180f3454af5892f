/// Crate-wide result alias.
pub type BoxTweenResult<T> = Result<T, BoxTweenError>;

/// Errors surfaced by the transition core.
///
/// Lenient parsing and easing lookup never produce these; only invalid configuration
/// (non-positive duration, bad layer index) and the opt-in strict paths do.
#[derive(thiserror::Error, Debug)]
pub enum BoxTweenError {
    /// Invalid caller-supplied configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A command record rejected in strict parsing mode.
    #[error("parse error: {0}")]
    Parse(String),

    /// An easing name rejected in strict mode.
    #[error("easing error: {0}")]
    Easing(String),

    /// Job file (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoxTweenError {
    /// Build a [`BoxTweenError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoxTweenError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`BoxTweenError::Easing`].
    pub fn easing(msg: impl Into<String>) -> Self {
        Self::Easing(msg.into())
    }

    /// Build a [`BoxTweenError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
