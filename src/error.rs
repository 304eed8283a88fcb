//! Error type for directive configuration.
//!
//! There is exactly one failure mode: a configuration call received an
//! argument outside its accepted range. Rendering never fails.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DirectiveError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type for directive configuration calls.
pub type Result<T> = std::result::Result<T, DirectiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DirectiveError::invalid("quality must be within [1, 100], got 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument: quality must be within [1, 100], got 0"
        );
    }
}
