//! Errors surfaced while building a frame.

use std::fmt;

/// The only validation failure the frame engine reports.
///
/// Every other option is defaulted; a border value that is neither a known
/// type tag nor a structured configuration cannot be, so it is rejected with
/// the offending input echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    InvalidBorderValue {
        /// Structured key holding the bad value, `None` for the whole option.
        key: Option<String>,
        value: String,
    },
}

impl FrameError {
    pub(crate) fn invalid_border(value: impl Into<String>) -> Self {
        Self::InvalidBorderValue {
            key: None,
            value: value.into(),
        }
    }

    pub(crate) fn invalid_border_entry(key: &str, value: impl Into<String>) -> Self {
        Self::InvalidBorderValue {
            key: Some(key.to_string()),
            value: value.into(),
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBorderValue { key: None, value } => {
                write!(f, "wrong value `{value}` for border configuration option")
            }
            Self::InvalidBorderValue {
                key: Some(key),
                value,
            } => write!(f, "invalid `{key}` border value: {value}"),
        }
    }
}

impl std::error::Error for FrameError {}
