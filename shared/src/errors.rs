//! Error types for the FitTracker model

use thiserror::Error;

/// Errors raised while reading model values from untyped input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl ModelError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        ModelError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}
