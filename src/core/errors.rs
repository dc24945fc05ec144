// src/core/errors.rs

use thiserror::Error;

/// Every failure the library reports. All of them are caller-recoverable by fixing the input.
#[derive(Debug, Error)]
pub enum SundriesError {
    /// An argument is not an integer, or has the wrong shape.
    #[error("{0}")]
    TypeViolation(String),

    /// A value lies outside its allowed interval.
    #[error("{0}")]
    RangeViolation(String),

    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl SundriesError {
    pub fn type_violation(message: impl Into<String>) -> Self {
        SundriesError::TypeViolation(message.into())
    }

    pub fn range_violation(message: impl Into<String>) -> Self {
        SundriesError::RangeViolation(message.into())
    }

    pub fn is_type_violation(&self) -> bool {
        matches!(self, SundriesError::TypeViolation(_))
    }

    pub fn is_range_violation(&self) -> bool {
        matches!(self, SundriesError::RangeViolation(_))
    }
}

pub type Result<T> = std::result::Result<T, SundriesError>;
