//! Error types for EKW number parsing and validation.

use thiserror::Error;

/// Errors that can occur when splitting a raw EKW number into its parts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two `/`-separated parts were supplied.
    #[error("incomplete ekw number")]
    Incomplete,

    /// More than three `/`-separated parts were supplied.
    #[error("unsupported ekw format: expected 2 or 3 parts, got {parts}")]
    Unsupported { parts: usize },
}

/// How seriously a validation failure should be taken by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The record itself is malformed.
    Fatal,
    /// The structural fields are valid but the check digit disagrees.
    /// A mistyped check digit does not make the register reference wrong.
    Advisory,
}

/// Errors reported by structural and check digit validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The area code is not two letters, a digit and a letter.
    #[error("validation: first part unknown format: '{value}'")]
    FirstPartUnknownFormat { value: String },

    /// The register number is not exactly eight digits.
    #[error("validation: second part unknown format: '{value}'")]
    SecondPartUnknownFormat { value: String },

    /// The supplied check digit differs from the computed one. `expected`
    /// is `None` when no digit can be computed for the parts.
    #[error(
        "validation: sum control verification failed: expected '{}', got '{actual}'",
        .expected.as_deref().unwrap_or("")
    )]
    SumControlMismatch {
        expected: Option<String>,
        actual: String,
    },
}

impl ValidationError {
    /// Returns the severity of this failure.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::SumControlMismatch { .. } => Severity::Advisory,
            _ => Severity::Fatal,
        }
    }

    /// Returns true if this failure only concerns the check digit.
    pub fn is_advisory(&self) -> bool {
        self.severity() == Severity::Advisory
    }
}

/// Any error produced while turning raw input into a validated EKW number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EkwError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl EkwError {
    /// Returns true if this error is an advisory check digit mismatch.
    pub fn is_advisory(&self) -> bool {
        matches!(self, EkwError::Validation(e) if e.is_advisory())
    }
}
