//! Error handling and display for the CLI.

use colored::Colorize;
use ekw::{ParseError, ValidationError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid EKW number: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid EKW number: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot compute a check digit for '{number}'")]
    ChecksumUnavailable { number: String },
}

impl CliError {
    /// A follow-up suggestion for the user, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Parse(_) => {
                Some("Hint: An EKW number looks like PR1J/00104856/8 (the last part is optional).")
            }
            CliError::Validation(ValidationError::FirstPartUnknownFormat { .. }) => {
                Some("Hint: The area code is two letters, a digit and a letter, e.g. PR1J.")
            }
            CliError::Validation(ValidationError::SecondPartUnknownFormat { .. }) => {
                Some("Hint: The register number is exactly eight digits, e.g. 00104856.")
            }
            CliError::Validation(ValidationError::SumControlMismatch { .. }) => Some(
                "Hint: The check digit may be mistyped. Pass --advisory-checksum to report it as a warning.",
            ),
            CliError::ChecksumUnavailable { .. } => {
                Some("Hint: Run `ekw validate` to see which part is malformed.")
            }
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(CliError::hint) {
        eprintln!("\n{}", hint.yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_has_a_hint() {
        let errors = vec![
            CliError::Parse(ParseError::Incomplete),
            CliError::Parse(ParseError::Unsupported { parts: 4 }),
            CliError::Validation(ValidationError::FirstPartUnknownFormat {
                value: "X".to_string(),
            }),
            CliError::Validation(ValidationError::SecondPartUnknownFormat {
                value: "8".to_string(),
            }),
            CliError::Validation(ValidationError::SumControlMismatch {
                expected: Some("8".to_string()),
                actual: "1".to_string(),
            }),
            CliError::ChecksumUnavailable {
                number: "PR1J/8".to_string(),
            },
        ];
        for err in errors {
            assert!(err.hint().is_some(), "missing hint for {err:?}");
        }
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = CliError::from(ParseError::Incomplete).into();
        assert_eq!(err.to_string(), "Invalid EKW number: incomplete ekw number");
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
