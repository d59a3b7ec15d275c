//! Validate command.

use anyhow::Result;
use clap::Args;
use ekw::{EkwNumber, ValidationError, ValidationOptions, Validator};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{print_single, print_success, print_warning, OutputFormat};

use super::{parse_number, CommandContext};

/// Validate a number.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// EKW number, e.g. PR1J/00104856/8.
    number: String,

    /// Do not compare the check digit, only the shape of the parts.
    #[arg(long)]
    skip_checksum: bool,

    /// Report a wrong check digit as a warning instead of failing.
    #[arg(long)]
    advisory_checksum: bool,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let ekw = parse_number(&self.number)?;

        let options = ValidationOptions::default()
            .verify_checksum(ctx.config.verify_checksum && !self.skip_checksum);
        let validator = Validator::new(options);

        let report = evaluate(&ekw, &validator, self.advisory_checksum)?;

        match ctx.format {
            OutputFormat::Json => print_single(&report),
            OutputFormat::Table => match &report.status {
                ValidationStatus::Valid => {
                    print_success(&format!("{} is valid", report.number));
                }
                ValidationStatus::ChecksumMismatch => {
                    print_warning(&format!(
                        "{} has a wrong check digit (expected {})",
                        report.number,
                        report.expected_check_digit.as_deref().unwrap_or("none")
                    ));
                }
            },
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ValidationStatus {
    Valid,
    ChecksumMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    number: String,
    status: ValidationStatus,
    checksum_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_check_digit: Option<String>,
}

/// Validate `ekw`, downgrading a check digit mismatch to a report when
/// `advisory` is set.
fn evaluate(
    ekw: &EkwNumber,
    validator: &Validator,
    advisory: bool,
) -> Result<ValidationReport, CliError> {
    let checksum_verified = validator.options().verify_checksum && ekw.check_digit().is_some();

    match validator.validate(ekw) {
        Ok(()) => {
            debug!(number = %ekw, checksum_verified, "EKW number is valid");
            Ok(ValidationReport {
                number: ekw.to_string(),
                status: ValidationStatus::Valid,
                checksum_verified,
                expected_check_digit: None,
            })
        }
        Err(ValidationError::SumControlMismatch { expected, actual }) if advisory => {
            warn!(
                number = %ekw,
                expected = expected.as_deref(),
                actual = %actual,
                "Check digit mismatch"
            );
            Ok(ValidationReport {
                number: ekw.to_string(),
                status: ValidationStatus::ChecksumMismatch,
                checksum_verified,
                expected_check_digit: expected,
            })
        }
        Err(e) => {
            debug!(number = %ekw, error = %e, "EKW number is invalid");
            Err(e.into())
        }
    }
}
