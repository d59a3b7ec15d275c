//! Checksum command.

use anyhow::Result;
use clap::Args;
use ekw::{EkwNumber, ValidationOptions, Validator};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::{parse_number, CommandContext};

/// Compute the check digit of a number.
#[derive(Debug, Args)]
pub struct ChecksumCommand {
    /// EKW number, with or without a check digit.
    number: String,

    /// Refuse to compute unless the area code and register number are well formed.
    #[arg(long)]
    require_validated: bool,
}

impl ChecksumCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let ekw = parse_number(&self.number)?;
        let validator =
            Validator::new(ValidationOptions::default().require_validated(self.require_validated));

        let row = compute(&ekw, &validator)?;
        print_output(&[row], ctx.format);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct ChecksumRow {
    #[tabled(rename = "Check digit")]
    check_digit: String,

    #[tabled(rename = "Number")]
    number: String,
}

fn compute(ekw: &EkwNumber, validator: &Validator) -> Result<ChecksumRow, CliError> {
    let Some(check_digit) = validator.checksum(ekw) else {
        return Err(CliError::ChecksumUnavailable {
            number: ekw.to_string(),
        });
    };
    debug!(number = %ekw, check_digit = %check_digit, "Computed check digit");

    let number = EkwNumber::with_trusted_check_digit(
        ekw.area_code(),
        ekw.register_number(),
        check_digit.clone(),
    );

    Ok(ChecksumRow {
        check_digit,
        number: number.to_string(),
    })
}
