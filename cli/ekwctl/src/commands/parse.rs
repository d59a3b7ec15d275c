//! Parse command.

use anyhow::Result;
use clap::Args;
use ekw::{CheckDigit, EkwNumber, Provenance};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::{parse_number, CommandContext};

/// Split a number into its parts.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// EKW number, e.g. PR1J/00104856/8.
    number: String,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let ekw = parse_number(&self.number)?;
        print_output(&[PartsRow::from(&ekw)], ctx.format);
        Ok(())
    }
}

/// Parts of a parsed number, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct PartsRow {
    #[tabled(rename = "Area code")]
    area_code: String,

    #[tabled(rename = "Register number")]
    register_number: String,

    #[tabled(rename = "Check digit")]
    check_digit: String,

    #[tabled(rename = "Source")]
    source: String,
}

impl From<&EkwNumber> for PartsRow {
    fn from(ekw: &EkwNumber) -> Self {
        let source = match ekw.check_digit().map(CheckDigit::provenance) {
            Some(Provenance::Provided) => "provided",
            Some(Provenance::Trusted) => "trusted",
            None => "absent",
        };

        Self {
            area_code: ekw.area_code().to_string(),
            register_number: ekw.register_number().to_string(),
            check_digit: ekw
                .check_digit()
                .map(|d| d.value().to_string())
                .unwrap_or_default(),
            source: source.to_string(),
        }
    }
}
