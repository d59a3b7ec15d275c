//! CLI commands.

mod checksum;
mod parse;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ekw::EkwNumber;
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// ekw CLI - Parse and validate land and mortgage register numbers.
#[derive(Debug, Parser)]
#[command(name = "ekw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "EKW_FORMAT", default_value = "table")]
    format: String,

    /// Log level, overriding config and EKW_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split a number into its parts without validating them.
    Parse(parse::ParseCommand),

    /// Validate the parts and the check digit of a number.
    Validate(validate::ValidateCommand),

    /// Compute the check digit of a number.
    Checksum(checksum::ChecksumCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        crate::logging::init(&config.log_level);
        debug!(
            log_level = %config.log_level,
            verify_checksum = config.verify_checksum,
            "Configuration loaded"
        );

        let ctx = CommandContext {
            config,
            format: OutputFormat::from_name(&self.format),
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Checksum(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("ekw {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// Parse a number given on the command line.
fn parse_number(raw: &str) -> Result<EkwNumber, CliError> {
    let ekw = EkwNumber::parse(raw)?;
    debug!(
        area_code = ekw.area_code(),
        register_number = ekw.register_number(),
        check_digit = ekw.check_digit().map(|d| d.value()),
        "Parsed EKW number"
    );
    Ok(ekw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_flags() {
        let cli = Cli::try_parse_from([
            "ekw",
            "--format",
            "json",
            "validate",
            "PR1J/00104856/1",
            "--advisory-checksum",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn test_parse_number_maps_errors() {
        assert!(matches!(
            parse_number("PR1J"),
            Err(CliError::Parse(ekw::ParseError::Incomplete))
        ));
        assert!(parse_number("PR1J/00104856").is_ok());
    }
}
