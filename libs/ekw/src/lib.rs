//! # ekw
//!
//! Parsing, validation and check digit computation for EKW numbers, the
//! identifiers of Polish land and mortgage registers (księgi wieczyste).
//!
//! ## Format
//!
//! An EKW number has the form `{area}/{register}[/{digit}]`:
//!
//! - `area`: registry office code, two letters, a digit and a letter
//! - `register`: eight digit number within that office
//! - `digit`: optional check digit (weighted modulo-10 sum)
//!
//! Examples:
//! - `PR1J/00104856/8`
//! - `PR1L/00022370`
//!
//! ## Usage
//!
//! ```
//! use ekw::{EkwNumber, ValidationOptions, Validator};
//!
//! let ekw = EkwNumber::parse("PR1J/00104856/8")?;
//! Validator::new(ValidationOptions::default()).validate(&ekw)?;
//! assert_eq!(ekw.checksum().as_deref(), Some("8"));
//! # Ok::<(), ekw::EkwError>(())
//! ```
//!
//! Parsing only splits the input into parts. Shape rules and the check
//! digit are enforced by [`Validator`].

pub mod checksum;
mod error;
mod number;
mod validate;

pub use checksum::{checksum, compute_check_digit};
pub use error::{EkwError, ParseError, Severity, ValidationError};
pub use number::{CheckDigit, EkwNumber, Provenance, PARTS_SEPARATOR};
pub use validate::{validate_structure, ValidationOptions, Validator};

/// Parses `raw` and validates it with `validator`.
pub fn parse_validated(raw: &str, validator: &Validator) -> Result<EkwNumber, EkwError> {
    let ekw = EkwNumber::parse(raw)?;
    validator.validate(&ekw)?;
    Ok(ekw)
}
