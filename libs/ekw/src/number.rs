//! The parsed EKW number record.

use std::fmt;
use std::str::FromStr;

use crate::checksum;
use crate::error::{ParseError, ValidationError};
use crate::validate::{validate_structure, Validator};

/// Separator between the parts of an EKW number.
pub const PARTS_SEPARATOR: char = '/';

/// Where a check digit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Supplied with the raw input and not yet verified.
    Provided,
    /// Asserted by the caller as already verified. Never recomputed.
    Trusted,
}

/// The optional third part of an EKW number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckDigit {
    value: String,
    provenance: Provenance,
}

impl CheckDigit {
    /// A check digit taken from input, to be verified.
    pub fn provided(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            provenance: Provenance::Provided,
        }
    }

    /// A check digit the caller vouches for.
    pub fn trusted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            provenance: Provenance::Trusted,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_trusted(&self) -> bool {
        self.provenance == Provenance::Trusted
    }
}

/// An EKW number split into area code, register number and optional
/// check digit.
///
/// Fields are stored verbatim as parsed; use [`EkwNumber::validate`] or a
/// configured [`Validator`] to check their shape. The value is immutable,
/// so it can be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EkwNumber {
    area_code: String,
    register_number: String,
    check_digit: Option<CheckDigit>,
}

impl EkwNumber {
    /// Creates a number without a check digit.
    pub fn new(area_code: impl Into<String>, register_number: impl Into<String>) -> Self {
        Self {
            area_code: area_code.into(),
            register_number: register_number.into(),
            check_digit: None,
        }
    }

    /// Creates a number whose check digit is trusted as-is.
    pub fn with_trusted_check_digit(
        area_code: impl Into<String>,
        register_number: impl Into<String>,
        check_digit: impl Into<String>,
    ) -> Self {
        Self {
            area_code: area_code.into(),
            register_number: register_number.into(),
            check_digit: Some(CheckDigit::trusted(check_digit)),
        }
    }

    /// Attaches a check digit that still has to be verified.
    #[must_use]
    pub fn with_check_digit(mut self, check_digit: impl Into<String>) -> Self {
        self.check_digit = Some(CheckDigit::provided(check_digit));
        self
    }

    /// Parses a raw EKW number of the form `AREA/REGISTER[/DIGIT]`.
    ///
    /// Only the number of parts is checked here. Parts are kept verbatim,
    /// without trimming or case folding.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = raw.split(PARTS_SEPARATOR).collect();

        match parts.as_slice() {
            [_] => Err(ParseError::Incomplete),
            [area_code, register_number] => Ok(Self::new(*area_code, *register_number)),
            [area_code, register_number, check_digit] => {
                Ok(Self::new(*area_code, *register_number).with_check_digit(*check_digit))
            }
            _ => Err(ParseError::Unsupported { parts: parts.len() }),
        }
    }

    /// First part (geo ID), e.g. `PR1J`.
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// Second part (lam ID), e.g. `00104856`.
    pub fn register_number(&self) -> &str {
        &self.register_number
    }

    pub fn check_digit(&self) -> Option<&CheckDigit> {
        self.check_digit.as_ref()
    }

    /// Returns the register number only if both parts are well formed.
    pub fn register_number_if_valid(&self) -> Option<&str> {
        validate_structure(self).ok()?;
        Some(&self.register_number)
    }

    /// Validates with the default [`Validator`], which verifies a supplied
    /// check digit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Validator::default().validate(self)
    }

    /// Returns the check digit, computing it unless a trusted one is set.
    ///
    /// See [`checksum::checksum`].
    pub fn checksum(&self) -> Option<String> {
        checksum::checksum(self)
    }

    /// Returns a copy carrying the computed check digit as trusted.
    ///
    /// Any supplied check digit is replaced. Returns `None` if the parts are
    /// malformed.
    pub fn complete(&self) -> Option<EkwNumber> {
        validate_structure(self).ok()?;
        let digit = checksum::compute_check_digit(&self.area_code, &self.register_number)?;

        Some(Self::with_trusted_check_digit(
            self.area_code.clone(),
            self.register_number.clone(),
            digit.to_string(),
        ))
    }
}

impl fmt::Display for EkwNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.area_code, PARTS_SEPARATOR, self.register_number
        )?;
        if let Some(digit) = &self.check_digit {
            write!(f, "{}{}", PARTS_SEPARATOR, digit.value)?;
        }
        Ok(())
    }
}

impl FromStr for EkwNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EkwNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EkwNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
