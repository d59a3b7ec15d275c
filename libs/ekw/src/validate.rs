//! Structural and check digit validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::checksum;
use crate::error::ValidationError;
use crate::EkwNumber;

/// Two letters, a digit and a letter, in either case.
static AREA_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}[0-9][A-Za-z]$").expect("area code pattern"));

/// Exactly eight ASCII digits.
static REGISTER_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("register number pattern"));

/// Options selected when constructing a [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Compare a supplied check digit against the computed one.
    pub verify_checksum: bool,
    /// Make [`Validator::checksum`] refuse to compute for numbers whose
    /// parts are malformed.
    pub require_validated: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            verify_checksum: true,
            require_validated: false,
        }
    }
}

impl ValidationOptions {
    #[must_use]
    pub const fn verify_checksum(mut self, enabled: bool) -> Self {
        self.verify_checksum = enabled;
        self
    }

    #[must_use]
    pub const fn require_validated(mut self, enabled: bool) -> Self {
        self.require_validated = enabled;
        self
    }
}

/// Validates EKW numbers according to its [`ValidationOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub const fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Checks the area code, then the register number, then (if enabled
    /// and present) the check digit. The first failure is returned.
    ///
    /// A [`ValidationError::SumControlMismatch`] is advisory: the parts are
    /// well formed and only the check digit disagrees.
    pub fn validate(&self, ekw: &EkwNumber) -> Result<(), ValidationError> {
        validate_structure(ekw)?;

        if !self.options.verify_checksum {
            return Ok(());
        }

        let Some(supplied) = ekw.check_digit() else {
            return Ok(());
        };

        let expected = checksum::checksum(ekw);
        if expected.as_deref() != Some(supplied.value()) {
            return Err(ValidationError::SumControlMismatch {
                expected,
                actual: supplied.value().to_string(),
            });
        }

        Ok(())
    }

    /// Returns the check digit of `ekw`, honouring `require_validated`.
    pub fn checksum(&self, ekw: &EkwNumber) -> Option<String> {
        if self.options.require_validated && validate_structure(ekw).is_err() {
            return None;
        }
        checksum::checksum(ekw)
    }
}

/// Checks the shape of the area code and the register number.
pub fn validate_structure(ekw: &EkwNumber) -> Result<(), ValidationError> {
    if !AREA_CODE_RE.is_match(ekw.area_code()) {
        return Err(ValidationError::FirstPartUnknownFormat {
            value: ekw.area_code().to_string(),
        });
    }
    if !REGISTER_NUMBER_RE.is_match(ekw.register_number()) {
        return Err(ValidationError::SecondPartUnknownFormat {
            value: ekw.register_number().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mismatch(expected: &str, actual: &str) -> ValidationError {
        ValidationError::SumControlMismatch {
            expected: Some(expected.to_string()),
            actual: actual.to_string(),
        }
    }

    #[rstest]
    #[case("PR1J", "00104856")]
    #[case("pr1j", "00104856")]
    #[case("Wa1M", "12345678")]
    fn test_structure_valid(#[case] area_code: &str, #[case] register_number: &str) {
        let ekw = EkwNumber::new(area_code, register_number);
        assert_eq!(validate_structure(&ekw), Ok(()));
    }

    #[rstest]
    #[case("FR1434252X")]
    #[case("PR1")]
    #[case("P11J")]
    #[case("PRJJ")]
    #[case("PR11")]
    #[case(" PR1J")]
    #[case("PR١J")]
    #[case("")]
    fn test_first_part_unknown_format(#[case] area_code: &str) {
        let ekw = EkwNumber::new(area_code, "00104856");
        assert_eq!(
            validate_structure(&ekw),
            Err(ValidationError::FirstPartUnknownFormat {
                value: area_code.to_string()
            })
        );
    }

    #[rstest]
    #[case("8")]
    #[case("0010485")]
    #[case("001048560")]
    #[case("0010485A")]
    #[case("00104856\n")]
    #[case("")]
    fn test_second_part_unknown_format(#[case] register_number: &str) {
        let ekw = EkwNumber::new("PR1J", register_number);
        assert_eq!(
            validate_structure(&ekw),
            Err(ValidationError::SecondPartUnknownFormat {
                value: register_number.to_string()
            })
        );
    }

    #[test]
    fn test_first_part_checked_before_second() {
        let ekw = EkwNumber::new("bad", "bad");
        assert!(matches!(
            validate_structure(&ekw),
            Err(ValidationError::FirstPartUnknownFormat { .. })
        ));
    }

    #[test]
    fn test_validate_with_matching_check_digit() {
        let ekw = EkwNumber::parse("PR1J/00104856/8").unwrap();
        assert_eq!(Validator::default().validate(&ekw), Ok(()));
    }

    #[test]
    fn test_validate_without_check_digit() {
        let ekw = EkwNumber::parse("PR1L/00022370").unwrap();
        assert_eq!(Validator::default().validate(&ekw), Ok(()));
    }

    #[test]
    fn test_validate_mismatching_check_digit() {
        let ekw = EkwNumber::parse("PR1J/00104856/1").unwrap();
        let err = Validator::default().validate(&ekw).unwrap_err();
        assert_eq!(err, mismatch("8", "1"));
        assert!(err.is_advisory());
    }

    #[test]
    fn test_validate_skips_check_digit_when_disabled() {
        let validator = Validator::new(ValidationOptions::default().verify_checksum(false));
        let ekw = EkwNumber::parse("PR1J/00104856/1").unwrap();
        assert_eq!(validator.validate(&ekw), Ok(()));
    }

    #[test]
    fn test_validate_structure_still_checked_when_disabled() {
        let validator = Validator::new(ValidationOptions::default().verify_checksum(false));
        let ekw = EkwNumber::parse("PR1L/8").unwrap();
        assert!(matches!(
            validator.validate(&ekw),
            Err(ValidationError::SecondPartUnknownFormat { .. })
        ));
    }

    #[test]
    fn test_validate_check_digit_compared_verbatim() {
        let ekw = EkwNumber::parse("PR1J/00104856/08").unwrap();
        assert_eq!(Validator::default().validate(&ekw), Err(mismatch("8", "08")));
    }

    #[test]
    fn test_validate_uncomputable_check_digit() {
        // Q passes the area code shape but is not in the registry alphabet.
        let ekw = EkwNumber::parse("QQ1Q/00104856/8").unwrap();
        assert_eq!(
            Validator::default().validate(&ekw),
            Err(ValidationError::SumControlMismatch {
                expected: None,
                actual: "8".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_trusted_check_digit() {
        let ekw = EkwNumber::with_trusted_check_digit("PR1J", "00104856", "300");
        assert_eq!(Validator::default().validate(&ekw), Ok(()));
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let ekw = EkwNumber::parse("PR1J/00104856/1").unwrap();
        let before = ekw.clone();
        let _ = Validator::default().validate(&ekw);
        assert_eq!(ekw, before);
    }

    #[test]
    fn test_checksum_requires_validation() {
        let strict = Validator::new(ValidationOptions::default().require_validated(true));
        let lenient = Validator::default();

        // Twelve mappable characters, but the parts are malformed.
        let ekw = EkwNumber::new("PR1J0", "0104856");
        assert_eq!(strict.checksum(&ekw), None);
        assert_eq!(lenient.checksum(&ekw).as_deref(), Some("8"));

        let ekw = EkwNumber::new("PR1J", "00104856");
        assert_eq!(strict.checksum(&ekw).as_deref(), Some("8"));
    }

    #[test]
    fn test_options_builder() {
        let options = ValidationOptions::default()
            .verify_checksum(false)
            .require_validated(true);
        assert!(!options.verify_checksum);
        assert!(options.require_validated);
        assert_eq!(Validator::new(options).options(), options);
    }
}
