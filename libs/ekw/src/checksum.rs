//! Check digit ("sum control") computation.
//!
//! The check digit is a weighted modulo-10 sum over the twelve characters
//! of the area code followed by the register number. Each character is
//! first mapped to a numeric value through [`ALPHABET`]: digits map to
//! themselves and letters map to 10..=33 in registry order, which starts
//! with `X` and skips `Q` and `V`.
//!
//! This detects transcription errors only; it is not a digest.

use crate::EkwNumber;

/// Registry alphabet. A character's value is its index in this string.
pub const ALPHABET: &str = "0123456789XABCDEFGHIJKLMNOPRSTUWYZ";

/// Positional weights applied to the mapped characters.
pub const WEIGHTS: [u32; 12] = [1, 3, 7, 1, 3, 7, 1, 3, 7, 1, 3, 7];

/// Maps a single character to its registry value.
///
/// Lowercase ASCII letters are folded to uppercase first. Returns `None`
/// for characters outside [`ALPHABET`].
pub fn char_value(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    ALPHABET.find(c).map(|idx| idx as u32)
}

/// Computes the check digit for an area code and register number.
///
/// Returns `None` if any character is outside the registry alphabet or
/// if the combined length does not match [`WEIGHTS`].
pub fn compute_check_digit(area_code: &str, register_number: &str) -> Option<u8> {
    let values = area_code
        .chars()
        .chain(register_number.chars())
        .map(char_value)
        .collect::<Option<Vec<u32>>>()?;

    if values.len() != WEIGHTS.len() {
        return None;
    }

    let sum: u32 = values
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(value, weight)| value * weight)
        .sum();

    Some((sum % 10) as u8)
}

/// Returns the check digit of `ekw` as a string.
///
/// A trusted check digit is returned as-is and never recomputed. Otherwise
/// the digit is computed from the area code and register number, and
/// `None` is returned when that is not possible.
pub fn checksum(ekw: &EkwNumber) -> Option<String> {
    if let Some(digit) = ekw.check_digit().filter(|d| d.is_trusted()) {
        return Some(digit.value().to_string());
    }

    compute_check_digit(ekw.area_code(), ekw.register_number()).map(|d| d.to_string())
}
