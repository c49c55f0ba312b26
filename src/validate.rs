use crate::error::RomanError;
use crate::numeral::Symbol;

/// Check that `numeral` consists only of `I`, `V`, `X`, `L`, `C`, `D` and `M`.
///
/// Matching is case-sensitive: lowercase symbols are rejected, not normalized.
/// Only the alphabet is checked, so irregular strings such as `IIXX` pass.
/// The empty string passes and acts as zero when added.
pub fn validate(numeral: &str) -> Result<&str, RomanError> {
    match numeral.chars().find_map(|c| Symbol::try_from(c).err()) {
        Some(symbol) => Err(RomanError::InvalidNumeral {
            numeral: numeral.to_string(),
            symbol,
        }),
        None => Ok(numeral),
    }
}
