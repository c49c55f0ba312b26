//! Integer to Roman conversion.
//!
//! This is an independent oracle for generating expected values in tests and
//! for the `to-roman` binary. Addition never goes through it.

use crate::error::RomanError;

/// Largest number [`to_roman`] accepts.
pub const MAX_VALUE: u32 = 3000;

const INT_TO_ROMAN: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert `number` (1..=3000) to its canonical Roman numeral.
pub fn to_roman(number: u32) -> Result<String, RomanError> {
    if !(1..=MAX_VALUE).contains(&number) {
        return Err(RomanError::OutOfRange {
            value: i64::from(number),
        });
    }

    let mut remaining = number;
    let mut out = String::new();
    for (value, part) in INT_TO_ROMAN {
        while remaining >= value {
            out.push_str(part);
            remaining -= value;
        }
    }
    Ok(out)
}

/// Parse a decimal integer and convert it with [`to_roman`].
pub fn parse_to_roman(input: &str) -> Result<String, RomanError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| RomanError::InvalidArgument {
            value: input.to_string(),
        })?;
    let number = u32::try_from(value).map_err(|_| RomanError::OutOfRange { value })?;
    to_roman(number)
}
