pub mod adder;
pub mod convert;
pub mod error;
pub mod numeral;
pub mod pipeline;
pub mod rules;
pub mod validate;

pub use adder::{
    AddOptions, Adder, AdditionResult, AdditionWarning, BucketAdder, SubstitutionAdder,
    WarningCode,
};
pub use convert::{parse_to_roman, to_roman};
pub use error::RomanError;
pub use numeral::Symbol;
pub use validate::validate;

/// Add two Roman numerals and return the canonical sum.
///
/// Both operands are validated first; any character outside `IVXLCDM`
/// (including lowercase) yields `InvalidNumeral`. Relaxed operands such as
/// `IIII` are accepted.
///
/// ```
/// assert_eq!(romanadd::add("IV", "V").unwrap(), "IX");
/// ```
pub fn add(number1: &str, number2: &str) -> Result<String, RomanError> {
    let number1 = validate(number1)?;
    let number2 = validate(number2)?;
    Ok(SubstitutionAdder.sum(number1, number2))
}

/// Add two Roman numerals with explicit options, collecting warnings.
pub fn add_with_options(
    number1: &str,
    number2: &str,
    options: &AddOptions,
) -> Result<AdditionResult, RomanError> {
    SubstitutionAdder.add(number1, number2, options)
}
