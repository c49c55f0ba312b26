pub mod buckets;
pub mod substitution;

pub use buckets::BucketAdder;
pub use substitution::SubstitutionAdder;

use tracing::debug;

use crate::error::RomanError;
use crate::validate::validate;

/// Categories for non-fatal findings during an addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    /// An operand was valid but not in canonical form (e.g. `IIII`).
    NonCanonicalOperand,
    /// The sum needs more than three `M`.
    ExceedsSupportedRange,
}

/// A non-fatal issue found while adding.
#[derive(Debug, Clone)]
pub struct AdditionWarning {
    pub code: WarningCode,
    pub message: String,
    pub location: Option<String>,
}

/// Options controlling addition.
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// If true, return an error for anything that would otherwise be a warning.
    pub strict: bool,
}

/// The outcome of adding two numerals.
#[derive(Debug, Clone, Default)]
pub struct AdditionResult {
    /// Canonical Roman numeral of the sum.
    pub numeral: String,
    /// Non-fatal issues found along the way.
    pub warnings: Vec<AdditionWarning>,
}

/// Trait implemented by each addition strategy.
pub trait Adder {
    /// Short name used in logs and on the command line.
    fn name(&self) -> &'static str;

    /// Add two numerals that have already passed validation.
    fn sum(&self, a: &str, b: &str) -> String;

    /// Validate both operands, add them, and collect warnings.
    fn add(&self, a: &str, b: &str, options: &AddOptions) -> Result<AdditionResult, RomanError> {
        let a = validate(a)?;
        let b = validate(b)?;

        let mut warnings = Vec::new();
        for (operand, location) in [(a, "first operand"), (b, "second operand")] {
            let canonical = self.sum(operand, "");
            if canonical != operand {
                if options.strict {
                    return Err(RomanError::NonCanonicalOperand {
                        numeral: operand.to_string(),
                        canonical,
                    });
                }
                warnings.push(AdditionWarning {
                    code: WarningCode::NonCanonicalOperand,
                    message: format!("{operand} is not canonical, read as {canonical}"),
                    location: Some(location.to_string()),
                });
            }
        }

        let numeral = self.sum(a, b);
        debug!(strategy = self.name(), first = a, second = b, sum = %numeral, "added");

        if numeral.contains("MMMM") {
            if options.strict {
                return Err(RomanError::ExceedsSupportedRange { numeral });
            }
            warnings.push(AdditionWarning {
                code: WarningCode::ExceedsSupportedRange,
                message: format!("{numeral} is above MMMCMXCIX"),
                location: None,
            });
        }

        for w in &warnings {
            debug!(code = ?w.code, "{}", w.message);
        }

        Ok(AdditionResult { numeral, warnings })
    }
}
