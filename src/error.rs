/// Errors that can occur while adding or converting Roman numerals.
#[derive(Debug, thiserror::Error)]
pub enum RomanError {
    #[error("{numeral:?} is not a sequence of I, V, X, L, C, D or M (found {symbol:?})")]
    InvalidNumeral { numeral: String, symbol: char },

    #[error("{numeral:?} is not in canonical form, expected {canonical:?}")]
    NonCanonicalOperand { numeral: String, canonical: String },

    #[error("{numeral:?} is above the supported range (more than three M)")]
    ExceedsSupportedRange { numeral: String },

    #[error("{value} is out of range, Roman numbers go from 1 to 3000")]
    OutOfRange { value: i64 },

    #[error("{value:?} is not an integer")]
    InvalidArgument { value: String },
}
