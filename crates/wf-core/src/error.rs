use thiserror::Error;

pub type WfResult<T> = Result<T, WfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Rates must be strictly increasing: {what} (index={index})")]
    NonMonotonic { what: &'static str, index: usize },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
