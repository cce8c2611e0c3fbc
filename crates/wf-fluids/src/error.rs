//! Fluid property errors.

use thiserror::Error;
use wf_core::WfError;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical input (non-positive pressure, gravity, etc.).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Correlation produced an unusable intermediate.
    #[error("Correlation out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Unknown z-factor method name.
    #[error("Unknown z-factor method '{name}' (expected one of: {expected})")]
    UnknownMethod { name: String, expected: String },
}

impl From<FluidError> for WfError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what, .. }
            | FluidError::OutOfRange { what, .. }
            | FluidError::InvalidArg { what } => WfError::InvalidArg { what },
            FluidError::UnknownMethod { .. } => WfError::InvalidArg {
                what: "unknown z-factor method",
            },
        }
    }
}

/// Reject non-positive or non-finite inputs.
pub(crate) fn require_positive(value: f64, what: &'static str) -> FluidResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FluidError::NonPhysical { what, value })
    }
}
