//! Error types for inflow models and nodal analysis.

use thiserror::Error;
use wf_core::error::WfError;
use wf_flow::FlowError;
use wf_fluids::FluidError;

/// Errors that can occur while building inflow curves or solving for the
/// operating point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodalError {
    #[error("No finite inflow/outflow samples to intersect")]
    NoFiniteData,

    #[error("Grid mismatch: {what} has {actual} points, expected {expected}")]
    GridMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter: {what} = {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Unknown model '{name}' (available: {available})")]
    UnknownModel { name: String, available: String },

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Core error: {0}")]
    Core(#[from] WfError),
}

pub type NodalResult<T> = Result<T, NodalError>;

impl From<NodalError> for WfError {
    fn from(e: NodalError) -> Self {
        match e {
            NodalError::NoFiniteData => WfError::InvalidArg {
                what: "no finite data",
            },
            NodalError::GridMismatch {
                what,
                expected,
                actual,
            } => WfError::LengthMismatch {
                what,
                expected,
                actual,
            },
            NodalError::InvalidParameter { what, .. } => WfError::InvalidArg { what },
            NodalError::UnknownModel { .. } => WfError::InvalidArg {
                what: "unknown model",
            },
            NodalError::Flow(e) => e.into(),
            NodalError::Fluid(e) => e.into(),
            NodalError::Core(e) => e,
        }
    }
}

pub(crate) fn require_positive(value: f64, what: &'static str) -> NodalResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(NodalError::InvalidParameter { what, value })
    }
}

pub(crate) fn require_non_negative(value: f64, what: &'static str) -> NodalResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(NodalError::InvalidParameter { what, value })
    }
}
