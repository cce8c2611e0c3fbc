//! Error types for pressure-gradient and curve calculations.

use thiserror::Error;
use wf_core::error::WfError;
use wf_fluids::FluidError;

/// Errors that can occur while evaluating flow correlations.
///
/// Validation variants name the offending quantity and carry its value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Invalid geometry: {what} = {value}")]
    InvalidGeometry { what: &'static str, value: f64 },

    #[error("Invalid fluid property: {what} = {value}")]
    InvalidFluidProperty { what: &'static str, value: f64 },

    #[error("Invalid velocity: {what} = {value} ft/s")]
    InvalidVelocity { what: &'static str, value: f64 },

    #[error("Invalid angle: {what} = {value} deg")]
    InvalidAngle { what: &'static str, value: f64 },

    #[error("Invalid fraction: {what} = {value} (expected 0 < x <= 1)")]
    InvalidFraction { what: &'static str, value: f64 },

    #[error("Unknown model '{name}' (available: {available})")]
    UnknownModel { name: String, available: String },

    #[error("Non-physical value: {what} = {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Non-finite value: {what} = {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Core error: {0}")]
    Core(#[from] WfError),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FlowError> for WfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::InvalidGeometry { what, .. }
            | FlowError::InvalidFluidProperty { what, .. }
            | FlowError::InvalidVelocity { what, .. }
            | FlowError::InvalidAngle { what, .. }
            | FlowError::InvalidFraction { what, .. }
            | FlowError::NonPhysical { what, .. }
            | FlowError::InvalidArg { what } => WfError::InvalidArg { what },
            FlowError::NonFinite { what, value } => WfError::NonFinite { what, value },
            FlowError::UnknownModel { .. } => WfError::InvalidArg {
                what: "unknown model",
            },
            FlowError::Fluid(e) => e.into(),
            FlowError::Core(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_value() {
        let err = FlowError::InvalidGeometry {
            what: "diameter",
            value: -2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("diameter"));
        assert!(msg.contains("-2"));
    }

    #[test]
    fn error_conversion() {
        let flow_err = FlowError::InvalidAngle {
            what: "inclination",
            value: 120.0,
        };
        let wf_err: WfError = flow_err.into();
        assert!(matches!(wf_err, WfError::InvalidArg { .. }));
    }
}
