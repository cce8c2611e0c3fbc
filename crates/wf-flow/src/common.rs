//! Common utilities for correlation calculations.

use crate::error::{FlowError, FlowResult};
use wf_core::numeric::ensure_finite;

/// Floor for the no-slip liquid fraction fed to power-law correlations.
pub const MIN_NO_SLIP_FRACTION: f64 = 1e-12;

/// Ensure a value is finite, returning FlowError if not.
pub fn check_finite(value: f64, what: &'static str) -> FlowResult<()> {
    ensure_finite(value, what).map_err(|_| FlowError::NonFinite { what, value })?;
    Ok(())
}

pub(crate) fn require_positive_geometry(value: f64, what: &'static str) -> FlowResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FlowError::InvalidGeometry { what, value })
    }
}

pub(crate) fn require_positive_property(value: f64, what: &'static str) -> FlowResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FlowError::InvalidFluidProperty { what, value })
    }
}

pub(crate) fn require_non_negative_velocity(value: f64, what: &'static str) -> FlowResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FlowError::InvalidVelocity { what, value })
    }
}

/// `sin` of an angle given in degrees.
pub fn sin_deg(angle_deg: f64) -> f64 {
    angle_deg.to_radians().sin()
}
