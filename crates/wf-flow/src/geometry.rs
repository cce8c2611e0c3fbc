//! Pipe geometry in oilfield units.

use crate::common::{check_finite, require_positive_geometry, sin_deg};
use crate::error::{FlowError, FlowResult};
use wf_core::units::inch_to_ft;

/// Default absolute roughness of commercial steel tubing, inches.
pub const DEFAULT_ROUGHNESS_IN: f64 = 0.0006;

/// Circular pipe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipeGeometry {
    /// Inner diameter, inches
    pub diameter_in: f64,
    /// Absolute roughness, inches
    pub roughness_in: f64,
    /// Inclination from horizontal, degrees (+90 is vertical upflow)
    pub inclination_deg: f64,
}

impl PipeGeometry {
    pub fn new(diameter_in: f64, roughness_in: f64, inclination_deg: f64) -> FlowResult<Self> {
        let geometry = Self {
            diameter_in,
            roughness_in,
            inclination_deg,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Vertical upflow with default roughness.
    pub fn vertical(diameter_in: f64) -> FlowResult<Self> {
        Self::new(diameter_in, DEFAULT_ROUGHNESS_IN, 90.0)
    }

    pub fn with_inclination(mut self, inclination_deg: f64) -> FlowResult<Self> {
        self.inclination_deg = inclination_deg;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> FlowResult<()> {
        require_positive_geometry(self.diameter_in, "pipe diameter")?;
        if !(self.roughness_in.is_finite() && self.roughness_in >= 0.0) {
            return Err(FlowError::InvalidGeometry {
                what: "pipe roughness",
                value: self.roughness_in,
            });
        }
        if !self.inclination_deg.is_finite() {
            return Err(FlowError::InvalidAngle {
                what: "pipe inclination",
                value: self.inclination_deg,
            });
        }
        Ok(())
    }

    pub fn diameter_ft(&self) -> f64 {
        inch_to_ft(self.diameter_in)
    }

    /// Flow area, ft²
    pub fn area_ft2(&self) -> f64 {
        let d = self.diameter_ft();
        std::f64::consts::PI * d * d / 4.0
    }

    /// ε/d, dimensionless.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness_in / self.diameter_in
    }

    pub fn sin_inclination(&self) -> f64 {
        sin_deg(self.inclination_deg)
    }

    /// Superficial velocity (ft/s) of a volumetric rate in ft³/s.
    pub fn superficial_velocity(&self, q_ft3_s: f64) -> FlowResult<f64> {
        let v = q_ft3_s / self.area_ft2();
        check_finite(v, "superficial velocity")?;
        Ok(v)
    }
}
