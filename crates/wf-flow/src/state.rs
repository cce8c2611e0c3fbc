//! Fluid properties and the superficial-velocity flow state.

use crate::common::{require_non_negative_velocity, require_positive_property};
use crate::error::FlowResult;

/// Gas-liquid surface tension used when none is supplied, dyn/cm.
pub const DEFAULT_SURFACE_TENSION: f64 = 30.0;

/// Gas viscosity used when none is supplied, cP.
pub const DEFAULT_GAS_VISCOSITY: f64 = 0.02;

/// Gas density used when none is supplied, lbm/ft³.
pub const DEFAULT_GAS_DENSITY: f64 = 2.0;

/// Phase properties at flowing conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidProperties {
    /// lbm/ft³
    pub liquid_density: f64,
    /// lbm/ft³
    pub gas_density: f64,
    /// cP
    pub liquid_viscosity: f64,
    /// cP
    pub gas_viscosity: f64,
    /// dyn/cm; `None` means [`DEFAULT_SURFACE_TENSION`]
    pub surface_tension: Option<f64>,
}

impl FluidProperties {
    pub fn new(
        liquid_density: f64,
        gas_density: f64,
        liquid_viscosity: f64,
        gas_viscosity: f64,
    ) -> FlowResult<Self> {
        let props = Self {
            liquid_density,
            gas_density,
            liquid_viscosity,
            gas_viscosity,
            surface_tension: None,
        };
        props.validate()?;
        Ok(props)
    }

    /// Liquid with default gas density and viscosity.
    pub fn liquid(liquid_density: f64, liquid_viscosity: f64) -> FlowResult<Self> {
        Self::new(
            liquid_density,
            DEFAULT_GAS_DENSITY,
            liquid_viscosity,
            DEFAULT_GAS_VISCOSITY,
        )
    }

    pub fn with_surface_tension(mut self, sigma: f64) -> FlowResult<Self> {
        self.surface_tension = Some(require_positive_property(sigma, "surface tension")?);
        Ok(self)
    }

    /// Same viscosities, new phase densities.
    pub fn with_densities(mut self, liquid_density: f64, gas_density: f64) -> FlowResult<Self> {
        self.liquid_density = liquid_density;
        self.gas_density = gas_density;
        self.validate()?;
        Ok(self)
    }

    pub fn surface_tension_or_default(&self) -> f64 {
        self.surface_tension.unwrap_or(DEFAULT_SURFACE_TENSION)
    }

    pub fn validate(&self) -> FlowResult<()> {
        require_positive_property(self.liquid_density, "liquid density")?;
        require_positive_property(self.gas_density, "gas density")?;
        require_positive_property(self.liquid_viscosity, "liquid viscosity")?;
        require_positive_property(self.gas_viscosity, "gas viscosity")?;
        if let Some(sigma) = self.surface_tension {
            require_positive_property(sigma, "surface tension")?;
        }
        Ok(())
    }

    /// Liquid-only hydrostatic gradient at an inclination, psi/ft.
    pub fn static_gradient(&self, sin_inclination: f64) -> f64 {
        self.liquid_density * sin_inclination / 144.0
    }
}

/// Superficial velocities of both phases through a pipe cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidState {
    pub properties: FluidProperties,
    /// Superficial liquid velocity, ft/s
    pub v_sl: f64,
    /// Superficial gas velocity, ft/s
    pub v_sg: f64,
}

impl FluidState {
    pub fn new(properties: FluidProperties, v_sl: f64, v_sg: f64) -> FlowResult<Self> {
        let state = Self {
            properties,
            v_sl,
            v_sg,
        };
        state.validate()?;
        Ok(state)
    }

    pub fn validate(&self) -> FlowResult<()> {
        self.properties.validate()?;
        require_non_negative_velocity(self.v_sl, "superficial liquid velocity")?;
        require_non_negative_velocity(self.v_sg, "superficial gas velocity")?;
        Ok(())
    }

    /// v_m = v_sl + v_sg
    pub fn mixture_velocity(&self) -> f64 {
        self.v_sl + self.v_sg
    }

    /// No-slip liquid fraction λ_l, or `None` when nothing flows.
    pub fn no_slip_liquid_fraction(&self) -> Option<f64> {
        let vm = self.mixture_velocity();
        (vm > 0.0).then(|| self.v_sl / vm)
    }

    pub fn is_static(&self) -> bool {
        self.mixture_velocity() <= 0.0
    }
}
