//! Black-oil fluid description feeding density inputs to the gradient engine.

use crate::black_oil::{gas_density, stock_tank_oil_density};
use crate::error::{FluidResult, require_positive};
use crate::table::{BubblePoint, PvtTable, ZMethod};

/// In-situ densities at a reference pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityPair {
    /// Liquid (oil) density, lbm/ft³
    pub liquid: f64,
    /// Gas density, lbm/ft³
    pub gas: f64,
    /// Oil formation volume factor used for `liquid`, RB/STB
    pub bo: f64,
    /// z-factor used for `gas`
    pub z: f64,
}

/// Black-oil characterization of a produced fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackOilFluid {
    /// °F
    pub temperature: f64,
    /// °API
    pub api: f64,
    /// Gas specific gravity (air = 1)
    pub gas_gravity: f64,
    pub z_method: ZMethod,
}

impl BlackOilFluid {
    pub fn new(temperature: f64, api: f64, gas_gravity: f64, z_method: ZMethod) -> FluidResult<Self> {
        require_positive(api, "API gravity")?;
        require_positive(gas_gravity, "gas specific gravity")?;
        Ok(Self {
            temperature,
            api,
            gas_gravity,
            z_method,
        })
    }

    /// PVT table at this fluid's temperature.
    pub fn table(&self, pressures: &[f64], bubble_point: BubblePoint) -> FluidResult<PvtTable> {
        PvtTable::build(
            pressures,
            self.temperature,
            self.api,
            self.gas_gravity,
            bubble_point,
            self.z_method,
        )
    }

    /// Liquid and gas densities at `p_ref` psia, treating `p_ref` as the
    /// bubble point (saturated oil).
    pub fn densities(&self, p_ref: f64) -> FluidResult<DensityPair> {
        let p_ref = require_positive(p_ref, "reference pressure")?;
        let table = self.table(&[p_ref], BubblePoint::MaxPressure)?;
        let row = table.rows[0];

        let liquid = stock_tank_oil_density(self.api)? / row.bo;
        let gas = gas_density(p_ref, self.temperature, self.gas_gravity, row.z)?;

        Ok(DensityPair {
            liquid,
            gas,
            bo: row.bo,
            z: row.z,
        })
    }
}
