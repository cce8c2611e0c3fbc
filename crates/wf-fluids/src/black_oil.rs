//! Black-oil correlations.
//!
//! These are screening-grade correlations, valid over the ranges their
//! authors fit them to. Temperatures are °F throughout; the Standing
//! exponents use `T - 460` as the temperature term.

use crate::error::{FluidError, FluidResult, require_positive};
use wf_core::units::{constants::WATER_DENSITY_LBM_FT3, fahrenheit_to_rankine};

/// Apparent molecular weight of air, lb/lbmol.
const AIR_MOLECULAR_WEIGHT: f64 = 28.97;

/// Universal gas constant, psia·ft³/(lbmol·°R).
const GAS_CONSTANT: f64 = 10.7316;

/// Papay z-factor clamp.
const Z_MIN: f64 = 0.2;
const Z_MAX: f64 = 2.0;

/// Oil specific gravity (water = 1) from API gravity.
pub fn oil_specific_gravity(api: f64) -> FluidResult<f64> {
    let api = require_positive(api, "API gravity")?;
    Ok(141.5 / (api + 131.5))
}

/// Standing solution gas-oil ratio for saturated oil, scf/STB.
pub fn solution_gas_ratio_standing(
    p_psia: f64,
    t_f: f64,
    api: f64,
    gamma_g: f64,
) -> FluidResult<f64> {
    let gamma_g = require_positive(gamma_g, "gas specific gravity")?;

    let x = 0.0125 * api - 0.00091 * (t_f - 460.0);
    let rs = gamma_g * ((p_psia / 18.2 + 1.4) * 10f64.powf(x)).powf(1.2048);
    Ok(rs.max(0.0))
}

/// Standing bubble-point pressure from the solution gas ratio at Pb, psia.
pub fn bubble_point_standing(rsb: f64, t_f: f64, api: f64, gamma_g: f64) -> FluidResult<f64> {
    if !(rsb >= 0.0) {
        return Err(FluidError::NonPhysical {
            what: "solution gas ratio at bubble point",
            value: rsb,
        });
    }
    let gamma_g = require_positive(gamma_g, "gas specific gravity")?;

    let a = 0.00091 * (t_f - 460.0) - 0.0125 * api;
    let pb = 18.2 * ((rsb / gamma_g).powf(0.83) * 10f64.powf(a) - 1.4);
    Ok(pb.max(0.0))
}

/// Standing oil formation volume factor for saturated oil, RB/STB.
pub fn oil_fvf_standing(rs: f64, t_f: f64, api: f64, gamma_g: f64) -> FluidResult<f64> {
    let gamma_g = require_positive(gamma_g, "gas specific gravity")?;
    let gamma_o = oil_specific_gravity(api)?;

    let f = rs * (gamma_o / gamma_g) + 1.25 * t_f;
    let bo = 0.9759 + 0.000120 * f.powf(1.2);
    Ok(bo.max(1e-9))
}

/// Pseudo-critical pressure (psia) and temperature (°R).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoCritical {
    pub pressure: f64,
    pub temperature: f64,
}

/// Sutton pseudo-critical properties for sweet natural gas.
pub fn pseudocritical_sutton(gamma_g: f64) -> FluidResult<PseudoCritical> {
    let gg = require_positive(gamma_g, "gas specific gravity")?;
    Ok(PseudoCritical {
        pressure: 787.0 - 147.0 * gg - 7.5 * gg * gg,
        temperature: 169.0 + 314.0 * gg - 71.3 * gg * gg,
    })
}

/// Papay explicit gas compressibility factor, clamped to `[0.2, 2.0]`.
pub fn z_factor_papay(p_psia: f64, t_f: f64, gamma_g: f64) -> FluidResult<f64> {
    let pc = pseudocritical_sutton(gamma_g)?;
    if pc.pressure <= 0.0 {
        return Err(FluidError::OutOfRange {
            what: "pseudo-critical pressure",
            value: pc.pressure,
        });
    }
    if pc.temperature <= 0.0 {
        return Err(FluidError::OutOfRange {
            what: "pseudo-critical temperature",
            value: pc.temperature,
        });
    }

    let ppr = p_psia / pc.pressure;
    let tpr = fahrenheit_to_rankine(t_f) / pc.temperature;

    let z = 1.0 - (3.53 * ppr) / 10f64.powf(0.9813 * tpr)
        + (0.274 * ppr * ppr) / 10f64.powf(0.815 * tpr);
    Ok(z.clamp(Z_MIN, Z_MAX))
}

/// Gas formation volume factor, RB/scf.
pub fn gas_fvf(p_psia: f64, t_f: f64, z: f64) -> FluidResult<f64> {
    let p = require_positive(p_psia, "pressure")?;
    let bg = 0.00504 * z * fahrenheit_to_rankine(t_f) / p;
    Ok(bg.max(1e-12))
}

/// Real-gas density, lbm/ft³.
pub fn gas_density(p_psia: f64, t_f: f64, gamma_g: f64, z: f64) -> FluidResult<f64> {
    let p = require_positive(p_psia, "pressure")?;
    let gg = require_positive(gamma_g, "gas specific gravity")?;
    let z = require_positive(z, "z-factor")?;

    let mw = AIR_MOLECULAR_WEIGHT * gg;
    Ok(p * mw / (z * GAS_CONSTANT * fahrenheit_to_rankine(t_f)))
}

/// Stock-tank oil density, lbm/ft³.
pub(crate) fn stock_tank_oil_density(api: f64) -> FluidResult<f64> {
    Ok(WATER_DENSITY_LBM_FT3 * oil_specific_gravity(api)?)
}
