//! PVT table generation over a list of pressures.

use crate::black_oil::{
    bubble_point_standing, gas_fvf, oil_fvf_standing, solution_gas_ratio_standing, z_factor_papay,
};
use crate::error::{FluidError, FluidResult};
use std::fmt;
use std::str::FromStr;

/// Gas compressibility model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZMethod {
    #[default]
    Papay,
    Ideal,
}

impl ZMethod {
    pub fn z_factor(self, p_psia: f64, t_f: f64, gamma_g: f64) -> FluidResult<f64> {
        match self {
            ZMethod::Papay => z_factor_papay(p_psia, t_f, gamma_g),
            ZMethod::Ideal => Ok(1.0),
        }
    }
}

impl FromStr for ZMethod {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "papay" => Ok(ZMethod::Papay),
            "ideal" => Ok(ZMethod::Ideal),
            _ => Err(FluidError::UnknownMethod {
                name: s.to_string(),
                expected: "papay, ideal".to_string(),
            }),
        }
    }
}

impl fmt::Display for ZMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZMethod::Papay => write!(f, "papay"),
            ZMethod::Ideal => write!(f, "ideal"),
        }
    }
}

/// How the bubble point of a table is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BubblePoint {
    /// Use the highest tabulated pressure.
    #[default]
    MaxPressure,
    /// Known bubble-point pressure (psia); Rsb follows from Standing.
    Pressure(f64),
    /// Known solution gas ratio at Pb (scf/STB); Pb follows from Standing.
    SolutionGas(f64),
    /// Both known.
    Both { pressure: f64, solution_gas: f64 },
}

/// One tabulated pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PvtRow {
    /// psia
    pub pressure: f64,
    /// scf/STB
    pub rs: f64,
    /// RB/STB
    pub bo: f64,
    pub z: f64,
    /// RB/scf
    pub bg: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PvtTable {
    pub rows: Vec<PvtRow>,
    pub bubble_point: f64,
    pub rs_at_bubble_point: f64,
}

impl PvtTable {
    /// Build a black-oil table at temperature `t_f` for the given pressures.
    ///
    /// Above the bubble point Rs is held at Rsb and Bo at Bob.
    pub fn build(
        pressures: &[f64],
        t_f: f64,
        api: f64,
        gamma_g: f64,
        bubble_point: BubblePoint,
        z_method: ZMethod,
    ) -> FluidResult<Self> {
        if pressures.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "PVT table needs at least one pressure",
            });
        }

        let (pb, rsb) = match bubble_point {
            BubblePoint::MaxPressure => {
                let pb = pressures
                    .iter()
                    .copied()
                    .filter(|p| !p.is_nan())
                    .fold(f64::NEG_INFINITY, f64::max);
                (pb, solution_gas_ratio_standing(pb, t_f, api, gamma_g)?)
            }
            BubblePoint::Pressure(pb) => (pb, solution_gas_ratio_standing(pb, t_f, api, gamma_g)?),
            BubblePoint::SolutionGas(rsb) => {
                (bubble_point_standing(rsb, t_f, api, gamma_g)?, rsb)
            }
            BubblePoint::Both {
                pressure,
                solution_gas,
            } => (pressure, solution_gas),
        };

        let bob = oil_fvf_standing(rsb, t_f, api, gamma_g)?;

        let rows = pressures
            .iter()
            .map(|&p| {
                let rs = solution_gas_ratio_standing(p, t_f, api, gamma_g)?.min(rsb);
                let bo = if p > pb {
                    bob
                } else {
                    oil_fvf_standing(rs, t_f, api, gamma_g)?
                };
                let z = z_method.z_factor(p, t_f, gamma_g)?;
                let bg = gas_fvf(p, t_f, z)?;
                Ok(PvtRow {
                    pressure: p,
                    rs,
                    bo,
                    z,
                    bg,
                })
            })
            .collect::<FluidResult<Vec<_>>>()?;

        Ok(Self {
            rows,
            bubble_point: pb,
            rs_at_bubble_point: rsb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::linspace;

    #[test]
    fn table_has_one_row_per_pressure() {
        let p = linspace(500.0, 3000.0, 10);
        let table = PvtTable::build(&p, 180.0, 35.0, 0.8, BubblePoint::default(), ZMethod::Papay)
            .unwrap();
        assert_eq!(table.rows.len(), 10);
        assert!((table.bubble_point - 3000.0).abs() < 1e-12);
        assert!(table.rows.iter().all(|r| r.bo > 0.0 && r.bg > 0.0));
    }

    #[test]
    fn above_bubble_point_is_flat() {
        let p = [1000.0, 2000.0, 3000.0];
        let table = PvtTable::build(
            &p,
            180.0,
            35.0,
            0.8,
            BubblePoint::Pressure(1500.0),
            ZMethod::Ideal,
        )
        .unwrap();
        assert_eq!(table.rows[1].rs, table.rs_at_bubble_point);
        assert_eq!(table.rows[1].bo, table.rows[2].bo);
        assert!(table.rows[0].rs < table.rs_at_bubble_point);
        assert!(table.rows.iter().all(|r| r.z == 1.0));
    }

    #[test]
    fn bubble_point_from_solution_gas() {
        let table = PvtTable::build(
            &[1000.0],
            180.0,
            35.0,
            0.8,
            BubblePoint::SolutionGas(600.0),
            ZMethod::Papay,
        )
        .unwrap();
        assert!(table.bubble_point > 0.0);
        assert_eq!(table.rs_at_bubble_point, 600.0);
    }

    #[test]
    fn empty_pressure_list_rejected() {
        let err = PvtTable::build(&[], 180.0, 35.0, 0.8, BubblePoint::default(), ZMethod::Papay)
            .unwrap_err();
        assert!(matches!(err, FluidError::InvalidArg { .. }));
    }

    #[test]
    fn z_method_parses_by_name() {
        assert_eq!(" Papay ".parse::<ZMethod>().unwrap(), ZMethod::Papay);
        assert_eq!("IDEAL".parse::<ZMethod>().unwrap(), ZMethod::Ideal);
        assert!("peng_robinson".parse::<ZMethod>().is_err());
    }
}
