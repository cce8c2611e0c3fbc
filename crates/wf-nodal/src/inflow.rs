//! Inflow performance relationships (IPR).
//!
//! Every model maps a flowing bottomhole pressure to a liquid rate (STB/d).
//! Pressures are clipped to `[0, p_res]` and rates floored at zero.

use crate::error::{NodalError, NodalResult, require_non_negative, require_positive};
use std::fmt;
use std::str::FromStr;
use wf_core::{interp, linspace};

/// Default Standing exponent.
pub const DEFAULT_STANDING_EXPONENT: f64 = 1.8;

const INFLOW_MODEL_NAMES: [&str; 6] = [
    "vogel",
    "fetkovich",
    "jones",
    "standing",
    "standing_exponent",
    "skin",
];

pub fn available_inflow_models() -> &'static [&'static str] {
    &INFLOW_MODEL_NAMES
}

/// Inflow model with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum InflowModel {
    /// Solution-gas drive: `q = q_max(1 − 0.2x − 0.8x²)`, `x = pwf/p_res`.
    Vogel { q_max: f64 },
    /// Constant productivity index (STB/d/psi): `q = J(p_res − pwf)`.
    Fetkovich { productivity_index: f64 },
    /// Non-Darcy quadratic `p_res − pwf = C·q + D·q²`.
    Jones { laminar: f64, turbulent: f64 },
    /// Linear above the bubble point, Vogel below, continuous at Pb.
    Standing {
        bubble_point: f64,
        productivity_index: f64,
    },
    /// `q = q_max(1 − (pwf/p_res)^n)`.
    StandingExponent { q_max: f64, exponent: f64 },
    /// Linear PI scaled by skin: `q = J/(1+s)·(p_res − pwf)`.
    SkinAdjusted { productivity_index: f64, skin: f64 },
}

impl InflowModel {
    pub fn kind(&self) -> InflowModelKind {
        match self {
            InflowModel::Vogel { .. } => InflowModelKind::Vogel,
            InflowModel::Fetkovich { .. } => InflowModelKind::Fetkovich,
            InflowModel::Jones { .. } => InflowModelKind::Jones,
            InflowModel::Standing { .. } => InflowModelKind::Standing,
            InflowModel::StandingExponent { .. } => InflowModelKind::StandingExponent,
            InflowModel::SkinAdjusted { .. } => InflowModelKind::SkinAdjusted,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Check parameters against a reservoir pressure (psi).
    pub fn validate(&self, p_res: f64) -> NodalResult<()> {
        require_positive(p_res, "reservoir pressure")?;
        match *self {
            InflowModel::Vogel { q_max } => {
                require_non_negative(q_max, "q_max")?;
            }
            InflowModel::Fetkovich { productivity_index } => {
                require_positive(productivity_index, "productivity index")?;
            }
            InflowModel::Jones { laminar, turbulent } => {
                require_positive(laminar, "laminar coefficient")?;
                require_non_negative(turbulent, "turbulent coefficient")?;
            }
            InflowModel::Standing {
                bubble_point,
                productivity_index,
            } => {
                require_positive(productivity_index, "productivity index")?;
                require_positive(bubble_point, "bubble point")?;
                if bubble_point >= p_res {
                    return Err(NodalError::InvalidParameter {
                        what: "bubble point (must be below reservoir pressure)",
                        value: bubble_point,
                    });
                }
                let denom = vogel_shape(bubble_point / p_res);
                if denom <= 0.0 {
                    return Err(NodalError::InvalidParameter {
                        what: "Vogel calibration denominator at bubble point",
                        value: denom,
                    });
                }
            }
            InflowModel::StandingExponent { q_max, exponent } => {
                require_positive(q_max, "q_max")?;
                require_positive(exponent, "Standing exponent")?;
            }
            InflowModel::SkinAdjusted {
                productivity_index,
                skin,
            } => {
                require_positive(productivity_index, "productivity index")?;
                if !skin.is_finite() {
                    return Err(NodalError::InvalidParameter {
                        what: "skin",
                        value: skin,
                    });
                }
            }
        }
        Ok(())
    }

    /// Liquid rate (STB/d) at flowing bottomhole pressure `pwf` (psi).
    pub fn rate(&self, p_res: f64, pwf: f64) -> NodalResult<f64> {
        self.validate(p_res)?;
        if pwf.is_nan() {
            return Err(NodalError::InvalidParameter {
                what: "flowing bottomhole pressure",
                value: pwf,
            });
        }
        Ok(self.rate_unchecked(p_res, pwf.clamp(0.0, p_res)).max(0.0))
    }

    /// `pwf` already clipped and parameters validated.
    fn rate_unchecked(&self, p_res: f64, pwf: f64) -> f64 {
        let drawdown = p_res - pwf;
        let x = pwf / p_res;
        match *self {
            InflowModel::Vogel { q_max } => q_max * vogel_shape(x),
            InflowModel::Fetkovich { productivity_index } => productivity_index * drawdown,
            InflowModel::Jones { laminar, turbulent } => {
                if turbulent == 0.0 {
                    drawdown / laminar
                } else {
                    let disc = (laminar * laminar + 4.0 * turbulent * drawdown).max(0.0);
                    (-laminar + disc.sqrt()) / (2.0 * turbulent)
                }
            }
            InflowModel::Standing {
                bubble_point,
                productivity_index,
            } => {
                if pwf >= bubble_point {
                    productivity_index * drawdown
                } else {
                    let q_b = productivity_index * (p_res - bubble_point);
                    let q_max = q_b / vogel_shape(bubble_point / p_res);
                    q_max * vogel_shape(x)
                }
            }
            InflowModel::StandingExponent { q_max, exponent } => q_max * (1.0 - x.powf(exponent)),
            InflowModel::SkinAdjusted {
                productivity_index,
                skin,
            } => {
                let mut denom = 1.0 + skin;
                if denom <= 0.0 {
                    denom = 1e-3;
                }
                productivity_index / denom * drawdown
            }
        }
    }

    /// Tabulate the model on `npts` uniformly spaced pressures in `[0, p_res]`.
    pub fn table(&self, p_res: f64, npts: usize) -> NodalResult<InflowTable> {
        self.validate(p_res)?;
        if npts < 2 {
            return Err(NodalError::InvalidParameter {
                what: "inflow table points (need at least 2)",
                value: npts as f64,
            });
        }
        let pressures = linspace(0.0, p_res, npts);
        let rates = pressures
            .iter()
            .map(|&pwf| self.rate_unchecked(p_res, pwf.clamp(0.0, p_res)).max(0.0))
            .collect();
        Ok(InflowTable { pressures, rates })
    }
}

fn vogel_shape(x: f64) -> f64 {
    1.0 - 0.2 * x - 0.8 * x * x
}

/// Sampled IPR: pressures ascending from 0 to `p_res`, rates alongside.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InflowTable {
    /// psi, ascending
    pub pressures: Vec<f64>,
    /// STB/d
    pub rates: Vec<f64>,
}

impl InflowTable {
    pub fn max_rate(&self) -> f64 {
        self.rates.iter().copied().fold(0.0, f64::max)
    }

    /// Inflow pressure at each grid rate, by linear interpolation on the
    /// table reversed to ascending rate. Grid rates outside the table's rate
    /// range are clamped into it.
    pub fn pressures_on(&self, rate_grid: &[f64]) -> NodalResult<Vec<f64>> {
        let q: Vec<f64> = self.rates.iter().rev().copied().collect();
        let p: Vec<f64> = self.pressures.iter().rev().copied().collect();

        let q_min = q.iter().copied().fold(f64::INFINITY, f64::min);
        let q_max = q.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        rate_grid
            .iter()
            .map(|&rate| interp(rate.clamp(q_min, q_max), &q, &p).map_err(NodalError::from))
            .collect()
    }
}

/// Inflow model names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InflowModelKind {
    Vogel,
    Fetkovich,
    Jones,
    Standing,
    StandingExponent,
    SkinAdjusted,
}

impl InflowModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InflowModelKind::Vogel => "vogel",
            InflowModelKind::Fetkovich => "fetkovich",
            InflowModelKind::Jones => "jones",
            InflowModelKind::Standing => "standing",
            InflowModelKind::StandingExponent => "standing_exponent",
            InflowModelKind::SkinAdjusted => "skin",
        }
    }
}

impl FromStr for InflowModelKind {
    type Err = NodalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        match norm.as_str() {
            "vogel" => Ok(InflowModelKind::Vogel),
            "fetkovich" => Ok(InflowModelKind::Fetkovich),
            "jones" => Ok(InflowModelKind::Jones),
            "standing" => Ok(InflowModelKind::Standing),
            "standing_exponent" => Ok(InflowModelKind::StandingExponent),
            "skin" => Ok(InflowModelKind::SkinAdjusted),
            _ => Err(NodalError::UnknownModel {
                name: s.to_string(),
                available: available_inflow_models().join(", "),
            }),
        }
    }
}

impl fmt::Display for InflowModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
