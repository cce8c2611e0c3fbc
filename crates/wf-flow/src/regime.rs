//! Beggs-Brill horizontal flow-pattern map.

use crate::common::{MIN_NO_SLIP_FRACTION, require_non_negative_velocity, require_positive_geometry};
use crate::error::{FlowError, FlowResult};
use std::fmt;
use wf_core::units::constants::G_FT_S2;

/// No-slip liquid fraction splitting the low-fraction branches of the map.
const LOW_FRACTION: f64 = 0.01;

/// No-slip liquid fraction splitting the intermittent branches of the map.
const HIGH_FRACTION: f64 = 0.4;

/// Horizontal flow pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowRegime {
    Segregated,
    Transition,
    Intermittent,
    Distributed,
}

impl FlowRegime {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowRegime::Segregated => "segregated",
            FlowRegime::Transition => "transition",
            FlowRegime::Intermittent => "intermittent",
            FlowRegime::Distributed => "distributed",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Froude-number boundaries L1..L4 for a given no-slip liquid fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeBoundaries {
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
    pub l4: f64,
}

impl RegimeBoundaries {
    /// Boundaries at no-slip liquid fraction `c_l` (0 < c_l <= 1).
    pub fn new(c_l: f64) -> FlowResult<Self> {
        if !(c_l > 0.0 && c_l <= 1.0) {
            return Err(FlowError::InvalidFraction {
                what: "no-slip liquid fraction",
                value: c_l,
            });
        }
        Ok(Self {
            l1: 316.0 * c_l.powf(0.302),
            l2: 0.0009252 * c_l.powf(-2.4684),
            l3: 0.10 * c_l.powf(-1.4516),
            l4: 0.5 * c_l.powf(-6.738),
        })
    }

    /// Flow pattern at mixture Froude number `froude`.
    pub fn classify(&self, c_l: f64, froude: f64) -> FlowRegime {
        let fr = froude;
        if (c_l < LOW_FRACTION && fr < self.l1) || (c_l >= LOW_FRACTION && fr < self.l2) {
            FlowRegime::Segregated
        } else if self.l2 < fr && fr < self.l3 {
            FlowRegime::Transition
        } else if ((LOW_FRACTION..HIGH_FRACTION).contains(&c_l) && self.l3 < fr && fr <= self.l1)
            || (c_l >= HIGH_FRACTION && self.l3 < fr && fr <= self.l4)
        {
            FlowRegime::Intermittent
        } else {
            FlowRegime::Distributed
        }
    }

    /// Weight `A` of the segregated holdup in the transition blend,
    /// `(L3 - Fr) / (L3 - L2)` clamped to `[0, 1]`.
    pub fn transition_weight(&self, froude: f64) -> f64 {
        let span = self.l3 - self.l2;
        if span.abs() < 1e-300 {
            return 0.5;
        }
        ((self.l3 - froude) / span).clamp(0.0, 1.0)
    }
}

/// Inputs derived from superficial velocities that drive the flow-pattern map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeClassification {
    pub regime: FlowRegime,
    /// No-slip liquid fraction, clamped to `[1e-12, 1]`
    pub no_slip_fraction: f64,
    /// Mixture Froude number v_m² / (g·d)
    pub froude: f64,
    pub boundaries: RegimeBoundaries,
}

/// Classify the flow pattern for superficial velocities (ft/s) in a pipe of
/// diameter `d_ft`.
pub fn classify_flow(v_sl: f64, v_sg: f64, d_ft: f64) -> FlowResult<RegimeClassification> {
    let d_ft = require_positive_geometry(d_ft, "pipe diameter")?;
    let v_sl = require_non_negative_velocity(v_sl, "superficial liquid velocity")?;
    let v_sg = require_non_negative_velocity(v_sg, "superficial gas velocity")?;

    let v_m = v_sl + v_sg;
    if v_m <= 0.0 {
        return Err(FlowError::InvalidVelocity {
            what: "mixture velocity",
            value: v_m,
        });
    }

    let c_l = (v_sl / v_m).clamp(MIN_NO_SLIP_FRACTION, 1.0);
    let froude = v_m * v_m / (G_FT_S2 * d_ft);
    let boundaries = RegimeBoundaries::new(c_l)?;

    Ok(RegimeClassification {
        regime: boundaries.classify(c_l, froude),
        no_slip_fraction: c_l,
        froude,
        boundaries,
    })
}

/// Flow pattern only.
pub fn flow_regime(v_sl: f64, v_sg: f64, d_ft: f64) -> FlowResult<FlowRegime> {
    Ok(classify_flow(v_sl, v_sg, d_ft)?.regime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_at_half_fraction() {
        let b = RegimeBoundaries::new(0.5).unwrap();
        assert!((b.l1 - 316.0 * 0.5_f64.powf(0.302)).abs() < 1e-9);
        assert!(b.l2 < b.l3);
        assert!(b.l3 < b.l4);
    }

    #[test]
    fn rejects_bad_fraction() {
        assert!(matches!(
            RegimeBoundaries::new(0.0),
            Err(FlowError::InvalidFraction { .. })
        ));
        assert!(RegimeBoundaries::new(1.5).is_err());
    }

    #[test]
    fn slow_flow_is_segregated() {
        // c_l = 0.5, very low Froude number
        let c = classify_flow(0.05, 0.05, 0.25).unwrap();
        assert_eq!(c.regime, FlowRegime::Segregated);
    }

    #[test]
    fn fast_flow_is_distributed() {
        let c = classify_flow(30.0, 30.0, 0.25).unwrap();
        assert_eq!(c.regime, FlowRegime::Distributed);
    }

    #[test]
    fn transition_band_is_between_l2_and_l3() {
        let c_l: f64 = 0.5;
        let b = RegimeBoundaries::new(c_l).unwrap();
        let fr = 0.5 * (b.l2 + b.l3);
        assert_eq!(b.classify(c_l, fr), FlowRegime::Transition);
        assert_eq!(b.transition_weight(b.l2), 1.0);
        assert_eq!(b.transition_weight(b.l3), 0.0);
    }

    #[test]
    fn intermittent_above_l3() {
        let c_l: f64 = 0.5;
        let b = RegimeBoundaries::new(c_l).unwrap();
        let fr = b.l3 * 1.5;
        assert!(fr <= b.l4);
        assert_eq!(b.classify(c_l, fr), FlowRegime::Intermittent);
    }

    #[test]
    fn zero_mixture_velocity_rejected() {
        assert!(matches!(
            classify_flow(0.0, 0.0, 0.25),
            Err(FlowError::InvalidVelocity { .. })
        ));
    }

    #[test]
    fn regime_names() {
        assert_eq!(FlowRegime::Intermittent.to_string(), "intermittent");
        assert_eq!(flow_regime(30.0, 30.0, 0.25).unwrap(), FlowRegime::Distributed);
    }
}
