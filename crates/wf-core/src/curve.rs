//! Rate/pressure curves shared by the inflow and outflow sides of a well.

use crate::error::{WfError, WfResult};
use crate::numeric::{Real, interp};

/// One sample of a curve: liquid rate (STB/d) and pressure (psi).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    pub rate: Real,
    pub pressure: Real,
}

/// Intersection of an inflow and an outflow curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatingPoint {
    pub rate: Real,
    pub pressure: Real,
}

/// Ordered rate/pressure samples with strictly increasing, finite rates.
///
/// Pressures may be non-finite; consumers decide how to treat such samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn new(points: Vec<CurvePoint>) -> WfResult<Self> {
        for (i, p) in points.iter().enumerate() {
            if !p.rate.is_finite() {
                return Err(WfError::NonFinite {
                    what: "curve rate",
                    value: p.rate,
                });
            }
            if i > 0 && p.rate <= points[i - 1].rate {
                return Err(WfError::NonMonotonic {
                    what: "curve rate",
                    index: i,
                });
            }
        }
        Ok(Self { points })
    }

    /// Build a curve from parallel rate and pressure slices.
    pub fn from_pairs(rates: &[Real], pressures: &[Real]) -> WfResult<Self> {
        if rates.len() != pressures.len() {
            return Err(WfError::LengthMismatch {
                what: "curve pressures",
                expected: rates.len(),
                actual: pressures.len(),
            });
        }
        let points = rates
            .iter()
            .zip(pressures)
            .map(|(&rate, &pressure)| CurvePoint { rate, pressure })
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rates(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.rate).collect()
    }

    pub fn pressures(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.pressure).collect()
    }

    /// Linear interpolation of pressure at `rate`, clamped to the end samples.
    pub fn pressure_at(&self, rate: Real) -> WfResult<Real> {
        interp(rate, &self.rates(), &self.pressures())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_rates() {
        let curve = Curve::from_pairs(&[0.0, 100.0, 200.0], &[3000.0, 2500.0, 1800.0]).unwrap();
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
        assert!((curve.pressure_at(50.0).unwrap() - 2750.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_repeated_rate() {
        let err = Curve::from_pairs(&[0.0, 100.0, 100.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            WfError::NonMonotonic {
                what: "curve rate",
                index: 2
            }
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Curve::from_pairs(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, WfError::LengthMismatch { .. }));
    }

    #[test]
    fn keeps_non_finite_pressures() {
        let curve = Curve::from_pairs(&[0.0, 1.0], &[f64::NAN, 2.0]).unwrap();
        assert!(curve.pressures()[0].is_nan());
    }
}
