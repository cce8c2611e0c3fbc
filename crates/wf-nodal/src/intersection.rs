//! Locating the inflow/outflow operating point on a shared rate grid.

use crate::error::{NodalError, NodalResult};
use tracing::{debug, warn};
use wf_core::{OperatingPoint, Tolerances, nearly_equal};

/// Residual treated as an exact match (psi, absolute only).
pub const EXACT_TOLERANCE: Tolerances = Tolerances {
    abs: 1e-12,
    rel: 0.0,
};

/// How the operating point was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntersectionKind {
    /// A grid sample where the curves coincide.
    Exact,
    /// Linear interpolation inside the first sign change.
    Crossing,
    /// Outflow exceeds inflow everywhere; the well does not flow.
    NoFlow,
    /// Inflow exceeds outflow everywhere; capped by the top of the grid.
    GridLimited,
    /// Closest approach without a crossing.
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    pub point: OperatingPoint,
    pub kind: IntersectionKind,
}

/// Find where `inflow − outflow` changes sign along `rates`.
///
/// Only samples where all three arrays are finite are considered. Order of
/// resolution: an exact zero, the first sign change (interpolated), outflow
/// above inflow everywhere (first sample), inflow above outflow everywhere
/// (last sample), else the sample with the smallest residual. Reported
/// pressures are inflow pressures.
pub fn find_intersection(
    rates: &[f64],
    inflow: &[f64],
    outflow: &[f64],
) -> NodalResult<Intersection> {
    for (what, len) in [("inflow pressures", inflow.len()), ("outflow pressures", outflow.len())] {
        if len != rates.len() {
            return Err(NodalError::GridMismatch {
                what,
                expected: rates.len(),
                actual: len,
            });
        }
    }

    // (rate, inflow pressure, residual)
    let samples: Vec<(f64, f64, f64)> = rates
        .iter()
        .zip(inflow)
        .zip(outflow)
        .map(|((&q, &pi), &po)| (q, pi, pi - po))
        .filter(|&(q, pi, d)| q.is_finite() && pi.is_finite() && d.is_finite())
        .collect();

    if samples.is_empty() {
        return Err(NodalError::NoFiniteData);
    }

    let at = |q: f64, p: f64, kind| Intersection {
        point: OperatingPoint {
            rate: q,
            pressure: p,
        },
        kind,
    };

    if let Some(&(q, p, _)) = samples
        .iter()
        .find(|s| nearly_equal(s.2, 0.0, EXACT_TOLERANCE))
    {
        return Ok(at(q, p, IntersectionKind::Exact));
    }

    if let Some(w) = samples
        .windows(2)
        .find(|w| w[0].2.signum() * w[1].2.signum() < 0.0)
    {
        let (q1, p1, d1) = w[0];
        let (q2, p2, d2) = w[1];
        let t = d1 / (d1 - d2);
        return Ok(at(
            q1 + t * (q2 - q1),
            p1 + t * (p2 - p1),
            IntersectionKind::Crossing,
        ));
    }

    if samples.iter().all(|s| s.2 < 0.0) {
        let (q, p, d) = samples[0];
        debug!(residual = d, "outflow above inflow everywhere; no flow");
        return Ok(at(q, p, IntersectionKind::NoFlow));
    }

    if samples.iter().all(|s| s.2 > 0.0) {
        let (q, p, d) = samples[samples.len() - 1];
        debug!(rate = q, residual = d, "inflow above outflow on whole grid");
        return Ok(at(q, p, IntersectionKind::GridLimited));
    }

    // Mixed signs always produce a crossing above.
    let &(q, p, d) = samples
        .iter()
        .min_by(|a, b| a.2.abs().total_cmp(&b.2.abs()))
        .ok_or(NodalError::NoFiniteData)?;
    warn!(rate = q, residual = d, "no crossing found; using nearest sample");
    Ok(at(q, p, IntersectionKind::Nearest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_first_crossing() {
        let q = [0.0, 100.0, 200.0];
        let inflow = [3000.0, 2000.0, 1000.0];
        let outflow = [1500.0, 1500.0, 1500.0];
        let x = find_intersection(&q, &inflow, &outflow).unwrap();
        assert_eq!(x.kind, IntersectionKind::Crossing);
        assert!((x.point.rate - 150.0).abs() < 1e-9);
        assert!((x.point.pressure - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn exact_sample_wins() {
        let q = [0.0, 100.0, 200.0];
        let inflow = [3000.0, 2000.0, 1000.0];
        let outflow = [1000.0, 2000.0, 3000.0];
        let x = find_intersection(&q, &inflow, &outflow).unwrap();
        assert_eq!(x.kind, IntersectionKind::Exact);
        assert_eq!(x.point.rate, 100.0);
        assert_eq!(x.point.pressure, 2000.0);
    }

    #[test]
    fn degenerate_cases() {
        let q = [0.0, 100.0, 200.0];
        let inflow = [3000.0, 2000.0, 1000.0];

        let dead = find_intersection(&q, &inflow, &[4000.0; 3]).unwrap();
        assert_eq!(dead.kind, IntersectionKind::NoFlow);
        assert_eq!(dead.point.rate, 0.0);
        assert_eq!(dead.point.pressure, 3000.0);

        let capped = find_intersection(&q, &inflow, &[500.0; 3]).unwrap();
        assert_eq!(capped.kind, IntersectionKind::GridLimited);
        assert_eq!(capped.point.rate, 200.0);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let q = [0.0, 100.0, 200.0, 300.0];
        let inflow = [3000.0, f64::NAN, 2000.0, 1000.0];
        let outflow = [1500.0, 1500.0, f64::INFINITY, 1500.0];
        let x = find_intersection(&q, &inflow, &outflow).unwrap();
        // crossing is between the first and last samples
        assert!((x.point.rate - 225.0).abs() < 1e-9);
        assert!((x.point.pressure - 1500.0).abs() < 1e-9);

        assert_eq!(
            find_intersection(&[0.0], &[f64::NAN], &[1.0]),
            Err(NodalError::NoFiniteData)
        );
    }

    #[test]
    fn length_mismatch() {
        assert!(matches!(
            find_intersection(&[0.0, 1.0], &[1.0, 2.0], &[1.0]),
            Err(NodalError::GridMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }
}
