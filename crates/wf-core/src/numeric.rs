use crate::WfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}

/// Uniformly spaced points from `start` to `end`, both included.
///
/// The last point is pinned to `end` exactly. `n == 1` yields `[start]`.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }

    let delta = (end - start) / (n - 1) as Real;
    let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
    points[n - 1] = end;
    points
}

/// Piecewise-linear interpolation of `ys` over ascending `xs`.
///
/// `x` outside `[xs[0], xs[last]]` takes the end value. Repeated abscissae
/// resolve to the first segment that brackets `x`.
pub fn interp(x: Real, xs: &[Real], ys: &[Real]) -> Result<Real, WfError> {
    if xs.is_empty() {
        return Err(WfError::InvalidArg {
            what: "interpolation table is empty",
        });
    }
    if xs.len() != ys.len() {
        return Err(WfError::LengthMismatch {
            what: "interpolation table",
            expected: xs.len(),
            actual: ys.len(),
        });
    }

    let last = xs.len() - 1;
    if x <= xs[0] {
        return Ok(ys[0]);
    }
    if x >= xs[last] {
        return Ok(ys[last]);
    }

    for i in 0..last {
        let (x0, x1) = (xs[i], xs[i + 1]);
        if x >= x0 && x <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return Ok(ys[i + 1]);
            }
            let t = (x - x0) / span;
            return Ok(ys[i] + t * (ys[i + 1] - ys[i]));
        }
    }

    Err(WfError::Invariant {
        what: "interpolation abscissae are not ascending",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linspace_pins_endpoints() {
        let pts = linspace(0.0, 1200.0, 7);
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[0], 0.0);
        assert_eq!(pts[6], 1200.0);
        assert!((pts[3] - 600.0).abs() < 1e-9);
        assert_eq!(linspace(5.0, 9.0, 1), vec![5.0]);
        assert!(linspace(5.0, 9.0, 0).is_empty());
    }

    #[test]
    fn interp_inside_and_clamped() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [100.0, 50.0, 0.0];
        assert!((interp(5.0, &xs, &ys).unwrap() - 75.0).abs() < 1e-12);
        assert_eq!(interp(-1.0, &xs, &ys).unwrap(), 100.0);
        assert_eq!(interp(25.0, &xs, &ys).unwrap(), 0.0);
    }

    #[test]
    fn interp_rejects_mismatched_table() {
        let err = interp(1.0, &[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(matches!(err, WfError::LengthMismatch { .. }));
    }
}
