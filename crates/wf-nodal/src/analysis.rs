//! Nodal analysis at the bottomhole node.

use crate::error::{NodalError, NodalResult, require_positive};
use crate::inflow::{InflowModel, InflowTable};
use crate::intersection::{IntersectionKind, find_intersection};
use tracing::{debug, info};
use wf_core::{Curve, OperatingPoint, linspace};
use wf_flow::{OutflowModel, Well};

/// Smallest accepted rate grid.
pub const MIN_POINTS: usize = 10;
pub const DEFAULT_POINTS: usize = 50;

/// Inflow and outflow models evaluated on one rate grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodalAnalysis {
    /// psi
    pub reservoir_pressure: f64,
    pub inflow: InflowModel,
    pub outflow: OutflowModel,
    pub well: Well,
    /// Top of the rate grid, STB/d. `None` uses the inflow model's AOF.
    pub rate_ceiling: Option<f64>,
    pub points: usize,
}

/// Sampled curves plus the operating point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodalSolution {
    pub operating_point: OperatingPoint,
    pub kind: IntersectionKind,
    /// STB/d
    pub rate_grid: Vec<f64>,
    /// Inflow pwf on the grid, psi
    pub inflow: Vec<f64>,
    /// Outflow pwf on the grid, psi
    pub outflow: Vec<f64>,
    pub inflow_model: String,
    pub outflow_model: String,
}

impl NodalSolution {
    pub fn inflow_curve(&self) -> NodalResult<Curve> {
        Ok(Curve::from_pairs(&self.rate_grid, &self.inflow)?)
    }

    pub fn outflow_curve(&self) -> NodalResult<Curve> {
        Ok(Curve::from_pairs(&self.rate_grid, &self.outflow)?)
    }

    /// `(rate, inflow pwf, outflow pwf)` per grid point.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.rate_grid
            .iter()
            .zip(&self.inflow)
            .zip(&self.outflow)
            .map(|((&q, &pi), &po)| (q, pi, po))
    }

    pub fn flows(&self) -> bool {
        self.kind != IntersectionKind::NoFlow && self.operating_point.rate > 0.0
    }
}

impl NodalAnalysis {
    pub fn new(reservoir_pressure: f64, inflow: InflowModel, outflow: OutflowModel, well: Well) -> Self {
        Self {
            reservoir_pressure,
            inflow,
            outflow,
            well,
            rate_ceiling: None,
            points: DEFAULT_POINTS,
        }
    }

    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_rate_ceiling(mut self, q: f64) -> Self {
        self.rate_ceiling = Some(q);
        self
    }

    pub fn validate(&self) -> NodalResult<()> {
        require_positive(self.reservoir_pressure, "reservoir pressure")?;
        if self.points < MIN_POINTS {
            return Err(NodalError::InvalidParameter {
                what: "rate grid points (need at least 10)",
                value: self.points as f64,
            });
        }
        if let Some(q) = self.rate_ceiling {
            if !q.is_finite() || q < 0.0 {
                return Err(NodalError::InvalidParameter {
                    what: "rate ceiling",
                    value: q,
                });
            }
        }
        self.inflow.validate(self.reservoir_pressure)?;
        self.well.validate()?;
        Ok(())
    }

    /// Ceiling if positive, else the inflow AOF, else 1 STB/d.
    fn grid_top(&self, table: &InflowTable) -> f64 {
        match self.rate_ceiling {
            Some(q) if q > 0.0 => q,
            _ if table.max_rate() > 0.0 => table.max_rate(),
            _ => 1.0,
        }
    }

    /// The shared rate grid `solve` evaluates both curves on.
    pub fn rate_grid(&self) -> NodalResult<Vec<f64>> {
        self.validate()?;
        let table = self.inflow.table(self.reservoir_pressure, self.points)?;
        Ok(linspace(0.0, self.grid_top(&table), self.points))
    }

    /// Operating point only.
    pub fn operating_point(&self) -> NodalResult<OperatingPoint> {
        Ok(self.solve()?.operating_point)
    }

    /// Build both curves on `linspace(0, q_hi, points)` and intersect them.
    pub fn solve(&self) -> NodalResult<NodalSolution> {
        self.validate()?;

        let table = self.inflow.table(self.reservoir_pressure, self.points)?;
        let q_hi = self.grid_top(&table);
        let rate_grid = linspace(0.0, q_hi, self.points);

        let inflow = table.pressures_on(&rate_grid)?;
        let outflow = self.outflow.bottomhole_pressures(&rate_grid, &self.well)?;

        let hit = find_intersection(&rate_grid, &inflow, &outflow)?;
        info!(
            inflow = self.inflow.name(),
            outflow = self.outflow.name(),
            rate = hit.point.rate,
            pwf = hit.point.pressure,
            kind = ?hit.kind,
            "nodal operating point"
        );
        debug!(q_hi, points = self.points, "rate grid");

        Ok(NodalSolution {
            operating_point: hit.point,
            kind: hit.kind,
            rate_grid,
            inflow,
            outflow,
            inflow_model: self.inflow.name().to_string(),
            outflow_model: self.outflow.name().to_string(),
        })
    }
}
