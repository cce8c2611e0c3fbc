//! wf-nodal: inflow performance and bottomhole nodal analysis.
//!
//! Provides:
//! - inflow models (Vogel, Fetkovich, Jones, Standing composite, Standing
//!   exponent, skin-adjusted PI)
//! - the operating-point intersection on a shared rate grid
//! - a driver that builds both curves and solves for the operating point
//!
//! # Example
//!
//! ```
//! use wf_flow::{FluidProperties, OutflowModel, Well};
//! use wf_nodal::{InflowModel, NodalAnalysis};
//!
//! let fluid = FluidProperties::liquid(60.0, 1.0).unwrap();
//! let well = Well::vertical(5000.0, 2.992, fluid).unwrap();
//! let analysis = NodalAnalysis::new(
//!     3000.0,
//!     InflowModel::Vogel { q_max: 1200.0 },
//!     OutflowModel::default(),
//!     well,
//! );
//! let solution = analysis.solve().unwrap();
//! assert!(solution.operating_point.rate > 0.0);
//! ```

pub mod analysis;
pub mod error;
pub mod inflow;
pub mod intersection;

pub use analysis::{DEFAULT_POINTS, MIN_POINTS, NodalAnalysis, NodalSolution};
pub use error::{NodalError, NodalResult};
pub use inflow::{InflowModel, InflowModelKind, InflowTable, available_inflow_models};
pub use intersection::{Intersection, IntersectionKind, find_intersection};
