//! wf-flow: multiphase pressure-gradient engine and outflow curves.
//!
//! Provides:
//! - Beggs-Brill flow-pattern map, holdup and gradient
//! - simplified Hagedorn-Brown gradient
//! - Darcy friction factors (laminar / Swamee-Jain)
//! - outflow curve builder with model dispatch as a closed enum
//! - flowline pressure drop
//!
//! Internal working units are ft, ft/s, lbm/ft³, cP and psi/ft. Rates in
//! STB/d and MSCF/d are converted at the curve-builder boundary.
//!
//! # Example
//!
//! ```
//! use wf_flow::{BeggsBrill, FluidProperties, FluidState, PipeGeometry, PressureGradient};
//!
//! let geometry = PipeGeometry::new(2.992, 0.0006, 60.0).unwrap();
//! let fluid = FluidProperties::new(55.0, 3.0, 1.0, 0.02).unwrap();
//! let state = FluidState::new(fluid, 2.0, 3.0).unwrap();
//!
//! let result = BeggsBrill::default().gradient(&geometry, &state).unwrap();
//! assert!(result.pressure_gradient > 0.0);
//! assert!(result.holdup >= 0.4 && result.holdup <= 1.0);
//! ```

pub mod beggs_brill;
pub mod common;
pub mod error;
pub mod flowline;
pub mod friction;
pub mod geometry;
pub mod gradient;
pub mod hagedorn_brown;
pub mod holdup;
pub mod outflow;
pub mod regime;
pub mod state;

pub use beggs_brill::BeggsBrill;
pub use error::{FlowError, FlowResult};
pub use flowline::{Flowline, FlowlineModel, available_flowline_models};
pub use friction::{darcy_friction_factor, two_phase_exponent};
pub use geometry::PipeGeometry;
pub use gradient::{Correlation, GradientResult, PressureGradient, gradient_or_static};
pub use hagedorn_brown::{HagedornBrown, hagedorn_brown_holdup};
pub use holdup::{Holdup, beggs_brill_holdup};
pub use outflow::{GasRate, OutflowModel, OutflowModelKind, Well, available_models};
pub use regime::{FlowRegime, RegimeBoundaries, classify_flow, flow_regime};
pub use state::{FluidProperties, FluidState};
