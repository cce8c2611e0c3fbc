//! wf-fluids: simplified black-oil fluid properties for wellflow.
//!
//! Provides:
//! - Standing (1947) solution gas ratio, bubble point and oil formation volume factor
//! - Sutton (1985) pseudo-critical properties for sweet gas
//! - Papay explicit z-factor and gas formation volume factor
//! - PVT table generation over a pressure list
//! - Liquid/gas density pairs for the pressure-gradient engine
//!
//! Units follow oilfield conventions: psia, °F, °API, scf/STB, RB/STB, RB/scf
//! and lbm/ft³.
//!
//! # Example
//!
//! ```
//! use wf_fluids::{BlackOilFluid, ZMethod};
//!
//! let fluid = BlackOilFluid::new(180.0, 35.0, 0.8, ZMethod::Papay).unwrap();
//! let pair = fluid.densities(2000.0).unwrap();
//! assert!(pair.liquid > pair.gas);
//! ```

pub mod black_oil;
pub mod error;
pub mod fluid;
pub mod table;

// Re-exports for ergonomics
pub use black_oil::{
    PseudoCritical, bubble_point_standing, gas_density, gas_fvf, oil_fvf_standing,
    oil_specific_gravity, pseudocritical_sutton, solution_gas_ratio_standing, z_factor_papay,
};
pub use error::{FluidError, FluidResult};
pub use fluid::{BlackOilFluid, DensityPair};
pub use table::{BubblePoint, PvtRow, PvtTable, ZMethod};
