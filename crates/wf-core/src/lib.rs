//! wf-core: stable foundation for wellflow.
//!
//! Contains:
//! - units (uom aliases, oilfield constants and conversions)
//! - numeric (Real + tolerances + float helpers)
//! - curve (rate/pressure curves and the operating point)
//! - error (shared error types)

pub mod curve;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use curve::{Curve, CurvePoint, OperatingPoint};
pub use error::{WfError, WfResult};
pub use numeric::*;
