//! Naval hydrostatics engine: displacement, centers of buoyancy and
//! flotation, metacentric heights, wetted surface, and equilibrium
//! flotation (draft + trim) from a lines plan.

pub mod api;
pub mod cfg;
pub mod clip;
pub mod draft;
pub mod error;
pub mod flotation;
pub mod frame;
pub mod geometry;
pub mod hull;
pub mod lines;
pub mod quadrature;
pub mod section;
pub mod waterline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::HydroCfg;
pub use error::{Error, Result};
pub use frame::Frame;
pub use geometry::{KinkList, Point2, Point3, Polyline};
pub use lines::Lines;

/// Common imports for quick use by callers embedding this engine.
pub mod prelude {
    pub use crate::api::*;
    pub use crate::cfg::HydroCfg;
    pub use crate::error::{Error, Result};
    pub use crate::frame::Frame;
    pub use crate::geometry::{KinkList, Point2, Point3, Polyline};
    pub use crate::lines::Lines;
}
