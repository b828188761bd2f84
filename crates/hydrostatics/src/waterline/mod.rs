//! Waterline assembly (C6) and metrics (C7).

pub mod assemble;
pub mod metrics;

pub use assemble::assemble_waterline;
pub use metrics::{properties, WaterlineProperties};
