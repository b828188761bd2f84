//! Crate-wide error type.
//!
//! Grounded on `geom4::volume::VolumeError`: a plain enum with a hand-written
//! `Display` impl rather than a `thiserror` derive, since this crate has no
//! other reason to pull that dependency in.

use std::fmt;

/// Errors surfaced by the hydrostatics engine.
#[derive(Debug)]
pub enum Error {
    /// Malformed input: bad JSON, out-of-order stations, negative half-breadth.
    BadInput(String),
    /// Index out of bounds for an insert/delete/chine operation.
    BadIndex { index: usize, len: usize },
    /// Fewer than two frames touch the requested waterplane, or a nonzero
    /// target displacement submerged to zero volume.
    DegenerateGeometry(String),
    /// The flotation solver failed to converge within the iteration cap.
    SolverDiverged { iterations: usize, residual_norm: f64 },
    /// File I/O or JSON (de)serialization failure.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadInput(msg) => write!(f, "bad input: {msg}"),
            Error::BadIndex { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Error::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {msg}"),
            Error::SolverDiverged {
                iterations,
                residual_norm,
            } => write!(
                f,
                "flotation solver diverged after {iterations} iterations (residual norm {residual_norm:e})"
            ),
            Error::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Result alias used throughout the crate's public API.
pub type Result<T> = std::result::Result<T, Error>;
