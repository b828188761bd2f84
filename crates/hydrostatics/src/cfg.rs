//! Hydrostatics configuration (tolerances, sampling, solver limits).
//!
//! Direct analogue of `geom2::types::GeomCfg` — centralizes every numeric
//! knob left as "default, overridable".

/// Tunable numerics for the hydrostatics engine.
#[derive(Clone, Copy, Debug)]
pub struct HydroCfg {
    /// `close_frames` centerline-snap threshold (§4.3). Default 5e-3.
    pub close_margin: f64,
    /// Number of sampling waterplanes used by `hull::kb` (§4.8). Default 41.
    pub kb_samples: usize,
    /// Flotation solver residual tolerance, SI units (§4.9). Default 1e-6.
    pub solver_tol: f64,
    /// Flotation solver maximum outer iterations (§4.9). Default 50.
    pub solver_max_iter: usize,
}

impl Default for HydroCfg {
    fn default() -> Self {
        Self {
            close_margin: 5e-3,
            kb_samples: 41,
            solver_tol: 1e-6,
            solver_max_iter: 50,
        }
    }
}
