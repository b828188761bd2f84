//! Curated public API surface (§6): thin, named wrappers over the module
//! functions, matching the entry points a host embedding this engine calls.
//!
//! Grounded on the flat `get_*`/`load_*`/`save_*` function surface of
//! `linesplan/lines.py`, laid out the way `viterbo::api` curates its own
//! module internals into one stable import path.

use crate::cfg::HydroCfg;
use crate::error::{Error, Result};
use crate::flotation;
use crate::frame::Frame;
use crate::geometry::Point2;
use crate::geometry::Point3;
use crate::hull;
use crate::lines::{self, Lines};
use crate::section;
use crate::waterline::{self, WaterlineProperties};
use std::path::Path;

pub fn load_lines_plan(path: impl AsRef<Path>) -> Result<Lines> {
    lines::load_lines_plan(path)
}

pub fn save_lines_plan(lines: &Lines, path: impl AsRef<Path>) -> Result<()> {
    lines::save_lines_plan(lines, path)
}

/// Waterline at the given draft/trim. Errs with `DegenerateGeometry` if
/// fewer than two frames touch the waterplane.
pub fn get_waterline(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> Result<Vec<Point3>> {
    let wl = waterline::assemble_waterline(frames, draft_ap, draft_fp);
    if wl.is_empty() {
        return Err(Error::DegenerateGeometry(
            "fewer than two frames touch the requested waterplane".to_string(),
        ));
    }
    Ok(wl)
}

/// Waterlines at a sweep of draft/trim pairs. Unlike `get_waterline`, entries
/// for non-touching planes are left as empty waterlines rather than erroring
/// (used internally by `get_kb`'s draft sweep).
pub fn get_waterlines(frames: &[Frame], drafts_ap: &[f64], drafts_fp: Option<&[f64]>) -> Vec<Vec<Point3>> {
    match drafts_fp {
        Some(fp) => drafts_ap
            .iter()
            .zip(fp)
            .map(|(&dap, &dfp)| waterline::assemble_waterline(frames, dap, Some(dfp)))
            .collect(),
        None => drafts_ap
            .iter()
            .map(|&dap| waterline::assemble_waterline(frames, dap, None))
            .collect(),
    }
}

pub fn get_waterline_properties(waterline: &[Point3]) -> WaterlineProperties {
    waterline::properties(waterline)
}

pub fn get_cross_section(yz: &[Point2], full: bool) -> f64 {
    section::area(yz, full)
}

pub fn get_displacement(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>, full: bool) -> f64 {
    hull::displacement(frames, draft_ap, draft_fp, full)
}

pub fn get_lcb(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    hull::lcb(frames, draft_ap, draft_fp)
}

pub fn get_lcf(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    hull::lcf(frames, draft_ap, draft_fp)
}

pub fn get_bm(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    hull::bm(frames, draft_ap, draft_fp)
}

pub fn get_kb(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>, cfg: &HydroCfg) -> f64 {
    hull::kb(frames, draft_ap, draft_fp, cfg)
}

pub fn get_km(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>, cfg: &HydroCfg) -> f64 {
    hull::km(frames, draft_ap, draft_fp, cfg)
}

pub fn get_wetted_surface(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    hull::wetted_surface(frames, draft_ap, draft_fp)
}

/// Hull and deck surface areas, split at the `deck_chine`-th chine of each
/// frame (Python-style index: `-1` is the last chine).
pub fn get_hull_areas(frames: &[Frame], deck_chine: isize) -> Result<(f64, f64)> {
    hull::hull_areas(frames, deck_chine)
}

pub fn get_hull_volume(frames: &[Frame]) -> f64 {
    hull::hull_volume(frames)
}

pub fn get_submerged_frame(frame: &Frame, draft: f64) -> Vec<Point2> {
    hull::submerged_frame(frame, draft)
}

pub fn get_submerged_frames(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> Vec<Vec<Point2>> {
    hull::submerged_frames(frames, draft_ap, draft_fp)
}

pub fn get_full_frames(frames: &[Frame]) -> Vec<Frame> {
    flotation::mirror_to_full(frames)
}

pub fn get_rotated_frames(full_frames: &[Frame], phi: f64) -> Vec<Frame> {
    flotation::rotate(full_frames, phi)
}

pub fn submerge_frames(full_frames: &[Frame], draft: f64, trim: f64) -> (f64, f64, f64, f64) {
    flotation::submerge(full_frames, draft, trim)
}

pub fn float_frames(
    full_frames: &[Frame],
    target_disp: f64,
    target_lcb: f64,
    cfg: &HydroCfg,
) -> Result<(f64, f64)> {
    flotation::float_frames(full_frames, target_disp, target_lcb, cfg)
}
