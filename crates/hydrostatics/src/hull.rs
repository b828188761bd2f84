//! Hull-level aggregates (C8): longitudinal quadrature over frame stations,
//! yielding displacement, centers, and wetted-surface figures.
//!
//! Grounded on `get_submerged_frame(s)`, `get_displacement`, `get_lcb`,
//! `get_bm`, `get_kb`, `get_km`, `get_lcf`, `get_hull_volume`,
//! `get_hull_areas`, and `get_wetted_surface` in `linesplan/lines.py`. These
//! are infallible closed-form/quadrature math, mirroring the original's
//! signatures; boundary validation (empty waterplane, zero displacement)
//! lives in the public API layer that wraps them.

use crate::cfg::HydroCfg;
use crate::clip;
use crate::draft::draft_at;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::geometry::{lengths, Point2};
use crate::quadrature;
use crate::section;
use crate::waterline;

fn station_xs(frames: &[Frame]) -> Vec<f64> {
    frames.iter().map(|f| f.x).collect()
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Submerged portion of one frame at vertical cut `draft`.
pub fn submerged_frame(frame: &Frame, draft: f64) -> Vec<Point2> {
    clip::submerged_polyline(&frame.yz, draft)
}

/// Submerged portion of every frame, at the per-station draft linearly
/// interpolated between `draft_ap` and `draft_fp` (§4.6).
pub fn submerged_frames(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> Vec<Vec<Point2>> {
    let draft_fp = draft_fp.unwrap_or(draft_ap);
    if frames.is_empty() {
        return Vec::new();
    }
    let x0 = frames[0].x;
    let xn = frames[frames.len() - 1].x;
    frames
        .iter()
        .map(|f| submerged_frame(f, draft_at(f.x, x0, xn, draft_ap, draft_fp)))
        .collect()
}

/// Submerged volume (`DISP`) at the given draft/trim.
pub fn displacement(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>, full: bool) -> f64 {
    let xs = station_xs(frames);
    let subs = submerged_frames(frames, draft_ap, draft_fp);
    let cross_sections: Vec<f64> = subs.iter().map(|s| section::area(s, full)).collect();
    quadrature::integrate(&xs, &cross_sections)
}

/// Longitudinal center of buoyancy.
pub fn lcb(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    let xs = station_xs(frames);
    let subs = submerged_frames(frames, draft_ap, draft_fp);
    let cross_sections: Vec<f64> = subs.iter().map(|s| section::area(s, false)).collect();
    let disp = quadrature::integrate(&xs, &cross_sections);
    let weighted: Vec<f64> = xs.iter().zip(&cross_sections).map(|(x, a)| x * a).collect();
    let mom = quadrature::integrate(&xs, &weighted);
    mom / disp
}

/// Volume enclosed by the full (unclipped) hull frames.
pub fn hull_volume(frames: &[Frame]) -> f64 {
    let xs = station_xs(frames);
    let cross_sections: Vec<f64> = frames.iter().map(|f| section::area(&f.yz, false)).collect();
    quadrature::integrate(&xs, &cross_sections)
}

/// Resolve a Python-style (possibly negative) chine index against a chine
/// list's length.
fn resolve_chine_index(chines: &[usize], signed: isize, len: usize) -> Result<usize> {
    if chines.is_empty() {
        return Err(Error::BadIndex { index: 0, len: 0 });
    }
    let n = chines.len() as isize;
    let resolved = if signed < 0 { n + signed } else { signed };
    if resolved < 0 || resolved >= n {
        return Err(Error::BadIndex {
            index: signed.unsigned_abs(),
            len,
        });
    }
    Ok(chines[resolved as usize])
}

/// Hull surface area and deck surface area, split at the `deck_chine`-th
/// chine of each frame (Python-style index: `-1` is the last chine).
pub fn hull_areas(frames: &[Frame], deck_chine: isize) -> Result<(f64, f64)> {
    let xs = station_xs(frames);
    let mut hull = Vec::with_capacity(frames.len());
    let mut deck = Vec::with_capacity(frames.len());
    for f in frames {
        let chines = f.chines.as_slice();
        let idx = resolve_chine_index(chines, deck_chine, chines.len())?;
        hull.push(lengths(&f.yz[..=idx]).iter().sum::<f64>());
        deck.push(lengths(&f.yz[idx..]).iter().sum::<f64>());
    }
    let ha = 2.0 * quadrature::integrate(&xs, &hull);
    let da = 2.0 * quadrature::integrate(&xs, &deck);
    Ok((ha, da))
}

/// Wetted surface area of the submerged hull at the given draft/trim.
pub fn wetted_surface(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    let xs = station_xs(frames);
    let subs = submerged_frames(frames, draft_ap, draft_fp);
    let lens: Vec<f64> = subs.iter().map(|s| lengths(s).iter().sum()).collect();
    2.0 * quadrature::integrate(&xs, &lens)
}

/// Height of the center of buoyancy above the baseline, found by integrating
/// waterplane area over a sweep of drafts from the keel up to the requested
/// draft (`cfg.kb_samples` points, per §4.9).
pub fn kb(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>, cfg: &HydroCfg) -> f64 {
    let draft_fp = draft_fp.unwrap_or(draft_ap);
    let max_draft = draft_ap.max(draft_fp);
    let drafts_ap = linspace(draft_ap - max_draft, draft_ap, cfg.kb_samples);
    let drafts_fp = linspace(draft_fp - max_draft, draft_fp, cfg.kb_samples);
    let trim_aft = max_draft == draft_ap;
    let areas: Vec<f64> = drafts_ap
        .iter()
        .zip(&drafts_fp)
        .map(|(&dap, &dfp)| {
            let wl = waterline::assemble_waterline(frames, dap, Some(dfp));
            waterline::properties(&wl).0
        })
        .collect();
    let drafts = if trim_aft { &drafts_ap } else { &drafts_fp };
    let dispvol = quadrature::integrate(drafts, &areas);
    let weighted: Vec<f64> = drafts.iter().zip(&areas).map(|(d, a)| d * a).collect();
    let m = quadrature::integrate(drafts, &weighted);
    m / dispvol
}

/// Distance from the center of buoyancy to the metacenter.
pub fn bm(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    let wl = waterline::assemble_waterline(frames, draft_ap, draft_fp);
    let (_, _, i_x, _, _) = waterline::properties(&wl);
    let dispvol = displacement(frames, draft_ap, draft_fp, false);
    2.0 * i_x / dispvol
}

/// Metacentric height above the baseline, `KM = KB + BM`.
pub fn km(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>, cfg: &HydroCfg) -> f64 {
    bm(frames, draft_ap, draft_fp) + kb(frames, draft_ap, draft_fp, cfg)
}

/// Longitudinal position of the center of flotation (area centroid of the
/// waterplane).
pub fn lcf(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> f64 {
    let wl = waterline::assemble_waterline(frames, draft_ap, draft_fp);
    let (area, _, _, m_y, _) = waterline::properties(&wl);
    m_y / area
}
