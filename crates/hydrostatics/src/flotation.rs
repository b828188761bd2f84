//! Floating attitude (C9): mirroring half-frames to full width, simulating
//! heel, submerging at a given draft/trim, and solving for the draft/trim
//! that hits a target displacement and LCB.
//!
//! Grounded on `get_full_frames`, `get_rotated_frames`, `submerge_frames`,
//! and `float_frames` in `linesplan/lines.py`. The original solves the
//! flotation system with `scipy.optimize.newton_krylov`; this crate has no
//! Krylov solver dependency, so the 2-unknown/2-residual system is solved
//! with a Newton step over a finite-difference Jacobian, inverted directly
//! (no `nalgebra` linear solve needed for a 2x2 system).

use crate::cfg::HydroCfg;
use crate::clip;
use crate::draft::draft_at;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::geometry::{KinkList, Point2};
use crate::quadrature;
use crate::section;

/// Mirror each half-frame across the centerline into a symmetric full-width
/// frame: starboard (negated, reversed) followed by port (as-is). Chine
/// indices are not preserved, matching the original's treatment of full
/// frames as heel/flotation scratch geometry rather than editable lines.
pub fn mirror_to_full(frames: &[Frame]) -> Vec<Frame> {
    frames
        .iter()
        .map(|f| {
            let mut yz: Vec<Point2> = f.yz.iter().rev().map(|p| Point2::new(-p.y, p.z)).collect();
            yz.extend(f.yz.iter().copied());
            Frame {
                x: f.x,
                yz,
                chines: KinkList::new(),
            }
        })
        .collect()
}

/// Heel a set of full frames by rotating every point about the x-axis by
/// `phi` radians.
pub fn rotate(full_frames: &[Frame], phi: f64) -> Vec<Frame> {
    full_frames
        .iter()
        .map(|f| Frame {
            x: f.x,
            yz: f.yz.iter().map(|p| p.rotate(phi)).collect(),
            chines: KinkList::new(),
        })
        .collect()
}

/// Submerge a set of full frames at `draft` (aft) and `draft - trim`
/// (forward), returning `(displacement, x_B, y_B, z_B)`.
///
/// Frames are not mutated; each station's clipped section is computed from
/// a local shifted copy.
pub fn submerge(full_frames: &[Frame], draft: f64, trim: f64) -> (f64, f64, f64, f64) {
    let draft_ap = draft;
    let draft_fp = draft - trim;
    if full_frames.is_empty() {
        return (0.0, 0.0, 0.0, 0.0);
    }
    let xs: Vec<f64> = full_frames.iter().map(|f| f.x).collect();
    let x0 = xs[0];
    let xn = xs[xs.len() - 1];

    let mut cross_sections = Vec::with_capacity(full_frames.len());
    let mut mom_ys = Vec::with_capacity(full_frames.len());
    let mut mom_zs = Vec::with_capacity(full_frames.len());
    for f in full_frames {
        let d = draft_at(f.x, x0, xn, draft_ap, draft_fp);
        let shifted: Vec<Point2> = f.yz.iter().map(|p| Point2::new(p.y, p.z - d)).collect();
        let submerged = clip::submerged_polyline(&shifted, 0.0);
        cross_sections.push(section::area(&submerged, true));
        mom_ys.push(section::moment_y(&submerged));
        mom_zs.push(section::moment_z(&submerged));
    }
    let disp = quadrature::integrate(&xs, &cross_sections);
    let weighted_x: Vec<f64> = xs.iter().zip(&cross_sections).map(|(x, a)| x * a).collect();
    let momx = quadrature::integrate(&xs, &weighted_x);
    let momy = quadrature::integrate(&xs, &mom_ys);
    let momz = quadrature::integrate(&xs, &mom_zs);
    (disp, momx / disp, momy / disp, momz / disp)
}

fn residual(
    full_frames: &[Frame],
    draft: f64,
    trim: f64,
    target_disp: f64,
    target_lcb: f64,
) -> Result<(f64, f64)> {
    let (disp, x_b, _, _) = submerge(full_frames, draft, trim);
    if disp == 0.0 && target_disp != 0.0 {
        return Err(Error::DegenerateGeometry(
            "submerged volume is zero at the current draft/trim guess while a nonzero \
             displacement is targeted"
                .to_string(),
        ));
    }
    Ok((target_disp - disp, target_lcb - x_b))
}

/// Solve for the (draft, trim) pair at which a hull displaces `target_disp`
/// with its center of buoyancy at longitudinal position `target_lcb`.
///
/// Starts from the heuristic guess `draft = M_z(midship) / A(midship)` (the
/// full midship section's own vertical centroid) and zero trim, then takes
/// Newton steps over a central-difference Jacobian of the 2-residual system
/// until both residuals fall under `cfg.solver_tol` or `cfg.solver_max_iter`
/// is exhausted.
pub fn float_frames(
    full_frames: &[Frame],
    target_disp: f64,
    target_lcb: f64,
    cfg: &HydroCfg,
) -> Result<(f64, f64)> {
    if full_frames.is_empty() {
        return Err(Error::BadInput(
            "float_frames requires at least one frame".to_string(),
        ));
    }
    let main_frame = &full_frames[full_frames.len() / 2];
    let mut draft = section::moment_z(&main_frame.yz) / section::area(&main_frame.yz, true);
    let mut trim = 0.0;

    const EPS: f64 = 1e-6;
    for iteration in 0..cfg.solver_max_iter {
        let (r0, r1) = residual(full_frames, draft, trim, target_disp, target_lcb)?;
        let residual_norm = r0.hypot(r1);
        if residual_norm < cfg.solver_tol {
            return Ok((draft, trim));
        }

        let (r0_dd, r1_dd) = residual(full_frames, draft + EPS, trim, target_disp, target_lcb)?;
        let (r0_dt, r1_dt) = residual(full_frames, draft, trim + EPS, target_disp, target_lcb)?;
        // Jacobian of the residual w.r.t. (draft, trim).
        let j00 = (r0_dd - r0) / EPS;
        let j10 = (r1_dd - r1) / EPS;
        let j01 = (r0_dt - r0) / EPS;
        let j11 = (r1_dt - r1) / EPS;

        let det = j00 * j11 - j01 * j10;
        if det.abs() < 1e-14 {
            return Err(Error::SolverDiverged {
                iterations: iteration + 1,
                residual_norm,
            });
        }
        // Solve J * delta = -r for delta, via the closed-form 2x2 inverse.
        let delta_draft = -(j11 * r0 - j01 * r1) / det;
        let delta_trim = -(-j10 * r0 + j00 * r1) / det;
        draft += delta_draft;
        trim += delta_trim;
    }

    let (r0, r1) = residual(full_frames, draft, trim, target_disp, target_lcb)?;
    Err(Error::SolverDiverged {
        iterations: cfg.solver_max_iter,
        residual_norm: r0.hypot(r1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_circle_frame(x: f64) -> Frame {
        let n = 41;
        let yz: Vec<Point2> = (0..n)
            .map(|i| {
                let t = std::f64::consts::PI * i as f64 / (n - 1) as f64;
                Point2::new(t.sin(), 1.0 - t.cos())
            })
            .collect();
        Frame::new(x, yz)
    }

    fn cylinder_half_frames(n_frames: usize, length: f64) -> Vec<Frame> {
        (0..n_frames)
            .map(|i| half_circle_frame(length * i as f64 / (n_frames - 1) as f64))
            .collect()
    }

    #[test]
    fn mirror_to_full_is_symmetric_about_the_centerline() {
        let half = cylinder_half_frames(3, 2.0);
        let full = mirror_to_full(&half);
        for f in &full {
            assert_eq!(f.len(), 2 * half[0].len());
            let mid = f.len() / 2;
            assert!((f.yz[mid - 1].y + f.yz[mid].y).abs() < 1e-12);
        }
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        let half = cylinder_half_frames(3, 2.0);
        let full = mirror_to_full(&half);
        let rotated = rotate(&full, 0.0);
        for (a, b) in full.iter().zip(rotated.iter()) {
            for (p, q) in a.yz.iter().zip(b.yz.iter()) {
                assert!((p.y - q.y).abs() < 1e-9);
                assert!((p.z - q.z).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn submerge_of_symmetric_cylinder_has_zero_lateral_and_trim_offset() {
        let half = cylinder_half_frames(21, 4.0);
        let full = mirror_to_full(&half);
        let (disp, x_b, y_b, _z_b) = submerge(&full, 1.0, 0.0);
        assert!(disp > 0.0);
        assert!((x_b - 2.0).abs() < 1e-6);
        assert!(y_b.abs() < 1e-9);
    }

    #[test]
    fn float_frames_converges_to_the_requested_displacement_and_lcb() {
        let half = cylinder_half_frames(21, 4.0);
        let full = mirror_to_full(&half);
        let cfg = HydroCfg::default();
        let (probe_disp, probe_lcb, _, _) = submerge(&full, 1.0, 0.0);
        let (draft, trim) = float_frames(&full, probe_disp, probe_lcb, &cfg).unwrap();
        assert!((draft - 1.0).abs() < 1e-3);
        assert!(trim.abs() < 1e-3);
    }

    #[test]
    fn float_frames_rejects_empty_hull() {
        let cfg = HydroCfg::default();
        assert!(float_frames(&[], 1.0, 0.0, &cfg).is_err());
    }
}
