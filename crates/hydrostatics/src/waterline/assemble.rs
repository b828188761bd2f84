//! Waterline assembler (C6): stitch per-frame crossings into one closed,
//! planar polyline.
//!
//! Grounded on `get_waterline` in `linesplan/lines.py`. The aft/forward
//! pointer-arithmetic walk (direction flips, boundary-frame revisit) is
//! encoded as an explicit state machine per the spec's design note, rather
//! than replicated as raw index arithmetic.

use crate::clip;
use crate::draft::draft_at;
use crate::frame::Frame;
use crate::geometry::{Point2, Point3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WalkState {
    AftWalk,
    AtStern,
    FwdWalk,
    AtBow,
}

/// Walk the bow-to-stern-and-back loop described in §4.6, consuming the
/// last remaining crossing of each visited frame until one is found empty.
fn walk(entries: &mut [(f64, Vec<Point2>)]) -> Vec<Point3> {
    let n = entries.len() as isize;
    let mut result = Vec::new();
    let mut i: isize = n;
    let mut state = WalkState::AftWalk;
    loop {
        match state {
            WalkState::AftWalk => {
                i -= 1;
                if i < 0 {
                    state = WalkState::AtStern;
                }
            }
            WalkState::FwdWalk => {
                i += 1;
                if i == n {
                    state = WalkState::AtBow;
                }
            }
            WalkState::AtStern | WalkState::AtBow => unreachable!("bounce resolved below"),
        }
        if state == WalkState::AtStern {
            i += 2;
            state = WalkState::FwdWalk;
        } else if state == WalkState::AtBow {
            i -= 2;
            state = WalkState::AftWalk;
        }
        let (x, crossings) = &mut entries[i as usize];
        match crossings.pop() {
            Some(p) => result.push(Point3::new(*x, p.y, p.z)),
            None => break,
        }
    }
    result.reverse();
    result
}

/// Assemble the closed waterline polyline at the given (possibly trimmed)
/// draft, from a list of frames sorted strictly by x.
///
/// Returns an empty waterline if fewer than two frames touch the plane
/// (§7 `DegenerateGeometry` is surfaced by callers that need a nonempty
/// result — this function itself never fails, matching the numerical-edge
/// fallback policy of §7).
pub fn assemble_waterline(frames: &[Frame], draft_ap: f64, draft_fp: Option<f64>) -> Vec<Point3> {
    if frames.is_empty() {
        return Vec::new();
    }
    let draft_fp = draft_fp.unwrap_or(draft_ap);
    let x0 = frames[0].x;
    let xn = frames[frames.len() - 1].x;
    let mut entries: Vec<(f64, Vec<Point2>)> = frames
        .iter()
        .map(|f| {
            let d = draft_at(f.x, x0, xn, draft_ap, draft_fp);
            (f.x, clip::crossings(&f.yz, d))
        })
        .collect();

    while matches!(entries.last(), Some((_, c)) if c.is_empty()) {
        entries.pop();
    }
    while matches!(entries.first(), Some((_, c)) if c.is_empty()) {
        entries.remove(0);
    }
    if entries.len() < 2 {
        return Vec::new();
    }
    walk(&mut entries)
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

    #[test]
    fn cylinder_waterline_is_closed_and_symmetric_in_y() {
        let frames: Vec<Frame> = (0..5).map(|i| half_circle_frame(i as f64)).collect();
        let wl = assemble_waterline(&frames, 1.0, None);
        assert!(!wl.is_empty());
        for p in &wl {
            assert!((p.z - 1.0).abs() < 1e-9);
            assert!(p.y.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn too_few_touching_frames_returns_empty() {
        let frames: Vec<Frame> = (0..5).map(|i| half_circle_frame(i as f64)).collect();
        let wl = assemble_waterline(&frames, 5.0, None);
        assert!(wl.is_empty());
    }

    #[test]
    fn no_frames_is_empty() {
        assert!(assemble_waterline(&[], 1.0, None).is_empty());
    }
}
