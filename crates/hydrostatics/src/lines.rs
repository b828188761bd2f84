//! Lines model (C3): a named collection of frames, plus JSON persistence (§6).
//!
//! Grounded on `Lines`/`load_lines_plan`/`save_lines_plan` in
//! `linesplan/lines.py`. The wire format is serialized with `serde`/`serde_json`
//! (already reached for elsewhere in this lineage, in the `cli` crate's
//! provenance sidecar) using a 2-space pretty-printer to keep byte-stable
//! round-trips (§8.2) with files written by the same convention.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::geometry::{KinkList, Point2};

/// A lines plan: an ordered collection of frames, strictly increasing in x.
#[derive(Clone, Debug, Default)]
pub struct Lines {
    pub name: String,
    pub frames: Vec<Frame>,
}

impl Lines {
    pub fn new(name: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            name: name.into(),
            frames,
        }
    }

    /// Enforce the centerline-closure invariant on every frame: snap a
    /// near-zero first/last y to exactly 0, or insert an explicit centerline
    /// point and record it as a chine. Idempotent within `margin`.
    pub fn close_frames(&mut self, margin: f64) {
        for frame in self.frames.iter_mut() {
            close_one_frame(frame, margin);
        }
    }

    /// Scale every frame's (y, z); x stations are untouched.
    pub fn scale(&mut self, factor: f64) {
        for frame in self.frames.iter_mut() {
            frame.scale(factor);
        }
    }

    /// Save to `path` using the same wire format `load_lines_plan` reads.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_lines_plan(self, path)
    }
}

fn close_one_frame(frame: &mut Frame, margin: f64) {
    if frame.yz.is_empty() {
        return;
    }
    if frame.yz[0].y < margin {
        frame.yz[0].y = 0.0;
    } else {
        let z0 = frame.yz[0].z;
        frame.yz.insert(0, Point2::new(0.0, z0));
        frame.chines.shift(0, 1);
        frame.chines.insert_kink(1);
    }
    let last = frame.yz.len() - 1;
    if frame.yz[last].y < margin {
        frame.yz[last].y = 0.0;
    } else {
        let zn = frame.yz[last].z;
        frame.yz.push(Point2::new(0.0, zn));
        frame.chines.insert_kink(last);
    }
}

#[derive(Serialize, Deserialize)]
struct FrameWire {
    x: f64,
    yz: Vec<[f64; 2]>,
    #[serde(default)]
    chines: Vec<usize>,
}

#[derive(Serialize, Deserialize)]
struct LinesWire {
    name: String,
    frames: Vec<FrameWire>,
}

/// Load a lines plan from a JSON file (§6 wire format).
///
/// Validates: `frames` non-empty; every frame has at least 2 points; chine
/// indices within `(0, len-1)`; x stations strictly increasing; no negative
/// half-breadth on the (pre-mirrored) half-hull.
pub fn load_lines_plan(path: impl AsRef<Path>) -> Result<Lines> {
    let text = fs::read_to_string(path)?;
    let wire: LinesWire = serde_json::from_str(&text)?;
    if wire.frames.is_empty() {
        return Err(Error::BadInput("lines plan has no frames".to_string()));
    }
    let mut frames = Vec::with_capacity(wire.frames.len());
    let mut prev_x: Option<f64> = None;
    for fw in wire.frames {
        if fw.yz.len() < 2 {
            return Err(Error::BadInput(format!(
                "frame at x={} has fewer than 2 points",
                fw.x
            )));
        }
        if let Some(px) = prev_x {
            if !(fw.x > px) {
                return Err(Error::BadInput(format!(
                    "frames are not strictly increasing in x: {px} then {}",
                    fw.x
                )));
            }
        }
        prev_x = Some(fw.x);
        let yz: Vec<Point2> = fw.yz.iter().map(|p| Point2::new(p[0], p[1])).collect();
        for p in &yz {
            if p.y < -1e-9 {
                return Err(Error::BadInput(format!(
                    "frame at x={} has negative half-breadth y={}",
                    fw.x, p.y
                )));
            }
        }
        let len = yz.len();
        for &c in &fw.chines {
            if !(c > 0 && c < len - 1) {
                return Err(Error::BadIndex { index: c, len });
            }
        }
        frames.push(Frame {
            x: fw.x,
            yz,
            chines: KinkList::from_sorted(fw.chines),
        });
    }
    Ok(Lines {
        name: wire.name,
        frames,
    })
}

/// Save a lines plan to `path` as indented (2-space) JSON (§6).
pub fn save_lines_plan(lines: &Lines, path: impl AsRef<Path>) -> Result<()> {
    let wire = LinesWire {
        name: lines.name.clone(),
        frames: lines
            .frames
            .iter()
            .map(|f| FrameWire {
                x: f.x,
                yz: f.yz.iter().map(|p| [p.y, p.z]).collect(),
                chines: f.chines.as_slice().to_vec(),
            })
            .collect(),
    };
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(&wire, &mut ser)?;
    fs::write(path, buf)?;
    Ok(())
}
