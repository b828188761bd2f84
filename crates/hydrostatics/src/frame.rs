//! Frame model (C2): one transverse half-section of the hull.
//!
//! Grounded on the `Frame` class in `linesplan/lines.py` (`scale`, `offset`,
//! `insert`, `delete`, `sections`, `__len__`).

use crate::error::{Error, Result};
use crate::geometry::{KinkList, Point2, Polyline};

/// One transverse half-section ("station") of a symmetric half-hull.
///
/// `yz` is ordered from the baseline up to the deck, then inward to the
/// centerline; at upright attitude `y >= 0`. `chines` indexes points where
/// the slope may be discontinuous (knuckles, deck corners); every index
/// satisfies `0 < c < len(yz) - 1` and indices are unique and sorted.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub x: f64,
    pub yz: Polyline<Point2>,
    pub chines: KinkList,
}

impl Frame {
    pub fn new(x: f64, yz: Polyline<Point2>) -> Self {
        Self {
            x,
            yz,
            chines: KinkList::new(),
        }
    }

    /// Number of points in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.yz.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.yz.is_empty()
    }

    /// Scale both y and z by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for p in self.yz.iter_mut() {
            p.y *= factor;
            p.z *= factor;
        }
    }

    /// Move every point of the frame by a 2D vector (y, z).
    pub fn offset(&mut self, vector: (f64, f64)) {
        for p in self.yz.iter_mut() {
            *p = *p + vector;
        }
    }

    /// Insert a point at `index`, shifting chine indices accordingly.
    ///
    /// `index` may equal `len()` (append). Fails with `Error::BadIndex`
    /// otherwise out of bounds.
    pub fn insert(&mut self, index: usize, p: Point2, is_chine: bool) -> Result<()> {
        if index > self.yz.len() {
            return Err(Error::BadIndex {
                index,
                len: self.yz.len(),
            });
        }
        self.yz.insert(index, p);
        self.chines.shift(index, 1);
        if is_chine {
            self.chines.insert_kink(index);
        }
        Ok(())
    }

    /// Remove the point at `index`, shifting chine indices accordingly.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.yz.len() {
            return Err(Error::BadIndex {
                index,
                len: self.yz.len(),
            });
        }
        self.yz.remove(index);
        self.chines.shift(index, -1);
        Ok(())
    }

    /// Piecewise-smooth sub-polylines split at chine indices. A chine point
    /// appears in both of its neighboring sections.
    pub fn sections(&self) -> Vec<Vec<Point2>> {
        let mut out = Vec::with_capacity(self.chines.len() + 1);
        let mut i = 0usize;
        for &c in self.chines.as_slice() {
            out.push(self.yz[i..=c].to_vec());
            i = c;
        }
        out.push(self.yz[i..].to_vec());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Frame {
        let yz = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.5),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.5),
        ];
        let mut f = Frame::new(0.0, yz);
        f.chines.insert_kink(1);
        f.chines.insert_kink(2);
        f
    }

    #[test]
    fn scale_multiplies_both_coordinates() {
        let mut f = sample_frame();
        f.scale(2.0);
        assert_eq!(f.yz[1], Point2::new(2.0, 1.0));
    }

    #[test]
    fn scale_by_one_is_identity() {
        let f0 = sample_frame();
        let mut f1 = f0.clone();
        f1.scale(1.0);
        for (a, b) in f0.yz.iter().zip(f1.yz.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn offset_adds_vector_to_every_point() {
        let mut f = sample_frame();
        f.offset((0.5, -0.5));
        assert_eq!(f.yz[0], Point2::new(0.5, -0.5));
        assert_eq!(f.yz[2], Point2::new(1.5, 0.5));
    }

    #[test]
    fn insert_shifts_chines_and_bounds_check() {
        let mut f = sample_frame();
        f.insert(1, Point2::new(0.5, 0.25), false).unwrap();
        assert_eq!(f.len(), 5);
        assert_eq!(f.chines.as_slice(), &[2, 3]);
        assert!(matches!(
            f.insert(99, Point2::new(0.0, 0.0), false),
            Err(Error::BadIndex { index: 99, len: 5 })
        ));
    }

    #[test]
    fn insert_as_chine_records_new_kink() {
        let mut f = sample_frame();
        f.insert(1, Point2::new(0.5, 0.25), true).unwrap();
        assert_eq!(f.chines.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn delete_shifts_and_removes_kinks() {
        let mut f = sample_frame();
        f.delete(1).unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.chines.as_slice(), &[1]);
        assert!(matches!(
            f.delete(10),
            Err(Error::BadIndex { index: 10, len: 3 })
        ));
    }

    #[test]
    fn sections_split_inclusive_at_chines() {
        let f = sample_frame();
        let secs = f.sections();
        assert_eq!(secs.len(), 3);
        assert_eq!(secs[0], vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.5)]);
        assert_eq!(secs[1], vec![Point2::new(1.0, 0.5), Point2::new(1.0, 1.0)]);
        assert_eq!(
            secs[2],
            vec![Point2::new(1.0, 1.0), Point2::new(0.0, 1.5)]
        );
    }

    #[test]
    fn sections_with_no_chines_is_single_section() {
        let f = Frame::new(0.0, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(f.sections().len(), 1);
    }
}
