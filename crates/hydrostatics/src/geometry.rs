//! Geometry primitives shared by frames, waterlines, and the clipper (C1).
//!
//! - `Point2`/`Point3`: small `Copy` coordinate types (named fields, not bare
//!   `nalgebra` vectors, since `y`/`z` vs. `x`/`y`/`z` carry domain meaning
//!   here that a generic `Vector2`/`Vector3` would hide); arithmetic is
//!   implemented on top of `nalgebra::Vector2`/`Vector3`, the way
//!   `geom2::types::Hs2`/`Affine2` build on the same vector types rather
//!   than hand-rolling component math.
//! - `Polyline<P>`: a bare `Vec<P>` alias — consecutive points are straight
//!   segments; open unless the producer closes it.
//! - `segments`/`lengths`: vectors/lengths between consecutive polyline points.
//! - `insort`/`kink_shift`: the sole mutation API for chine/kink index lists.
//!
//! References
//! - Grounded on `line_segments`/`line_lengths`/`Kinked` in
//!   `linesplan/lines.py`.
//! - Field-carrying `Copy` value type shape grounded on `geom2::types::Hs2`.

use nalgebra::{Matrix2, Vector2, Vector3};

/// A point in a frame's local (y, z) plane: y is half-breadth, z is height
/// above baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub y: f64,
    pub z: f64,
}

impl Point2 {
    #[inline]
    pub fn new(y: f64, z: f64) -> Self {
        Self { y, z }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.y, self.z)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { y: v.x, z: v.y }
    }

    /// Rotate about the frame's x-axis by `phi` (used to simulate heel).
    #[inline]
    pub fn rotate(self, phi: f64) -> Self {
        let (s, c) = phi.sin_cos();
        let r = Matrix2::new(c, s, -s, c);
        Self::from_vector(r * self.to_vector())
    }
}

impl std::ops::Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::from_vector(self.to_vector() - rhs.to_vector())
    }
}

impl std::ops::Add<(f64, f64)> for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: (f64, f64)) -> Point2 {
        Point2::from_vector(self.to_vector() + Vector2::new(rhs.0, rhs.1))
    }
}

/// A point in ship-fixed 3D space: x station, y half-breadth, z height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_vector(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl std::ops::Sub for Point3 {
    type Output = Point3;
    #[inline]
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::from_vector(self.to_vector() - rhs.to_vector())
    }
}

/// Ordered sequence of points; consecutive entries define straight segments.
pub type Polyline<P> = Vec<P>;

/// Points whose pairwise difference has a Euclidean norm — enough structure
/// for `segments`/`lengths` to stay generic over `Point2`/`Point3`.
pub trait Norm: Copy + std::ops::Sub<Output = Self> {
    fn norm(self) -> f64;
}

impl Norm for Point2 {
    #[inline]
    fn norm(self) -> f64 {
        self.to_vector().norm()
    }
}

impl Norm for Point3 {
    #[inline]
    fn norm(self) -> f64 {
        self.to_vector().norm()
    }
}

/// Vectors from each point to the next.
pub fn segments<P: Norm>(line: &[P]) -> Vec<P> {
    if line.len() < 2 {
        return Vec::new();
    }
    line.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Euclidean lengths of each segment in the polyline.
pub fn lengths<P: Norm>(line: &[P]) -> Vec<f64> {
    segments(line).into_iter().map(Norm::norm).collect()
}

/// Insert `x` into a sorted sequence of `usize`, keeping it sorted and
/// de-duplicated (a no-op if `x` is already present).
pub fn insort(seq: &mut Vec<usize>, x: usize) {
    match seq.binary_search(&x) {
        Ok(_) => {}
        Err(pos) => seq.insert(pos, x),
    }
}

/// Update kink indices after a point insert (`direction = 1`) or delete
/// (`direction = -1`) at `index`.
///
/// Contract (§4.1): after inserting at `index`, any kink `k >= index` becomes
/// `k + 1`. After deleting at `index`, any kink `k > index` becomes `k - 1`,
/// and a kink exactly at `index` is removed.
pub fn kink_shift(kinks: &mut Vec<usize>, index: usize, direction: i32) {
    if direction > 0 {
        for k in kinks.iter_mut() {
            if *k >= index {
                *k += 1;
            }
        }
    } else {
        kinks.retain(|&k| k != index);
        for k in kinks.iter_mut() {
            if *k > index {
                *k -= 1;
            }
        }
    }
}

/// Sorted, de-duplicated list of kink/chine indices into a polyline.
///
/// This is the sole mutation API for kink lists (§4.1); direct mutation of
/// the inner vector from outside this module is not supported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KinkList(Vec<usize>);

impl KinkList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_sorted(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn insert_kink(&mut self, index: usize) {
        insort(&mut self.0, index);
    }

    pub fn remove_kink(&mut self, index: usize) {
        self.0.retain(|&k| k != index);
    }

    pub fn delete_kink_at(&mut self, position: usize) {
        if position < self.0.len() {
            self.0.remove(position);
        }
    }

    pub fn shift(&mut self, index: usize, direction: i32) {
        kink_shift(&mut self.0, index, direction);
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }
}

impl IntoIterator for KinkList {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
