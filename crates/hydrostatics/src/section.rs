//! Section integrals (C5): closed-form trapezoidal identities over a
//! half-frame polygon.
//!
//! Grounded on `get_cross_section`/`get_mom_y`/`get_mom_z` in
//! `linesplan/lines.py`. These are the reimplementation contract; Simpson
//! forms are not used here since they would assume even spacing.

use crate::geometry::Point2;

/// Cross-sectional area, `A = integral y dz`, computed as a sum of
/// trapezoids. `full = false` doubles the half-area (mirrors the half-hull
/// across the centerline); `full = true` leaves it as-is. A polyline with
/// fewer than 2 points has area 0.
pub fn area(yz: &[Point2], full: bool) -> f64 {
    if yz.len() < 2 {
        return 0.0;
    }
    let half: f64 = yz
        .windows(2)
        .map(|w| 0.5 * (w[0].y + w[1].y) * (w[1].z - w[0].z))
        .sum();
    if full {
        half
    } else {
        2.0 * half
    }
}

/// First moment `M_y`, weighted by y: feeds the lateral (`y_B`) centroid.
pub fn moment_y(yz: &[Point2]) -> f64 {
    if yz.len() < 2 {
        return 0.0;
    }
    yz.windows(2)
        .map(|w| {
            let (y0, y1) = (w[0].y, w[1].y);
            (w[1].z - w[0].z) * (y0 * y0 + y0 * y1 + y1 * y1) / 6.0
        })
        .sum()
}

/// First moment `M_z`, weighted by z: feeds the vertical (`z_B`) centroid.
/// Zero for a symmetric frame at no heel.
pub fn moment_z(yz: &[Point2]) -> f64 {
    if yz.len() < 2 {
        return 0.0;
    }
    yz.windows(2)
        .map(|w| {
            let (y0, z0, y1, z1) = (w[0].y, w[0].z, w[1].y, w[1].z);
            (z1 - z0) * (2.0 * (z0 * y0 + z1 * y1) + (z0 * y1 + z1 * y0)) / 6.0
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_short_polylines_is_zero() {
        assert_eq!(area(&[], false), 0.0);
        assert_eq!(area(&[Point2::new(1.0, 1.0)], false), 0.0);
    }

    #[test]
    fn area_half_frame_doubles_by_default() {
        let yz = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(0.0, 2.0)];
        let half = area(&yz, true);
        let full = area(&yz, false);
        assert!((full - 2.0 * half).abs() < 1e-12);
        assert!((half - 1.0).abs() < 1e-12);
    }

    #[test]
    fn moment_y_matches_closed_form_for_triangle() {
        let yz = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)];
        let my = moment_y(&yz);
        // dz=1, y0=0, y1=2: (0+0+4)/6 = 2/3
        assert!((my - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn moment_z_zero_for_symmetric_rectangle_profile() {
        let yz = vec![Point2::new(1.0, -1.0), Point2::new(1.0, 1.0)];
        let mz = moment_z(&yz);
        // dz=2, z0=-1,z1=1,y0=y1=1: 2*(2*(-1+1))/6=0
        assert!(mz.abs() < 1e-12);
    }
}
