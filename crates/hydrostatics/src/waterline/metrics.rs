//! Waterline metrics (C7): area and static/second moments of the waterplane
//! polygon.
//!
//! Grounded on `get_waterline_properties` in `linesplan/lines.py`; the
//! waterline is treated as its projection onto the x-y (waterplane) plane,
//! per §4.7.

use crate::geometry::Point3;

/// `(area, m_x, i_x, m_y, i_y)` of the waterplane polygon.
pub type WaterlineProperties = (f64, f64, f64, f64, f64);

/// Area, first moment about x, second moment about x, first moment about y,
/// and second moment about y of the waterline polygon's x-y projection.
pub fn properties(waterline: &[Point3]) -> WaterlineProperties {
    let (mut area, mut m_x, mut i_x, mut m_y, mut i_y) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for w in waterline.windows(2) {
        let (x0, y0, x1, y1) = (w[0].x, w[0].y, w[1].x, w[1].y);
        let dx = x1 - x0;
        area += dx * (y0 + y1) / 2.0;
        m_x += dx * (y0 * y0 + y0 * y1 + y1 * y1) / 6.0;
        i_x += dx * (y0.powi(3) + y0 * y1 * y1 + y0 * y0 * y1 + y1.powi(3)) / 12.0;
        m_y += dx * (2.0 * (x0 * y0 + x1 * y1) + (x0 * y1 + x1 * y0)) / 6.0;
        i_y += dx
            * (y0 * (3.0 * x0 * x0 + x1 * x1 + 2.0 * x0 * x1)
                + y1 * (x0 * x0 + 3.0 * x1 * x1 + 2.0 * x0 * x1))
            / 12.0;
    }
    (area, m_x, i_x, m_y, i_y)
}
