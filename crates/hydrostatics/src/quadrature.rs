//! Composite Simpson's rule over (possibly) unequally spaced samples, with a
//! trapezoidal tail when an even number of samples is supplied.
//!
//! Grounded on `scipy.integrate.simpson`/`trapezoid`, used throughout
//! `linesplan/lines.py`'s longitudinal quadrature (§4.8: "Callers must
//! supply an odd number of frames for full accuracy; implementations may
//! fall back to an adaptive trapezoidal tail for even counts").

/// Non-uniform Simpson's rule over one pair of intervals `(x0,x1,x2)`.
fn simpson_pair(x0: f64, x1: f64, x2: f64, y0: f64, y1: f64, y2: f64) -> f64 {
    let h0 = x1 - x0;
    let h1 = x2 - x1;
    if h0 == 0.0 || h1 == 0.0 {
        // Degenerate spacing: fall back to the trapezoidal sum over both legs.
        return 0.5 * h0 * (y0 + y1) + 0.5 * h1 * (y1 + y2);
    }
    (h0 + h1) / 6.0
        * ((2.0 - h1 / h0) * y0 + (h0 + h1).powi(2) / (h0 * h1) * y1 + (2.0 - h0 / h1) * y2)
}

/// Trapezoidal rule over one interval.
fn trapz_pair(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    0.5 * (x1 - x0) * (y0 + y1)
}

/// Integrate `y` over `x` with composite Simpson's rule on the largest
/// leading odd-sized run of samples, falling back to the trapezoidal rule
/// for a trailing single interval when `x.len()` is even. `x` must be
/// strictly monotonic and match `y` in length.
pub fn integrate(xs: &[f64], ys: &[f64]) -> f64 {
    assert_eq!(xs.len(), ys.len(), "x and y must have the same length");
    let n = xs.len();
    if n < 2 {
        return 0.0;
    }
    if n == 2 {
        return trapz_pair(xs[0], xs[1], ys[0], ys[1]);
    }
    let simpson_upto = if n % 2 == 1 { n } else { n - 1 };
    let mut total = 0.0;
    let mut i = 0;
    while i + 2 < simpson_upto {
        total += simpson_pair(xs[i], xs[i + 1], xs[i + 2], ys[i], ys[i + 1], ys[i + 2]);
        i += 2;
    }
    if simpson_upto < n {
        total += trapz_pair(xs[n - 2], xs[n - 1], ys[n - 2], ys[n - 1]);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrates_constant_function_exactly() {
        let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = vec![2.0; 5];
        assert!((integrate(&xs, &ys) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn integrates_quadratic_exactly_on_uniform_grid() {
        let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
        // integral of x^2 from 0 to 4 = 64/3
        assert!((integrate(&xs, &ys) - 64.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn handles_even_sample_count_with_trapezoidal_tail() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
        let got = integrate(&xs, &ys);
        // Simpson over [0,2] (exact: 8/3) + trapezoid over [2,3] (9/2+4/2=6.5->*0.5 interval=... )
        let expected = 8.0 / 3.0 + 0.5 * (9.0 + 4.0);
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn two_points_is_trapezoidal() {
        let xs = vec![0.0, 2.0];
        let ys = vec![0.0, 4.0];
        assert!((integrate(&xs, &ys) - 4.0).abs() < 1e-12);
    }
}
