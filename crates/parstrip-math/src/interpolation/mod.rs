//! Interpolation over sorted knots.
//!
//! Discount curves are represented elsewhere as knot dates with discount
//! factors; this module supplies the numeric machinery that fills in the
//! values between knots.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise linear, exact at knots
//! - [`CubicSpline`]: natural cubic spline, C2-smooth
//!
//! Both methods reject queries outside the knot range unless extrapolation
//! is explicitly enabled via `with_extrapolation()`.

mod cubic_spline;
mod linear;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validates a knot set: minimum size, matching lengths, strictly
/// increasing x values.
fn validate_knots(xs: &[f64], ys: &[f64], min_points: usize) -> MathResult<()> {
    if xs.len() < min_points {
        return Err(MathError::insufficient_data(min_points, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Finds the segment index i such that xs[i] <= x < xs[i+1], clamped to
/// the last segment for queries at or beyond the final knot.
fn find_segment(xs: &[f64], x: f64) -> usize {
    let idx = xs.partition_point(|&knot| knot <= x);
    idx.saturating_sub(1).min(xs.len() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_interpolators_through_knots() {
        let xs = vec![0.0, 90.0, 180.0, 365.0, 730.0];
        let ys = vec![1.0, 0.9987, 0.995, 0.988, 0.976];

        let linear = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(linear.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_find_segment_boundaries() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(find_segment(&xs, -0.5), 0);
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 0.5), 0);
        assert_eq!(find_segment(&xs, 1.0), 1);
        assert_eq!(find_segment(&xs, 2.9), 2);
        assert_eq!(find_segment(&xs, 3.0), 2);
        assert_eq!(find_segment(&xs, 4.0), 2);
    }

    #[test]
    fn test_validate_rejects_bad_knots() {
        assert!(validate_knots(&[0.0], &[1.0], 2).is_err());
        assert!(validate_knots(&[0.0, 1.0], &[1.0], 2).is_err());
        assert!(validate_knots(&[1.0, 0.0], &[1.0, 2.0], 2).is_err());
        assert!(validate_knots(&[0.0, 0.0], &[1.0, 2.0], 2).is_err());
        assert!(validate_knots(&[0.0, 1.0], &[1.0, 2.0], 2).is_ok());
    }
}
