//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_knots, Interpolator};

/// Piecewise linear interpolation between knots.
///
/// Exact at the knots, which makes it the default choice for discount
/// factor curves where pinned values (the factor of 1 at the anchor)
/// must be reproduced without interpolation error.
///
/// # Example
///
/// ```rust
/// use parstrip_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let xs = vec![0.0, 180.0, 365.0];
/// let ys = vec![1.0, 0.995, 0.988];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let df = interp.interpolate(90.0).unwrap();
/// assert!((df - 0.9975).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths differ,
    /// or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;
        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
