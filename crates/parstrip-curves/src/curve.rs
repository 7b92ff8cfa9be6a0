//! Discount factor curves.

use parstrip_core::types::Date;
use parstrip_math::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
use parstrip_math::MathError;

use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;

/// One interpolant per supported method; built once at construction.
#[derive(Debug, Clone)]
enum CurveInterpolant {
    Linear(LinearInterpolator),
    CubicSpline(CubicSpline),
}

impl CurveInterpolant {
    fn interpolate(&self, x: f64) -> Result<f64, MathError> {
        match self {
            Self::Linear(interp) => interp.interpolate(x),
            Self::CubicSpline(interp) => interp.interpolate(x),
        }
    }
}

/// An immutable discount factor curve.
///
/// The curve stores pillar dates with discount factors and interpolates
/// between them on a day-offset axis anchored at the valuation date.
/// Once built, a curve never changes; bumping or recalibrating produces a
/// new curve.
///
/// # Example
///
/// ```rust
/// use parstrip_core::types::Date;
/// use parstrip_curves::curve::DiscountCurveBuilder;
///
/// let valuation = Date::from_ymd(2025, 1, 1).unwrap();
/// let curve = DiscountCurveBuilder::new(valuation)
///     .add_pillar(valuation, 1.0)
///     .add_pillar(Date::from_ymd(2025, 7, 1).unwrap(), 0.995)
///     .add_pillar(Date::from_ymd(2026, 1, 1).unwrap(), 0.988)
///     .build()
///     .unwrap();
///
/// let df = curve.discount_factor(valuation).unwrap();
/// assert_eq!(df, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    valuation_date: Date,
    dates: Vec<Date>,
    factors: Vec<f64>,
    method: InterpolationMethod,
    interpolant: CurveInterpolant,
}

impl DiscountCurve {
    /// Returns the discount factor for a date.
    ///
    /// Pillar dates reproduce their stored factors exactly.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::DateOutOfRange` if the date lies outside the
    /// pillar span and extrapolation was not enabled.
    pub fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        let x = self.valuation_date.days_between(&date) as f64;
        self.interpolant.interpolate(x).map_err(|err| match err {
            MathError::ExtrapolationNotAllowed { .. } => {
                CurveError::date_out_of_range(date, self.min_date(), self.max_date())
            }
            other => other.into(),
        })
    }

    /// The curve's valuation (anchor) date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Pillar dates, strictly increasing.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Discount factors at the pillar dates.
    #[must_use]
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }

    /// First pillar date.
    #[must_use]
    pub fn min_date(&self) -> Date {
        self.dates[0]
    }

    /// Last pillar date.
    #[must_use]
    pub fn max_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// The interpolation method used between pillars.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.method
    }
}

/// Builder for [`DiscountCurve`].
#[derive(Debug, Clone)]
pub struct DiscountCurveBuilder {
    valuation_date: Date,
    pillars: Vec<(Date, f64)>,
    method: InterpolationMethod,
    allow_extrapolation: bool,
}

impl DiscountCurveBuilder {
    /// Creates a builder anchored at the given valuation date.
    #[must_use]
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            pillars: Vec::new(),
            method: InterpolationMethod::default(),
            allow_extrapolation: false,
        }
    }

    /// Adds a pillar (date, discount factor).
    #[must_use]
    pub fn add_pillar(mut self, date: Date, factor: f64) -> Self {
        self.pillars.push((date, factor));
        self
    }

    /// Adds several pillars at once.
    #[must_use]
    pub fn add_pillars<I>(mut self, pillars: I) -> Self
    where
        I: IntoIterator<Item = (Date, f64)>,
    {
        self.pillars.extend(pillars);
        self
    }

    /// Sets the interpolation method (default linear).
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// Allows queries beyond the pillar span.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InsufficientPillars` if there are too few
    /// pillars for the method, `CurveError::NonMonotonicPillars` if pillar
    /// dates are not strictly increasing, and an invalid-input error for
    /// non-finite or non-positive factors.
    pub fn build(self) -> CurveResult<DiscountCurve> {
        let required = self.method.min_pillars();
        if self.pillars.len() < required {
            return Err(CurveError::insufficient_pillars(
                required,
                self.pillars.len(),
            ));
        }

        for (i, window) in self.pillars.windows(2).enumerate() {
            if window[1].0 <= window[0].0 {
                return Err(CurveError::non_monotonic_pillars(
                    i + 1,
                    window[0].0,
                    window[1].0,
                ));
            }
        }
        for (date, factor) in &self.pillars {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(MathError::invalid_input(format!(
                    "discount factor at {date} must be positive and finite, got {factor}"
                ))
                .into());
            }
        }

        let xs: Vec<f64> = self
            .pillars
            .iter()
            .map(|(date, _)| self.valuation_date.days_between(date) as f64)
            .collect();
        let (dates, factors): (Vec<Date>, Vec<f64>) = self.pillars.into_iter().unzip();

        let interpolant = match self.method {
            InterpolationMethod::Linear => {
                let mut interp = LinearInterpolator::new(xs, factors.clone())?;
                if self.allow_extrapolation {
                    interp = interp.with_extrapolation();
                }
                CurveInterpolant::Linear(interp)
            }
            InterpolationMethod::CubicSpline => {
                let mut interp = CubicSpline::new(xs, factors.clone())?;
                if self.allow_extrapolation {
                    interp = interp.with_extrapolation();
                }
                CurveInterpolant::CubicSpline(interp)
            }
        };

        Ok(DiscountCurve {
            valuation_date: self.valuation_date,
            dates,
            factors,
            method: self.method,
            interpolant,
        })
    }
}
