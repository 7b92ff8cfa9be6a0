//! Global curve bootstrap.
//!
//! Instead of solving pillar by pillar, the bootstrapper fits all free
//! discount factors at once: the curve pillars are the valuation date plus
//! every instrument maturity, and a derivative-free minimizer drives the
//! sum of squared instrument values to zero.

use log::{debug, warn};

use parstrip_core::types::Date;
use parstrip_math::optimization::{Minimizer, PowellMinimizer};

use crate::curve::{DiscountCurve, DiscountCurveBuilder};
use crate::error::{CurveError, CurveResult};
use crate::instruments::Instrument;
use crate::interpolation::InterpolationMethod;

/// Objective value returned for parameter vectors that do not form a
/// valid curve, steering the minimizer back into the feasible region.
const INVALID_CURVE_PENALTY: f64 = 1e20;

/// Calibration quality report.
#[derive(Debug, Clone)]
pub struct BootstrapDiagnostics {
    /// Final objective value (sum of squared instrument values).
    pub objective: f64,
    /// Minimizer iterations used.
    pub iterations: u32,
    /// Whether the minimizer converged and every residual is within the
    /// residual tolerance.
    pub converged: bool,
    /// Per-instrument values on the calibrated curve, in maturity order.
    pub residuals: Vec<f64>,
}

/// Builder-style curve bootstrapper.
///
/// # Example
///
/// ```rust
/// use parstrip_core::daycounts::DayCount;
/// use parstrip_core::types::Date;
/// use parstrip_curves::bootstrap::Bootstrapper;
/// use parstrip_curves::instruments::Cash;
///
/// let valuation = Date::from_ymd(2025, 1, 1).unwrap();
/// let cash = Cash::new(
///     valuation,
///     valuation.add_days(180),
///     1.0,
///     0.03,
///     DayCount::Actual(360.0),
/// )
/// .unwrap();
///
/// let curve = Bootstrapper::new(valuation)
///     .add_instrument(cash)
///     .bootstrap()
///     .unwrap();
/// assert_eq!(curve.discount_factor(valuation).unwrap(), 1.0);
/// ```
pub struct Bootstrapper {
    valuation_date: Date,
    instruments: Vec<Box<dyn Instrument>>,
    method: InterpolationMethod,
    minimizer: Box<dyn Minimizer>,
    residual_tolerance: f64,
}

impl Bootstrapper {
    /// Creates a bootstrapper anchored at the valuation date.
    ///
    /// Defaults: linear interpolation, Powell minimizer, residual
    /// tolerance 1e-4 per unit notional.
    #[must_use]
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            instruments: Vec::new(),
            method: InterpolationMethod::default(),
            minimizer: Box::new(PowellMinimizer::default()),
            residual_tolerance: 1e-4,
        }
    }

    /// Adds a calibration instrument.
    #[must_use]
    pub fn add_instrument(mut self, instrument: impl Instrument + 'static) -> Self {
        self.instruments.push(Box::new(instrument));
        self
    }

    /// Sets the interpolation method for the calibrated curve.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// Replaces the minimizer.
    #[must_use]
    pub fn with_minimizer(mut self, minimizer: impl Minimizer + 'static) -> Self {
        self.minimizer = Box::new(minimizer);
        self
    }

    /// Sets the per-instrument residual tolerance used by the convergence
    /// check.
    #[must_use]
    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.residual_tolerance = tolerance;
        self
    }

    /// Calibrates and returns the curve.
    ///
    /// A calibration that misses the residual tolerance still returns the
    /// best curve found, with a warning; use
    /// [`bootstrap_checked`](Self::bootstrap_checked) to treat that as an
    /// error, or [`bootstrap_with_diagnostics`](Self::bootstrap_with_diagnostics)
    /// to inspect the fit.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or inconsistent instrument set, or if
    /// the final curve cannot be built.
    pub fn bootstrap(self) -> CurveResult<DiscountCurve> {
        let (curve, diagnostics) = self.solve()?;
        if !diagnostics.converged {
            warn!(
                "curve calibration did not converge: objective {:.3e} after {} iterations",
                diagnostics.objective, diagnostics.iterations
            );
        }
        Ok(curve)
    }

    /// Calibrates and returns the curve together with fit diagnostics.
    ///
    /// # Errors
    ///
    /// Same conditions as [`bootstrap`](Self::bootstrap).
    pub fn bootstrap_with_diagnostics(
        self,
    ) -> CurveResult<(DiscountCurve, BootstrapDiagnostics)> {
        self.solve()
    }

    /// Calibrates and fails when the fit misses the residual tolerance.
    ///
    /// # Errors
    ///
    /// In addition to the [`bootstrap`](Self::bootstrap) conditions,
    /// returns `CurveError::CalibrationFailure` when the convergence check
    /// fails.
    pub fn bootstrap_checked(self) -> CurveResult<DiscountCurve> {
        let tolerance = self.residual_tolerance;
        let (curve, diagnostics) = self.solve()?;
        if !diagnostics.converged {
            let max_residual = diagnostics
                .residuals
                .iter()
                .fold(0.0_f64, |acc, r| acc.max(r.abs()));
            return Err(CurveError::calibration_failed(
                diagnostics.iterations,
                max_residual,
                format!("residual above tolerance {tolerance:.1e}"),
            ));
        }
        Ok(curve)
    }

    fn solve(self) -> CurveResult<(DiscountCurve, BootstrapDiagnostics)> {
        let Self {
            valuation_date,
            mut instruments,
            method,
            minimizer,
            residual_tolerance,
        } = self;

        if instruments.is_empty() {
            return Err(CurveError::invalid_instrument(
                "bootstrap requires at least one instrument",
            ));
        }

        instruments.sort_by_key(|inst| inst.maturity_date());

        // Pillars: valuation date plus one per instrument maturity, which
        // must be distinct and after the valuation date.
        let mut pillar_dates = vec![valuation_date];
        for (i, inst) in instruments.iter().enumerate() {
            let maturity = inst.maturity_date();
            let prev = pillar_dates[pillar_dates.len() - 1];
            if maturity <= prev {
                return Err(CurveError::non_monotonic_pillars(i + 1, prev, maturity));
            }
            pillar_dates.push(maturity);
        }

        let build_curve = |factors: &[f64]| -> CurveResult<DiscountCurve> {
            let mut builder =
                DiscountCurveBuilder::new(valuation_date).add_pillar(valuation_date, 1.0);
            for (date, factor) in pillar_dates[1..].iter().zip(factors) {
                builder = builder.add_pillar(*date, *factor);
            }
            builder.with_interpolation(method).build()
        };

        let objective = |params: &[f64]| -> f64 {
            let Ok(curve) = build_curve(params) else {
                return INVALID_CURVE_PENALTY;
            };
            let mut total = 0.0;
            for inst in &instruments {
                match inst.value(&curve) {
                    Ok(value) => total += value * value,
                    Err(_) => return INVALID_CURVE_PENALTY,
                }
            }
            total
        };

        // Flat unit curve as the starting point.
        let initial = vec![1.0; instruments.len()];
        let result = minimizer.minimize(&objective, &initial)?;

        let curve = build_curve(&result.parameters)?;
        let residuals = instruments
            .iter()
            .map(|inst| inst.value(&curve))
            .collect::<CurveResult<Vec<f64>>>()?;
        let max_residual = residuals.iter().fold(0.0_f64, |acc, r| acc.max(r.abs()));
        let converged = result.converged && max_residual <= residual_tolerance;

        debug!(
            "bootstrapped {} pillars: objective {:.3e}, max residual {:.3e}, {} iterations",
            pillar_dates.len(),
            result.objective_value,
            max_residual,
            result.iterations
        );

        Ok((
            curve,
            BootstrapDiagnostics {
                objective: result.objective_value,
                iterations: result.iterations,
                converged,
                residuals,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parstrip_core::daycounts::DayCount;
    use parstrip_math::optimization::MinimizerResult;
    use parstrip_math::MathResult;

    use crate::instruments::Cash;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn cash(valuation: Date, days: i64, rate: f64) -> Cash {
        Cash::new(
            valuation,
            valuation.add_days(days),
            1.0,
            rate,
            DayCount::Actual(360.0),
        )
        .unwrap()
    }

    #[test]
    fn test_single_cash_recovers_discount_factor() {
        let valuation = d(2025, 1, 1);
        let rate = 0.03;
        let curve = Bootstrapper::new(valuation)
            .add_instrument(cash(valuation, 180, rate))
            .bootstrap()
            .unwrap();

        let expected = 1.0 / (1.0 + rate * 0.5);
        assert_relative_eq!(
            curve.discount_factor(valuation.add_days(180)).unwrap(),
            expected,
            epsilon = 1e-8
        );
        assert_eq!(curve.discount_factor(valuation).unwrap(), 1.0);
    }

    #[test]
    fn test_quoted_rates_are_reproduced() {
        let valuation = d(2025, 1, 1);
        let instruments = [
            cash(valuation, 30, 0.005),
            cash(valuation, 90, 0.007),
            cash(valuation, 180, 0.010),
        ];

        let mut bootstrapper = Bootstrapper::new(valuation);
        for inst in instruments {
            bootstrapper = bootstrapper.add_instrument(inst);
        }
        let (curve, diagnostics) = bootstrapper.bootstrap_with_diagnostics().unwrap();

        assert!(diagnostics.converged);
        for (days, rate) in [(30, 0.005), (90, 0.007), (180, 0.010)] {
            let inst = cash(valuation, days, rate);
            assert_relative_eq!(
                inst.par_rate(&curve).unwrap(),
                rate,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_empty_instrument_set_rejected() {
        let result = Bootstrapper::new(d(2025, 1, 1)).bootstrap();
        assert!(matches!(result, Err(CurveError::InvalidInstrument { .. })));
    }

    #[test]
    fn test_duplicate_maturities_rejected() {
        let valuation = d(2025, 1, 1);
        let result = Bootstrapper::new(valuation)
            .add_instrument(cash(valuation, 90, 0.005))
            .add_instrument(cash(valuation, 90, 0.007))
            .bootstrap();
        assert!(matches!(
            result,
            Err(CurveError::NonMonotonicPillars { .. })
        ));
    }

    #[test]
    fn test_instruments_sorted_by_maturity() {
        // Insertion order must not matter.
        let valuation = d(2025, 1, 1);
        let (curve, diagnostics) = Bootstrapper::new(valuation)
            .add_instrument(cash(valuation, 180, 0.010))
            .add_instrument(cash(valuation, 30, 0.005))
            .bootstrap_with_diagnostics()
            .unwrap();

        assert!(diagnostics.converged);
        assert_eq!(curve.dates()[1], valuation.add_days(30));
        assert_eq!(curve.dates()[2], valuation.add_days(180));
    }

    /// Minimizer stub that hands back a fixed parameter vector.
    struct FixedResult {
        parameters: Vec<f64>,
        converged: bool,
    }

    impl Minimizer for FixedResult {
        fn minimize(
            &self,
            objective: &dyn Fn(&[f64]) -> f64,
            _initial: &[f64],
        ) -> MathResult<MinimizerResult> {
            Ok(MinimizerResult {
                objective_value: objective(&self.parameters),
                parameters: self.parameters.clone(),
                iterations: 1,
                converged: self.converged,
            })
        }
    }

    #[test]
    fn test_injected_minimizer_controls_curve() {
        let valuation = d(2025, 1, 1);
        let (curve, _) = Bootstrapper::new(valuation)
            .add_instrument(cash(valuation, 180, 0.03))
            .with_minimizer(FixedResult {
                parameters: vec![0.97],
                converged: true,
            })
            .bootstrap_with_diagnostics()
            .unwrap();

        assert_relative_eq!(curve.factors()[1], 0.97, epsilon = 1e-15);
    }

    #[test]
    fn test_unconverged_fit_flagged_and_checked_variant_errors() {
        let valuation = d(2025, 1, 1);
        let stub = || FixedResult {
            parameters: vec![0.5], // badly mispriced
            converged: true,
        };

        let (_, diagnostics) = Bootstrapper::new(valuation)
            .add_instrument(cash(valuation, 180, 0.03))
            .with_minimizer(stub())
            .bootstrap_with_diagnostics()
            .unwrap();
        assert!(!diagnostics.converged);

        let result = Bootstrapper::new(valuation)
            .add_instrument(cash(valuation, 180, 0.03))
            .with_minimizer(stub())
            .bootstrap_checked();
        assert!(matches!(
            result,
            Err(CurveError::CalibrationFailure { .. })
        ));

        // The lenient variant still returns the curve.
        let curve = Bootstrapper::new(valuation)
            .add_instrument(cash(valuation, 180, 0.03))
            .with_minimizer(stub())
            .bootstrap()
            .unwrap();
        assert_relative_eq!(curve.factors()[1], 0.5, epsilon = 1e-15);
    }
}
