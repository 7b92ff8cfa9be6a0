//! Fixed-for-floating interest rate swap.

use parstrip_core::types::Date;

use super::Instrument;
use crate::curve::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::schedule::Schedule;

/// A par interest rate swap with a fixed leg priced off the discount
/// curve.
///
/// The swap owns its fixed-leg [`Schedule`]; the floating leg is implied
/// by the curve, which collapses its value to
/// `df(start) - df(maturity)` (or `1 - df(maturity)` when the swap starts
/// at or before the curve's valuation date).
///
/// # Pricing
///
/// ```text
/// annuity  = sum(tau_i * df(pay_i))
/// b        = df(start) - df(maturity)   if start > valuation date
///          = 1 - df(maturity)           otherwise
/// par_rate = b / annuity
/// value    = notional * (b - rate * annuity)
/// ```
#[derive(Debug, Clone)]
pub struct Swap {
    schedule: Schedule,
    notional: f64,
    rate: f64,
}

impl Swap {
    /// Creates a swap over a fixed-leg schedule.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidInstrument` if the schedule was built
    /// without a day count (so it has no year fractions), or if any year
    /// fraction is not finite.
    pub fn new(schedule: Schedule, notional: f64, rate: f64) -> CurveResult<Self> {
        let year_fractions = schedule.year_fractions().ok_or_else(|| {
            CurveError::invalid_instrument("swap schedule has no day count, so no year fractions")
        })?;
        if year_fractions.iter().any(|yf| !yf.is_finite()) {
            return Err(CurveError::invalid_instrument(
                "swap schedule has non-finite year fractions",
            ));
        }
        Ok(Self {
            schedule,
            notional,
            rate,
        })
    }

    /// The fixed-leg schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The notional amount.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Present value of one basis point of fixed rate: the discounted sum
    /// of accrual fractions over the payment dates.
    pub fn annuity(&self, curve: &DiscountCurve) -> CurveResult<f64> {
        let mut total = 0.0;
        for (pay_date, tau) in self.schedule.end_dates().iter().zip(self.accruals()?) {
            total += tau * curve.discount_factor(*pay_date)?;
        }
        Ok(total)
    }

    // Guaranteed present by `new`.
    fn accruals(&self) -> CurveResult<&[f64]> {
        self.schedule
            .year_fractions()
            .ok_or_else(|| CurveError::invalid_instrument("swap schedule has no year fractions"))
    }

    /// Floating-leg value per unit notional.
    fn floating_leg(&self, curve: &DiscountCurve) -> CurveResult<f64> {
        let df_maturity = curve.discount_factor(self.maturity_date())?;
        if self.start_date() > curve.valuation_date() {
            // Forward-starting: both legs discount from the start date.
            Ok(curve.discount_factor(self.start_date())? - df_maturity)
        } else {
            Ok(1.0 - df_maturity)
        }
    }
}

impl Instrument for Swap {
    fn start_date(&self) -> Date {
        self.schedule.start_date()
    }

    fn maturity_date(&self) -> Date {
        self.schedule.maturity_date()
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn par_rate(&self, curve: &DiscountCurve) -> CurveResult<f64> {
        Ok(self.floating_leg(curve)? / self.annuity(curve)?)
    }

    fn value(&self, curve: &DiscountCurve) -> CurveResult<f64> {
        let b = self.floating_leg(curve)?;
        let annuity = self.annuity(curve)?;
        Ok(self.notional * (b - self.rate * annuity))
    }

    fn description(&self) -> String {
        format!(
            "swap {} -> {} @ {:.4}% ({} periods)",
            self.start_date(),
            self.maturity_date(),
            self.rate * 100.0,
            self.schedule.len()
        )
    }
}
