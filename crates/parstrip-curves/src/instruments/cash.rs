//! Cash (money market) instrument.
//!
//! The simplest calibration instrument, used for the short end of the
//! curve. A single accrual period pays simple interest at maturity.

use parstrip_core::daycounts::DayCount;
use parstrip_core::types::Date;

use super::Instrument;
use crate::curve::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// A cash deposit paying simple interest over one period.
///
/// # Pricing
///
/// The deposit is fair when
///
/// ```text
/// (1 + rate * tau) * df(maturity) = df(start)
/// ```
///
/// so its value is `notional * ((1 + rate * tau) * df(maturity) - df(start))`
/// and the par rate is `(df(start) / df(maturity) - 1) / tau`, where `tau`
/// is the period year fraction under the instrument's day count.
#[derive(Debug, Clone, Copy)]
pub struct Cash {
    start: Date,
    maturity: Date,
    notional: f64,
    rate: f64,
    /// Year fraction of the single period, fixed at construction.
    year_fraction: f64,
}

impl Cash {
    /// Creates a cash deposit.
    ///
    /// The year fraction is computed once here; changing the day count
    /// later would silently reprice the instrument, so there is no setter.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidInstrument` if maturity is not strictly
    /// after start.
    pub fn new(
        start: Date,
        maturity: Date,
        notional: f64,
        rate: f64,
        day_count: DayCount,
    ) -> CurveResult<Self> {
        if maturity <= start {
            return Err(CurveError::invalid_instrument(format!(
                "cash maturity {maturity} must be after start {start}"
            )));
        }
        Ok(Self {
            start,
            maturity,
            notional,
            rate,
            year_fraction: day_count.year_fraction(start, maturity),
        })
    }

    /// The notional amount.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// The precomputed period year fraction.
    #[must_use]
    pub fn year_fraction(&self) -> f64 {
        self.year_fraction
    }
}

impl Instrument for Cash {
    fn start_date(&self) -> Date {
        self.start
    }

    fn maturity_date(&self) -> Date {
        self.maturity
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn par_rate(&self, curve: &DiscountCurve) -> CurveResult<f64> {
        let df_start = curve.discount_factor(self.start)?;
        let df_end = curve.discount_factor(self.maturity)?;
        Ok((df_start / df_end - 1.0) / self.year_fraction)
    }

    fn value(&self, curve: &DiscountCurve) -> CurveResult<f64> {
        let df_start = curve.discount_factor(self.start)?;
        let df_end = curve.discount_factor(self.maturity)?;
        Ok(self.notional * ((1.0 + self.rate * self.year_fraction) * df_end - df_start))
    }

    fn description(&self) -> String {
        format!(
            "cash {} -> {} @ {:.4}%",
            self.start,
            self.maturity,
            self.rate * 100.0
        )
    }
}
