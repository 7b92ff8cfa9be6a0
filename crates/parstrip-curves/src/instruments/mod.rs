//! Calibration instruments.
//!
//! An instrument quotes a market rate and knows how to price itself off a
//! [`DiscountCurve`]. Calibration drives every instrument's `value` to
//! zero, which is equivalent to making its `par_rate` match the quoted
//! rate.
//!
//! The [`Instrument`] trait is sealed: the curve engine knows the full set
//! of instrument kinds, and pricing formulas outside this module cannot
//! masquerade as calibration instruments.

mod cash;
mod swap;

pub use cash::Cash;
pub use swap::Swap;

use parstrip_core::types::Date;

use crate::curve::DiscountCurve;
use crate::error::CurveResult;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Cash {}
    impl Sealed for super::Swap {}
}

/// A market instrument used for curve calibration.
pub trait Instrument: sealed::Sealed + Send + Sync {
    /// Start date of the instrument's first accrual period.
    fn start_date(&self) -> Date;

    /// Maturity date; becomes the instrument's curve pillar.
    fn maturity_date(&self) -> Date;

    /// The quoted fixed rate.
    fn rate(&self) -> f64;

    /// Replaces the quoted rate. The only sanctioned mutation; used to
    /// reprice an instrument at par.
    fn set_rate(&mut self, rate: f64);

    /// The fair fixed rate implied by the curve.
    ///
    /// # Errors
    ///
    /// Fails when a required date is outside the curve's range.
    fn par_rate(&self, curve: &DiscountCurve) -> CurveResult<f64>;

    /// Present value given the curve; zero when the quoted rate is fair.
    ///
    /// # Errors
    ///
    /// Fails when a required date is outside the curve's range.
    fn value(&self, curve: &DiscountCurve) -> CurveResult<f64>;

    /// Short human-readable label for logs and diagnostics.
    fn description(&self) -> String {
        format!(
            "instrument {} -> {}",
            self.start_date(),
            self.maturity_date()
        )
    }
}
