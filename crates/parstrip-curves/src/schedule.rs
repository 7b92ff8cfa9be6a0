//! Accrual schedule generation.
//!
//! Coupon schedules are rolled **backward** from maturity in whole coupon
//! periods, so the regular periods sit at the long end and any irregular
//! period lands at the front. The [`StubPolicy`] decides how that front
//! period is handled:
//!
//! - [`StubPolicy::ShortFirst`]: an extra short period covers the gap
//!   between the start date and the first rolled boundary
//! - [`StubPolicy::LongFirst`]: the first rolled boundary is merged into
//!   the start date, producing one long opening period

use serde::{Deserialize, Serialize};

use parstrip_core::daycounts::DayCount;
use parstrip_core::types::{Date, Tenor};

use crate::error::{CurveError, CurveResult};

/// How to resolve an irregular opening period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StubPolicy {
    /// Insert a short stub period at the front.
    #[default]
    ShortFirst,
    /// Extend the first period back to the start date.
    LongFirst,
}

/// An immutable accrual schedule: contiguous periods, with year
/// fractions precomputed when a day count convention was supplied.
///
/// Built via [`ScheduleBuilder`]; a `Schedule` always has at least one
/// period. A schedule built without a day count carries dates only, and
/// [`Schedule::year_fractions`] returns `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    start_dates: Vec<Date>,
    end_dates: Vec<Date>,
    year_fractions: Option<Vec<f64>>,
    day_count: Option<DayCount>,
}

impl Schedule {
    /// Number of accrual periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.start_dates.len()
    }

    /// Always false: empty schedules fail construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_dates.is_empty()
    }

    /// Period start dates, in order.
    #[must_use]
    pub fn start_dates(&self) -> &[Date] {
        &self.start_dates
    }

    /// Period end dates (payment dates), in order.
    #[must_use]
    pub fn end_dates(&self) -> &[Date] {
        &self.end_dates
    }

    /// Year fraction of each period under the schedule's day count, or
    /// `None` when the schedule was built without one.
    #[must_use]
    pub fn year_fractions(&self) -> Option<&[f64]> {
        self.year_fractions.as_deref()
    }

    /// The schedule start date (start of the first period).
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_dates[0]
    }

    /// The schedule maturity (end of the last period).
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.end_dates[self.end_dates.len() - 1]
    }

    /// The day count convention used for the year fractions, if any.
    #[must_use]
    pub fn day_count(&self) -> Option<DayCount> {
        self.day_count
    }

    /// Iterates over `(start, end)` date pairs.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.start_dates
            .iter()
            .zip(&self.end_dates)
            .map(|(s, e)| (*s, *e))
    }
}

/// Builder for [`Schedule`].
///
/// # Example
///
/// ```rust
/// use parstrip_core::daycounts::DayCount;
/// use parstrip_core::types::{Date, Tenor};
/// use parstrip_curves::schedule::{ScheduleBuilder, StubPolicy};
///
/// let schedule = ScheduleBuilder::new(Date::from_ymd(2014, 4, 1).unwrap())
///     .maturity(Date::from_ymd(2016, 12, 1).unwrap())
///     .period(Tenor::months(6))
///     .stub(StubPolicy::ShortFirst)
///     .day_count(DayCount::Actual(360.0))
///     .build()
///     .unwrap();
/// assert_eq!(schedule.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    start: Date,
    maturity: Option<Date>,
    maturity_tenor: Option<Tenor>,
    period: Tenor,
    stub: StubPolicy,
    day_count: Option<DayCount>,
}

impl ScheduleBuilder {
    /// Creates a builder for a schedule starting at `start`.
    #[must_use]
    pub fn new(start: Date) -> Self {
        Self {
            start,
            maturity: None,
            maturity_tenor: None,
            period: Tenor::months(6),
            stub: StubPolicy::default(),
            day_count: None,
        }
    }

    /// Sets an explicit maturity date.
    #[must_use]
    pub fn maturity(mut self, maturity: Date) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the maturity as a tenor relative to the start date.
    #[must_use]
    pub fn maturity_tenor(mut self, tenor: Tenor) -> Self {
        self.maturity_tenor = Some(tenor);
        self
    }

    /// Sets the coupon period (default 6 months).
    #[must_use]
    pub fn period(mut self, period: Tenor) -> Self {
        self.period = period;
        self
    }

    /// Sets the coupon period in months.
    #[must_use]
    pub fn period_months(mut self, months: i32) -> Self {
        self.period = Tenor::months(months);
        self
    }

    /// Sets the stub policy (default short-first).
    #[must_use]
    pub fn stub(mut self, stub: StubPolicy) -> Self {
        self.stub = stub;
        self
    }

    /// Sets the day count convention.
    ///
    /// Without one the schedule carries dates only and no year
    /// fractions; instruments that accrue interest reject such a
    /// schedule at construction.
    #[must_use]
    pub fn day_count(mut self, day_count: DayCount) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if no maturity was set, the period is not
    /// positive, or the schedule resolves to zero periods.
    pub fn build(self) -> CurveResult<Schedule> {
        let maturity = match (self.maturity, self.maturity_tenor) {
            (Some(date), _) => date,
            (None, Some(tenor)) => tenor.add_to(self.start)?,
            (None, None) => {
                return Err(CurveError::invalid_instrument(
                    "schedule maturity not specified",
                ))
            }
        };

        if self.period.n() <= 0 {
            return Err(CurveError::invalid_instrument(format!(
                "schedule period must be positive, got {}",
                self.period
            )));
        }
        if maturity <= self.start {
            return Err(CurveError::empty_schedule(self.start, maturity));
        }

        // Roll backward from maturity in whole periods.
        let step = -self.period;
        let mut boundaries = Vec::new();
        let mut t = maturity;
        while t >= self.start {
            boundaries.push(t);
            t = step.add_to(t)?;
        }
        boundaries.reverse();

        match self.stub {
            StubPolicy::ShortFirst => {
                if boundaries.first() != Some(&self.start) {
                    boundaries.insert(0, self.start);
                }
            }
            StubPolicy::LongFirst => {
                boundaries[0] = self.start;
            }
        }

        if boundaries.len() < 2 {
            return Err(CurveError::empty_schedule(self.start, maturity));
        }

        let start_dates: Vec<Date> = boundaries[..boundaries.len() - 1].to_vec();
        let end_dates: Vec<Date> = boundaries[1..].to_vec();
        let year_fractions: Option<Vec<f64>> = self.day_count.map(|dc| {
            start_dates
                .iter()
                .zip(&end_dates)
                .map(|(s, e)| dc.year_fraction(*s, *e))
                .collect()
        });

        Ok(Schedule {
            start_dates,
            end_dates,
            year_fractions,
            day_count: self.day_count,
        })
    }
}
