//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how accrued interest is calculated by
//! mapping a (start, end) date pair to a year fraction. Conventions are
//! parsed **once** into the closed [`DayCount`] enum; valuation code never
//! re-inspects strings.
//!
//! # Supported Conventions
//!
//! - `"30/360"`: legacy 30/360 (see [`DayCount::Thirty360`] for caveats)
//! - `"A/<N>"`: actual days over a fixed denominator, e.g. `"A/360"` or
//!   `"A/365"` (lowercase `a` accepted)
//! - `"<D>"`: a bare numeric denominator, e.g. `"365.25"`
//!
//! # Usage
//!
//! ```rust
//! use parstrip_core::daycounts::DayCount;
//! use parstrip_core::types::Date;
//!
//! let dc = DayCount::parse("A/360").unwrap();
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 7, 1).unwrap();
//!
//! let yf = dc.year_fraction(start, end);
//! assert!((yf - 181.0 / 360.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// A day count convention, parsed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DayCount {
    /// Legacy 30/360: `30 * (end.month - start.month) / 360`.
    ///
    /// This formula ignores day-of-month and year differences, so spans
    /// crossing a year boundary can come out negative. It diverges from the
    /// standard 30/360 family (30E/360, 30/360 US) and is kept for
    /// compatibility with existing curve setups that quote against it.
    Thirty360,

    /// Actual calendar days over a fixed denominator (`"A/360"`, `"A/365"`).
    Actual(f64),

    /// Actual calendar days over a bare numeric denominator.
    Fixed(f64),
}

impl DayCount {
    /// Parses a day count convention token.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDayCount` if the token is neither
    /// `"30/360"`, an `A/<N>` form with a numeric denominator, nor a bare
    /// numeric denominator.
    pub fn parse(token: &str) -> CoreResult<Self> {
        let token = token.trim();

        if token == "30/360" {
            return Ok(Self::Thirty360);
        }

        if let Some(rest) = token.strip_prefix(['A', 'a']) {
            let denom = rest.strip_prefix('/').unwrap_or(rest);
            let n: f64 = denom
                .parse()
                .map_err(|_| CoreError::invalid_day_count(token))?;
            if n <= 0.0 {
                return Err(CoreError::invalid_day_count(token));
            }
            return Ok(Self::Actual(n));
        }

        if let Ok(d) = token.parse::<f64>() {
            if d > 0.0 {
                return Ok(Self::Fixed(d));
            }
        }

        Err(CoreError::invalid_day_count(token))
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Negative spans (end before start) yield negative fractions; no
    /// clamping is applied.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            Self::Thirty360 => {
                30.0 * (end.month() as f64 - start.month() as f64) / 360.0
            }
            Self::Actual(n) | Self::Fixed(n) => start.days_between(&end) as f64 / n,
        }
    }
}

impl FromStr for DayCount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thirty360 => write!(f, "30/360"),
            Self::Actual(n) => write!(f, "A/{n}"),
            Self::Fixed(d) => write!(f, "{d}"),
        }
    }
}

/// Calculates a year fraction from a raw convention token.
///
/// Convenience entry point that parses the token and applies it in one call.
/// Prefer parsing a [`DayCount`] once when the convention is reused.
///
/// # Errors
///
/// Returns `CoreError::InvalidDayCount` if the token cannot be parsed.
pub fn year_fraction(start: Date, end: Date, convention: &str) -> CoreResult<f64> {
    Ok(DayCount::parse(convention)?.year_fraction(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_thirty_360() {
        assert_eq!(DayCount::parse("30/360").unwrap(), DayCount::Thirty360);
    }

    #[test]
    fn test_parse_actual() {
        assert_eq!(DayCount::parse("A/360").unwrap(), DayCount::Actual(360.0));
        assert_eq!(DayCount::parse("a/365").unwrap(), DayCount::Actual(365.0));
        assert_eq!(DayCount::parse("A365").unwrap(), DayCount::Actual(365.0));
    }

    #[test]
    fn test_parse_bare_denominator() {
        assert_eq!(DayCount::parse("360").unwrap(), DayCount::Fixed(360.0));
        assert_eq!(DayCount::parse("365.25").unwrap(), DayCount::Fixed(365.25));
    }

    #[test]
    fn test_parse_invalid() {
        for token in ["ACT/ACT", "B/360", "A/x", "", "-360"] {
            assert!(
                DayCount::parse(token).is_err(),
                "'{token}' should not parse"
            );
        }
    }

    #[test]
    fn test_actual_360() {
        let yf = DayCount::Actual(360.0).year_fraction(d(2025, 1, 1), d(2025, 7, 1));
        assert_relative_eq!(yf, 181.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_thirty_360_legacy_formula() {
        // 30 * (7 - 1) / 360, day-of-month ignored
        let yf = DayCount::Thirty360.year_fraction(d(2025, 1, 15), d(2025, 7, 20));
        assert_relative_eq!(yf, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_span_is_negative() {
        let start = d(2025, 1, 1);
        let end = d(2025, 7, 1);
        let dc = DayCount::Actual(360.0);
        assert_relative_eq!(
            dc.year_fraction(end, start),
            -dc.year_fraction(start, end),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_free_function_parses_and_applies() {
        let yf = year_fraction(d(2025, 1, 1), d(2026, 1, 1), "A/365").unwrap();
        assert_relative_eq!(yf, 1.0, epsilon = 1e-12);

        assert!(year_fraction(d(2025, 1, 1), d(2026, 1, 1), "bogus").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        for dc in [
            DayCount::Thirty360,
            DayCount::Actual(360.0),
            DayCount::Fixed(365.25),
        ] {
            let json = serde_json::to_string(&dc).unwrap();
            let parsed: DayCount = serde_json::from_str(&json).unwrap();
            assert_eq!(dc, parsed);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = Date> {
            (2000i32..2050, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn actual_year_fraction_is_antisymmetric(
                start in arb_date(),
                end in arb_date(),
            ) {
                let dc = DayCount::Actual(360.0);
                let forward = dc.year_fraction(start, end);
                let backward = dc.year_fraction(end, start);
                prop_assert!((forward + backward).abs() < 1e-12);
            }

            #[test]
            fn actual_year_fraction_scales_with_days(
                start in arb_date(),
                days in 1i64..3650,
            ) {
                let end = start.add_days(days);
                let yf = DayCount::Actual(365.0).year_fraction(start, end);
                prop_assert!((yf - days as f64 / 365.0).abs() < 1e-12);
            }
        }
    }
}
