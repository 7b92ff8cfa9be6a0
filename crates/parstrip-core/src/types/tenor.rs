//! Tenor type for relative date arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Calendar unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days.
    Days,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

impl TenorUnit {
    /// Returns the single-letter code used in tenor strings.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::Days => 'd',
            Self::Months => 'm',
            Self::Years => 'y',
        }
    }
}

/// A signed calendar offset such as `"6m"`, `"-1y"` or `"90d"`.
///
/// Tenors drive both maturity resolution ("the 5y swap maturing five years
/// after start") and schedule generation (stepping backward from maturity in
/// `-6m` increments).
///
/// # Example
///
/// ```rust
/// use parstrip_core::types::{Date, Tenor};
///
/// let start = Date::from_ymd(2025, 1, 31).unwrap();
/// let tenor: Tenor = "1m".parse().unwrap();
/// let end = tenor.add_to(start).unwrap();
/// assert_eq!(end, Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    /// Signed magnitude; negative steps backward in time.
    n: i32,
    /// Calendar unit.
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a new tenor.
    #[must_use]
    pub fn new(n: i32, unit: TenorUnit) -> Self {
        Self { n, unit }
    }

    /// Creates a tenor of `n` days.
    #[must_use]
    pub fn days(n: i32) -> Self {
        Self::new(n, TenorUnit::Days)
    }

    /// Creates a tenor of `n` months.
    #[must_use]
    pub fn months(n: i32) -> Self {
        Self::new(n, TenorUnit::Months)
    }

    /// Creates a tenor of `n` years.
    #[must_use]
    pub fn years(n: i32) -> Self {
        Self::new(n, TenorUnit::Years)
    }

    /// Returns the signed magnitude.
    #[must_use]
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Returns the calendar unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Resolves the tenor relative to a date.
    ///
    /// Month and year steps clamp the day-of-month to the last valid day of
    /// the target month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the resulting date is out of range.
    pub fn add_to(&self, date: Date) -> CoreResult<Date> {
        match self.unit {
            TenorUnit::Days => Ok(date.add_days(i64::from(self.n))),
            TenorUnit::Months => date.add_months(self.n),
            TenorUnit::Years => date.add_years(self.n),
        }
    }
}

impl Neg for Tenor {
    type Output = Self;

    /// Flips the direction of the tenor.
    fn neg(self) -> Self::Output {
        Self::new(-self.n, self.unit)
    }
}

impl From<i32> for Tenor {
    /// A bare integer is a number of months (the conventional coupon-period
    /// shorthand: `6` means `"6m"`).
    fn from(months: i32) -> Self {
        Self::months(months)
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() < 2 {
            return Err(CoreError::invalid_tenor(s, "too short"));
        }

        let (magnitude, unit_code) = s.split_at(s.len() - 1);
        let unit = match unit_code.chars().next() {
            Some('d' | 'D') => TenorUnit::Days,
            Some('m' | 'M') => TenorUnit::Months,
            Some('y' | 'Y') => TenorUnit::Years,
            _ => {
                return Err(CoreError::invalid_tenor(
                    s,
                    format!("unknown unit '{unit_code}'"),
                ))
            }
        };

        let n: i32 = magnitude
            .parse()
            .map_err(|_| CoreError::invalid_tenor(s, format!("bad magnitude '{magnitude}'")))?;

        Ok(Self::new(n, unit))
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.n, self.unit.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!("6m".parse::<Tenor>().unwrap(), Tenor::months(6));
        assert_eq!("30d".parse::<Tenor>().unwrap(), Tenor::days(30));
        assert_eq!("5y".parse::<Tenor>().unwrap(), Tenor::years(5));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!("-6m".parse::<Tenor>().unwrap(), Tenor::months(-6));
        assert_eq!("+2y".parse::<Tenor>().unwrap(), Tenor::years(2));
    }

    #[test]
    fn test_parse_uppercase_unit() {
        assert_eq!("3M".parse::<Tenor>().unwrap(), Tenor::months(3));
        assert_eq!("1Y".parse::<Tenor>().unwrap(), Tenor::years(1));
    }

    #[test]
    fn test_parse_invalid_unit() {
        let err = "6q".parse::<Tenor>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidTenor { .. }));
    }

    #[test]
    fn test_parse_invalid_magnitude() {
        assert!("m".parse::<Tenor>().is_err());
        assert!("x6m".parse::<Tenor>().is_err());
        assert!("".parse::<Tenor>().is_err());
    }

    #[test]
    fn test_add_to() {
        let start = Date::from_ymd(2014, 4, 1).unwrap();

        let end = Tenor::days(30).add_to(start).unwrap();
        assert_eq!(end, Date::from_ymd(2014, 5, 1).unwrap());

        let end = Tenor::months(6).add_to(start).unwrap();
        assert_eq!(end, Date::from_ymd(2014, 10, 1).unwrap());

        let end = Tenor::years(3).add_to(start).unwrap();
        assert_eq!(end, Date::from_ymd(2017, 4, 1).unwrap());
    }

    #[test]
    fn test_negative_steps_backward() {
        let date = Date::from_ymd(2016, 12, 1).unwrap();
        let stepped = (-Tenor::months(6)).add_to(date).unwrap();
        assert_eq!(stepped, Date::from_ymd(2016, 6, 1).unwrap());
    }

    #[test]
    fn test_from_integer_is_months() {
        let tenor: Tenor = 6.into();
        assert_eq!(tenor, Tenor::months(6));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["6m", "-1y", "90d"] {
            let tenor: Tenor = s.parse().unwrap();
            assert_eq!(tenor.to_string(), s);
        }
    }

    #[test]
    fn test_serde() {
        let tenor = Tenor::months(6);
        let json = serde_json::to_string(&tenor).unwrap();
        let parsed: Tenor = serde_json::from_str(&json).unwrap();
        assert_eq!(tenor, parsed);
    }
}
