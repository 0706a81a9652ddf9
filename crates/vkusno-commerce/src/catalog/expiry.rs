//! Expiry dates and the "expiring soon" check.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Literal format of expiry dates on product labels.
const DATE_FORMAT: &str = "%d.%m.%Y";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Products this many days (or fewer) from expiry are flagged.
pub const DEFAULT_WARNING_DAYS: i64 = 3;

/// A best-before date, written `dd.mm.yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    /// Parse a `dd.mm.yyyy` literal.
    pub fn parse(literal: &str) -> Result<Self, CommerceError> {
        NaiveDate::parse_from_str(literal.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| CommerceError::InvalidExpiryDate(literal.to_string()))
    }

    /// Wrap a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole days from `now` until the start (UTC midnight) of the expiry
    /// date, rounded up. Negative once the date has passed.
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        let expiry = self.0.and_time(NaiveTime::MIN).and_utc();
        let millis = (expiry - now).num_milliseconds();

        // Integer division truncates toward zero, which is already the ceiling
        // for negative values.
        let days = millis / MILLIS_PER_DAY;
        if millis % MILLIS_PER_DAY > 0 {
            days + 1
        } else {
            days
        }
    }

    /// Check against the default three-day window.
    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        ExpiryPolicy::default().is_expiring_soon(self, now)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ExpiryDate {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ExpiryDate {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ExpiryDate> for String {
    fn from(date: ExpiryDate) -> Self {
        date.to_string()
    }
}

/// How close to expiry a product must be to get the warning badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryPolicy {
    /// Days before expiry at which the badge appears (inclusive).
    #[serde(default = "default_warning_days")]
    pub warning_days: i64,
}

fn default_warning_days() -> i64 {
    DEFAULT_WARNING_DAYS
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            warning_days: DEFAULT_WARNING_DAYS,
        }
    }
}

impl ExpiryPolicy {
    /// Check whether `date` falls inside the warning window. Already expired
    /// dates are always inside it.
    pub fn is_expiring_soon(&self, date: &ExpiryDate, now: DateTime<Utc>) -> bool {
        date.days_until(now) <= self.warning_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let date = ExpiryDate::parse("25.09.2025").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2025, 9, 25).unwrap());
        assert_eq!(date.to_string(), "25.09.2025");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(ExpiryDate::parse("2025-09-25").is_err());
        assert!(ExpiryDate::parse("31.02.2025").is_err());
        assert!(ExpiryDate::parse("").is_err());
    }

    #[test]
    fn test_days_until_at_midnight() {
        let date = ExpiryDate::parse("25.09.2025").unwrap();
        assert_eq!(date.days_until(at(2025, 9, 22, 0)), 3);
        assert_eq!(date.days_until(at(2025, 9, 21, 0)), 4);
        assert_eq!(date.days_until(at(2025, 9, 25, 0)), 0);
    }

    #[test]
    fn test_days_until_rounds_up() {
        let date = ExpiryDate::parse("25.09.2025").unwrap();
        // 2 days 14 hours left
        assert_eq!(date.days_until(at(2025, 9, 22, 10)), 3);
        // 1 day 14 hours past
        assert_eq!(date.days_until(at(2025, 9, 26, 10)), -1);
    }

    #[test]
    fn test_three_days_is_soon_four_is_not() {
        let now = at(2025, 9, 20, 0);
        assert!(ExpiryDate::parse("23.09.2025").unwrap().is_expiring_soon(now));
        assert!(!ExpiryDate::parse("24.09.2025").unwrap().is_expiring_soon(now));
    }

    #[test]
    fn test_expired_is_soon() {
        let now = at(2025, 10, 1, 12);
        assert!(ExpiryDate::parse("21.09.2025").unwrap().is_expiring_soon(now));
    }

    #[test]
    fn test_custom_window() {
        let policy = ExpiryPolicy { warning_days: 1 };
        let date = ExpiryDate::parse("23.09.2025").unwrap();
        assert!(!policy.is_expiring_soon(&date, at(2025, 9, 21, 0)));
        assert!(policy.is_expiring_soon(&date, at(2025, 9, 22, 0)));
    }

    #[test]
    fn test_serde_uses_label_format() {
        let date = ExpiryDate::parse("28.09.2025").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"28.09.2025\"");
        let back: ExpiryDate = serde_json::from_str("\"28.09.2025\"").unwrap();
        assert_eq!(back, date);
    }
}
