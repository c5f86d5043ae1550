//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{FincalError, FincalResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Construction is
/// the only validation point: a `Date` value always denotes a real
/// proleptic Gregorian date.
///
/// # Example
///
/// ```rust
/// use fincal_core::types::Date;
///
/// let date = Date::from_ymd(2024, 1, 31).unwrap();
/// let shifted = date.add_months(1).unwrap();
/// assert_eq!(shifted, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidDate` if the triple is not a valid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> FincalResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| FincalError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> FincalResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| FincalError::invalid_date(format!("cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of calendar days to the date (negative goes backward).
    ///
    /// Panics if the result leaves chrono's representable range, matching
    /// `NaiveDate` addition. Use [`Date::checked_add_days`] when the
    /// offset comes from unbounded input.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of calendar days, failing instead of panicking when
    /// the result is out of range.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidDate` if the result is outside the
    /// representable date range.
    pub fn checked_add_days(&self, days: i64) -> FincalResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| {
                FincalError::invalid_date(format!("{self} {days:+} days is out of range"))
            })
    }

    /// Adds a number of months to the date.
    ///
    /// If the original day of month does not exist in the target month
    /// (e.g. Jan 31 + 1 month), the result is clamped to the last day of
    /// that month. Month overflow and underflow carry into the year.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidDate` if the result is outside the
    /// representable year range.
    pub fn add_months(&self, months: i32) -> FincalResult<Self> {
        // Widen to i64 so extreme offsets fail cleanly instead of
        // wrapping before the range check
        let total_months =
            i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(months);
        let new_year = i32::try_from(total_months.div_euclid(12)).map_err(|_| {
            FincalError::invalid_date(format!("{self} {months:+} months is out of range"))
        })?;
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        // Clamp day to valid range for the target month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    ///
    /// Feb 29 in a non-leap target year is clamped to Feb 28.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidDate` if the result is outside the
    /// representable year range.
    pub fn add_years(&self, years: i32) -> FincalResult<Self> {
        let new_year =
            i32::try_from(i64::from(self.year()) + i64::from(years)).map_err(|_| {
                FincalError::invalid_date(format!("{self} {years:+} years is out of range"))
            })?;
        let max_day = days_in_month(new_year, self.month());
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Positive if `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the last day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
                .expect("end of month should always be valid"),
        )
    }

    /// Checks if the date is the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Helper function to get days in a month for a given year.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month: {month}"),
    }
}

/// Helper function to check if a year is a leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
