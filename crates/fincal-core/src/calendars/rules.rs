//! Holiday generation rules.
//!
//! A [`HolidayRule`] describes a holiday recomputed per year rather than
//! pinned to one date: a fixed month/day repeated every year, the Nth (or
//! last) occurrence of a weekday within a month, or an explicit one-off
//! date that belongs to a single year.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FincalError, FincalResult};
use crate::types::Date;

/// Which occurrence of a weekday within a month a rule refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occurrence {
    /// First occurrence.
    First,
    /// Second occurrence.
    Second,
    /// Third occurrence.
    Third,
    /// Fourth occurrence.
    Fourth,
    /// Fifth occurrence. Does not exist in every month/year combination.
    Fifth,
    /// Last occurrence. Always exists.
    Last,
}

impl Occurrence {
    /// Returns the 1-based index for Nth occurrences, `None` for `Last`.
    #[must_use]
    pub const fn nth(&self) -> Option<u32> {
        match self {
            Occurrence::First => Some(1),
            Occurrence::Second => Some(2),
            Occurrence::Third => Some(3),
            Occurrence::Fourth => Some(4),
            Occurrence::Fifth => Some(5),
            Occurrence::Last => None,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Occurrence::First => "1st",
            Occurrence::Second => "2nd",
            Occurrence::Third => "3rd",
            Occurrence::Fourth => "4th",
            Occurrence::Fifth => "5th",
            Occurrence::Last => "last",
        };
        write!(f, "{name}")
    }
}

/// A named holiday rule, evaluated per year.
///
/// Rules are plain values: cloning a rule (or a calendar holding rules)
/// never shares state.
///
/// # Example
///
/// ```rust
/// use fincal_core::calendars::{HolidayRule, Occurrence};
/// use chrono::Weekday;
///
/// // US Thanksgiving: 4th Thursday of November
/// let rule = HolidayRule::nth_weekday("Thanksgiving", 11, Weekday::Thu, Occurrence::Fourth)
///     .unwrap();
/// let date = rule.date_in(2024).unwrap();
/// assert_eq!(date.to_string(), "2024-11-28");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolidayRule {
    /// A single fixed date; applies only to its own year.
    Explicit {
        /// Display name of the holiday.
        name: String,
        /// The one-off holiday date.
        date: Date,
    },
    /// A (month, day) pair repeated every year.
    ///
    /// Applies to a year only when the date exists in it, which guards
    /// Feb-29-only rules in non-leap years.
    Fixed {
        /// Display name of the holiday.
        name: String,
        /// Month (1-12).
        month: u32,
        /// Day of month (1-31).
        day: u32,
    },
    /// The Nth (or last) occurrence of a weekday within a month.
    NthWeekday {
        /// Display name of the holiday.
        name: String,
        /// Month (1-12).
        month: u32,
        /// Target weekday.
        weekday: Weekday,
        /// Which occurrence within the month.
        occurrence: Occurrence,
    },
}

impl HolidayRule {
    /// Creates an explicit one-off holiday rule.
    #[must_use]
    pub fn explicit(name: impl Into<String>, date: Date) -> Self {
        HolidayRule::Explicit {
            name: name.into(),
            date,
        }
    }

    /// Creates a fixed-date rule repeated every year.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidArgument` if `month` is outside 1..=12
    /// or `day` is outside 1..=31.
    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> FincalResult<Self> {
        validate_month(month)?;
        if !(1..=31).contains(&day) {
            return Err(FincalError::invalid_argument(format!(
                "day must be between 1 and 31, got {day}"
            )));
        }
        Ok(HolidayRule::Fixed {
            name: name.into(),
            month,
            day,
        })
    }

    /// Creates an Nth-weekday-of-month rule.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidArgument` if `month` is outside 1..=12.
    pub fn nth_weekday(
        name: impl Into<String>,
        month: u32,
        weekday: Weekday,
        occurrence: Occurrence,
    ) -> FincalResult<Self> {
        validate_month(month)?;
        Ok(HolidayRule::NthWeekday {
            name: name.into(),
            month,
            weekday,
            occurrence,
        })
    }

    /// Returns the rule's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            HolidayRule::Explicit { name, .. }
            | HolidayRule::Fixed { name, .. }
            | HolidayRule::NthWeekday { name, .. } => name,
        }
    }

    /// Checks whether the rule produces a date in the given year.
    #[must_use]
    pub fn applies_to(&self, year: i32) -> bool {
        self.try_date_in(year).is_some()
    }

    /// Computes the rule's date in the given year, or `None` when the
    /// rule has no date that year.
    ///
    /// Calendar scans use this form so that inapplicable rules are
    /// skipped without an error round-trip.
    #[must_use]
    pub fn try_date_in(&self, year: i32) -> Option<Date> {
        match self {
            HolidayRule::Explicit { date, .. } => (date.year() == year).then_some(*date),
            HolidayRule::Fixed { month, day, .. } => Date::from_ymd(year, *month, *day).ok(),
            HolidayRule::NthWeekday {
                month,
                weekday,
                occurrence,
                ..
            } => match occurrence.nth() {
                Some(n) => nth_weekday_of_month(year, *month, *weekday, n),
                None => last_weekday_of_month(year, *month, *weekday),
            },
        }
    }

    /// Computes the rule's date in the given year.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::RuleNotApplicable` when the rule has no date
    /// that year: an explicit date queried for a different year, Feb 29 in
    /// a non-leap year, or a fifth occurrence that does not exist.
    pub fn date_in(&self, year: i32) -> FincalResult<Date> {
        self.try_date_in(year)
            .ok_or_else(|| FincalError::rule_not_applicable(self.name(), year))
    }
}

impl fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayRule::Explicit { name, date } => write!(f, "{name} ({date})"),
            HolidayRule::Fixed { name, month, day } => {
                write!(f, "{name} ({month:02}-{day:02} yearly)")
            }
            HolidayRule::NthWeekday {
                name,
                month,
                weekday,
                occurrence,
            } => write!(f, "{name} ({occurrence} {weekday} of month {month})"),
        }
    }
}

fn validate_month(month: u32) -> FincalResult<()> {
    if !(1..=12).contains(&month) {
        return Err(FincalError::invalid_argument(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(())
}

/// Calculates the nth occurrence of a weekday in a month.
pub(crate) fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<Date> {
    let first_of_month = Date::from_ymd(year, month, 1).ok()?;
    let first_weekday = first_of_month.weekday();

    // Days until the first occurrence of the target weekday
    let days_until = (weekday.num_days_from_monday() as i32
        - first_weekday.num_days_from_monday() as i32)
        .rem_euclid(7) as u32;

    let day = 1 + days_until + (n - 1) * 7;

    Date::from_ymd(year, month, day).ok()
}

/// Calculates the last occurrence of a weekday in a month.
pub(crate) fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<Date> {
    let last_day = Date::from_ymd(year, month, 1).ok()?.end_of_month();

    let days_back = (last_day.weekday().num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32)
        .rem_euclid(7);

    Some(last_day.add_days(-i64::from(days_back)))
}
