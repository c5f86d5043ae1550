//! Holiday calendars and business day logic.
//!
//! This module provides:
//! - [`HolidayCalendar`]: explicit holiday dates plus rule-generated holidays
//! - [`HolidayRule`]: fixed-date, nth-weekday and one-off holiday rules
//! - [`BusinessDayConvention`] and [`adjust`]: date rolling for non-business days
//! - [`advance`]: tenor arithmetic with business day awareness
//! - Day counting between dates ([`diff`], [`business_days_diff`])

mod advance;
mod conventions;
mod rules;

pub use advance::{add_business_days, advance, advance_tenor};
pub use conventions::{adjust, BusinessDayConvention};
pub use rules::{HolidayRule, Occurrence};

use std::collections::BTreeSet;

use crate::types::{Date, Weekend};

/// A calendar of market holidays.
///
/// Holds a set of explicit holiday dates and an ordered list of
/// [`HolidayRule`]s evaluated per year. A date is a holiday when it is in
/// the explicit set or any rule computes it for the date's year.
///
/// Calendars are built incrementally and cheap to clone; rules are plain
/// values, so a clone never shares state with the original.
///
/// # Example
///
/// ```rust
/// use fincal_core::calendars::{HolidayCalendar, HolidayRule};
/// use fincal_core::types::Date;
///
/// let mut calendar = HolidayCalendar::new();
/// calendar.add_rule(HolidayRule::fixed("New Year's Day", 1, 1).unwrap());
/// calendar.add_holiday(Date::from_ymd(2025, 3, 14).unwrap());
///
/// assert!(calendar.is_holiday(Date::from_ymd(2025, 1, 1).unwrap()));
/// assert!(calendar.is_holiday(Date::from_ymd(2026, 1, 1).unwrap()));
/// assert!(!calendar.is_holiday(Date::from_ymd(2026, 3, 14).unwrap()));
/// ```
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct HolidayCalendar {
    /// Explicit one-off holiday dates, kept sorted.
    explicit: BTreeSet<Date>,
    /// Holiday rules in insertion order.
    rules: Vec<HolidayRule>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar from a list of explicit holiday dates.
    pub fn from_dates(holidays: impl IntoIterator<Item = Date>) -> Self {
        let mut calendar = Self::new();
        calendar.add_holidays(holidays);
        calendar
    }

    /// Adds an explicit holiday date. Duplicates are ignored.
    pub fn add_holiday(&mut self, date: Date) {
        self.explicit.insert(date);
    }

    /// Adds multiple explicit holiday dates.
    pub fn add_holidays(&mut self, dates: impl IntoIterator<Item = Date>) {
        self.explicit.extend(dates);
    }

    /// Adds a holiday rule.
    pub fn add_rule(&mut self, rule: HolidayRule) {
        log::trace!("adding holiday rule: {rule}");
        self.rules.push(rule);
    }

    /// Checks whether a date is a holiday.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        if self.explicit.contains(&date) {
            return true;
        }
        let year = date.year();
        self.rules
            .iter()
            .any(|rule| rule.try_date_in(year) == Some(date))
    }

    /// Returns all holidays in a year, ascending and deduplicated.
    ///
    /// Rules that do not apply to the year are skipped.
    #[must_use]
    pub fn holidays_in_year(&self, year: i32) -> Vec<Date> {
        let mut holidays: BTreeSet<Date> = self
            .explicit
            .iter()
            .copied()
            .filter(|date| date.year() == year)
            .collect();

        holidays.extend(self.rules.iter().filter_map(|rule| rule.try_date_in(year)));

        holidays.into_iter().collect()
    }

    /// Returns the names of all holidays falling on a date.
    ///
    /// Explicit entries carry no name and contribute the literal
    /// `"Holiday"`; every rule whose computed date matches contributes its
    /// name, so a single date can yield several entries.
    #[must_use]
    pub fn holiday_names(&self, date: Date) -> Vec<String> {
        let mut names = Vec::new();

        if self.explicit.contains(&date) {
            names.push("Holiday".to_string());
        }

        let year = date.year();
        for rule in &self.rules {
            if rule.try_date_in(year) == Some(date) {
                names.push(rule.name().to_string());
            }
        }

        names
    }

    /// Number of explicit holiday dates held by the calendar.
    ///
    /// Rules are counted separately by [`HolidayCalendar::rule_len`]: a
    /// single rule can generate a holiday in every year.
    #[must_use]
    pub fn explicit_len(&self) -> usize {
        self.explicit.len()
    }

    /// Number of holiday rules held by the calendar.
    #[must_use]
    pub fn rule_len(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether the calendar holds no holidays and no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.explicit.is_empty() && self.rules.is_empty()
    }

    /// Removes all holidays and rules.
    pub fn clear(&mut self) {
        self.explicit.clear();
        self.rules.clear();
    }
}

/// Checks whether a date is a business day.
///
/// A business day is a calendar day whose weekday is not in the weekend
/// set and which is not a holiday. A holiday falling on a weekend is
/// simply a non-business day, with no special handling.
#[must_use]
pub fn is_business_day(date: Date, calendar: &HolidayCalendar, weekend: Weekend) -> bool {
    !weekend.contains(date.weekday()) && !calendar.is_holiday(date)
}

/// Signed calendar day count: `end - start` in whole days.
#[must_use]
pub fn diff(start: Date, end: Date) -> i64 {
    start.days_between(&end)
}

/// Signed count of business days between two dates.
///
/// Counts along the direction of travel, excluding the earlier endpoint
/// and including the later one. Zero for equal dates; the sign flips when
/// the endpoints swap.
#[must_use]
pub fn business_days_diff(
    start: Date,
    end: Date,
    calendar: &HolidayCalendar,
    weekend: Weekend,
) -> i64 {
    if start == end {
        return 0;
    }

    let (lo, hi, sign) = if start < end {
        (start, end, 1)
    } else {
        (end, start, -1)
    };

    let mut count = 0i64;
    let mut current = lo.add_days(1);
    while current <= hi {
        if is_business_day(current, calendar, weekend) {
            count += 1;
        }
        current = current.add_days(1);
    }

    count * sign
}
