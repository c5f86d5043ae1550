//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{is_business_day, HolidayCalendar};
use crate::error::{FincalError, FincalResult};
use crate::types::{Date, Weekend};

/// Hard ceiling on day-by-day business day searches.
///
/// One leap year of steps. Exceeding it means the calendar configuration
/// is degenerate (e.g. every day marked a holiday) and the search fails
/// with [`FincalError::SearchExhausted`] instead of looping forever.
pub(crate) const MAX_SEARCH_STEPS: u32 = 366;

/// Business day adjustment conventions.
///
/// These conventions specify how to roll a date that falls on a
/// non-business day onto a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless that crosses a month
    /// boundary, in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless that crosses a month
    /// boundary, in which case move to the following business day.
    ModifiedPreceding,

    /// No adjustment; use the date as-is even if not a business day.
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = FincalError;

    fn from_str(s: &str) -> FincalResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '_', '-'], "");
        match normalized.as_str() {
            "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODIFIEDFOLLOWING" | "MF" => Ok(BusinessDayConvention::ModifiedFollowing),
            "PRECEDING" | "P" => Ok(BusinessDayConvention::Preceding),
            "MODIFIEDPRECEDING" | "MP" => Ok(BusinessDayConvention::ModifiedPreceding),
            "UNADJUSTED" | "NONE" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(FincalError::invalid_argument(format!(
                "unknown business day convention: '{s}'"
            ))),
        }
    }
}

/// Adjusts a date according to the given business day convention.
///
/// A date that is already a business day is returned unchanged under
/// every convention; the check happens here once, not per variant.
///
/// # Errors
///
/// Returns `FincalError::SearchExhausted` if no business day is found
/// within 366 steps in the search direction.
pub fn adjust(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: Weekend,
) -> FincalResult<Date> {
    if is_business_day(date, calendar, weekend) {
        return Ok(date);
    }

    match convention {
        BusinessDayConvention::Unadjusted => Ok(date),

        BusinessDayConvention::Following => following(date, calendar, weekend),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar, weekend)?;
            if adjusted.month() != date.month() {
                // Crossed the month boundary; fall back to preceding
                preceding(date, calendar, weekend)
            } else {
                Ok(adjusted)
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar, weekend),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = preceding(date, calendar, weekend)?;
            if adjusted.month() != date.month() {
                // Crossed the month boundary; fall back to following
                following(date, calendar, weekend)
            } else {
                Ok(adjusted)
            }
        }
    }
}

/// Steps forward to the next business day on or after `date`.
pub(crate) fn following(
    mut date: Date,
    calendar: &HolidayCalendar,
    weekend: Weekend,
) -> FincalResult<Date> {
    let mut steps = 0u32;
    while !is_business_day(date, calendar, weekend) {
        steps += 1;
        if steps > MAX_SEARCH_STEPS {
            log::debug!("forward business day search gave up at {date}");
            return Err(FincalError::search_exhausted(
                "business day adjustment",
                MAX_SEARCH_STEPS,
            ));
        }
        date = date.add_days(1);
    }
    Ok(date)
}

/// Steps backward to the previous business day on or before `date`.
pub(crate) fn preceding(
    mut date: Date,
    calendar: &HolidayCalendar,
    weekend: Weekend,
) -> FincalResult<Date> {
    let mut steps = 0u32;
    while !is_business_day(date, calendar, weekend) {
        steps += 1;
        if steps > MAX_SEARCH_STEPS {
            log::debug!("backward business day search gave up at {date}");
            return Err(FincalError::search_exhausted(
                "business day adjustment",
                MAX_SEARCH_STEPS,
            ));
        }
        date = date.add_days(-1);
    }
    Ok(date)
}
