//! Tenor advancement with business day awareness.

use super::conventions::{adjust, MAX_SEARCH_STEPS};
use super::{is_business_day, BusinessDayConvention, HolidayCalendar};
use crate::error::{FincalError, FincalResult};
use crate::types::{Date, Period, PeriodUnit, Weekend};

/// Advances a date by a tenor, then applies the business day convention.
///
/// The raw advancement depends on the unit:
///
/// - **Days**: the count is a number of *business* days to traverse;
///   weekends and holidays are skipped while stepping.
/// - **Weeks**: pure calendar arithmetic, `7 * count` days.
/// - **Months**: calendar-aware, with the day of month clamped to the
///   target month's end when it would overflow (Jan 31 + 1M = Feb 28/29).
/// - **Years**: calendar-aware, Feb 29 clamped in non-leap target years.
///
/// The raw result is then rolled by `convention`. Business day stepping
/// already lands on a business day, so for a non-zero Days tenor the roll
/// is a no-op by construction.
///
/// # Errors
///
/// Returns `FincalError::SearchExhausted` when business day stepping or
/// the final adjustment exceeds its iteration ceiling, and
/// `FincalError::InvalidDate` when week/month/year arithmetic leaves the
/// representable range.
///
/// # Example
///
/// ```rust
/// use fincal_core::calendars::{advance_tenor, BusinessDayConvention, HolidayCalendar};
/// use fincal_core::types::{Date, Weekend};
///
/// let start = Date::from_ymd(2024, 5, 31).unwrap();
/// let end = advance_tenor(
///     start,
///     "1M",
///     BusinessDayConvention::ModifiedFollowing,
///     &HolidayCalendar::new(),
///     Weekend::saturday_sunday(),
/// )
/// .unwrap();
/// // June 30 2024 is a Sunday; Modified Following stays within June
/// assert_eq!(end, Date::from_ymd(2024, 6, 28).unwrap());
/// ```
pub fn advance(
    date: Date,
    period: Period,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: Weekend,
) -> FincalResult<Date> {
    let raw = match period.unit() {
        PeriodUnit::Days => add_business_days(date, period.value(), calendar, weekend)?,
        PeriodUnit::Weeks => date.checked_add_days(7 * i64::from(period.value()))?,
        PeriodUnit::Months => date.add_months(period.value())?,
        PeriodUnit::Years => date.add_years(period.value())?,
    };

    adjust(raw, convention, calendar, weekend)
}

/// Advances a date by a tenor string, e.g. `"2W"` or `"-6M"`.
///
/// # Errors
///
/// Returns `FincalError::InvalidArgument` for a malformed tenor string,
/// plus everything [`advance`] can return.
pub fn advance_tenor(
    date: Date,
    tenor: &str,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: Weekend,
) -> FincalResult<Date> {
    advance(date, tenor.parse()?, convention, calendar, weekend)
}

/// Adds a signed number of business days to a date.
///
/// Steps one calendar day at a time in the direction of the sign,
/// counting only steps that land on a business day, until the requested
/// magnitude has been counted. Zero is a no-op.
///
/// # Errors
///
/// Returns `FincalError::SearchExhausted` after
/// 366 steps without reaching the target.
pub fn add_business_days(
    date: Date,
    count: i32,
    calendar: &HolidayCalendar,
    weekend: Weekend,
) -> FincalResult<Date> {
    if count == 0 {
        return Ok(date);
    }

    let direction: i64 = if count > 0 { 1 } else { -1 };
    let target = count.unsigned_abs();
    let mut current = date;
    let mut counted = 0u32;
    let mut steps = 0u32;

    while counted < target {
        steps += 1;
        if steps > MAX_SEARCH_STEPS {
            log::debug!("business day stepping gave up at {current} ({counted}/{target})");
            return Err(FincalError::search_exhausted(
                "business day advancement",
                MAX_SEARCH_STEPS,
            ));
        }

        current = current.add_days(direction);
        if is_business_day(current, calendar, weekend) {
            counted += 1;
        }
    }

    Ok(current)
}
