//! Actual/Actual ISDA day count convention.

use rust_decimal::Decimal;

use super::{check_order, DayCount};
use crate::error::FincalResult;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// Each calendar year in the span contributes its actual days over its
/// own length, so a whole year contributes exactly 1 whether or not it is
/// a leap year. The ISDA standard for swaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> FincalResult<Decimal> {
        check_order(start, end)?;

        // Same year: actual days over that year's length
        if start.year() == end.year() {
            let days = start.days_between(&end);
            return Ok(Decimal::from(days) / Decimal::from(start.days_in_year()));
        }

        // First partial year: start through Dec 31, inclusive
        let year_end = Date::from_ymd(start.year(), 12, 31)?;
        let days_in_first = start.days_between(&year_end) + 1;
        let mut fraction =
            Decimal::from(days_in_first) / Decimal::from(start.days_in_year());

        // Whole years in between each contribute exactly 1
        fraction += Decimal::from(end.year() - start.year() - 1);

        // Last partial year: Jan 1 through end
        let year_start = Date::from_ymd(end.year(), 1, 1)?;
        let days_in_last = year_start.days_between(&end);
        fraction += Decimal::from(days_in_last) / Decimal::from(end.days_in_year());

        Ok(fraction)
    }

    fn day_count(&self, start: Date, end: Date) -> FincalResult<i64> {
        check_order(start, end)?;
        Ok(start.days_between(&end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_full_leap_year_is_exactly_one() {
        let dc = ActActIsda;
        assert_eq!(
            dc.year_fraction(ymd(2024, 1, 1), ymd(2025, 1, 1)).unwrap(),
            dec!(1)
        );
    }

    #[test]
    fn test_full_non_leap_year_is_exactly_one() {
        let dc = ActActIsda;
        assert_eq!(
            dc.year_fraction(ymd(2025, 1, 1), ymd(2026, 1, 1)).unwrap(),
            dec!(1)
        );
    }

    #[test]
    fn test_same_year_span() {
        let dc = ActActIsda;
        // 2025-01-01 to 2025-07-01 is 181 days of a 365-day year
        assert_eq!(
            dc.year_fraction(ymd(2025, 1, 1), ymd(2025, 7, 1)).unwrap(),
            dec!(181) / dec!(365)
        );
    }

    #[test]
    fn test_cross_year_split() {
        let dc = ActActIsda;
        // 2024-07-01 to 2025-07-01: 184 days of 366 + 181 days of 365
        let yf = dc.year_fraction(ymd(2024, 7, 1), ymd(2025, 7, 1)).unwrap();
        let expected = dec!(184) / dec!(366) + dec!(181) / dec!(365);
        assert_eq!(yf, expected);
    }

    #[test]
    fn test_multi_year_span() {
        let dc = ActActIsda;
        // Three whole calendar years
        assert_eq!(
            dc.year_fraction(ymd(2023, 1, 1), ymd(2026, 1, 1)).unwrap(),
            dec!(3)
        );
    }

    #[test]
    fn test_day_count_is_actual() {
        let dc = ActActIsda;
        assert_eq!(dc.day_count(ymd(2024, 1, 1), ymd(2025, 1, 1)).unwrap(), 366);
    }

    #[test]
    fn test_rejects_reversed() {
        let dc = ActActIsda;
        assert!(dc.year_fraction(ymd(2025, 1, 2), ymd(2025, 1, 1)).is_err());
    }
}
