//! 30/360 US (Bond Basis) day count convention.

use rust_decimal::Decimal;

use super::{check_order, DayCount};
use crate::error::FincalResult;
use crate::types::Date;

/// 30/360 US day count convention (Bond Basis).
///
/// Assumes 30-day months and a 360-day year, with end-of-month day
/// substitution:
///
/// 1. If D1 is 31, treat D1 as 30.
/// 2. If D2 is 31 and the *original* D1 was 30 or 31, treat D2 as 30.
///
/// # Formula
///
/// `days = 360*(Y2-Y1) + 30*(M2-M1) + (D2-D1)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> FincalResult<Decimal> {
        let days = self.day_count(start, end)?;
        Ok(Decimal::from(days) / Decimal::from(360))
    }

    fn day_count(&self, start: Date, end: Date) -> FincalResult<i64> {
        check_order(start, end)?;

        let y1 = i64::from(start.year());
        let y2 = i64::from(end.year());
        let m1 = i64::from(start.month());
        let m2 = i64::from(end.month());
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        // The end-day rule looks at the start day before substitution
        let original_d1 = d1;
        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && (original_d1 == 30 || original_d1 == 31) {
            d2 = 30;
        }

        Ok(360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1))
    }
}
