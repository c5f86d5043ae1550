//! Actual/360 day count convention.

use rust_decimal::Decimal;

use super::{check_order, DayCount};
use crate::error::FincalResult;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Actual calendar days over a 360-day year. The money market standard
/// for USD and EUR deposits and FRNs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> FincalResult<Decimal> {
        let days = self.day_count(start, end)?;
        Ok(Decimal::from(days) / Decimal::from(360))
    }

    fn day_count(&self, start: Date, end: Date) -> FincalResult<i64> {
        check_order(start, end)?;
        Ok(start.days_between(&end))
    }
}
