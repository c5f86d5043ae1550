//! Actual/365 Fixed day count convention.

use rust_decimal::Decimal;

use super::{check_order, DayCount};
use crate::error::FincalResult;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// Actual calendar days over a fixed 365-day year, even across leap
/// years. Used for UK Gilts and AUD/NZD markets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> FincalResult<Decimal> {
        let days = self.day_count(start, end)?;
        Ok(Decimal::from(days) / Decimal::from(365))
    }

    fn day_count(&self, start: Date, end: Date) -> FincalResult<i64> {
        check_order(start, end)?;
        Ok(start.days_between(&end))
    }
}
