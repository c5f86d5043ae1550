//! Day count conventions for interest accrual.
//!
//! Day count conventions determine how accrued interest is calculated by
//! specifying how to count days between two dates and how to convert that
//! count into a fraction of a year.
//!
//! # Supported Conventions
//!
//! - [`ActActIsda`]: Actual/Actual ISDA - year-based split
//! - [`Act360`]: Actual/360 - money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - UK Gilts, AUD/NZD
//! - [`Thirty360US`]: 30/360 US Bond Basis - US corporate bonds
//!
//! # Usage
//!
//! ```rust
//! use fincal_core::daycounts::{DayCount, Thirty360US};
//! use fincal_core::types::Date;
//!
//! let dc = Thirty360US;
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 1, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end).unwrap(), 360);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;
pub use thirty360::Thirty360US;

use rust_decimal::Decimal;

use crate::error::{FincalError, FincalResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Both operations require `start <= end`; accrual spans are never
/// negative under these conventions.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidArgument` if `start > end`.
    fn year_fraction(&self, start: Date, end: Date) -> FincalResult<Decimal>;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360 it
    /// uses the 30-day month substitution.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::InvalidArgument` if `start > end`.
    fn day_count(&self, start: Date, end: Date) -> FincalResult<i64>;
}

/// Enumeration of the supported day count conventions.
///
/// Provides runtime selection and conversion to a boxed strategy.
///
/// # Example
///
/// ```rust
/// use fincal_core::daycounts::{DayCount, DayCountConvention};
/// use fincal_core::types::Date;
///
/// let dc = DayCountConvention::Act360.to_day_count();
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
/// assert_eq!(dc.day_count(start, end).unwrap(), 181);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DayCountConvention {
    /// Actual/Actual ISDA - year-based calculation for swaps.
    ActActIsda,

    /// Actual/360 - money market instruments.
    Act360,

    /// Actual/365 Fixed - denominator is 365 even across leap years.
    Act365Fixed,

    /// 30/360 US (Bond Basis) - US corporate, agency, municipal bonds.
    Thirty360US,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::Thirty360US => Box::new(Thirty360US),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Thirty360US => "30/360 US",
        }
    }

    /// Returns all supported day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::ActActIsda,
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::Thirty360US,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = FincalError;

    /// Parses a day count convention from a string.
    ///
    /// Accepts market names ("ACT/360", "30/360 US") and common aliases
    /// ("ACTUAL/360", "BOND"), case-insensitively.
    fn from_str(s: &str) -> FincalResult<Self> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL (ISDA)"
            | "ACTACTISDA" | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 (FIXED)"
            | "ACT365FIXED" | "ACT365" => Ok(DayCountConvention::Act365Fixed),

            "30/360" | "30/360 US" | "30/360 (BOND BASIS)" | "BOND" | "THIRTY360US"
            | "30/360US" => Ok(DayCountConvention::Thirty360US),

            _ => Err(FincalError::invalid_argument(format!(
                "unknown day count convention: '{s}'"
            ))),
        }
    }
}

/// Calculates the day count between two dates under a convention.
///
/// # Errors
///
/// Returns `FincalError::InvalidArgument` if `start > end`.
pub fn day_count(start: Date, end: Date, convention: DayCountConvention) -> FincalResult<i64> {
    convention.to_day_count().day_count(start, end)
}

/// Calculates the year fraction between two dates under a convention.
///
/// # Errors
///
/// Returns `FincalError::InvalidArgument` if `start > end`.
pub fn year_fraction(
    start: Date,
    end: Date,
    convention: DayCountConvention,
) -> FincalResult<Decimal> {
    convention.to_day_count().year_fraction(start, end)
}

/// Rejects out-of-order date pairs.
pub(crate) fn check_order(start: Date, end: Date) -> FincalResult<()> {
    if start > end {
        return Err(FincalError::invalid_argument(format!(
            "start date {start} must not be after end date {end}"
        )));
    }
    Ok(())
}
