//! Tenor periods for date arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FincalError, FincalResult};

/// The unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodUnit {
    /// Business days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months, with day-of-month clamping.
    Months,
    /// Calendar years, with leap day clamping.
    Years,
}

impl PeriodUnit {
    /// Returns the single-letter suffix used in tenor strings.
    #[must_use]
    pub const fn suffix(&self) -> char {
        match self {
            PeriodUnit::Days => 'D',
            PeriodUnit::Weeks => 'W',
            PeriodUnit::Months => 'M',
            PeriodUnit::Years => 'Y',
        }
    }
}

/// A tenor: a signed magnitude plus a unit, e.g. `2W`, `6M`, `-10Y`.
///
/// Negative values mean "go backward". Parsed from the compact grammar
/// `[+-]?digits+[DdWwMmYy]`.
///
/// # Example
///
/// ```rust
/// use fincal_core::types::{Period, PeriodUnit};
///
/// let tenor: Period = "6M".parse().unwrap();
/// assert_eq!(tenor.value(), 6);
/// assert_eq!(tenor.unit(), PeriodUnit::Months);
/// assert_eq!(tenor.to_string(), "6M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    value: i32,
    unit: PeriodUnit,
}

impl Period {
    /// Creates a new period.
    #[must_use]
    pub const fn new(value: i32, unit: PeriodUnit) -> Self {
        Self { value, unit }
    }

    /// A period of `n` business days.
    #[must_use]
    pub const fn days(n: i32) -> Self {
        Self::new(n, PeriodUnit::Days)
    }

    /// A period of `n` weeks.
    #[must_use]
    pub const fn weeks(n: i32) -> Self {
        Self::new(n, PeriodUnit::Weeks)
    }

    /// A period of `n` months.
    #[must_use]
    pub const fn months(n: i32) -> Self {
        Self::new(n, PeriodUnit::Months)
    }

    /// A period of `n` years.
    #[must_use]
    pub const fn years(n: i32) -> Self {
        Self::new(n, PeriodUnit::Years)
    }

    /// Returns the signed magnitude.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the unit.
    #[must_use]
    pub const fn unit(&self) -> PeriodUnit {
        self.unit
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Period {
    type Err = FincalError;

    /// Parses a tenor string of the form `[+-]?digits+[DdWwMmYy]`.
    ///
    /// No whitespace is permitted anywhere in the input.
    fn from_str(s: &str) -> FincalResult<Self> {
        if s.is_empty() {
            return Err(FincalError::invalid_argument("period string cannot be empty"));
        }

        let bytes = s.as_bytes();
        let mut numeric_end = usize::from(bytes[0] == b'+' || bytes[0] == b'-');
        let numeric_start = numeric_end;

        while numeric_end < bytes.len() && bytes[numeric_end].is_ascii_digit() {
            numeric_end += 1;
        }

        if numeric_end == numeric_start {
            return Err(FincalError::invalid_argument(format!(
                "period string must contain a numeric value: '{s}'"
            )));
        }

        // Exactly one character may follow the digits: the unit letter
        if numeric_end + 1 != s.len() {
            return Err(FincalError::invalid_argument(format!(
                "period string must end with a single unit character (D/W/M/Y): '{s}'"
            )));
        }

        let value: i32 = s[..numeric_end].parse().map_err(|_| {
            FincalError::invalid_argument(format!("numeric value out of range in period string: '{s}'"))
        })?;

        let unit = match bytes[numeric_end].to_ascii_uppercase() {
            b'D' => PeriodUnit::Days,
            b'W' => PeriodUnit::Weeks,
            b'M' => PeriodUnit::Months,
            b'Y' => PeriodUnit::Years,
            other => {
                return Err(FincalError::invalid_argument(format!(
                    "invalid period unit '{}', must be D, W, M, or Y: '{s}'",
                    other as char
                )))
            }
        };

        Ok(Period::new(value, unit))
    }
}
