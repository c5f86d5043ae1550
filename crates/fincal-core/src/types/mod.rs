//! Core value types.
//!
//! This module provides the domain-specific value types used throughout
//! Fincal:
//!
//! - [`Date`]: A validated proleptic Gregorian calendar date
//! - [`Period`]: A tenor (signed magnitude plus unit)
//! - [`Weekend`]: The set of weekdays treated as non-business days

mod date;
mod period;
mod weekend;

pub use date::Date;
pub use period::{Period, PeriodUnit};
pub use weekend::Weekend;
