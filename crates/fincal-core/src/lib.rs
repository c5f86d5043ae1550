//! # Fincal Core
//!
//! Calendar-aware date arithmetic for fixed income and derivatives work.
//!
//! This crate provides the date machinery trade schedules are built on:
//!
//! - **Types**: Domain-specific types like `Date`, `Period`, `Weekend`
//! - **Holiday Calendars**: Explicit dates plus recurring holiday rules
//! - **Business Day Conventions**: Following, Modified Following, Preceding
//! - **Tenor Advancement**: Roll a date by "3M", "10D", "1Y" with adjustment
//! - **Day Count Conventions**: Industry-standard year fraction calculations
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent invalid dates from ever existing
//! - **Closed Enums**: Conventions and rules are enums, not open hierarchies
//! - **Explicit Over Implicit**: Bounded searches fail loudly, never spin
//!
//! ## Example
//!
//! ```rust
//! use fincal_core::prelude::*;
//!
//! let mut calendar = HolidayCalendar::new();
//! calendar.add_rule(HolidayRule::fixed("Christmas Day", 12, 25).unwrap());
//!
//! let date = Date::from_ymd(2024, 12, 24).unwrap();
//! let spot = advance_tenor(date, "2D", BusinessDayConvention::Following,
//!     &calendar, Weekend::saturday_sunday()).unwrap();
//! assert_eq!(spot, Date::from_ymd(2024, 12, 27).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::if_not_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        add_business_days, advance, advance_tenor, adjust, business_days_diff, diff,
        is_business_day, BusinessDayConvention, HolidayCalendar, HolidayRule, Occurrence,
    };
    pub use crate::daycounts::{day_count, year_fraction, DayCount, DayCountConvention};
    pub use crate::error::{FincalError, FincalResult};
    pub use crate::types::{Date, Period, PeriodUnit, Weekend};
}

// Re-export commonly used types at crate root
pub use error::{FincalError, FincalResult};
pub use types::{Date, Period, PeriodUnit, Weekend};
