//! Weekend day sets.

use chrono::Weekday;
use std::fmt;

/// The set of weekdays treated as non-business days.
///
/// Most markets rest on Saturday and Sunday, but Middle East markets use
/// Friday/Saturday, and degenerate sets (empty, or all seven days) are
/// valid configurations too. Stored as a 7-bit mask, one bit per weekday.
///
/// # Example
///
/// ```rust
/// use fincal_core::types::Weekend;
/// use chrono::Weekday;
///
/// let weekend = Weekend::saturday_sunday();
/// assert!(weekend.contains(Weekday::Sat));
/// assert!(!weekend.contains(Weekday::Mon));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekend(u8);

impl Weekend {
    /// An empty set: every weekday is a working day.
    #[must_use]
    pub const fn none() -> Self {
        Weekend(0)
    }

    /// Saturday and Sunday (most markets).
    #[must_use]
    pub fn saturday_sunday() -> Self {
        Weekend::from_days(&[Weekday::Sat, Weekday::Sun])
    }

    /// Friday and Saturday (Middle East markets).
    #[must_use]
    pub fn friday_saturday() -> Self {
        Weekend::from_days(&[Weekday::Fri, Weekday::Sat])
    }

    /// Sunday only.
    #[must_use]
    pub fn sunday_only() -> Self {
        Weekend::from_days(&[Weekday::Sun])
    }

    /// All seven days. Pathological; useful for failure-mode testing.
    #[must_use]
    pub const fn every_day() -> Self {
        Weekend(0b0111_1111)
    }

    /// Builds a weekend set from a slice of weekdays.
    #[must_use]
    pub fn from_days(days: &[Weekday]) -> Self {
        let mut mask = 0u8;
        for day in days {
            mask |= bit(*day);
        }
        Weekend(mask)
    }

    /// Returns a copy of this set with `day` added.
    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Weekend(self.0 | bit(day))
    }

    /// Checks whether a weekday is in the set.
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of weekdays in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the weekdays in the set, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_WEEKDAYS.iter().copied().filter(|d| self.contains(*d))
    }
}

impl Default for Weekend {
    /// Saturday and Sunday.
    fn default() -> Self {
        Weekend::saturday_sunday()
    }
}

impl fmt::Display for Weekend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let mut first = true;
        for day in self.days() {
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{day}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<Weekday> for Weekend {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut mask = 0u8;
        for day in iter {
            mask |= bit(day);
        }
        Weekend(mask)
    }
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[inline]
fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

impl serde::Serialize for Weekend {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for day in self.days() {
            seq.serialize_element(&day.to_string())?;
        }
        seq.end()
    }
}

impl<'de> serde::Deserialize<'de> for Weekend {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut mask = 0u8;
        for name in names {
            let day: Weekday = name
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("Unknown weekday: {name}")))?;
            mask |= bit(day);
        }
        Ok(Weekend(mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weekend() {
        let weekend = Weekend::default();
        assert!(weekend.contains(Weekday::Sat));
        assert!(weekend.contains(Weekday::Sun));
        assert!(!weekend.contains(Weekday::Fri));
        assert_eq!(weekend.len(), 2);
    }

    #[test]
    fn test_friday_saturday() {
        let weekend = Weekend::friday_saturday();
        assert!(weekend.contains(Weekday::Fri));
        assert!(weekend.contains(Weekday::Sat));
        assert!(!weekend.contains(Weekday::Sun));
    }

    #[test]
    fn test_empty_and_full() {
        assert!(Weekend::none().is_empty());
        assert_eq!(Weekend::none().len(), 0);

        let full = Weekend::every_day();
        assert_eq!(full.len(), 7);
        for day in ALL_WEEKDAYS {
            assert!(full.contains(day));
        }
    }

    #[test]
    fn test_with_builder() {
        let weekend = Weekend::none().with(Weekday::Wed);
        assert!(weekend.contains(Weekday::Wed));
        assert_eq!(weekend.len(), 1);

        // Adding twice is a no-op
        assert_eq!(weekend.with(Weekday::Wed).len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let weekend: Weekend = [Weekday::Sat, Weekday::Sun].into_iter().collect();
        assert_eq!(weekend, Weekend::saturday_sunday());
    }

    #[test]
    fn test_display() {
        assert_eq!(Weekend::saturday_sunday().to_string(), "Sat+Sun");
        assert_eq!(Weekend::none().to_string(), "(none)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let weekend = Weekend::friday_saturday();
        let json = serde_json::to_string(&weekend).unwrap();
        assert_eq!(json, r#"["Fri","Sat"]"#);
        let parsed: Weekend = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, weekend);
    }
}
