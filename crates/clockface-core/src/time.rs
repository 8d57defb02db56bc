//! Time values the clock face is drawn from.

use chrono::Timelike;

/// Hour shown by one of the twelve dial numerals, always in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourValue(u8);

impl HourValue {
    /// Returns `None` outside `1..=12`.
    pub fn new(hour: u8) -> Option<Self> {
        (1..=12).contains(&hour).then_some(Self(hour))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The twelve dial numerals in clockwise order, starting at 1.
    pub fn all() -> impl Iterator<Item = HourValue> {
        (1..=12).map(HourValue)
    }
}

/// A wall-clock reading, sampled once and never changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// Returns `None` unless `hour < 24`, `minute < 60` and `second < 60`.
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        (hour < 24 && minute < 60 && second < 60).then_some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Snapshot of any chrono time value.
    ///
    /// chrono reports a leap second as second 59, so it stays in range.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }

    /// Hour in 24-hour form, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn test_hour_value_range() {
        assert!(HourValue::new(0).is_none());
        assert!(HourValue::new(13).is_none());
        assert_eq!(HourValue::new(12).map(HourValue::get), Some(12));
    }

    #[test]
    fn test_all_hours() {
        let hours: Vec<u8> = HourValue::all().map(HourValue::get).collect();
        assert_eq!(hours, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_clock_time_validation() {
        assert!(ClockTime::new(23, 59, 59).is_some());
        assert!(ClockTime::new(24, 0, 0).is_none());
        assert!(ClockTime::new(0, 60, 0).is_none());
        assert!(ClockTime::new(0, 0, 60).is_none());
    }

    #[test]
    fn test_from_timelike() {
        let t = NaiveTime::from_hms_opt(14, 5, 33).unwrap();
        let time = ClockTime::from_timelike(&t);
        assert_eq!(time, ClockTime::new(14, 5, 33).unwrap());
    }

    #[test]
    fn test_leap_second_folds_into_last_second() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(ClockTime::from_timelike(&t).second(), 59);
    }
}
