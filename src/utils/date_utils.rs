//! Date helpers: `yyyyMMdd` integers, day enumeration and a mockable clock.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use streamliner::date_utils::{enum_days, to_int};
//!
//! let from = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! assert_eq!(to_int(&from), 20240227);
//! let days: Vec<i64> = enum_days(from, to).map(|day| to_int(&day)).collect();
//! assert_eq!(days, [20240227, 20240228, 20240229, 20240301]);
//! ```

use std::ops::{Add, Sub};

use chrono::{Datelike, Days, Local, NaiveDateTime};

/// Source of the current local time.
pub trait DateProvider {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDateProvider(pub NaiveDateTime);

impl DateProvider for FixedDateProvider {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Packs the calendar date of `value` as `yyyyMMdd`.
///
/// The result is 64 bits wide so that every year chrono can represent fits.
pub fn to_int<D: Datelike>(value: &D) -> i64 {
    i64::from(value.year()) * 10_000 + i64::from(value.month()) * 100 + i64::from(value.day())
}

/// Iterator returned by [`enum_days`].
#[derive(Clone, Debug)]
pub struct EnumDays<T> {
    next: Option<T>,
    target_day: i32,
    forward: bool,
}

impl<T> Iterator for EnumDays<T>
where
    T: Datelike + Copy + Add<Days, Output = T> + Sub<Days, Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        let day = current.num_days_from_ce();
        // never step past the target, so the arithmetic cannot leave chrono's range
        self.next = if day == self.target_day {
            None
        } else if self.forward {
            Some(current + Days::new(1))
        } else {
            Some(current - Days::new(1))
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) => {
                let remaining = (self.target_day - current.num_days_from_ce()).unsigned_abs() as usize + 1;
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl<T> ExactSizeIterator for EnumDays<T> where
    T: Datelike + Copy + Add<Days, Output = T> + Sub<Days, Output = T>
{
}

/// Walks from `from` to `to` one day at a time, both ends included.
///
/// The walk runs backwards when `to` is on an earlier calendar day, and
/// yields only `from` when both fall on the same day. The time of day of
/// `from` is carried through every step.
pub fn enum_days<T>(from: T, to: T) -> EnumDays<T>
where
    T: Datelike + Copy + Add<Days, Output = T> + Sub<Days, Output = T>,
{
    let target_day = to.num_days_from_ce();
    EnumDays {
        next: Some(from),
        target_day,
        forward: target_day >= from.num_days_from_ce(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn date_time(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, 30, 0).unwrap())
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(&date_time(2019, 1, 5, 23)), 20190105);
        assert_eq!(to_int(&NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()), 19991231);
    }

    #[test]
    fn test_to_int_at_calendar_limits() {
        // years past 214748 no longer fit an i32 once packed
        assert!(NaiveDate::MAX.year() > 214_748);
        assert_eq!(to_int(&NaiveDate::MAX), i64::from(NaiveDate::MAX.year()) * 10_000 + 1231);
        assert_eq!(to_int(&NaiveDate::MIN), i64::from(NaiveDate::MIN.year()) * 10_000 + 101);
    }

    #[test]
    fn test_to_int_contains_current_year() {
        let now = SystemDateProvider.now();
        assert!(to_int(&now).to_string().contains(&now.year().to_string()));
    }

    #[test]
    fn test_enum_days_forward() {
        let from = date_time(2024, 12, 28, 9);
        let days: Vec<_> = enum_days(from, from + Days::new(10)).collect();
        assert_eq!(days.len(), 11);
        assert_eq!(days[0], from);
        assert_eq!(days[10], date_time(2025, 1, 7, 9));
    }

    #[test]
    fn test_enum_days_same_day() {
        let from = date_time(2024, 5, 1, 18);
        let earlier_same_day = date_time(2024, 5, 1, 2);
        assert_eq!(enum_days(from, from).collect::<Vec<_>>(), [from]);
        assert_eq!(enum_days(from, earlier_same_day).collect::<Vec<_>>(), [from]);
    }

    #[test]
    fn test_enum_days_backward() {
        let from = date_time(2024, 3, 2, 12);
        let days: Vec<i64> = enum_days(from, date_time(2024, 2, 28, 1)).map(|d| to_int(&d)).collect();
        assert_eq!(days, [20240302, 20240301, 20240229, 20240228]);
    }

    #[test]
    fn test_enum_days_reports_exact_length() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let mut days = enum_days(from, to);
        assert_eq!(days.len(), 365);
        days.next();
        assert_eq!(days.len(), 364);
        assert_eq!(days.count(), 364);
    }

    #[test]
    fn test_fixed_provider() {
        let instant = date_time(2020, 2, 29, 6);
        assert_eq!(FixedDateProvider(instant).now(), instant);
    }
}
