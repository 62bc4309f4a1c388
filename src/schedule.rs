//! Lays a permutation out as a weekly rotation: items are taken two at a time, and each pair is
//! assigned to one calendar week, starting with the first Sunday-aligned week after the rotation
//! start.

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Number of items sharing a week.
pub const ITEMS_PER_WEEK: usize = 2;

/// Where the rotation starts counting weeks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStart {
    /// A persisted start date.
    Fixed(NaiveDate),

    /// Whatever the current date is when the rotation is computed.
    Now,
}
impl RotationStart {
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            RotationStart::Fixed(date) => *date,
            RotationStart::Now => today,
        }
    }
}

/// The current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("week {index} of a rotation starting {start} is beyond the supported calendar")]
    OutOfRange { start: NaiveDate, index: usize },
}

/// The Sunday commencing the `index`-th week of the rotation, or `None` if that falls beyond
/// the supported calendar. A rotation starting on a Sunday begins the following Sunday.
pub fn week_commencing(start: NaiveDate, index: usize) -> Option<NaiveDate> {
    let days_to_sunday = 7 - start.weekday().num_days_from_sunday() as u64;
    let weeks = u64::try_from(index).ok()?.checked_mul(7)?;
    start.checked_add_days(Days::new(days_to_sunday.checked_add(weeks)?))
}

/// Long-form US English rendering of a date, e.g. `Sunday, October 18, 2026`.
pub fn format_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Week {
    pub label: String,
    pub commencing: NaiveDate,
    pub items: Vec<String>,
}

pub type Rotation = Vec<Week>;

/// Groups `permutation` into weeks of [ITEMS_PER_WEEK] items; the last week is short if the
/// permutation has an odd length. The `g`-th group is headed by week `g`, so consecutive
/// headings are 7 days apart; this departs from the older page, which numbered headings by
/// item index and so spaced them 14 days apart.
pub fn rotate(permutation: &[String], start: NaiveDate) -> Result<Rotation, ScheduleError> {
    permutation
        .chunks(ITEMS_PER_WEEK)
        .enumerate()
        .map(|(index, items)| {
            let commencing = week_commencing(start, index)
                .ok_or(ScheduleError::OutOfRange { start, index })?;
            Ok(Week {
                label: format_label(commencing),
                commencing,
                items: items.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn wednesday_start() {
        let wednesday = date(2026, 10, 14);
        assert_eq!(Weekday::Wed, wednesday.weekday());
        assert_eq!(Some(date(2026, 10, 18)), week_commencing(wednesday, 0));
        assert_eq!(Some(date(2026, 10, 25)), week_commencing(wednesday, 1));
        assert_eq!(Weekday::Sun, week_commencing(wednesday, 5).unwrap().weekday());
    }

    #[test]
    fn every_weekday_lands_on_the_next_sunday() {
        let sunday = date(2026, 10, 11);
        for offset in 0..7 {
            let start = sunday + Days::new(offset);
            assert_eq!(Some(date(2026, 10, 18)), week_commencing(start, 0), "{start}");
        }
    }

    #[test]
    fn crosses_month_and_year() {
        let start = date(2026, 12, 30);
        assert_eq!(Some(date(2027, 1, 3)), week_commencing(start, 0));
        assert_eq!(Some(date(2027, 1, 10)), week_commencing(start, 1));
    }

    #[test]
    fn end_of_calendar() {
        assert_eq!(None, week_commencing(NaiveDate::MAX, 0));
        let near_end = NaiveDate::MAX.checked_sub_days(Days::new(30)).unwrap();
        assert!(week_commencing(near_end, 0).is_some());
        assert_eq!(None, week_commencing(near_end, 10));
        assert_eq!(None, week_commencing(date(2026, 10, 14), usize::MAX));
    }

    #[test]
    fn rotate_beyond_calendar() {
        let permutation: Vec<_> = ["A", "B"].iter().map(|&item| item.to_owned()).collect();
        assert_eq!(
            Err(ScheduleError::OutOfRange {
                start: NaiveDate::MAX,
                index: 0
            }),
            rotate(&permutation, NaiveDate::MAX)
        );
        assert_eq!(Ok(vec![]), rotate(&[], NaiveDate::MAX));
    }

    #[test]
    fn label() {
        assert_eq!("Sunday, October 18, 2026", format_label(date(2026, 10, 18)));
        assert_eq!("Sunday, March 1, 2026", format_label(date(2026, 3, 1)));
    }

    #[test]
    fn resolve() {
        let today = date(2026, 10, 16);
        assert_eq!(today, RotationStart::Now.resolve(today));
        assert_eq!(
            date(2025, 1, 1),
            RotationStart::Fixed(date(2025, 1, 1)).resolve(today)
        );
    }

    #[test]
    fn rotate_odd() {
        let permutation: Vec<_> = ["C", "A", "B"].iter().map(|&item| item.to_owned()).collect();
        let rotation = rotate(&permutation, date(2026, 10, 14)).unwrap();
        assert_eq!(
            vec![
                Week {
                    label: "Sunday, October 18, 2026".into(),
                    commencing: date(2026, 10, 18),
                    items: vec!["C".into(), "A".into()],
                },
                Week {
                    label: "Sunday, October 25, 2026".into(),
                    commencing: date(2026, 10, 25),
                    items: vec!["B".into()],
                },
            ],
            rotation
        );
    }

    #[test]
    fn rotate_empty() {
        assert!(rotate(&[], date(2026, 10, 14)).unwrap().is_empty());
    }

    #[test]
    fn week_json() {
        let week = Week {
            label: "Sunday, October 18, 2026".into(),
            commencing: date(2026, 10, 18),
            items: vec!["C".into(), "A".into()],
        };
        assert_eq!(
            r#"{"label":"Sunday, October 18, 2026","commencing":"2026-10-18","items":["C","A"]}"#,
            serde_json::to_string(&week).unwrap()
        );
    }
}
