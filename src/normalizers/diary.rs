use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::{
    diary::{DiaryEntry, UNKNOWN_DATE},
    raw::{RawDate, RawDiary},
};

use super::{half_stars_to_rating, text_or, UNTITLED};

/// Sorts below every real `YYYY-MM-DD`.
const UNKNOWN_DATE_SORT_KEY: &str = "0000-00-00";

pub fn normalize_diary(diary: RawDiary) -> Vec<DiaryEntry> {
    let mut entries: Vec<DiaryEntry> = diary
        .entries
        .iter()
        .map(|entry| {
            let actions = entry.actions.clone().unwrap_or_default();
            DiaryEntry {
                title: text_or(&entry.name, UNTITLED),
                year: entry.release.unwrap_or(0),
                rating: half_stars_to_rating(actions.rating),
                watch_date: format_watch_date(entry.date.as_ref()),
                rewatch: actions.rewatched.unwrap_or(false),
                slug: entry.slug.clone().unwrap_or_default(),
            }
        })
        .collect();

    entries.sort_by(|a, b| compare_watch_dates(&b.watch_date, &a.watch_date));
    entries
}

/// `YYYY-MM-DD` when all three parts are present and form a real calendar
/// date, otherwise [`UNKNOWN_DATE`].
pub fn format_watch_date(date: Option<&RawDate>) -> String {
    date.and_then(calendar_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

fn calendar_date(date: &RawDate) -> Option<NaiveDate> {
    let year = date.year.filter(|y| (1..=9999).contains(y))?;
    let month = date.month.filter(|m| *m != 0)?;
    let day = date.day.filter(|d| *d != 0)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn compare_watch_dates(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(sort_key(b))
}

fn sort_key(watch_date: &str) -> &str {
    if watch_date == UNKNOWN_DATE {
        UNKNOWN_DATE_SORT_KEY
    } else {
        watch_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> RawDate {
        RawDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    #[test]
    fn zero_pads_valid_dates() {
        assert_eq!(format_watch_date(Some(&date(2024, 3, 5))), "2024-03-05");
    }

    #[test]
    fn rejects_impossible_and_partial_dates() {
        assert_eq!(format_watch_date(Some(&date(2023, 2, 29))), UNKNOWN_DATE);
        assert_eq!(format_watch_date(Some(&date(2024, 13, 1))), UNKNOWN_DATE);
        assert_eq!(format_watch_date(Some(&date(2024, 0, 1))), UNKNOWN_DATE);
        assert_eq!(
            format_watch_date(Some(&RawDate {
                year: Some(2024),
                month: Some(1),
                day: None,
            })),
            UNKNOWN_DATE
        );
        assert_eq!(format_watch_date(None), UNKNOWN_DATE);
    }
}
