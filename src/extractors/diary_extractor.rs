use select::{
    document::Document,
    node::Node,
    predicate::{Class, Name, Predicate},
};

use crate::model::raw::{RawDate, RawDiaryActions, RawDiaryEntry, RawFilmRef, RawRecentDiary};

use super::{page_extractor::PageExtractor, poster_extractor::PosterExtractor};

#[derive(Debug)]
pub struct DiaryExtractor {}

impl DiaryExtractor {
    pub fn extract_diary_entries(diary_page_html: &str) -> Vec<RawDiaryEntry> {
        Document::from(diary_page_html)
            .find(Name("tr").and(Class("diary-entry-row")))
            .map(|row| Self::extract_entry(&row))
            .collect()
    }

    /// Groups dated entries into month -> day -> films, keeping page order
    /// within a day.
    pub fn group_by_day(entries: &[RawDiaryEntry]) -> RawRecentDiary {
        let mut recent = RawRecentDiary::default();
        for entry in entries {
            let Some(date) = &entry.date else {
                continue;
            };
            let (Some(year), Some(month), Some(day)) = (date.year, date.month, date.day) else {
                continue;
            };

            recent
                .months
                .entry((year, month))
                .or_default()
                .entry(day)
                .or_default()
                .push(RawFilmRef {
                    name: entry.name.clone(),
                    year: entry.release,
                    slug: entry.slug.clone(),
                    link: entry.slug.as_ref().map(|slug| format!("/film/{}/", slug)),
                    average_rating: None,
                });
        }
        recent
    }

    fn extract_entry(row: &Node) -> RawDiaryEntry {
        let poster = PosterExtractor::posters_under(row).into_iter().next();

        let id = row
            .attr("data-viewing-id")
            .map(|id| id.to_string())
            .or_else(|| {
                row.attr("id")
                    .and_then(|id| id.rsplit('-').next())
                    .map(|id| id.to_string())
            })
            .unwrap_or_default();

        let name = PageExtractor::first_text(
            row.find(Name("h3").or(Name("h2")).descendant(Name("a"))),
        )
        .or_else(|| poster.as_ref().and_then(|p| p.name.clone()));

        let release = row
            .find(Class("td-released").or(Class("col-releaseyear")))
            .next()
            .and_then(|n| n.text().trim().parse::<i32>().ok())
            .or_else(|| poster.as_ref().and_then(|p| p.year));

        let date = row
            .find(Name("a"))
            .flat_map(|n| n.attr("href"))
            .flat_map(Self::date_from_diary_link)
            .max_by_key(|date| date.day.is_some());

        RawDiaryEntry {
            id,
            name,
            release,
            slug: poster.and_then(|p| p.slug),
            date,
            actions: Some(RawDiaryActions {
                rating: Self::extract_rating(row),
                rewatched: row
                    .find(Class("td-rewatch").or(Class("col-rewatch")))
                    .next()
                    .map(|n| !n.is(Class("icon-status-off"))),
            }),
        }
    }

    fn extract_rating(row: &Node) -> Option<u8> {
        row.find(Name("input").and(Class("rateit-field")))
            .next()
            .and_then(|n| n.attr("value"))
            .and_then(|value| value.parse::<u8>().ok())
            .filter(|rating| *rating > 0)
            .or_else(|| {
                row.find(Class("rating"))
                    .find_map(|n| PageExtractor::rating_from_classes(&n))
            })
    }

    /// `/someone/films/diary/for/2024/03/15/` -> 2024-03-15.
    fn date_from_diary_link(href: &str) -> Option<RawDate> {
        let rest = href.split("/for/").nth(1)?;
        let mut parts = rest
            .split('/')
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<u32>().ok());

        let year = parts.next().flatten().and_then(|y| i32::try_from(y).ok())?;
        Some(RawDate {
            year: Some(year),
            month: parts.next().flatten(),
            day: parts.next().flatten(),
        })
    }
}
