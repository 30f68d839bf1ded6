//! Loosely-typed records as they come off Letterboxd pages.
//!
//! Every field is optional: pages change shape, films lack metadata, private
//! profiles hide sections. Normalizers decide what each absence turns into.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDiaryActions {
    /// Half-star scale, 0..=10.
    pub rating: Option<u8>,
    pub rewatched: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDiaryEntry {
    /// Viewing id, unique per diary row.
    pub id: String,
    pub name: Option<String>,
    pub release: Option<i32>,
    pub slug: Option<String>,
    pub date: Option<RawDate>,
    pub actions: Option<RawDiaryActions>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDiary {
    pub entries: Vec<RawDiaryEntry>,
}

/// A film as shown on a poster grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFilmRef {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub slug: Option<String>,
    pub link: Option<String>,
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawWatchlist {
    pub available: bool,
    pub data: Vec<RawFilmRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPerson {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGenre {
    pub name: Option<String>,
    /// `genre`, `theme`, `mini-theme`...
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFilmReview {
    pub username: Option<String>,
    pub review: Option<String>,
    /// Star glyphs, e.g. `★★★½`.
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawWatcherStats {
    pub members: Option<u64>,
    pub fans: Option<u64>,
    pub likes: Option<u64>,
    pub reviews: Option<u64>,
    pub lists: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    /// Role (`director`, `writer`, ...) to the people credited with it.
    pub crew: BTreeMap<String, Vec<RawPerson>>,
    pub genres: Vec<RawGenre>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub popular_reviews: Vec<RawFilmReview>,
    /// Minutes.
    pub runtime: Option<i64>,
    pub cast: Vec<RawPerson>,
    pub watchers: RawWatcherStats,
    pub tagline: Option<String>,
    pub similar: Vec<RawFilmRef>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListFilm {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub url: Option<String>,
    pub director: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawList {
    pub movies: Vec<RawListFilm>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFilmSearchResult {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub slug: Option<String>,
    pub directors: Vec<RawPerson>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFilmSearch {
    pub results: Vec<RawFilmSearchResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListSearchResult {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListSearch {
    /// False when the page has no results block at all.
    pub available: bool,
    pub results: Vec<RawListSearchResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawUserStats {
    pub films: Option<u64>,
    pub this_year: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawUser {
    pub username: String,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub favorites: Vec<RawFilmRef>,
    pub stats: RawUserStats,
}

/// `(year, month)` of a diary month.
pub type YearMonth = (i32, u32);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecentDiary {
    /// Month to day-of-month to films logged that day, in page order.
    pub months: BTreeMap<YearMonth, BTreeMap<u32, Vec<RawFilmRef>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMember {
    /// Unique per member; the same person can show up on two pages.
    pub username: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReviewedFilm {
    pub name: Option<String>,
    pub release: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawUserReview {
    pub movie: Option<RawReviewedFilm>,
    /// Half-star scale, 0..=10.
    pub rating: Option<u8>,
    pub content: Option<String>,
    pub date: Option<RawDate>,
}
