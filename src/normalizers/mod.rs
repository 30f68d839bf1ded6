//! Raw upstream records to the fixed output schema, with defaults for
//! anything missing.

pub mod diary;
pub mod list;
pub mod movie;
pub mod search;
pub mod user;
pub mod watchlist;

pub const UNTITLED: &str = "Untitled";
pub const NOT_AVAILABLE: &str = "N/A";

/// Letterboxd stores ratings on a 0..=10 half-star scale.
pub fn half_stars_to_rating(rating: Option<u8>) -> f64 {
    rating.map(|r| f64::from(r) / 2.0).unwrap_or(0.0)
}

/// One point per `★`, plus a half if `½` appears anywhere.
pub fn stars_to_rating(stars: Option<&str>) -> f64 {
    let Some(stars) = stars else {
        return 0.0;
    };

    let mut rating = stars.chars().filter(|c| *c == '★').count() as f64;
    if stars.contains('½') {
        rating += 0.5;
    }
    rating
}

pub(crate) fn text_or(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}
