use crate::model::{
    raw::{RawDate, RawMember, RawRecentDiary, RawUser, RawUserReview},
    user::{UserProfile, UserReview},
};

use super::{half_stars_to_rating, text_or, NOT_AVAILABLE, UNTITLED};

const UNKNOWN_MEMBER: &str = "Unknown";

/// Results of the independent profile sub-fetches. A sub-fetch that failed
/// arrives here already replaced by its default.
#[derive(Debug, Clone, Default)]
pub struct UserSections {
    pub recent_diary: RawRecentDiary,
    pub followers: Vec<RawMember>,
    pub following: Vec<RawMember>,
    pub films_watched: Option<u64>,
    pub reviews: Vec<RawUserReview>,
}

pub fn normalize_user(user: RawUser, sections: UserSections) -> UserProfile {
    let recent = recent_films(&sections.recent_diary);
    let last_watched = recent
        .first()
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    UserProfile {
        username: user.username,
        films_watched: sections.films_watched.unwrap_or(0),
        bio: user.bio,
        following: member_names(&sections.following),
        followers: member_names(&sections.followers),
        favorites: user
            .favorites
            .iter()
            .map(|film| text_or(&film.name, UNTITLED))
            .collect(),
        last_watched,
        reviews: sections.reviews.iter().filter_map(normalize_review).collect(),
        recent,
        this_year: user.stats.this_year.unwrap_or(0),
        website: user.website,
        location: user.location,
    }
}

/// Film names newest first: months descending, then days descending,
/// then page order within a day. Unnamed films are skipped.
pub fn recent_films(diary: &RawRecentDiary) -> Vec<String> {
    diary
        .months
        .values()
        .rev()
        .flat_map(|days| days.values().rev())
        .flatten()
        .filter_map(|film| film.name.clone())
        .collect()
}

fn member_names(members: &[RawMember]) -> Vec<String> {
    members
        .iter()
        .map(|member| text_or(&member.name, UNKNOWN_MEMBER))
        .collect()
}

/// Reviews missing the film, the body or the date are dropped.
fn normalize_review(review: &RawUserReview) -> Option<UserReview> {
    let movie = review.movie.as_ref()?;
    let content = review.content.as_ref()?;
    let date = review.date.as_ref()?;

    Some(UserReview {
        movie_name: text_or(&movie.name, NOT_AVAILABLE),
        movie_year: movie.release.unwrap_or(0),
        rating: half_stars_to_rating(review.rating),
        review_text: content.clone(),
        review_date: format_review_date(date),
    })
}

/// Zero-padded, with 0 standing in for any missing part.
pub fn format_review_date(date: &RawDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year.unwrap_or(0),
        date.month.unwrap_or(0),
        date.day.unwrap_or(0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_date_pads_missing_parts() {
        let date = RawDate {
            year: Some(2024),
            month: Some(3),
            day: None,
        };
        assert_eq!(format_review_date(&date), "2024-03-00");
    }
}
