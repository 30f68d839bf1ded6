use crate::model::{
    movie::{MovieDetails, MovieReview, SimilarMovie},
    provider::WatchProvider,
    raw::{RawMovie, RawPerson},
};

use super::{stars_to_rating, text_or, UNTITLED};

pub const MAX_REVIEWS: usize = 5;
pub const MAX_CAST: usize = 5;

const UNKNOWN_DIRECTOR: &str = "Unknown";

pub fn normalize_movie(movie: RawMovie, providers: Vec<WatchProvider>) -> MovieDetails {
    let director = movie
        .crew
        .get("director")
        .and_then(|people| people.first())
        .and_then(|person| person.name.clone())
        .unwrap_or_else(|| UNKNOWN_DIRECTOR.to_string());

    let genres = movie
        .genres
        .iter()
        .filter(|genre| genre.kind.as_deref() == Some("genre"))
        .filter_map(|genre| genre.name.clone())
        .collect();

    let reviews = movie
        .popular_reviews
        .iter()
        .take(MAX_REVIEWS)
        .map(|review| MovieReview {
            author: review.username.clone().unwrap_or_default(),
            text: review.review.as_deref().unwrap_or("").trim().to_string(),
            rating: stars_to_rating(review.rating.as_deref()),
        })
        .collect();

    let similar = movie
        .similar
        .iter()
        .map(|film| SimilarMovie {
            name: text_or(&film.name, UNTITLED),
            rating: film.average_rating.unwrap_or(0.0),
        })
        .collect();

    MovieDetails {
        title: text_or(&movie.title, UNTITLED),
        year: movie.year.unwrap_or(0),
        director,
        genres,
        rating: movie.rating.unwrap_or(0.0),
        description: movie.description.clone().unwrap_or_default(),
        url: movie.url.clone().unwrap_or_default(),
        reviews,
        providers,
        runtime: format_runtime(movie.runtime),
        cast: person_names(&movie.cast, MAX_CAST),
        members: movie.watchers.members.unwrap_or(0),
        fans: movie.watchers.fans.unwrap_or(0),
        likes: movie.watchers.likes.unwrap_or(0),
        review_count: movie.watchers.reviews.unwrap_or(0),
        lists: movie.watchers.lists.unwrap_or(0),
        tagline: movie.tagline,
        similar,
    }
}

/// `<H>h <M>min`, or `None` for a missing or non-positive runtime.
pub fn format_runtime(minutes: Option<i64>) -> Option<String> {
    let minutes = minutes.filter(|m| *m > 0)?;
    Some(format!("{}h {}min", minutes / 60, minutes % 60))
}

fn person_names(people: &[RawPerson], limit: usize) -> Vec<String> {
    people
        .iter()
        .filter_map(|person| person.name.clone())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_runtime_in_hours_and_minutes() {
        assert_eq!(format_runtime(Some(125)), Some("2h 5min".to_string()));
        assert_eq!(format_runtime(Some(45)), Some("0h 45min".to_string()));
        assert_eq!(format_runtime(Some(0)), None);
        assert_eq!(format_runtime(Some(-3)), None);
        assert_eq!(format_runtime(None), None);
    }
}
