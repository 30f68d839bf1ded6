use chrono::{Datelike, NaiveDate};
use select::{
    document::Document,
    node::Node,
    predicate::{Attr, Class, Name, Predicate},
};

use crate::model::raw::{
    RawDate, RawMember, RawReviewedFilm, RawUser, RawUserReview, RawUserStats,
};

use super::{
    film_extractor::review_containers, page_extractor::PageExtractor,
    poster_extractor::PosterExtractor,
};

#[derive(Debug)]
pub struct UserExtractor {}

impl UserExtractor {
    pub fn extract_user_from_html(profile_html: &str, username: &str) -> RawUser {
        let document = Document::from(profile_html);

        let favorites = document
            .find(Attr("id", "favourites"))
            .next()
            .map(|section| PosterExtractor::posters_under(&section))
            .unwrap_or_default();

        RawUser {
            username: username.to_string(),
            bio: PageExtractor::first_paragraphs(
                document.find(Class("js-bio-content").or(Class("profile-bio"))),
            ),
            website: document
                .find(Name("a").and(Class("metadatum")))
                .next()
                .and_then(|n| n.attr("href"))
                .map(|href| href.to_string()),
            location: PageExtractor::first_text(
                document.find(Name("div").and(Class("metadatum")).descendant(Class("label"))),
            ),
            favorites,
            stats: Self::extract_stats(&document),
        }
    }

    /// The Films and This year numbers of the profile header.
    fn extract_stats(document: &Document) -> RawUserStats {
        let mut stats = RawUserStats::default();
        for statistic in document.find(Class("profile-statistic")) {
            let value = statistic
                .find(Class("value"))
                .next()
                .and_then(|n| PageExtractor::parse_count(&n.text()));
            let definition = statistic
                .find(Class("definition"))
                .next()
                .map(|n| n.text().trim().to_lowercase())
                .unwrap_or_default();

            match definition.as_str() {
                "films" => stats.films = value,
                "this year" => stats.this_year = value,
                _ => {}
            }
        }
        stats
    }

    /// Rows of the followers/following tables.
    pub fn extract_members(people_page_html: &str) -> Vec<RawMember> {
        Document::from(people_page_html)
            .find(Class("table-person"))
            .filter_map(|cell| {
                let link = cell
                    .find(Name("a").and(Class("name")))
                    .next()
                    .or_else(|| cell.find(Name("h3").descendant(Name("a"))).next())?;
                Some(RawMember {
                    username: link
                        .attr("href")
                        .and_then(PageExtractor::first_segment),
                    name: Some(link.text().trim().to_string()).filter(|n| !n.is_empty()),
                })
            })
            .collect()
    }

    pub fn extract_user_reviews(reviews_page_html: &str) -> Vec<RawUserReview> {
        let document = Document::from(reviews_page_html);
        review_containers(&document)
            .iter()
            .map(|review| RawUserReview {
                movie: Self::extract_reviewed_film(review),
                rating: review
                    .find(Class("rating"))
                    .find_map(|n| PageExtractor::rating_from_classes(&n)),
                content: PageExtractor::first_paragraphs(review.find(Class("body-text"))),
                date: Self::extract_review_date(review),
            })
            .collect()
    }

    fn extract_reviewed_film(review: &Node) -> Option<RawReviewedFilm> {
        let name = PageExtractor::first_text(review.find(Name("h2").descendant(Name("a"))));
        let release = review
            .find(
                Class("releasedate")
                    .or(Name("small").and(Class("metadata")))
                    .descendant(Name("a")),
            )
            .find_map(|n| n.text().trim().parse::<i32>().ok());

        if name.is_some() {
            return Some(RawReviewedFilm { name, release });
        }

        PosterExtractor::posters_under(review)
            .into_iter()
            .next()
            .map(|poster| RawReviewedFilm {
                name: poster.name,
                release: release.or(poster.year),
            })
    }

    /// `<time datetime="2024-03-15T...">`, falling back to the `15 Mar 2024` label.
    fn extract_review_date(review: &Node) -> Option<RawDate> {
        let from_time = review
            .find(Name("time"))
            .flat_map(|n| n.attr("datetime"))
            .find_map(|dt| {
                dt.get(..10)
                    .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            });

        let date = from_time.or_else(|| {
            review
                .find(Class("_nobr").or(Class("date")))
                .find_map(|n| NaiveDate::parse_from_str(n.text().trim(), "%d %b %Y").ok())
        })?;

        Some(RawDate {
            year: Some(date.year()),
            month: Some(date.month()),
            day: Some(date.day()),
        })
    }
}
