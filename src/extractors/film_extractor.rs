use std::collections::BTreeMap;

use select::{
    document::Document,
    node::Node,
    predicate::{Attr, Class, Name, Predicate},
};
use serde::Deserialize;

use crate::model::raw::{RawFilmReview, RawGenre, RawMovie, RawPerson, RawWatcherStats};

use super::page_extractor::PageExtractor;

/// The `application/ld+json` block embedded in every film page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilmJsonLd {
    name: Option<String>,
    url: Option<String>,
    #[serde(default)]
    director: Vec<JsonLdPerson>,
    #[serde(default)]
    actors: Vec<JsonLdPerson>,
    aggregate_rating: Option<JsonLdRating>,
    #[serde(default)]
    released_event: Vec<JsonLdEvent>,
}

#[derive(Debug, Deserialize)]
struct JsonLdPerson {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonLdRating {
    rating_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonLdEvent {
    start_date: Option<String>,
}

impl From<&JsonLdPerson> for RawPerson {
    fn from(person: &JsonLdPerson) -> Self {
        RawPerson {
            name: person.name.clone(),
        }
    }
}

#[derive(Debug)]
pub struct FilmExtractor {}

impl FilmExtractor {
    /// Everything the main film page offers. Reviews, watcher stats and
    /// similar films live on their own pages.
    pub fn extract_movie_from_html(film_page_html: &str, url: &str) -> RawMovie {
        let document = Document::from(film_page_html);
        let json_ld = Self::extract_json_ld(&document);

        let title = json_ld.name.clone().or_else(|| {
            PageExtractor::first_text(
                document.find(Name("h1").and(Class("headline-1")).descendant(Class("name"))),
            )
        });

        let year = json_ld
            .released_event
            .iter()
            .filter_map(|event| event.start_date.as_deref())
            .find_map(|date| date.get(..4).and_then(|y| y.parse::<i32>().ok()))
            .or_else(|| {
                document
                    .find(Class("releaseyear").or(Class("releasedate")).descendant(Name("a")))
                    .find_map(|n| n.text().trim().parse::<i32>().ok())
            });

        let mut crew = Self::extract_crew(&document);
        if !crew.contains_key("director") && !json_ld.director.is_empty() {
            crew.insert(
                "director".to_string(),
                json_ld.director.iter().map(RawPerson::from).collect(),
            );
        }

        let mut cast = Self::extract_cast(&document);
        if cast.is_empty() {
            cast = json_ld.actors.iter().map(RawPerson::from).collect();
        }

        let rating = json_ld
            .aggregate_rating
            .as_ref()
            .and_then(|r| r.rating_value)
            .or_else(|| {
                Self::meta_content(&document, "name", "twitter:data2")
                    .and_then(|v| v.split_whitespace().next().and_then(|r| r.parse::<f64>().ok()))
            });

        RawMovie {
            title,
            year,
            crew,
            genres: Self::extract_genres(&document),
            rating,
            description: Self::meta_content(&document, "name", "description")
                .or_else(|| Self::meta_content(&document, "property", "og:description")),
            url: json_ld
                .url
                .clone()
                .or_else(|| Self::meta_content(&document, "property", "og:url"))
                .or_else(|| Some(url.to_string())),
            runtime: Self::extract_runtime(&document),
            cast,
            tagline: PageExtractor::first_text(document.find(Class("tagline"))),
            ..RawMovie::default()
        }
    }

    pub fn extract_popular_reviews(reviews_page_html: &str) -> Vec<RawFilmReview> {
        let document = Document::from(reviews_page_html);
        review_containers(&document)
            .iter()
            .map(|review| RawFilmReview {
                username: review
                    .attr("data-person")
                    .map(|p| p.to_string())
                    .or_else(|| {
                        review
                            .find(Name("a").and(Class("avatar")))
                            .next()
                            .and_then(|a| a.attr("href"))
                            .and_then(PageExtractor::first_segment)
                    }),
                review: PageExtractor::first_paragraphs(review.find(Class("body-text"))),
                rating: PageExtractor::first_text(review.find(Name("span").and(Class("rating")))),
            })
            .collect()
    }

    /// Counts from the tab strip of `/film/{slug}/members/`, whose links
    /// carry titles like `1,234 people`.
    pub fn extract_watcher_stats(members_page_html: &str, slug: &str) -> RawWatcherStats {
        let mut stats = RawWatcherStats::default();

        let document = Document::from(members_page_html);
        for link in document.find(Name("a")) {
            let Some(href) = link.attr("href") else {
                continue;
            };
            let segments = PageExtractor::path_segments(href);
            let tab = match segments.as_slice() {
                ["film", film, tab, ..] if *film == slug => *tab,
                _ => continue,
            };
            let count = link
                .attr("title")
                .and_then(PageExtractor::parse_count)
                .or_else(|| PageExtractor::parse_count(&link.text()));

            let slot = match tab {
                "members" => &mut stats.members,
                "fans" => &mut stats.fans,
                "likes" => &mut stats.likes,
                "reviews" => &mut stats.reviews,
                "lists" => &mut stats.lists,
                _ => continue,
            };
            if slot.is_none() {
                *slot = count;
            }
        }

        stats
    }

    fn extract_json_ld(document: &Document) -> FilmJsonLd {
        document
            .find(Name("script").and(Attr("type", "application/ld+json")))
            .map(|n| n.text())
            .find_map(|text| {
                let json = text
                    .trim()
                    .trim_start_matches("/* <![CDATA[ */")
                    .trim_end_matches("/* ]]> */")
                    .trim();
                match serde_json::from_str::<FilmJsonLd>(json) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        log::debug!("Ignoring unreadable film JSON-LD: {}", e);
                        None
                    }
                }
            })
            .unwrap_or_default()
    }

    /// Crew links look like `/director/bong-joon-ho/`; the first segment is the role.
    fn extract_crew(document: &Document) -> BTreeMap<String, Vec<RawPerson>> {
        let mut crew: BTreeMap<String, Vec<RawPerson>> = BTreeMap::new();
        for link in document.find(Attr("id", "tab-crew").descendant(Name("a"))) {
            let Some(href) = link.attr("href") else {
                continue;
            };
            if let [role, _] = PageExtractor::path_segments(href).as_slice() {
                crew.entry(role.to_string()).or_default().push(RawPerson {
                    name: Some(link.text().trim().to_string()),
                });
            }
        }
        crew
    }

    fn extract_cast(document: &Document) -> Vec<RawPerson> {
        document
            .find(
                Attr("id", "tab-cast")
                    .or(Class("cast-list"))
                    .descendant(Name("a")),
            )
            .filter_map(|link| {
                let href = link.attr("href")?;
                match PageExtractor::path_segments(href).as_slice() {
                    ["actor", _] => Some(RawPerson {
                        name: Some(link.text().trim().to_string()),
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    /// Genre tab links: `/films/genre/drama/`, `/films/theme/...`, `/films/mini-theme/...`.
    fn extract_genres(document: &Document) -> Vec<RawGenre> {
        document
            .find(Attr("id", "tab-genres").descendant(Name("a")))
            .filter_map(|link| {
                let href = link.attr("href")?;
                match PageExtractor::path_segments(href).as_slice() {
                    ["films", kind, _, ..] => Some(RawGenre {
                        name: Some(link.text().trim().to_string()),
                        kind: Some(kind.to_string()),
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    /// `123 mins  More at IMDb TMDb`.
    fn extract_runtime(document: &Document) -> Option<i64> {
        let text = PageExtractor::first_text(
            document.find(Name("p").and(Class("text-footer"))),
        )?;
        let minutes: String = text
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        minutes.parse::<i64>().ok()
    }

    fn meta_content(document: &Document, key: &str, value: &str) -> Option<String> {
        document
            .find(Name("meta").and(Attr(key, value)))
            .next()
            .and_then(|n| n.attr("content"))
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
    }
}

/// Review blocks on review listings. Newer pages wrap each review in an
/// `article.production-viewing`, older ones in `li.film-detail`.
pub(crate) fn review_containers(document: &Document) -> Vec<Node<'_>> {
    let articles: Vec<Node> = document
        .find(Name("article").and(Class("production-viewing")))
        .collect();
    if !articles.is_empty() {
        return articles;
    }
    document
        .find(Name("li").and(Class("film-detail")))
        .collect()
}
