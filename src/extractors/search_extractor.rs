use select::{
    document::Document,
    node::Node,
    predicate::{Class, Name, Predicate},
};

use crate::model::raw::{RawFilmSearchResult, RawListSearch, RawListSearchResult, RawPerson};

use super::{page_extractor::PageExtractor, poster_extractor::PosterExtractor};

#[derive(Debug)]
pub struct SearchExtractor {}

impl SearchExtractor {
    pub fn extract_film_results(search_page_html: &str) -> Vec<RawFilmSearchResult> {
        Document::from(search_page_html)
            .find(Name("ul").and(Class("results")).child(Name("li")))
            .map(|item| Self::extract_film_result(&item))
            .collect()
    }

    fn extract_film_result(item: &Node) -> RawFilmSearchResult {
        let poster = PosterExtractor::posters_under(item).into_iter().next();
        let title_link = item
            .find(Class("film-title-wrapper").descendant(Name("a")))
            .next()
            .or_else(|| item.find(Name("h2").descendant(Name("a"))).next());

        let slug_from_link = title_link
            .and_then(|link| link.attr("href"))
            .and_then(|href| match PageExtractor::path_segments(href).as_slice() {
                ["film", slug, ..] => Some(slug.to_string()),
                _ => None,
            });

        let year = item
            .find(Name("small").and(Class("metadata")).descendant(Name("a")))
            .find_map(|n| n.text().trim().parse::<i32>().ok())
            .or_else(|| poster.as_ref().and_then(|p| p.year));

        let directors = item
            .find(Name("a"))
            .filter_map(|link| {
                let href = link.attr("href")?;
                match PageExtractor::path_segments(href).as_slice() {
                    ["director", _] => Some(RawPerson {
                        name: Some(link.text().trim().to_string()),
                    }),
                    _ => None,
                }
            })
            .collect();

        RawFilmSearchResult {
            name: title_link
                .map(|link| link.text().trim().to_string())
                .filter(|name| !name.is_empty())
                .or_else(|| poster.as_ref().and_then(|p| p.name.clone())),
            year,
            slug: slug_from_link.or_else(|| poster.and_then(|p| p.slug)),
            directors,
        }
    }

    /// A page without a results block (blocked or reshaped search) is
    /// reported unavailable rather than empty.
    pub fn extract_list_search(search_page_html: &str) -> RawListSearch {
        let document = Document::from(search_page_html);
        let available = document
            .find(
                Name("ul")
                    .and(Class("results"))
                    .or(Name("article").and(Class("list-summary")))
                    .or(Name("section").and(Class("list"))),
            )
            .next()
            .is_some();

        RawListSearch {
            available,
            results: Self::list_results(&document),
        }
    }

    /// List summaries link to `/{owner}/list/{slug}/`.
    fn list_results(document: &Document) -> Vec<RawListSearchResult> {
        let mut summaries: Vec<Node> = document
            .find(Name("article").and(Class("list-summary")))
            .collect();
        if summaries.is_empty() {
            summaries = document
                .find(Name("section").and(Class("list")))
                .collect();
        }

        summaries
            .iter()
            .map(|summary| {
                let title_link = summary
                    .find(Name("h2").descendant(Name("a")))
                    .next();
                let (owner, slug) = title_link
                    .and_then(|link| link.attr("href"))
                    .map(|href| match PageExtractor::path_segments(href).as_slice() {
                        [owner, "list", slug, ..] => {
                            (Some(owner.to_string()), Some(slug.to_string()))
                        }
                        _ => (None, None),
                    })
                    .unwrap_or((None, None));

                RawListSearchResult {
                    title: title_link
                        .map(|link| link.text().trim().to_string())
                        .filter(|title| !title.is_empty()),
                    slug,
                    owner: owner.or_else(|| {
                        summary
                            .find(Class("owner").or(Class("avatar")))
                            .filter_map(|n| n.attr("href"))
                            .find_map(PageExtractor::first_segment)
                    }),
                }
            })
            .collect()
    }
}
