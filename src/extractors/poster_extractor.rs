use std::collections::HashSet;

use select::{
    document::Document,
    node::Node,
    predicate::{Attr, Name, Predicate},
};

use crate::model::raw::RawFilmRef;

use super::page_extractor::PageExtractor;

/// Reads the film posters used by watchlists, lists, favourites and
/// similar-film grids.
#[derive(Debug)]
pub struct PosterExtractor {}

impl PosterExtractor {
    pub fn extract_posters(page_html: &str) -> Vec<RawFilmRef> {
        let document = Document::from(page_html);
        Self::dedupe(document.find(Self::poster()).flat_map(Self::film_from_poster))
    }

    pub fn posters_under(node: &Node) -> Vec<RawFilmRef> {
        Self::dedupe(node.find(Self::poster()).flat_map(Self::film_from_poster))
    }

    fn poster() -> impl Predicate {
        Attr("data-item-slug", ()).or(Attr("data-film-slug", ()))
    }

    // Lazy poster wrappers carry their own slug and also wrap a
    // `.film-poster` with the same slug, so every film shows up twice.
    fn dedupe<I>(films: I) -> Vec<RawFilmRef>
    where
        I: Iterator<Item = RawFilmRef>,
    {
        let mut seen = HashSet::new();
        films
            .filter(|film| match &film.slug {
                Some(slug) => seen.insert(slug.clone()),
                None => true,
            })
            .collect()
    }

    fn film_from_poster(node: Node) -> Option<RawFilmRef> {
        let slug = node
            .attr("data-item-slug")
            .or_else(|| node.attr("data-film-slug"))
            .map(|s| s.to_string())?;

        let (name, year_from_name) = match node
            .attr("data-item-name")
            .or_else(|| node.attr("data-item-full-display-name"))
        {
            Some(full_name) => {
                let (name, year) = PageExtractor::split_name_and_year(full_name);
                (Some(name), year)
            }
            None => (
                node.attr("data-film-name")
                    .map(|s| s.to_string())
                    .or_else(|| {
                        node.find(Name("img"))
                            .next()
                            .and_then(|img| img.attr("alt"))
                            .map(|alt| alt.trim().to_string())
                    }),
                None,
            ),
        };

        let year = year_from_name.or_else(|| {
            node.attr("data-film-release-year")
                .or_else(|| node.attr("data-film-year"))
                .and_then(|y| y.parse::<i32>().ok())
        });

        let link = node
            .attr("data-item-link")
            .or_else(|| node.attr("data-target-link"))
            .or_else(|| node.attr("data-film-link"))
            .map(|l| l.to_string())
            .unwrap_or_else(|| format!("/film/{}/", slug));

        let average_rating = node
            .attr("data-average-rating")
            .or_else(|| node.parent().and_then(|p| p.attr("data-average-rating")))
            .and_then(|r| r.parse::<f64>().ok());

        Some(RawFilmRef {
            name: name.filter(|n| !n.is_empty()),
            year,
            slug: Some(slug),
            link: Some(link),
            average_rating,
        })
    }
}
