use crate::model::{
    raw::{RawFilmSearch, RawListSearch},
    search::{ListSearchResult, MovieSearchResult},
};

use super::{text_or, NOT_AVAILABLE, UNTITLED};

pub const MAX_SEARCH_RESULTS: usize = 5;

const UNTITLED_LIST: &str = "Untitled List";

/// Results without a slug cannot be looked up again and are dropped.
pub fn normalize_movie_search(search: RawFilmSearch) -> Vec<MovieSearchResult> {
    search
        .results
        .iter()
        .filter_map(|result| {
            let slug = result.slug.clone()?;
            let director = result
                .directors
                .first()
                .and_then(|d| d.name.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            Some(MovieSearchResult {
                title: text_or(&result.name, UNTITLED),
                year: result.year.unwrap_or(0),
                slug,
                director,
            })
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

pub fn normalize_list_search(search: RawListSearch) -> Vec<ListSearchResult> {
    if !search.available {
        return vec![];
    }

    search
        .results
        .iter()
        .map(|result| ListSearchResult {
            name: text_or(&result.title, UNTITLED_LIST),
            owner: text_or(&result.owner, NOT_AVAILABLE),
            slug: result.slug.clone().unwrap_or_default(),
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}
