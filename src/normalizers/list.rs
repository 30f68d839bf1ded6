use crate::model::{list::ListMovie, raw::RawList};

use super::{text_or, NOT_AVAILABLE, UNTITLED};

pub fn normalize_list(list: RawList) -> Vec<ListMovie> {
    list.movies
        .iter()
        .map(|film| ListMovie {
            title: text_or(&film.name, UNTITLED),
            year: film.year.unwrap_or(0),
            slug: slug_from_film_url(film.url.as_deref().unwrap_or("")),
            director: text_or(&film.director, NOT_AVAILABLE),
        })
        .collect()
}

/// Whatever follows the last `/film/` segment, without surrounding slashes.
/// A URL with no `/film/` segment is trimmed as a whole.
pub fn slug_from_film_url(url: &str) -> String {
    url.rsplit("/film/")
        .next()
        .unwrap_or("")
        .trim_matches('/')
        .to_string()
}
