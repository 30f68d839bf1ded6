use crate::model::{raw::RawWatchlist, watchlist::WatchlistItem};

use super::{text_or, UNTITLED};

pub fn normalize_watchlist(watchlist: RawWatchlist) -> Vec<WatchlistItem> {
    if !watchlist.available {
        return vec![];
    }

    watchlist
        .data
        .iter()
        .map(|film| WatchlistItem {
            title: text_or(&film.name, UNTITLED),
            year: film.year.unwrap_or(0),
            slug: film.slug.clone().unwrap_or_default(),
        })
        .collect()
}
