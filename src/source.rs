//! The narrow interface normalization depends on. Everything upstream of
//! it (URLs, markup, HTTP) can change without touching a normalizer.

use async_trait::async_trait;

use crate::{
    error::FetchError,
    model::{
        provider::WatchProvider,
        raw::{
            RawDiary, RawFilmSearch, RawList, RawListSearch, RawMember, RawMovie,
            RawRecentDiary, RawUser, RawUserReview, RawWatchlist,
        },
    },
};

#[async_trait]
pub trait LetterboxdSource: Send + Sync {
    async fn diary(&self, username: &str) -> Result<RawDiary, FetchError>;

    async fn watchlist(&self, username: &str) -> Result<RawWatchlist, FetchError>;

    async fn movie(&self, slug: &str) -> Result<RawMovie, FetchError>;

    async fn list(&self, owner: &str, slug: &str) -> Result<RawList, FetchError>;

    async fn search_films(&self, query: &str, max: usize) -> Result<RawFilmSearch, FetchError>;

    async fn search_lists(&self, query: &str) -> Result<RawListSearch, FetchError>;

    /// The base profile. Failing here fails the whole user lookup.
    async fn user(&self, username: &str) -> Result<RawUser, FetchError>;

    async fn recent_diary(&self, username: &str) -> Result<RawRecentDiary, FetchError>;

    async fn followers(&self, username: &str) -> Result<Vec<RawMember>, FetchError>;

    async fn following(&self, username: &str) -> Result<Vec<RawMember>, FetchError>;

    async fn film_count(&self, username: &str) -> Result<Option<u64>, FetchError>;

    async fn user_reviews(&self, username: &str) -> Result<Vec<RawUserReview>, FetchError>;
}

/// Where to watch a film. Never fails: any problem yields no providers.
#[async_trait]
pub trait WatchProviderSource: Send + Sync {
    async fn watch_providers(&self, slug: &str) -> Vec<WatchProvider>;
}
