use thiserror::Error;

/// Failure to obtain or read an upstream page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("404 page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("could not read page {url}: {reason}")]
    Markup { url: String, reason: String },

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// A whole-command failure, rendered as the `error` field of the output document.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to fetch diary for '{username}'. Exception: {source}")]
    Diary { username: String, source: FetchError },

    #[error("Failed to fetch watchlist for '{username}'. Exception: {source}")]
    Watchlist { username: String, source: FetchError },

    #[error("{0}")]
    Movie(FetchError),

    #[error("Failed to fetch list '{owner}/{slug}': {source}")]
    List {
        owner: String,
        slug: String,
        source: FetchError,
    },

    #[error("Failed to search for movies: {0}")]
    MovieSearch(FetchError),

    #[error("Failed to search for lists: {0}")]
    ListSearch(FetchError),

    #[error("Failed to fetch user '{username}'. Exception: {source}")]
    User { username: String, source: FetchError },
}
