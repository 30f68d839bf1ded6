//! One function per script: fetch, normalize, and attach the script's
//! error context.

use crate::{
    error::{CommandError, FetchError},
    model::{
        diary::DiaryEntry,
        list::ListMovie,
        movie::MovieDetails,
        search::{ListSearchResult, MovieSearchResult},
        user::UserProfile,
        watchlist::WatchlistItem,
    },
    normalizers::{
        diary::normalize_diary,
        list::normalize_list,
        movie::normalize_movie,
        search::{normalize_list_search, normalize_movie_search, MAX_SEARCH_RESULTS},
        user::{normalize_user, UserSections},
        watchlist::normalize_watchlist,
    },
    source::{LetterboxdSource, WatchProviderSource},
};

pub async fn get_diary<S>(source: &S, username: &str) -> Result<Vec<DiaryEntry>, CommandError>
where
    S: LetterboxdSource + ?Sized,
{
    let diary = source
        .diary(username)
        .await
        .map_err(|source| CommandError::Diary {
            username: username.to_string(),
            source,
        })?;
    log::info!("Fetched {} diary entries for {}", diary.entries.len(), username);
    Ok(normalize_diary(diary))
}

pub async fn get_watchlist<S>(
    source: &S,
    username: &str,
) -> Result<Vec<WatchlistItem>, CommandError>
where
    S: LetterboxdSource + ?Sized,
{
    let watchlist = source
        .watchlist(username)
        .await
        .map_err(|source| CommandError::Watchlist {
            username: username.to_string(),
            source,
        })?;
    Ok(normalize_watchlist(watchlist))
}

pub async fn get_movie_details<S, P>(
    source: &S,
    providers: &P,
    slug: &str,
) -> Result<MovieDetails, CommandError>
where
    S: LetterboxdSource + ?Sized,
    P: WatchProviderSource + ?Sized,
{
    let movie = source.movie(slug).await.map_err(CommandError::Movie)?;
    let providers = providers.watch_providers(slug).await;
    Ok(normalize_movie(movie, providers))
}

pub async fn get_list_details<S>(
    source: &S,
    owner: &str,
    slug: &str,
) -> Result<Vec<ListMovie>, CommandError>
where
    S: LetterboxdSource + ?Sized,
{
    let list = source
        .list(owner, slug)
        .await
        .map_err(|source| CommandError::List {
            owner: owner.to_string(),
            slug: slug.to_string(),
            source,
        })?;
    Ok(normalize_list(list))
}

pub async fn search_movies<S>(
    source: &S,
    query: &str,
) -> Result<Vec<MovieSearchResult>, CommandError>
where
    S: LetterboxdSource + ?Sized,
{
    let search = source
        .search_films(query, MAX_SEARCH_RESULTS)
        .await
        .map_err(CommandError::MovieSearch)?;
    Ok(normalize_movie_search(search))
}

pub async fn search_lists<S>(
    source: &S,
    query: &str,
) -> Result<Vec<ListSearchResult>, CommandError>
where
    S: LetterboxdSource + ?Sized,
{
    let search = source
        .search_lists(query)
        .await
        .map_err(CommandError::ListSearch)?;
    Ok(normalize_list_search(search))
}

/// Only the base profile is fatal. Each other section falls back to its
/// empty value on its own.
pub async fn get_user_details<S>(source: &S, username: &str) -> Result<UserProfile, CommandError>
where
    S: LetterboxdSource + ?Sized,
{
    let user = source
        .user(username)
        .await
        .map_err(|source| CommandError::User {
            username: username.to_string(),
            source,
        })?;

    let recent_diary = source.recent_diary(username).await;
    let followers = source.followers(username).await;
    let following = source.following(username).await;
    let films_watched = source.film_count(username).await;
    let reviews = source.user_reviews(username).await;

    let sections = UserSections {
        recent_diary: section_or_default("recent diary", username, recent_diary),
        followers: section_or_default("followers", username, followers),
        following: section_or_default("following", username, following),
        films_watched: section_or_default("film count", username, films_watched),
        reviews: section_or_default("reviews", username, reviews),
    };

    Ok(normalize_user(user, sections))
}

fn section_or_default<T: Default>(
    section: &str,
    username: &str,
    result: Result<T, FetchError>,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not fetch {} for {}, leaving it empty: {}", section, username, e);
            T::default()
        }
    }
}
