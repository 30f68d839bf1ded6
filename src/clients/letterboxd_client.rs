use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use url::Url;

use crate::{
    config::Config,
    error::FetchError,
    extractors::{
        diary_extractor::DiaryExtractor, film_extractor::FilmExtractor,
        page_extractor::PageExtractor, poster_extractor::PosterExtractor,
        search_extractor::SearchExtractor, user_extractor::UserExtractor,
    },
    model::raw::{
        RawDiary, RawFilmSearch, RawList, RawListFilm, RawListSearch, RawMember, RawMovie,
        RawRecentDiary, RawUser, RawUserReview, RawWatchlist,
    },
    source::LetterboxdSource,
};

use super::http_client::HttpClient;

/// Scrapes letterboxd.com pages into the raw shapes of [`crate::model::raw`].
#[derive(Debug, Clone)]
pub struct LetterboxdClient {
    http: HttpClient,
    base_url: String,
    /// Parsed profile pages by username; user details reads the same page twice.
    profiles: Arc<Mutex<HashMap<String, RawUser>>>,
}

impl LetterboxdClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            base_url: config.letterboxd_base_url.clone(),
            profiles: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `path` must end with a slash. Page 1 is the bare path.
    fn url_for_page(&self, path: &str, page: u32) -> String {
        if page == 1 {
            return self.url_for(path);
        }

        format!("{}page/{}/", self.url_for(path), page)
    }

    fn search_url(&self, kind: &str, query: &str) -> Result<String, FetchError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Config(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(["s", "search", kind, query, ""]);
        Ok(url.into())
    }

    /// Page 1, then every page up to the last one its pagination links to.
    async fn get_all_pages<T>(
        &self,
        path: &str,
        extract: fn(&str) -> Vec<T>,
    ) -> Result<Vec<T>, FetchError> {
        let first_page_html = self.http.get_html_from_url(&self.url_for_page(path, 1)).await?;
        let number_of_pages = PageExtractor::get_last_page_from_html(&first_page_html).unwrap_or(1);
        log::info!("Number of pages for {}: {}", path, number_of_pages);

        let mut resp = extract(&first_page_html);
        for page_num in 2..=number_of_pages {
            let page_html = self
                .http
                .get_html_from_url(&self.url_for_page(path, page_num))
                .await?;
            resp.append(&mut extract(&page_html));
        }
        Ok(resp)
    }

    async fn get_profile(&self, username: &str) -> Result<RawUser, FetchError> {
        if let Some(user) = self.cached_profile(username) {
            return Ok(user);
        }

        let html = self
            .http
            .get_html_from_url(&self.url_for(&format!("/{}/", username)))
            .await?;
        let user = UserExtractor::extract_user_from_html(&html, username);
        if let Ok(mut profiles) = self.profiles.lock() {
            profiles.insert(username.to_string(), user.clone());
        }
        Ok(user)
    }

    fn cached_profile(&self, username: &str) -> Option<RawUser> {
        self.profiles
            .lock()
            .ok()
            .and_then(|profiles| profiles.get(username).cloned())
    }
}

/// Drops rows whose key was already seen. Pages can shift while being walked,
/// repeating a row from the previous page. Rows without a key are kept.
fn dedupe_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| match key(item) {
            Some(k) => seen.insert(k),
            None => true,
        })
        .collect()
}

fn member_key(member: &RawMember) -> Option<String> {
    member.username.clone()
}

#[async_trait]
impl LetterboxdSource for LetterboxdClient {
    async fn diary(&self, username: &str) -> Result<RawDiary, FetchError> {
        let entries = self
            .get_all_pages(
                &format!("/{}/films/diary/", username),
                DiaryExtractor::extract_diary_entries,
            )
            .await?;
        let entries = dedupe_by_key(entries, |entry| {
            Some(entry.id.clone()).filter(|id| !id.is_empty())
        });
        Ok(RawDiary { entries })
    }

    async fn watchlist(&self, username: &str) -> Result<RawWatchlist, FetchError> {
        let data = self
            .get_all_pages(
                &format!("/{}/watchlist/", username),
                PosterExtractor::extract_posters,
            )
            .await?;
        // Private watchlists render a notice instead of a poster grid.
        Ok(RawWatchlist {
            available: !data.is_empty(),
            data,
        })
    }

    async fn movie(&self, slug: &str) -> Result<RawMovie, FetchError> {
        let film_url = self.url_for(&format!("/film/{}/", slug));
        let film_page_html = self.http.get_html_from_url(&film_url).await?;
        let mut movie = FilmExtractor::extract_movie_from_html(&film_page_html, &film_url);
        if movie.title.is_none() {
            return Err(FetchError::Markup {
                url: film_url,
                reason: "no film title on page".to_string(),
            });
        }

        let reviews_html = self
            .http
            .get_html_from_url(&self.url_for(&format!("/film/{}/reviews/by/activity/", slug)))
            .await?;
        movie.popular_reviews = FilmExtractor::extract_popular_reviews(&reviews_html);

        let members_html = self
            .http
            .get_html_from_url(&self.url_for(&format!("/film/{}/members/", slug)))
            .await?;
        movie.watchers = FilmExtractor::extract_watcher_stats(&members_html, slug);

        let similar_html = self
            .http
            .get_html_from_url(&self.url_for(&format!("/film/{}/similar/", slug)))
            .await?;
        movie.similar = PosterExtractor::extract_posters(&similar_html);

        Ok(movie)
    }

    async fn list(&self, owner: &str, slug: &str) -> Result<RawList, FetchError> {
        let films = self
            .get_all_pages(
                &format!("/{}/list/{}/", owner, slug),
                PosterExtractor::extract_posters,
            )
            .await?;

        let movies = films
            .into_iter()
            .map(|film| RawListFilm {
                name: film.name,
                year: film.year,
                url: film.link.map(|link| self.url_for(&link)),
                director: None,
            })
            .collect();
        Ok(RawList { movies })
    }

    async fn search_films(&self, query: &str, max: usize) -> Result<RawFilmSearch, FetchError> {
        let html = self
            .http
            .get_html_from_url(&self.search_url("films", query)?)
            .await?;
        let mut results = SearchExtractor::extract_film_results(&html);
        results.truncate(max);
        Ok(RawFilmSearch { results })
    }

    async fn search_lists(&self, query: &str) -> Result<RawListSearch, FetchError> {
        let html = self
            .http
            .get_html_from_url(&self.search_url("lists", query)?)
            .await?;
        let search = SearchExtractor::extract_list_search(&html);
        if !search.available {
            log::warn!("No list results block on search page for '{}'", query);
        }
        Ok(search)
    }

    async fn user(&self, username: &str) -> Result<RawUser, FetchError> {
        self.get_profile(username).await
    }

    async fn recent_diary(&self, username: &str) -> Result<RawRecentDiary, FetchError> {
        let html = self
            .http
            .get_html_from_url(&self.url_for(&format!("/{}/films/diary/", username)))
            .await?;
        let entries = DiaryExtractor::extract_diary_entries(&html);
        Ok(DiaryExtractor::group_by_day(&entries))
    }

    async fn followers(&self, username: &str) -> Result<Vec<RawMember>, FetchError> {
        let members = self
            .get_all_pages(
                &format!("/{}/followers/", username),
                UserExtractor::extract_members,
            )
            .await?;
        Ok(dedupe_by_key(members, member_key))
    }

    async fn following(&self, username: &str) -> Result<Vec<RawMember>, FetchError> {
        let members = self
            .get_all_pages(
                &format!("/{}/following/", username),
                UserExtractor::extract_members,
            )
            .await?;
        Ok(dedupe_by_key(members, member_key))
    }

    async fn film_count(&self, username: &str) -> Result<Option<u64>, FetchError> {
        Ok(self.get_profile(username).await?.stats.films)
    }

    async fn user_reviews(&self, username: &str) -> Result<Vec<RawUserReview>, FetchError> {
        self.get_all_pages(
            &format!("/{}/films/reviews/", username),
            UserExtractor::extract_user_reviews,
        )
        .await
    }
}
