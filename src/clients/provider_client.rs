use async_trait::async_trait;

use crate::{
    config::Config,
    error::FetchError,
    extractors::provider_extractor::ProviderExtractor,
    model::provider::WatchProvider,
    source::WatchProviderSource,
};

use super::http_client::HttpClient;

/// Finds the film's TMDB id on its Letterboxd page, then reads TMDB's
/// "where to watch" page for it.
#[derive(Debug, Clone)]
pub struct WatchProviderClient {
    http: HttpClient,
    letterboxd_base_url: String,
    tmdb_base_url: String,
}

impl WatchProviderClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            letterboxd_base_url: config.letterboxd_base_url.clone(),
            tmdb_base_url: config.tmdb_base_url.clone(),
        })
    }

    pub async fn get_watch_providers(&self, slug: &str) -> Result<Vec<WatchProvider>, FetchError> {
        let film_url = format!("{}/film/{}/", self.letterboxd_base_url, slug);
        let film_page_html = self.http.get_html_from_url(&film_url).await?;

        let Some(tmdb_id) = ProviderExtractor::extract_tmdb_id(&film_page_html) else {
            log::info!("No TMDB link on {}, skipping watch providers", film_url);
            return Ok(vec![]);
        };

        let watch_url = format!("{}/movie/{}/watch", self.tmdb_base_url, tmdb_id);
        let watch_page_html = self.http.get_html_from_url(&watch_url).await?;
        Ok(ProviderExtractor::extract_providers(&watch_page_html))
    }
}

#[async_trait]
impl WatchProviderSource for WatchProviderClient {
    async fn watch_providers(&self, slug: &str) -> Vec<WatchProvider> {
        match self.get_watch_providers(slug).await {
            Ok(providers) => providers,
            Err(e) => {
                log::warn!("Could not fetch watch providers for {}: {}", slug, e);
                vec![]
            }
        }
    }
}
