use once_cell::sync::Lazy;
use regex::Regex;
use select::{
    document::Document,
    predicate::{Class, Name, Predicate},
};
use url::Url;

use crate::model::provider::{ProviderKind, WatchProvider};

static TMDB_MOVIE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://www\.themoviedb\.org/movie/(\d+)").expect("valid regex"));

static PROVIDER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" on (.+)$").expect("valid regex"));

const REDIRECT_HOST: &str = "click.justwatch.com";

/// Provider display names as they should be shown.
const NAME_CORRECTIONS: &[(&str, &str)] = &[("JioHotstar", "Disney+ Hotstar")];

#[derive(Debug)]
pub struct ProviderExtractor {}

impl ProviderExtractor {
    pub fn extract_tmdb_id(film_page_html: &str) -> Option<String> {
        TMDB_MOVIE_LINK
            .captures(film_page_html)
            .and_then(|caps| caps.get(1))
            .map(|id| id.as_str().to_string())
    }

    /// Anchors under `.ott_provider` titled like `Watch Parasite on Netflix`.
    pub fn extract_providers(watch_page_html: &str) -> Vec<WatchProvider> {
        let providers = Document::from(watch_page_html)
            .find(Class("ott_provider").descendant(Name("a")))
            .filter_map(|anchor| {
                let title = anchor.attr("title").filter(|t| !t.is_empty())?;
                let link = anchor.attr("href").filter(|l| !l.is_empty())?;
                Some(WatchProvider {
                    name: Self::provider_name(title)?,
                    kind: Self::provider_kind(title),
                    link: Self::unwrap_redirect(link),
                })
            })
            .collect();

        Self::dedupe_providers(providers)
    }

    pub fn provider_kind(title: &str) -> ProviderKind {
        let title = title.to_lowercase();
        if title.starts_with("watch ") {
            ProviderKind::Stream
        } else if title.starts_with("buy ") {
            ProviderKind::Buy
        } else if title.starts_with("rent ") {
            ProviderKind::Rent
        } else {
            ProviderKind::Unknown
        }
    }

    pub fn provider_name(title: &str) -> Option<String> {
        let name = PROVIDER_NAME.captures(title)?.get(1)?.as_str().trim();
        let corrected = NAME_CORRECTIONS
            .iter()
            .find(|(from, _)| *from == name)
            .map(|(_, to)| *to)
            .unwrap_or(name);
        Some(corrected.to_string())
    }

    /// Tracking links carry the real destination in their `r` parameter.
    /// A blank `r` leaves the tracking link as is.
    pub fn unwrap_redirect(link: &str) -> String {
        Url::parse(link)
            .ok()
            .filter(|url| url.host_str() == Some(REDIRECT_HOST))
            .and_then(|url| {
                url.query_pairs()
                    .find(|(key, target)| key == "r" && !target.is_empty())
                    .map(|(_, target)| target.into_owned())
            })
            .unwrap_or_else(|| link.to_string())
    }

    /// One entry per provider name, in first-seen order. A later `stream`
    /// entry replaces whatever was recorded for that name.
    pub fn dedupe_providers(providers: Vec<WatchProvider>) -> Vec<WatchProvider> {
        let mut unique: Vec<WatchProvider> = Vec::new();
        for provider in providers {
            match unique.iter().position(|p| p.name == provider.name) {
                None => unique.push(provider),
                Some(index) if provider.kind == ProviderKind::Stream => unique[index] = provider,
                Some(_) => {}
            }
        }
        unique
    }
}
