use std::time::Duration;

const DEFAULT_LETTERBOXD_BASE_URL: &str = "https://letterboxd.com";
const DEFAULT_TMDB_BASE_URL: &str = "https://www.themoviedb.org";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub letterboxd_base_url: String,
    pub tmdb_base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letterboxd_base_url: DEFAULT_LETTERBOXD_BASE_URL.to_string(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads overrides from the environment, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("LETTERBOXD_BASE_URL") {
            config.letterboxd_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(url) = lookup("TMDB_BASE_URL") {
            config.tmdb_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(user_agent) = lookup("LETTERBOXD_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Some(raw_timeout) = lookup("LETTERBOXD_TIMEOUT_SECS") {
            match raw_timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "Ignoring invalid LETTERBOXD_TIMEOUT_SECS value {:?}, using {}s",
                    raw_timeout,
                    DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }
}
