use reqwest::{header, Client, StatusCode};

use crate::{config::Config, error::FetchError};

/// Plain GET-and-read, one attempt per URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let user_agent = header::HeaderValue::from_str(&config.user_agent).map_err(|e| {
            FetchError::Config(format!("invalid user agent {:?}: {}", config.user_agent, e))
        })?;
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client })
    }

    pub async fn get_html_from_url(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("Getting HTML for url: {}", url);
        let resp = self.client.get(url).send().await?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound {
                url: url.to_string(),
            }),
            status if !status.is_success() => Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }),
            _ => Ok(resp.text().await?),
        }
    }
}
