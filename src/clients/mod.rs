pub mod http_client;
pub mod letterboxd_client;
pub mod provider_client;
