use serde::Serialize;

use super::provider::WatchProvider;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieReview {
    pub author: String,
    pub text: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarMovie {
    pub name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub genres: Vec<String>,
    pub rating: f64,
    pub description: String,
    pub url: String,
    pub reviews: Vec<MovieReview>,
    pub providers: Vec<WatchProvider>,
    pub runtime: Option<String>,
    pub cast: Vec<String>,
    pub members: u64,
    pub fans: u64,
    pub likes: u64,
    pub review_count: u64,
    pub lists: u64,
    pub tagline: Option<String>,
    pub similar: Vec<SimilarMovie>,
}
