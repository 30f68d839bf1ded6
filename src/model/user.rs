use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReview {
    pub movie_name: String,
    pub movie_year: i32,
    pub rating: f64,
    pub review_text: String,
    pub review_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub films_watched: u64,
    pub bio: Option<String>,
    pub following: Vec<String>,
    pub followers: Vec<String>,
    pub favorites: Vec<String>,
    pub last_watched: String,
    pub reviews: Vec<UserReview>,
    pub recent: Vec<String>,
    pub this_year: u64,
    pub website: Option<String>,
    pub location: Option<String>,
}
