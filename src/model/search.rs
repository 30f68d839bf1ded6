use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieSearchResult {
    pub title: String,
    pub year: i32,
    pub slug: String,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSearchResult {
    pub name: String,
    pub owner: String,
    pub slug: String,
}
