use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMovie {
    pub title: String,
    pub year: i32,
    pub slug: String,
    pub director: String,
}
