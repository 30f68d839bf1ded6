use serde::Serialize;

pub const UNKNOWN_DATE: &str = "Unknown Date";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaryEntry {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub watch_date: String,
    pub rewatch: bool,
    pub slug: String,
}
