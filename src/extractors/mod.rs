pub mod diary_extractor;
pub mod film_extractor;
pub mod page_extractor;
pub mod poster_extractor;
pub mod provider_extractor;
pub mod search_extractor;
pub mod user_extractor;
