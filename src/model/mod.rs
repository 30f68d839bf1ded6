pub mod diary;
pub mod list;
pub mod movie;
pub mod provider;
pub mod raw;
pub mod search;
pub mod user;
pub mod watchlist;
