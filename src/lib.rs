pub mod clients;
pub mod commands;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod model;
pub mod normalizers;
pub mod output;
pub mod source;
