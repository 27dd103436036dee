pub mod config;
pub mod entry;
pub mod export;
pub mod habit;
pub mod streak;
pub mod summary;
