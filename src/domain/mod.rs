pub mod listing;
pub mod mapping;
