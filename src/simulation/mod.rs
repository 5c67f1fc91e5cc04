pub mod comparator;
pub mod config;
pub mod engine;
