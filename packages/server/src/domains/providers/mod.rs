//! Providers domain - local service provider directory

pub mod models;

// Re-export commonly used types
pub use models::{FilterQuery, ServiceFilter, ServiceProvider};
