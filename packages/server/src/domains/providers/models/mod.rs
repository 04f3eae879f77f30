pub mod filter;
pub mod service_provider;

pub use filter::{FilterQuery, ServiceFilter};
pub use service_provider::ServiceProvider;
