// ServiceSpot - API Core
//
// Read-only directory API for local service providers. Exposes a single
// search/filter query over the provider table plus a connectivity check.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
