// HTTP routes
pub mod connection;
pub mod services;

pub use connection::*;
pub use services::*;
