//! Live-search client for the ServiceSpot directory API.
//!
//! Holds the search screen state (results, loading flag, search term, selected
//! category), debounces input changes and issues `GET /api/services` requests.
//! Only the response to the most recently issued request can change the results.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use search_client::{HttpServicesApi, SearchSession};
//!
//! let session = SearchSession::new(Arc::new(HttpServicesApi::new("http://localhost:5000")));
//! session.start();
//! session.set_search_term("glow");
//! session.set_category("wellness");
//!
//! let mut snapshots = session.subscribe();
//! while snapshots.changed().await.is_ok() {
//!     let state = snapshots.borrow_and_update().clone();
//!     // render state.services
//! }
//! ```

pub mod api;
pub mod debounce;
pub mod error;
pub mod session;
pub mod state;
pub mod types;

pub use api::{HttpServicesApi, ServicesApi, DEFAULT_API_URL};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::{ClientError, Result};
pub use session::SearchSession;
pub use state::{Command, FetchRequest, RequestId, SearchEvent, SearchState};
pub use types::{CategoryOption, ServiceProvider, ServiceQuery, CATEGORY_OPTIONS};
