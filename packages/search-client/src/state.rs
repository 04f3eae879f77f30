//! Search screen state and its transition function.
//!
//! All state changes go through [`SearchState::update`], which returns the side
//! effect the caller has to run next. Responses are tagged with the id of the
//! request that produced them; only the most recently issued request may change
//! the result list.

use crate::types::{ServiceProvider, ServiceQuery};

/// Monotonically increasing id assigned to each issued fetch. Zero means "none yet".
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub services: Vec<ServiceProvider>,
    /// True until the first response arrives, then only while a fetch is outstanding
    pub loading: bool,
    pub search_term: String,
    pub selected_category: String,
    /// Message of the last failed fetch, cleared by the next successful one
    pub last_error: Option<String>,
    latest_request: RequestId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Screen opened: load everything without waiting for the debounce window
    Mounted,
    SearchTermChanged(String),
    CategoryChanged(String),
    /// The debounce window passed without further input
    DebounceElapsed,
    FetchSucceeded {
        request_id: RequestId,
        services: Vec<ServiceProvider>,
    },
    FetchFailed {
        request_id: RequestId,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub query: ServiceQuery,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    /// Issue this request now
    Fetch(FetchRequest),
    /// (Re)start the debounce timer; any pending timer is cancelled
    Debounce,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            loading: true,
            search_term: String::new(),
            selected_category: String::new(),
            last_error: None,
            latest_request: 0,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inputs as a request snapshot
    pub fn query(&self) -> ServiceQuery {
        ServiceQuery::new(self.search_term.clone(), self.selected_category.clone())
    }

    /// Id of the most recently issued request
    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    pub fn update(&mut self, event: SearchEvent) -> Command {
        match event {
            SearchEvent::Mounted => self.issue(ServiceQuery::all()),
            SearchEvent::SearchTermChanged(term) => {
                if term == self.search_term {
                    return Command::None;
                }
                self.search_term = term;
                Command::Debounce
            }
            SearchEvent::CategoryChanged(category) => {
                if category == self.selected_category {
                    return Command::None;
                }
                self.selected_category = category;
                Command::Debounce
            }
            SearchEvent::DebounceElapsed => self.issue(self.query()),
            SearchEvent::FetchSucceeded {
                request_id,
                services,
            } => {
                if request_id != self.latest_request {
                    tracing::debug!(
                        request_id,
                        latest = self.latest_request,
                        "Discarding stale search response"
                    );
                    return Command::None;
                }
                self.services = services;
                self.loading = false;
                self.last_error = None;
                Command::None
            }
            SearchEvent::FetchFailed { request_id, error } => {
                if request_id != self.latest_request {
                    tracing::debug!(request_id, error = %error, "Ignoring stale search failure");
                    return Command::None;
                }
                tracing::warn!(request_id, error = %error, "Search request failed");
                self.loading = false;
                self.last_error = Some(error);
                Command::None
            }
        }
    }

    fn issue(&mut self, query: ServiceQuery) -> Command {
        self.latest_request += 1;
        self.loading = true;
        Command::Fetch(FetchRequest {
            request_id: self.latest_request,
            query,
        })
    }
}
