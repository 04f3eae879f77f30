//! Live search session: wires [`SearchState`] to a [`ServicesApi`] and a [`Debouncer`].
//!
//! Every method that can trigger a fetch spawns Tokio tasks and therefore must be
//! called from within a runtime.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;

use crate::api::ServicesApi;
use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::state::{Command, FetchRequest, SearchEvent, SearchState};

pub struct SearchSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: Arc<dyn ServicesApi>,
    state: Mutex<SearchState>,
    debouncer: Mutex<Debouncer>,
    snapshots: watch::Sender<SearchState>,
}

impl SearchSession {
    pub fn new(api: Arc<dyn ServicesApi>) -> Self {
        Self::with_debounce(api, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(api: Arc<dyn ServicesApi>, window: Duration) -> Self {
        let (snapshots, _) = watch::channel(SearchState::new());
        Self {
            inner: Arc::new(SessionInner {
                api,
                state: Mutex::new(SearchState::new()),
                debouncer: Mutex::new(Debouncer::new(window)),
                snapshots,
            }),
        }
    }

    /// Load the unfiltered directory.
    pub fn start(&self) {
        self.inner.dispatch(SearchEvent::Mounted);
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.inner
            .dispatch(SearchEvent::SearchTermChanged(term.into()));
    }

    pub fn set_category(&self, category: impl Into<String>) {
        self.inner
            .dispatch(SearchEvent::CategoryChanged(category.into()));
    }

    /// Current state
    pub fn snapshot(&self) -> SearchState {
        self.inner.lock_state().clone()
    }

    /// Receive a new snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.snapshots.subscribe()
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.inner.lock_debouncer().cancel();
    }
}

impl SessionInner {
    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        // State stays consistent even if a holder panicked: transitions are plain assignments.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_debouncer(&self) -> MutexGuard<'_, Debouncer> {
        self.debouncer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dispatch(self: &Arc<Self>, event: SearchEvent) {
        let command = {
            let mut state = self.lock_state();
            let command = state.update(event);
            self.snapshots.send_replace(state.clone());
            command
        };

        match command {
            Command::None => {}
            Command::Debounce => {
                let inner = Arc::clone(self);
                self.lock_debouncer()
                    .schedule(move || inner.dispatch(SearchEvent::DebounceElapsed));
            }
            Command::Fetch(request) => self.spawn_fetch(request),
        }
    }

    fn spawn_fetch(self: &Arc<Self>, request: FetchRequest) {
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let FetchRequest { request_id, query } = request;
            let event = match inner.api.fetch_services(&query).await {
                Ok(services) => SearchEvent::FetchSucceeded {
                    request_id,
                    services,
                },
                Err(e) => SearchEvent::FetchFailed {
                    request_id,
                    error: e.to_string(),
                },
            };
            inner.dispatch(event);
        });
    }
}
