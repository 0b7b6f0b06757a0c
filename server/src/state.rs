//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the session store, the backend client behind its trait, and the
//! optional Google OAuth config. Every field is cheap to clone.

use std::sync::Arc;

use crate::backend::OptiBackend;
use crate::services::auth::GoogleConfig;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub backend: Arc<dyn OptiBackend>,
    /// `None` if Google OAuth env vars are not configured.
    pub google: Option<GoogleConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(sessions: SessionStore, backend: Arc<dyn OptiBackend>, google: Option<GoogleConfig>) -> Self {
        Self { sessions, backend, google }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
