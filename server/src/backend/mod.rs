//! Client for the external OptiCloud backend.
//!
//! DESIGN
//! ======
//! Routes and services depend on the `OptiBackend` trait only; `HttpBackend`
//! is the reqwest implementation wired up in `main`. Tests swap in mocks that
//! count calls, which is how "no request on validation failure" is checked.

pub mod config;
pub mod http;
pub mod types;

pub use config::BackendConfig;
pub use http::HttpBackend;
pub use types::{BackendError, OptiBackend};

impl HttpBackend {
    /// Build a backend client from `BACKEND_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, BackendError> {
        Self::new(&BackendConfig::from_env())
    }
}
