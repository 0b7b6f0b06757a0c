//! Backend client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeouts: BackendTimeouts,
}

impl BackendConfig {
    /// Build config from environment variables.
    ///
    /// - `BACKEND_URL`: default `http://localhost:8000`
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("BACKEND_URL").ok().as_deref(),
            std::env::var("BACKEND_REQUEST_TIMEOUT_SECS").ok().as_deref(),
            std::env::var("BACKEND_CONNECT_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    fn from_values(base_url: Option<&str>, request_secs: Option<&str>, connect_secs: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        let timeouts = BackendTimeouts {
            request_secs: parse_secs(request_secs, DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_secs(connect_secs, DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };
        Self { base_url, timeouts }
    }
}

fn parse_secs(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
