//! In-memory session store.
//!
//! ARCHITECTURE
//! ============
//! A session is created when the OAuth callback succeeds and is referenced by
//! a random token in an HttpOnly cookie. Sessions live only in process
//! memory: there is nothing to persist, and a restart signs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expired entries are evicted lazily on read and by a periodic reaper task,
//! so an idle expired session may occupy memory for up to one reap interval.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use model::User;
use rand::Rng;
use tokio::task::JoinHandle;

pub const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;
pub const DEFAULT_REAP_INTERVAL_SECS: u64 = 300;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

struct SessionEntry {
    user: User,
    expires_at: Instant,
    /// Set once the profile has been sent to the backend for this session.
    recorded: bool,
}

/// Shared session map. Cloning shares the same underlying store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), ttl }
    }

    /// Store with TTL from `SESSION_TTL_SECS` (default one day).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Duration::from_secs(env_parse("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)))
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session for `user`, returning its token.
    #[must_use]
    pub fn create(&self, user: User) -> String {
        self.create_at(user, Instant::now())
    }

    fn create_at(&self, user: User, now: Instant) -> String {
        let token = generate_token();
        let entry = SessionEntry { user, expires_at: now + self.ttl, recorded: false };
        self.lock().insert(token.clone(), entry);
        token
    }

    /// Look up a live session. Expired sessions are removed and yield `None`.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<User> {
        self.get_at(token, Instant::now())
    }

    fn get_at(&self, token: &str, now: Instant) -> Option<User> {
        let mut sessions = self.lock();
        let expired = sessions.get(token)?.expires_at <= now;
        if expired {
            sessions.remove(token);
            return None;
        }
        sessions.get(token).map(|entry| entry.user.clone())
    }

    /// Remove a session. Returns whether it existed.
    pub fn remove(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    /// Flag the session's profile as recorded.
    ///
    /// Returns `true` only for the first call on a live session, so callers can
    /// use it to send the profile at most once.
    pub fn mark_recorded(&self, token: &str) -> bool {
        self.mark_recorded_at(token, Instant::now())
    }

    fn mark_recorded_at(&self, token: &str, now: Instant) -> bool {
        let mut sessions = self.lock();
        match sessions.get_mut(token) {
            Some(entry) if entry.expires_at > now && !entry.recorded => {
                entry.recorded = true;
                true
            }
            _ => false,
        }
    }

    /// Drop every expired session, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| entry.expires_at > now);
        before - sessions.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SessionEntry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Spawn a background task that purges expired sessions every `interval`.
pub fn spawn_reaper(store: SessionStore, interval: Duration) -> JoinHandle<()> {
    tracing::info!(interval_secs = interval.as_secs(), ttl_secs = store.ttl().as_secs(), "session reaper configured");
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let purged = store.purge_expired();
            if purged > 0 {
                tracing::debug!(purged, remaining = store.len(), "expired sessions purged");
            }
        }
    })
}
