//! Server-side login sessions.
//!
//! Sessions live in process memory only: a restart invalidates every cookie
//! and nothing is shared between instances. Expiry is absolute (24 hours
//! after creation, not sliding) and expired entries are evicted lazily when
//! they are next validated.

use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use ring::rand::{self, SecureRandom};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "sessionId";

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct Session {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    clock: Box<dyn Clock>,
    ttl: Duration,
}

fn generate_token() -> String {
    let rng = rand::SystemRandom::new();
    let mut bytes = [0u8; 16];
    // getentropy is the only failure mode and does not fail on any supported
    // platform.
    rng.fill(&mut bytes).expect("failed to generate random bytes");
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
            ttl: Duration::hours(24),
        }
    }

    pub fn create(&self, user_id: Uuid) -> String {
        let token = generate_token();
        let expires_at = self.clock.now() + self.ttl;
        self.sessions
            .lock()
            .expect("session store poisoned")
            .insert(token.clone(), Session { user_id, expires_at });
        tracing::debug!(%user_id, "created session");
        token
    }

    /// Resolves a cookie value to a user id. Expired entries are removed on
    /// the way out.
    pub fn validate(&self, token: &str) -> Option<Uuid> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        let session = sessions.get(token)?;
        if session.expires_at <= self.clock.now() {
            sessions.remove(token);
            tracing::debug!("session expired");
            return None;
        }
        Some(session.user_id)
    }

    pub fn delete(&self, token: &str) {
        self.sessions.lock().expect("session store poisoned").remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn new(now: DateTime<Utc>) -> Arc<Self> {
            Arc::new(Self { now: Mutex::new(now) })
        }

        fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for Arc<ManualClock> {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    #[test]
    fn test_validate_after_create() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();
        let token = store.create(user_id);
        assert_eq!(store.validate(&token), Some(user_id));
    }

    #[test]
    fn test_unknown_token() {
        let store = SessionStore::new();
        assert_eq!(store.validate("no-such-token"), None);
    }

    #[test]
    fn test_deleted_token() {
        let store = SessionStore::new();
        let token = store.create(Uuid::new_v4());
        store.delete(&token);
        assert_eq!(store.validate(&token), None);
    }

    #[test]
    fn test_expiry_is_absolute() {
        let clock = ManualClock::new(Utc::now());
        let store = SessionStore::with_clock(Box::new(Arc::clone(&clock)));
        let user_id = Uuid::new_v4();
        let token = store.create(user_id);

        clock.advance(Duration::hours(23));
        assert_eq!(store.validate(&token), Some(user_id));

        // Validating does not slide the expiry.
        clock.advance(Duration::hours(1));
        assert_eq!(store.validate(&token), None);
        // The expired entry was evicted, not just rejected.
        assert!(store.sessions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_tokens_are_unique_and_url_safe() {
        let store = SessionStore::new();
        let a = store.create(Uuid::new_v4());
        let b = store.create(Uuid::new_v4());
        assert_ne!(a, b);
        let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(&a).unwrap();
        assert_eq!(decoded.len(), 16);
    }
}
