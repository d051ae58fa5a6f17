//! Session Gate
//!
//! Mock login: a compiled-in credential pair, a simulated round-trip and an
//! opaque token whose mere presence means "logged in".

use std::cell::{Cell, RefCell};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::FeedConfig;
use super::store::TokenStore;

pub const DEMO_USERNAME: &str = "froster";
pub const DEMO_PASSWORD: &str = "hello";
pub const DEMO_TOKEN: &str = "dummy_token_12345";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    InvalidCredentials,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidCredentials => write!(f, "Invalid username or password."),
        }
    }
}

impl std::error::Error for SessionError {}

/// Suspends the current task, used to simulate login latency
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper that returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Sleeper for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

pub struct SessionGate<T> {
    store: T,
    latency: Duration,
    authenticated: Cell<bool>,
    /// Logins currently in flight
    pending: Cell<u32>,
    last_error: RefCell<Option<SessionError>>,
}

impl<T: TokenStore> SessionGate<T> {
    /// Build the gate at startup. A stored token is trusted as-is.
    pub fn restore(store: T, config: &FeedConfig) -> Self {
        let authenticated = store.token().is_some();
        log::debug!("[session] restored, authenticated={}", authenticated);
        Self {
            store,
            latency: config.login_latency(),
            authenticated: Cell::new(authenticated),
            pending: Cell::new(0),
            last_error: RefCell::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// True while any login is in flight
    pub fn is_pending(&self) -> bool {
        self.pending.get() > 0
    }

    pub fn last_error(&self) -> Option<SessionError> {
        *self.last_error.borrow()
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    pub async fn login<Z: Sleeper + ?Sized>(
        &self,
        sleeper: &Z,
        username: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.pending.set(self.pending.get() + 1);
        *self.last_error.borrow_mut() = None;

        sleeper.sleep(self.latency).await;

        let result = if username == DEMO_USERNAME && password == DEMO_PASSWORD {
            self.store.store_token(DEMO_TOKEN);
            self.authenticated.set(true);
            log::debug!("[session] logged in as {}", username);
            Ok(())
        } else {
            log::warn!("[session] rejected login for {:?}", username);
            *self.last_error.borrow_mut() = Some(SessionError::InvalidCredentials);
            Err(SessionError::InvalidCredentials)
        };

        self.pending.set(self.pending.get() - 1);
        result
    }

    pub fn logout(&self) {
        self.store.clear_token();
        self.authenticated.set(false);
        log::debug!("[session] logged out");
    }
}
