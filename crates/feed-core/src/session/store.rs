//! Token Storage
//!
//! Where the opaque session token lives. The browser build stores it in
//! local storage; tests and host builds keep it in memory.

use std::cell::RefCell;
use std::rc::Rc;

/// Get/set/clear access to a single persisted token
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn store_token(&self, token: &str);
    fn clear_token(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn store_token(&self, token: &str) {
        (**self).store_token(token)
    }

    fn clear_token(&self) {
        (**self).clear_token()
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }
}
