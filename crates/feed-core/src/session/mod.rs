//! Session Layer
//!
//! Login gate and the injected token storage it persists through.

mod store;
mod gate;

pub use store::{MemoryTokenStore, TokenStore};
pub use gate::{NoDelay, SessionError, SessionGate, Sleeper, DEMO_PASSWORD, DEMO_TOKEN, DEMO_USERNAME};
