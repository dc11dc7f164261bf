//! Session service module
//!
//! Issues opaque session tokens, resolves them to identities and gates
//! operations that require a signed-in user.

mod config;
mod gate;
mod service;


pub use config::SessionServiceConfig;
pub use gate::AuthGate;
pub use service::{hash_token, SessionService, TOKEN_BYTES};
