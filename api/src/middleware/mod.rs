pub mod auth;
pub mod security;

pub use auth::{SessionCookies, SessionToken};
pub use security::SecurityHeaders;
