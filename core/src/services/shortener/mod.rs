//! Shortener facade
//!
//! Wires the credential, session and link services together over one set of
//! repositories and exposes the operations the transport layer calls.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::ShortenerConfig;
pub use service::ShortenerService;
