//! Short link service module
//!
//! Owns the link lifecycle: code allocation on create, owner-scoped edits and
//! deletes, and the public code-to-destination lookup used by redirects.

mod config;
mod service;


pub use config::LinkServiceConfig;
pub use service::LinkService;
