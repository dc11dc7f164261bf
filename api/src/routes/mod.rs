//! Route handlers
//!
//! - `auth` - registration, login and logout
//! - `links` - owner-scoped link management
//! - `redirect` - public short code resolution

pub mod auth;
pub mod links;
pub mod redirect;
