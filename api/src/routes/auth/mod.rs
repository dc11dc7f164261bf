//! Session route handlers
//!
//! Register and login hand the session token to the client in a cookie;
//! logout revokes it and clears the cookie.

pub mod login;
pub mod logout;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use register::register;
