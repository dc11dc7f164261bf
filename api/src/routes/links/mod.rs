//! Link route handlers
//!
//! Listing, creating, editing and deleting require a session; looking up a
//! single code does not.

mod create;
mod delete;
mod list;
mod show;
mod update;

pub use create::create;
pub use delete::delete;
pub use list::{list, list_detailed};
pub use show::show;
pub use update::update;
