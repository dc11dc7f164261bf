//! Domain entities representing core business objects.

pub mod session;
pub mod short_link;
pub mod user;


// Re-export commonly used types
pub use session::Session;
pub use short_link::ShortLink;
pub use user::User;
