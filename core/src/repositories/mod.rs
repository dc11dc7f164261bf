pub mod link;
pub mod session;
pub mod user;

pub use link::{InMemoryLinkRepository, LinkRepository};
pub use session::{InMemorySessionRepository, SessionRepository};
pub use user::{InMemoryUserRepository, UserRepository};
