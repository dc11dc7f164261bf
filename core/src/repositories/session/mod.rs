//! Session repository module.

mod r#trait;
pub use r#trait::SessionRepository;

mod memory;
pub use memory::InMemorySessionRepository;
