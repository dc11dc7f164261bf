//! Short link repository module.

mod r#trait;
pub use r#trait::LinkRepository;

mod memory;
pub use memory::InMemoryLinkRepository;
