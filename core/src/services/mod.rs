//! Business services containing domain logic and use cases.

pub mod code;
pub mod credential;
pub mod link;
pub mod session;
pub mod shortener;

// Re-export commonly used types
pub use code::{CodeGenerator, RandomCodeGenerator};
pub use credential::{CredentialService, CredentialServiceConfig};
pub use link::{LinkService, LinkServiceConfig};
pub use session::{AuthGate, SessionService, SessionServiceConfig};
pub use shortener::{ShortenerConfig, ShortenerService};
