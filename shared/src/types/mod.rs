//! Type definitions shared between the core and the HTTP layer
//!
//! - `response` - health check payload

pub mod response;

pub use response::HealthResponse;
