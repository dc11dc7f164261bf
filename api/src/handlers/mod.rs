pub mod error;

pub use error::{json_error_handler, not_found, status_for, ApiError};
