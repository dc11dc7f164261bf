//! Short code generation
//!
//! Codes are fixed-length strings over the 62-character alphanumeric
//! alphabet. Generators only draw candidates; uniqueness is enforced when the
//! link service inserts the candidate into the link repository.

mod generator;

pub use generator::{CodeGenerator, RandomCodeGenerator, DEFAULT_CODE_LENGTH};

#[cfg(test)]
pub(crate) use generator::SequenceCodeGenerator;
