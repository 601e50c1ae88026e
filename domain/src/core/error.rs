//! Domain error types
//!
//! Small by design: missing credentials and absent providers degrade
//! the pipeline instead of erroring, so the only hard domain rule is
//! that a turn needs a non-empty message.

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Empty user message")]
    EmptyMessage,
}
