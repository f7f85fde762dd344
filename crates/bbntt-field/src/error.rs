//! Field arithmetic errors.

use thiserror::Error;

/// Failure of a field operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Attempted to invert the additive identity.
    #[error("division by zero: 0 has no multiplicative inverse")]
    DivisionByZero,
}
