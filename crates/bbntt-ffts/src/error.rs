//! Transform errors.

use bbntt_field::FieldError;
use bbntt_params::ProviderError;
use thiserror::Error;

/// Failure of a transform or domain construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NttError {
    /// Input length is not a power of two.
    #[error("transform length {0} is not a power of two")]
    NotPowerOfTwo(usize),
    /// The domain tables cannot serve this size.
    #[error(transparent)]
    Domain(#[from] ProviderError),
    /// Field arithmetic failed (e.g. a zero root or shift).
    #[error(transparent)]
    Field(#[from] FieldError),
}
