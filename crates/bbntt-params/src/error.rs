//! Error types for parameter validation and lookup.

use core::fmt;

use thiserror::Error;

/// Which generator failed an order check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// The element of order `2^S` (last forward root).
    TwoAdic,
    /// The coset shift, which must lie outside the `2^S` subgroup.
    Coset,
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TwoAdic => "two-adic",
            Self::Coset => "coset",
        })
    }
}

/// One of the three per-size tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Forward roots of unity.
    Forward,
    /// Inverse roots of unity.
    Inverse,
    /// Inverses of the domain sizes `2^k`.
    SizeInverse,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "forward roots",
            Self::Inverse => "inverse roots",
            Self::SizeInverse => "domain size inverse",
        })
    }
}

/// A domain table failed one of the consistency checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// A generator has the wrong multiplicative order.
    #[error("{0} generator has the wrong multiplicative order")]
    WrongOrder(Generator),
    /// `g · g^{-1} != 1`.
    #[error("generator times generator inverse is not 1")]
    InconsistentInverse,
    /// `forward[k]` is not a primitive `2^k`-th root of unity.
    #[error("forward root {0} is not a primitive 2^{0}-th root of unity")]
    RootNotPrimitive(usize),
    /// `forward[k] != forward[k + 1]^2`.
    #[error("forward root {0} is not the square of the next root in the chain")]
    BrokenSquaringChain(usize),
    /// `forward[k] · inverse[k] != 1`.
    #[error("inverse root {0} does not invert forward root {0}")]
    RootInverseMismatch(usize),
    /// `size_inverse[k] · 2^k != 1`.
    #[error("domain size inverse {0} does not invert 2^{0}")]
    SizeInverseMismatch(usize),
    /// A table does not have exactly `S + 1` entries.
    #[error("{table} table has {found} entries, expected {expected}")]
    TableLengthMismatch {
        /// Offending table.
        table: TableKind,
        /// Required length (`S + 1`).
        expected: usize,
        /// Actual length.
        found: usize,
    },
}

/// Failure to serve domain parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Requested `log2_size` exceeds the 2-adicity.
    #[error("unsupported transform size 2^{requested}: the largest supported size is 2^{max}")]
    UnsupportedSize {
        /// Requested log-size.
        requested: u32,
        /// Largest supported log-size.
        max: u32,
    },
    /// The underlying table did not validate; no parameters are served.
    #[error("domain parameters failed validation: {0}")]
    InvalidParameters(#[from] ParameterError),
}
