//! BabyBear NTT domain parameters.
//!
//! - [`constants`]: the published Montgomery words (generator, its inverse, and
//!   the forward / inverse / domain-size-inverse tables for log-sizes `0..=27`).
//! - [`table`]: [`DomainTable`], either borrowed from the published words or
//!   derived from a two-adic generator by repeated squaring.
//! - [`validate`]: order, inverse and chain checks over a table.
//! - [`provider`]: [`DomainParameters`], the validated, read-only lookup an
//!   NTT engine consumes through [`roots_for_size`].
//!
//! ```
//! let roots = bbntt_params::roots_for_size(10)?;
//! assert_eq!(roots.forward_root.pow(1 << 10), bbntt_field::BabyBear::ONE);
//! # Ok::<(), bbntt_params::ProviderError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown
)]

pub mod constants;
pub mod error;
pub mod provider;
pub mod table;
pub mod validate;

pub use constants::{TABLE_LEN, TWO_ADICITY, TWO_ADIC_GENERATOR};
pub use error::{Generator, ParameterError, ProviderError, TableKind};
pub use provider::{roots_for_size, DomainParameters, DomainRoots};
pub use table::DomainTable;
pub use validate::validate;
