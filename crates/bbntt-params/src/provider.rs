//! Size-indexed lookup of validated domain parameters.
//!
//! [`DomainParameters`] can only be built from a table that passed
//! [`crate::validate`]. The process-wide instance wraps the published table and
//! is validated exactly once; if that fails, every caller gets the same error
//! and no roots are ever served.

use std::sync::OnceLock;

use bbntt_field::BabyBear as F;
use serde::Serialize;
use tracing::{error, info};

use crate::constants::TWO_ADICITY;
use crate::error::{ParameterError, ProviderError};
use crate::table::DomainTable;

/// Everything an NTT of length `2^log2_size` needs from the domain table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DomainRoots {
    /// `k` in `n = 2^k`.
    pub log2_size: u32,
    /// Primitive `2^k`-th root of unity.
    pub forward_root: F,
    /// Inverse of `forward_root`.
    pub inverse_root: F,
    /// `(2^k)^{-1}`, applied after an inverse transform.
    pub size_inverse: F,
}

impl DomainRoots {
    /// `(forward_root, inverse_root, size_inverse)`.
    #[inline]
    #[must_use]
    pub const fn into_tuple(self) -> (F, F, F) {
        (self.forward_root, self.inverse_root, self.size_inverse)
    }
}

/// A validated, immutable domain table.
#[derive(Clone, Debug)]
pub struct DomainParameters {
    table: DomainTable,
}

static GLOBAL: OnceLock<Result<DomainParameters, ParameterError>> = OnceLock::new();

impl DomainParameters {
    /// Validate `table` and wrap it.
    ///
    /// # Errors
    /// Any [`ParameterError`] raised by validation.
    pub fn new(table: DomainTable) -> Result<Self, ParameterError> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Process-wide parameters built from the published table.
    ///
    /// # Errors
    /// The cached validation failure, if the published table is inconsistent.
    pub fn global() -> Result<&'static Self, ParameterError> {
        GLOBAL
            .get_or_init(|| {
                let params = Self::new(DomainTable::published());
                match &params {
                    Ok(_) => info!(two_adicity = TWO_ADICITY, "babybear domain parameters validated"),
                    Err(e) => error!(error = %e, "refusing to serve babybear domain parameters"),
                }
                params
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Largest supported `log2_size` (the 2-adicity).
    #[inline]
    #[must_use]
    pub const fn max_log_size(&self) -> u32 {
        TWO_ADICITY as u32
    }

    /// Roots and rescaling factor for a transform of length `2^log2_size`.
    ///
    /// # Errors
    /// [`ProviderError::UnsupportedSize`] when `log2_size > S`.
    pub fn roots_for_size(&self, log2_size: u32) -> Result<DomainRoots, ProviderError> {
        if log2_size > self.max_log_size() {
            return Err(ProviderError::UnsupportedSize {
                requested: log2_size,
                max: self.max_log_size(),
            });
        }
        // Lengths were checked by `validate`, so indexing is in bounds.
        let k = log2_size as usize;
        Ok(DomainRoots {
            log2_size,
            forward_root: self.table.forward()[k],
            inverse_root: self.table.inverse()[k],
            size_inverse: self.table.size_inverse()[k],
        })
    }

    /// Coset shift for low-degree extensions (the group generator).
    #[inline]
    #[must_use]
    pub const fn coset_shift(&self) -> F {
        self.table.generator()
    }

    /// Inverse of [`DomainParameters::coset_shift`].
    #[inline]
    #[must_use]
    pub const fn coset_shift_inverse(&self) -> F {
        self.table.generator_inverse()
    }

    /// Underlying table.
    #[inline]
    #[must_use]
    pub const fn table(&self) -> &DomainTable {
        &self.table
    }
}

/// [`DomainParameters::roots_for_size`] on the process-wide parameters.
///
/// # Errors
/// [`ProviderError::InvalidParameters`] if the published table does not
/// validate, [`ProviderError::UnsupportedSize`] when `log2_size > S`.
pub fn roots_for_size(log2_size: u32) -> Result<DomainRoots, ProviderError> {
    DomainParameters::global()?.roots_for_size(log2_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_table() {
        let t = DomainTable::published();
        let mut fw = t.forward().to_vec();
        fw.truncate(3);
        let bad = DomainTable::from_parts(
            t.generator(),
            t.generator_inverse(),
            fw,
            t.inverse().to_vec(),
            t.size_inverse().to_vec(),
        );
        assert!(matches!(
            DomainParameters::new(bad),
            Err(ParameterError::TableLengthMismatch { found: 3, .. })
        ));
    }

    #[test]
    fn size_zero_and_one() {
        let params = DomainParameters::global().unwrap();
        let r0 = params.roots_for_size(0).unwrap();
        assert_eq!(r0.forward_root.to_montgomery(), 0x0fff_fffe);
        assert_eq!(r0.size_inverse.to_montgomery(), 0x0fff_fffe);

        let r1 = params.roots_for_size(1).unwrap();
        assert_eq!(r1.forward_root, F::NEG_ONE);
        assert_eq!(r1.inverse_root, F::NEG_ONE);
        assert_eq!(r1.size_inverse * F::TWO, F::ONE);
    }

    #[test]
    fn tuple_view_matches_fields() {
        let r = roots_for_size(9).unwrap();
        assert_eq!(r.into_tuple(), (r.forward_root, r.inverse_root, r.size_inverse));
    }
}
