//! Evaluation-domain helpers for BabyBear.
//!
//! A size-`2^k` multiplicative subgroup is generated by the table's forward
//! root for log-size `k`; nothing is re-derived here.

use bbntt_field::BabyBear as F;
use bbntt_params::DomainParameters;

use crate::error::NttError;

/// A power-of-two multiplicative subgroup domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pow2Domain {
    /// `k` in `size = 2^k`.
    pub log_size: u32,
    /// Domain size (`2^k`).
    pub size: usize,
    /// A generator of the size-`size` subgroup.
    pub gen: F,
    /// `gen^{-1}`.
    pub gen_inv: F,
    /// `size^{-1}`.
    pub size_inv: F,
}

impl Pow2Domain {
    /// Return the `i`-th element: `gen^i`.
    #[inline]
    #[must_use]
    pub fn element(&self, i: usize) -> F {
        self.gen.pow(i as u64)
    }

    /// All elements in order `gen^0, gen^1, …`.
    #[must_use]
    pub fn elements(&self) -> Vec<F> {
        std::iter::successors(Some(F::ONE), |&x| Some(x * self.gen))
            .take(self.size)
            .collect()
    }
}

/// Look up the `2^k` domain in `params`.
///
/// # Errors
/// [`NttError::Domain`] when `k` exceeds the 2-adicity.
pub fn pow2_domain(params: &DomainParameters, k: u32) -> Result<Pow2Domain, NttError> {
    let roots = params.roots_for_size(k)?;
    Ok(Pow2Domain {
        log_size: k,
        size: 1usize << k,
        gen: roots.forward_root,
        gen_inv: roots.inverse_root,
        size_inv: roots.size_inverse,
    })
}
