//! Multiplicative cosets of power-of-two subgroup domains (BabyBear).

use bbntt_field::BabyBear as F;
use bbntt_params::DomainParameters;

use crate::domain::{pow2_domain, Pow2Domain};
use crate::error::NttError;
use crate::ntt::{forward_ntt_in_place, interpolate_from_evals};

/// A multiplicative coset of a power-of-two subgroup domain:
/// `C = shift · ⟨gen⟩`, where `gen` generates the base subgroup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CosetDomain {
    /// Base `2^k` subgroup domain.
    pub base: Pow2Domain,
    /// Shift (coset representative), chosen outside the subgroup.
    pub shift: F,
}

impl CosetDomain {
    /// Number of elements in the coset (same as base).
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.base.size
    }

    /// `i`-th element: `shift * base.element(i)`.
    #[inline]
    #[must_use]
    pub fn element(&self, i: usize) -> F {
        self.shift * self.base.element(i)
    }
}

/// Build a coset from a base domain and an explicit shift.
#[inline]
#[must_use]
pub const fn coset_from_pow2(base: Pow2Domain, shift: F) -> CosetDomain {
    CosetDomain { base, shift }
}

/// Coset shifted by the table's group generator, which validation guarantees
/// lies outside every power-of-two subgroup.
#[inline]
#[must_use]
pub const fn default_coset(params: &DomainParameters, base: Pow2Domain) -> CosetDomain {
    coset_from_pow2(base, params.coset_shift())
}

/// Multiply `coeffs[j]` by `s^j` in place.
fn scale_by_powers(coeffs: &mut [F], s: F) {
    let mut pow = F::ONE;
    for c in coeffs.iter_mut() {
        *c *= pow;
        pow *= s;
    }
}

/// Evaluate a polynomial (given by coefficients) on a coset of size `2^k`.
///
/// `f(shift·x)` at subgroup points `x` equals the NTT of the coefficients
/// scaled by `shift^j`. Inputs longer than `2^k` are truncated, shorter ones
/// zero-padded.
///
/// # Errors
/// [`NttError::Domain`] when `k` exceeds the 2-adicity.
pub fn evaluate_on_coset_pow2(
    params: &DomainParameters,
    coeffs: &[F],
    k_log2: u32,
    shift: F,
) -> Result<Vec<F>, NttError> {
    let n = pow2_domain(params, k_log2)?.size;

    let mut scaled = vec![F::ZERO; n];
    let m = coeffs.len().min(n);
    scaled[..m].copy_from_slice(&coeffs[..m]);
    scale_by_powers(&mut scaled, shift);

    forward_ntt_in_place(params, &mut scaled)?;
    Ok(scaled)
}

/// Low-degree extension: evaluate on the default coset of size `2^k`.
///
/// # Errors
/// Same as [`evaluate_on_coset_pow2`].
pub fn coset_lde(params: &DomainParameters, coeffs: &[F], k_log2: u32) -> Result<Vec<F>, NttError> {
    evaluate_on_coset_pow2(params, coeffs, k_log2, params.coset_shift())
}

/// Recover coefficients from evaluations on `shift · ⟨ω⟩`.
///
/// # Errors
/// [`NttError::Field`] for a zero shift, otherwise as
/// [`interpolate_from_evals`].
pub fn interpolate_from_coset(
    params: &DomainParameters,
    evals: &[F],
    shift: F,
) -> Result<Vec<F>, NttError> {
    let shift_inv = if shift == params.coset_shift() {
        params.coset_shift_inverse()
    } else {
        shift.inverse()?
    };
    let mut coeffs = interpolate_from_evals(params, evals)?;
    scale_by_powers(&mut coeffs, shift_inv);
    Ok(coeffs)
}
