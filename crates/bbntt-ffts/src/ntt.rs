//! In-place radix-2 Cooley–Tukey NTT/INTT for BabyBear.
//!
//! The forward transform maps coefficients → evaluations over a `2^k`
//! subgroup, and the inverse transform maps evaluations → coefficients. Input
//! and output are both in natural order.
//!
//! Stage roots and the final `n^{-1}` come from the validated domain table;
//! per-stage twiddles (`ω^i`) are precomputed per call.

use bbntt_field::BabyBear as F;
use bbntt_params::DomainParameters;
use tracing::trace;

use crate::domain::{pow2_domain, Pow2Domain};
use crate::error::NttError;
use crate::twiddle::{inverse_stage_twiddles, stage_twiddles};

#[inline]
fn bitrev(mut x: usize, bits: usize) -> usize {
    let mut y = 0usize;
    for _ in 0..bits {
        y = (y << 1) | (x & 1);
        x >>= 1;
    }
    y
}

#[inline]
fn bit_reverse_permute(a: &mut [F]) {
    let n = a.len();
    debug_assert!(n.is_power_of_two());
    let bits = n.trailing_zeros() as usize;
    for i in 0..n {
        let j = bitrev(i, bits);
        if j > i {
            a.swap(i, j);
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

/// Stage `s ∈ [1, n_log2]` has `2^(s-1)` twiddles.
fn build_twiddles(
    params: &DomainParameters,
    n_log2: u32,
    dir: Direction,
) -> Result<Vec<Vec<F>>, NttError> {
    (1..=n_log2)
        .map(|s| {
            let dom = pow2_domain(params, s)?;
            Ok(match dir {
                Direction::Forward => stage_twiddles(&dom),
                Direction::Inverse => inverse_stage_twiddles(&dom),
            })
        })
        .collect()
}

/// Validate the length and look up its domain; `None` for trivial lengths.
fn check_len(params: &DomainParameters, n: usize) -> Result<Option<Pow2Domain>, NttError> {
    if n <= 1 {
        return Ok(None);
    }
    if !n.is_power_of_two() {
        return Err(NttError::NotPowerOfTwo(n));
    }
    pow2_domain(params, n.trailing_zeros()).map(Some)
}

/// DIT butterflies over a bit-reversed buffer: `(u, v) -> (u + w·v, u - w·v)`.
fn butterflies(a: &mut [F], tw: &[Vec<F>]) {
    let n = a.len();
    let mut len = 2usize;
    let mut stage = 1usize;
    while len <= n {
        let half = len / 2;
        let w_stage = &tw[stage - 1];

        let mut j = 0usize;
        while j < n {
            for i in 0..half {
                let u = a[j + i];
                let v = a[j + i + half] * w_stage[i];
                a[j + i] = u + v;
                a[j + i + half] = u - v;
            }
            j += len;
        }

        stage += 1;
        len <<= 1;
    }
}

/// Forward NTT in place (coefficients → values).
///
/// # Errors
/// [`NttError::NotPowerOfTwo`] for other lengths, [`NttError::Domain`] when
/// the length exceeds `2^27`.
pub fn forward_ntt_in_place(params: &DomainParameters, a: &mut [F]) -> Result<(), NttError> {
    let Some(dom) = check_len(params, a.len())? else {
        return Ok(());
    };
    let tw = build_twiddles(params, dom.log_size, Direction::Forward)?;
    trace!(n_log2 = dom.log_size, "forward ntt");

    bit_reverse_permute(a);
    butterflies(a, &tw);
    Ok(())
}

/// Inverse NTT in place (values → coefficients).
///
/// Mirror of the forward DIT butterfly with inverse stage twiddles, followed
/// by scaling with the table's `size_inverse[k]`.
///
/// # Errors
/// Same as [`forward_ntt_in_place`].
pub fn inverse_ntt_in_place(params: &DomainParameters, a: &mut [F]) -> Result<(), NttError> {
    let Some(dom) = check_len(params, a.len())? else {
        return Ok(());
    };
    let tw_inv = build_twiddles(params, dom.log_size, Direction::Inverse)?;
    trace!(n_log2 = dom.log_size, "inverse ntt");

    bit_reverse_permute(a);
    butterflies(a, &tw_inv);
    for x in a.iter_mut() {
        *x *= dom.size_inv;
    }
    Ok(())
}

/// Evaluate a polynomial (given by coefficients) on a `2^k` domain using NTT.
/// If `coeffs.len() < 2^k`, it is zero-padded. If `coeffs.len() > 2^k`, it is truncated.
///
/// # Errors
/// [`NttError::Domain`] when `k` exceeds the 2-adicity.
pub fn evaluate_on_pow2_domain(
    params: &DomainParameters,
    coeffs: &[F],
    k_log2: u32,
) -> Result<Vec<F>, NttError> {
    let dom = pow2_domain(params, k_log2)?;
    let mut buf = vec![F::ZERO; dom.size];
    let m = coeffs.len().min(dom.size);
    buf[..m].copy_from_slice(&coeffs[..m]);
    forward_ntt_in_place(params, &mut buf)?;
    Ok(buf)
}

/// Interpolate coefficients from evaluations on a `2^k` domain using INTT.
///
/// # Errors
/// Same as [`inverse_ntt_in_place`].
pub fn interpolate_from_evals(params: &DomainParameters, evals: &[F]) -> Result<Vec<F>, NttError> {
    let mut buf = evals.to_vec();
    inverse_ntt_in_place(params, &mut buf)?;
    Ok(buf)
}
