//! Twiddle-factor helpers for power-of-two NTT over BabyBear.
//!
//! For a domain `⟨ω⟩` of size `n = 2^k`, stage-`s` butterflies use powers of
//! `ω_{len}` where `len = 2^s`. These helpers build the flat `n/2` tables.

use bbntt_field::BabyBear as F;

use crate::domain::Pow2Domain;

fn powers(base: F, count: usize) -> Vec<F> {
    let mut tw = Vec::with_capacity(count);
    let mut cur = F::ONE;
    for _ in 0..count {
        tw.push(cur);
        cur *= base;
    }
    tw
}

/// Forward twiddles: entry `j` is `ω^j` for `j < n/2`.
#[inline]
#[must_use]
pub fn stage_twiddles(dom: &Pow2Domain) -> Vec<F> {
    debug_assert!(dom.size.is_power_of_two(), "domain size must be a power of two");
    powers(dom.gen, dom.size / 2)
}

/// Inverse twiddles: entry `j` is `ω^{-j}` for `j < n/2`.
#[inline]
#[must_use]
pub fn inverse_stage_twiddles(dom: &Pow2Domain) -> Vec<F> {
    debug_assert!(dom.size.is_power_of_two(), "domain size must be a power of two");
    powers(dom.gen_inv, dom.size / 2)
}
