//! Montgomery constants and the REDC step for the BabyBear prime.
//!
//! Elements are stored as `x · R mod p` with `R = 2^32`. Multiplying two
//! stored words gives `x · y · R²`, and one reduction brings it back to
//! `x · y · R`, without any division by `p`.

/// BabyBear prime `p = 2^31 - 2^27 + 1`.
pub const P: u32 = 0x7800_0001;

/// Number of bits in the Montgomery radix (`R = 2^32`).
pub const MONTY_BITS: u32 = 32;

/// `μ = p^{-1} mod 2^32`.
pub const MONTY_MU: u32 = 0x8800_0001;

/// `R mod p`, i.e. the Montgomery form of `1`.
pub const MONTY_ONE: u32 = 0x0fff_fffe;

/// `R² mod p`; Montgomery-multiplying by it converts into Montgomery form.
pub const MONTY_R2: u32 = 0x45dd_dde3;

/// Montgomery reduction: returns `x · 2^{-32} mod p` in `[0, p)`.
///
/// Requires `x < p · 2^32`, which holds for any product of two reduced words.
#[inline]
#[must_use]
pub const fn monty_reduce(x: u64) -> u32 {
    // q = x · μ mod 2^32, so that x − q·p ≡ 0 (mod 2^32).
    let q = (x as u32).wrapping_mul(MONTY_MU);
    let qp = (q as u64) * (P as u64);
    let (diff, borrow) = x.overflowing_sub(qp);
    let hi = (diff >> MONTY_BITS) as u32;
    // (x − q·p) / 2^32 lies in (−p, p); fix up the negative half.
    if borrow {
        hi.wrapping_add(P)
    } else {
        hi
    }
}

/// Montgomery product of two stored words.
#[inline]
#[must_use]
pub const fn monty_mul(a: u32, b: u32) -> u32 {
    monty_reduce((a as u64) * (b as u64))
}

/// Canonical `x` (any `u32`) to Montgomery form.
#[inline]
#[must_use]
pub const fn to_monty(x: u32) -> u32 {
    monty_mul(x % P, MONTY_R2)
}

/// Montgomery form back to the canonical residue.
#[inline]
#[must_use]
pub const fn from_monty(x: u32) -> u32 {
    monty_reduce(x as u64)
}
