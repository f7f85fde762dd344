//! BabyBear prime field in Montgomery form.
//!
//! - [`BabyBear`]: element of `GF(p)`, `p = 2^31 - 2^27 + 1 = 2013265921`,
//!   stored as `x · 2^32 mod p` so multiplication is a single 64-bit product
//!   followed by a Montgomery reduction.
//! - [`FieldError`]: the only arithmetic failure (inverting zero).
//! - [`monty`]: the raw constants and reduction helpers.
//!
//! Canonical values only appear at the boundaries: [`BabyBear::from_canonical`],
//! [`BabyBear::to_canonical`], `Display`, and the serde representation.

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

pub mod error;
pub mod monty;

pub use error::FieldError;
pub use monty::P;

use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::monty::{from_monty, monty_mul, to_monty, MONTY_ONE};

/// Element of the BabyBear field, held in Montgomery form.
///
/// The stored word is always fully reduced into `[0, p)`, so derived
/// equality and hashing compare residues.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct BabyBear(u32);

#[allow(clippy::should_implement_trait)]
impl BabyBear {
    /// Additive identity.
    pub const ZERO: Self = Self(0);
    /// Multiplicative identity.
    pub const ONE: Self = Self(MONTY_ONE);
    /// `2`.
    pub const TWO: Self = Self(to_monty(2));
    /// `p - 1`.
    pub const NEG_ONE: Self = Self(P - MONTY_ONE);

    /// Build from a canonical integer. Inputs `>= p` are reduced mod `p`.
    #[inline]
    #[must_use]
    pub const fn from_canonical(x: u32) -> Self {
        Self(to_monty(x))
    }

    /// Wrap a word that is already in Montgomery form (reduced mod `p`).
    ///
    /// Used for published constant tables, which are given as Montgomery words.
    #[inline]
    #[must_use]
    pub const fn from_montgomery(x: u32) -> Self {
        Self(x % P)
    }

    /// Canonical residue in `[0, p)`.
    #[inline]
    #[must_use]
    pub const fn to_canonical(self) -> u32 {
        from_monty(self.0)
    }

    /// Raw Montgomery word.
    #[inline]
    #[must_use]
    pub const fn to_montgomery(self) -> u32 {
        self.0
    }

    /// `true` for the additive identity.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Modular addition.
    #[inline]
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        // Both operands are < 2^31, so the sum cannot overflow a u32.
        let s = self.0 + rhs.0;
        Self(if s >= P { s - P } else { s })
    }

    /// Modular subtraction.
    #[inline]
    #[must_use]
    pub const fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + P - rhs.0)
        }
    }

    /// Additive inverse.
    #[inline]
    #[must_use]
    pub const fn neg(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }

    /// Montgomery multiplication: `a · b · R^{-1} mod p` on the stored words.
    #[inline]
    #[must_use]
    pub const fn mul(self, rhs: Self) -> Self {
        Self(monty_mul(self.0, rhs.0))
    }

    /// `self²`.
    #[inline]
    #[must_use]
    pub const fn square(self) -> Self {
        self.mul(self)
    }

    /// `2 · self`.
    #[inline]
    #[must_use]
    pub const fn double(self) -> Self {
        self.add(self)
    }

    /// `self / 2`.
    #[inline]
    #[must_use]
    pub const fn halve(self) -> Self {
        // p is odd, so exactly one of x and x + p is even.
        if self.0 & 1 == 0 {
            Self(self.0 >> 1)
        } else {
            Self((self.0 + P) >> 1)
        }
    }

    /// Exponentiation by squaring.
    #[inline]
    #[must_use]
    pub const fn pow(self, mut e: u64) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc.mul(base);
            }
            base = base.square();
            e >>= 1;
        }
        acc
    }

    /// `self^(2^k)` via `k` successive squarings.
    #[inline]
    #[must_use]
    pub const fn exp_power_of_2(self, k: usize) -> Self {
        let mut x = self;
        let mut i = 0;
        while i < k {
            x = x.square();
            i += 1;
        }
        x
    }

    /// Multiplicative inverse via Fermat's little theorem (`self^(p-2)`).
    ///
    /// # Errors
    /// [`FieldError::DivisionByZero`] when `self` is zero.
    #[inline]
    pub const fn inverse(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(P as u64 - 2))
    }
}

impl Default for BabyBear {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u32> for BabyBear {
    #[inline]
    fn from(x: u32) -> Self {
        Self::from_canonical(x)
    }
}

impl From<BabyBear> for u32 {
    #[inline]
    fn from(x: BabyBear) -> Self {
        x.to_canonical()
    }
}

impl fmt::Display for BabyBear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_canonical(), f)
    }
}

impl fmt::Debug for BabyBear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BabyBear({})", self.to_canonical())
    }
}

impl Add for BabyBear {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}
impl Sub for BabyBear {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::sub(self, rhs)
    }
}
impl Mul for BabyBear {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::mul(self, rhs)
    }
}
impl Neg for BabyBear {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::neg(self)
    }
}
impl AddAssign for BabyBear {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for BabyBear {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign for BabyBear {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for BabyBear {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for BabyBear {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F: fn(u32) -> BabyBear = BabyBear::from_canonical;

    #[test]
    fn small_products() {
        assert_eq!(F(5).mul(F(7)).to_canonical(), 35);
        assert_eq!((F(3) * F(5)).to_canonical(), 15);
        assert_eq!(F(0) * F(12345), BabyBear::ZERO);
    }

    #[test]
    fn wraparound_at_modulus() {
        assert_eq!(F(P - 1).add(F(1)).to_canonical(), 0);
        assert_eq!((F(P - 1) + F(2)).to_canonical(), 1);
        assert_eq!((F(1) - F(2)).to_canonical(), P - 1);
        assert_eq!(-BabyBear::ONE, BabyBear::NEG_ONE);
        assert_eq!(-BabyBear::ZERO, BabyBear::ZERO);
    }

    #[test]
    fn named_constants_match_montgomery_words() {
        assert_eq!(BabyBear::ONE.to_montgomery(), 0x0fff_fffe);
        assert_eq!(BabyBear::NEG_ONE.to_montgomery(), 0x6800_0003);
        assert_eq!(BabyBear::TWO.to_canonical(), 2);
        assert_eq!(BabyBear::from_montgomery(0x2fff_fffa).to_canonical(), 3);
    }

    #[test]
    fn from_canonical_reduces_large_inputs() {
        assert_eq!(F(P), BabyBear::ZERO);
        assert_eq!(F(P + 5).to_canonical(), 5);
        assert_eq!(F(u32::MAX).to_canonical(), u32::MAX % P);
    }

    #[test]
    fn inverse_of_zero_is_an_error() {
        assert_eq!(BabyBear::ZERO.inverse(), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn inverse_small_values() {
        for x in [1u32, 2, 3, 7, 1 << 20, P - 1] {
            let a = F(x);
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, BabyBear::ONE, "x = {x}");
        }
        assert_eq!(F(2).inverse().unwrap().to_canonical(), (P + 1) / 2);
    }

    #[test]
    fn halve_and_double_are_inverse() {
        for x in [0u32, 1, 2, 3, P - 1, 1_000_000_007] {
            assert_eq!(F(x).halve().double(), F(x));
            assert_eq!(F(x).double().halve(), F(x));
        }
    }

    #[test]
    fn pow_edges() {
        assert_eq!(F(12345).pow(0), BabyBear::ONE);
        assert_eq!(F(12345).pow(1), F(12345));
        assert_eq!(F(2).pow(10).to_canonical(), 1024);
        // Fermat: a^(p-1) = 1.
        assert_eq!(F(3).pow(u64::from(P) - 1), BabyBear::ONE);
        assert_eq!(F(7).exp_power_of_2(3), F(7).pow(8));
    }

    #[test]
    fn sum_and_product() {
        let xs: Vec<BabyBear> = (1..=5).map(F).collect();
        assert_eq!(xs.iter().copied().sum::<BabyBear>().to_canonical(), 15);
        assert_eq!(xs.iter().copied().product::<BabyBear>().to_canonical(), 120);
    }

    #[test]
    fn display_and_debug_use_canonical_value() {
        assert_eq!(F(42).to_string(), "42");
        assert_eq!(format!("{:?}", F(42)), "BabyBear(42)");
    }
}
