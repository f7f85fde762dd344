//! Root-of-unity domain tables.
//!
//! A [`DomainTable`] holds the coset generator and its inverse plus three
//! parallel sequences indexed by log-size `k ∈ [0, S]`:
//!
//! - `forward[k]`: primitive `2^k`-th root of unity,
//! - `inverse[k]`: its inverse,
//! - `size_inverse[k]`: `(2^k)^{-1}`.
//!
//! The published table borrows `static` data. Derived or hand-assembled tables
//! own their sequences. Either way nothing is mutable after construction.

use std::borrow::Cow;

use bbntt_field::{BabyBear as F, FieldError};
use tracing::debug;

use crate::constants::{
    DOMAIN_SIZE_INVERSE, FORWARD_ROOTS, GROUP_GENERATOR, GROUP_GENERATOR_INVERSE, INVERSE_ROOTS,
    TABLE_LEN, TWO_ADICITY,
};
use crate::error::ParameterError;

const fn lift(words: [u32; TABLE_LEN]) -> [F; TABLE_LEN] {
    let mut out = [F::ZERO; TABLE_LEN];
    let mut k = 0;
    while k < TABLE_LEN {
        out[k] = F::from_montgomery(words[k]);
        k += 1;
    }
    out
}

static PUBLISHED_FORWARD: [F; TABLE_LEN] = lift(FORWARD_ROOTS);
static PUBLISHED_INVERSE: [F; TABLE_LEN] = lift(INVERSE_ROOTS);
static PUBLISHED_SIZE_INVERSE: [F; TABLE_LEN] = lift(DOMAIN_SIZE_INVERSE);

/// Generator, generator inverse and the three per-size tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainTable {
    generator: F,
    generator_inverse: F,
    forward: Cow<'static, [F]>,
    inverse: Cow<'static, [F]>,
    size_inverse: Cow<'static, [F]>,
}

impl DomainTable {
    /// The published BabyBear table. Borrows static data; no allocation.
    #[must_use]
    pub fn published() -> Self {
        Self {
            generator: F::from_montgomery(GROUP_GENERATOR),
            generator_inverse: F::from_montgomery(GROUP_GENERATOR_INVERSE),
            forward: Cow::Borrowed(&PUBLISHED_FORWARD),
            inverse: Cow::Borrowed(&PUBLISHED_INVERSE),
            size_inverse: Cow::Borrowed(&PUBLISHED_SIZE_INVERSE),
        }
    }

    /// Build a table from an element of order `2^S` by repeated squaring.
    ///
    /// `forward[S] = two_adic_generator`, `forward[k] = forward[k+1]^2`;
    /// inverses and size inverses are computed by direct inversion.
    ///
    /// # Errors
    /// [`FieldError::DivisionByZero`] if `two_adic_generator` is zero.
    pub fn derive(
        two_adic_generator: F,
        generator: F,
        generator_inverse: F,
    ) -> Result<Self, FieldError> {
        let forward = squaring_chain(two_adic_generator);
        let inverse = forward
            .iter()
            .map(|r| r.inverse())
            .collect::<Result<Vec<_>, _>>()?;
        let size_inverse = (0..TABLE_LEN)
            .map(|k| F::from_canonical(1u32 << k).inverse())
            .collect::<Result<Vec<_>, _>>()?;
        debug!(root = %two_adic_generator, "derived domain table");

        Ok(Self::from_parts(
            generator,
            generator_inverse,
            forward,
            inverse,
            size_inverse,
        ))
    }

    /// Assemble a table from arbitrary sequences. Nothing is checked here;
    /// see [`DomainTable::validate`].
    #[must_use]
    pub fn from_parts(
        generator: F,
        generator_inverse: F,
        forward: Vec<F>,
        inverse: Vec<F>,
        size_inverse: Vec<F>,
    ) -> Self {
        Self {
            generator,
            generator_inverse,
            forward: Cow::Owned(forward),
            inverse: Cow::Owned(inverse),
            size_inverse: Cow::Owned(size_inverse),
        }
    }

    /// Run every consistency check.
    ///
    /// # Errors
    /// The first [`ParameterError`] encountered.
    pub fn validate(&self) -> Result<(), ParameterError> {
        crate::validate::validate(self)
    }

    /// Coset generator `g`.
    #[inline]
    #[must_use]
    pub const fn generator(&self) -> F {
        self.generator
    }

    /// `g^{-1}`.
    #[inline]
    #[must_use]
    pub const fn generator_inverse(&self) -> F {
        self.generator_inverse
    }

    /// Forward roots, indexed by log-size.
    #[inline]
    #[must_use]
    pub fn forward(&self) -> &[F] {
        &self.forward
    }

    /// Inverse roots, indexed by log-size.
    #[inline]
    #[must_use]
    pub fn inverse(&self) -> &[F] {
        &self.inverse
    }

    /// `(2^k)^{-1}`, indexed by `k`.
    #[inline]
    #[must_use]
    pub fn size_inverse(&self) -> &[F] {
        &self.size_inverse
    }

    /// The root of largest order (`forward[S]`), if the table is non-empty.
    #[inline]
    #[must_use]
    pub fn two_adic_generator(&self) -> Option<F> {
        self.forward.last().copied()
    }
}

impl Default for DomainTable {
    fn default() -> Self {
        Self::published()
    }
}

/// `[top^(2^S), …, top^2, top]`: entry `k` is `top^(2^(S-k))`.
#[must_use]
pub fn squaring_chain(top: F) -> Vec<F> {
    let mut chain = vec![F::ZERO; TABLE_LEN];
    let mut cur = top;
    for k in (0..=TWO_ADICITY).rev() {
        chain[k] = cur;
        cur = cur.square();
    }
    chain
}

/// Inverse roots obtained by squaring down from `forward[S]^{-1}`.
///
/// Must agree entry-for-entry with inverting each forward root.
#[must_use]
pub fn inverse_roots_by_squaring(root_inverse: F) -> Vec<F> {
    squaring_chain(root_inverse)
}
