//! Consistency checks for a [`DomainTable`].
//!
//! Transcribed constants fail silently downstream: a wrong root still produces
//! plausible-looking transform output. Every table is therefore checked once
//! before it is served, in this order:
//!
//! 1. table lengths are exactly `S + 1`;
//! 2. `forward[S]` has order exactly `2^S`, and the coset generator lies
//!    outside that subgroup;
//! 3. `g · g^{-1} = 1`;
//! 4. each `forward[k]` is a primitive `2^k`-th root;
//! 5. `forward[k] = forward[k+1]^2`;
//! 6. `forward[k] · inverse[k] = 1`;
//! 7. `size_inverse[k] · 2^k = 1`.

use bbntt_field::BabyBear as F;
use tracing::debug;

use crate::constants::{TABLE_LEN, TWO_ADICITY};
use crate::error::{Generator, ParameterError, TableKind};
use crate::table::DomainTable;

/// Run every check; return the first failure.
///
/// # Errors
/// The [`ParameterError`] variant naming the first failed check.
pub fn validate(table: &DomainTable) -> Result<(), ParameterError> {
    check_lengths(table)?;
    check_generators(table)?;
    check_roots(table)?;
    debug!(entries = TABLE_LEN, "domain table validated");
    Ok(())
}

fn check_lengths(table: &DomainTable) -> Result<(), ParameterError> {
    for (kind, len) in [
        (TableKind::Forward, table.forward().len()),
        (TableKind::Inverse, table.inverse().len()),
        (TableKind::SizeInverse, table.size_inverse().len()),
    ] {
        if len != TABLE_LEN {
            return Err(ParameterError::TableLengthMismatch {
                table: kind,
                expected: TABLE_LEN,
                found: len,
            });
        }
    }
    Ok(())
}

/// `x` is a primitive `2^k`-th root of unity.
#[inline]
fn is_primitive_root(x: F, k: usize) -> bool {
    if k == 0 {
        return x == F::ONE;
    }
    let half = x.exp_power_of_2(k - 1);
    half != F::ONE && half.square() == F::ONE
}

fn check_generators(table: &DomainTable) -> Result<(), ParameterError> {
    let two_adic = table.forward()[TWO_ADICITY];
    if !is_primitive_root(two_adic, TWO_ADICITY) {
        return Err(ParameterError::WrongOrder(Generator::TwoAdic));
    }
    if table.generator().exp_power_of_2(TWO_ADICITY) == F::ONE {
        return Err(ParameterError::WrongOrder(Generator::Coset));
    }
    if table.generator() * table.generator_inverse() != F::ONE {
        return Err(ParameterError::InconsistentInverse);
    }
    debug!(two_adic = %two_adic, coset = %table.generator(), "generators ok");
    Ok(())
}

fn check_roots(table: &DomainTable) -> Result<(), ParameterError> {
    let forward = table.forward();

    if let Some(k) = (0..TABLE_LEN).find(|&k| !is_primitive_root(forward[k], k)) {
        return Err(ParameterError::RootNotPrimitive(k));
    }
    if let Some(k) = (0..TWO_ADICITY).find(|&k| forward[k] != forward[k + 1].square()) {
        return Err(ParameterError::BrokenSquaringChain(k));
    }
    if let Some(k) = forward
        .iter()
        .zip(table.inverse())
        .position(|(&w, &w_inv)| w * w_inv != F::ONE)
    {
        return Err(ParameterError::RootInverseMismatch(k));
    }
    if let Some(k) = table
        .size_inverse()
        .iter()
        .enumerate()
        .position(|(k, &s)| s * F::from_canonical(1u32 << k) != F::ONE)
    {
        return Err(ParameterError::SizeInverseMismatch(k));
    }
    Ok(())
}
