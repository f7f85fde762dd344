//! Reference NTT over BabyBear, driven by the validated domain tables.
//!
//! - `ntt`: in-place radix-2 NTT/INTT (natural order in and out) whose stage
//!   roots and `n^{-1}` come from [`bbntt_params::DomainParameters`].
//! - `domain`, `twiddle`: power-of-two subgroup helpers.
//! - `coset`: coset evaluation / interpolation for low-degree extensions,
//!   shifted by the table's group generator.
//! - [`dft`] / [`idft`]: naive **O(n²)** transforms, used as a test oracle.

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

pub mod coset;
pub mod domain;
pub mod error;
pub mod ntt;
pub mod twiddle;

pub use bbntt_field::BabyBear;
pub use domain::{pow2_domain, Pow2Domain};
pub use error::NttError;

use bbntt_field::{BabyBear as F, P};

/// Naive DFT: `y_k = Σ_j a_j · ω^(j·k)`. Complexity **O(n²)**.
#[must_use]
pub fn dft(a: &[F], omega: F) -> Vec<F> {
    let n = a.len() as u64;
    (0..n)
        .map(|k| {
            a.iter()
                .zip(0..n)
                .map(|(&aj, j)| aj * omega.pow(j * k))
                .sum()
        })
        .collect()
}

/// Inverse DFT: `a_j = n^{-1} · Σ_k y_k · ω^(-j·k)`. Complexity **O(n²)**.
///
/// # Errors
/// [`NttError::Field`] if `omega` is zero or `n ≡ 0 (mod p)`.
pub fn idft(y: &[F], omega: F) -> Result<Vec<F>, NttError> {
    #[allow(clippy::cast_possible_truncation)]
    let n_mod_p = (y.len() as u64 % u64::from(P)) as u32;
    let inv_n = F::from_canonical(n_mod_p).inverse()?;
    let omega_inv = omega.inverse()?;
    Ok(dft(y, omega_inv).into_iter().map(|x| x * inv_n).collect())
}
