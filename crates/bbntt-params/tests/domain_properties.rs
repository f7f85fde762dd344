//! Domain-table properties through the public lookup API.
//!
//! Invariants tested:
//! 1) every served root is a primitive `2^k`-th root and its inverse matches;
//! 2) every served size inverse rescales `2^k` to one;
//! 3) sizes beyond the 2-adicity are refused;
//! 4) lookups are value copies and safe from many threads at once.

#![allow(clippy::unwrap_used)]

use std::thread;

use bbntt_field::BabyBear as F;
use bbntt_params::{
    roots_for_size, DomainParameters, DomainTable, ProviderError, TABLE_LEN, TWO_ADICITY,
};
use proptest::prelude::*;

#[test]
fn every_size_is_consistent() {
    for k in 0..=TWO_ADICITY as u32 {
        let r = roots_for_size(k).unwrap();
        assert_eq!(r.log2_size, k);
        assert_eq!(r.forward_root * r.inverse_root, F::ONE, "k = {k}");
        assert_eq!(r.size_inverse * F::from_canonical(1u32 << k), F::ONE, "k = {k}");
        assert_eq!(r.forward_root.exp_power_of_2(k as usize), F::ONE, "k = {k}");
        if k > 0 {
            assert_ne!(r.forward_root.exp_power_of_2(k as usize - 1), F::ONE, "k = {k}");
        }
    }
}

#[test]
fn oversized_requests_are_refused() {
    for k in [TWO_ADICITY as u32 + 1, 31, 64, u32::MAX] {
        assert_eq!(
            roots_for_size(k),
            Err(ProviderError::UnsupportedSize {
                requested: k,
                max: TWO_ADICITY as u32,
            })
        );
    }
}

#[test]
fn largest_size_uses_the_two_adic_generator() {
    let r = roots_for_size(27).unwrap();
    assert_eq!(r.forward_root.to_canonical(), 440_564_289);
    assert_eq!(r.forward_root.pow(1 << 27), F::ONE);
    assert_ne!(r.forward_root.pow(1 << 26), F::ONE);
    assert_eq!(r.size_inverse.to_canonical(), 2_013_265_906);
}

#[test]
fn returned_copies_do_not_alias_the_table() {
    let params = DomainParameters::global().unwrap();
    let mut r = params.roots_for_size(5).unwrap();
    r.forward_root = F::ZERO;
    r.size_inverse += F::ONE;

    let fresh = params.roots_for_size(5).unwrap();
    assert_ne!(fresh.forward_root, F::ZERO);
    assert_eq!(fresh.forward_root, params.table().forward()[5]);
    assert_eq!(fresh.size_inverse, params.table().size_inverse()[5]);
}

#[test]
fn global_is_shared_and_thread_safe() {
    let handles: Vec<_> = (0..8u32)
        .map(|t| {
            thread::spawn(move || {
                let params = DomainParameters::global().unwrap();
                (0..=27u32)
                    .map(|k| params.roots_for_size((k + t) % 28).unwrap())
                    .map(|r| r.forward_root * r.inverse_root)
                    .all(|x| x == F::ONE)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }

    let a = DomainParameters::global().unwrap();
    let b = DomainParameters::global().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn explicit_provider_matches_global() {
    let local = DomainParameters::new(DomainTable::published()).unwrap();
    let global = DomainParameters::global().unwrap();
    for k in 0..TABLE_LEN as u32 {
        assert_eq!(local.roots_for_size(k), global.roots_for_size(k));
    }
    assert_eq!(local.coset_shift().to_canonical(), 3);
    assert_eq!(local.coset_shift() * local.coset_shift_inverse(), F::ONE);
}

#[test]
fn roots_serialize_as_canonical_integers() {
    let r = roots_for_size(1).unwrap();
    let v: serde_json::Value = serde_json::to_value(r).unwrap();
    assert_eq!(v["log2_size"], 1);
    assert_eq!(v["forward_root"], 2_013_265_920u64);
    assert_eq!(v["inverse_root"], 2_013_265_920u64);
    assert_eq!(v["size_inverse"], 1_006_632_961u64);
}

proptest! {
    #[test]
    fn root_powers_cycle(k in 1u32..=27, i in 0u64..1 << 20) {
        let r = roots_for_size(k).unwrap();
        let n = 1u64 << k;
        // ω^i · ω^{-i} = 1 and ω^(i + n) = ω^i.
        prop_assert_eq!(r.forward_root.pow(i) * r.inverse_root.pow(i), F::ONE);
        prop_assert_eq!(r.forward_root.pow(i + n), r.forward_root.pow(i));
    }
}
