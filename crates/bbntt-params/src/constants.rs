//! Published BabyBear domain constants, as Montgomery words (`x · 2^32 mod p`).
//!
//! The root tables follow the Plonky3 root ordering: `FORWARD_ROOTS[k]` is
//! `ω_27^(2^(27-k))` for the two-adic generator `ω_27 = 31^15`. These words are
//! the ground truth; [`crate::validate`] checks them, it never regenerates them.

/// 2-adicity of `p - 1`: the largest supported transform is `2^27` points.
pub const TWO_ADICITY: usize = 27;

/// Entries per table (`TWO_ADICITY + 1`, one per log-size `0..=27`).
pub const TABLE_LEN: usize = TWO_ADICITY + 1;

/// Multiplicative generator used as the coset shift (canonical `3`).
pub const GROUP_GENERATOR: u32 = 0x2fff_fffa;

/// Inverse of [`GROUP_GENERATOR`] (canonical `1342177281`).
pub const GROUP_GENERATOR_INVERSE: u32 = 0x2d55_5555;

/// `FORWARD_ROOTS[k]` has multiplicative order exactly `2^k`.
pub const FORWARD_ROOTS: [u32; TABLE_LEN] = [
    0x0fff_fffe, 0x6800_0003, 0x1c38_d511, 0x3d85_298f,
    0x5f06_e481, 0x3f5c_39ec, 0x5516_a97a, 0x3d6b_e592,
    0x5bb0_4149, 0x4907_f9ab, 0x548b_8e90, 0x1d8c_a617,
    0x2ce7_f0e6, 0x621b_371f, 0x6d4d_2d78, 0x1871_6fcd,
    0x3b30_a682, 0x1c6f_4728, 0x59b0_1f7c, 0x1a7f_97ac,
    0x0732_561c, 0x2b5a_1cd4, 0x6f7d_26f9, 0x16e2_f919,
    0x285a_b85b, 0x0dd5_a9ec, 0x43f1_3568, 0x57fa_b6ee,
];

/// Element of order exactly `2^27` (canonical `440564289 = 31^15`), the last
/// forward root.
pub const TWO_ADIC_GENERATOR: u32 = FORWARD_ROOTS[TWO_ADICITY];

/// `INVERSE_ROOTS[k] = FORWARD_ROOTS[k]^{-1}`.
pub const INVERSE_ROOTS: [u32; TABLE_LEN] = [
    0x0fff_fffe, 0x6800_0003, 0x5bc7_2af0, 0x02ec_07f3,
    0x67e0_27ca, 0x5e1a_0700, 0x4bcc_008c, 0x0bed_94d1,
    0x330b_2e00, 0x6b46_9805, 0x0d83_fad2, 0x26e6_4394,
    0x0855_523b, 0x5c9f_0045, 0x5a7b_a8c3, 0x3c8b_04e2,
    0x0c0f_2066, 0x1b51_d34c, 0x59f9_bc12, 0x3511_f012,
    0x061e_c85f, 0x5fd0_9c6b, 0x26bd_c06c, 0x1272_832e,
    0x052c_e2e8, 0x02ff_110d, 0x216c_e204, 0x5e12_c8e9,
];

/// `DOMAIN_SIZE_INVERSE[k] = (2^k)^{-1}`, the INTT rescaling factor.
pub const DOMAIN_SIZE_INVERSE: [u32; TABLE_LEN] = [
    0x0fff_fffe, 0x07ff_ffff, 0x4000_0000, 0x2000_0000,
    0x1000_0000, 0x0800_0000, 0x0400_0000, 0x0200_0000,
    0x0100_0000, 0x0080_0000, 0x0040_0000, 0x0020_0000,
    0x0010_0000, 0x0008_0000, 0x0004_0000, 0x0002_0000,
    0x0001_0000, 0x0000_8000, 0x0000_4000, 0x0000_2000,
    0x0000_1000, 0x0000_0800, 0x0000_0400, 0x0000_0200,
    0x0000_0100, 0x0000_0080, 0x0000_0040, 0x0000_0020,
];
