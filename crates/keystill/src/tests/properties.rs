// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Property tests for extract and expand

use proptest::prelude::*;

use crate::hkdf::{Hkdf, expand, extract};
use crate::sha256::Sha256;
use crate::sha512::Sha512;

fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..=max_len)
}

proptest! {
    /// PRK is always digest-sized and deterministic
    #[test]
    fn prop_extract_deterministic(salt in bytes(96), ikm in bytes(96)) {
        let prk1 = extract(&Sha256, &salt, &ikm);
        let prk2 = extract(&Sha256, &salt, &ikm);
        prop_assert_eq!(&prk1, &prk2);
        prop_assert_eq!(prk1.len(), 32);

        let prk512 = extract(&Sha512, &salt, &ikm);
        prop_assert_eq!(prk512.len(), 64);
    }

    /// Expand yields exactly the requested number of bytes, deterministically
    #[test]
    fn prop_expand_exact_length(
        salt in bytes(48),
        ikm in bytes(48),
        info in bytes(48),
        len in 0usize..2048,
    ) {
        let handle = Hkdf::new(Sha256, &salt, &ikm);

        let okm1 = handle.expand_vec(&info, len).unwrap();
        let okm2 = handle.expand_vec(&info, len).unwrap();

        prop_assert_eq!(okm1.len(), len);
        prop_assert_eq!(okm1, okm2);
    }

    /// A shorter expansion is a byte-for-byte prefix of a longer one
    #[test]
    fn prop_expand_prefix(
        ikm in bytes(48),
        info in bytes(48),
        l1 in 0usize..512,
        l2 in 0usize..512,
    ) {
        let (short_len, long_len) = if l1 <= l2 { (l1, l2) } else { (l2, l1) };

        let prk = extract(&Sha256, &[], &ikm);

        let mut short = vec![0u8; short_len];
        let mut long = vec![0u8; long_len];
        expand(&Sha256, &prk, &info, &mut short).unwrap();
        expand(&Sha256, &prk, &info, &mut long).unwrap();

        prop_assert_eq!(&short[..], &long[..short_len]);
    }
}
