// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over the hash primitive

use alloc::vec;

use smallvec::SmallVec;

use crate::hash::HkdfHash;
use crate::zeroize::zeroize_slice;

/// HMAC(key, parts[0] || parts[1] || ...) written to `out`.
///
/// `out.len()` must equal the hash's digest size. The multi-part message
/// lets callers stream `T(i-1) || info || counter` without concatenating
/// into a scratch buffer. Pads, the key block, and the inner digest are
/// zeroized before return.
pub(crate) fn hmac_into<H: HkdfHash + ?Sized>(
    hash: &H,
    key: &[u8],
    parts: &[&[u8]],
    out: &mut [u8],
) {
    let block_len = hash.block_len();
    let digest_len = hash.digest_len();

    // If key > block_len, hash it first per RFC 2104
    let mut key_block = vec![0u8; block_len];
    let key_len = if key.len() > block_len {
        hash.hash_into(&[key], &mut key_block[..digest_len]);
        digest_len
    } else {
        key_block[..key.len()].copy_from_slice(key);
        key.len()
    };

    // XOR key with ipad and opad
    let mut k_ipad = vec![0x36u8; block_len];
    let mut k_opad = vec![0x5cu8; block_len];
    for i in 0..key_len {
        k_ipad[i] ^= key_block[i];
        k_opad[i] ^= key_block[i];
    }

    // Inner hash: H(k_ipad || parts...)
    let mut inner_hash = vec![0u8; digest_len];
    {
        let mut inner_parts: SmallVec<[&[u8]; 5]> = SmallVec::new();
        inner_parts.push(k_ipad.as_slice());
        inner_parts.extend(parts.iter().copied());
        hash.hash_into(&inner_parts, &mut inner_hash);
    }

    // Outer hash: H(k_opad || inner_hash)
    hash.hash_into(&[k_opad.as_slice(), inner_hash.as_slice()], out);

    // Zeroize intermediates
    zeroize_slice(&mut k_ipad);
    zeroize_slice(&mut k_opad);
    zeroize_slice(&mut key_block);
    zeroize_slice(&mut inner_hash);
}
