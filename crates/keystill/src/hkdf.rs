// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF extract and expand per RFC 5869

use alloc::vec;
use alloc::vec::Vec;

use crate::error::HkdfError;
use crate::hash::HkdfHash;
use crate::hmac::hmac_into;
use crate::zeroize::zeroize_slice;

/// HKDF-Extract per RFC 5869 Section 2.2
///
/// PRK = HMAC-Hash(salt, IKM). The returned PRK is exactly
/// `hash.digest_len()` bytes.
///
/// An empty salt is replaced by `digest_len()` zero bytes. Conventions
/// differ here for hashes whose block size is not the digest size (SHA-512:
/// digest 64, block 128); this crate pins the digest-size reading, see the
/// regression tests.
pub fn extract<H: HkdfHash + ?Sized>(hash: &H, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
    let digest_len = hash.digest_len();
    let mut prk = vec![0u8; digest_len];

    if salt.is_empty() {
        let zero_salt = vec![0u8; digest_len];
        hmac_into(hash, &zero_salt, &[ikm], &mut prk);
    } else {
        hmac_into(hash, salt, &[ikm], &mut prk);
    }

    prk
}

/// HKDF-Expand per RFC 5869 Section 2.3
///
/// N = ceil(L/HashLen)
/// T(0) = empty string
/// T(i) = HMAC-Hash(PRK, T(i-1) | info | i)
/// OKM = first L octets of T(1) | T(2) | ... | T(N)
///
/// Derives exactly `okm.len()` bytes; an empty `okm` is valid and performs
/// no HMAC work.
///
/// # Errors
/// Returns [`HkdfError::OutputTooLong`] if `okm.len()` exceeds
/// `255 * digest_len()`, checked before any computation.
pub fn expand<H: HkdfHash + ?Sized>(
    hash: &H,
    prk: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    let digest_len = hash.digest_len();
    let out_len = okm.len();
    let max = 255 * digest_len;

    if out_len > max {
        return Err(HkdfError::OutputTooLong {
            requested: out_len,
            max,
        });
    }
    if out_len == 0 {
        return Ok(());
    }

    let n = out_len.div_ceil(digest_len);

    let mut t_prev = vec![0u8; digest_len];
    let mut t_prev_len = 0usize;
    let mut t_curr = vec![0u8; digest_len];
    let mut offset = 0usize;

    for i in 1..=n {
        // T(i) = HMAC-Hash(PRK, T(i-1) || info || i); the counter fits in
        // one byte because out_len <= 255 * digest_len
        let counter = [i as u8];
        hmac_into(
            hash,
            prk,
            &[&t_prev[..t_prev_len], info, &counter],
            &mut t_curr,
        );

        // Copy to output, truncating the final block
        let copy_len = core::cmp::min(digest_len, out_len - offset);
        okm[offset..offset + copy_len].copy_from_slice(&t_curr[..copy_len]);
        offset += copy_len;

        // T(i-1) = T(i) for next iteration
        t_prev.copy_from_slice(&t_curr);
        t_prev_len = digest_len;
    }

    // Zeroize chaining blocks
    zeroize_slice(&mut t_prev);
    zeroize_slice(&mut t_curr);

    Ok(())
}

/// Full HKDF: Extract-then-Expand
///
/// Derives `okm.len()` bytes from the input keying material. The
/// intermediate PRK is zeroized before return.
///
/// # Errors
/// Returns [`HkdfError::OutputTooLong`] if `okm.len()` exceeds
/// `255 * digest_len()`.
pub fn hkdf<H: HkdfHash + ?Sized>(
    hash: &H,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    let mut prk = extract(hash, salt, ikm);
    let result = expand(hash, &prk, info, okm);
    zeroize_slice(&mut prk);
    result
}

/// Derivation handle binding a PRK to its hash primitive.
///
/// Runs extract once; repeated expansions with different `info`/length
/// reuse the cached PRK without re-extracting. The PRK is read-only after
/// construction (all methods take `&self`, each builds fresh HMAC state)
/// and is zeroized on drop.
pub struct Hkdf<H: HkdfHash> {
    hash: H,
    prk: Vec<u8>,
}

impl<H: HkdfHash> Hkdf<H> {
    /// Extract a PRK from `salt` and `ikm` and bind it to `hash`
    pub fn new(hash: H, salt: &[u8], ikm: &[u8]) -> Self {
        let prk = extract(&hash, salt, ikm);
        Self { hash, prk }
    }

    /// Bind an existing PRK, as produced by [`extract`], to `hash`
    pub fn from_prk(hash: H, prk: &[u8]) -> Self {
        Self {
            hash,
            prk: prk.to_vec(),
        }
    }

    /// Pseudorandom key cached by this handle
    pub fn prk(&self) -> &[u8] {
        &self.prk
    }

    /// HKDF-Expand into `okm` using the cached PRK
    ///
    /// # Errors
    /// Returns [`HkdfError::OutputTooLong`] if `okm.len()` exceeds
    /// `255 * digest_len()`.
    pub fn expand(&self, info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
        expand(&self.hash, &self.prk, info, okm)
    }

    /// HKDF-Expand `len` bytes, allocating the output
    ///
    /// # Errors
    /// Returns [`HkdfError::OutputTooLong`] if `len` exceeds
    /// `255 * digest_len()`, before any allocation.
    pub fn expand_vec(&self, info: &[u8], len: usize) -> Result<Vec<u8>, HkdfError> {
        let max = 255 * self.hash.digest_len();
        if len > max {
            return Err(HkdfError::OutputTooLong {
                requested: len,
                max,
            });
        }

        let mut okm = vec![0u8; len];
        self.expand(info, &mut okm)?;
        Ok(okm)
    }
}

impl<H: HkdfHash> Drop for Hkdf<H> {
    fn drop(&mut self) {
        zeroize_slice(&mut self.prk);
    }
}
