// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash primitive capability interface

use alloc::vec;
use alloc::vec::Vec;

/// Hash primitive required by HKDF.
///
/// Keeps the "which hash" decision orthogonal to the extract/expand logic:
/// both take the primitive as an explicit parameter instead of baking a
/// default into the algorithm. Implementations must be deterministic and
/// build fresh state per call, so one value can serve concurrent callers.
pub trait HkdfHash {
    /// Digest size in bytes
    fn digest_len(&self) -> usize;

    /// Internal block size in bytes, used for HMAC key padding
    fn block_len(&self) -> usize;

    /// Hash the concatenation of `parts` into `out`.
    ///
    /// `out.len()` must equal `digest_len()`.
    fn hash_into(&self, parts: &[&[u8]], out: &mut [u8]);

    /// HMAC(key, message) per RFC 2104
    fn hmac(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; self.digest_len()];
        crate::hmac::hmac_into(self, key, &[message], &mut out);
        out
    }
}
