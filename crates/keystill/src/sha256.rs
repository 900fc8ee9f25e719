// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per RFC 6234 Section 6.2

use crate::hash::HkdfHash;
use crate::zeroize::zeroize_slice;

/// SHA-256 output size in bytes
pub(crate) const HASH_LEN: usize = 32;

/// SHA-256 block size in bytes
pub(crate) const BLOCK_LEN: usize = 64;

/// SHA-256 constants K per RFC 6234 Section 5.1
/// First 32 bits of fractional parts of cube roots of first 64 primes
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) per RFC 6234 Section 6.2.1
/// First 32 bits of fractional parts of square roots of first 8 primes
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Rotate right
#[inline(always)]
const fn rotr(x: u32, n: u32) -> u32 {
    (x >> n) | (x << (32 - n))
}

/// SHA-256 logical functions per RFC 6234 Section 5.1
#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
const fn bsig0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

#[inline(always)]
const fn bsig1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

#[inline(always)]
const fn ssig0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

#[inline(always)]
const fn ssig1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

/// SHA-256 streaming state
pub(crate) struct Sha256State {
    h: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Sha256State {
    /// Create new SHA-256 state
    pub fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Update state with data
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len += data.len() as u64;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;

            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                self.compress_block(&self.buffer.clone());
                self.buffer_len = 0;
            }
        }

        // Process full blocks
        while offset + BLOCK_LEN <= data.len() {
            let block: [u8; BLOCK_LEN] = data[offset..offset + BLOCK_LEN].try_into().unwrap();
            self.compress_block(&block);

            offset += BLOCK_LEN;
        }

        // Buffer remaining
        if offset < data.len() {
            let remaining = data.len() - offset;

            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Finalize and output hash
    pub fn finalize(mut self, out: &mut [u8; HASH_LEN]) {
        // Padding: append 1 bit, then zeros, then 64-bit length
        let bit_len = self.total_len * 8;

        // Append 0x80
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // If not enough space for length (8 bytes), pad and compress
        if self.buffer_len > BLOCK_LEN - 8 {
            for i in self.buffer_len..BLOCK_LEN {
                self.buffer[i] = 0;
            }

            self.compress_block(&self.buffer.clone());
            self.buffer_len = 0;
        }

        // Pad with zeros up to length field
        for i in self.buffer_len..BLOCK_LEN - 8 {
            self.buffer[i] = 0;
        }

        // Append 64-bit length in big-endian
        self.buffer[BLOCK_LEN - 8..BLOCK_LEN].copy_from_slice(&bit_len.to_be_bytes());

        self.compress_block(&self.buffer.clone());

        // Output hash
        for (i, &word) in self.h.iter().enumerate() {
            out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }

        // Zeroize state
        self.zeroize();
    }

    /// Compress one 64-byte block
    fn compress_block(&mut self, block: &[u8; BLOCK_LEN]) {
        let mut w = [0u32; 64];

        // Prepare message schedule
        for t in 0..16 {
            w[t] = u32::from_be_bytes(block[t * 4..(t + 1) * 4].try_into().unwrap());
        }
        for t in 16..64 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        // Initialize working variables
        let mut a = self.h[0];
        let mut b = self.h[1];
        let mut c = self.h[2];
        let mut d = self.h[3];
        let mut e = self.h[4];
        let mut f = self.h[5];
        let mut g = self.h[6];
        let mut h = self.h[7];

        // 64 rounds
        for t in 0..64 {
            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[t])
                .wrapping_add(w[t]);
            let t2 = bsig0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        // Update hash values
        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);
        self.h[5] = self.h[5].wrapping_add(f);
        self.h[6] = self.h[6].wrapping_add(g);
        self.h[7] = self.h[7].wrapping_add(h);

        // Zeroize w
        for word in &mut w {
            unsafe {
                core::ptr::write_volatile(word, 0);
            }
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }

    /// Zeroize internal state
    fn zeroize(&mut self) {
        for word in &mut self.h {
            unsafe {
                core::ptr::write_volatile(word, 0);
            }
        }
        zeroize_slice(&mut self.buffer);
        unsafe {
            core::ptr::write_volatile(&mut self.buffer_len, 0);
            core::ptr::write_volatile(&mut self.total_len, 0);
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }
}

/// One-shot SHA-256
pub(crate) fn sha256(data: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut state = Sha256State::new();
    state.update(data);
    state.finalize(out);
}

/// SHA-256 hash primitive (digest 32 bytes, block 64 bytes)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl HkdfHash for Sha256 {
    fn digest_len(&self) -> usize {
        HASH_LEN
    }

    fn block_len(&self) -> usize {
        BLOCK_LEN
    }

    fn hash_into(&self, parts: &[&[u8]], out: &mut [u8]) {
        debug_assert_eq!(out.len(), HASH_LEN);

        let mut state = Sha256State::new();
        for part in parts {
            state.update(part);
        }

        let mut digest = [0u8; HASH_LEN];
        state.finalize(&mut digest);
        out.copy_from_slice(&digest);
        zeroize_slice(&mut digest);
    }
}
