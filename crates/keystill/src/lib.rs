// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF extract-and-expand key derivation with pluggable hash primitives
//!
//! Implementation per RFC 5869 (HKDF), RFC 2104 (HMAC), and RFC 6234
//! (SHA-256, SHA-512). Zero external crypto dependencies. All intermediate
//! key material is zeroized.
//!
//! The hash primitive is an explicit parameter at every call site: extract
//! and expand are generic over [`HkdfHash`], and the crate ships [`Sha256`]
//! and [`Sha512`] implementations. The [`Hkdf`] handle caches a PRK so
//! repeated expansions with different `info`/length reuse one extraction.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hash;
mod hkdf;
mod hmac;
mod sha256;
mod sha512;
mod zeroize;

pub use error::HkdfError;
pub use hash::HkdfHash;
pub use hkdf::{Hkdf, expand, extract, hkdf};
pub use sha256::Sha256;
pub use sha512::Sha512;
