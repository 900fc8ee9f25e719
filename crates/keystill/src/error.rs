// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// HKDF error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HkdfError {
    /// Requested output length exceeds maximum (255 * digest size)
    #[error("requested output length {requested} exceeds maximum {max} (255 * digest size)")]
    OutputTooLong {
        /// Requested output length in bytes
        requested: usize,
        /// Maximum output length for the chosen hash
        max: usize,
    },
}
