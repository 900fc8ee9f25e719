// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `hkdf-expand` - expand a pseudorandom key into output keying material
//! using the HKDF expand step (RFC 5869). The HMAC hash is SHA-256.
//!
//! The key is read raw from a file or standard input; the derived bytes
//! are written raw to standard output, with no encoding and no trailing
//! newline.

use std::fs::File;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use keystill::{Sha256, expand};

#[derive(Parser)]
#[command(
    name = "hkdf-expand",
    about = "Generates pseudorandom key material using the HKDF expand step \
             described in RFC 5869. Hash function used for HMAC is SHA-256."
)]
struct Cli {
    /// Optional context and application specific information, defaults to
    /// the empty string
    #[clap(long, short, default_value = "")]
    info: String,

    /// Path to the pseudorandom key, use "-" for reading from standard
    /// input
    #[clap(long, short, default_value = "-")]
    key: String,

    /// Desired length of output material in bytes
    #[clap(long, short, default_value_t = 32)]
    length: u32,

    /// Append the requested length to info, encoded as big-endian binary;
    /// using this flag prevents shorter keys being prefixes to longer keys
    #[clap(long = "append-length", short = 'L', action)]
    append_length: bool,

    /// Print extra details about inputs and output
    #[clap(long, short, action)]
    verbose: bool,
}

/// Info bytes for the expansion, with the big-endian length appended when
/// requested (RFC 5869 Section 3.2 "The 'info' Input to HKDF")
fn effective_info(info: &str, length: u32, append_length: bool) -> Vec<u8> {
    let mut info = info.as_bytes().to_vec();
    if append_length {
        info.extend_from_slice(&length.to_be_bytes());
    }
    info
}

fn read_key(path: &str) -> Result<Vec<u8>> {
    let mut key = Vec::new();
    if path == "-" {
        io::stdin()
            .read_to_end(&mut key)
            .context("failed to read key from standard input")?;
    } else {
        File::open(path)
            .with_context(|| format!("failed to open key file {path}"))?
            .read_to_end(&mut key)
            .with_context(|| format!("failed to read key file {path}"))?;
    }
    Ok(key)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = Builder::new();
    builder.filter_level(if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });
    builder.init();

    let prk = read_key(&cli.key)?;
    let info = effective_info(&cli.info, cli.length, cli.append_length);

    log::debug!(
        "expanding {} key bytes from {} into {} output bytes ({} info bytes)",
        prk.len(),
        if cli.key == "-" {
            "stdin"
        } else {
            cli.key.as_str()
        },
        cli.length,
        info.len()
    );

    let mut okm = vec![0u8; cli.length as usize];
    expand(&Sha256, &prk, &info, &mut okm)?;

    io::stdout()
        .write_all(&okm)
        .context("failed to write output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::effective_info;

    #[test]
    fn test_effective_info_plain() {
        assert_eq!(effective_info("context", 32, false), b"context");
    }

    #[test]
    fn test_effective_info_appends_big_endian_length() {
        assert_eq!(
            effective_info("context", 42, true),
            b"context\x00\x00\x00\x2a"
        );
    }

    #[test]
    fn test_effective_info_empty() {
        assert_eq!(effective_info("", 32, false), b"");
        assert_eq!(effective_info("", 32, true), b"\x00\x00\x00\x20");
    }
}
