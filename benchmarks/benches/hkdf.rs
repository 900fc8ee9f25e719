// Copyright (c) 2026 Keystill contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! keystill vs RustCrypto hkdf key derivation benchmark
//!
//! Typical usage: derive 128/256-bit keys from a 64-byte master key and
//! 16-byte salt.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use hkdf::Hkdf as RcHkdf;
use keystill::{Sha256, Sha512, hkdf};
use sha2::Sha256 as RcSha256;

const IKM: [u8; 64] = [0x42; 64];
const SALT: [u8; 16] = [0x24; 16];
const INFO: &[u8] = b"benchmark-key-derivation";

fn bench_derive_128_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("hkdf/derive_128bits");

    group.throughput(Throughput::Elements(1));

    group.bench_function("keystill_sha256", |b| {
        b.iter(|| {
            let mut out = [0u8; 16];

            hkdf(
                &Sha256,
                black_box(&IKM),
                black_box(&SALT),
                black_box(INFO),
                &mut out,
            )
            .unwrap();
            black_box(out)
        });
    });

    group.bench_function("keystill_sha512", |b| {
        b.iter(|| {
            let mut out = [0u8; 16];

            hkdf(
                &Sha512,
                black_box(&IKM),
                black_box(&SALT),
                black_box(INFO),
                &mut out,
            )
            .unwrap();
            black_box(out)
        });
    });

    group.bench_function("rustcrypto_sha256", |b| {
        b.iter(|| {
            let hk = RcHkdf::<RcSha256>::new(Some(black_box(&SALT[..])), black_box(&IKM));
            let mut out = [0u8; 16];

            hk.expand(black_box(INFO), &mut out).unwrap();
            black_box(out)
        });
    });

    group.finish();
}

fn bench_derive_256_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("hkdf/derive_256bits");

    group.throughput(Throughput::Elements(1));

    group.bench_function("keystill_sha256", |b| {
        b.iter(|| {
            let mut out = [0u8; 32];

            hkdf(
                &Sha256,
                black_box(&IKM),
                black_box(&SALT),
                black_box(INFO),
                &mut out,
            )
            .unwrap();
            black_box(out)
        });
    });

    group.bench_function("keystill_sha512", |b| {
        b.iter(|| {
            let mut out = [0u8; 32];

            hkdf(
                &Sha512,
                black_box(&IKM),
                black_box(&SALT),
                black_box(INFO),
                &mut out,
            )
            .unwrap();
            black_box(out)
        });
    });

    group.bench_function("rustcrypto_sha256", |b| {
        b.iter(|| {
            let hk = RcHkdf::<RcSha256>::new(Some(black_box(&SALT[..])), black_box(&IKM));
            let mut out = [0u8; 32];

            hk.expand(black_box(INFO), &mut out).unwrap();
            black_box(out)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_derive_128_bits, bench_derive_256_bits);
criterion_main!(benches);
