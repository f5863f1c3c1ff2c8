//! Benchmark utilities and performance testing
//!
//! Simple timing helpers for measuring encode and decode throughput without
//! pulling in a benchmark harness. Only available with the `std` feature.

use std::time::{Duration, Instant};
use std::vec::Vec;

use crate::decoder::decode;
use crate::encoder::{encode, encode_into};
use crate::error::Result;
use crate::frame::encoded_size;

/// Simple benchmark statistics
#[derive(Debug, Clone)]
pub struct BenchStats {
    /// Number of operations
    pub count: usize,
    /// Payload bytes processed across all operations
    pub bytes: usize,
    /// Total duration
    pub total_duration: Duration,
    /// Average time per operation
    pub avg_ns_per_op: u64,
    /// Operations per second
    pub ops_per_sec: f64,
}

impl BenchStats {
    /// Create new stats from measurements
    pub fn new(count: usize, bytes: usize, total_duration: Duration) -> Self {
        let total_ns = total_duration.as_nanos() as u64;
        let avg_ns_per_op = if count > 0 {
            total_ns / count as u64
        } else {
            0
        };
        let ops_per_sec = if total_ns > 0 {
            (count as f64) * 1_000_000_000.0 / (total_ns as f64)
        } else {
            0.0
        };

        Self {
            count,
            bytes,
            total_duration,
            avg_ns_per_op,
            ops_per_sec,
        }
    }

    /// Payload throughput in MB/s
    pub fn mb_per_sec(&self) -> f64 {
        let secs = self.total_duration.as_secs_f64();
        if secs > 0.0 {
            self.bytes as f64 / secs / 1_000_000.0
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ops, {:.2}ms total, {} ns/op, {:.0} ops/sec, {:.1} MB/s",
            self.count,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_ns_per_op,
            self.ops_per_sec,
            self.mb_per_sec()
        )
    }
}

/// Deterministic payload of `len` bytes with a zero every `zero_every` bytes
///
/// `zero_every == 0` produces a payload with no zeros at all, the worst case
/// for encoded size.
pub fn sample_payload(len: usize, zero_every: usize) -> Vec<u8> {
    (0..len)
        .map(|i| {
            if zero_every != 0 && i % zero_every == zero_every - 1 {
                0
            } else {
                (i % 255) as u8 + 1
            }
        })
        .collect()
}

/// Benchmark encoding `payload` into a reused buffer
pub fn bench_encode(payload: &[u8], count: usize) -> Result<BenchStats> {
    let mut buf = std::vec![0u8; encoded_size(payload.len())];
    let start = Instant::now();

    for _ in 0..count {
        let size = encode_into(std::hint::black_box(payload), &mut buf)?;
        std::hint::black_box(size);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, count * payload.len(), duration))
}

/// Benchmark decoding the frame of `payload`
pub fn bench_decode(payload: &[u8], count: usize) -> Result<BenchStats> {
    let frame = encode(payload);
    let start = Instant::now();

    for _ in 0..count {
        let decoded = decode(std::hint::black_box(&frame))?;
        std::hint::black_box(decoded);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, count * payload.len(), duration))
}

/// Benchmark encode + decode roundtrip
pub fn bench_roundtrip(payload: &[u8], count: usize) -> Result<BenchStats> {
    let start = Instant::now();

    for _ in 0..count {
        let frame = encode(std::hint::black_box(payload));
        let decoded = decode(&frame)?;
        std::hint::black_box(decoded);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, count * payload.len(), duration))
}
