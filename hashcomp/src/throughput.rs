// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::hash::{HashAlgorithm, HashFunction};
use crate::report::write_table;
use comfy_table::Table;
use rand::Rng;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::info;

/// Throughput of one hash function over buffers of a fixed length.
#[derive(Clone, Debug)]
pub struct Throughput {
    pub name: String,
    pub len: usize,
    pub iterations: u64,
    /// Time spent hashing, buffer generation excluded.
    pub elapsed: Duration,
}

impl Throughput {
    pub fn nanos_per_hash(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }

    pub fn mib_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        (self.len as f64 * self.iterations as f64) / (1024.0 * 1024.0) / secs
    }
}

/// Buffers generated ahead of each timed run.
const BATCH: usize = 1024;

/// Hash `iterations` freshly randomized buffers of `len` bytes with `hasher`.
///
/// Buffers are filled [BATCH] at a time before the clock starts and one clock reading spans the
/// hashing of the whole batch.
pub fn measure<H, R>(
    name: &str,
    hasher: &mut H,
    len: usize,
    iterations: u64,
    rng: &mut R,
) -> Throughput
where
    H: HashFunction + ?Sized,
    R: Rng + ?Sized,
{
    let batch = usize::try_from(iterations).map_or(BATCH, |n| n.min(BATCH));
    let mut data = vec![0u8; len * batch];
    let mut elapsed = Duration::ZERO;
    let mut remaining = iterations;
    hasher.reset();
    while remaining > 0 {
        let count = usize::try_from(remaining).map_or(batch, |n| n.min(batch));
        rng.fill_bytes(&mut data[..len * count]);
        let start = Instant::now();
        for i in 0..count {
            hasher.update(&data[i * len..(i + 1) * len]);
            black_box(hasher.sum(&[]));
            hasher.reset();
        }
        elapsed += start.elapsed();
        remaining -= count as u64;
    }
    Throughput {
        name: name.to_string(),
        len,
        iterations,
        elapsed,
    }
}

/// [measure] every algorithm in turn.
pub fn measure_all<R: Rng + ?Sized>(
    algorithms: &[HashAlgorithm],
    len: usize,
    iterations: u64,
    rng: &mut R,
) -> Vec<Throughput> {
    algorithms
        .iter()
        .map(|algorithm| {
            info!(method = %algorithm, len, iterations, "benchmarking");
            measure(algorithm.name(), &mut algorithm.hasher(), len, iterations, rng)
        })
        .collect()
}

/// Renders a list of measurements as a table, one row per hash function.
pub struct ThroughputReport<'a>(pub &'a [Throughput]);

impl fmt::Display for ThroughputReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_header(vec!["method", "bytes", "ns/hash", "MiB/s"]);
        for t in self.0 {
            table.add_row(vec![
                t.name.clone(),
                t.len.to_string(),
                format!("{:.1}", t.nanos_per_hash()),
                format!("{:.1}", t.mib_per_sec()),
            ]);
        }
        write_table(f, table)
    }
}
