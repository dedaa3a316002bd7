// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use hashcomp::error::HashCompError;
use hashcomp::hash::HashAlgorithm;
use hashcomp::throughput::{measure_all, ThroughputReport};
use hashcomp_cli::{exit_code, init_tracing};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_LEN: usize = 24;
const DEFAULT_ITERATIONS: u64 = 100_000;

#[derive(Parser)]
#[command(name = "throughput-cli")]
#[command(about = "Measure how fast each hash function digests random buffers", long_about = None)]
struct Arguments {
    /// Name of a hash function. May be repeated, all hash functions are measured if omitted.
    #[clap(long = "hash")]
    hashes: Vec<HashAlgorithm>,

    /// Length of the hashed buffers in bytes (default is 24).
    #[clap(short, long, default_value_t = DEFAULT_LEN)]
    len: usize,

    /// Number of buffers hashed per hash function.
    #[clap(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Seed of the buffer generator.
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    init_tracing();
    match execute(Arguments::parse()) {
        Ok(res) => {
            print!("{}", res);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn execute(args: Arguments) -> Result<String, HashCompError> {
    if args.iterations == 0 {
        return Err(HashCompError::InvalidInput(
            "at least one iteration is required".to_string(),
        ));
    }
    let hashes = if args.hashes.is_empty() {
        HashAlgorithm::ALL.to_vec()
    } else {
        args.hashes
    };
    let mut rng = StdRng::seed_from_u64(args.seed);
    let results = measure_all(&hashes, args.len, args.iterations, &mut rng);
    Ok(ThroughputReport(&results).to_string())
}
