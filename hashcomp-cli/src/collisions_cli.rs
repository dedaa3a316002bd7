// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use hashcomp::config::ExperimentConfig;
use hashcomp::dataset::DatasetSpec;
use hashcomp::error::HashCompError;
use hashcomp::hash::HashAlgorithm;
use hashcomp::report;
use hashcomp_cli::{exit_code, init_tracing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collisions-cli")]
#[command(about = "Count collisions of truncated digests for every pair of dataset and hash function", long_about = None)]
struct Arguments {
    /// Dataset to hash, e.g. words:words.txt, random:1M:32, random-var:100K:8-32 or uuid:5M. May be repeated.
    #[clap(short, long = "dataset")]
    datasets: Vec<DatasetSpec>,

    /// Name of a hash function, e.g. fnv1a-64, xxh3-128 or sha-256. May be repeated.
    #[clap(long = "hash")]
    hashes: Vec<HashAlgorithm>,

    /// Number of digest bytes compared (default is 4).
    #[clap(short, long)]
    maxlen: Option<usize>,

    /// Seed of the random key generators (default is 0).
    #[clap(short, long)]
    seed: Option<u64>,

    /// Add a column with the number of collisions predicted by the birthday bound.
    #[clap(long)]
    expected: bool,

    /// JSON experiment configuration. Flags given on the command line take precedence.
    #[clap(short, long)]
    config: Option<PathBuf>,
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
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::default(),
    };
    if !args.datasets.is_empty() {
        config.datasets = args.datasets;
    }
    if !args.hashes.is_empty() {
        config.hashes = args.hashes;
    }
    if let Some(maxlen) = args.maxlen {
        config.maxlen = maxlen;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.expected |= args.expected;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let report = report::run(&config, &mut rng)?;
    Ok(report.to_string())
}
