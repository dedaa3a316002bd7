// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::dataset::DatasetSpec;
use crate::error::{HashCompError, HashCompResult};
use crate::hash::HashAlgorithm;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Truncation length used when none is configured.
pub const DEFAULT_MAXLEN: usize = 4;

/// Everything a collision report needs. Fields missing from a configuration file keep their
/// default value.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    pub datasets: Vec<DatasetSpec>,
    pub hashes: Vec<HashAlgorithm>,
    /// Digests are truncated to at most this many bytes.
    pub maxlen: usize,
    /// Seed of the key generator.
    pub seed: u64,
    /// Add a column with the birthday approximation of the collision count.
    pub expected: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            datasets: vec![
                DatasetSpec::RandomVarLen {
                    count: 100_000,
                    min: 8,
                    max: 32,
                },
                DatasetSpec::RandomVarLen {
                    count: 1_000_000,
                    min: 8,
                    max: 32,
                },
            ],
            hashes: vec![
                HashAlgorithm::Fnv1a32,
                HashAlgorithm::Fnv1a64,
                HashAlgorithm::Fnv1a128,
                HashAlgorithm::Sha1,
                HashAlgorithm::Sha256,
                HashAlgorithm::Md5,
                HashAlgorithm::Xxh3_64,
                HashAlgorithm::Xxh3_128,
            ],
            maxlen: DEFAULT_MAXLEN,
            seed: 0,
            expected: false,
        }
    }
}

impl ExperimentConfig {
    /// Parse a JSON configuration, e.g.
    /// `{"datasets": ["words:words.txt", "uuid:5M"], "hashes": ["md5"], "maxlen": 4}`.
    pub fn from_json(json: &str) -> HashCompResult<Self> {
        let config: ExperimentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> HashCompResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| HashCompError::Config(format!("cannot read {:?}: {}", path, e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> HashCompResult<()> {
        if self.maxlen == 0 {
            return Err(HashCompError::Config(
                "maxlen must be at least one byte".to_string(),
            ));
        }
        if self.datasets.is_empty() || self.hashes.is_empty() {
            return Err(HashCompError::Config(
                "at least one dataset and one hash function are required".to_string(),
            ));
        }
        Ok(())
    }
}
