// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Descriptions of the key sets used by an experiment.
//!
//! A dataset is written as `words:<path>`, `random:<count>:<len>`,
//! `random-var:<count>:<min>-<max>` or `uuid:<count>`. Counts accept a `K` (thousand) or `M`
//! (million) suffix, so `random-var:100K:8-32` is a hundred thousand strings of 8 to 32 characters.

use crate::error::{HashCompError, HashCompResult};
use crate::keys;
use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DatasetSpec {
    /// One key per line of a word list.
    Words { path: PathBuf },
    /// Random strings of a fixed length.
    Random { count: usize, len: usize },
    /// Random strings with a length in `min..=max`.
    RandomVarLen { count: usize, min: usize, max: usize },
    /// Random version 4 UUIDs.
    Uuid { count: usize },
}

impl DatasetSpec {
    /// Short label used as the row name of a report, e.g. `Rand,100K,8-32B`.
    pub fn name(&self) -> String {
        match self {
            DatasetSpec::Words { path } => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "words".to_string()),
            DatasetSpec::Random { count, len } => format!("Rand,{},{}B", format_count(*count), len),
            DatasetSpec::RandomVarLen { count, min, max } => {
                format!("Rand,{},{}-{}B", format_count(*count), min, max)
            }
            DatasetSpec::Uuid { count } => format!("UUID,{}", format_count(*count)),
        }
    }

    /// Build the key set.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> HashCompResult<Vec<String>> {
        match self {
            DatasetSpec::Words { path } => keys::words_from_file(path),
            DatasetSpec::Random { count, len } => keys::random_strings(rng, *count, *len),
            DatasetSpec::RandomVarLen { count, min, max } => {
                keys::random_strings_var_len(rng, *count, *min, *max)
            }
            DatasetSpec::Uuid { count } => keys::uuids(rng, *count),
        }
    }
}

impl fmt::Display for DatasetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSpec::Words { path } => write!(f, "words:{}", path.display()),
            DatasetSpec::Random { count, len } => write!(f, "random:{}:{}", count, len),
            DatasetSpec::RandomVarLen { count, min, max } => {
                write!(f, "random-var:{}:{}-{}", count, min, max)
            }
            DatasetSpec::Uuid { count } => write!(f, "uuid:{}", count),
        }
    }
}

impl FromStr for DatasetSpec {
    type Err = HashCompError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HashCompError::InvalidDataset(s.to_string());
        let (kind, rest) = s.split_once(':').ok_or_else(invalid)?;
        match kind {
            "words" if !rest.is_empty() => Ok(DatasetSpec::Words { path: rest.into() }),
            "random" => {
                let (count, len) = rest.split_once(':').ok_or_else(invalid)?;
                Ok(DatasetSpec::Random {
                    count: parse_count(count).ok_or_else(invalid)?,
                    len: len.parse().map_err(|_| invalid())?,
                })
            }
            "random-var" => {
                let (count, range) = rest.split_once(':').ok_or_else(invalid)?;
                let (min, max) = range.split_once('-').ok_or_else(invalid)?;
                let min: usize = min.parse().map_err(|_| invalid())?;
                let max: usize = max.parse().map_err(|_| invalid())?;
                if min > max {
                    return Err(invalid());
                }
                Ok(DatasetSpec::RandomVarLen {
                    count: parse_count(count).ok_or_else(invalid)?,
                    min,
                    max,
                })
            }
            "uuid" => Ok(DatasetSpec::Uuid {
                count: parse_count(rest).ok_or_else(invalid)?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for DatasetSpec {
    type Error = HashCompError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_count(s: &str) -> Option<usize> {
    let (digits, scale) = match s.as_bytes().last()? {
        b'K' | b'k' => (&s[..s.len() - 1], 1_000),
        b'M' | b'm' => (&s[..s.len() - 1], 1_000_000),
        _ => (s, 1),
    };
    digits.parse::<usize>().ok()?.checked_mul(scale)
}

fn format_count(count: usize) -> String {
    if count >= 1_000_000 && count % 1_000_000 == 0 {
        format!("{}M", count / 1_000_000)
    } else if count >= 1_000 && count % 1_000 == 0 {
        format!("{}K", count / 1_000)
    } else {
        count.to_string()
    }
}
