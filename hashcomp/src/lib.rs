// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

//! Empirical comparison of hash functions whose digests are truncated to a few bytes.
//!
//! Key sets come from [keys], every hash function implements [hash::HashFunction], the
//! collision counting loop lives in [collisions] and [report] runs it over every
//! (dataset, hash function) pair of an [config::ExperimentConfig].

#[cfg(test)]
#[path = "tests/hash_tests.rs"]
pub mod hash_tests;

#[cfg(test)]
#[path = "unsecure/tests/unsecure_hash_tests.rs"]
pub mod unsecure_hash_tests;

#[cfg(test)]
#[path = "tests/keys_tests.rs"]
pub mod keys_tests;

#[cfg(test)]
#[path = "tests/collisions_tests.rs"]
pub mod collisions_tests;

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
pub mod dataset_tests;

#[cfg(test)]
#[path = "tests/report_tests.rs"]
pub mod report_tests;

#[cfg(test)]
#[path = "tests/throughput_tests.rs"]
pub mod throughput_tests;

pub mod collisions;
pub mod config;
pub mod dataset;
pub mod error;
pub mod hash;
pub mod keys;
pub mod report;
pub mod throughput;

/// This module contains the non-cryptographic hash functions under comparison.
///
/// Warning: All schemes in this module are completely unsafe to use for anything adversarial.
pub mod unsecure;
