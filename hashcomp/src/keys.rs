// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Generators for the key sets hashed by the collision experiments.
//!
//! Every generator returns keys that are unique within the set. The random generators draw a
//! fresh key when they hit a duplicate, the word list loader rejects the list instead.

use crate::error::{HashCompError, HashCompResult};
use rand::Rng;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Alphabet of the random string generators.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A random string of `len` characters from [LETTERS].
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// `n` unique random strings of exactly `len` characters.
pub fn random_strings<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    len: usize,
) -> HashCompResult<Vec<String>> {
    random_strings_var_len(rng, n, len, len)
}

/// `n` unique random strings whose lengths are drawn uniformly from `min..=max`.
pub fn random_strings_var_len<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    min: usize,
    max: usize,
) -> HashCompResult<Vec<String>> {
    if min > max {
        return Err(HashCompError::InvalidInput(format!(
            "minimum length {} exceeds maximum length {}",
            min, max
        )));
    }
    if !has_room(n, min, max) {
        return Err(HashCompError::InvalidInput(format!(
            "cannot draw {} unique strings of length {}..={}",
            n, min, max
        )));
    }

    Ok(unique(n, || {
        let len = rng.gen_range(min..=max);
        random_string(rng, len)
    }))
}

/// `n` unique random version 4 UUIDs in hyphenated lowercase form.
pub fn uuids<R: Rng + ?Sized>(rng: &mut R, n: usize) -> HashCompResult<Vec<String>> {
    Ok(unique(n, || {
        uuid::Builder::from_random_bytes(rng.gen())
            .into_uuid()
            .hyphenated()
            .to_string()
    }))
}

/// Read one key per line. Fails on the first line that was already seen.
pub fn words_from_reader<B: BufRead>(reader: B) -> HashCompResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for line in reader.lines() {
        let word = line?;
        if !seen.insert(word.clone()) {
            return Err(HashCompError::DuplicateWord(word));
        }
        keys.push(word);
    }
    Ok(keys)
}

/// Read the word list at `path`, see [words_from_reader].
pub fn words_from_file<P: AsRef<Path>>(path: P) -> HashCompResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HashCompError::WordListOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let words = words_from_reader(BufReader::new(file))?;
    debug!("loaded {} words from {:?}", words.len(), path);
    Ok(words)
}

fn unique<F: FnMut() -> String>(n: usize, mut next: F) -> Vec<String> {
    let mut seen = HashSet::with_capacity(n);
    let mut keys = Vec::with_capacity(n);
    let mut retries = 0usize;
    while keys.len() < n {
        let key = next();
        if seen.contains(&key) {
            retries += 1;
            continue;
        }
        seen.insert(key.clone());
        keys.push(key);
    }
    if retries > 0 {
        debug!("drew {} duplicate keys while generating {} keys", retries, n);
    }
    keys
}

/// Whether at least `n` distinct strings over [LETTERS] have a length in `min..=max`.
fn has_room(n: usize, min: usize, max: usize) -> bool {
    let base = LETTERS.len() as u128;
    let mut total = 0u128;
    for len in min..=max {
        let count = u32::try_from(len)
            .ok()
            .and_then(|len| base.checked_pow(len))
            .unwrap_or(u128::MAX);
        total = total.saturating_add(count);
        if total >= n as u128 {
            return true;
        }
    }
    n == 0
}
