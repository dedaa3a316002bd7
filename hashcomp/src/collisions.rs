// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{HashCompError, HashCompResult};
use crate::hash::HashFunction;
use std::collections::HashSet;

/// Count the keys whose digest, truncated to at most `maxlen` bytes, equals the truncated digest
/// of an earlier key.
///
/// Digests shorter than `maxlen` are compared in full. The hash function is reset before every
/// key, so an instance that was used before is fine to pass in. True collisions of the hash
/// function and collisions introduced by the truncation are not told apart.
pub fn count_collisions<K, H>(keys: &[K], hasher: &mut H, maxlen: usize) -> HashCompResult<usize>
where
    K: AsRef<[u8]>,
    H: HashFunction + ?Sized,
{
    if maxlen == 0 {
        return Err(HashCompError::InvalidInput(
            "truncation length must be at least one byte".to_string(),
        ));
    }

    let mut seen: HashSet<Box<[u8]>> = HashSet::with_capacity(keys.len());
    let mut collisions = 0;
    hasher.reset();
    for key in keys {
        hasher.update(key.as_ref());
        let mut digest = hasher.sum(&[]);
        digest.truncate(maxlen);
        if !seen.insert(digest.into_bytes().into_boxed_slice()) {
            collisions += 1;
        }
        hasher.reset();
    }
    Ok(collisions)
}

/// Birthday approximation of the number of collisions among `n` uniformly distributed values of
/// `bits` bits: `n^2 / 2^(bits + 1)`.
pub fn expected_collisions(n: usize, bits: u32) -> f64 {
    (n as f64).powi(2) / 2f64.powf(f64::from(bits) + 1.0)
}
