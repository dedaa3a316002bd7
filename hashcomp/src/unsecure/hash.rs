// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

use crate::hash::{Digest, HashFunction};

macro_rules! fnv_hash {
    ($name:ident, $int:ty, $offset:expr, $prime:expr, $alternate:expr) => {
        #[derive(Clone)]
        pub struct $name {
            state: $int,
        }

        impl Default for $name {
            fn default() -> Self {
                Self { state: $offset }
            }
        }

        impl HashFunction for $name {
            fn output_size(&self) -> usize {
                std::mem::size_of::<$int>()
            }

            fn update(&mut self, data: &[u8]) {
                for &b in data {
                    if $alternate {
                        self.state ^= <$int>::from(b);
                        self.state = self.state.wrapping_mul($prime);
                    } else {
                        self.state = self.state.wrapping_mul($prime);
                        self.state ^= <$int>::from(b);
                    }
                }
            }

            fn sum(&self, prefix: &[u8]) -> Digest {
                let mut out = prefix.to_vec();
                out.extend_from_slice(&self.state.to_be_bytes());
                Digest::new(out)
            }

            fn reset(&mut self) {
                self.state = $offset;
            }
        }
    };
}

const OFFSET_32: u32 = 0x811c9dc5;
const PRIME_32: u32 = 0x01000193;
const OFFSET_64: u64 = 0xcbf29ce484222325;
const PRIME_64: u64 = 0x00000100000001b3;
const OFFSET_128: u128 = 0x6c62272e07bb014262b821756295c58d;
const PRIME_128: u128 = 0x0000000001000000000000000000013b;

fnv_hash!(Fnv32, u32, OFFSET_32, PRIME_32, false);
fnv_hash!(Fnv32a, u32, OFFSET_32, PRIME_32, true);
fnv_hash!(Fnv64, u64, OFFSET_64, PRIME_64, false);
fnv_hash!(Fnv64a, u64, OFFSET_64, PRIME_64, true);
fnv_hash!(Fnv128, u128, OFFSET_128, PRIME_128, false);
fnv_hash!(Fnv128a, u128, OFFSET_128, PRIME_128, true);

/// XXH3 hash function, 64-bit variant with the default secret and seed 0.
///
/// Every call to `update` replaces the stored result with the hash of the new data, so `reset`
/// has nothing to clear.
///
/// Warning: This is NOT a cryptographic hash function and should NOT be used in production.
#[derive(Default, Clone)]
pub struct XXH3Unsecure {
    res: u64,
}

impl HashFunction for XXH3Unsecure {
    fn output_size(&self) -> usize {
        8
    }

    fn update(&mut self, data: &[u8]) {
        self.res = xxh3_64(data);
    }

    fn sum(&self, prefix: &[u8]) -> Digest {
        let mut out = prefix.to_vec();
        out.extend_from_slice(&self.res.to_be_bytes());
        Digest::new(out)
    }

    fn reset(&mut self) {}
}

/// XXH128 hash function. Same one-shot behavior as [XXH3Unsecure].
///
/// Warning: This is NOT a cryptographic hash function and should NOT be used in production.
#[derive(Default, Clone)]
pub struct XXH128Unsecure {
    res: u128,
}

impl HashFunction for XXH128Unsecure {
    fn output_size(&self) -> usize {
        16
    }

    fn update(&mut self, data: &[u8]) {
        self.res = xxh3_128(data);
    }

    fn sum(&self, prefix: &[u8]) -> Digest {
        let mut out = prefix.to_vec();
        out.extend_from_slice(&self.res.to_be_bytes());
        Digest::new(out)
    }

    fn reset(&mut self) {}
}
