// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::HashCompError;
use crate::unsecure::hash::{
    Fnv128, Fnv128a, Fnv32, Fnv32a, Fnv64, Fnv64a, XXH128Unsecure, XXH3Unsecure,
};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Represents a digest of any length, possibly prefixed by caller supplied bytes.
#[derive(Hash, PartialEq, Eq, Clone, Ord, PartialOrd, Default)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Create a new digest containing the given bytes
    pub fn new(digest: Vec<u8>) -> Self {
        Digest(digest)
    }

    /// Keep at most the first `maxlen` bytes. Shorter digests are left untouched.
    pub fn truncate(&mut self, maxlen: usize) {
        self.0.truncate(maxlen);
    }

    /// The size of this digest in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// Trait implemented by every hash function under comparison.
///
/// The trait is object safe so cryptographic and non-cryptographic hashes can share a single
/// collision counting loop behind a `Box<dyn HashFunction>`.
pub trait HashFunction {
    /// The length of this hash functions digests in bytes.
    fn output_size(&self) -> usize;

    /// Process the given data, and update the internal state of the hash function.
    fn update(&mut self, data: &[u8]);

    /// Append the digest of the data absorbed so far to `prefix`. The state is left untouched.
    fn sum(&self, prefix: &[u8]) -> Digest;

    /// Clear the internal state, as if nothing had been absorbed.
    fn reset(&mut self);

    /// Compute the digest of the given data alone. The state is reset before and after.
    fn digest(&mut self, data: &[u8]) -> Digest {
        self.reset();
        self.update(data);
        let digest = self.sum(&[]);
        self.reset();
        digest
    }
}

impl<H: HashFunction + ?Sized> HashFunction for Box<H> {
    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data)
    }

    fn sum(&self, prefix: &[u8]) -> Digest {
        (**self).sum(prefix)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// This wraps a `digest::Digest` as a `hashcomp::hash::HashFunction`.
#[derive(Clone)]
pub struct HashFunctionWrapper<Variant: digest::Digest + Clone>(Variant);

impl<Variant: digest::Digest + Clone> Default for HashFunctionWrapper<Variant> {
    fn default() -> Self {
        Self(Variant::new())
    }
}

impl<Variant: digest::Digest + Clone> HashFunction for HashFunctionWrapper<Variant> {
    fn output_size(&self) -> usize {
        <Variant as digest::Digest>::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        digest::Digest::update(&mut self.0, data);
    }

    fn sum(&self, prefix: &[u8]) -> Digest {
        let mut out = prefix.to_vec();
        out.extend_from_slice(&self.0.clone().finalize());
        Digest(out)
    }

    fn reset(&mut self) {
        self.0 = Variant::new();
    }
}

/// MD5
pub type Md5 = HashFunctionWrapper<md5::Md5>;

/// SHA-1
pub type Sha1 = HashFunctionWrapper<sha1::Sha1>;

/// SHA-2
pub type Sha256 = HashFunctionWrapper<sha2::Sha256>;

/// SHA-512
pub type Sha512 = HashFunctionWrapper<sha2::Sha512>;

/// SHA-3
pub type Sha3_256 = HashFunctionWrapper<sha3::Sha3_256>;

/// SHA3-512
pub type Sha3_512 = HashFunctionWrapper<sha3::Sha3_512>;

/// KECCAK
pub type Keccak256 = HashFunctionWrapper<sha3::Keccak256>;

/// BLAKE2-256
pub type Blake2b256 = HashFunctionWrapper<blake2::Blake2b<digest::consts::U32>>;

/// BLAKE3
#[derive(Default, Clone)]
pub struct Blake3 {
    instance: blake3::Hasher,
}

impl HashFunction for Blake3 {
    fn output_size(&self) -> usize {
        blake3::OUT_LEN
    }

    fn update(&mut self, data: &[u8]) {
        self.instance.update(data);
    }

    fn sum(&self, prefix: &[u8]) -> Digest {
        let mut out = prefix.to_vec();
        out.extend_from_slice(self.instance.finalize().as_bytes());
        Digest(out)
    }

    fn reset(&mut self) {
        self.instance.reset();
    }
}

/// Every hash function the tools know by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum HashAlgorithm {
    Fnv1_32,
    Fnv1a32,
    Fnv1_64,
    Fnv1a64,
    Fnv1_128,
    Fnv1a128,
    Xxh3_64,
    Xxh3_128,
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Sha3_256,
    Sha3_512,
    Keccak256,
    Blake2b256,
    Blake3,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 17] = [
        HashAlgorithm::Fnv1_32,
        HashAlgorithm::Fnv1a32,
        HashAlgorithm::Fnv1_64,
        HashAlgorithm::Fnv1a64,
        HashAlgorithm::Fnv1_128,
        HashAlgorithm::Fnv1a128,
        HashAlgorithm::Xxh3_64,
        HashAlgorithm::Xxh3_128,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Blake2b256,
        HashAlgorithm::Blake3,
    ];

    /// The canonical name, as accepted by [FromStr] and printed in report headers.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Fnv1_32 => "fnv1-32",
            HashAlgorithm::Fnv1a32 => "fnv1a-32",
            HashAlgorithm::Fnv1_64 => "fnv1-64",
            HashAlgorithm::Fnv1a64 => "fnv1a-64",
            HashAlgorithm::Fnv1_128 => "fnv1-128",
            HashAlgorithm::Fnv1a128 => "fnv1a-128",
            HashAlgorithm::Xxh3_64 => "xxh3-64",
            HashAlgorithm::Xxh3_128 => "xxh3-128",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha-1",
            HashAlgorithm::Sha256 => "sha-256",
            HashAlgorithm::Sha512 => "sha-512",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_512 => "sha3-512",
            HashAlgorithm::Keccak256 => "keccak-256",
            HashAlgorithm::Blake2b256 => "blake2b-256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Create a fresh instance of this hash function.
    pub fn hasher(&self) -> Box<dyn HashFunction> {
        match self {
            HashAlgorithm::Fnv1_32 => Box::<Fnv32>::default(),
            HashAlgorithm::Fnv1a32 => Box::<Fnv32a>::default(),
            HashAlgorithm::Fnv1_64 => Box::<Fnv64>::default(),
            HashAlgorithm::Fnv1a64 => Box::<Fnv64a>::default(),
            HashAlgorithm::Fnv1_128 => Box::<Fnv128>::default(),
            HashAlgorithm::Fnv1a128 => Box::<Fnv128a>::default(),
            HashAlgorithm::Xxh3_64 => Box::<XXH3Unsecure>::default(),
            HashAlgorithm::Xxh3_128 => Box::<XXH128Unsecure>::default(),
            HashAlgorithm::Md5 => Box::<Md5>::default(),
            HashAlgorithm::Sha1 => Box::<Sha1>::default(),
            HashAlgorithm::Sha256 => Box::<Sha256>::default(),
            HashAlgorithm::Sha512 => Box::<Sha512>::default(),
            HashAlgorithm::Sha3_256 => Box::<Sha3_256>::default(),
            HashAlgorithm::Sha3_512 => Box::<Sha3_512>::default(),
            HashAlgorithm::Keccak256 => Box::<Keccak256>::default(),
            HashAlgorithm::Blake2b256 => Box::<Blake2b256>::default(),
            HashAlgorithm::Blake3 => Box::<Blake3>::default(),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashCompError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| HashCompError::UnknownHash(s.to_string()))
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = HashCompError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
