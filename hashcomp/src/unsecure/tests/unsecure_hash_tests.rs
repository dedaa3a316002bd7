// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::hash::HashFunction;
use crate::unsecure::hash::{
    Fnv128, Fnv128a, Fnv32, Fnv32a, Fnv64, Fnv64a, XXH128Unsecure, XXH3Unsecure,
};
use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

fn hex_digest<H: HashFunction + Default>(data: &[u8]) -> String {
    H::default().digest(data).to_string()
}

#[test]
fn test_xxh3() {
    assert_eq!(hex_digest::<XXH3Unsecure>(b""), "2d06800538d394c2");

    let data =
        hex::decode("301d56460954541aab6dd7ddc0dd08f8cb3ebd884784a0e797905107533cae62").unwrap();
    let digest = XXH3Unsecure::default().digest(&data);
    assert_eq!(digest.as_ref(), &xxh3_64(&data).to_be_bytes()[..]);
}

#[test]
fn test_xxh128() {
    assert_eq!(
        hex_digest::<XXH128Unsecure>(b""),
        "99aa06d3014798d86001c324468d497f"
    );

    let data =
        hex::decode("301d56460954541aab6dd7ddc0dd08f8cb3ebd884784a0e797905107533cae62").unwrap();
    let digest = XXH128Unsecure::default().digest(&data);
    assert_eq!(digest.as_ref(), &xxh3_128(&data).to_be_bytes()[..]);
}

#[test]
fn test_xxh3_update_replaces_result() {
    let mut h = XXH3Unsecure::default();
    h.update(b"first");
    h.update(b"second");
    assert_eq!(h.sum(&[]), XXH3Unsecure::default().digest(b"second"));
}

#[test]
fn test_fnv32() {
    assert_eq!(hex_digest::<Fnv32>(b""), "811c9dc5");
    assert_eq!(hex_digest::<Fnv32>(b"a"), "050c5d7e");
    assert_eq!(hex_digest::<Fnv32>(b"foobar"), "31f0b262");
}

#[test]
fn test_fnv32a() {
    assert_eq!(hex_digest::<Fnv32a>(b""), "811c9dc5");
    assert_eq!(hex_digest::<Fnv32a>(b"a"), "e40c292c");
    assert_eq!(hex_digest::<Fnv32a>(b"foobar"), "bf9cf968");
}

#[test]
fn test_fnv64() {
    assert_eq!(hex_digest::<Fnv64>(b"a"), "af63bd4c8601b7be");
    assert_eq!(hex_digest::<Fnv64>(b"foobar"), "340d8765a4dda9c2");
}

#[test]
fn test_fnv64a() {
    assert_eq!(hex_digest::<Fnv64a>(b""), "cbf29ce484222325");
    assert_eq!(hex_digest::<Fnv64a>(b"a"), "af63dc4c8601ec8c");
    assert_eq!(hex_digest::<Fnv64a>(b"foobar"), "85944171f73967e8");
}

#[test]
fn test_fnv128() {
    assert_eq!(
        hex_digest::<Fnv128>(b"a"),
        "d228cb69101a8caf78912b704e4a141e"
    );
    assert_eq!(
        hex_digest::<Fnv128a>(b"a"),
        "d228cb696f1a8caf78912b704e4a8964"
    );
    assert_eq!(
        hex_digest::<Fnv128a>(b"foobar"),
        "343e1662793c64bf6f0d3597ba446f18"
    );
}

#[test]
fn test_fnv_streaming() {
    let mut h = Fnv64a::default();
    h.update(b"foo");
    h.update(b"bar");
    assert_eq!(h.sum(&[]).to_string(), "85944171f73967e8");
    h.reset();
    assert_eq!(h.sum(&[]).to_string(), "cbf29ce484222325");
}
