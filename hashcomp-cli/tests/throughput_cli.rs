// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use regex::Regex;

#[test]
fn integration_test_throughput() {
    let result = Command::cargo_bin("throughput-cli")
        .unwrap()
        .args(["--hash", "md5", "--hash", "xxh3-128"])
        .args(["--len", "64", "--iterations", "200"])
        .ok();
    assert!(result.is_ok());
    let output = String::from_utf8(result.unwrap().stdout).unwrap();

    let pattern = Regex::new(
        "^method +bytes +ns/hash +MiB/s\nmd5 +64 +[0-9.]+ +[0-9.]+\nxxh3-128 +64 +[0-9.]+ +[0-9.]+\n$",
    )
    .unwrap();
    assert!(pattern.is_match(&output), "{}", output);
}

#[test]
fn integration_test_throughput_all_hashes() {
    let result = Command::cargo_bin("throughput-cli")
        .unwrap()
        .args(["--iterations", "10"])
        .ok();
    assert!(result.is_ok());
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    // Header plus one row per hash function.
    assert_eq!(output.lines().count(), 18);
    assert!(output.contains("\nblake3 "));
}

#[test]
fn integration_test_throughput_invalid() {
    let result = Command::cargo_bin("throughput-cli")
        .unwrap()
        .args(["--hash", "crc32"])
        .ok();
    assert!(result.is_err());

    let output = Command::cargo_bin("throughput-cli")
        .unwrap()
        .args(["--iterations", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}
