// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::config::ExperimentConfig;
use crate::dataset::DatasetSpec;
use crate::error::HashCompError;
use crate::hash::HashAlgorithm;
use crate::report::{run, Report, ReportRow};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_config() -> ExperimentConfig {
    ExperimentConfig {
        datasets: vec![
            "random-var:1000:8-32".parse().unwrap(),
            "uuid:500".parse().unwrap(),
        ],
        hashes: vec![HashAlgorithm::Fnv1a32, HashAlgorithm::Sha256],
        maxlen: 1,
        seed: 0,
        expected: false,
    }
}

#[test]
fn test_run() {
    let report = run(&small_config(), &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(report.hashes, vec!["fnv1a-32", "sha-256"]);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].dataset, "Rand,1K,8-32B");
    assert_eq!(report.rows[0].keys, 1000);
    assert_eq!(report.rows[1].dataset, "UUID,500");

    // One byte leaves 256 buckets.
    assert!(report.get("Rand,1K,8-32B", "sha-256").unwrap() >= 1000 - 256);
    assert!(report.get("UUID,500", "fnv1a-32").unwrap() >= 500 - 256);
    assert_eq!(report.get("UUID,500", "md5"), None);
}

#[test]
fn test_run_is_reproducible() {
    let config = small_config();
    let a = run(&config, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = run(&config, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_run_fails_without_partial_report() {
    let mut config = small_config();
    config.datasets.push(DatasetSpec::Words {
        path: "/nonexistent/hashcomp/words.txt".into(),
    });
    let result = run(&config, &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(HashCompError::WordListOpen { .. })));
}

#[test]
fn test_render() {
    let report = Report {
        maxlen: 4,
        hashes: vec!["fnv1a-32".to_string(), "md5".to_string()],
        rows: vec![
            ReportRow {
                dataset: "EngWords".to_string(),
                keys: 466_550,
                collisions: vec![25, 19],
            },
            ReportRow {
                dataset: "Rand,100K,8-32B".to_string(),
                keys: 100_000,
                collisions: vec![1, 3],
            },
        ],
        expected: false,
    };
    let rendered = report.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "=================================================");
    assert_eq!(lines[1], "Collisions when k := hash[:4]");
    assert_eq!(lines[2], "-------------------------------------------------");
    assert_eq!(lines[6], lines[0]);
    assert!(rendered.ends_with("=================================================\n"));

    let cells: Vec<Vec<&str>> = lines[3..6]
        .iter()
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(cells[0], vec!["\\", "fnv1a-32", "md5"]);
    assert_eq!(cells[1], vec!["EngWords", "25", "19"]);
    assert_eq!(cells[2], vec!["Rand,100K,8-32B", "1", "3"]);

    // Left aligned columns, one space after the widest cell, nothing trailing.
    assert!(lines[3].starts_with("\\ "));
    assert_eq!(lines[3].find("fnv1a-32"), Some("Rand,100K,8-32B ".len()));
    assert_eq!(lines[4].find("25"), lines[3].find("fnv1a-32"));
    assert_eq!(lines[5].rfind('3'), lines[3].find("md5"));
    assert!(lines.iter().all(|line| !line.ends_with(' ')));
}

#[test]
fn test_render_expected_column() {
    let report = Report {
        maxlen: 1,
        hashes: vec!["md5".to_string()],
        rows: vec![ReportRow {
            dataset: "UUID,16".to_string(),
            keys: 16,
            collisions: vec![0],
        }],
        expected: true,
    };
    let rendered = report.to_string();
    let rows: Vec<Vec<&str>> = rendered
        .lines()
        .skip(3)
        .take(2)
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(rows[0], vec!["\\", "md5", "expected"]);
    assert_eq!(rows[1], vec!["UUID,16", "0", "0.5"]);
}
