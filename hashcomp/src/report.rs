// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::collisions::{count_collisions, expected_collisions};
use crate::config::ExperimentConfig;
use crate::error::HashCompResult;
use comfy_table::presets::NOTHING;
use comfy_table::{ContentArrangement, Table};
use rand::Rng;
use std::fmt;
use tracing::info;

const BANNER: &str = "=================================================";
const RULE: &str = "-------------------------------------------------";

/// Collision counts of every (dataset, hash function) pair of an experiment.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub maxlen: usize,
    pub hashes: Vec<String>,
    pub rows: Vec<ReportRow>,
    /// Whether the rendered table has an `expected` column.
    pub expected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub dataset: String,
    pub keys: usize,
    /// One entry per hash function, in the order of [Report::hashes].
    pub collisions: Vec<usize>,
}

/// Run every hash function of `config` over every dataset of `config`.
///
/// Datasets are generated one at a time and dropped once all hash functions have seen them. The
/// first error aborts the run, nothing is returned for the datasets that did succeed.
pub fn run<R: Rng + ?Sized>(config: &ExperimentConfig, rng: &mut R) -> HashCompResult<Report> {
    config.validate()?;
    let mut hashers: Vec<_> = config.hashes.iter().map(|h| (h, h.hasher())).collect();
    let mut rows = Vec::with_capacity(config.datasets.len());

    for dataset in &config.datasets {
        let name = dataset.name();
        info!(dataset = %name, "creating dataset");
        let keys = dataset.generate(rng)?;
        info!(dataset = %name, keys = keys.len(), "done");

        let mut collisions = Vec::with_capacity(hashers.len());
        for (algorithm, hasher) in hashers.iter_mut() {
            info!(method = %algorithm, "running method");
            let count = count_collisions(&keys, hasher, config.maxlen)?;
            info!(dataset = %name, method = %algorithm, collisions = count, "done");
            collisions.push(count);
        }
        rows.push(ReportRow {
            dataset: name,
            keys: keys.len(),
            collisions,
        });
    }

    Ok(Report {
        maxlen: config.maxlen,
        hashes: config.hashes.iter().map(|h| h.to_string()).collect(),
        rows,
        expected: config.expected,
    })
}

impl Report {
    /// The collision count of `dataset` under the hash function named `hash`.
    pub fn get(&self, dataset: &str, hash: &str) -> Option<usize> {
        let column = self.hashes.iter().position(|h| h == hash)?;
        let row = self.rows.iter().find(|r| r.dataset == dataset)?;
        row.collisions.get(column).copied()
    }

    fn table(&self) -> Table {
        let mut header = vec!["\\".to_string()];
        header.extend(self.hashes.iter().cloned());
        if self.expected {
            header.push("expected".to_string());
        }

        let mut table = Table::new();
        table.set_header(header);
        for row in &self.rows {
            let mut cells = vec![row.dataset.clone()];
            cells.extend(row.collisions.iter().map(|c| c.to_string()));
            if self.expected {
                let bits = u32::try_from(self.maxlen.saturating_mul(8)).unwrap_or(u32::MAX);
                cells.push(format!("{:.1}", expected_collisions(row.keys, bits)));
            }
            table.add_row(cells);
        }
        table
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "Collisions when k := hash[:{}]", self.maxlen)?;
        writeln!(f, "{}", RULE)?;
        write_table(f, self.table())?;
        writeln!(f, "{}", BANNER)
    }
}

/// Write `table` without borders, every column left aligned and followed by a single space.
/// Trailing blanks are cut from each line.
pub(crate) fn write_table(f: &mut fmt::Formatter<'_>, mut table: Table) -> fmt::Result {
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);
    for column in table.column_iter_mut() {
        column.set_padding((0, 1));
    }
    for line in table.to_string().lines() {
        writeln!(f, "{}", line.trim_end())?;
    }
    Ok(())
}
