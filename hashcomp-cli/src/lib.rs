// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Plumbing shared by the hashcomp command line tools.

use hashcomp::error::HashCompError;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Route progress events to stderr, keeping stdout for the report. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// The process exit code for an error that ended a run.
pub fn exit_code(error: &HashCompError) -> exitcode::ExitCode {
    match error {
        HashCompError::WordListOpen { .. } => exitcode::NOINPUT,
        HashCompError::Io(_) => exitcode::IOERR,
        HashCompError::Config(_) => exitcode::CONFIG,
        HashCompError::DuplicateWord(_)
        | HashCompError::InvalidInput(_)
        | HashCompError::UnknownHash(_)
        | HashCompError::InvalidDataset(_) => exitcode::DATAERR,
    }
}
