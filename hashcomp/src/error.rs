// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors to be used in hashcomp.
//!
//! Generators and the collision counter validate their arguments and return an indicative error.
//! Only two conditions are fatal for a run that was configured correctly: a word list that cannot
//! be opened and a word list containing the same line twice. Random generators never fail on a
//! duplicate key, they draw again.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type HashCompResult<T> = Result<T, HashCompError>;

/// Collection of errors to be used in hashcomp.
#[derive(Debug, Error)]
pub enum HashCompError {
    /// The word list could not be opened.
    #[error("Cannot open word list {path:?}: {source}")]
    WordListOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list contains the same line more than once.
    #[error("Duplicate word {0:?} in word list")]
    DuplicateWord(String),

    /// Reading from an already opened source failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invalid value was given to the function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No hash function is known under this name.
    #[error("Unknown hash function {0:?}")]
    UnknownHash(String),

    /// A dataset description could not be parsed.
    #[error("Invalid dataset {0:?}")]
    InvalidDataset(String),

    /// The experiment configuration could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for HashCompError {
    fn from(e: serde_json::Error) -> Self {
        HashCompError::Config(e.to_string())
    }
}
