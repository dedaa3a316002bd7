// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/// This module contains the fast non-cryptographic hash functions under comparison: the FNV
/// family in its 32, 64 and 128 bit variants and the one-shot XXH3 wrappers.
///
/// Warning: All schemes in this file are completely unsafe to use for anything adversarial.
pub mod hash;
