// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod kubernetes;
pub mod pull;
pub mod schema;

#[cfg(test)]
pub mod test_utils;
