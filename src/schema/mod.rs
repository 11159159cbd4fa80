// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! Schema normalization and persistence.

pub mod metadata;
pub mod normalize;
pub mod output;
