// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! The embedded ObjectMeta schema fragment injected into every output schema.

use serde_json::Value;

use crate::error::{PullError, Result};

/// JSON Schema of the standard object-metadata envelope shared by all
/// Kubernetes resources
const OBJECT_META_JSON: &str = include_str!("object_meta.json");

/// Parse the embedded metadata template. Called once per run; each normalized
/// schema receives its own deep copy of the returned value.
pub fn metadata_template() -> Result<Value> {
    serde_json::from_str(OBJECT_META_JSON).map_err(|e| PullError::Template(e.to_string()))
}
