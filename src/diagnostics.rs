// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! Progress and warning notices emitted while pulling schemas.

use std::path::Path;
use tracing::{info, warn};

/// Sink for the human-readable notices the pull emits. Injected so tests can
/// capture and assert on them.
pub trait Diagnostics {
    /// The stable CRD API group is not served; the legacy listing will be used
    fn legacy_fallback(&self);
    /// A version carries no schema and no fallback is available
    fn missing_schema(&self, kind: &str, version: &str, group: &str);
    /// A normalized schema is about to be written
    fn writing(&self, kind: &str, version: &str, group: &str, path: &Path);
}

/// Production sink, backed by `tracing`
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn legacy_fallback(&self) {
        warn!("apiextensions.k8s.io/v1 is not served by this cluster, falling back to v1beta1");
    }

    fn missing_schema(&self, kind: &str, version: &str, group: &str) {
        warn!(
            "{} version {} of group {} does not contain a schema and will be skipped",
            kind, version, group
        );
    }

    fn writing(&self, kind: &str, version: &str, group: &str, path: &Path) {
        info!(
            "Writing schema for {} version {} of group {} to {}",
            kind,
            version,
            group,
            path.display()
        );
    }
}
