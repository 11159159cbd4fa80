// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

/// Group/version/kind of the CustomResourceDefinition resource itself
pub mod api {
    pub const GROUP: &str = "apiextensions.k8s.io";
    /// Pre-stable CRD API generation, served by clusters older than 1.16
    pub const LEGACY_VERSION: &str = "v1beta1";
    pub const CRD_KIND: &str = "CustomResourceDefinition";
}

/// Schema output location
pub mod output {
    /// Path components of the default schema root, joined under the home directory
    pub const SCHEMA_SUBDIRS: [&str; 3] = [".crdpull", "schema", "k8s"];
    /// Overrides the default schema root when set
    pub const SCHEMA_DIR_ENV: &str = "CRDPULL_SCHEMA_DIR";
}
