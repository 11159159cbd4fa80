// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API access: CRD listing across the two apiextensions generations.

pub mod crds;

pub use crds::{list_custom_resource_definitions, CrdSchemas, CrdVersion};
