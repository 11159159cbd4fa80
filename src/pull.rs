// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! The extraction pipeline: list CRDs, normalize each version's schema,
//! write one file per (group, version, kind).

use kube::Client;
use serde_json::Value;
use std::path::Path;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::kubernetes::{list_custom_resource_definitions, CrdSchemas};
use crate::schema::metadata::metadata_template;
use crate::schema::normalize::normalize;
use crate::schema::output::{schema_path, write_schema};

/// Pull all CRD schemas from the cluster into the configured schema root.
pub async fn pull(client: &Client, config: &Config, diag: &dyn Diagnostics) -> Result<()> {
    let crds = list_custom_resource_definitions(client, diag).await?;
    let template = metadata_template()?;
    process_crds(&crds, &template, &config.schema_root, diag)
}

/// Process CRDs sequentially, in API-server order. A version without a schema
/// falls back to the CRD's shared schema when the representation has one;
/// otherwise it is skipped. The first filesystem or serialization failure
/// aborts the run; files already written stay on disk.
pub fn process_crds(
    crds: &[Box<dyn CrdSchemas>],
    template: &Value,
    root: &Path,
    diag: &dyn Diagnostics,
) -> Result<()> {
    for crd in crds {
        for version in crd.versions() {
            let mut schema = match version.schema.as_ref().or_else(|| crd.shared_schema()) {
                Some(schema) => schema.clone(),
                None => {
                    if crd.notice_on_missing() {
                        diag.missing_schema(crd.kind(), &version.name, crd.group());
                    }
                    continue;
                }
            };

            normalize(&mut schema, template);

            let path = schema_path(root, crd.group(), &version.name, crd.kind());
            diag.writing(crd.kind(), &version.name, crd.group(), &path);
            write_schema(&path, &schema)?;
        }
    }

    Ok(())
}
