// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! Deterministic output paths and schema file writing.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PullError, Result};

/// Derive the output location for a schema: `root/group/version/kind.json`
/// with the kind lowercased. Pure function of its inputs.
pub fn schema_path(root: &Path, group: &str, version: &str, kind: &str) -> PathBuf {
    root.join(group)
        .join(version)
        .join(format!("{}.json", kind.to_lowercase()))
}

/// Serialize the schema and write it to `path`, creating parent directories
/// as needed and fully overwriting any existing file.
///
/// serde_json stores objects in sorted key order, so identical input schemas
/// produce byte-identical files across runs.
pub fn write_schema(path: &Path, schema: &Value) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| PullError::Write(format!("create {}: {}", dir.display(), e)))?;
    }

    let data = serde_json::to_vec(schema)
        .map_err(|e| PullError::Serialize(format!("{}: {}", path.display(), e)))?;
    fs::write(path, data).map_err(|e| PullError::Write(format!("{}: {}", path.display(), e)))?;

    // Schema files stay world-writable, like the rest of the cache tree.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o666))
            .map_err(|e| PullError::Write(format!("chmod {}: {}", path.display(), e)))?;
    }

    Ok(())
}
