// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::output::{SCHEMA_DIR_ENV, SCHEMA_SUBDIRS};

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory the schema tree is written under
    pub schema_root: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, defaulting the schema
    /// root to `~/.crdpull/schema/k8s`
    pub fn from_env() -> Result<Self> {
        Self::with_override(env::var_os(SCHEMA_DIR_ENV))
    }

    fn with_override(schema_dir: Option<OsString>) -> Result<Self> {
        let schema_root = match schema_dir {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = dirs::home_dir().context("home directory could not be determined")?;
                SCHEMA_SUBDIRS.iter().fold(home, |path, part| path.join(part))
            }
        };

        Ok(Config { schema_root })
    }
}
