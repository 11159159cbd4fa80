// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use crdpull::config::Config;
use crdpull::diagnostics::LogDiagnostics;
use crdpull::pull::pull;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Writing schemas under {}", config.schema_root.display());

    // Create Kubernetes client from ambient credentials
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    pull(&client, &config, &LogDiagnostics).await?;

    Ok(())
}
