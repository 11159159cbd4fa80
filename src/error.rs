// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PullError {
    #[error("Failed to list CustomResourceDefinitions: {0}")]
    List(#[source] kube::Error),

    #[error("Failed to decode CRD: {0}")]
    Decode(String),

    #[error("Invalid metadata template: {0}")]
    Template(String),

    #[error("Failed to serialize schema: {0}")]
    Serialize(String),

    #[error("Failed to write schema: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, PullError>;
