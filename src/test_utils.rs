// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses and capturing
//! diagnostics.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

use crate::diagnostics::Diagnostics;

/// List path of the stable CRD API generation
pub const STABLE_LIST_PATH: &str = "/apis/apiextensions.k8s.io/v1/customresourcedefinitions";
/// List path of the legacy CRD API generation
pub const LEGACY_LIST_PATH: &str = "/apis/apiextensions.k8s.io/v1beta1/customresourcedefinitions";

/// A mock HTTP service that returns predefined responses based on request
/// paths. Unmatched requests get a 404 `Status`, which is exactly what an
/// API server answers for a group it does not serve.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, path: &str) -> Option<(u16, String)> {
        self.responses.lock().unwrap().get(path).cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let response = self.find_response(req.uri().path());

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| {
                (
                    404,
                    status_json(404, "NotFound", "the server could not find the requested resource"),
                )
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Build a CRD list response body for either API generation
pub fn crd_list_json(api_version: &str, items: &[Value]) -> String {
    serde_json::json!({
        "apiVersion": api_version,
        "kind": "CustomResourceDefinitionList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Build a `Status` response body with the given code and reason
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// A notice captured by [`RecordingDiagnostics`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    LegacyFallback,
    MissingSchema {
        kind: String,
        version: String,
        group: String,
    },
    Writing {
        kind: String,
        version: String,
        group: String,
        path: PathBuf,
    },
}

/// Diagnostics sink that records every notice for later assertions
#[derive(Default)]
pub struct RecordingDiagnostics {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingDiagnostics {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn fallback_count(&self) -> usize {
        self.notices()
            .iter()
            .filter(|n| matches!(n, Notice::LegacyFallback))
            .count()
    }

    fn record(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn legacy_fallback(&self) {
        self.record(Notice::LegacyFallback);
    }

    fn missing_schema(&self, kind: &str, version: &str, group: &str) {
        self.record(Notice::MissingSchema {
            kind: kind.to_string(),
            version: version.to_string(),
            group: group.to_string(),
        });
    }

    fn writing(&self, kind: &str, version: &str, group: &str, path: &Path) {
        self.record(Notice::Writing {
            kind: kind.to_string(),
            version: version.to_string(),
            group: group.to_string(),
            path: path.to_path_buf(),
        });
    }
}
