// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! CRD listing and the uniform view over the two apiextensions generations.
//!
//! The stable (`v1`) generation is listed through the typed `k8s-openapi`
//! resource. The legacy (`v1beta1`) generation was removed from upstream
//! Kubernetes in 1.22 and from `k8s-openapi` with it, so it is listed as
//! [`DynamicObject`]s and decoded into the few spec fields this tool reads.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::{ApiResource, DynamicObject, GroupVersionKind, ListParams};
use kube::{Api, Client};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::api::{CRD_KIND, GROUP, LEGACY_VERSION};
use crate::diagnostics::Diagnostics;
use crate::error::{PullError, Result};

/// One declared version of a CRD and its embedded OpenAPI schema, if any
pub struct CrdVersion {
    pub name: String,
    pub schema: Option<Value>,
}

/// Uniform view over one CRD, independent of the API generation it was
/// listed through. The normalizer and writer only see this trait.
pub trait CrdSchemas {
    fn kind(&self) -> &str;
    fn group(&self) -> &str;
    /// Declared versions in API-server order
    fn versions(&self) -> &[CrdVersion];
    /// CRD-level schema shared across versions; legacy generation only
    fn shared_schema(&self) -> Option<&Value> {
        None
    }
    /// Whether skipping a schema-less version deserves a notice
    fn notice_on_missing(&self) -> bool {
        false
    }
}

/// List CRDs through the stable API generation, falling back to the legacy
/// generation when the stable group is not served (HTTP 404). Any other
/// failure, on either path, is fatal.
pub async fn list_custom_resource_definitions(
    client: &Client,
    diag: &dyn Diagnostics,
) -> Result<Vec<Box<dyn CrdSchemas>>> {
    let api: Api<CustomResourceDefinition> = Api::all(client.clone());

    match api.list(&ListParams::default()).await {
        Ok(list) => list
            .items
            .into_iter()
            .map(|crd| StableCrd::from_crd(crd).map(|c| Box::new(c) as Box<dyn CrdSchemas>))
            .collect(),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            diag.legacy_fallback();
            list_legacy(client).await
        }
        Err(e) => Err(PullError::List(e)),
    }
}

async fn list_legacy(client: &Client) -> Result<Vec<Box<dyn CrdSchemas>>> {
    let gvk = GroupVersionKind::gvk(GROUP, LEGACY_VERSION, CRD_KIND);
    let resource = ApiResource::from_gvk(&gvk);
    let api: Api<DynamicObject> = Api::all_with(client.clone(), &resource);

    let list = api
        .list(&ListParams::default())
        .await
        .map_err(PullError::List)?;

    list.items
        .into_iter()
        .map(|obj| LegacyCrd::from_dynamic(obj).map(|c| Box::new(c) as Box<dyn CrdSchemas>))
        .collect()
}

/// Adapter over the stable (`apiextensions.k8s.io/v1`) representation, where
/// every version carries its own schema or none at all.
pub struct StableCrd {
    kind: String,
    group: String,
    versions: Vec<CrdVersion>,
}

impl StableCrd {
    pub fn from_crd(crd: CustomResourceDefinition) -> Result<Self> {
        let kind = crd.spec.names.kind;
        let group = crd.spec.group;

        let versions = crd
            .spec
            .versions
            .into_iter()
            .map(|version| {
                let schema = version
                    .schema
                    .and_then(|validation| validation.open_api_v3_schema)
                    .map(|props| {
                        serde_json::to_value(props).map_err(|e| {
                            PullError::Decode(format!(
                                "schema of {} version {}: {}",
                                kind, version.name, e
                            ))
                        })
                    })
                    .transpose()?;
                Ok(CrdVersion {
                    name: version.name,
                    schema,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(StableCrd {
            kind,
            group,
            versions,
        })
    }
}

impl CrdSchemas for StableCrd {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn versions(&self) -> &[CrdVersion] {
        &self.versions
    }
}

/// Adapter over the legacy (`apiextensions.k8s.io/v1beta1`) representation,
/// where a CRD-level `validation` schema may be shared across all versions.
pub struct LegacyCrd {
    kind: String,
    group: String,
    versions: Vec<CrdVersion>,
    shared_schema: Option<Value>,
}

#[derive(Deserialize)]
struct LegacyCrdSpec {
    group: String,
    names: LegacyCrdNames,
    #[serde(default)]
    versions: Vec<LegacyCrdVersion>,
    validation: Option<LegacyValidation>,
}

#[derive(Deserialize)]
struct LegacyCrdNames {
    kind: String,
}

#[derive(Deserialize)]
struct LegacyCrdVersion {
    name: String,
    schema: Option<LegacyValidation>,
}

#[derive(Deserialize)]
struct LegacyValidation {
    #[serde(rename = "openAPIV3Schema")]
    open_api_v3_schema: Option<Value>,
}

impl LegacyCrd {
    pub fn from_dynamic(obj: DynamicObject) -> Result<Self> {
        let name = obj.metadata.name.unwrap_or_default();
        let spec = obj
            .data
            .get("spec")
            .cloned()
            .ok_or_else(|| PullError::Decode(format!("CRD {} has no spec", name)))?;
        let spec: LegacyCrdSpec = serde_json::from_value(spec)
            .map_err(|e| PullError::Decode(format!("spec of CRD {}: {}", name, e)))?;

        let versions = spec
            .versions
            .into_iter()
            .map(|version| CrdVersion {
                name: version.name,
                schema: version
                    .schema
                    .and_then(|validation| validation.open_api_v3_schema),
            })
            .collect();

        Ok(LegacyCrd {
            kind: spec.names.kind,
            group: spec.group,
            versions,
            shared_schema: spec
                .validation
                .and_then(|validation| validation.open_api_v3_schema),
        })
    }
}

impl CrdSchemas for LegacyCrd {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn versions(&self) -> &[CrdVersion] {
        &self.versions
    }

    fn shared_schema(&self) -> Option<&Value> {
        self.shared_schema.as_ref()
    }

    fn notice_on_missing(&self) -> bool {
        true
    }
}
