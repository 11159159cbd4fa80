// Copyright 2026 The crdpull authors
// SPDX-License-Identifier: Apache-2.0

//! Patches a CRD version schema so it validates the universal envelope
//! fields (`metadata`, `kind`, `apiVersion`) every Kubernetes object carries.

use serde_json::{json, Map, Value};

/// Normalize a schema in place:
/// - `properties.metadata` is overwritten with a copy of the metadata
///   template, discarding whatever the CRD author declared there;
/// - `properties.kind` and `properties.apiVersion` are added as string-typed
///   stubs only if absent.
///
/// The template is deep-copied into each schema, never shared, so later
/// mutation of one normalized schema cannot leak into another.
pub fn normalize(schema: &mut Value, metadata_template: &Value) {
    if !schema.is_object() {
        *schema = Value::Object(Map::new());
    }
    let Some(root) = schema.as_object_mut() else {
        return;
    };

    let properties = root
        .entry("properties")
        .or_insert_with(|| Value::Object(Map::new()));
    if !properties.is_object() {
        *properties = Value::Object(Map::new());
    }
    let Some(properties) = properties.as_object_mut() else {
        return;
    };

    properties.insert("metadata".to_string(), metadata_template.clone());
    properties
        .entry("kind".to_string())
        .or_insert_with(string_property);
    properties
        .entry("apiVersion".to_string())
        .or_insert_with(string_property);
}

fn string_property() -> Value {
    json!({ "type": "string" })
}
