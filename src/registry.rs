// lawmap-fixtures/src/registry.rs

use jsonschema::{Draft, Resource, Validator};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::{
    error::{FixtureError, Result},
    schema::{SchemaId, SchemaSet},
};

/// A single schema violation reported for one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer into the record; empty for the record itself.
    pub instance_path: String,
    pub schema_path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Compiled validator for the item schema, with the node and edge schemas
/// registered as resources so the item schema's `$ref`s resolve locally.
pub struct ItemValidator {
    validator: Validator,
}

impl ItemValidator {
    pub fn compile(set: &SchemaSet) -> Result<Self> {
        let mut resources: Vec<(String, Resource)> = Vec::new();
        for id in [SchemaId::Node, SchemaId::Edge] {
            let doc = set.get(id);
            resources.push((id.resource_uri(), Draft::Draft7.create_resource(doc.clone())));
            if let Some(declared) = doc.get("$id").and_then(Value::as_str) {
                let resource = Draft::Draft7.create_resource(doc.clone());
                resources.push((declared.to_string(), resource));
            }
        }
        debug!(count = resources.len(), "registering sub-schema resources");

        // Every document is read as draft 7 whatever its `$schema` says.
        // Unknown keywords are ignored and `format` is annotation only.
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .should_validate_formats(false)
            .with_resources(resources.into_iter())
            .build(set.get(SchemaId::Item))
            .map_err(|e| FixtureError::SchemaCompile {
                name: SchemaId::Item.file_name(),
                reason: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Collects every violation for `record`; empty means valid.
    pub fn validate(&self, record: &Value) -> Vec<Violation> {
        if self.validator.is_valid(record) {
            return Vec::new();
        }
        self.validator
            .iter_errors(record)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}
