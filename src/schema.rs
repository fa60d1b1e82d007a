// lawmap-fixtures/src/schema.rs

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::error::{FixtureError, Result};

/// The three schema documents the validator is built from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SchemaId { Item, Node, Edge }

impl SchemaId {
    pub const ALL: [SchemaId; 3] = [SchemaId::Item, SchemaId::Node, SchemaId::Edge];

    /// File name on disk, also the identifier `$ref`s use to reach it.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Item => "graph_item.schema.json",
            Self::Node => "graph_node.schema.json",
            Self::Edge => "graph_edge.schema.json",
        }
    }

    /// URI the document is registered under. Relative `$ref`s in a schema
    /// without its own `$id` resolve against `json-schema:///`.
    pub fn resource_uri(&self) -> String {
        format!("json-schema:///{}", self.file_name())
    }
}

/// Parsed schema documents, loaded once and kept for the whole run.
#[derive(Clone, Debug)]
pub struct SchemaSet {
    item: Value,
    node: Value,
    edge: Value,
}

impl SchemaSet {
    /// Reads and parses all three documents from `dir`. Any missing or
    /// malformed file is fatal.
    pub async fn load(dir: &Path) -> Result<Self> {
        let item = load_one(dir, SchemaId::Item).await?;
        let node = load_one(dir, SchemaId::Node).await?;
        let edge = load_one(dir, SchemaId::Edge).await?;
        Ok(Self { item, node, edge })
    }

    pub fn from_values(item: Value, node: Value, edge: Value) -> Self {
        Self { item, node, edge }
    }

    pub fn get(&self, id: SchemaId) -> &Value {
        match id {
            SchemaId::Item => &self.item,
            SchemaId::Node => &self.node,
            SchemaId::Edge => &self.edge,
        }
    }
}

async fn load_one(dir: &Path, id: SchemaId) -> Result<Value> {
    let path = dir.join(id.file_name());
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| FixtureError::SchemaRead {
            name: id.file_name(),
            path: path.clone(),
            source,
        })?;
    let value = serde_json::from_str(&text)
        .map_err(|source| FixtureError::SchemaParse {
            name: id.file_name(),
            path: path.clone(),
            source,
        })?;
    debug!(schema = id.file_name(), path = %path.display(), "loaded schema");
    Ok(value)
}
