// lawmap-fixtures/src/graph.rs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Version {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Provenance for a node's content.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    pub labels: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub props: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub sources: Vec<SourceMeta>,
}

/// Directed relationship. `edge_type` is stored separately from the
/// line-level `type` tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    #[serde(default)]
    pub id: Option<String>,
    pub edge_type: String,
    pub from_id: String,
    pub to_id: String,
    #[serde(default)]
    pub props: BTreeMap<String, serde_json::Value>,
}

/// One fixture line, tagged by its `type` field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GraphItem {
    Node(Node),
    Edge(Edge),
}

/// A reference problem found after all lines were read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefProblem {
    DuplicateNode { line: u64, id: String },
    DanglingEdge { line: u64, missing: String },
}

impl RefProblem {
    pub fn line(&self) -> u64 {
        match self {
            Self::DuplicateNode { line, .. } | Self::DanglingEdge { line, .. } => *line,
        }
    }
}

/// Node ids and edge endpoints seen so far, keyed back to their line numbers.
#[derive(Debug, Default)]
pub struct RefIndex {
    nodes: HashMap<String, u64>,
    duplicates: Vec<RefProblem>,
    edges: Vec<(u64, String, String)>,
}

impl RefIndex {
    pub fn new() -> Self { Self::default() }

    pub fn record(&mut self, line: u64, item: GraphItem) {
        match item {
            GraphItem::Node(n) => {
                if self.nodes.contains_key(&n.id) {
                    self.duplicates.push(RefProblem::DuplicateNode { line, id: n.id });
                } else {
                    self.nodes.insert(n.id, line);
                }
            }
            GraphItem::Edge(e) => self.edges.push((line, e.from_id, e.to_id)),
        }
    }

    /// Duplicates and dangling endpoints, ordered by line.
    pub fn problems(self) -> Vec<RefProblem> {
        let mut out = self.duplicates;
        for (line, from, to) in self.edges {
            for endpoint in [from, to] {
                if !self.nodes.contains_key(&endpoint) {
                    out.push(RefProblem::DanglingEdge { line, missing: endpoint });
                }
            }
        }
        out.sort_by_key(RefProblem::line);
        out
    }
}
