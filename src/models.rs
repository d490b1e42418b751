use crate::error::Result;
use crate::graph::DagCheck;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A pipeline node.
///
/// Only the identifier participates in validation. Every other attribute the
/// editor attaches (position, type, data, ...) rides along untouched in
/// `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A directed edge from one node identifier to another.
///
/// Endpoints that name no node in the request are tolerated; such edges are
/// counted but carry no graph structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A pipeline document as submitted by the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRequest {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl PipelineRequest {
    /// Parse a pipeline document from JSON text.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Validation outcome reported back to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

impl From<DagCheck> for PipelineResponse {
    fn from(check: DagCheck) -> Self {
        Self {
            num_nodes: check.node_count,
            num_edges: check.edge_count,
            is_dag: check.is_dag,
        }
    }
}
