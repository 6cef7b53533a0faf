//! Output node types
//!
//! A node is one transformed record plus the identity metadata the host
//! graph requires. Nodes are never mutated after creation; their lifetime is
//! one build.

use serde::{Deserialize, Serialize};

/// Transformed record properties, keyed by external field key.
///
/// The map's key order is deterministic for a given record, so serializing
/// the same payload always yields the same bytes and the same content digest.
pub type NodePayload = serde_json::Map<String, serde_json::Value>;

/// Bookkeeping metadata attached to every committed node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInternal {
    /// External type name of the node
    #[serde(rename = "type")]
    pub type_name: String,

    /// Serialized form of the source payload
    pub content: String,

    /// Content fingerprint of the source payload
    #[serde(rename = "contentDigest")]
    pub content_digest: String,
}

/// A committed node handed to the host node store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Derived stable identifier
    pub id: String,

    /// Parent node; always `None` for sourced nodes (parents are for nodes
    /// derived from other nodes)
    pub parent: Option<String>,

    /// Child nodes; always empty for sourced nodes
    pub children: Vec<String>,

    /// Identity and fingerprint metadata
    pub internal: NodeInternal,

    /// Transformed record properties
    #[serde(flatten)]
    pub payload: NodePayload,
}
