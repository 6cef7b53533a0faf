//! Node emission
//!
//! The only point where results become externally visible. Each transformed
//! payload is wrapped with identity metadata and handed to the host node
//! store; there is no rollback across a batch.

use crate::node::{Node, NodeInternal, NodePayload};
use async_trait::async_trait;
use serde_json::Value;
use sitegraph_common::{digest::content_digest, ident::node_id, Result};

/// Host-provided node store
///
/// The host owns persistence and deduplication; this library's only
/// obligation is to hand over well-formed nodes.
#[async_trait]
pub trait NodeSink: Send {
    /// Commit one node to the host graph
    async fn create_node(&mut self, node: Node) -> Result<()>;
}

/// Wrap a transformed payload with identity metadata and commit it.
///
/// The node's identifier derives from the target type name and the backend
/// record id carried in the payload, through the same function reference
/// resolution uses, so links always agree with the nodes they target.
/// Returns the committed node's identifier.
pub async fn emit_node<S>(sink: &mut S, type_name: &str, mut payload: NodePayload) -> Result<String>
where
    S: NodeSink + ?Sized,
{
    let record_id = payload
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let content = serde_json::to_string(&payload)?;
    let digest = content_digest(&payload)?;
    let id = node_id(type_name, &record_id);

    // the backend id was only needed for derivation; the committed node is
    // identified by the derived id
    payload.remove("id");

    let node = Node {
        id: id.clone(),
        parent: None,
        children: Vec::new(),
        internal: NodeInternal {
            type_name: type_name.to_string(),
            content,
            content_digest: digest,
        },
        payload,
    };

    sink.create_node(node).await?;
    Ok(id)
}
