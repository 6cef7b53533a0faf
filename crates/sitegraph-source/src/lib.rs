//! Sitegraph Source Library
//!
//! Sources content from a remote object-query backend into a host-provided
//! node store. One sourcing run discovers the site's content schema, fetches
//! every model's published records, and emits them as typed nodes with
//! reference and media fields resolved into links between nodes.
//!
//! # Example
//!
//! ```no_run
//! use sitegraph_common::Result;
//! use sitegraph_source::{source_nodes, Node, NodeSink, SourceConfig};
//!
//! struct PrintSink;
//!
//! #[async_trait::async_trait]
//! impl NodeSink for PrintSink {
//!     async fn create_node(&mut self, node: Node) -> Result<()> {
//!         tracing::info!(id = %node.id, type_name = %node.internal.type_name, "node");
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SourceConfig::from_env()?;
//!     let mut sink = PrintSink;
//!     let stats = source_nodes(config, &mut sink).await?;
//!     tracing::info!(nodes = stats.nodes, "Sourcing finished");
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod emit;
pub mod media;
pub mod node;
pub mod pipeline;
pub mod schema;
pub mod transform;

pub use config::SourceConfig;
pub use emit::NodeSink;
pub use node::{Node, NodeInternal, NodePayload};
pub use pipeline::{SourcePipeline, SourceStats};
pub use schema::{Field, FieldKind, Model};

use sitegraph_common::Result;

/// Run a full sourcing pass against the configured backend, committing every
/// produced node to `sink`.
pub async fn source_nodes<S: NodeSink>(config: SourceConfig, sink: &mut S) -> Result<SourceStats> {
    SourcePipeline::new(config)?.run(sink).await
}
