//! Sourcing pipeline
//!
//! One run, strictly sequential: media pre-pass, schema discovery, then per
//! model fetch-transform-emit. Every backend call is awaited before the next
//! begins; the first unhandled backend failure aborts the run.

use crate::backend::BackendClient;
use crate::config::SourceConfig;
use crate::emit::{emit_node, NodeSink};
use crate::{media, schema, transform};
use serde::{Deserialize, Serialize};
use sitegraph_common::Result;
use tracing::{debug, info};

/// Status property records are filtered on
const STATUS_KEY: &str = "t__status";

/// Only records in this status are sourced
const STATUS_PUBLISHED: &str = "Published";

/// Summary of one sourcing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    /// Models discovered in the site's schema
    pub models: usize,

    /// Nodes committed to the host store, media items included
    pub nodes: usize,

    /// Media item nodes committed by the pre-pass
    pub media_items: usize,
}

/// A configured sourcing run
pub struct SourcePipeline {
    config: SourceConfig,
    client: BackendClient,
}

impl SourcePipeline {
    /// Create a pipeline from a sourcing configuration
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = BackendClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Run the full sourcing pass, committing every node to `sink`.
    pub async fn run<S: NodeSink>(&self, sink: &mut S) -> Result<SourceStats> {
        info!(server_url = %self.config.server_url, site = %self.config.site_id, "Starting sourcing run");

        let media_items = media::prefetch_media(&self.client, sink).await?;

        let models = schema::load_models(&self.client, &self.config).await?;
        info!(models = models.len(), media_items, "Loaded content schema");

        let mut nodes = media_items;
        for model in &models {
            let entries = self
                .client
                .query(&model.table_name)
                .eq(STATUS_KEY, STATUS_PUBLISHED)
                .find()
                .await?;

            debug!(model = %model.name, records = entries.len(), "Sourcing model records");

            for entry in &entries {
                let payload = transform::transform_record(model, &models, entry);
                emit_node(sink, &model.type_name, payload).await?;
                nodes += 1;
            }
        }

        info!(nodes, "Sourcing run complete");

        Ok(SourceStats {
            models: models.len(),
            nodes,
            media_items,
        })
    }
}
