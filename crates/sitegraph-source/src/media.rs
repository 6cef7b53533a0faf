//! Media asset pre-pass
//!
//! Media assets live in one fixed, schema-less class. They are fetched in
//! full before any model is processed, so every media link written later
//! has a target that exists by the end of the run. No site or status filter
//! applies to them.

use crate::backend::{BackendClient, FileRef, RawObject, MEDIA_ITEM_CLASS};
use crate::emit::{emit_node, NodeSink};
use crate::node::NodePayload;
use crate::transform::base_payload;
use serde_json::json;
use sitegraph_common::Result;
use tracing::{debug, warn};

/// Fetch every media asset and emit each as a `MediaItem` node.
///
/// Returns the number of nodes emitted.
pub async fn prefetch_media<S: NodeSink>(client: &BackendClient, sink: &mut S) -> Result<usize> {
    let entries = client.query(MEDIA_ITEM_CLASS).find().await?;
    debug!(count = entries.len(), "Fetched media items");

    for entry in &entries {
        let payload = media_payload(entry);
        emit_node(sink, MEDIA_ITEM_CLASS, payload).await?;
    }

    Ok(entries.len())
}

/// Build a media item's payload: shared metadata plus the resolved file URL
/// when the asset has one.
fn media_payload(entry: &RawObject) -> NodePayload {
    let mut payload = base_payload(entry);

    if let Some(value) = entry.get("file") {
        match FileRef::from_value(value) {
            Some(file) => {
                debug!(media_item = %entry.id, url = %file.url, "Resolved media file");
                payload.insert("url".to_string(), json!(file.url));
            }
            None => {
                warn!(media_item = %entry.id, "Media item file property is not a file, skipping");
            }
        }
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn media_entry(file: Option<serde_json::Value>) -> RawObject {
        let mut object = json!({
            "objectId": "M1",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-01T10:00:00.000Z",
            "Title": "Logo",
        });
        if let Some(file) = file {
            object.as_object_mut().unwrap().insert("file".to_string(), file);
        }
        serde_json::from_value(object).unwrap()
    }

    #[test]
    fn test_media_payload_with_file() {
        let entry = media_entry(Some(json!({
            "__type": "File",
            "name": "y.png",
            "url": "https://x/y.png"
        })));
        let payload = media_payload(&entry);
        assert_eq!(payload["url"], json!("https://x/y.png"));
    }

    #[test]
    fn test_media_payload_without_file() {
        let payload = media_payload(&media_entry(None));
        assert!(!payload.contains_key("url"));
    }

    #[test]
    fn test_media_payload_malformed_file() {
        let payload = media_payload(&media_entry(Some(json!("not-a-file"))));
        assert!(!payload.contains_key("url"));
    }
}
