//! Record-to-node transformation
//!
//! Turns one raw backend record into a node payload: metadata fields always,
//! scalar fields copied through, reference and media fields rewritten into
//! links carrying the derived identifier of the target node.
//!
//! Faults here are field-level and non-fatal: a value that is missing or not
//! the shape its field declares degrades to an absent property, and the rest
//! of the record is still emitted. A reference whose table name matches no
//! known model is dropped without logging.

use crate::backend::{Pointer, RawObject, MEDIA_ITEM_CLASS};
use crate::node::NodePayload;
use crate::schema::{Field, FieldKind, Model};
use serde_json::{json, Value};
use tracing::warn;

/// Suffix marking a property as a link to other nodes
pub const NODE_LINK_SUFFIX: &str = "___NODE";

/// Fixed property every record's title is read from
const TITLE_KEY: &str = "Title";

/// Build the metadata properties shared by every node payload
pub(crate) fn base_payload(entry: &RawObject) -> NodePayload {
    let mut payload = NodePayload::new();
    payload.insert("id".to_string(), json!(entry.id));
    if let Some(title) = entry.get(TITLE_KEY) {
        payload.insert("title".to_string(), title.clone());
    }
    payload.insert("date".to_string(), json!(entry.created_at));
    payload.insert("createdAt".to_string(), json!(entry.created_at));
    payload.insert("updatedAt".to_string(), json!(entry.updated_at));
    payload
}

/// Transform one raw record of a model into a node payload.
///
/// `models` is the full model set; reference fields need it to match a
/// pointer's storage class back to the owning model.
pub fn transform_record(model: &Model, models: &[Model], entry: &RawObject) -> NodePayload {
    let mut payload = base_payload(entry);

    for field in model.fields() {
        match field.kind {
            FieldKind::Reference => {
                if field.is_list {
                    let links = resolve_links(entry, field, |pointer| {
                        find_model_by_table(models, &pointer.class_name)
                            .map(|foreign| link_to(&foreign.type_name, pointer))
                    });
                    if !links.is_empty() {
                        payload.insert(link_key(field), Value::Array(links));
                    }
                } else if let Some(pointer) = single_pointer(entry, field) {
                    if let Some(foreign) = find_model_by_table(models, &pointer.class_name) {
                        payload.insert(link_key(field), link_to(&foreign.type_name, &pointer));
                    }
                }
            }
            FieldKind::Media => {
                if field.is_list {
                    let links =
                        resolve_links(entry, field, |pointer| Some(link_to(MEDIA_ITEM_CLASS, pointer)));
                    if !links.is_empty() {
                        payload.insert(link_key(field), Value::Array(links));
                    }
                } else if let Some(pointer) = single_pointer(entry, field) {
                    payload.insert(link_key(field), link_to(MEDIA_ITEM_CLASS, &pointer));
                }
            }
            FieldKind::Scalar => {
                if let Some(value) = entry.get(&field.name_id) {
                    payload.insert(field.name_id.clone(), value.clone());
                }
            }
        }
    }

    payload
}

/// Property key for a link field. One rule for list and single variants.
fn link_key(field: &Field) -> String {
    format!("{}{}", field.name_id, NODE_LINK_SUFFIX)
}

fn link_to(type_name: &str, pointer: &Pointer) -> Value {
    json!(sitegraph_common::ident::node_id(type_name, &pointer.id))
}

/// Resolve a list field's elements into links, dropping what cannot resolve
fn resolve_links<F>(entry: &RawObject, field: &Field, resolve: F) -> Vec<Value>
where
    F: Fn(&Pointer) -> Option<Value>,
{
    let Some(value) = entry.get(&field.name_id) else {
        return Vec::new();
    };
    let Some(elements) = value.as_array() else {
        warn!(field = %field.name_id, "List field does not hold an array, skipping");
        return Vec::new();
    };

    elements
        .iter()
        .filter_map(|element| match Pointer::from_value(element) {
            Some(pointer) => resolve(&pointer),
            None => {
                warn!(field = %field.name_id, "List element is not a reference, skipping");
                None
            }
        })
        .collect()
}

/// Read a single-valued link field's pointer, degrading to absent on any fault
fn single_pointer(entry: &RawObject, field: &Field) -> Option<Pointer> {
    let value = entry.get(&field.name_id)?;
    let pointer = Pointer::from_value(value);
    if pointer.is_none() {
        warn!(field = %field.name_id, "Field value is not a reference, skipping");
    }
    pointer
}

fn find_model_by_table<'a>(models: &'a [Model], table_name: &str) -> Option<&'a Model> {
    models.iter().find(|model| model.table_name == table_name)
}
