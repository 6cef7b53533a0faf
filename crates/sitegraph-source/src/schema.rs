//! Content schema discovery
//!
//! One sourcing run loads the schema exactly once: the site's models, and
//! for each model its enabled fields. The schema is immutable afterward and
//! drives every downstream transformation decision.

use crate::backend::{BackendClient, RawObject, MODEL_CLASS, MODEL_FIELD_CLASS, SITE_CLASS};
use crate::config::SourceConfig;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use sitegraph_common::{Result, SitegraphError};
use std::collections::HashMap;
use tracing::debug;

/// Kind of a model field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain value copied through unchanged
    Scalar,
    /// Link to a record of another model
    Reference,
    /// Link to an uploaded media asset
    Media,
}

impl FieldKind {
    /// Parse the backend's field type string.
    ///
    /// Anything other than the two recognized link kinds is a plain scalar.
    pub fn from_backend(type_name: Option<&str>) -> Self {
        match type_name {
            Some("Reference") => FieldKind::Reference,
            Some("Media") => FieldKind::Media,
            _ => FieldKind::Scalar,
        }
    }
}

/// One attribute of a model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// External key the value is stored under
    pub name_id: String,

    /// Display name
    pub name: String,

    /// Whether the field holds a list of values
    pub is_list: bool,

    /// Field kind
    pub kind: FieldKind,
}

/// A content model discovered from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Internal short name
    pub name: String,

    /// Derived external type identifier
    pub type_name: String,

    /// Backend identity of the model record
    pub id: String,

    /// Backend storage class holding this model's records
    pub table_name: String,

    /// Enabled fields; `None` when the model has no enabled fields
    pub fields: Option<Vec<Field>>,
}

impl Model {
    /// Iterate the model's fields, treating `None` and empty identically
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().flatten()
    }
}

/// Derive the external type identifier for a model.
///
/// The configured prefix and the model's short name are joined with a space
/// and cased into a single PascalCase identifier, e.g. ("Blog", "post")
/// becomes "BlogPost".
pub fn derive_type_name(prefix: &str, name: &str) -> String {
    format!("{} {}", prefix, name).to_case(Case::Pascal)
}

/// Load the ordered set of models belonging to the configured site, each
/// carrying its resolved field list.
///
/// Any backend query failure aborts the run. Two models deriving the same
/// type name is a configuration fault and is rejected here, before any
/// record is fetched.
pub async fn load_models(client: &BackendClient, config: &SourceConfig) -> Result<Vec<Model>> {
    let records = client
        .query(MODEL_CLASS)
        .eq_pointer("site", SITE_CLASS, &config.site_id)
        .find()
        .await?;

    let mut models = Vec::with_capacity(records.len());
    for record in &records {
        let name = record.get_str("nameId").unwrap_or_default().to_string();
        let type_name = derive_type_name(&config.type_prefix, &name);
        let fields = load_fields(client, record).await?;

        debug!(
            model = %name,
            type_name = %type_name,
            fields = fields.as_ref().map_or(0, Vec::len),
            "Discovered model"
        );

        models.push(Model {
            name,
            type_name,
            id: record.id.clone(),
            table_name: record.get_str("tableName").unwrap_or_default().to_string(),
            fields,
        });
    }

    ensure_unique_type_names(&models)?;
    Ok(models)
}

/// Load a model's enabled field definitions.
///
/// A model with zero enabled fields yields `None`.
async fn load_fields(client: &BackendClient, model_record: &RawObject) -> Result<Option<Vec<Field>>> {
    let records = client
        .query(MODEL_FIELD_CLASS)
        .eq_pointer("model", MODEL_CLASS, &model_record.id)
        .eq("isDisabled", false)
        .find()
        .await?;

    if records.is_empty() {
        return Ok(None);
    }

    let fields = records
        .iter()
        .map(|record| Field {
            name_id: record.get_str("nameId").unwrap_or_default().to_string(),
            name: record.get_str("name").unwrap_or_default().to_string(),
            is_list: record.get_bool("isList").unwrap_or(false),
            kind: FieldKind::from_backend(record.get_str("type")),
        })
        .collect();

    Ok(Some(fields))
}

fn ensure_unique_type_names(models: &[Model]) -> Result<()> {
    let mut seen: HashMap<&str, &Model> = HashMap::new();
    for model in models {
        if let Some(first) = seen.insert(&model.type_name, model) {
            return Err(SitegraphError::DuplicateTypeName {
                type_name: model.type_name.clone(),
                first: first.name.clone(),
                second: model.name.clone(),
            });
        }
    }
    Ok(())
}
