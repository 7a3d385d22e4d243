//! Maps a model snapshot onto a JSON Schema document and its UI hints.

use indexmap::IndexMap;
use schema_builder_core::{Column, Link, Model};
use serde::Serialize;

/// Fields maintained by the framework. They are never required and are
/// rendered read-only.
pub const IMPLICIT_FIELDS: [&str; 3] = ["created_at", "updated_at", "id"];

/// JSON Schema for one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    #[serde(rename = "type")]
    pub ty: String,
    pub title: String,
    pub description: String,
    pub properties: IndexMap<String, Property>,
    pub required: Vec<String>,
    pub links: Vec<Link>,
}

/// Schema of a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<u64>,
}

/// Presentation hints, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UiSchemaDocument {
    pub fields: IndexMap<String, UiField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiField {
    #[serde(rename = "ui:readonly", skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
}

fn is_implicit(name: &str) -> bool {
    IMPLICIT_FIELDS.contains(&name)
}

impl Property {
    pub fn from_column(column: &Column) -> Property {
        Property {
            ty: column.ty.json_type().to_string(),
            format: column.ty.json_format().map(str::to_string),
            default: column.default.clone(),
            maxlength: column.max_length(),
        }
    }
}

/// Builds the schema and UI schema for `model`. `links` are the links
/// indexed under the model's table name.
pub fn synthesize(model: &Model, links: &[Link]) -> (SchemaDocument, UiSchemaDocument) {
    let mut schema = SchemaDocument {
        ty: "object".to_string(),
        title: model.title.clone(),
        description: model.title.clone(),
        properties: IndexMap::with_capacity(model.columns.len()),
        required: vec![],
        links: links.to_vec(),
    };
    let mut ui_schema = UiSchemaDocument::default();

    for (name, column) in &model.columns {
        schema
            .properties
            .insert(name.clone(), Property::from_column(column));

        if !column.nullable && !is_implicit(name) {
            schema.required.push(name.clone());
        }

        ui_schema.fields.insert(
            name.clone(),
            UiField {
                readonly: is_implicit(name),
            },
        );
    }

    (schema, ui_schema)
}
