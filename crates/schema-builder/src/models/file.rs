use schema_builder_core::{Column, ColumnType, Error, Model, Name, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// On-disk model declaration. One model per file.
#[derive(Debug, Deserialize)]
struct ModelFile {
    name: String,

    title: Option<String>,

    #[serde(default, rename = "abstract")]
    is_abstract: bool,

    #[serde(default)]
    columns: Vec<ColumnDef>,
}

#[derive(Debug, Deserialize)]
struct ColumnDef {
    name: String,

    #[serde(rename = "type")]
    ty: ColumnType,

    #[serde(rename = "null", default = "nullable_by_default")]
    nullable: bool,

    default: Option<toml::Value>,

    limit: Option<u64>,
}

fn nullable_by_default() -> bool {
    true
}

impl ColumnDef {
    fn into_column(self, path: &Path) -> Result<Column> {
        let default = match self.default {
            None => None,
            Some(toml::Value::String(value)) => Some(value.into()),
            Some(toml::Value::Integer(value)) => Some(value.into()),
            Some(toml::Value::Float(value)) => Some(value.into()),
            Some(toml::Value::Boolean(value)) => Some(value.into()),
            Some(toml::Value::Datetime(value)) => Some(value.to_string().into()),
            Some(toml::Value::Array(_) | toml::Value::Table(_)) => {
                return Err(Error::model_load(
                    path,
                    format!(
                        "default of column `{}` must be a string, number, boolean or date, not an array or table",
                        self.name
                    ),
                ))
            }
        };

        Ok(Column {
            name: self.name,
            ty: self.ty,
            nullable: self.nullable,
            default,
            limit: self.limit,
        })
    }
}

/// Loads the model declared in `path`. Returns `None` for abstract models.
pub(crate) fn load_model_file(path: &Path) -> Result<Option<Model>> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| Error::model_load(path, e.to_string()))?;
    parse_model(path, &contents)
}

fn parse_model(path: &Path, contents: &str) -> Result<Option<Model>> {
    let file: ModelFile =
        toml::from_str(contents).map_err(|e| Error::model_load(path, e.message()))?;

    if file.name.trim().is_empty() {
        return Err(Error::model_load(path, "model name is empty"));
    }

    if file.is_abstract {
        tracing::debug!(model = %file.name, path = %path.display(), "skipping abstract model");
        return Ok(None);
    }

    let mut seen = HashSet::new();
    for column in &file.columns {
        if !seen.insert(column.name.as_str()) {
            return Err(Error::model_load(
                path,
                format!("column `{}` is declared more than once", column.name),
            ));
        }
    }

    let mut model = Model::new(Name::new(&file.name));
    if let Some(title) = file.title {
        model = model.title(title);
    }
    for column in file.columns {
        model = model.column(column.into_column(path)?);
    }

    Ok(Some(model))
}
