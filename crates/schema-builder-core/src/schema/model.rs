use super::{Column, Inflections, Name};
use indexmap::IndexMap;

/// A snapshot of one application model: its name and its columns in
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the model type
    pub name: Name,

    /// Human readable title, used as the schema title and description
    pub title: String,

    /// Columns keyed by name, in declaration order
    pub columns: IndexMap<String, Column>,
}

impl Model {
    /// Creates a model with no columns, titled after its humanized name.
    pub fn new(name: impl Into<Name>) -> Self {
        let name = name.into();
        let title = name.human();
        Self {
            name,
            title,
            columns: IndexMap::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Appends a column. A column with the same name replaces the earlier
    /// one in place.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.insert(column.name.clone(), column);
        self
    }

    /// Singular snake_case name, also the output directory (`admin/post`).
    pub fn model_name(&self) -> String {
        self.name.underscore()
    }

    /// Pluralized name used to find the model's routes (`admin/posts`).
    pub fn table_name(&self, inflections: &Inflections) -> String {
        self.name.tableize(inflections)
    }
}
