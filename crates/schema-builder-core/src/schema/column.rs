use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata about one model attribute, as reported by the model source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// The column name
    pub name: String,

    /// Logical column type
    #[serde(rename = "type")]
    pub ty: ColumnType,

    /// True if the column accepts `NULL`.
    #[serde(rename = "null", default = "nullable_by_default")]
    pub nullable: bool,

    /// Declared default value, a JSON scalar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Declared length limit. Only meaningful for [`ColumnType::String`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

fn nullable_by_default() -> bool {
    true
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: true,
            default: None,
            limit: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The length limit to publish, if any. Limits on non-string columns are
    /// ignored.
    pub fn max_length(&self) -> Option<u64> {
        match self.ty {
            ColumnType::String => self.limit,
            _ => None,
        }
    }
}

/// Logical column type. Unknown native types are kept verbatim in
/// [`ColumnType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    String,
    Integer,
    Number,
    Boolean,
    Text,
    Date,
    Datetime,
    Decimal,
    Other(String),
}

impl ColumnType {
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::Datetime => "datetime",
            ColumnType::Decimal => "decimal",
            ColumnType::Other(name) => name,
        }
    }

    /// The JSON Schema `type` for this column. Types without a mapping pass
    /// through under their own name.
    pub fn json_type(&self) -> &str {
        match self {
            ColumnType::Date | ColumnType::Datetime | ColumnType::Text => "string",
            ColumnType::Decimal => "number",
            other => other.as_str(),
        }
    }

    /// The JSON Schema `format` for this column, if any.
    pub fn json_format(&self) -> Option<&'static str> {
        match self {
            ColumnType::Date => Some("date"),
            ColumnType::Datetime => Some("date-time"),
            _ => None,
        }
    }
}

impl From<&str> for ColumnType {
    fn from(src: &str) -> Self {
        match src {
            "string" => ColumnType::String,
            "integer" => ColumnType::Integer,
            "number" => ColumnType::Number,
            "boolean" => ColumnType::Boolean,
            "text" => ColumnType::Text,
            "date" => ColumnType::Date,
            "datetime" => ColumnType::Datetime,
            "decimal" => ColumnType::Decimal,
            other => ColumnType::Other(other.to_string()),
        }
    }
}

impl From<String> for ColumnType {
    fn from(src: String) -> Self {
        ColumnType::from(src.as_str())
    }
}

impl From<ColumnType> for String {
    fn from(ty: ColumnType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
