use schema_builder_core::{err, Error, Inflections, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional per-project settings file, looked up in the base path.
pub const PROJECT_FILE_NAME: &str = "SchemaBuilder.toml";

/// Configuration for a generation run.
///
/// Every path is resolved against [`Config::base_path`]; absolute overrides
/// are used as-is.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the application
    pub base_path: PathBuf,

    /// Glob locating model source files
    pub model_path: Option<PathBuf>,

    /// Directory the schema files are written to
    pub out_path: Option<PathBuf>,

    /// Route table file
    pub routes_path: Option<PathBuf>,

    /// Name of the base model type, which never gets a schema
    pub base_model: Option<String>,

    /// Irregular plurals used when matching models to controllers
    pub inflections: Inflections,
}

impl Config {
    pub const DEFAULT_BASE_MODEL: &'static str = "ApplicationRecord";

    /// Create a new Config rooted at `base_path` with default values
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            model_path: None,
            out_path: None,
            routes_path: None,
            base_model: None,
            inflections: Inflections::default(),
        }
    }

    /// Set the model glob, e.g. `app/models/**/*.toml`
    pub fn model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Set the output directory
    pub fn out_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_path = Some(path.into());
        self
    }

    /// Set the route table file
    pub fn routes_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.routes_path = Some(path.into());
        self
    }

    /// Set the base model type name
    pub fn base_model(mut self, name: impl Into<String>) -> Self {
        self.base_model = Some(name.into());
        self
    }

    /// Register an irregular plural
    pub fn plural(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.inflections.insert(singular, plural);
        self
    }

    pub fn get_base_model(&self) -> &str {
        self.base_model
            .as_deref()
            .unwrap_or(Self::DEFAULT_BASE_MODEL)
    }

    pub fn get_model_path(&self) -> PathBuf {
        match &self.model_path {
            Some(path) => self.base_path.join(path),
            None => self.base_path.join("app/models/**/*.toml"),
        }
    }

    pub fn get_out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(path) => self.base_path.join(path),
            None => self.base_path.join("json-schema"),
        }
    }

    pub fn get_routes_path(&self) -> PathBuf {
        match &self.routes_path {
            Some(path) => self.base_path.join(path),
            None => self.base_path.join("config/routes.toml"),
        }
    }

    /// Fills settings not already set from `file`. Inflections are merged,
    /// with entries already on `self` winning.
    pub fn merge_project_file(mut self, file: ProjectFile) -> Self {
        self.model_path = self.model_path.or(file.model_path);
        self.out_path = self.out_path.or(file.out_path);
        self.routes_path = self.routes_path.or(file.routes_path);
        self.base_model = self.base_model.or(file.base_model);

        let mut inflections = file.inflections;
        inflections.extend(&self.inflections);
        self.inflections = inflections;
        self
    }
}

/// Settings read from [`PROJECT_FILE_NAME`]. Relative paths are relative to
/// the base path.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    pub model_path: Option<PathBuf>,
    pub out_path: Option<PathBuf>,
    pub routes_path: Option<PathBuf>,
    pub base_model: Option<String>,
    #[serde(default)]
    pub inflections: Inflections,
}

impl ProjectFile {
    /// Load a project file from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            Error::from(e).context(err!("failed to parse project file {}", path.display()))
        })
    }

    /// Loads `{base_path}/SchemaBuilder.toml`, or returns an empty file if it
    /// does not exist
    pub fn load_or_default(base_path: impl AsRef<Path>) -> Result<Self> {
        let path = base_path.as_ref().join(PROJECT_FILE_NAME);
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }
}
