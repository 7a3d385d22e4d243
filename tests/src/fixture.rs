use schema_builder::{Config, Writer};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway application tree: model files under `app/models` and an
/// optional `config/routes.toml`.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Fixture {
        Fixture {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `app/models/{relative}`.
    pub fn model(self, relative: &str, source: &str) -> Fixture {
        self.file(&format!("app/models/{relative}"), source)
    }

    /// Writes `config/routes.toml`.
    pub fn routes(self, source: &str) -> Fixture {
        self.file("config/routes.toml", source)
    }

    pub fn file(self, relative: &str, contents: &str) -> Fixture {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    pub fn config(&self) -> Config {
        Config::new(self.path())
    }

    pub fn writer(&self) -> Writer {
        Writer::new(self.config())
    }

    pub fn out_path(&self, relative: &str) -> PathBuf {
        self.path().join("json-schema").join(relative)
    }

    /// Parses a generated file under `json-schema/`.
    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative)).unwrap()
    }

    /// Reads a generated file under `json-schema/`.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.out_path(relative)).unwrap()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture::new()
    }
}
