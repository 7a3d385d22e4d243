use crate::synth::{SchemaDocument, UiSchemaDocument};
use schema_builder_core::{err, Error, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const SCHEMA_FILE_NAME: &str = "schema.json";
pub const UI_SCHEMA_FILE_NAME: &str = "ui_schema.json";

/// The documents generated for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDocuments {
    /// Singular snake_case model name; the output sub-directory.
    pub model_name: String,
    pub schema: SchemaDocument,
    pub ui_schema: UiSchemaDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// The target does not exist and will be written
    Create,

    /// The target already exists and is left alone
    Skip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
    pub action: FileAction,
}

/// Every file a run would touch, in write order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub out_path: PathBuf,
    pub files: Vec<PlannedFile>,
}

/// Outcome of applying a [`Plan`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Files written by this run
    pub created: Vec<PathBuf>,

    /// Files that already existed and were not touched
    pub skipped: Vec<PathBuf>,
}

/// Directory holding the documents of `model_name`. Namespaced names
/// (`admin/post`) nest.
pub fn model_dir(out_path: &Path, model_name: &str) -> PathBuf {
    let mut dir = out_path.to_path_buf();
    dir.extend(model_name.split('/').filter(|part| !part.is_empty()));
    dir
}

/// Decides, without writing anything, where each document goes and whether
/// it would be created or skipped. `exists` reports whether a target is
/// already present.
pub fn plan(
    out_path: impl Into<PathBuf>,
    documents: &[ModelDocuments],
    exists: impl Fn(&Path) -> bool,
) -> Result<Plan> {
    let out_path = out_path.into();
    let mut files = Vec::with_capacity(documents.len() * 2);

    for docs in documents {
        let dir = model_dir(&out_path, &docs.model_name);
        let targets = [
            (dir.join(SCHEMA_FILE_NAME), serde_json::to_string_pretty(&docs.schema)?),
            (
                dir.join(UI_SCHEMA_FILE_NAME),
                serde_json::to_string_pretty(&docs.ui_schema)?,
            ),
        ];

        for (path, contents) in targets {
            let action = if exists(&path) {
                FileAction::Skip
            } else {
                FileAction::Create
            };
            files.push(PlannedFile {
                path,
                contents,
                action,
            });
        }
    }

    Ok(Plan { out_path, files })
}

impl Plan {
    /// Paths that would be created, in order.
    pub fn creates(&self) -> impl Iterator<Item = &Path> + '_ {
        self.paths(FileAction::Create)
    }

    /// Paths that would be skipped, in order.
    pub fn skips(&self) -> impl Iterator<Item = &Path> + '_ {
        self.paths(FileAction::Skip)
    }

    fn paths(&self, action: FileAction) -> impl Iterator<Item = &Path> + '_ {
        self.files
            .iter()
            .filter(move |file| file.action == action)
            .map(|file| file.path.as_path())
    }

    /// Writes every planned file. Existing files are never overwritten, even
    /// if they appeared after planning; they are reported as skipped. Any
    /// other I/O failure aborts.
    pub fn apply(self) -> Result<Report> {
        fs::create_dir_all(&self.out_path).map_err(|e| write_error(e, &self.out_path))?;

        let mut report = Report::default();
        for file in self.files {
            match file.action {
                FileAction::Skip => {
                    tracing::debug!(path = %file.path.display(), "file exists; skipping");
                    report.skipped.push(file.path);
                }
                FileAction::Create => {
                    if write_new(&file.path, &file.contents)? {
                        tracing::debug!(path = %file.path.display(), "created");
                        report.created.push(file.path);
                    } else {
                        tracing::debug!(path = %file.path.display(), "file appeared; skipping");
                        report.skipped.push(file.path);
                    }
                }
            }
        }

        Ok(report)
    }
}

/// Writes `contents` to a new file at `path`. Returns `false` if the file
/// already exists.
fn write_new(path: &Path, contents: &str) -> Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(e, parent))?;
    }

    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(write_error(e, path)),
    };

    file.write_all(contents.as_bytes())
        .map_err(|e| write_error(e, path))?;
    Ok(true)
}

fn write_error(e: io::Error, path: &Path) -> Error {
    Error::from(e).context(err!("failed to write {}", path.display()))
}
