use super::Error;
use std::path::{Path, PathBuf};

/// Error when a model source file cannot be read or parsed.
///
/// This occurs when:
/// - The file cannot be read
/// - The file is not valid TOML or lacks required keys
/// - A column is declared twice or carries an array or table default
///
/// Enumeration aborts on the first such file.
#[derive(Debug)]
pub(super) struct ModelLoadError {
    path: PathBuf,
    message: Box<str>,
}

impl std::error::Error for ModelLoadError {}

impl core::fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to load model from {}: {}",
            self.path.display(),
            self.message
        )
    }
}

impl Error {
    /// Creates a model load error for the file at `path`.
    pub fn model_load(path: impl AsRef<Path>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ModelLoad(ModelLoadError {
            path: path.as_ref().to_path_buf(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a model load error.
    pub fn is_model_load(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ModelLoad(_))
    }
}
