use super::{load_model_file, ModelSource};
use glob::{MatchOptions, Pattern};
use schema_builder_core::{err, Model, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Loads models from the TOML files matched by a glob such as
/// `app/models/**/*.toml`.
///
/// The leading wildcard-free components form the directory that is walked.
/// The rest is a [`glob::Pattern`] matched against paths relative to it, with
/// `*` never crossing a `/`. A wildcard-free pattern naming a directory loads
/// every `*.toml` file beneath it.
#[derive(Debug, Clone)]
pub struct ModelGlob {
    pattern: PathBuf,
}

impl ModelGlob {
    pub fn new(pattern: impl Into<PathBuf>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Files matched by the pattern, sorted by path.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let (root, rest) = split_pattern(&self.pattern);

        let rest = match rest {
            Some(rest) => rest,
            None if root.is_file() => return Ok(vec![root]),
            None => "**/*.toml".to_string(),
        };

        if !root.is_dir() {
            tracing::warn!(path = %root.display(), "model directory does not exist");
            return Ok(vec![]);
        }

        let matcher = Pattern::new(&rest)
            .map_err(|e| err!("invalid model path pattern `{rest}`: {e}"))?;
        let mut walker = WalkDir::new(&root).follow_links(true).sort_by_file_name();
        if !rest.contains("**") {
            walker = walker.max_depth(rest.split('/').count());
        }

        let mut files = vec![];
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&root) else {
                continue;
            };
            if matcher.matches_path_with(relative, MATCH_OPTIONS) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

impl ModelSource for ModelGlob {
    fn models(&self) -> Result<Vec<Model>> {
        let mut models = vec![];
        for path in self.files()? {
            tracing::debug!(path = %path.display(), "loading model");
            if let Some(model) = load_model_file(&path)? {
                models.push(model);
            }
        }
        Ok(models)
    }
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

fn is_wildcard(component: &str) -> bool {
    component.contains(['*', '?', '['])
}

/// Splits a pattern into the directory to walk and the remaining glob, if any.
fn split_pattern(pattern: &Path) -> (PathBuf, Option<String>) {
    let mut root = PathBuf::new();
    let mut components = pattern.components();

    while let Some(component) = components.next() {
        if let Component::Normal(part) = component {
            if is_wildcard(&part.to_string_lossy()) {
                let rest = std::iter::once(part.to_string_lossy().into_owned())
                    .chain(components.map(|c| c.as_os_str().to_string_lossy().into_owned()))
                    .collect::<Vec<_>>()
                    .join("/");
                return (root, Some(rest));
            }
        }
        root.push(component);
    }

    (root, None)
}
