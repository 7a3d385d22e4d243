mod file;
pub(crate) use file::load_model_file;

mod glob;
pub use glob::ModelGlob;

use schema_builder_core::{Model, Result};

/// Supplies a snapshot of the application's models.
pub trait ModelSource {
    /// Returns every model, in a stable order. Fails as a whole if any model
    /// cannot be loaded.
    fn models(&self) -> Result<Vec<Model>>;
}

impl ModelSource for Vec<Model> {
    fn models(&self) -> Result<Vec<Model>> {
        Ok(self.clone())
    }
}

impl<S: ModelSource + ?Sized> ModelSource for &S {
    fn models(&self) -> Result<Vec<Model>> {
        (**self).models()
    }
}

impl<S: ModelSource + ?Sized> ModelSource for Box<S> {
    fn models(&self) -> Result<Vec<Model>> {
        (**self).models()
    }
}

/// Resolves the models of `source`, leaving out the base model type.
pub fn enumerate(source: &dyn ModelSource, base_model: &str) -> Result<Vec<Model>> {
    let models = source.models()?;
    let before = models.len();

    let models: Vec<_> = models
        .into_iter()
        .filter(|model| model.name.to_string() != base_model)
        .collect();

    tracing::debug!(
        models = models.len(),
        excluded = before - models.len(),
        "enumerated models"
    );
    Ok(models)
}
