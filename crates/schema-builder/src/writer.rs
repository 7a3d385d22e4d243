use crate::emit::{self, ModelDocuments, Plan, Report};
use crate::models::{self, ModelGlob, ModelSource};
use crate::routes::{RouteIndex, RouteTable};
use crate::synth;
use crate::Config;
use schema_builder_core::{Result, Route};
use std::cell::OnceCell;

/// Generates `schema.json` and `ui_schema.json` for every model.
///
/// ```ignore
/// let writer = Writer::new(Config::new(std::env::current_dir()?));
/// let report = writer.write()?;
/// ```
pub struct Writer {
    config: Config,

    /// Where models come from; defaults to the configured model glob.
    models: Box<dyn ModelSource>,

    /// Injected routes. When unset, the configured route file is read.
    routes: Option<Vec<Route>>,

    /// Built on first use and reused for every model.
    route_index: OnceCell<RouteIndex>,
}

impl Writer {
    pub fn new(config: Config) -> Self {
        let models = Box::new(ModelGlob::new(config.get_model_path()));
        Self {
            config,
            models,
            routes: None,
            route_index: OnceCell::new(),
        }
    }

    /// Use `source` instead of the model files under the model path.
    pub fn with_models(mut self, source: impl ModelSource + 'static) -> Self {
        self.models = Box::new(source);
        self
    }

    /// Use `routes` instead of reading the route file.
    pub fn with_routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = Some(routes);
        self.route_index = OnceCell::new();
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Links grouped by controller. Built once per writer.
    pub fn route_index(&self) -> Result<&RouteIndex> {
        if let Some(index) = self.route_index.get() {
            return Ok(index);
        }

        let index = match &self.routes {
            Some(routes) => RouteIndex::build(routes),
            None => {
                let table = RouteTable::load_or_default(self.config.get_routes_path())?;
                RouteIndex::build(&table.routes)
            }
        };
        tracing::debug!(
            controllers = index.controllers().count(),
            "indexed routes"
        );

        Ok(self.route_index.get_or_init(|| index))
    }

    /// Builds the documents for every model, in enumeration order.
    pub fn documents(&self) -> Result<Vec<ModelDocuments>> {
        let models = models::enumerate(&*self.models, self.config.get_base_model())?;
        let index = self.route_index()?;

        Ok(models
            .iter()
            .map(|model| {
                let table_name = model.table_name(&self.config.inflections);
                let (schema, ui_schema) = synth::synthesize(model, index.links(&table_name));
                ModelDocuments {
                    model_name: model.model_name(),
                    schema,
                    ui_schema,
                }
            })
            .collect())
    }

    /// Works out which files would be created or skipped, touching nothing.
    pub fn plan(&self) -> Result<Plan> {
        let documents = self.documents()?;
        emit::plan(self.config.get_out_path(), &documents, |path| path.exists())
    }

    /// Generates and writes all documents. Existing files are left alone and
    /// reported as skipped.
    pub fn write(&self) -> Result<Report> {
        let plan = self.plan()?;
        tracing::info!(
            out_path = %plan.out_path.display(),
            files = plan.files.len(),
            "writing schema files"
        );

        let report = plan.apply()?;
        tracing::info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "schema generation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema_builder_core::{Column, Link, Model};

    fn writer() -> Writer {
        Writer::new(Config::new("/app").plural("person", "persons"))
            .with_models(vec![
                Model::new("ApplicationRecord"),
                Model::new("Article").column(Column::new("id", "integer").not_null()),
                Model::new("Person").column(Column::new("name", "string").not_null()),
            ])
            .with_routes(vec![
                Route::new("GET", "/articles/:id(.:format)")
                    .controller("articles")
                    .action("show"),
                Route::new("GET", "/persons(.:format)")
                    .controller("persons")
                    .action("index"),
            ])
    }

    #[test]
    fn links_are_looked_up_by_table_name() {
        let documents = writer().documents().unwrap();

        let names: Vec<_> = documents.iter().map(|d| d.model_name.as_str()).collect();
        assert_eq!(names, ["article", "person"]);
        assert_eq!(
            documents[0].schema.links,
            [Link::new("show", "GET", "/articles/{id}")]
        );
        assert_eq!(
            documents[1].schema.links,
            [Link::new("index", "GET", "/persons")]
        );
    }

    #[test]
    fn route_index_is_memoized() {
        let writer = writer();
        let first = writer.route_index().unwrap() as *const RouteIndex;
        let second = writer.route_index().unwrap() as *const RouteIndex;
        assert_eq!(first, second);
    }

    #[test]
    fn models_without_routes_have_no_links() {
        let writer = Writer::new(Config::new("/app"))
            .with_models(vec![Model::new("Tag")])
            .with_routes(vec![]);

        let documents = writer.documents().unwrap();
        assert!(documents[0].schema.links.is_empty());
    }

    #[test]
    fn plan_targets_the_out_path() {
        let plan = writer().plan().unwrap();
        assert_eq!(
            plan.creates().next(),
            Some(std::path::Path::new("/app/json-schema/article/schema.json"))
        );
    }
}
