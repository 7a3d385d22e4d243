use crate::report;
use anyhow::{anyhow, Result};
use clap::Parser;
use schema_builder::{Config, ProjectFile, Writer};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Application root [default: current directory]
    #[arg(long)]
    base_path: Option<PathBuf>,

    /// Glob locating model files [default: BASE/app/models/**/*.toml]
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// Directory to write schema files to [default: BASE/json-schema]
    #[arg(long)]
    out_path: Option<PathBuf>,

    /// Route table file [default: BASE/config/routes.toml]
    #[arg(long = "routes")]
    routes_path: Option<PathBuf>,

    /// Base model type that gets no schema [default: ApplicationRecord]
    #[arg(long)]
    base_model: Option<String>,

    /// Irregular plural used to match models to controllers, e.g. person=people
    #[arg(long = "plural", value_name = "SINGULAR=PLURAL", value_parser = parse_plural)]
    plurals: Vec<(String, String)>,

    /// Show which files would be created or skipped without writing
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    pub(crate) fn run(self, working_dir: &Path, out: &mut dyn Write) -> Result<()> {
        let dry_run = self.dry_run;
        let config = self.config(working_dir)?;
        tracing::info!(
            base_path = %config.base_path.display(),
            model_path = %config.get_model_path().display(),
            out_path = %config.get_out_path().display(),
            routes_path = %config.get_routes_path().display(),
            base_model = config.get_base_model(),
            dry_run,
            "resolved configuration"
        );
        let writer = Writer::new(config);

        if dry_run {
            let plan = writer.plan()?;
            report::render_plan(out, &plan)?;
        } else {
            let report = writer.write()?;
            report::render_report(out, &report)?;
        }

        Ok(())
    }

    /// Builds the run configuration. Command-line values win over
    /// `SchemaBuilder.toml`, which wins over the defaults.
    fn config(self, working_dir: &Path) -> Result<Config> {
        let base_path = match self.base_path {
            Some(path) => working_dir.join(path),
            None => working_dir.to_path_buf(),
        };

        let mut config = Config::new(&base_path);
        if let Some(path) = self.model_path {
            config = config.model_path(working_dir.join(path));
        }
        if let Some(path) = self.out_path {
            config = config.out_path(working_dir.join(path));
        }
        if let Some(path) = self.routes_path {
            config = config.routes_path(working_dir.join(path));
        }
        if let Some(name) = self.base_model {
            config = config.base_model(name);
        }
        for (singular, plural) in self.plurals {
            config = config.plural(singular, plural);
        }

        let project_file = ProjectFile::load_or_default(&base_path)?;
        Ok(config.merge_project_file(project_file))
    }
}

fn parse_plural(src: &str) -> Result<(String, String)> {
    match src.split_once('=') {
        Some((singular, plural)) if !singular.is_empty() && !plural.is_empty() => {
            Ok((singular.to_string(), plural.to_string()))
        }
        _ => Err(anyhow!("expected SINGULAR=PLURAL, got `{src}`")),
    }
}
