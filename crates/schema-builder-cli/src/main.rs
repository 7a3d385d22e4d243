use anyhow::Result;
use schema_builder_cli::SchemaBuilderCli;

fn main() -> Result<()> {
    SchemaBuilderCli::new()?.parse_and_run()
}
