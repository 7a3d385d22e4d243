mod generate;
mod logging;
mod report;

pub use generate::GenerateCommand;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Command-line front end for the schema builder
pub struct SchemaBuilderCli {
    /// Directory relative command-line paths are resolved against
    working_dir: PathBuf,
}

impl SchemaBuilderCli {
    /// Create a new SchemaBuilderCli rooted at the current directory
    pub fn new() -> Result<Self> {
        Ok(Self::with_working_dir(std::env::current_dir()?))
    }

    /// Create a new SchemaBuilderCli that resolves relative paths against
    /// `working_dir`
    pub fn with_working_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        logging::init(cli.verbose);
        self.run(cli, &mut io::stdout().lock())
    }

    /// Parse and execute CLI commands from an iterator of arguments, writing
    /// the report to `out`
    pub fn parse_from<I, T>(&self, args: I, out: &mut dyn Write) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli, out)
    }

    fn run(&self, cli: Cli, out: &mut dyn Write) -> Result<()> {
        match cli.command {
            Command::Generate(cmd) => cmd.run(&self.working_dir, out),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "schema-builder")]
#[command(about = "Generate JSON Schema and UI schema files from application models")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Write schema.json and ui_schema.json for every model
    Generate(GenerateCommand),
}
