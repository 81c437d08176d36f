use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use lsi::{
    app::mkdiri::{self, MkdiriOptions},
    config::Config,
    config_io::DirectoryContext,
    services::tracing_setup,
};
use std::path::PathBuf;

/// mkdir with a description
#[derive(Parser, Debug)]
#[command(name = "mkdiri")]
#[command(about = "mkdir improved: create a directory (or file) with a description", long_about = None)]
#[command(version)]
struct Args {
    /// Directory (or, with --file, file) to create
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Description to store; a literal \n starts a new line
    #[arg(value_name = "DESCRIPTION", default_value = "")]
    description: String,

    /// Add the description even if the target already exists
    #[arg(short = 'a', long)]
    add: bool,

    /// Create a file and record its description in the parent directory
    #[arg(short = 'f', long)]
    file: bool,

    /// Path to configuration file (default: ~/.lsirc)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    tracing_setup::init_global(None).context("Failed to set up logging")?;

    let dir_context = DirectoryContext::from_system();
    let config = Config::load(args.config.as_deref(), &dir_context)
        .context("Failed to load configuration")?;

    let options = MkdiriOptions {
        path: args.path,
        description: args.description,
        add: args.add,
        file: args.file,
    };
    mkdiri::run(&options, &config)
}
