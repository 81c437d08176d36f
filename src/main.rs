use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use lsi::{
    app::{lsi as listing, StdinConfirm},
    config::Config,
    config_io::DirectoryContext,
    services::{fs::KindFilter, tracing_setup},
    TagVocabulary,
};
use std::io;
use std::path::PathBuf;

/// ls with descriptions
#[derive(Parser, Debug)]
#[command(name = "lsi")]
#[command(about = "ls improved: list a directory together with its descriptions", long_about = None)]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Show hidden files and directories
    #[arg(short = 'a', long)]
    all: bool,

    /// Show only directories
    #[arg(short = 'D', long, conflicts_with = "only_files")]
    only_directories: bool,

    /// Show only files
    #[arg(short = 'F', long)]
    only_files: bool,

    /// Only show items whose name or description contains TERM
    #[arg(short = 's', long, value_name = "TERM")]
    search: Option<String>,

    /// Ask before listing more than N items (0: never ask)
    #[arg(short = 'n', long, value_name = "N")]
    limit_file_num: Option<usize>,

    /// Show only the first N lines of each description
    #[arg(short = 'l', long, value_name = "N")]
    lines: Option<usize>,

    /// Path to configuration file (default: ~/.lsirc)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    fn kind_filter(&self) -> KindFilter {
        if self.only_directories {
            KindFilter::DirsOnly
        } else if self.only_files {
            KindFilter::FilesOnly
        } else {
            KindFilter::All
        }
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    tracing_setup::init_global(args.log_file.as_deref()).context("Failed to set up logging")?;

    let dir_context = DirectoryContext::from_system();
    let config = Config::load(args.config.as_deref(), &dir_context)
        .context("Failed to load configuration")?;

    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    let vocab = TagVocabulary::from_config(&config);
    let options = listing::ListOptions {
        dir: args.dir.clone(),
        show_hidden: args.all,
        kind_filter: args.kind_filter(),
        search: args.search.clone(),
        limit_file_num: args.limit_file_num,
        description_lines: args.lines,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    listing::run(
        &options,
        &config,
        &vocab,
        listing::Io {
            out: &mut stdout.lock(),
            err: &mut stderr.lock(),
            confirm: &mut StdinConfirm,
        },
    )
}
