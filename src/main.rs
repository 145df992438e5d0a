use anyhow::{Context, Result};
use clap::Parser;
use playlist_engine::command::run_script;
use playlist_engine::{Registry, RegistryConfig, SongField, SortStrategy};
use std::fs::File;
use std::io::{self, BufReader};

#[derive(Parser, Debug)]
#[command(name = "playlist-engine")]
#[command(about = "Replay a JSON-lines playlist command script", long_about = None)]
struct Args {
    /// Command script, one JSON command per line ("-" reads stdin)
    #[arg(default_value = "-")]
    script: String,

    /// Sort strategy: insertion or merge
    #[arg(long, default_value = "insertion")]
    sort_strategy: SortStrategy,

    /// Field searched when a command names no search type
    #[arg(long, default_value = "name")]
    default_search: SongField,

    /// Field sorted on when a command names no key
    #[arg(long, default_value = "name")]
    default_sort: SongField,

    /// Trust caller-supplied song ids instead of rejecting duplicates
    #[arg(long)]
    allow_duplicates: bool,

    /// Pretty-print responses
    #[arg(long)]
    pretty: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = RegistryConfig::new()
        .with_sort_strategy(args.sort_strategy)
        .with_default_search(args.default_search)
        .with_default_sort(args.default_sort)
        .with_duplicate_rejection(!args.allow_duplicates);
    log::debug!("Registry config: {:?}", config);

    let registry = Registry::new(config);
    let stdout = io::stdout().lock();

    let summary = if args.script == "-" {
        log::info!("Reading commands from stdin");
        run_script(&registry, io::stdin().lock(), stdout, args.pretty)?
    } else {
        // Expand ~ in paths
        let path = shellexpand::tilde(&args.script);
        log::info!("Reading commands from {}", path);
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open command script: {}", path))?;
        run_script(&registry, BufReader::new(file), stdout, args.pretty)?
    };

    if summary.errors > 0 {
        log::warn!("{} of {} commands failed", summary.errors, summary.commands);
    }

    Ok(())
}
