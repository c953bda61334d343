use cipherforge::config::Config;
use cipherforge::scorer::ReferenceData;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV of single-letter frequencies (embedded English if omitted)
    #[arg(global = true, long)]
    unigrams: Option<PathBuf>,

    #[arg(global = true, long)]
    bigrams: Option<PathBuf>,

    #[arg(global = true, long)]
    trigrams: Option<PathBuf>,

    /// Word list, one word per line
    #[arg(global = true, long)]
    dictionary: Option<PathBuf>,

    /// JSON settings file; flags given on the command line win
    #[arg(global = true, long = "config")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Solve(cmd::solve::SolveArgs),
    Score(cmd::score::ScoreArgs),
    Encrypt(cmd::encrypt::EncryptArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing CipherForge...");

    // 1. Base configuration: file first, then explicit flags on top
    let mut config = match &cli.config_file {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path.display());
            Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    match &cli.command {
        Commands::Solve(args) => {
            if let Some(sub) = matches.subcommand_matches("solve") {
                config.merge_from_cli(&args.config, sub);
            }
        }
        Commands::Score(args) => {
            if let Some(sub) = matches.subcommand_matches("score") {
                config.scoring.merge_from_cli(&args.scoring, sub);
            }
        }
        Commands::Encrypt(_) => {}
    }

    // 2. Reference data
    let reference = ReferenceData::load_from_disk(
        cli.unigrams.as_deref(),
        cli.bigrams.as_deref(),
        cli.trigrams.as_deref(),
        cli.dictionary.as_deref(),
    )
    .map(Arc::new)
    .unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING REFERENCE DATA: {}", e);
        process::exit(1);
    });

    // 3. Execute
    let outcome = match cli.command {
        Commands::Solve(args) => cmd::solve::run(args, &config, reference),
        Commands::Score(args) => cmd::score::run(args, &config.scoring, reference),
        Commands::Encrypt(args) => cmd::encrypt::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
