use crate::reports;
use cipherforge::api;
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::optimizer::{Progress, ProgressCallback};
use cipherforge::scorer::ReferenceData;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// Cipher text to solve
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// File holding the cipher text
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the full report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, p: &Progress) -> bool {
        info!(
            "Restart {} | Gen {:5}/{} | Best: {:.2} | {}",
            p.restart, p.generation, p.iterations, p.score, p.plaintext
        );
        true
    }
}

pub fn run(args: SolveArgs, config: &Config, reference: Arc<ReferenceData>) -> CfResult<()> {
    let cipher_text = super::read_text(
        args.text.as_deref(),
        args.input.as_deref(),
        "Enter the encrypted text",
    )?;

    let report = api::solve(&cipher_text, config, reference, args.seed, &CliLogger)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!("=== 🏆 FINAL RESULT ===");
    reports::print_run_summaries(&report.runs);
    reports::print_key_grid("BEST KEY", &report.key);
    reports::print_score_breakdown(&report.plaintext, &report.details);
    reports::print_alternates(&report.alternates);

    println!("\nDecrypted text:\n{}", report.plaintext);
    Ok(())
}
