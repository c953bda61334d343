use crate::reports;
use cipherforge::api;
use cipherforge::config::ScoringParams;
use cipherforge::error::CfResult;
use cipherforge::mapping::Mapping;
use cipherforge::scorer::ReferenceData;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub scoring: ScoringParams,

    /// Text to score
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Decrypt the text with this 26-letter key before scoring it
    #[arg(short, long)]
    pub key: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scoring: &ScoringParams, reference: Arc<ReferenceData>) -> CfResult<()> {
    let text = super::read_text(args.text.as_deref(), args.input.as_deref(), "Enter the text")?;

    let text = match &args.key {
        Some(key) => {
            let mapping: Mapping = key.parse()?;
            mapping.decrypt(&text)
        }
        None => text,
    };

    let details = api::score_text(&text, scoring, reference);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        reports::print_score_breakdown(&text, &details);
    }
    Ok(())
}
