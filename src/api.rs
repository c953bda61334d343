use crate::config::{Config, ScoringParams};
use crate::error::CfResult;
use crate::mapping::Mapping;
use crate::optimizer::{
    alternate_decryptions, Alternate, OptimizationOptions, ProgressCallback, RestartOrchestrator,
    RunSummary,
};
use crate::scorer::{ReferenceData, ScoreDetails, Scorer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Everything a caller needs to present a solved cipher.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub cipher_text: String,
    pub key: Mapping,
    pub score: f64,
    pub details: ScoreDetails,
    pub plaintext: String,
    pub alternates: Vec<Alternate>,
    pub runs: Vec<RunSummary>,
}

/// Service: validate the configuration, run every restart, then probe the
/// winning key with a few perturbed alternates.
pub fn solve<CB: ProgressCallback>(
    cipher_text: &str,
    config: &Config,
    reference: Arc<ReferenceData>,
    seed: Option<u64>,
    callback: &CB,
) -> CfResult<SolveReport> {
    config.validate()?;

    let scorer = Arc::new(Scorer::new(reference, &config.scoring));
    let orchestrator = RestartOrchestrator::new(scorer.clone(), OptimizationOptions::from(config))?;
    let result = orchestrator.run(cipher_text, seed, callback);

    info!("🏆 Best score {:.2} with key {}", result.score, result.mapping);

    let mut rng = if let Some(s) = seed {
        fastrand::Rng::with_seed(s.wrapping_add(9999))
    } else {
        fastrand::Rng::new()
    };
    let alternates = alternate_decryptions(
        &result.mapping,
        cipher_text,
        config.probe.probe_variants,
        config.probe.probe_mutations,
        &scorer,
        &mut rng,
    );

    Ok(SolveReport {
        cipher_text: cipher_text.to_string(),
        key: result.mapping,
        score: result.score,
        details: scorer.score_details(&result.plaintext),
        plaintext: result.plaintext,
        alternates,
        runs: result.runs,
    })
}

/// Service: score a piece of (already decrypted) text.
pub fn score_text(text: &str, params: &ScoringParams, reference: Arc<ReferenceData>) -> ScoreDetails {
    Scorer::new(reference, params).score_details(text)
}
