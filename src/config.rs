use crate::error::{CfResult, CipherError};
use crate::scorer::Tokenization;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub scoring: ScoringParams,
    #[command(flatten)]
    pub probe: ProbeParams,
}

/// What happens when the frequency heuristic fires on the current best key.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OverridePolicy {
    /// Merge the override into the best key without rescoring it.
    #[default]
    Replicate,
    /// Rescore the overridden key and keep it only if it is not worse.
    Rescore,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Generations per restart
    #[arg(long, default_value_t = 1000)]
    pub iterations: usize,
    #[arg(long, default_value_t = 100)]
    pub population_size: usize,
    #[arg(long, default_value_t = 10)]
    pub elite_size: usize,
    #[arg(long, default_value_t = 3)]
    pub restarts: usize,
    #[arg(long, default_value_t = 0.5)]
    pub substitution_threshold: f64,
    #[arg(long, value_enum, default_value_t = OverridePolicy::Replicate)]
    pub override_policy: OverridePolicy,

    /// Seed one member of each initial population from frequency ranks
    #[arg(long, default_value_t = false)]
    pub warm_start: bool,

    /// Worker threads for scoring (0 = all cores)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
    #[arg(long, default_value_t = false)]
    pub parallel_restarts: bool,

    /// Generations between progress reports
    #[arg(long, default_value_t = 100)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            iterations: 1000,
            population_size: 100,
            elite_size: 10,
            restarts: 3,
            substitution_threshold: 0.5,
            override_policy: OverridePolicy::Replicate,
            warm_start: false,
            threads: 0,
            parallel_restarts: false,
            report_interval: 100,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Points per dictionary word in a candidate decryption
    #[arg(long, default_value_t = 10.0)]
    pub dictionary_weight: f64,
    #[arg(long, value_enum, default_value_t = Tokenization::Strict)]
    pub tokenization: Tokenization,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            dictionary_weight: 10.0,
            tokenization: Tokenization::Strict,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeParams {
    /// Alternate decryptions printed after the search
    #[arg(long, default_value_t = 3)]
    pub probe_variants: usize,
    /// Random swaps applied to the best key per alternate
    #[arg(long, default_value_t = 3)]
    pub probe_mutations: usize,
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self {
            probe_variants: 3,
            probe_mutations: 3,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Rejects configurations the search cannot run with.
    pub fn validate(&self) -> CfResult<()> {
        let s = &self.search;
        if s.elite_size == 0 {
            return Err(CipherError::Config(
                "elite_size must be at least 1".to_string(),
            ));
        }
        if s.elite_size >= s.population_size {
            return Err(CipherError::Config(format!(
                "elite_size ({}) must be smaller than population_size ({})",
                s.elite_size, s.population_size
            )));
        }
        if s.iterations == 0 {
            return Err(CipherError::Config(
                "iterations must be at least 1".to_string(),
            ));
        }
        if s.restarts == 0 {
            return Err(CipherError::Config("restarts must be at least 1".to_string()));
        }
        if !(s.substitution_threshold > 0.0 && s.substitution_threshold <= 1.0) {
            return Err(CipherError::Config(format!(
                "substitution_threshold ({}) must be in (0, 1]",
                s.substitution_threshold
            )));
        }
        if s.report_interval == 0 {
            return Err(CipherError::Config(
                "report_interval must be at least 1".to_string(),
            ));
        }
        if !self.scoring.dictionary_weight.is_finite() {
            return Err(CipherError::Config(
                "dictionary_weight must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Overwrites fields with values the user typed on the command line,
    /// leaving file-provided values in place for everything else.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.scoring.merge_from_cli(&cli.scoring, matches);
        self.probe.merge_from_cli(&cli.probe, matches);
    }
}

macro_rules! update_if_present {
    ($target:ident, $cli:ident, $matches:ident, [$($field:ident),* $(,)?]) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $target.$field = $cli.$field.clone();
            }
        )*
    };
}

impl SearchParams {
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, [
            iterations,
            population_size,
            elite_size,
            restarts,
            substitution_threshold,
            override_policy,
            warm_start,
            threads,
            parallel_restarts,
            report_interval,
        ]);
    }
}

impl ScoringParams {
    pub fn merge_from_cli(&mut self, cli: &ScoringParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, [dictionary_weight, tokenization]);
    }
}

impl ProbeParams {
    pub fn merge_from_cli(&mut self, cli: &ProbeParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, [probe_variants, probe_mutations]);
    }
}
