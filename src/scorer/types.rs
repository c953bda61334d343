use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    // Top-line Score
    pub total: f64,

    // Components
    pub bigram: f64,
    pub trigram: f64,
    pub dictionary: f64,

    // Statistical counters
    pub valid_words: usize,
    pub total_words: usize,
}
