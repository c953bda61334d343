pub mod builder;
pub mod dictionary;
pub mod engine;
pub mod frequency;
pub mod loader;
pub mod reference;
pub mod tables;
pub mod types;

pub use self::builder::ReferenceData;
pub use self::dictionary::{Dictionary, Tokenization};
pub use self::tables::FrequencyTable;
pub use self::types::ScoreDetails;
use crate::config::ScoringParams;
use std::sync::Arc;

/// Fitness function for candidate decryptions.
///
/// Holds the shared reference data plus flattened bigram/trigram lookups
/// built once at construction. Scoring is pure, so one `Arc<Scorer>` can be
/// read from any number of worker threads.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub reference: Arc<ReferenceData>,

    // Dense lookups indexed by base-26 n-gram code
    pub bigram_lookup: Vec<f64>,
    pub trigram_lookup: Vec<f64>,

    pub dictionary_weight: f64,
    pub tokenization: Tokenization,
}

impl Scorer {
    pub fn new(reference: Arc<ReferenceData>, params: &ScoringParams) -> Self {
        let bigram_lookup = reference.bigrams.dense();
        let trigram_lookup = reference.trigrams.dense();
        Self {
            reference,
            bigram_lookup,
            trigram_lookup,
            dictionary_weight: params.dictionary_weight,
            tokenization: params.tokenization,
        }
    }

    /// Scores a decrypted candidate. Higher is more English-like.
    pub fn score(&self, text: &str) -> f64 {
        engine::score_full(self, text)
    }

    /// Same score broken down into its bigram, trigram and dictionary terms.
    pub fn score_details(&self, text: &str) -> ScoreDetails {
        engine::score_details(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> Scorer {
        Scorer::new(Arc::new(ReferenceData::english()), &ScoringParams::default())
    }

    #[test]
    fn test_english_beats_noise() {
        let s = scorer();
        let english = s.score("the other thing is that there is nothing here");
        let noise = s.score("qxz vkj wpq zzkx jqv mmq xqzj vvkp");
        assert!(english > noise, "{} <= {}", english, noise);
    }

    #[test]
    fn test_details_sum_to_score() {
        let s = scorer();
        let text = "Then the hunter went into the forest.";
        let d = s.score_details(text);
        assert_eq!(d.total, s.score(text));
        assert_eq!(d.total_words, 7);
        assert!(d.bigram > 0.0 && d.trigram > 0.0);
    }

    #[test]
    fn test_dictionary_weight_applies() {
        let params = ScoringParams {
            dictionary_weight: 0.0,
            ..Default::default()
        };
        let s = Scorer::new(Arc::new(ReferenceData::english()), &params);
        let d = s.score_details("the the the");
        assert_eq!(d.valid_words, 3);
        assert_eq!(d.dictionary, 0.0);
    }
}
