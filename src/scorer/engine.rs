use super::frequency::weighted_ngram_sum;
use super::{ScoreDetails, Scorer};

/// Fast Path: Used by the search loop.
pub fn score_full(scorer: &Scorer, text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut score = weighted_ngram_sum(bytes, 2, &scorer.bigram_lookup);
    score += weighted_ngram_sum(bytes, 3, &scorer.trigram_lookup);

    let (valid, _) = scorer
        .reference
        .dictionary
        .count_valid(text, scorer.tokenization);
    score += valid as f64 * scorer.dictionary_weight;
    score
}

/// Detailed Path: Used by reports. `total` equals `score_full`.
pub fn score_details(scorer: &Scorer, text: &str) -> ScoreDetails {
    let bytes = text.as_bytes();
    let bigram = weighted_ngram_sum(bytes, 2, &scorer.bigram_lookup);
    let trigram = weighted_ngram_sum(bytes, 3, &scorer.trigram_lookup);
    let (valid_words, total_words) = scorer
        .reference
        .dictionary
        .count_valid(text, scorer.tokenization);
    let dictionary = valid_words as f64 * scorer.dictionary_weight;

    ScoreDetails {
        total: bigram + trigram + dictionary,
        bigram,
        trigram,
        dictionary,
        valid_words,
        total_words,
    }
}
