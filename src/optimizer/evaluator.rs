use crate::error::CfResult;
use crate::mapping::Mapping;
use crate::scorer::Scorer;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A key together with the fitness of the text it decrypts to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub mapping: Mapping,
    pub score: f64,
}

/// Builds the bounded worker pool used for scoring. `threads == 0` means
/// one worker per available core.
pub fn build_pool(threads: usize) -> CfResult<Arc<ThreadPool>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("cipherforge-eval-{}", i))
        .build()?;
    Ok(Arc::new(pool))
}

/// Scores whole populations on a shared, reusable pool.
///
/// Each task decrypts the fixed cipher text with its own key and scores
/// the result; the only shared state is the immutable scorer.
#[derive(Clone)]
pub struct ParallelEvaluator {
    scorer: Arc<Scorer>,
    cipher_text: Arc<str>,
    pool: Arc<ThreadPool>,
}

impl ParallelEvaluator {
    pub fn new(scorer: Arc<Scorer>, cipher_text: Arc<str>, pool: Arc<ThreadPool>) -> Self {
        Self {
            scorer,
            cipher_text,
            pool,
        }
    }

    pub fn score_one(&self, mapping: &Mapping) -> f64 {
        self.scorer.score(&mapping.decrypt(&self.cipher_text))
    }

    /// Scores every member and returns only once all of them are done.
    /// Output order matches `population`.
    pub fn evaluate(&self, population: &[Mapping]) -> Vec<Candidate> {
        self.pool.install(|| {
            population
                .par_iter()
                .map(|mapping| Candidate {
                    mapping: *mapping,
                    score: self.score_one(mapping),
                })
                .collect()
        })
    }
}
