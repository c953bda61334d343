use super::evaluator::{Candidate, ParallelEvaluator};
use super::evolver::PopulationEvolver;
use super::initialization::generate_frequency_seeded;
use super::mutation::generate_random;
use super::runner::{OptimizationOptions, Progress, ProgressCallback};
use crate::config::OverridePolicy;
use crate::detector::{self, Override};
use crate::mapping::Mapping;
use crate::scorer::{ReferenceData, Scorer};
use fastrand::Rng;
use rayon::ThreadPool;
use std::sync::Arc;
use strum_macros::Display;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SolverPhase {
    Initializing,
    Evaluating,
    Selecting,
    Overriding,
    Done,
}

/// Outcome of one genetic run.
#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    /// Rank-0 key of the last evaluated generation, after any override.
    pub mapping: Mapping,
    /// Score from the last evaluation. Under `OverridePolicy::Replicate`
    /// this belongs to the key before the override was merged in.
    pub evaluated_score: f64,
    /// Highest score actually measured during the run.
    pub best_so_far: Candidate,
    pub generations: usize,
    /// Generations in which the override changed the leading key.
    pub overrides: usize,
    pub cancelled: bool,
}

/// One genetic-algorithm run over a fixed cipher text.
pub struct GeneticSolver {
    evaluator: ParallelEvaluator,
    evolver: PopulationEvolver,
    reference: Arc<ReferenceData>,
    cipher_text: Arc<str>,
    forced: Option<Override>,
    policy: OverridePolicy,
    warm_start: bool,
    iterations: usize,
    report_interval: usize,
}

impl GeneticSolver {
    pub fn new(
        scorer: Arc<Scorer>,
        cipher_text: Arc<str>,
        options: &OptimizationOptions,
        pool: Arc<ThreadPool>,
    ) -> Self {
        let reference = scorer.reference.clone();

        // The cipher text never changes, so neither does the detector's verdict.
        let forced = detector::detect(
            &cipher_text,
            options.substitution_threshold,
            reference.top_letter(),
        );
        if let Some(ov) = forced {
            debug!(
                "🎯 Dominant cipher letter {} will be forced to {}",
                ov.cipher as char, ov.plain as char
            );
        }

        Self {
            evaluator: ParallelEvaluator::new(scorer, cipher_text.clone(), pool),
            evolver: PopulationEvolver::new(options.population_size, options.elite_size),
            reference,
            cipher_text,
            forced,
            policy: options.override_policy,
            warm_start: options.warm_start,
            iterations: options.iterations,
            report_interval: options.report_interval.max(1),
        }
    }

    pub fn forced_override(&self) -> Option<Override> {
        self.forced
    }

    fn initial_population(&self, rng: &mut Rng) -> Vec<Mapping> {
        let mut population: Vec<Mapping> = (0..self.evolver.population_size)
            .map(|_| generate_random(rng))
            .collect();
        if self.warm_start {
            if let Some(first) = population.first_mut() {
                *first = generate_frequency_seeded(rng, &self.cipher_text, &self.reference.unigrams);
            }
        }
        population
    }

    /// Merges the forced assignment into the leading candidate. Returns
    /// whether the candidate changed.
    fn apply_override(&self, top: &mut Candidate, ov: &Override) -> bool {
        let mut candidate = top.mapping;
        candidate.apply_override(ov);
        if candidate == top.mapping {
            return false;
        }
        match self.policy {
            OverridePolicy::Replicate => {
                top.mapping = candidate;
                true
            }
            OverridePolicy::Rescore => {
                let score = self.evaluator.score_one(&candidate);
                if score >= top.score {
                    *top = Candidate {
                        mapping: candidate,
                        score,
                    };
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn run<CB: ProgressCallback>(&self, rng: &mut Rng, restart: usize, callback: &CB) -> RunResult {
        trace!("Restart {}: {}", restart, SolverPhase::Initializing);
        let mut population = self.initial_population(rng);

        let mut leader: Option<Candidate> = None;
        let mut best_so_far: Option<Candidate> = None;
        let mut generations = 0;
        let mut overrides = 0;
        let mut cancelled = false;

        for generation in 1..=self.iterations {
            // 1. Evaluate (barrier: every member is scored before we go on)
            trace!("Restart {} gen {}: {}", restart, generation, SolverPhase::Evaluating);
            let mut ranked = PopulationEvolver::rank(self.evaluator.evaluate(&population));
            let Some(top) = ranked.first().copied() else {
                break;
            };
            generations = generation;
            if best_so_far.map_or(true, |b| top.score > b.score) {
                best_so_far = Some(top);
            }

            // 2. Report
            if generation % self.report_interval == 0 || generation == self.iterations {
                let plaintext = top.mapping.decrypt(&self.cipher_text);
                let best = best_so_far.unwrap_or(top);
                let keep_going = callback.on_progress(&Progress {
                    restart,
                    generation,
                    iterations: self.iterations,
                    score: top.score,
                    best_so_far: best.score,
                    mapping: &top.mapping,
                    plaintext: &plaintext,
                });
                if !keep_going {
                    debug!("Restart {} cancelled at generation {}", restart, generation);
                    cancelled = true;
                }
            }

            // 3. Override
            if let Some(ov) = self.forced {
                trace!("Restart {} gen {}: {}", restart, generation, SolverPhase::Overriding);
                if self.apply_override(&mut ranked[0], &ov) {
                    overrides += 1;
                    if self.policy == OverridePolicy::Rescore
                        && best_so_far.map_or(true, |b| ranked[0].score > b.score)
                    {
                        best_so_far = Some(ranked[0]);
                    }
                }
            }
            leader = Some(ranked[0]);

            if cancelled || generation == self.iterations {
                break;
            }

            // 4. Select
            trace!("Restart {} gen {}: {}", restart, generation, SolverPhase::Selecting);
            population = self.evolver.next_generation(&ranked, rng);
        }

        trace!("Restart {}: {}", restart, SolverPhase::Done);

        let leader = leader.unwrap_or(Candidate {
            mapping: population.first().copied().unwrap_or_default(),
            score: f64::NEG_INFINITY,
        });
        RunResult {
            mapping: leader.mapping,
            evaluated_score: leader.score,
            best_so_far: best_so_far.unwrap_or(leader),
            generations,
            overrides,
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ScoringParams};
    use crate::optimizer::evaluator::build_pool;
    use crate::optimizer::runner::NoProgress;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn english_scorer() -> Arc<Scorer> {
        Arc::new(Scorer::new(
            Arc::new(ReferenceData::english()),
            &ScoringParams::default(),
        ))
    }

    fn solver(cipher: &str, config: &Config) -> GeneticSolver {
        let options = OptimizationOptions::from(config);
        GeneticSolver::new(english_scorer(), Arc::from(cipher), &options, build_pool(2).unwrap())
    }

    fn skewed_cipher() -> String {
        let mut cipher = "X".repeat(234);
        cipher.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        cipher
    }

    fn policy_config(iterations: usize, policy: OverridePolicy) -> Config {
        let mut config = small_config(iterations);
        config.search.override_policy = policy;
        config
    }

    /// Identity key: X maps to X, so the forced X -> E always changes it.
    fn unforced_candidate(score: f64) -> Candidate {
        Candidate {
            mapping: Mapping::identity(),
            score,
        }
    }

    fn small_config(iterations: usize) -> Config {
        let mut config = Config::default();
        config.search.iterations = iterations;
        config.search.population_size = 20;
        config.search.elite_size = 4;
        config.search.report_interval = 5;
        config
    }

    struct Counter(AtomicUsize, usize);

    impl ProgressCallback for Counter {
        fn on_progress(&self, _progress: &Progress) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst) + 1 < self.1
        }
    }

    #[test]
    fn test_runs_all_generations() {
        let s = solver("Gsv jfrxp yildm ulc", &small_config(12));
        let result = s.run(&mut Rng::with_seed(1), 1, &NoProgress);
        assert_eq!(result.generations, 12);
        assert!(!result.cancelled);
        assert!(result.mapping.is_bijection());
        assert!(result.best_so_far.score >= result.evaluated_score);
    }

    #[test]
    fn test_reports_every_interval_and_on_last_generation() {
        let s = solver("Gsv jfrxp yildm ulc", &small_config(12));
        let counter = Counter(AtomicUsize::new(0), usize::MAX);
        s.run(&mut Rng::with_seed(1), 1, &counter);
        // Generations 5, 10 and 12.
        assert_eq!(counter.0.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_callback_cancels_between_generations() {
        let s = solver("Gsv jfrxp yildm ulc", &small_config(50));
        let counter = Counter(AtomicUsize::new(0), 2);
        let result = s.run(&mut Rng::with_seed(1), 1, &counter);
        assert!(result.cancelled);
        assert_eq!(result.generations, 10);
    }

    #[test]
    fn test_override_forces_dominant_letter() {
        let cipher = skewed_cipher();
        let s = solver(&cipher, &small_config(3));
        assert_eq!(
            s.forced_override(),
            Some(Override {
                cipher: b'X',
                plain: b'E'
            })
        );
        let result = s.run(&mut Rng::with_seed(9), 1, &NoProgress);
        assert_eq!(result.mapping.image(b'X'), Some(b'E'));
        assert!(result.mapping.is_bijection());
    }

    #[test]
    fn test_replicate_merges_override_without_rescoring() {
        let s = solver(&skewed_cipher(), &policy_config(3, OverridePolicy::Replicate));
        let ov = s.forced_override().unwrap();
        let mut top = unforced_candidate(f64::MAX);

        assert!(s.apply_override(&mut top, &ov));
        assert_eq!(top.mapping.image(b'X'), Some(b'E'));
        assert!(top.mapping.is_bijection());
        assert_eq!(top.score, f64::MAX);
    }

    #[test]
    fn test_replicate_run_carries_forced_letter() {
        let s = solver(&skewed_cipher(), &policy_config(6, OverridePolicy::Replicate));
        let result = s.run(&mut Rng::with_seed(9), 1, &NoProgress);
        assert!(result.overrides > 0);
        assert_eq!(result.mapping.image(b'X'), Some(b'E'));
    }

    #[test]
    fn test_rescore_rejects_override_that_lowers_score() {
        let s = solver(&skewed_cipher(), &policy_config(3, OverridePolicy::Rescore));
        let ov = s.forced_override().unwrap();
        let mut top = unforced_candidate(f64::MAX);

        assert!(!s.apply_override(&mut top, &ov));
        assert_eq!(top, unforced_candidate(f64::MAX));
    }

    #[test]
    fn test_rescore_accepts_override_with_measured_score() {
        let cipher = skewed_cipher();
        let scorer = english_scorer();
        let s = solver(&cipher, &policy_config(3, OverridePolicy::Rescore));
        let ov = s.forced_override().unwrap();
        let mut top = unforced_candidate(f64::MIN);

        assert!(s.apply_override(&mut top, &ov));
        assert_eq!(top.mapping.image(b'X'), Some(b'E'));
        assert_eq!(top.score, scorer.score(&top.mapping.decrypt(&cipher)));
    }

    #[test]
    fn test_rescore_run_keeps_leader_score_measured() {
        let cipher = skewed_cipher();
        let scorer = english_scorer();
        let s = solver(&cipher, &policy_config(30, OverridePolicy::Rescore));
        let result = s.run(&mut Rng::with_seed(9), 1, &NoProgress);

        assert_eq!(result.generations, 30);
        assert!(result.mapping.is_bijection());
        assert_eq!(
            result.evaluated_score,
            scorer.score(&result.mapping.decrypt(&cipher))
        );
        assert!(result.best_so_far.score >= result.evaluated_score);
        assert_eq!(
            result.best_so_far.score,
            scorer.score(&result.best_so_far.mapping.decrypt(&cipher))
        );
    }

    #[test]
    fn test_no_override_on_ordinary_text() {
        let s = solver("Gsv jfrxp yildm ulc", &small_config(3));
        assert_eq!(s.forced_override(), None);
        let result = s.run(&mut Rng::with_seed(9), 1, &NoProgress);
        assert_eq!(result.overrides, 0);
    }
}
