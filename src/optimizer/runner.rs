use super::evaluator::build_pool;
use super::solver::{GeneticSolver, RunResult};
use crate::config::{Config, OverridePolicy};
use crate::error::CfResult;
use crate::mapping::Mapping;
use crate::scorer::Scorer;
use rayon::prelude::*;
use rayon::ThreadPool;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub num_threads: usize,
    pub iterations: usize,
    pub population_size: usize,
    pub elite_size: usize,
    pub restarts: usize,
    pub substitution_threshold: f64,
    pub override_policy: OverridePolicy,
    pub warm_start: bool,
    pub parallel_restarts: bool,
    pub report_interval: usize,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            num_threads: cfg.search.threads,
            iterations: cfg.search.iterations,
            population_size: cfg.search.population_size,
            elite_size: cfg.search.elite_size,
            restarts: cfg.search.restarts,
            substitution_threshold: cfg.search.substitution_threshold,
            override_policy: cfg.search.override_policy,
            warm_start: cfg.search.warm_start,
            parallel_restarts: cfg.search.parallel_restarts,
            report_interval: cfg.search.report_interval,
        }
    }
}

/// Snapshot handed to a `ProgressCallback` after a generation barrier.
#[derive(Debug)]
pub struct Progress<'a> {
    pub restart: usize,
    pub generation: usize,
    pub iterations: usize,
    /// Score of the generation's leading key.
    pub score: f64,
    pub best_so_far: f64,
    pub mapping: &'a Mapping,
    pub plaintext: &'a str,
}

/// A trait for receiving updates during optimization.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, progress: &Progress) -> bool;
}

/// Callback that never reports and never cancels.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _progress: &Progress) -> bool {
        true
    }
}

/// Shares one cancellation flag across concurrent restarts. Once any
/// restart is told to stop, every other restart stops at its next report.
struct CancelLatch<'a, CB> {
    inner: &'a CB,
    stop: &'a AtomicBool,
}

impl<CB: ProgressCallback> ProgressCallback for CancelLatch<'_, CB> {
    fn on_progress(&self, progress: &Progress) -> bool {
        if self.stop.load(Ordering::Acquire) {
            return false;
        }
        let keep_going = self.inner.on_progress(progress);
        if !keep_going {
            self.stop.store(true, Ordering::Release);
        }
        keep_going
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub restart: usize,
    pub mapping: Mapping,
    /// Score of `mapping` rescored on the cipher text.
    pub score: f64,
    pub best_so_far: f64,
    pub generations: usize,
    pub overrides: usize,
    pub cancelled: bool,
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub mapping: Mapping,
    pub score: f64,
    pub plaintext: String,
    pub runs: Vec<RunSummary>,
}

/// Runs the genetic solver several times from fresh populations and keeps
/// the best rescored result.
pub struct RestartOrchestrator {
    scorer: Arc<Scorer>,
    options: OptimizationOptions,
    pool: Arc<ThreadPool>,
}

impl RestartOrchestrator {
    pub fn new(scorer: Arc<Scorer>, options: OptimizationOptions) -> CfResult<Self> {
        let pool = build_pool(options.num_threads)?;
        Ok(Self {
            scorer,
            options,
            pool,
        })
    }

    fn run_once<CB: ProgressCallback>(
        &self,
        solver: &GeneticSolver,
        cipher_text: &str,
        restart: usize,
        seed: Option<u64>,
        callback: &CancelLatch<'_, CB>,
    ) -> Option<RunSummary> {
        if callback.stop.load(Ordering::Acquire) {
            debug!("Restart {} skipped after cancellation", restart);
            return None;
        }

        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s.wrapping_add(restart as u64 * 100))
        } else {
            fastrand::Rng::new()
        };

        let RunResult {
            mapping,
            best_so_far,
            generations,
            overrides,
            cancelled,
            ..
        } = solver.run(&mut rng, restart, callback);

        // The returned key may carry an unscored override, so score it afresh.
        let score = self.scorer.score(&mapping.decrypt(cipher_text));
        info!(
            "🏁 Restart {}/{} finished: score {:.2} after {} generations",
            restart, self.options.restarts, score, generations
        );

        Some(RunSummary {
            restart,
            mapping,
            score,
            best_so_far: best_so_far.score,
            generations,
            overrides,
            cancelled,
        })
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        cipher_text: &str,
        seed: Option<u64>,
        callback: &CB,
    ) -> OptimizationResult {
        let opts = &self.options;
        let solver = GeneticSolver::new(
            self.scorer.clone(),
            Arc::from(cipher_text),
            opts,
            self.pool.clone(),
        );

        info!(
            "🧬 Solving with {} restarts × {} generations (population {}, elite {}, {} threads)",
            opts.restarts,
            opts.iterations,
            opts.population_size,
            opts.elite_size,
            self.pool.current_num_threads()
        );

        let stop = AtomicBool::new(false);
        let latch = CancelLatch {
            inner: callback,
            stop: &stop,
        };

        // 1. Run restarts
        let runs: Vec<RunSummary> = if opts.parallel_restarts {
            (1..=opts.restarts)
                .into_par_iter()
                .filter_map(|r| self.run_once(&solver, cipher_text, r, seed, &latch))
                .collect()
        } else {
            let mut runs = Vec::with_capacity(opts.restarts);
            for r in 1..=opts.restarts {
                info!("🔁 Restart {}/{}", r, opts.restarts);
                match self.run_once(&solver, cipher_text, r, seed, &latch) {
                    Some(summary) => runs.push(summary),
                    None => break,
                }
            }
            runs
        };

        // 2. Pick the winner in restart order; ties keep the earlier run.
        let mut best: Option<&RunSummary> = None;
        for run in &runs {
            if best.map_or(true, |b| run.score > b.score) {
                best = Some(run);
            }
        }

        let (mapping, score) = match best {
            Some(run) => (run.mapping, run.score),
            None => {
                let mapping = Mapping::identity();
                (mapping, self.scorer.score(&mapping.decrypt(cipher_text)))
            }
        };

        OptimizationResult {
            mapping,
            score,
            plaintext: mapping.decrypt(cipher_text),
            runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringParams;
    use crate::scorer::ReferenceData;
    use std::sync::atomic::AtomicUsize;

    fn orchestrator(config: &Config) -> RestartOrchestrator {
        let scorer = Arc::new(Scorer::new(
            Arc::new(ReferenceData::english()),
            &ScoringParams::default(),
        ));
        RestartOrchestrator::new(scorer, OptimizationOptions::from(config)).unwrap()
    }

    fn small_config() -> Config {
        let mut config = Config::default();
        config.search.iterations = 15;
        config.search.population_size = 20;
        config.search.elite_size = 4;
        config.search.restarts = 3;
        config.search.threads = 2;
        config
    }

    #[test]
    fn test_one_summary_per_restart_and_winner_is_max() {
        let o = orchestrator(&small_config());
        let result = o.run("Wkh txlfn eurzq ira", Some(3), &NoProgress);

        assert_eq!(result.runs.len(), 3);
        let max = result.runs.iter().map(|r| r.score).fold(f64::MIN, f64::max);
        assert_eq!(result.score, max);
        assert_eq!(result.plaintext, result.mapping.decrypt("Wkh txlfn eurzq ira"));
    }

    #[test]
    fn test_parallel_restarts_match_sequential() {
        let cipher = "Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj";
        let mut config = small_config();
        let sequential = orchestrator(&config).run(cipher, Some(21), &NoProgress);
        config.search.parallel_restarts = true;
        let parallel = orchestrator(&config).run(cipher, Some(21), &NoProgress);

        assert_eq!(sequential.mapping, parallel.mapping);
        assert_eq!(sequential.score, parallel.score);
    }

    struct CancelImmediately;

    impl ProgressCallback for CancelImmediately {
        fn on_progress(&self, _progress: &Progress) -> bool {
            false
        }
    }

    #[test]
    fn test_cancellation_stops_remaining_restarts() {
        let o = orchestrator(&small_config());
        let result = o.run("Wkh txlfn eurzq ira", Some(3), &CancelImmediately);
        assert_eq!(result.runs.len(), 1);
        assert!(result.runs[0].cancelled);
    }

    struct CancelRestartOne(AtomicUsize);

    impl ProgressCallback for CancelRestartOne {
        fn on_progress(&self, progress: &Progress) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            progress.restart != 1
        }
    }

    fn progress_for(restart: usize, mapping: &Mapping) -> Progress<'_> {
        Progress {
            restart,
            generation: 1,
            iterations: 1,
            score: 0.0,
            best_so_far: 0.0,
            mapping,
            plaintext: "",
        }
    }

    #[test]
    fn test_cancel_latch_stops_every_restart_once_tripped() {
        let inner = CancelRestartOne(AtomicUsize::new(0));
        let stop = AtomicBool::new(false);
        let latch = CancelLatch {
            inner: &inner,
            stop: &stop,
        };
        let mapping = Mapping::identity();

        assert!(latch.on_progress(&progress_for(2, &mapping)));
        assert!(!latch.on_progress(&progress_for(1, &mapping)));
        assert!(stop.load(Ordering::SeqCst));
        assert!(!latch.on_progress(&progress_for(2, &mapping)));
        assert!(!latch.on_progress(&progress_for(3, &mapping)));
        // Once tripped, the user callback is no longer consulted.
        assert_eq!(inner.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_restart_not_started_after_cancellation() {
        let o = orchestrator(&small_config());
        let cipher = "Wkh txlfn eurzq ira";
        let solver = GeneticSolver::new(
            o.scorer.clone(),
            Arc::from(cipher),
            &o.options,
            o.pool.clone(),
        );
        let stop = AtomicBool::new(true);
        let latch = CancelLatch {
            inner: &NoProgress,
            stop: &stop,
        };
        assert!(o.run_once(&solver, cipher, 2, Some(3), &latch).is_none());
    }

    #[test]
    fn test_parallel_cancellation_stops_at_first_report() {
        let mut config = small_config();
        config.search.parallel_restarts = true;
        config.search.report_interval = 1;
        let o = orchestrator(&config);
        let callback = CancelRestartOne(AtomicUsize::new(0));
        let result = o.run("Wkh txlfn eurzq ira", Some(3), &callback);

        let first = result.runs.iter().find(|r| r.restart == 1).unwrap();
        assert!(first.cancelled);
        assert_eq!(first.generations, 1);
        assert!(result.runs.len() <= 3);
        assert!(result.runs.iter().all(|r| r.mapping.is_bijection()));
    }
}
