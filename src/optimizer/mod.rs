pub mod evaluator;
pub mod evolver;
pub mod initialization;
pub mod mutation;
pub mod probe;
pub mod runner;
pub mod solver;

pub use self::evaluator::{Candidate, ParallelEvaluator};
pub use self::evolver::PopulationEvolver;
pub use self::probe::{alternate_decryptions, Alternate};
pub use self::runner::{
    NoProgress, OptimizationOptions, OptimizationResult, Progress, ProgressCallback,
    RestartOrchestrator, RunSummary,
};
pub use self::solver::{GeneticSolver, RunResult, SolverPhase};
