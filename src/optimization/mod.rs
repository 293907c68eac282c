pub mod callback;
pub mod neighborhood;
pub mod problem;
pub mod solvers;

pub use callback::{IterationResult, LogProgress, NoopCallback, ProgressCallback, RecordingCallback};
pub use neighborhood::{perturb, sample_uniform, seeded_rng};
pub use problem::{Fallible, Objective, Score, ScoredObjective};
pub use solvers::{
    AdaptiveRandomSearch, IteratedLocalSearch, Optimizer, RandomHillClimbing, RandomSearch,
    StepParams, StrategyKind, build_optimizer,
};
