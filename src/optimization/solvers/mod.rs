mod adaptive;
mod hill_climbing;
mod iterated_local;
mod random_search;
pub mod traits;

pub use adaptive::{AdaptiveRandomSearch, STEP_CONTRACT, STEP_EXPAND};
pub use hill_climbing::{DEFAULT_STEP_SIZE, RandomHillClimbing};
pub use iterated_local::{DEFAULT_LOCAL_ITERATIONS, DEFAULT_PERTURB_STRENGTH, IteratedLocalSearch};
pub use random_search::RandomSearch;
pub use traits::Optimizer;

use crate::core::SearchConfig;
use std::fmt;
use std::str::FromStr;

/// Strategy selector for string-driven front ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    RandomSearch,
    HillClimbing,
    Adaptive,
    IteratedLocal,
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" | "random_search" | "rs" => Ok(Self::RandomSearch),
            "hill_climbing" | "random_hill_climbing" | "rhc" => Ok(Self::HillClimbing),
            "adaptive" | "adaptive_random_search" | "ars" => Ok(Self::Adaptive),
            "iterated_local" | "iterated_local_search" | "ils" => Ok(Self::IteratedLocal),
            _ => Err(format!("unknown strategy: {}", s)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RandomSearch => "random_search",
            Self::HillClimbing => "hill_climbing",
            Self::Adaptive => "adaptive_random_search",
            Self::IteratedLocal => "iterated_local_search",
        };
        f.write_str(name)
    }
}

/// Step parameters for the strategies that use them; ignored by the others.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub step_size: f64,
    pub perturb_strength: f64,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            perturb_strength: DEFAULT_PERTURB_STRENGTH,
        }
    }
}

/// Single dispatch point from a strategy kind to a runnable optimizer.
pub fn build_optimizer(
    kind: StrategyKind,
    config: SearchConfig,
    params: StepParams,
) -> Box<dyn Optimizer> {
    match kind {
        StrategyKind::RandomSearch => Box::new(RandomSearch::new(config)),
        StrategyKind::HillClimbing => {
            Box::new(RandomHillClimbing::new(config).with_step_size(params.step_size))
        }
        StrategyKind::Adaptive => {
            Box::new(AdaptiveRandomSearch::new(config).with_step_size(params.step_size))
        }
        StrategyKind::IteratedLocal => Box::new(
            IteratedLocalSearch::new(config)
                .with_step_size(params.step_size)
                .with_perturb_strength(params.perturb_strength),
        ),
    }
}
