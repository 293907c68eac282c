use super::hill_climbing::DEFAULT_STEP_SIZE;
use super::traits::{HistoryLog, Optimizer, validate_config, validate_step};
use crate::core::{Result, SearchConfig, SearchResult, SearchSpace};
use crate::optimization::callback::ProgressCallback;
use crate::optimization::neighborhood::{perturb, sample_uniform, seeded_rng};
use crate::optimization::problem::{Objective, ScoredObjective};

/// Step multiplier after an accepted move.
pub const STEP_EXPAND: f64 = 1.2;
/// Step multiplier after a rejected move.
pub const STEP_CONTRACT: f64 = 0.9;

/// Hill climbing with a (1+1)-style self-tuning step: grow on success,
/// shrink on failure. The step has no floor or ceiling.
#[derive(Clone, Debug)]
pub struct AdaptiveRandomSearch {
    config: SearchConfig,
    step_size: f64,
}

impl AdaptiveRandomSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            step_size: DEFAULT_STEP_SIZE,
        }
    }

    /// Configure initial step scale (default: 0.1)
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }
}

impl Optimizer for AdaptiveRandomSearch {
    fn name(&self) -> &str {
        "adaptive_random_search"
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn run_with_callback(
        &self,
        objective: &dyn Objective,
        space: &SearchSpace,
        callback: &mut dyn ProgressCallback,
    ) -> Result<SearchResult> {
        validate_config(&self.config)?;
        validate_step("step_size", self.step_size)?;
        let iterations = self.config.iterations;
        log::debug!(
            "{}: {} dims, {} iterations, initial step {}",
            self.name(),
            space.len(),
            iterations,
            self.step_size
        );

        let mut rng = seeded_rng(self.config.seed);
        let mut scored = ScoredObjective::new(objective, self.config.sense);
        let mut history = HistoryLog::new(&self.config);

        let mut current = sample_uniform(space, &mut rng);
        let mut current_score = scored.score(&current)?;
        let mut best = current.clone();
        let mut best_score = current_score;
        let mut step = self.step_size;
        history.record(0, best_score.raw);

        for iter in 1..=iterations {
            let candidate = perturb(&current, step, space, &mut rng);
            let candidate_score = scored.score(&candidate)?;

            if candidate_score.improves_on(&current_score) {
                current = candidate;
                current_score = candidate_score;
                if current_score.improves_on(&best_score) {
                    best.clone_from(&current);
                    best_score = current_score;
                }
                step *= STEP_EXPAND;
            } else {
                step *= STEP_CONTRACT;
            }

            history.record(iter, best_score.raw);
            callback.on_iteration(iter, iterations, &best, best_score.raw);
        }

        log::debug!("{}: final step {:.3e}", self.name(), step);

        Ok(SearchResult {
            best_x: best,
            best_score: best_score.raw,
            evaluations: scored.evaluations(),
            iterations,
            history: history.finish(),
        })
    }
}
