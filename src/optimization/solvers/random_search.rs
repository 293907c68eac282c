use super::traits::{HistoryLog, Optimizer, validate_config};
use crate::core::{Result, SearchConfig, SearchResult, SearchSpace};
use crate::optimization::callback::ProgressCallback;
use crate::optimization::neighborhood::{sample_uniform, seeded_rng};
use crate::optimization::problem::{Objective, ScoredObjective};

/// Pure random sampling: every trial is an independent uniform draw, the best
/// one is kept. Honors integer dimensions.
#[derive(Clone, Debug)]
pub struct RandomSearch {
    config: SearchConfig,
}

impl RandomSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Optimizer for RandomSearch {
    fn name(&self) -> &str {
        "random_search"
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
        let iterations = self.config.iterations;
        log::debug!("{}: {} dims, {} iterations", self.name(), space.len(), iterations);

        let mut rng = seeded_rng(self.config.seed);
        let mut scored = ScoredObjective::new(objective, self.config.sense);
        let mut history = HistoryLog::new(&self.config);

        let mut best_x = sample_uniform(space, &mut rng);
        let mut best = scored.score(&best_x)?;
        history.record(0, best.raw);

        for iter in 1..=iterations {
            let x = sample_uniform(space, &mut rng);
            let score = scored.score(&x)?;

            // Only strict improvements are recorded
            if score.improves_on(&best) {
                best = score;
                best_x = x;
                history.record(iter, best.raw);
            }

            callback.on_iteration(iter, iterations, &best_x, best.raw);
        }

        Ok(SearchResult {
            best_x,
            best_score: best.raw,
            evaluations: scored.evaluations(),
            iterations,
            history: history.finish(),
        })
    }
}
