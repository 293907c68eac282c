use super::hill_climbing::DEFAULT_STEP_SIZE;
use super::traits::{HistoryLog, Optimizer, validate_config, validate_step};
use crate::core::{Result, SearchConfig, SearchResult, SearchSpace};
use crate::optimization::callback::ProgressCallback;
use crate::optimization::neighborhood::{perturb, sample_uniform, seeded_rng};
use crate::optimization::problem::{Objective, Score, ScoredObjective};
use rand::Rng;

/// Default escape-jump scale, as a fraction of each dimension's span.
pub const DEFAULT_PERTURB_STRENGTH: f64 = 0.5;
/// Default neighbor budget of each local search.
pub const DEFAULT_LOCAL_ITERATIONS: u32 = 100;

/// Iterated local search: hill-climb, then repeatedly kick the best point
/// with a large jump and hill-climb again, keeping only strict improvements.
///
/// Each local search costs `local_iterations + 1` evaluations (its start point
/// plus one per neighbor), so a run makes
/// `(iterations + 1) * (local_iterations + 1)` evaluations.
#[derive(Clone, Debug)]
pub struct IteratedLocalSearch {
    config: SearchConfig,
    step_size: f64,
    perturb_strength: f64,
    local_iterations: u32,
}

impl IteratedLocalSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            step_size: DEFAULT_STEP_SIZE,
            perturb_strength: DEFAULT_PERTURB_STRENGTH,
            local_iterations: DEFAULT_LOCAL_ITERATIONS,
        }
    }

    /// Configure local-search neighbor scale (default: 0.1)
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Configure escape-jump scale (default: 0.5)
    pub fn with_perturb_strength(mut self, perturb_strength: f64) -> Self {
        self.perturb_strength = perturb_strength;
        self
    }

    /// Configure the neighbor budget of every local search (default: 100)
    pub fn with_local_iterations(mut self, local_iterations: u32) -> Self {
        self.local_iterations = local_iterations;
        self
    }

    /// Greedy local search from `start`, always run to its full budget.
    fn local_search<R: Rng + ?Sized>(
        &self,
        start: Vec<f64>,
        scored: &mut ScoredObjective<'_>,
        space: &SearchSpace,
        rng: &mut R,
    ) -> Result<(Vec<f64>, Score)> {
        let mut current_score = scored.score(&start)?;
        let mut current = start;

        for _ in 0..self.local_iterations {
            let candidate = perturb(&current, self.step_size, space, &mut *rng);
            let candidate_score = scored.score(&candidate)?;
            if candidate_score.improves_on(&current_score) {
                current = candidate;
                current_score = candidate_score;
            }
        }

        Ok((current, current_score))
    }
}

impl Optimizer for IteratedLocalSearch {
    fn name(&self) -> &str {
        "iterated_local_search"
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
        validate_step("perturb_strength", self.perturb_strength)?;
        let iterations = self.config.iterations;
        log::debug!(
            "{}: {} dims, {} iterations x {} local steps, step {}, perturb {}",
            self.name(),
            space.len(),
            iterations,
            self.local_iterations,
            self.step_size,
            self.perturb_strength
        );

        let mut rng = seeded_rng(self.config.seed);
        let mut scored = ScoredObjective::new(objective, self.config.sense);
        let mut history = HistoryLog::new(&self.config);

        let start = sample_uniform(space, &mut rng);
        let (mut best, mut best_score) = self.local_search(start, &mut scored, space, &mut rng)?;
        history.record(0, best_score.raw);

        for iter in 1..=iterations {
            // Kick the best point out of its basin, then re-optimize
            let kicked = perturb(&best, self.perturb_strength, space, &mut rng);
            let (candidate, candidate_score) =
                self.local_search(kicked, &mut scored, space, &mut rng)?;

            if candidate_score.improves_on(&best_score) {
                best = candidate;
                best_score = candidate_score;
            }

            history.record(iter, best_score.raw);
            callback.on_iteration(iter, iterations, &best, best_score.raw);
        }

        Ok(SearchResult {
            best_x: best,
            best_score: best_score.raw,
            evaluations: scored.evaluations(),
            iterations,
            history: history.finish(),
        })
    }
}
