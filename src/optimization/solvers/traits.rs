use crate::core::{ConfigError, HistoryEntry, Result, SearchConfig, SearchResult, SearchSpace};
use crate::optimization::callback::{LogProgress, NoopCallback, ProgressCallback};
use crate::optimization::problem::Objective;

/// Search strategy interface - one `run` per call, no state kept between runs
pub trait Optimizer {
    fn name(&self) -> &str;

    fn config(&self) -> &SearchConfig;

    /// Run the search, reporting progress to `callback` once per iteration
    fn run_with_callback(
        &self,
        objective: &dyn Objective,
        space: &SearchSpace,
        callback: &mut dyn ProgressCallback,
    ) -> Result<SearchResult>;

    /// Run the search; logs progress when the config is verbose
    fn run(&self, objective: &dyn Objective, space: &SearchSpace) -> Result<SearchResult> {
        let config = self.config();
        if config.verbose {
            let mut progress = LogProgress::new(self.name(), config.report_every());
            self.run_with_callback(objective, space, &mut progress)
        } else {
            self.run_with_callback(objective, space, &mut NoopCallback)
        }
    }
}

/// Checks shared by every strategy before the first evaluation.
pub(crate) fn validate_config(config: &SearchConfig) -> std::result::Result<(), ConfigError> {
    if config.iterations == 0 {
        return Err(ConfigError::ZeroIterations);
    }
    Ok(())
}

pub(crate) fn validate_step(name: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidStep { name, value })
    }
}

/// Best-score trajectory; a no-op unless history was requested.
pub(crate) struct HistoryLog {
    entries: Option<Vec<HistoryEntry>>,
}

impl HistoryLog {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self {
            entries: config
                .return_history
                .then(|| Vec::with_capacity(config.iterations as usize + 1)),
        }
    }

    #[inline]
    pub(crate) fn record(&mut self, iteration: u32, best_score: f64) {
        if let Some(entries) = self.entries.as_mut() {
            entries.push(HistoryEntry {
                iteration,
                best_score,
            });
        }
    }

    pub(crate) fn finish(self) -> Option<Vec<HistoryEntry>> {
        self.entries
    }
}

// ============================================================================
// GUIDE: ADDING A STRATEGY
// ============================================================================
//
// 1. Store the shared `SearchConfig` plus your own step parameters in a struct
//    and give it `with_*` builders.
//
// 2. In `run_with_callback`:
//    - validate with `validate_config` / `validate_step` BEFORE evaluating
//    - create the RNG with `seeded_rng(config.seed)` inside the call, never
//      in the struct, so repeated runs stay independent
//    - evaluate only through `ScoredObjective` so min/max share one
//      comparison rule and evaluations are counted
//    - propagate objective errors with `?`, no partial results
//    - call `callback.on_iteration` once per outer iteration
//
// 3. Register the strategy in `StrategyKind` and `build_optimizer`.
//
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_log_is_inert_when_disabled() {
        let mut log = HistoryLog::new(&SearchConfig::new(5));
        log.record(0, 1.0);
        assert!(log.finish().is_none());

        let mut log = HistoryLog::new(&SearchConfig::new(5).with_history(true));
        log.record(0, 1.0);
        log.record(3, 0.5);
        let entries = log.finish().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].iteration, 3);
    }

    #[test]
    fn step_validation() {
        assert!(validate_step("step_size", 0.1).is_ok());
        assert!(validate_step("step_size", 0.0).is_err());
        assert!(validate_step("perturb_strength", -1.0).is_err());
        assert!(validate_step("perturb_strength", f64::NAN).is_err());
        assert!(validate_config(&SearchConfig::new(0)).is_err());
    }
}
