use serde::{Deserialize, Serialize};

// ===== ENUMS =====

/// Direction of the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl Sense {
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize { Self::Maximize } else { Self::Minimize }
    }

    /// Map a raw objective value onto the larger-is-better scale.
    #[inline]
    pub fn unify(self, raw: f64) -> f64 {
        match self {
            Self::Minimize => -raw,
            Self::Maximize => raw,
        }
    }
}

// ===== RUN CONFIGURATION =====

/// Options shared by every strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub iterations: u32,
    pub sense: Sense,
    pub seed: Option<u64>,
    pub return_history: bool,
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            sense: Sense::Minimize,
            seed: None,
            return_history: false,
            verbose: false,
        }
    }
}

impl SearchConfig {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.sense = sense;
        self
    }

    pub fn maximize(self) -> Self {
        self.with_sense(Sense::Maximize)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history(mut self, return_history: bool) -> Self {
        self.return_history = return_history;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Iteration stride between verbose progress reports.
    pub fn report_every(&self) -> u32 {
        (self.iterations / 10).max(1)
    }
}

// ===== OUTPUT =====

/// Best raw score known at a given iteration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub iteration: u32,
    pub best_score: f64,
}

/// Outcome of one run. `best_score` is the raw objective value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_x: Vec<f64>,
    pub best_score: f64,
    /// Exact number of objective calls made.
    pub evaluations: usize,
    /// Configured outer iteration budget.
    pub iterations: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub history: Option<Vec<HistoryEntry>>,
}

impl SearchResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unify_flips_only_for_minimize() {
        assert_eq!(Sense::Minimize.unify(3.0), -3.0);
        assert_eq!(Sense::Maximize.unify(3.0), 3.0);
        assert_eq!(Sense::from_maximize(true), Sense::Maximize);
        assert_eq!(Sense::default(), Sense::Minimize);
    }

    #[test]
    fn report_every_is_a_tenth_of_the_budget() {
        assert_eq!(SearchConfig::new(2000).report_every(), 200);
        assert_eq!(SearchConfig::new(5).report_every(), 1);
    }

    #[test]
    fn result_json_omits_missing_history() {
        let result = SearchResult {
            best_x: vec![1.0, 2.0],
            best_score: 5.0,
            evaluations: 11,
            iterations: 10,
            history: None,
        };
        let json = result.to_json().unwrap();
        assert!(!json.contains("history"));

        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
