/// Progress hook invoked by every strategy once per outer iteration.
///
/// Callbacks observe the run; they cannot change its outcome or stop it.
pub trait ProgressCallback {
    /// Called after iteration `iteration` of `total` with the best raw score so far
    fn on_iteration(&mut self, iteration: u32, total: u32, best_x: &[f64], best_score: f64);
}

/// Callback that ignores every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallback;

impl ProgressCallback for NoopCallback {
    #[inline]
    fn on_iteration(&mut self, _iteration: u32, _total: u32, _best_x: &[f64], _best_score: f64) {}
}

/// Logs the best score every `every` iterations through the `log` facade.
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    every: u32,
}

impl LogProgress {
    pub fn new(label: impl Into<String>, every: u32) -> Self {
        Self {
            label: label.into(),
            every: every.max(1),
        }
    }

    /// Progress line for `iteration`, or `None` between reporting points.
    pub fn report(&self, iteration: u32, total: u32, best_score: f64) -> Option<String> {
        (iteration % self.every == 0).then(|| {
            format!(
                "[{}] iter {}/{}, best_score={}",
                self.label, iteration, total, best_score
            )
        })
    }
}

impl ProgressCallback for LogProgress {
    fn on_iteration(&mut self, iteration: u32, total: u32, _best_x: &[f64], best_score: f64) {
        if let Some(line) = self.report(iteration, total, best_score) {
            log::info!("{}", line);
        }
    }
}

/// Iteration result for tracking optimization progress
#[derive(Debug, Clone, PartialEq)]
pub struct IterationResult {
    pub iteration: u32,
    pub params: Vec<f64>,
    pub cost: f64,
}

/// Keeps every report in memory, for diagnostics and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingCallback {
    history: Vec<IterationResult>,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get iteration history
    pub fn history(&self) -> &[IterationResult] {
        &self.history
    }
}

impl ProgressCallback for RecordingCallback {
    fn on_iteration(&mut self, iteration: u32, _total: u32, best_x: &[f64], best_score: f64) {
        self.history.push(IterationResult {
            iteration,
            params: best_x.to_vec(),
            cost: best_score,
        });
    }
}
