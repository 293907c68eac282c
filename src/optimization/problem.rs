use crate::core::{BoxError, Result, SearchError, Sense};

/// Caller-supplied scalar function of a vector.
///
/// Plain closures `Fn(&[f64]) -> f64` implement this directly. Wrap a closure
/// returning `Result` in [`Fallible`] to let its errors abort the run.
pub trait Objective {
    /// Evaluate the objective (may be expensive)
    fn evaluate(&self, x: &[f64]) -> std::result::Result<f64, BoxError>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    #[inline]
    fn evaluate(&self, x: &[f64]) -> std::result::Result<f64, BoxError> {
        Ok(self(x))
    }
}

/// Adapter for objectives that can fail.
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: Into<BoxError>,
{
    fn evaluate(&self, x: &[f64]) -> std::result::Result<f64, BoxError> {
        (self.0)(x).map_err(Into::into)
    }
}

/// Raw objective value paired with its larger-is-better counterpart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Score {
    pub raw: f64,
    pub unified: f64,
}

impl Score {
    /// Strict improvement; ties and NaN never improve.
    #[inline]
    pub fn improves_on(&self, other: &Score) -> bool {
        self.unified > other.unified
    }
}

/// Wraps an objective for one run: unifies the sign for min/max and counts
/// evaluations.
pub struct ScoredObjective<'a> {
    objective: &'a dyn Objective,
    sense: Sense,
    evaluations: usize,
}

impl<'a> ScoredObjective<'a> {
    pub fn new(objective: &'a dyn Objective, sense: Sense) -> Self {
        Self {
            objective,
            sense,
            evaluations: 0,
        }
    }

    pub fn score(&mut self, x: &[f64]) -> Result<Score> {
        self.evaluations += 1;
        let raw = self
            .objective
            .evaluate(x)
            .map_err(|source| SearchError::Objective {
                evaluation: self.evaluations,
                source,
            })?;
        Ok(Score {
            raw,
            unified: self.sense.unify(raw),
        })
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}
