//! Error types for the search strategies.
//!
//! Configuration problems are reported before the objective is ever called.
//! Objective failures abort the run and carry the caller's error as source.

use thiserror::Error;

/// Boxed error produced by a fallible objective.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid bounds, integer flags or strategy parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A bound is NaN or infinite.
    #[error("bound at index {index} is not finite")]
    NonFiniteBound {
        /// Index of the offending dimension
        index: usize,
    },

    /// Both bounds are finite but `high - low` overflows.
    #[error("span of dimension {index} is not finite")]
    NonFiniteSpan {
        /// Index of the offending dimension
        index: usize,
    },

    /// A lower bound exceeds its upper bound.
    #[error("invalid bounds at index {index}: low ({low}) > high ({high})")]
    InvalidBounds {
        /// Index of the offending dimension
        index: usize,
        /// The lower bound value
        low: f64,
        /// The upper bound value
        high: f64,
    },

    /// Integer flags do not line up with the bounds.
    #[error("integer flags length mismatch: expected {expected}, got {got}")]
    IntegralityMismatch {
        /// Number of bounds
        expected: usize,
        /// Number of integer flags supplied
        got: usize,
    },

    /// An integer dimension contains no whole number.
    #[error("empty integer range at index {index}: ceil({low}) > floor({high})")]
    EmptyIntegerRange {
        /// Index of the offending dimension
        index: usize,
        /// The lower bound value
        low: f64,
        /// The upper bound value
        high: f64,
    },

    /// An integer dimension reaches past the exactly representable
    /// whole numbers (`±2^53`).
    #[error("integer range at index {index} exceeds ±2^53: [{low}, {high}]")]
    IntegerRangeTooLarge {
        /// Index of the offending dimension
        index: usize,
        /// The lower bound value
        low: f64,
        /// The upper bound value
        high: f64,
    },

    /// The iteration budget is zero.
    #[error("iterations must be positive")]
    ZeroIterations,

    /// A step scale is not a positive finite number.
    #[error("{name} must be positive and finite, got {value}")]
    InvalidStep {
        /// Name of the parameter (`step_size`, `perturb_strength`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// Errors returned by [`Optimizer::run`](crate::Optimizer::run).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The run was rejected before any evaluation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The objective failed; the run was aborted.
    #[error("objective failed at evaluation {evaluation}: {source}")]
    Objective {
        /// 1-based index of the failing evaluation
        evaluation: usize,
        /// Error raised by the objective
        #[source]
        source: BoxError,
    },
}

/// A specialized `Result` type for search runs.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Returns `true` if the run was rejected for its configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, SearchError::Config(_))
    }

    /// Returns `true` if the objective raised an error.
    pub fn is_objective_error(&self) -> bool {
        matches!(self, SearchError::Objective { .. })
    }
}
