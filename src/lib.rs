//! Derivative-free search over box-bounded spaces.
//!
//! Four strategies share one [`Optimizer`] capability: [`RandomSearch`],
//! [`RandomHillClimbing`], [`AdaptiveRandomSearch`] and
//! [`IteratedLocalSearch`]. Every run owns its RNG, so a fixed seed gives
//! bit-identical results.
//!
//! ```rust
//! use boxsearch::{AdaptiveRandomSearch, Optimizer, SearchConfig, SearchSpace};
//!
//! let space = SearchSpace::continuous(&[(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//!
//! let result = AdaptiveRandomSearch::new(SearchConfig::new(2000).with_seed(42))
//!     .with_step_size(0.1)
//!     .run(&sphere, &space)
//!     .unwrap();
//! assert!(result.best_score < 1e-3);
//! ```

mod core;
mod optimization;
#[cfg(feature = "python")]
mod python;

pub use crate::core::*;
pub use crate::optimization::*;
pub use crate::optimization::solvers::{
    DEFAULT_LOCAL_ITERATIONS, DEFAULT_PERTURB_STRENGTH, DEFAULT_STEP_SIZE, STEP_CONTRACT,
    STEP_EXPAND,
};
