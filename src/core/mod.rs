pub mod error;
pub mod space;
pub mod types;

pub use error::{BoxError, ConfigError, Result, SearchError};
pub use space::{Dimension, MAX_EXACT_INTEGER, SearchSpace};
pub use types::*;
