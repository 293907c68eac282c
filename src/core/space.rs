use super::error::ConfigError;

/// Largest magnitude below which every whole number is an exact `f64` (2^53).
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One coordinate of the search space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimension {
    pub low: f64,
    pub high: f64,
    pub integer: bool,
}

impl Dimension {
    pub fn continuous(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            integer: false,
        }
    }

    pub fn integer(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            integer: true,
        }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Inclusive whole-number range `[ceil(low), floor(high)]`.
    #[inline]
    pub fn integer_range(&self) -> (f64, f64) {
        (self.low.ceil(), self.high.floor())
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.integer {
            let (lo, hi) = self.integer_range();
            value.fract() == 0.0 && value >= lo && value <= hi
        } else {
            value >= self.low && value <= self.high
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ConfigError::NonFiniteBound { index });
        }
        if self.low > self.high {
            return Err(ConfigError::InvalidBounds {
                index,
                low: self.low,
                high: self.high,
            });
        }
        if !self.span().is_finite() {
            return Err(ConfigError::NonFiniteSpan { index });
        }
        if self.integer {
            let (lo, hi) = self.integer_range();
            if lo > hi {
                return Err(ConfigError::EmptyIntegerRange {
                    index,
                    low: self.low,
                    high: self.high,
                });
            }
            if lo < -MAX_EXACT_INTEGER || hi > MAX_EXACT_INTEGER {
                return Err(ConfigError::IntegerRangeTooLarge {
                    index,
                    low: self.low,
                    high: self.high,
                });
            }
        }
        Ok(())
    }
}

/// Validated box-bounded domain. Its length is the dimensionality of every
/// vector a strategy evaluates.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSpace {
    dims: Vec<Dimension>,
}

impl SearchSpace {
    /// Build from `(low, high)` pairs with optional per-dimension integer flags.
    pub fn new(bounds: &[(f64, f64)], integer: Option<&[bool]>) -> Result<Self, ConfigError> {
        let flags = match integer {
            Some(flags) if flags.len() != bounds.len() => {
                return Err(ConfigError::IntegralityMismatch {
                    expected: bounds.len(),
                    got: flags.len(),
                });
            }
            Some(flags) => flags.to_vec(),
            None => vec![false; bounds.len()],
        };

        let dims = bounds
            .iter()
            .zip(flags)
            .map(|(&(low, high), integer)| Dimension { low, high, integer })
            .collect();
        Self::from_dimensions(dims)
    }

    pub fn continuous(bounds: &[(f64, f64)]) -> Result<Self, ConfigError> {
        Self::new(bounds, None)
    }

    pub fn from_dimensions(dims: Vec<Dimension>) -> Result<Self, ConfigError> {
        for (index, dim) in dims.iter().enumerate() {
            dim.validate(index)?;
        }
        Ok(Self { dims })
    }

    pub fn dims(&self) -> &[Dimension] {
        &self.dims
    }

    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// True if `x` has the right length and every coordinate is admissible.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dims.len() && self.dims.iter().zip(x).all(|(d, &v)| d.contains(v))
    }
}
