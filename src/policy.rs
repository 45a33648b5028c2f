use crate::error::{Error, Result};

const DEFAULT_GROW_THRESHOLD: f64 = 0.7;
const DEFAULT_SHRINK_THRESHOLD: f64 = 0.3;
const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Load factor thresholds that drive automatic resizing.
///
/// A table grows by `growth_factor` when an insertion leaves its load factor
/// above `grow_threshold`, and shrinks by the same factor, never below one
/// bucket, when a removal leaves it below `shrink_threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizePolicy {
    grow_threshold: f64,
    shrink_threshold: f64,
    growth_factor: usize,
}

impl ResizePolicy {
    /// Creates a policy.
    ///
    /// Thresholds must be finite with `0 <= shrink_threshold < grow_threshold`
    /// and the growth factor must be at least 2.
    pub fn new(grow_threshold: f64, shrink_threshold: f64, growth_factor: usize) -> Result<Self> {
        if !grow_threshold.is_finite() || !shrink_threshold.is_finite() {
            return Err(Error::InvalidPolicy("thresholds must be finite"));
        } else if shrink_threshold < 0.0 {
            return Err(Error::InvalidPolicy("shrink threshold must not be negative"));
        } else if shrink_threshold >= grow_threshold {
            return Err(Error::InvalidPolicy(
                "shrink threshold must be below grow threshold",
            ));
        } else if growth_factor < 2 {
            return Err(Error::InvalidPolicy("growth factor must be at least 2"));
        }

        Ok(Self {
            grow_threshold,
            shrink_threshold,
            growth_factor,
        })
    }

    pub fn grow_threshold(&self) -> f64 {
        self.grow_threshold
    }

    pub fn shrink_threshold(&self) -> f64 {
        self.shrink_threshold
    }

    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    pub(crate) fn should_grow(&self, load_factor: f64) -> bool {
        load_factor > self.grow_threshold
    }

    pub(crate) fn should_shrink(&self, load_factor: f64) -> bool {
        load_factor < self.shrink_threshold
    }

    /// Bucket count after growing.
    pub fn grown(&self, bucket_count: usize) -> usize {
        bucket_count.saturating_mul(self.growth_factor)
    }

    /// Bucket count after shrinking, floored at 1.
    pub fn shrunk(&self, bucket_count: usize) -> usize {
        (bucket_count / self.growth_factor).max(1)
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            grow_threshold: DEFAULT_GROW_THRESHOLD,
            shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}
