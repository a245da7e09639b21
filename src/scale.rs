//! Scale functions for data-to-pixel mappings.
//!
//! Position axes use linear scales; circle radii use a square-root scale so
//! rendered *area*, not radius, tracks the encoded value.
//!
//! Degenerate domains (zero width) are not rejected: they produce non-finite
//! outputs that serialize as-is and are dropped silently by SVG renderers.

/// Trait for scale functions that map domain values to range values.
pub trait Scale {
    /// Transform a domain value to a range value.
    fn scale(&self, value: f64) -> f64;

    /// Get the domain extent.
    fn domain(&self) -> (f64, f64);

    /// Get the range extent.
    fn range(&self) -> (f64, f64);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// Square-root scale for proportional-area circle sizing.
#[derive(Debug, Clone, Copy)]
pub struct SqrtScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl SqrtScale {
    /// Create a new square-root scale.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }
}

impl Scale for SqrtScale {
    fn scale(&self, value: f64) -> f64 {
        let lo = self.domain_min.sqrt();
        let hi = self.domain_max.sqrt();
        let t = (value.sqrt() - lo) / (hi - lo);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}
