//! Resolver configuration.

use curb_core::{CurbError, CurbResult};

use crate::Side;

/// Tuning for the side classifier.
///
/// The defaults reproduce the strict sign test: a query is on the right only
/// for a strictly positive cross product, everything else is the left.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverConfig {
    /// Side reported when the query point is collinear with the reference
    /// heading, coincides with the node, or the heading has zero length.
    /// Default: [`Side::Left`].
    pub tie_side: Side,

    /// Cross products with an absolute value at or below this threshold
    /// count as collinear.  Units are squared degrees.  Default: `0.0`.
    pub collinear_epsilon: f64,
}

impl ResolverConfig {
    /// Reject thresholds that would make every query collinear or none.
    pub fn validate(&self) -> CurbResult<()> {
        if !self.collinear_epsilon.is_finite() || self.collinear_epsilon < 0.0 {
            return Err(CurbError::InvalidConfig(format!(
                "collinear_epsilon must be finite and >= 0, got {}",
                self.collinear_epsilon
            )));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { tie_side: Side::Left, collinear_epsilon: 0.0 }
    }
}
