//! Similarity Metrics for Neighborhood Overlap
//!
//! This module provides the metrics used to compare two vertices by how much
//! their neighborhoods overlap. All metrics produce a score in `[0, 1]`.
//!
//! # Supported Metrics
//!
//! - **Unweighted**: plain Jaccard index of the two neighbor sets. Best
//!   baseline when ratings are noisy or sparse.
//! - **Weighted**: Jaccard index where a common neighbor only counts toward
//!   the numerator if the two raw rating scores differ by at most the
//!   restriction threshold.
//! - **WeightedPlus**: like `Weighted`, but the filter compares
//!   sentiment-adjusted weights instead of raw scores.
//!
//! # Restriction Semantics
//!
//! The restriction filter shrinks only the matched set; the denominator is
//! always the full neighbor-set union. A stricter (smaller) restriction can
//! therefore only lower or preserve a score, never raise it.
//!
//! # Example
//!
//! ```
//! use reel::similarity::jaccard_index;
//!
//! // 3 shared neighbors out of 5 distinct neighbors overall
//! let score = jaccard_index(3, 5);
//! assert!((score - 0.6).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Metric selector for similarity scoring and recommendation ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimilarityMetric {
    /// Jaccard index of the raw neighbor sets
    #[default]
    Unweighted,
    /// Jaccard index with the matched set filtered by raw score agreement
    Weighted,
    /// Jaccard index with the matched set filtered by sentiment-adjusted
    /// weight agreement
    WeightedPlus,
}

impl SimilarityMetric {
    /// Whether this metric consults edge weights (and thus the restriction).
    #[inline]
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::Weighted | Self::WeightedPlus)
    }
}

/// Compute a Jaccard index from pre-counted set sizes.
///
/// Returns 0 for an empty union, which covers the isolated-vertex case
/// without a division by zero.
#[inline]
pub fn jaccard_index(matched: usize, union: usize) -> f64 {
    if union == 0 {
        0.0
    } else {
        matched as f64 / union as f64
    }
}

/// Whether two edge weights agree within the restriction threshold.
#[inline]
pub fn within_restriction(a: f64, b: f64, restriction: f64) -> bool {
    (a - b).abs() <= restriction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard_bounds() {
        assert_eq!(jaccard_index(0, 0), 0.0);
        assert_eq!(jaccard_index(0, 4), 0.0);
        assert_eq!(jaccard_index(4, 4), 1.0);
        let mid = jaccard_index(2, 7);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_within_restriction() {
        assert!(within_restriction(4.0, 4.0, 0.0));
        assert!(within_restriction(4.0, 6.5, 2.5));
        assert!(!within_restriction(4.0, 6.6, 2.5));
        // Symmetric in its arguments
        assert!(within_restriction(6.5, 4.0, 2.5));
    }

    #[test]
    fn test_metric_weighting() {
        assert!(!SimilarityMetric::Unweighted.is_weighted());
        assert!(SimilarityMetric::Weighted.is_weighted());
        assert!(SimilarityMetric::WeightedPlus.is_weighted());
        assert_eq!(SimilarityMetric::default(), SimilarityMetric::Unweighted);
    }
}
