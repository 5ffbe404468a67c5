use std::collections::HashMap;
use crate::models::{Outcome, PairwiseComparison, WeightVector};

/// Derive criterion weights from pairwise comparisons
///
/// Each comparison awards 1.0 to the preferred criterion, or 0.5 to both on
/// a tie. Tallies are normalized to sum to one. If no comparison touches a
/// known criterion the weights fall back to uniform.
///
/// Comparisons naming a criterion outside `criteria` are skipped as a whole:
/// the known side earns nothing either.
pub fn derive_weights(criteria: &[String], comparisons: &[PairwiseComparison]) -> WeightVector {
    let mut tally: HashMap<&str, f64> = criteria.iter().map(|c| (c.as_str(), 0.0)).collect();

    for comparison in comparisons {
        if !tally.contains_key(comparison.first.as_str())
            || !tally.contains_key(comparison.second.as_str())
        {
            tracing::debug!(
                "Skipping comparison with unknown criterion: {} vs {}",
                comparison.first,
                comparison.second
            );
            continue;
        }

        let (first_share, second_share) = match comparison.outcome {
            Outcome::First => (1.0, 0.0),
            Outcome::Second => (0.0, 1.0),
            Outcome::Equal => (0.5, 0.5),
        };

        if let Some(t) = tally.get_mut(comparison.first.as_str()) {
            *t += first_share;
        }
        if let Some(t) = tally.get_mut(comparison.second.as_str()) {
            *t += second_share;
        }
    }

    let total: f64 = tally.values().sum();
    if total == 0.0 {
        return WeightVector::uniform(criteria);
    }

    let weights = criteria.iter().map(|c| tally[c.as_str()] / total).collect();
    WeightVector::from_parts(criteria.to_vec(), weights)
}
