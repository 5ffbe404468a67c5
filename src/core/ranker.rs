use std::collections::{HashMap, HashSet};
use crate::core::{
    distance::build_matrix,
    error::RankError,
    spotis,
    weights::derive_weights,
};
use crate::models::{Direction, Location, PairwiseComparison, Point, Ranking};

/// Default cap on the number of candidate points per request
pub const DEFAULT_MAX_POINTS: usize = 1000;

/// Default cap on the number of criteria per request
pub const DEFAULT_MAX_CRITERIA: usize = 50;

/// Ranking orchestrator - wires the decision engine stages together
///
/// # Pipeline Stages
/// 1. Input validation
/// 2. Weight derivation from pairwise comparisons
/// 3. Point-to-criterion distance matrix
/// 4. SPOTIS scoring and ranking
///
/// The ranker holds only immutable limits, so one instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    max_points: usize,
    max_criteria: usize,
}

impl Ranker {
    pub fn new(max_points: usize, max_criteria: usize) -> Self {
        Self {
            max_points,
            max_criteria,
        }
    }

    pub fn with_default_limits() -> Self {
        Self::new(DEFAULT_MAX_POINTS, DEFAULT_MAX_CRITERIA)
    }

    /// Rank candidate points against location-based criteria
    ///
    /// Every criterion is treated as "closer is better".
    ///
    /// # Arguments
    /// * `points` - Candidate points, in the order ranks are reported
    /// * `criteria` - Unique criterion names
    /// * `locations` - Reference location per criterion, if any
    /// * `comparisons` - Pairwise importance judgments between criteria
    ///
    /// # Returns
    /// The weights used, per-point scores, and per-point 1-based ranks
    pub fn rank_points(
        &self,
        points: &[Point],
        criteria: &[String],
        locations: &HashMap<String, Option<Location>>,
        comparisons: &[PairwiseComparison],
    ) -> Result<Ranking, RankError> {
        self.validate(points, criteria)?;

        let weights = derive_weights(criteria, comparisons);
        tracing::debug!("Derived weights: {:?}", weights.values());

        let unlocated_criteria: Vec<String> = criteria
            .iter()
            .filter(|name| locations.get(*name).map_or(true, Option::is_none))
            .cloned()
            .collect();

        if !unlocated_criteria.is_empty() {
            tracing::warn!(
                "Criteria without a reference location contribute no signal: {:?}",
                unlocated_criteria
            );
        }

        let matrix = build_matrix(points, criteria, locations);
        let directions = vec![Direction::Cost; criteria.len()];

        let (scores, ranks) = spotis::rank(&matrix, weights.values(), &directions)?;

        tracing::debug!(
            "Ranked {} points over {} criteria",
            matrix.rows(),
            matrix.cols()
        );

        Ok(Ranking {
            weights,
            scores,
            ranks,
            unlocated_criteria,
        })
    }

    fn validate(&self, points: &[Point], criteria: &[String]) -> Result<(), RankError> {
        if points.is_empty() {
            return Err(RankError::EmptyPoints);
        }
        if criteria.is_empty() {
            return Err(RankError::EmptyCriteria);
        }
        if points.len() > self.max_points {
            return Err(RankError::TooManyPoints {
                count: points.len(),
                max: self.max_points,
            });
        }
        if criteria.len() > self.max_criteria {
            return Err(RankError::TooManyCriteria {
                count: criteria.len(),
                max: self.max_criteria,
            });
        }

        let mut seen = HashSet::with_capacity(criteria.len());
        for name in criteria {
            if !seen.insert(name.as_str()) {
                return Err(RankError::DuplicateCriterion(name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_limits()
    }
}
