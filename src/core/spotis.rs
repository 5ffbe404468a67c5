use crate::core::error::RankError;
use crate::models::{DecisionMatrix, Direction};

/// Per-criterion bounds observed in the decision matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Reference value an alternative should ideally reach
    #[inline]
    pub fn ideal(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Cost => self.min,
            Direction::Benefit => self.max,
        }
    }

    /// Worst observed value
    #[inline]
    pub fn anti_ideal(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Cost => self.max,
            Direction::Benefit => self.min,
        }
    }
}

/// Column-wise [min, max] of the matrix
pub fn column_bounds(matrix: &DecisionMatrix) -> Vec<Bounds> {
    (0..matrix.cols())
        .map(|col| {
            matrix.column(col).fold(
                Bounds {
                    min: f64::INFINITY,
                    max: f64::NEG_INFINITY,
                },
                |b, v| Bounds {
                    min: b.min.min(v),
                    max: b.max.max(v),
                },
            )
        })
        .collect()
}

/// Normalized deviation of `value` from the ideal, in `[0, 1]`
///
/// A zero-range column carries no signal and yields 0.
#[inline]
pub fn normalized_deviation(value: f64, bounds: &Bounds, direction: Direction) -> f64 {
    let range = bounds.range();
    if range <= 0.0 {
        return 0.0;
    }
    (value - bounds.ideal(direction)).abs() / range
}

/// SPOTIS preference score for each row of the matrix
///
/// The score is the weighted sum of normalized distances to the ideal
/// solution. Lower scores are closer to the ideal.
pub fn preference_scores(
    matrix: &DecisionMatrix,
    weights: &[f64],
    directions: &[Direction],
) -> Result<Vec<f64>, RankError> {
    check_dimensions(matrix, weights, directions)?;

    let bounds = column_bounds(matrix);

    let scores: Vec<f64> = (0..matrix.rows())
        .map(|row| {
            matrix
                .row(row)
                .iter()
                .zip(bounds.iter())
                .zip(weights.iter().zip(directions.iter()))
                .map(|((&value, b), (&weight, &direction))| {
                    weight * normalized_deviation(value, b, direction)
                })
                .sum::<f64>()
        })
        .collect();

    Ok(scores)
}

/// Assign 1-based ranks by ascending score
///
/// Position `i` of the result holds the rank of alternative `i`. Equal
/// scores keep their input order.
pub fn rank_ascending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]).then(a.cmp(&b)));

    let mut ranks = vec![0; scores.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Score and rank all alternatives of the matrix
pub fn rank(
    matrix: &DecisionMatrix,
    weights: &[f64],
    directions: &[Direction],
) -> Result<(Vec<f64>, Vec<usize>), RankError> {
    let scores = preference_scores(matrix, weights, directions)?;
    let ranks = rank_ascending(&scores);
    Ok((scores, ranks))
}

fn check_dimensions(
    matrix: &DecisionMatrix,
    weights: &[f64],
    directions: &[Direction],
) -> Result<(), RankError> {
    if matrix.rows() == 0 {
        return Err(RankError::EmptyPoints);
    }
    if matrix.cols() == 0 {
        return Err(RankError::EmptyCriteria);
    }
    if weights.len() != matrix.cols() {
        return Err(RankError::DimensionMismatch {
            what: "weights",
            expected: matrix.cols(),
            actual: weights.len(),
        });
    }
    if directions.len() != matrix.cols() {
        return Err(RankError::DimensionMismatch {
            what: "directions",
            expected: matrix.cols(),
            actual: directions.len(),
        });
    }
    Ok(())
}
