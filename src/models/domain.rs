use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A geographic coordinate in degrees
///
/// Used both for candidate points and for criterion reference locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Candidate points share the coordinate representation
pub type Point = Location;

/// A named decision dimension with an optional reference location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub location: Option<Location>,
}

/// Outcome of a single pairwise comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    First,
    Second,
    Equal,
}

/// Judgment that one criterion is more, less, or equally important than another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseComparison {
    pub first: String,
    pub second: String,
    pub outcome: Outcome,
}

/// Separator used by the keyed `"first_second"` comparison encoding
pub const COMPARISON_KEY_SEPARATOR: char = '_';

impl PairwiseComparison {
    pub fn new(first: impl Into<String>, second: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            outcome,
        }
    }

    /// Parse a keyed comparison such as `("park_school", "park")`
    ///
    /// The key is split on the first separator. A value naming the first
    /// criterion means `First`, the second means `Second`, anything else is
    /// `Equal`. Returns `None` for keys without a separator or with an empty side.
    pub fn from_keyed(key: &str, value: &str) -> Option<Self> {
        let (first, second) = key.split_once(COMPARISON_KEY_SEPARATOR)?;
        if first.is_empty() || second.is_empty() {
            return None;
        }

        let outcome = if value == first {
            Outcome::First
        } else if value == second {
            Outcome::Second
        } else {
            Outcome::Equal
        };

        Some(Self::new(first, second, outcome))
    }
}

/// Comparisons as they arrive on the wire
///
/// Either a list of records or the keyed map form `{"a_b": "a"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonSet {
    Records(Vec<PairwiseComparison>),
    Keyed(BTreeMap<String, String>),
}

impl Default for ComparisonSet {
    fn default() -> Self {
        ComparisonSet::Records(Vec::new())
    }
}

impl ComparisonSet {
    /// Convert into records, skipping malformed keyed entries
    pub fn into_records(self) -> Vec<PairwiseComparison> {
        match self {
            ComparisonSet::Records(records) => records,
            ComparisonSet::Keyed(map) => map
                .iter()
                .filter_map(|(key, value)| {
                    let parsed = PairwiseComparison::from_keyed(key, value);
                    if parsed.is_none() {
                        tracing::warn!("Skipping malformed comparison key: {:?}", key);
                    }
                    parsed
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ComparisonSet::Records(records) => records.len(),
            ComparisonSet::Keyed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Preference direction of a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Lower values are better
    Cost,
    /// Higher values are better
    Benefit,
}

/// Normalized importance weights, aligned to the criteria order
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    criteria: Vec<String>,
    weights: Vec<f64>,
}

impl WeightVector {
    /// Build from already-normalized values
    ///
    /// Callers are responsible for the sum-to-one invariant; `derive_weights`
    /// is the usual constructor.
    pub(crate) fn from_parts(criteria: Vec<String>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(criteria.len(), weights.len());
        Self { criteria, weights }
    }

    /// Equal weight `1/C` for each criterion
    pub fn uniform(criteria: &[String]) -> Self {
        let share = if criteria.is_empty() {
            0.0
        } else {
            1.0 / criteria.len() as f64
        };

        Self {
            criteria: criteria.to_vec(),
            weights: vec![share; criteria.len()],
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.weights
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.criteria
            .iter()
            .position(|c| c == name)
            .map(|i| self.weights[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.criteria
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.weights
    }
}

/// N points × C criteria matrix of distances in kilometres, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DecisionMatrix {
    /// Build from rows; returns `None` if the rows are ragged
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != n_cols) {
            return None;
        }

        Some(Self {
            rows: n_rows,
            cols: n_cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, values.len());
        Self { rows, cols, values }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(col).step_by(self.cols.max(1)).copied()
    }
}

/// Result of ranking a set of points
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Weights used, aligned to criteria order
    pub weights: WeightVector,
    /// Preference score per point (lower is better)
    pub scores: Vec<f64>,
    /// 1-based rank per point, in input order
    pub ranks: Vec<usize>,
    /// Criteria that had no reference location and so carried no signal
    pub unlocated_criteria: Vec<String>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyed_first() {
        let cmp = PairwiseComparison::from_keyed("park_school", "park").unwrap();
        assert_eq!(cmp, PairwiseComparison::new("park", "school", Outcome::First));
    }

    #[test]
    fn test_from_keyed_second_and_equal() {
        let second = PairwiseComparison::from_keyed("park_school", "school").unwrap();
        assert_eq!(second.outcome, Outcome::Second);

        let equal = PairwiseComparison::from_keyed("park_school", "equal").unwrap();
        assert_eq!(equal.outcome, Outcome::Equal);
    }

    #[test]
    fn test_from_keyed_splits_on_first_separator() {
        let cmp = PairwiseComparison::from_keyed("a_b_c", "b_c").unwrap();
        assert_eq!(cmp.first, "a");
        assert_eq!(cmp.second, "b_c");
        assert_eq!(cmp.outcome, Outcome::Second);
    }

    #[test]
    fn test_from_keyed_malformed() {
        assert!(PairwiseComparison::from_keyed("parkschool", "park").is_none());
        assert!(PairwiseComparison::from_keyed("_school", "school").is_none());
        assert!(PairwiseComparison::from_keyed("park_", "park").is_none());
    }

    #[test]
    fn test_keyed_set_skips_malformed() {
        let mut map = BTreeMap::new();
        map.insert("a_b".to_string(), "a".to_string());
        map.insert("broken".to_string(), "a".to_string());

        let records = ComparisonSet::Keyed(map).into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, Outcome::First);
    }

    #[test]
    fn test_comparison_set_deserialize_both_forms() {
        let keyed: ComparisonSet = serde_json::from_str(r#"{"a_b": "b"}"#).unwrap();
        assert!(matches!(keyed, ComparisonSet::Keyed(_)));

        let records: ComparisonSet =
            serde_json::from_str(r#"[{"first": "a", "second": "b", "outcome": "equal"}]"#).unwrap();
        assert_eq!(
            records.into_records(),
            vec![PairwiseComparison::new("a", "b", Outcome::Equal)]
        );
    }

    #[test]
    fn test_location_aliases() {
        let loc: Location = serde_json::from_str(r#"{"lat": 1.5, "lng": 2.5}"#).unwrap();
        assert_eq!(loc, Location::new(1.5, 2.5));
    }

    #[test]
    fn test_location_range_validation() {
        assert!(Location::new(45.0, 90.0).validate().is_ok());
        assert!(Location::new(91.0, 0.0).validate().is_err());
        assert!(Location::new(0.0, -181.0).validate().is_err());
    }

    #[test]
    fn test_matrix_accessors() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(1, 1), 4.0);
        assert_eq!(m.row(2), &[5.0, 6.0]);
        assert_eq!(m.column(0).collect::<Vec<_>>(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        assert!(DecisionMatrix::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_none());
    }
}
