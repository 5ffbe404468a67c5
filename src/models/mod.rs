// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ComparisonSet, Criterion, DecisionMatrix, Direction, Location, Outcome, PairwiseComparison,
    Point, Ranking, WeightVector,
};
pub use requests::{RankRequest, SaveRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, SaveResponse};
