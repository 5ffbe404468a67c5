// Core algorithm exports
pub mod distance;
pub mod error;
pub mod ranker;
pub mod spotis;
pub mod weights;

pub use distance::{build_matrix, distance_between, haversine_distance, EARTH_RADIUS_KM};
pub use error::RankError;
pub use ranker::Ranker;
pub use spotis::{column_bounds, normalized_deviation, preference_scores, rank_ascending, Bounds};
pub use weights::derive_weights;
