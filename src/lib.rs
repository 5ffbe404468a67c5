//! POI Rank - point-of-interest ranking service
//!
//! This library ranks candidate geographic points against location-based
//! criteria. Criterion weights come from pairwise comparisons, each point is
//! measured by its haversine distance to every criterion's reference location,
//! and the SPOTIS reference-point method turns the resulting decision matrix
//! into a ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, RankError, derive_weights, build_matrix, haversine_distance};
pub use crate::models::{Location, PairwiseComparison, Outcome, Point, Ranking, RankRequest, RankResponse, WeightVector};
