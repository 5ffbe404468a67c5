use serde::{Deserialize, Serialize};
use crate::models::domain::Ranking;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub weights: Vec<f64>,
    pub ranking: Vec<usize>,
    pub scores: Vec<f64>,
    #[serde(rename = "unlocatedCriteria")]
    pub unlocated_criteria: Vec<String>,
}

impl From<Ranking> for RankResponse {
    fn from(ranking: Ranking) -> Self {
        Self {
            weights: ranking.weights.into_values(),
            ranking: ranking.ranks,
            scores: ranking.scores,
            unlocated_criteria: ranking.unlocated_criteria,
        }
    }
}

/// Response for the save endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub filename: String,
    pub criteria_file: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
