use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError};
use crate::models::domain::{ComparisonSet, Location, Point};

/// Request to rank candidate points
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default)]
    pub criteria: Vec<String>,
    #[validate(custom(function = "validate_locations"))]
    #[serde(default, alias = "criterion_locations", rename = "criterionLocations")]
    pub criterion_locations: HashMap<String, Option<Location>>,
    #[serde(default)]
    pub comparisons: ComparisonSet,
}

/// Request to persist submitted points and criteria
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveRequest {
    #[validate(nested)]
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default)]
    pub criteria: Vec<String>,
}

fn validate_locations(
    locations: &HashMap<String, Option<Location>>,
) -> Result<(), ValidationError> {
    let out_of_range = locations
        .values()
        .flatten()
        .any(|location| location.validate().is_err());

    if out_of_range {
        return Err(ValidationError::new("location_out_of_range"));
    }
    Ok(())
}
