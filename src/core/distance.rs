use std::collections::HashMap;
use crate::models::{DecisionMatrix, Location, Point};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 near antipodes
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two locations in kilometers
#[inline]
pub fn distance_between(from: &Location, to: &Location) -> f64 {
    haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Build the decision matrix of point-to-criterion distances
///
/// One row per point, one column per criterion, both in input order.
/// A criterion without a registered location yields a 0.0 column.
pub fn build_matrix(
    points: &[Point],
    criteria: &[String],
    locations: &HashMap<String, Option<Location>>,
) -> DecisionMatrix {
    let references: Vec<Option<&Location>> = criteria
        .iter()
        .map(|name| locations.get(name).and_then(Option::as_ref))
        .collect();

    let values = points
        .iter()
        .flat_map(|point| {
            references.iter().map(move |reference| match reference {
                Some(location) => distance_between(point, location),
                None => 0.0,
            })
        })
        .collect();

    DecisionMatrix::from_raw(points.len(), criteria.len(), values)
}
