use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::models::Point;

/// Errors that can occur while persisting submissions
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Blocking task failed: {0}")]
    BlockingError(String),
}

/// Files written for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSubmission {
    pub points_file: PathBuf,
    pub criteria_file: PathBuf,
    pub point_count: usize,
    pub criteria_count: usize,
}

impl SavedSubmission {
    pub fn points_filename(&self) -> String {
        file_name(&self.points_file)
    }

    pub fn criteria_filename(&self) -> String {
        file_name(&self.criteria_file)
    }
}

#[derive(Serialize)]
struct CriterionRow<'a> {
    criteria: &'a str,
}

/// Flat-file store for submitted points and criteria
///
/// Each submission becomes two timestamped CSV files:
/// - `points_YYYYMMDD_HHMMSS.csv` with `latitude,longitude` columns
/// - `criteria_YYYYMMDD_HHMMSS.csv` with a single `criteria` column
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    output_dir: PathBuf,
}

impl SubmissionStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Persist a submission stamped with the current local time
    pub fn save(&self, points: &[Point], criteria: &[String]) -> Result<SavedSubmission, StorageError> {
        self.save_at(points, criteria, Local::now().naive_local())
    }

    /// Persist a submission stamped with `timestamp`
    ///
    /// Files from an earlier submission within the same second are overwritten.
    pub fn save_at(
        &self,
        points: &[Point],
        criteria: &[String],
        timestamp: NaiveDateTime,
    ) -> Result<SavedSubmission, StorageError> {
        fs::create_dir_all(&self.output_dir)?;

        let stamp = timestamp.format("%Y%m%d_%H%M%S").to_string();
        let points_file = self.output_dir.join(format!("points_{}.csv", stamp));
        let criteria_file = self.output_dir.join(format!("criteria_{}.csv", stamp));

        write_points(&points_file, points)?;
        write_criteria(&criteria_file, criteria)?;

        tracing::info!("Saved {} points and {} criteria", points.len(), criteria.len());

        Ok(SavedSubmission {
            points_file,
            criteria_file,
            point_count: points.len(),
            criteria_count: criteria.len(),
        })
    }
}

fn write_points(path: &Path, points: &[Point]) -> Result<(), StorageError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(["latitude", "longitude"])?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_criteria(path: &Path, criteria: &[String]) -> Result<(), StorageError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(["criteria"])?;
    for name in criteria {
        writer.serialize(CriterionRow { criteria: name })?;
    }
    writer.flush()?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
