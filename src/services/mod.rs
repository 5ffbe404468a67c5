// Service exports
pub mod storage;

pub use storage::{SavedSubmission, StorageError, SubmissionStore};
