//! Custom error types for travel-db-reporter.

use thiserror::Error;

/// Errors that can occur while querying the travel planner database.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("MongoDB connection error: {0}")]
    Connection(String),

    #[error("Query failed on collection '{0}': {1}")]
    Query(String, String),

    #[error("Invalid document in collection '{0}': {1}")]
    Decode(String, String),

    #[error("Query timed out on collection '{0}' after {1}s")]
    Timeout(String, u64),
}
