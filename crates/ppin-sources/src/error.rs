//! Error types for interaction retrieval

use crate::Database;
use thiserror::Error;

/// Result type alias for retrieval operations
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Failure to obtain an interaction table from a source
///
/// A query that succeeds with zero interactions is not an error; it yields an
/// empty table.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Connection, TLS, or body transfer failed
    #[error("Could not reach {database}: {source}")]
    Transport {
        database: Database,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{database} responded with HTTP {status}: {body}")]
    Status {
        database: Database,
        status: u16,
        body: String,
    },

    /// Body was not valid JSON
    #[error("{database} returned a body that is not valid JSON: {source}")]
    Decode {
        database: Database,
        #[source]
        source: serde_json::Error,
    },

    /// Body was JSON but not in the documented layout
    #[error("{database} returned an unexpected response layout: {detail}")]
    UnexpectedShape { database: Database, detail: String },

    /// BioGRID was selected but no access key was supplied
    #[error("BioGRID requires an access key. Set BIOGRID_ACCESS_KEY or pass --biogrid-access-key.")]
    MissingAccessKey,
}

impl RetrievalError {
    pub(crate) fn unexpected_shape(database: Database, detail: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            database,
            detail: detail.into(),
        }
    }
}

/// Unrecognized database name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown database '{0}'. Expected 'biogrid' or 'string'.")]
pub struct ParseDatabaseError(pub String);
