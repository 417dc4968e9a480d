//! Error types for PPIN CLI
//!
//! User-facing errors with actionable messages, plus the process exit code
//! each one maps to.

use ppin_network::SchemaError;
use ppin_sources::{Database, RetrievalError};
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for a query that succeeded but returned no interactions
pub const EXIT_NO_INTERACTIONS: i32 = 3;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Interaction data could not be retrieved
    #[error("{0}")]
    Retrieval(#[from] RetrievalError),

    /// Retrieved data could not be turned into a graph
    #[error("Cannot build an interaction network: {0}")]
    Schema(#[from] SchemaError),

    /// The query succeeded but matched nothing
    #[error("No interactions found for '{protein}' in {database}. Check the identifier or try another database.")]
    NoInteractions { protein: String, database: Database },

    /// HTTP client could not be constructed
    #[error("Failed to set up the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Network diagram could not be drawn
    #[error("Failed to draw the network diagram: {0}")]
    Diagram(#[from] crate::render::diagram::DiagramError),

    /// JSON encoding failed
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or command-line flags.")]
    Config(String),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoInteractions { .. } => EXIT_NO_INTERACTIONS,
            _ => 1,
        }
    }

    /// True for outcomes reported as a notice rather than a failure
    pub fn is_notice(&self) -> bool {
        matches!(self, CliError::NoInteractions { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let empty = CliError::NoInteractions {
            protein: "TP53".to_string(),
            database: Database::String,
        };
        assert_eq!(empty.exit_code(), 3);
        assert!(empty.is_notice());

        let failure = CliError::from(RetrievalError::MissingAccessKey);
        assert_eq!(failure.exit_code(), 1);
        assert!(!failure.is_notice());
    }

    #[test]
    fn test_messages_are_actionable() {
        let empty = CliError::NoInteractions {
            protein: "XYZ1".to_string(),
            database: Database::BioGrid,
        };
        assert_eq!(
            empty.to_string(),
            "No interactions found for 'XYZ1' in BioGRID. Check the identifier or try another database."
        );

        let schema = CliError::from(SchemaError::UnrecognizedColumns {
            found: vec!["foo".to_string()],
        });
        assert!(schema.to_string().starts_with("Cannot build an interaction network"));
    }
}
