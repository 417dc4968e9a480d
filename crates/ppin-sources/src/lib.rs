//! PPIN Sources
//!
//! Adapters that retrieve protein-protein interaction edge lists from public
//! databases and reshape them into an [`InteractionTable`].
//!
//! - [`biogrid::BiogridSource`]: BioGRID interaction search (requires an access key)
//! - [`string::StringSource`]: STRING network endpoint
//!
//! Each adapter issues exactly one GET per call. There is no retry and no
//! caching; a failed call is reported as a [`RetrievalError`], and a
//! successful call with no interactions yields an empty table.

pub mod biogrid;
pub mod error;
mod http;
pub mod normalize;
pub mod string;

pub use error::{ParseDatabaseError, Result, RetrievalError};

use async_trait::async_trait;
use ppin_common::InteractionTable;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Default BioGRID interaction search endpoint
pub const DEFAULT_BIOGRID_URL: &str = "https://webservice.thebiogrid.org/interactions";

/// Default STRING network endpoint
pub const DEFAULT_STRING_URL: &str = "https://string-db.org/api/json/network";

/// NCBI taxonomy id for Homo sapiens
pub const HUMAN_TAXONOMY_ID: u32 = 9606;

/// Interaction databases the tool can query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    #[serde(rename = "biogrid")]
    BioGrid,
    String,
}

impl Database {
    /// All databases in menu order
    pub const ALL: [Database; 2] = [Database::BioGrid, Database::String];

    /// Lowercase identifier used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Database::BioGrid => "biogrid",
            Database::String => "string",
        }
    }
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Database::BioGrid => f.write_str("BioGRID"),
            Database::String => f.write_str("STRING"),
        }
    }
}

impl std::str::FromStr for Database {
    type Err = ParseDatabaseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "biogrid" => Ok(Database::BioGrid),
            "string" | "string-db" => Ok(Database::String),
            _ => Err(ParseDatabaseError(s.to_string())),
        }
    }
}

/// Common interface for interaction sources
#[async_trait]
pub trait InteractionSource: Send + Sync {
    /// Database this adapter queries
    fn database(&self) -> Database;

    /// Retrieve all interactions involving `identifier`
    async fn fetch(&self, identifier: &str) -> Result<InteractionTable>;
}

/// Endpoint and credential settings shared by the adapters
#[derive(Debug)]
pub struct SourceSettings {
    pub biogrid_url: String,
    pub string_url: String,
    pub species: u32,
    pub biogrid_access_key: Option<SecretString>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            biogrid_url: DEFAULT_BIOGRID_URL.to_string(),
            string_url: DEFAULT_STRING_URL.to_string(),
            species: HUMAN_TAXONOMY_ID,
            biogrid_access_key: None,
        }
    }
}

impl Clone for SourceSettings {
    fn clone(&self) -> Self {
        Self {
            biogrid_url: self.biogrid_url.clone(),
            string_url: self.string_url.clone(),
            species: self.species,
            biogrid_access_key: self
                .biogrid_access_key
                .as_ref()
                .map(|key| SecretString::from(key.expose_secret().to_owned())),
        }
    }
}

/// Construct the adapter for `database`
pub fn source_for(
    database: Database,
    settings: SourceSettings,
    client: reqwest::Client,
) -> Result<Box<dyn InteractionSource>> {
    match database {
        Database::BioGrid => {
            let access_key = settings
                .biogrid_access_key
                .ok_or(RetrievalError::MissingAccessKey)?;
            Ok(Box::new(biogrid::BiogridSource::new(
                client,
                settings.biogrid_url,
                access_key,
                settings.species,
            )))
        },
        Database::String => Ok(Box::new(string::StringSource::new(
            client,
            settings.string_url,
            settings.species,
        ))),
    }
}
