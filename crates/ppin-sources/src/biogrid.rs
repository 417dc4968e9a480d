//! BioGRID interaction search client.
//!
//! BioGRID curates physical and genetic interactions from the literature.
//!
//! API docs: https://wiki.thebiogrid.org/doku.php/biogridrest
//! Endpoint: https://webservice.thebiogrid.org/interactions
//!
//! The JSON response is an object keyed by BioGRID interaction id; each value
//! is a flat record carrying `OFFICIAL_SYMBOL_A`/`OFFICIAL_SYMBOL_B` along with
//! experimental system, throughput, pubmed id, and so on.

use async_trait::async_trait;
use ppin_common::InteractionTable;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::{http, normalize, Database, InteractionSource};

/// BioGRID REST client
pub struct BiogridSource {
    client: Client,
    url: String,
    access_key: SecretString,
    organism: u32,
}

impl BiogridSource {
    pub fn new(client: Client, url: String, access_key: SecretString, organism: u32) -> Self {
        Self {
            client,
            url,
            access_key,
            organism,
        }
    }

    /// Query parameters for a gene-list search
    fn query_params(&self, identifier: &str) -> Vec<(&'static str, String)> {
        vec![
            ("accessKey", self.access_key.expose_secret().to_string()),
            ("format", "json".to_string()),
            ("searchNames", "true".to_string()),
            ("geneList", identifier.to_string()),
            ("organism", self.organism.to_string()),
            ("searchbiogridids", "true".to_string()),
            ("includeInteractors", "true".to_string()),
        ]
    }
}

#[async_trait]
impl InteractionSource for BiogridSource {
    fn database(&self) -> Database {
        Database::BioGrid
    }

    #[instrument(skip(self))]
    async fn fetch(&self, identifier: &str) -> Result<InteractionTable> {
        debug!(organism = self.organism, "Fetching BioGRID interactions");

        let params = self.query_params(identifier);
        let body = http::get_json(&self.client, Database::BioGrid, &self.url, &params).await?;
        let table = normalize::table_from_keyed_records(Database::BioGrid, body)?;

        debug!(rows = table.len(), columns = table.columns().len(), "Parsed BioGRID response");
        Ok(table)
    }
}
