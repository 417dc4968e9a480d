//! STRING network client.
//!
//! STRING aggregates known and predicted protein associations with a combined
//! confidence score.
//!
//! API docs: https://string-db.org/help/api/
//! Endpoint: https://string-db.org/api/json/network
//!
//! The JSON response is an array of records with `preferredName_A`,
//! `preferredName_B`, `stringId_A`, `score`, and per-channel scores.

use async_trait::async_trait;
use ppin_common::InteractionTable;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::{http, normalize, Database, InteractionSource};

/// STRING REST client
pub struct StringSource {
    client: Client,
    url: String,
    species: u32,
}

impl StringSource {
    pub fn new(client: Client, url: String, species: u32) -> Self {
        Self {
            client,
            url,
            species,
        }
    }
}

#[async_trait]
impl InteractionSource for StringSource {
    fn database(&self) -> Database {
        Database::String
    }

    #[instrument(skip(self))]
    async fn fetch(&self, identifier: &str) -> Result<InteractionTable> {
        debug!(species = self.species, "Fetching STRING network");

        let params = [
            ("identifiers", identifier.to_string()),
            ("species", self.species.to_string()),
        ];
        let body = http::get_json(&self.client, Database::String, &self.url, &params).await?;
        let table = normalize::table_from_record_array(Database::String, body)?;

        debug!(rows = table.len(), columns = table.columns().len(), "Parsed STRING response");
        Ok(table)
    }
}
