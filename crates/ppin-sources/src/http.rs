//! Single-shot JSON GET shared by the adapters

use crate::error::{Result, RetrievalError};
use crate::Database;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Longest error body kept in a `Status` error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Issue one GET and decode the body as JSON
///
/// Transport errors are stripped of their URL, since query strings may carry
/// credentials.
pub(crate) async fn get_json(
    client: &Client,
    database: Database,
    url: &str,
    params: &[(&str, String)],
) -> Result<Value> {
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| RetrievalError::Transport {
            database,
            source: e.without_url(),
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| RetrievalError::Transport {
        database,
        source: e.without_url(),
    })?;

    debug!(%database, status = status.as_u16(), bytes = body.len(), "Received response");

    if !status.is_success() {
        return Err(RetrievalError::Status {
            database,
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|source| RetrievalError::Decode { database, source })
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", head)
    }
}
