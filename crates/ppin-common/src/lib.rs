//! PPIN Common Library
//!
//! Shared types and utilities for the PPIN workspace.
//!
//! # Overview
//!
//! - **Interaction Table**: the uniform tabular shape every source adapter
//!   produces and the graph builder consumes
//! - **Logging**: centralized `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use ppin_common::table::InteractionTable;
//! use serde_json::json;
//!
//! let record = json!({"OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "MDM2"});
//! let table = InteractionTable::from_records(vec![(
//!     "103".to_string(),
//!     record.as_object().cloned().unwrap_or_default(),
//! )]);
//!
//! assert_eq!(table.len(), 1);
//! assert!(table.has_column("OFFICIAL_SYMBOL_B"));
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod logging;
pub mod table;

// Re-export commonly used types
pub use table::{InteractionTable, TableRow};
