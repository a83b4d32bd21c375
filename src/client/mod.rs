//! # TheMealDB HTTP Client
//!
//! This module provides a direct HTTP client for TheMealDB API, covering
//! meal lookup, name and first-letter search, and category, area, and
//! ingredient browsing.
//!
//! ## Modules
//!
//! - [`client`] - Main HTTP client implementation with all query methods
//! - `endpoint` - Declarative table of API endpoints and their envelopes (crate-internal)
//! - [`types`] - Type definitions for API responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealdb_client::client::MealDbClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = MealDbClient::default();
//!
//! // Browse the recipe directory
//! let categories = client.list_categories().await?;
//! println!("Found {} categories", categories.len());
//!
//! let seafood = client.find_by_category("Seafood").await?;
//! println!("{} seafood meals", seafood.len());
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub(crate) mod endpoint;
pub mod types;

pub use client::{MealDbClient, DEFAULT_BASE_URL};
pub use types::*;
