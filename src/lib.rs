//! # TheMealDB Client Library
//!
//! This library provides a stateless HTTP client for TheMealDB, a public
//! recipe database. It exposes nine read-only query operations: lookup by
//! id, search by name or first letter, and browsing by category, area, or
//! ingredient.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealdb_client::MealDbClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Points at the public TheMealDB API by default
//! let client = MealDbClient::default();
//!
//! // Search for meals by name
//! let meals = client.find_by_name("Arrabiata").await?;
//! println!("Found {} meals", meals.len());
//!
//! // Look up full detail for one meal
//! if let Some(meal) = client.get_recipe_by_id("52772").await? {
//!     println!("{} has {} ingredients", meal.name, meal.ingredients.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{MealDbClient, DEFAULT_BASE_URL};
