//! Type definitions for TheMealDB API.
//!
//! This module contains the data structures returned by the API: meals,
//! categories, areas, and ingredients. All of them are read-only value
//! objects owned by the caller once a query resolves.
//!
//! ## Key Types
//!
//! - [`Meal`] - Core recipe data with instructions, metadata, and assembled
//!   ingredient/measure pairs (with a custom deserializer for the API's
//!   positional `strIngredient1..20` fields)
//! - [`Category`] - Browsable meal category with thumbnail and description
//! - [`Area`] - Cuisine area/country, name only
//! - [`Ingredient`] - Ingredient from the listing endpoint
//!
//! ## API Compatibility
//!
//! The API spreads a meal's ingredient list across forty positional fields
//! (`strIngredient1`..`strIngredient20` paired with `strMeasure1`..
//! `strMeasure20`), padding unused slots with null or empty strings. The
//! filter endpoints return stub meals carrying only id, name, and
//! thumbnail. [`Meal`]'s deserializer absorbs both shapes: positional
//! slots are collapsed into [`IngredientMeasure`] pairs and every field
//! except id and name is optional.

use serde::{Deserialize, Serialize};

/// Number of positional ingredient/measure slots the API allocates per meal.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// A meal from the directory.
///
/// Lookup and search endpoints return the full shape; filter endpoints
/// return stubs with only `id`, `name`, and `thumbnail` populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    /// Unique meal identifier (the API returns it as a string)
    pub id: String,
    /// Meal name/title
    pub name: String,
    /// Thumbnail image URL
    pub thumbnail: Option<String>,
    /// Free-text cooking instructions
    pub instructions: Option<String>,
    /// Cuisine area/country (e.g. "Italian")
    pub area: Option<String>,
    /// Category name (e.g. "Seafood")
    pub category: Option<String>,
    /// Comma-separated tag list as returned by the API; see [`Meal::tag_list`]
    pub tags: Option<String>,
    /// Original recipe source URL
    pub source_url: Option<String>,
    /// Recipe video URL
    pub youtube_url: Option<String>,
    /// Ingredient/measure pairs assembled from the positional slot fields
    pub ingredients: Vec<IngredientMeasure>,
}

impl Meal {
    /// Splits the comma-separated tag field into individual tags, dropping
    /// blanks.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// One assembled ingredient/measure pair from a meal's positional slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientMeasure {
    /// Ingredient name, never blank
    pub ingredient: String,
    /// Quantity text (e.g. "3/4 cup"); `None` when the slot had no measure
    pub measure: Option<String>,
}

/// Custom deserializer for Meal to handle the API's positional fields.
///
/// Slots are paired by suffix; a pair is kept only when the ingredient name
/// is non-null and non-blank, matching how the API marks unused slots.
impl<'de> serde::Deserialize<'de> for Meal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct MealVisitor;

        impl<'de> Visitor<'de> for MealVisitor {
            type Value = Meal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a meal object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id = None;
                let mut name = None;
                let mut thumbnail = None;
                let mut instructions = None;
                let mut area = None;
                let mut category = None;
                let mut tags = None;
                let mut source_url = None;
                let mut youtube_url = None;
                let mut ingredient_slots: Vec<Option<String>> =
                    vec![None; MAX_INGREDIENT_SLOTS];
                let mut measure_slots: Vec<Option<String>> =
                    vec![None; MAX_INGREDIENT_SLOTS];

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "idMeal" => id = Some(map.next_value()?),
                        "strMeal" => name = Some(map.next_value()?),
                        "strMealThumb" => thumbnail = map.next_value()?,
                        "strInstructions" => instructions = map.next_value()?,
                        "strArea" => area = map.next_value()?,
                        "strCategory" => category = map.next_value()?,
                        "strTags" => tags = map.next_value()?,
                        "strSource" => source_url = map.next_value()?,
                        "strYoutube" => youtube_url = map.next_value()?,
                        other => {
                            if let Some(slot) = slot_index(other, "strIngredient") {
                                ingredient_slots[slot] = map.next_value()?;
                            } else if let Some(slot) = slot_index(other, "strMeasure") {
                                measure_slots[slot] = map.next_value()?;
                            } else {
                                let _ = map.next_value::<serde_json::Value>()?;
                            }
                        }
                    }
                }

                let id = id.ok_or_else(|| de::Error::missing_field("idMeal"))?;
                let name = name.ok_or_else(|| de::Error::missing_field("strMeal"))?;

                let ingredients = ingredient_slots
                    .into_iter()
                    .zip(measure_slots)
                    .filter_map(|(ingredient, measure)| {
                        let ingredient = ingredient?;
                        let ingredient = ingredient.trim();
                        if ingredient.is_empty() {
                            return None;
                        }
                        Some(IngredientMeasure {
                            ingredient: ingredient.to_string(),
                            measure: measure
                                .map(|m| m.trim().to_string())
                                .filter(|m| !m.is_empty()),
                        })
                    })
                    .collect();

                Ok(Meal {
                    id,
                    name,
                    thumbnail,
                    instructions,
                    area,
                    category,
                    tags,
                    source_url,
                    youtube_url,
                    ingredients,
                })
            }
        }

        /// Maps `strIngredient7` / `strMeasure7` to slot 6. Suffixes outside
        /// 1..=20 are treated as unknown keys.
        fn slot_index(key: &str, prefix: &str) -> Option<usize> {
            let suffix = key.strip_prefix(prefix)?;
            let n: usize = suffix.parse().ok()?;
            (1..=MAX_INGREDIENT_SLOTS)
                .contains(&n)
                .then(|| n - 1)
        }

        deserializer.deserialize_map(MealVisitor)
    }
}

/// A browsable meal category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (e.g. "Seafood")
    #[serde(rename = "strCategory")]
    pub name: String,
    /// Category thumbnail image URL
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    /// Free-text description, passed through untruncated
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// A cuisine area/country. The listing endpoint returns names only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Area name (e.g. "Canadian")
    #[serde(rename = "strArea")]
    pub name: String,
}

/// An ingredient from the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (e.g. "Chicken")
    #[serde(rename = "strIngredient")]
    pub name: String,
    /// Free-text description
    #[serde(rename = "strDescription", default)]
    pub description: Option<String>,
}
