use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{BeanError, Result};
use crate::models::Recipe;

/// Minimum Jaro-Winkler similarity for a blend name suggestion.
const SUGGEST_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions returned.
const SUGGEST_LIMIT: usize = 5;

/// The loaded recipe catalog, in file order.
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    /// Position in `recipes` keyed by lowercase blend name.
    index: HashMap<String, usize>,
}

impl RecipeCatalog {
    /// Build a catalog from recipes in file order.
    ///
    /// Duplicate blend names keep the position of the first occurrence and
    /// the content of the last.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut catalog = Self {
            recipes: Vec::with_capacity(recipes.len()),
            index: HashMap::new(),
        };
        for recipe in recipes {
            let key = recipe.key();
            match catalog.index.get(&key).copied() {
                Some(pos) => catalog.recipes[pos] = recipe,
                None => {
                    catalog.index.insert(key, catalog.recipes.len());
                    catalog.recipes.push(recipe);
                }
            }
        }
        catalog
    }

    /// Get a recipe by blend name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&pos| &self.recipes[pos])
    }

    /// Get a recipe by blend name, failing if it is not in the catalog.
    pub fn require(&self, name: &str) -> Result<&Recipe> {
        self.get(name)
            .ok_or_else(|| BeanError::RecipeNotFound(name.to_string()))
    }

    /// Get a recipe by position in the catalog.
    pub fn get_index(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Blend names similar to `name`, best match first.
    pub fn suggest(&self, name: &str) -> Vec<&Recipe> {
        let needle = name.trim().to_lowercase();
        let mut candidates: Vec<(&Recipe, f64)> = self
            .recipes
            .iter()
            .map(|r| (r, jaro_winkler(&r.key(), &needle)))
            .filter(|(_, score)| *score > SUGGEST_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
            .into_iter()
            .take(SUGGEST_LIMIT)
            .map(|(r, _)| r)
            .collect()
    }

    /// Add a new recipe at the end of the catalog.
    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate()?;
        if self.index.contains_key(&recipe.key()) {
            return Err(BeanError::DuplicateBlend(recipe.blend_name));
        }
        self.index.insert(recipe.key(), self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    /// Whether a blend with this name exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Blend names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.blend_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoffeeType, MilkType};
    use rust_decimal_macros::dec;

    fn recipe(name: &str, roast: &str) -> Recipe {
        Recipe::new(name, CoffeeType::Beans, roast, dec!(0.80), MilkType::Whole)
    }

    fn sample_catalog() -> RecipeCatalog {
        RecipeCatalog::new(vec![
            recipe("House Blend", "Italian"),
            recipe("Morning Kick", "Kenyan"),
            recipe("Velvet", "Brazilian"),
        ])
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = sample_catalog();
        assert!(catalog.get("house blend").is_some());
        assert!(catalog.get("HOUSE BLEND").is_some());
        assert!(catalog.get("  Velvet ").is_some());
        assert!(catalog.get("Espresso").is_none());
    }

    #[test]
    fn test_keeps_file_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.names(), vec!["House Blend", "Morning Kick", "Velvet"]);
        assert_eq!(catalog.get_index(1).unwrap().roast_name, "Kenyan");
    }

    #[test]
    fn test_duplicates_keep_first_position_last_content() {
        let catalog = RecipeCatalog::new(vec![
            recipe("House", "Italian"),
            recipe("Velvet", "Brazilian"),
            recipe("house", "Sumatran"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_index(0).unwrap().roast_name, "Sumatran");
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut catalog = sample_catalog();
        let err = catalog.add(recipe("velvet", "Colombian")).unwrap_err();
        assert!(matches!(err, BeanError::DuplicateBlend(_)));

        catalog.add(recipe("Night Owl", "Colombian")).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.contains("night owl"));
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut catalog = sample_catalog();
        let mut bad = recipe("Cheap", "Robusta");
        bad.roast_price = dec!(-1);
        assert!(matches!(
            catalog.add(bad),
            Err(BeanError::InvalidRecipe { .. })
        ));
    }

    #[test]
    fn test_suggest() {
        let catalog = sample_catalog();
        let suggestions = catalog.suggest("morning kik");
        assert_eq!(suggestions[0].blend_name, "Morning Kick");
        assert!(catalog.suggest("zzzzzz").is_empty());
    }

    #[test]
    fn test_require() {
        let catalog = sample_catalog();
        assert!(catalog.require("Velvet").is_ok());
        assert!(matches!(
            catalog.require("Mocha"),
            Err(BeanError::RecipeNotFound(_))
        ));
    }
}
