use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{BeanError, Result};
use crate::models::Recipe;

/// Read recipes from a JSON file, failing on any IO, parse or validation error.
///
/// A blank file is an empty catalog.
pub fn read_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    for recipe in &recipes {
        recipe.validate()?;
    }
    Ok(recipes)
}

/// Read recipes for a load-modify-save cycle.
///
/// A missing file is an empty catalog. Any other failure is returned so the
/// caller never overwrites a file it could not read.
pub fn read_recipes_or_empty<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    match read_recipes(path) {
        Err(BeanError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no recipe catalog yet");
            Ok(Vec::new())
        }
        result => result,
    }
}

/// Load recipes from a JSON file.
///
/// A missing, unreadable, corrupt or invalid file loads as an empty catalog.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Vec<Recipe> {
    let path = path.as_ref();
    match read_recipes(path) {
        Ok(recipes) => {
            info!(path = %path.display(), count = recipes.len(), "loaded recipe catalog");
            recipes
        }
        Err(BeanError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no recipe catalog yet");
            Vec::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unusable recipe catalog");
            Vec::new()
        }
    }
}

/// Save recipes to a JSON file, replacing its contents.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(recipes)?;
    fs::write(path, json)?;
    info!(path = %path.display(), count = recipes.len(), "saved recipe catalog");
    Ok(())
}
