mod catalog;
mod persistence;

pub use catalog::RecipeCatalog;
pub use persistence::{load_recipes, read_recipes, read_recipes_or_empty, save_recipes};
