pub mod parse;
pub mod prompts;
pub mod render;

pub use prompts::{
    build_customization, find_recipe, prompt_custom_units, prompt_milk, prompt_new_recipe,
    prompt_size, prompt_yes_no, select_recipe,
};
pub use render::{
    display_breakdown, display_catalog, display_recipe_summary, format_breakdown,
    format_recipe_summary,
};
