use std::fmt;

use rust_decimal::Decimal;

use crate::models::{PriceBreakdown, Recipe};
use crate::pricing::constants::{format_money, DECAF_DISCOUNT, NON_DAIRY_SURCHARGE};
use crate::state::RecipeCatalog;

/// Minimum width of the ingredient column.
const NAME_WIDTH: usize = 15;

fn units_text(units: Decimal) -> String {
    units.normalize().to_string()
}

/// Drink summary with an ingredient table, ready for the terminal.
pub struct BreakdownTable<'a>(pub &'a PriceBreakdown);

impl fmt::Display for BreakdownTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breakdown = self.0;

        let name_width = breakdown
            .lines()
            .map(|line| line.name.chars().count())
            .max()
            .unwrap_or(NAME_WIDTH)
            .max(NAME_WIDTH);

        let size = match breakdown.size_multiplier {
            Some(m) => format!("{} ({}x)", breakdown.size_label, units_text(m)),
            None => breakdown.size_label.to_string(),
        };
        let milk_note = if breakdown.non_dairy_surcharge.applied {
            format!(" (+{})", format_money(NON_DAIRY_SURCHARGE))
        } else {
            String::new()
        };
        let decaf = if breakdown.decaf_discount.applied {
            format!("Yes (-{})", format_money(DECAF_DISCOUNT))
        } else {
            "No".to_string()
        };

        writeln!(f, "--- Drink Summary ---")?;
        writeln!(f, "Blend: {}", breakdown.blend_name)?;
        writeln!(f, "Size: {}", size)?;
        writeln!(f, "Milk: {}{}", breakdown.selected_milk, milk_note)?;
        writeln!(f, "Decaf: {}", decaf)?;
        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        writeln!(
            f,
            "| {:<width$} | {:>5} | {:>10} | {:>11} |",
            "Ingredient",
            "Units",
            "Unit Price",
            "Total Price",
            width = name_width
        )?;
        writeln!(
            f,
            "|{}|-------|------------|-------------|",
            "-".repeat(name_width + 2)
        )?;
        for line in breakdown.lines() {
            writeln!(
                f,
                "| {:<width$} | {:>5} | {:>10} | {:>11} |",
                line.name,
                units_text(line.units),
                format_money(line.unit_price),
                format_money(line.total),
                width = name_width
            )?;
        }

        if breakdown.has_extras() {
            writeln!(f)?;
            writeln!(f, "Extras:")?;
            if breakdown.non_dairy_surcharge.applied {
                writeln!(
                    f,
                    "| {:<19} | +{} |",
                    "Non-dairy milk",
                    format_money(breakdown.non_dairy_surcharge.amount)
                )?;
            }
            if breakdown.decaf_discount.applied {
                writeln!(
                    f,
                    "| {:<19} | -{} |",
                    "Decaf",
                    format_money(breakdown.decaf_discount.amount)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "-------------------------------")?;
        writeln!(f, "Total Price: {}", format_money(breakdown.total))
    }
}

/// Format a price breakdown as a drink summary with an ingredient table.
pub fn format_breakdown(breakdown: &PriceBreakdown) -> String {
    BreakdownTable(breakdown).to_string()
}

fn optional_weight(weight: Option<f64>, unit: &str) -> String {
    weight
        .map(|w| format!("{}{}/unit", w, unit))
        .unwrap_or_else(|| "weight not set".to_string())
}

/// Multi-line summary of a recipe as entered.
pub struct RecipeSummary<'a>(pub &'a Recipe);

impl fmt::Display for RecipeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;

        writeln!(f, "--- Recipe Summary ---")?;
        writeln!(f, "Blend: {}", recipe.blend_name)?;
        writeln!(f, "Coffee Type: {}", recipe.coffee_type)?;
        writeln!(
            f,
            "Roast: {} ({} per unit, {})",
            recipe.roast_name,
            format_money(recipe.roast_price),
            optional_weight(recipe.roast_unit_weight, "g")
        )?;
        writeln!(
            f,
            "Milk: {} ({} per unit, {})",
            recipe.milk_type,
            format_money(recipe.milk_unit_price()),
            optional_weight(recipe.milk_unit_weight, "ml")
        )?;
        writeln!(f, "Syrups:")?;
        if recipe.syrups.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for syrup in &recipe.syrups {
            let pumps = syrup
                .pumps
                .map(|p| format!("{} pumps", p))
                .unwrap_or_else(|| "pumps not set".to_string());
            let unit_weight = syrup
                .unit_weight
                .map(|w| format!("{} pump(s)/unit", w))
                .unwrap_or_else(|| "weight not set".to_string());
            writeln!(
                f,
                "  - {}, {}, {} per unit, {}",
                syrup.name,
                pumps,
                format_money(syrup.unit_price()),
                unit_weight
            )?;
        }
        Ok(())
    }
}

/// Format a recipe as a multi-line summary.
pub fn format_recipe_summary(recipe: &Recipe) -> String {
    RecipeSummary(recipe).to_string()
}

/// Display a price breakdown.
pub fn display_breakdown(breakdown: &PriceBreakdown) {
    println!();
    print!("{}", format_breakdown(breakdown));
}

/// Display a recipe summary.
pub fn display_recipe_summary(recipe: &Recipe) {
    println!();
    println!("{}", format_recipe_summary(recipe));
}

/// Display the catalog as a numbered list.
pub fn display_catalog(catalog: &RecipeCatalog) {
    if catalog.is_empty() {
        println!("No recipes in catalog.");
        return;
    }

    println!();
    println!("=== Recipes ({} blends) ===", catalog.len());
    println!();

    let max_name_len = catalog
        .recipes()
        .iter()
        .map(|r| r.blend_name.chars().count())
        .max()
        .unwrap_or(10);

    for (i, recipe) in catalog.recipes().iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {}, {} roast, {} milk, {} syrup(s)",
            i + 1,
            recipe.blend_name,
            recipe.coffee_type,
            recipe.roast_name,
            recipe.milk_type,
            recipe.syrups.len(),
            width = max_name_len
        );
    }
    println!();
}
