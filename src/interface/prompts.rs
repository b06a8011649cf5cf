use dialoguer::{Confirm, Input, Select};

use crate::error::{BeanError, Result};
use crate::interface::parse::{
    is_done, parse_money, parse_name, parse_roast, parse_syrup, parse_units, parse_weight,
};
use crate::models::{CoffeeType, CustomUnits, Customization, MilkType, Recipe, Size, UnitAmount};
use crate::state::RecipeCatalog;

/// Prompt for one value, re-asking until `parse` accepts it.
fn prompt_parsed<T>(prompt: &str, allow_empty: bool, parse: fn(&str) -> Result<T>) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .validate_with(|input: &String| parse(input).map(|_| ()))
        .interact_text()?;

    parse(&input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick a blend from a numbered menu.
pub fn select_recipe(catalog: &RecipeCatalog) -> Result<&Recipe> {
    if catalog.is_empty() {
        return Err(BeanError::EmptyCatalog);
    }

    let selection = Select::new()
        .with_prompt("Select a blend")
        .items(&catalog.names())
        .default(0)
        .interact()?;

    catalog
        .get_index(selection)
        .ok_or_else(|| BeanError::InvalidInput("Blend selection out of range".to_string()))
}

/// Find a blend by name, offering close matches when there is no exact one.
pub fn find_recipe<'a>(catalog: &'a RecipeCatalog, name: &str) -> Result<&'a Recipe> {
    if let Some(recipe) = catalog.get(name) {
        return Ok(recipe);
    }

    let candidates = catalog.suggest(name);
    match candidates.as_slice() {
        [] => Err(BeanError::RecipeNotFound(name.to_string())),
        [only] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", only.blend_name), true)?;
            if confirm {
                Ok(*only)
            } else {
                Err(BeanError::RecipeNotFound(name.to_string()))
            }
        }
        many => {
            let mut options: Vec<&str> = many.iter().map(|r| r.blend_name.as_str()).collect();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            many.get(selection)
                .copied()
                .ok_or_else(|| BeanError::RecipeNotFound(name.to_string()))
        }
    }
}

/// Prompt for custom units of every ingredient in `recipe`. Blank means one unit.
pub fn prompt_custom_units(recipe: &Recipe) -> Result<CustomUnits> {
    println!("Custom units for each ingredient:");

    let roast = prompt_units(&format!("  {} units (default 1)", recipe.roast_name))?;
    let milk = prompt_units(&format!("  {} milk units (default 1)", recipe.milk_type))?;

    let mut units = CustomUnits::new().with_roast(roast).with_milk(milk);
    for syrup in &recipe.syrups {
        let amount = prompt_units(&format!("  {} syrup units (default 1)", syrup.name))?;
        units = units.with_syrup(amount);
    }
    Ok(units)
}

fn prompt_units(prompt: &str) -> Result<UnitAmount> {
    prompt_parsed(prompt, true, parse_units)
}

/// Prompt for the drink size.
pub fn prompt_size(recipe: &Recipe) -> Result<Size> {
    let options = ["Small", "Medium", "Large", "Custom"];
    let selection = Select::new()
        .with_prompt("Select size")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Size::Small,
        1 => Size::Medium,
        2 => Size::Large,
        _ => Size::Custom(prompt_custom_units(recipe)?),
    })
}

/// Ask whether to change the milk. `None` keeps the recipe's milk.
pub fn prompt_milk(recipe: &Recipe) -> Result<Option<MilkType>> {
    let change = prompt_yes_no(
        &format!("Change milk? (current: {})", recipe.milk_type),
        false,
    )?;
    if !change {
        return Ok(None);
    }

    let options: Vec<String> = MilkType::ALL
        .iter()
        .map(|&milk| {
            if milk == recipe.milk_type {
                format!("{} (original)", milk)
            } else {
                milk.to_string()
            }
        })
        .collect();
    let original = MilkType::ALL
        .iter()
        .position(|&m| m == recipe.milk_type)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select milk")
        .items(&options)
        .default(original)
        .interact()?;

    Ok(MilkType::ALL.get(selection).copied())
}

/// Collect a full customization for one order of `recipe`.
pub fn build_customization(recipe: &Recipe) -> Result<Customization> {
    let size = prompt_size(recipe)?;
    let milk = prompt_milk(recipe)?;
    let decaf = prompt_yes_no("Make it decaf?", false)?;

    let mut order = Customization::new(size).decaf(decaf);
    order.milk = milk;
    Ok(order)
}

fn prompt_coffee_type() -> Result<CoffeeType> {
    let options: Vec<String> = CoffeeType::ALL.iter().map(|c| c.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Select Coffee Type")
        .items(&options)
        .default(0)
        .interact()?;

    CoffeeType::ALL
        .get(selection)
        .copied()
        .ok_or_else(|| BeanError::InvalidInput("Coffee type selection out of range".to_string()))
}

fn prompt_milk_type() -> Result<MilkType> {
    let options: Vec<String> = MilkType::ALL.iter().map(|m| m.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Select Milk Type")
        .items(&options)
        .default(0)
        .interact()?;

    MilkType::ALL
        .get(selection)
        .copied()
        .ok_or_else(|| BeanError::InvalidInput("Milk selection out of range".to_string()))
}

fn prompt_blend_name(catalog: &RecipeCatalog) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter Blend Name")
        .validate_with(|input: &String| -> Result<()> {
            let name = parse_name(input)?;
            if catalog.contains(&name) {
                return Err(BeanError::DuplicateBlend(name));
            }
            Ok(())
        })
        .interact_text()?;

    parse_name(&input)
}

/// Prompt for syrups until the user types `done`.
fn prompt_syrups(recipe: &mut Recipe) -> Result<()> {
    loop {
        let input: String = Input::new()
            .with_prompt("Add a syrup (\"SyrupName NumberOfPumps Price UnitWeight\") or \"done\"")
            .validate_with(|input: &String| -> Result<()> {
                if is_done(input) {
                    return Ok(());
                }
                parse_syrup(input).map(|_| ())
            })
            .interact_text()?;

        if is_done(&input) {
            return Ok(());
        }
        recipe.syrups.push(parse_syrup(&input)?);
    }
}

/// Walk the user through entering a new recipe for `catalog`.
pub fn prompt_new_recipe(catalog: &RecipeCatalog) -> Result<Recipe> {
    let blend_name = prompt_blend_name(catalog)?;
    let coffee_type = prompt_coffee_type()?;
    let (roast_name, roast_price) = prompt_parsed(
        "Enter Roast Name and Price (e.g., \"Italian 0.80\")",
        false,
        parse_roast,
    )?;
    let roast_unit_weight = prompt_parsed(
        "Enter roast unit weight in grams (e.g., 18 for a shot)",
        false,
        parse_weight,
    )?;
    let milk_type = prompt_milk_type()?;
    let milk_price = prompt_parsed("Enter milk price per unit (e.g., 0.30)", false, parse_money)?;
    let milk_unit_weight =
        prompt_parsed("Enter milk unit weight in ml (e.g., 200)", false, parse_weight)?;

    let mut recipe = Recipe::new(blend_name, coffee_type, roast_name, roast_price, milk_type)
        .with_milk_price(milk_price);
    recipe.roast_unit_weight = Some(roast_unit_weight);
    recipe.milk_unit_weight = Some(milk_unit_weight);

    prompt_syrups(&mut recipe)?;
    Ok(recipe)
}
