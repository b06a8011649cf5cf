//! Text parsers behind the interactive prompts.
//!
//! Each returns `InvalidInput` with a message suitable for showing the user
//! before asking again.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{BeanError, Result};
use crate::models::{Syrup, UnitAmount, UnitMultiplier};
use crate::pricing::MAX_CUSTOM_UNITS;

fn invalid(message: impl Into<String>) -> BeanError {
    BeanError::InvalidInput(message.into())
}

fn decimal(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim()).ok()
}

/// Custom units for one ingredient. Blank input takes the default.
pub fn parse_units(input: &str) -> Result<UnitAmount> {
    if input.trim().is_empty() {
        return Ok(UnitAmount::Default);
    }
    let value = decimal(input).ok_or_else(|| {
        invalid(format!(
            "Please enter a number greater than 0 and at most {}, or leave blank for 1",
            MAX_CUSTOM_UNITS
        ))
    })?;
    UnitMultiplier::new(value).map(UnitAmount::Units)
}

/// A non-negative price.
pub fn parse_money(input: &str) -> Result<Decimal> {
    match decimal(input) {
        Some(value) if value >= Decimal::ZERO => Ok(value),
        _ => Err(invalid("Please enter a non-negative decimal number")),
    }
}

/// A positive unit weight (grams or millilitres).
pub fn parse_weight(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(invalid("Please enter a positive number")),
    }
}

/// A non-blank name, trimmed.
pub fn parse_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(invalid("Input cannot be empty"));
    }
    Ok(name.to_string())
}

/// Roast name and price, e.g. `Italian 0.80`.
pub fn parse_roast(input: &str) -> Result<(String, Decimal)> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let &[name, price] = &parts[..] else {
        return Err(invalid(
            "Invalid format. Use \"RoastName Price\" (e.g., Italian 0.80)",
        ));
    };
    let price = parse_money(price)?;
    Ok((name.to_string(), price))
}

/// Syrup as `Name Pumps Price UnitWeight`, e.g. `Vanilla 2 0.50 1`.
pub fn parse_syrup(input: &str) -> Result<Syrup> {
    let format_error =
        || invalid("Invalid syrup format. Use \"SyrupName NumberOfPumps Price UnitWeight\"");

    let parts: Vec<&str> = input.split_whitespace().collect();
    let &[name, pumps, price, unit_weight] = &parts[..] else {
        return Err(format_error());
    };

    let pumps: u32 = pumps.parse().map_err(|_| format_error())?;
    let price = parse_money(price).map_err(|_| format_error())?;
    let unit_weight: u32 = match unit_weight.parse() {
        Ok(w) if w > 0 => w,
        _ => return Err(format_error()),
    };

    Ok(Syrup::new(name)
        .with_pumps(pumps)
        .with_price(price)
        .with_unit_weight(unit_weight))
}

/// Whether the user has finished adding syrups.
pub fn is_done(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("done")
}
