use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{BeanError, Result};

/// How the coffee itself is prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoffeeType {
    Beans,
    Instant,
    Decaf,
    #[serde(rename = "Cold Brew")]
    ColdBrew,
}

impl CoffeeType {
    pub const ALL: [CoffeeType; 4] = [
        CoffeeType::Beans,
        CoffeeType::Instant,
        CoffeeType::Decaf,
        CoffeeType::ColdBrew,
    ];
}

impl fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoffeeType::Beans => "Beans",
            CoffeeType::Instant => "Instant",
            CoffeeType::Decaf => "Decaf",
            CoffeeType::ColdBrew => "Cold Brew",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilkType {
    Whole,
    Skim,
    Oat,
    Almond,
}

impl MilkType {
    pub const ALL: [MilkType; 4] = [MilkType::Whole, MilkType::Skim, MilkType::Oat, MilkType::Almond];

    /// Whole and skim are dairy; oat and almond are not.
    #[inline]
    pub fn is_dairy(self) -> bool {
        matches!(self, MilkType::Whole | MilkType::Skim)
    }
}

impl fmt::Display for MilkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MilkType::Whole => "Whole",
            MilkType::Skim => "Skim",
            MilkType::Oat => "Oat",
            MilkType::Almond => "Almond",
        };
        f.write_str(name)
    }
}

/// A syrup added to a recipe. Pumps are informational only; pricing uses `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Syrup {
    pub name: String,

    #[serde(default)]
    pub pumps: Option<u32>,

    #[serde(default)]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub unit_weight: Option<u32>,
}

impl Syrup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pumps: None,
            price: None,
            unit_weight: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_pumps(mut self, pumps: u32) -> Self {
        self.pumps = Some(pumps);
        self
    }

    pub fn with_unit_weight(mut self, unit_weight: u32) -> Self {
        self.unit_weight = Some(unit_weight);
        self
    }

    /// Price per unit, with an unset price counting as zero.
    #[inline]
    pub fn unit_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }
}

/// A named base drink stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    pub blend_name: String,

    pub coffee_type: CoffeeType,

    pub roast_name: String,

    pub roast_price: Decimal,

    /// Grams per unit of roast.
    #[serde(default)]
    pub roast_unit_weight: Option<f64>,

    pub milk_type: MilkType,

    #[serde(default)]
    pub milk_price: Option<Decimal>,

    /// Millilitres per unit of milk.
    #[serde(default)]
    pub milk_unit_weight: Option<f64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub syrups: Vec<Syrup>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Syrup>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Syrup>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Recipe {
    pub fn new(
        blend_name: impl Into<String>,
        coffee_type: CoffeeType,
        roast_name: impl Into<String>,
        roast_price: Decimal,
        milk_type: MilkType,
    ) -> Self {
        Self {
            blend_name: blend_name.into(),
            coffee_type,
            roast_name: roast_name.into(),
            roast_price,
            roast_unit_weight: None,
            milk_type,
            milk_price: None,
            milk_unit_weight: None,
            syrups: Vec::new(),
        }
    }

    pub fn with_milk_price(mut self, price: Decimal) -> Self {
        self.milk_price = Some(price);
        self
    }

    pub fn with_syrup(mut self, syrup: Syrup) -> Self {
        self.syrups.push(syrup);
        self
    }

    /// Milk price per unit, with an unset price counting as zero.
    #[inline]
    pub fn milk_unit_price(&self) -> Decimal {
        self.milk_price.unwrap_or(Decimal::ZERO)
    }

    /// Canonical key for lookups (lowercase blend name).
    pub fn key(&self) -> String {
        self.blend_name.trim().to_lowercase()
    }

    /// Check every field against the catalog's rules.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| {
            Err(BeanError::InvalidRecipe {
                name: self.blend_name.clone(),
                reason: reason.to_string(),
            })
        };

        if self.blend_name.trim().is_empty() {
            return fail("blend name is empty");
        }
        if self.roast_name.trim().is_empty() {
            return fail("roast name is empty");
        }
        if is_negative(self.roast_price) {
            return fail("roast price is negative");
        }
        if !positive_weight(self.roast_unit_weight) {
            return fail("roast unit weight must be positive");
        }
        if self.milk_price.is_some_and(is_negative) {
            return fail("milk price is negative");
        }
        if !positive_weight(self.milk_unit_weight) {
            return fail("milk unit weight must be positive");
        }

        for syrup in &self.syrups {
            if syrup.name.trim().is_empty() {
                return fail("syrup name is empty");
            }
            if syrup.price.is_some_and(is_negative) {
                return fail("syrup price is negative");
            }
            if syrup.unit_weight == Some(0) {
                return fail("syrup unit weight must be positive");
            }
        }

        Ok(())
    }

    /// Basic validation as a boolean.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn is_negative(value: Decimal) -> bool {
    value < Decimal::ZERO
}

fn positive_weight(weight: Option<f64>) -> bool {
    weight.is_none_or(|w| w.is_finite() && w > 0.0)
}
