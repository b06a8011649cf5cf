use std::fmt;

use rust_decimal::Decimal;

use crate::error::{BeanError, Result};
use crate::models::recipe::MilkType;
use crate::pricing::constants::MAX_CUSTOM_UNITS;

/// A strictly positive unit multiplier, at most [`MAX_CUSTOM_UNITS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitMultiplier(Decimal);

impl UnitMultiplier {
    pub const ONE: UnitMultiplier = UnitMultiplier(Decimal::ONE);

    pub fn new(value: Decimal) -> Result<Self> {
        if value <= Decimal::ZERO || value > MAX_CUSTOM_UNITS {
            return Err(BeanError::InvalidInput(format!(
                "units must be greater than 0 and at most {}",
                MAX_CUSTOM_UNITS
            )));
        }
        Ok(Self(value.normalize()))
    }

    #[inline]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for UnitMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One ingredient's answer in a custom-size order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitAmount {
    /// The customer accepted the default of one unit.
    Default,
    Units(UnitMultiplier),
}

impl UnitAmount {
    pub fn resolve(self) -> UnitMultiplier {
        match self {
            UnitAmount::Default => UnitMultiplier::ONE,
            UnitAmount::Units(units) => units,
        }
    }
}

/// Per-ingredient units for a custom-size order.
///
/// `None` means no answer was recorded for that ingredient, which the
/// pricing engine rejects. Syrups are indexed in recipe order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomUnits {
    pub roast: Option<UnitAmount>,
    pub milk: Option<UnitAmount>,
    pub syrups: Vec<Option<UnitAmount>>,
}

impl CustomUnits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ingredient at its default, for a recipe with `syrup_count` syrups.
    pub fn defaults(syrup_count: usize) -> Self {
        Self {
            roast: Some(UnitAmount::Default),
            milk: Some(UnitAmount::Default),
            syrups: vec![Some(UnitAmount::Default); syrup_count],
        }
    }

    pub fn with_roast(mut self, amount: UnitAmount) -> Self {
        self.roast = Some(amount);
        self
    }

    pub fn with_milk(mut self, amount: UnitAmount) -> Self {
        self.milk = Some(amount);
        self
    }

    pub fn with_syrup(mut self, amount: UnitAmount) -> Self {
        self.syrups.push(Some(amount));
        self
    }

    /// Answer for the syrup at `index`, if one was recorded.
    pub fn syrup(&self, index: usize) -> Option<UnitAmount> {
        self.syrups.get(index).copied().flatten()
    }
}

/// Drink size. The fixed sizes scale every ingredient alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
    Custom(CustomUnits),
}

impl Size {
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::Custom(_) => "Custom",
        }
    }
}

/// A customer's order against one recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customization {
    pub size: Size,

    /// Replacement milk; `None` keeps the recipe's own.
    pub milk: Option<MilkType>,

    pub decaf: bool,
}

impl Customization {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            milk: None,
            decaf: false,
        }
    }

    pub fn with_milk(mut self, milk: MilkType) -> Self {
        self.milk = Some(milk);
        self
    }

    pub fn decaf(mut self, decaf: bool) -> Self {
        self.decaf = decaf;
        self
    }
}
