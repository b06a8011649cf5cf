use rust_decimal::Decimal;

use crate::error::{BeanError, Result};
use crate::models::recipe::MilkType;

/// Which part of the drink a line item prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientKind {
    Roast,
    Milk,
    /// Syrup at this index in the recipe.
    Syrup(usize),
}

/// One priced ingredient in a breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub kind: IngredientKind,

    /// Display name, e.g. "Oat Milk" or "Vanilla Syrup".
    pub name: String,

    /// Effective unit multiplier for this ingredient.
    pub units: Decimal,

    pub unit_price: Decimal,

    /// `unit_price * units`, unrounded.
    pub total: Decimal,
}

impl LineItem {
    /// Price `units` of an ingredient. Fails if the total overflows.
    pub fn new(
        kind: IngredientKind,
        name: String,
        units: Decimal,
        unit_price: Decimal,
    ) -> Result<Self> {
        let total = unit_price
            .checked_mul(units)
            .ok_or_else(|| BeanError::PriceOverflow(name.clone()))?;
        Ok(Self {
            kind,
            name,
            units,
            unit_price,
            total,
        })
    }
}

/// A fixed surcharge or discount and whether it applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub applied: bool,

    /// The fixed amount when applied, zero otherwise.
    pub amount: Decimal,
}

impl Adjustment {
    pub fn when(applied: bool, amount: Decimal) -> Self {
        Self {
            applied,
            amount: if applied { amount } else { Decimal::ZERO },
        }
    }
}

/// Itemized price of one customized drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub blend_name: String,
    pub size_label: &'static str,

    /// Multiplier shared by every ingredient, for fixed sizes only.
    pub size_multiplier: Option<Decimal>,

    pub original_milk: MilkType,
    pub selected_milk: MilkType,
    pub decaf: bool,

    pub roast: LineItem,
    pub milk: LineItem,
    pub syrups: Vec<LineItem>,

    pub non_dairy_surcharge: Adjustment,
    pub decaf_discount: Adjustment,

    pub total: Decimal,
}

impl PriceBreakdown {
    /// All line items in display order: roast, milk, then syrups.
    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        [&self.roast, &self.milk].into_iter().chain(self.syrups.iter())
    }

    /// Sum of line totals before adjustments.
    pub fn subtotal(&self) -> Decimal {
        self.lines().map(|line| line.total).sum()
    }

    pub fn has_extras(&self) -> bool {
        self.non_dairy_surcharge.applied || self.decaf_discount.applied
    }
}
