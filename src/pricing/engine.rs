use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{BeanError, Result};
use crate::models::{
    Adjustment, CustomUnits, Customization, IngredientKind, LineItem, MilkType, PriceBreakdown,
    Recipe, Size, UnitAmount,
};
use crate::pricing::constants::*;

/// Effective multiplier for every ingredient of one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUnits {
    pub roast: Decimal,
    pub milk: Decimal,
    pub syrups: Vec<Decimal>,
}

impl ResolvedUnits {
    fn uniform(recipe: &Recipe, multiplier: Decimal) -> Self {
        Self {
            roast: multiplier,
            milk: multiplier,
            syrups: vec![multiplier; recipe.syrups.len()],
        }
    }
}

/// Multiplier shared by all ingredients for a fixed size; `None` for custom.
pub fn size_multiplier(size: &Size) -> Option<Decimal> {
    match size {
        Size::Small => Some(SMALL_MULTIPLIER),
        Size::Medium => Some(MEDIUM_MULTIPLIER),
        Size::Large => Some(LARGE_MULTIPLIER),
        Size::Custom(_) => None,
    }
}

/// Resolve the per-ingredient multipliers for `size` against `recipe`.
///
/// Custom sizes must carry an answer for the roast, the milk and every
/// syrup in the recipe.
pub fn resolve_units(recipe: &Recipe, size: &Size) -> Result<ResolvedUnits> {
    let custom = match size {
        Size::Small => return Ok(ResolvedUnits::uniform(recipe, SMALL_MULTIPLIER)),
        Size::Medium => return Ok(ResolvedUnits::uniform(recipe, MEDIUM_MULTIPLIER)),
        Size::Large => return Ok(ResolvedUnits::uniform(recipe, LARGE_MULTIPLIER)),
        Size::Custom(custom) => custom,
    };

    let roast = required(custom.roast, "roast")?;
    let milk = required(custom.milk, "milk")?;
    let syrups = recipe
        .syrups
        .iter()
        .enumerate()
        .map(|(i, syrup)| required(custom.syrup(i), &format!("syrup {} ({})", i, syrup.name)))
        .collect::<Result<Vec<_>>>()?;

    Ok(ResolvedUnits {
        roast,
        milk,
        syrups,
    })
}

fn required(amount: Option<UnitAmount>, ingredient: &str) -> Result<Decimal> {
    amount
        .map(|a| a.resolve().value())
        .ok_or_else(|| BeanError::MissingCustomizationValue(ingredient.to_string()))
}

/// Whether switching from `original` to `selected` milk incurs the non-dairy surcharge.
///
/// Only dairy to non-dairy counts.
pub fn is_non_dairy_switch(original: MilkType, selected: MilkType) -> bool {
    original != selected && original.is_dairy() && !selected.is_dairy()
}

/// Price one customized drink.
///
/// Fails when a custom-size order is missing an ingredient's units, or when
/// a line or the total does not fit in a `Decimal`.
pub fn price_drink(recipe: &Recipe, order: &Customization) -> Result<PriceBreakdown> {
    let units = resolve_units(recipe, &order.size)?;

    let original_milk = recipe.milk_type;
    let selected_milk = order.milk.unwrap_or(original_milk);

    let roast = LineItem::new(
        IngredientKind::Roast,
        recipe.roast_name.clone(),
        units.roast,
        recipe.roast_price,
    )?;
    let milk = LineItem::new(
        IngredientKind::Milk,
        format!("{} Milk", selected_milk),
        units.milk,
        recipe.milk_unit_price(),
    )?;
    let syrups: Vec<LineItem> = recipe
        .syrups
        .iter()
        .zip(&units.syrups)
        .enumerate()
        .map(|(i, (syrup, &multiplier))| {
            LineItem::new(
                IngredientKind::Syrup(i),
                format!("{} Syrup", syrup.name),
                multiplier,
                syrup.unit_price(),
            )
        })
        .collect::<Result<_>>()?;

    let non_dairy_surcharge = Adjustment::when(
        is_non_dairy_switch(original_milk, selected_milk),
        NON_DAIRY_SURCHARGE,
    );
    let decaf_discount = Adjustment::when(order.decaf, DECAF_DISCOUNT);

    let total = std::iter::once(roast.total)
        .chain(std::iter::once(milk.total))
        .chain(syrups.iter().map(|s| s.total))
        .chain(std::iter::once(non_dairy_surcharge.amount))
        .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(amount))
        .and_then(|sum| sum.checked_sub(decaf_discount.amount))
        .ok_or_else(|| BeanError::PriceOverflow("total".to_string()))?;

    debug!(
        blend = %recipe.blend_name,
        size = order.size.label(),
        milk = %selected_milk,
        decaf = order.decaf,
        %total,
        "priced drink"
    );

    Ok(PriceBreakdown {
        blend_name: recipe.blend_name.clone(),
        size_label: order.size.label(),
        size_multiplier: size_multiplier(&order.size),
        original_milk,
        selected_milk,
        decaf: order.decaf,
        roast,
        milk,
        syrups,
        non_dairy_surcharge,
        decaf_discount,
        total,
    })
}

/// Custom units with every ingredient of `recipe` at its default.
pub fn default_custom_units(recipe: &Recipe) -> CustomUnits {
    CustomUnits::defaults(recipe.syrups.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoffeeType, Syrup, UnitMultiplier};
    use rust_decimal_macros::dec;

    fn recipe() -> Recipe {
        Recipe::new("House", CoffeeType::Beans, "Italian", dec!(0.80), MilkType::Whole)
            .with_milk_price(dec!(0.30))
            .with_syrup(Syrup::new("Vanilla").with_price(dec!(0.50)))
    }

    #[test]
    fn test_fixed_sizes_share_multiplier() {
        let units = resolve_units(&recipe(), &Size::Large).unwrap();
        assert_eq!(units.roast, dec!(2.0));
        assert_eq!(units.milk, dec!(2.0));
        assert_eq!(units.syrups, vec![dec!(2.0)]);
    }

    #[test]
    fn test_missing_roast_is_reported() {
        let custom = CustomUnits::new()
            .with_milk(UnitAmount::Default)
            .with_syrup(UnitAmount::Default);
        let err = resolve_units(&recipe(), &Size::Custom(custom)).unwrap_err();
        assert!(matches!(err, BeanError::MissingCustomizationValue(ref s) if s == "roast"));
    }

    #[test]
    fn test_missing_syrup_names_index() {
        let custom = CustomUnits::new()
            .with_roast(UnitAmount::Default)
            .with_milk(UnitAmount::Default);
        let err = resolve_units(&recipe(), &Size::Custom(custom)).unwrap_err();
        assert!(
            matches!(err, BeanError::MissingCustomizationValue(ref s) if s == "syrup 0 (Vanilla)")
        );
    }

    #[test]
    fn test_custom_default_is_one() {
        let three = UnitMultiplier::new(dec!(3)).unwrap();
        let custom = default_custom_units(&recipe()).with_roast(UnitAmount::Units(three));
        let units = resolve_units(&recipe(), &Size::Custom(custom)).unwrap();
        assert_eq!(units.roast, dec!(3));
        assert_eq!(units.milk, Decimal::ONE);
        assert_eq!(units.syrups, vec![Decimal::ONE]);
    }

    #[test]
    fn test_non_dairy_switch_matrix() {
        use MilkType::*;
        for original in MilkType::ALL {
            for selected in MilkType::ALL {
                let expected =
                    matches!(original, Whole | Skim) && matches!(selected, Oat | Almond);
                assert_eq!(is_non_dairy_switch(original, selected), expected);
            }
        }
    }

    #[test]
    fn test_breakdown_names() {
        let order = Customization::new(Size::Small).with_milk(MilkType::Oat);
        let breakdown = price_drink(&recipe(), &order).unwrap();
        assert_eq!(breakdown.roast.name, "Italian");
        assert_eq!(breakdown.milk.name, "Oat Milk");
        assert_eq!(breakdown.syrups[0].name, "Vanilla Syrup");
        assert_eq!(breakdown.size_multiplier, Some(dec!(1.0)));
    }

    #[test]
    fn test_fixed_sizes_match_size_multiplier() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            let units = resolve_units(&recipe(), &size).unwrap();
            assert_eq!(Some(units.roast), size_multiplier(&size));
            assert_eq!(Some(units.milk), size_multiplier(&size));
        }
        assert_eq!(size_multiplier(&Size::Custom(CustomUnits::new())), None);
    }

    #[test]
    fn test_line_overflow_is_an_error() {
        let mut huge = recipe();
        huge.roast_price = Decimal::MAX;
        let err = price_drink(&huge, &Customization::new(Size::Large)).unwrap_err();
        assert!(matches!(err, BeanError::PriceOverflow(ref s) if s == "Italian"));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let mut huge = recipe();
        huge.roast_price = Decimal::MAX;
        huge.milk_price = Some(Decimal::ONE);
        let order = Customization::new(Size::Custom(default_custom_units(&huge)));
        let err = price_drink(&huge, &order).unwrap_err();
        assert!(matches!(err, BeanError::PriceOverflow(ref s) if s == "total"));
    }
}
