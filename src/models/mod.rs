pub mod breakdown;
pub mod order;
pub mod recipe;

pub use breakdown::{Adjustment, IngredientKind, LineItem, PriceBreakdown};
pub use order::{CustomUnits, Customization, Size, UnitAmount, UnitMultiplier};
pub use recipe::{CoffeeType, MilkType, Recipe, Syrup};
