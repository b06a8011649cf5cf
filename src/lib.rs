pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod state;

pub use error::{BeanError, Result};
pub use models::{Customization, PriceBreakdown, Recipe, Size};
pub use pricing::price_drink;
