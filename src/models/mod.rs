pub mod dish;
pub mod ingredient;
pub mod recipe;
pub mod supplier;

pub use dish::DishSelection;
pub use ingredient::AggregatedIngredient;
pub use recipe::{Category, Recipe, RecipeEntry, Unit};
pub use supplier::{PriceTier, Supplier};
