pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{AggregatedIngredient, Category, DishSelection, RecipeEntry, Unit};
pub use planner::{aggregate, group_by_category, IngredientTotals};
