mod recipes;
mod search;
mod suppliers;

pub use recipes::{contains, dish_names, lookup, COMMON_DISHES, RECIPES};
pub use search::{exact_dish, suggest_dishes};
pub use suppliers::{suppliers, SUPPLIERS};
