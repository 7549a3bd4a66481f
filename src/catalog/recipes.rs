use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Category, Recipe, RecipeEntry, Unit};

use Category::*;
use Unit::*;

const fn entry(
    ingredient: &'static str,
    per_unit: f64,
    unit: Unit,
    category: Category,
) -> RecipeEntry {
    RecipeEntry::new(ingredient, per_unit, unit, category)
}

/// Per-unit recipes for the street food dishes the planner knows about.
pub static RECIPES: &[Recipe] = &[
    Recipe {
        dish: "Samosa",
        ingredients: &[
            entry("Potatoes", 0.2, Kilograms, Vegetables),
            entry("Green Peas", 0.05, Kilograms, Vegetables),
            entry("Maida Flour", 0.04, Kilograms, Grains),
            entry("Oil", 0.03, Litres, OilAndFats),
            entry("Cumin Seeds", 0.002, Kilograms, Spices),
            entry("Garam Masala", 0.001, Kilograms, Spices),
        ],
    },
    Recipe {
        dish: "Dosa",
        ingredients: &[
            entry("Rice", 0.08, Kilograms, Grains),
            entry("Urad Dal", 0.02, Kilograms, Grains),
            entry("Oil", 0.005, Litres, OilAndFats),
            entry("Salt", 0.001, Kilograms, Spices),
        ],
    },
    Recipe {
        dish: "Vada Pav",
        ingredients: &[
            entry("Potatoes", 0.15, Kilograms, Vegetables),
            entry("Pav Bread", 1.0, Pieces, Bakery),
            entry("Besan Flour", 0.03, Kilograms, Grains),
            entry("Oil", 0.02, Litres, OilAndFats),
            entry("Green Chutney", 0.01, Kilograms, Condiments),
            entry("Tamarind Chutney", 0.01, Kilograms, Condiments),
        ],
    },
    Recipe {
        dish: "Chole Bhature",
        ingredients: &[
            entry("Chickpeas", 0.1, Kilograms, Grains),
            entry("Maida Flour", 0.08, Kilograms, Grains),
            entry("Onions", 0.05, Kilograms, Vegetables),
            entry("Tomatoes", 0.05, Kilograms, Vegetables),
            entry("Oil", 0.02, Litres, OilAndFats),
            entry("Garam Masala", 0.002, Kilograms, Spices),
        ],
    },
    Recipe {
        dish: "Pani Puri",
        ingredients: &[
            entry("Puri Shells", 8.0, Pieces, Bakery),
            entry("Tamarind", 0.02, Kilograms, Fruits),
            entry("Mint Leaves", 0.01, Kilograms, Vegetables),
            entry("Chickpeas", 0.03, Kilograms, Grains),
            entry("Potatoes", 0.05, Kilograms, Vegetables),
            entry("Black Salt", 0.001, Kilograms, Spices),
        ],
    },
];

/// Quick-pick dish names offered by the editor. Not all of them have recipes.
pub const COMMON_DISHES: [&str; 10] = [
    "Samosa",
    "Dosa",
    "Vada Pav",
    "Chole Bhature",
    "Pani Puri",
    "Bhel Puri",
    "Aloo Tikki",
    "Paratha",
    "Idli",
    "Uttapam",
];

static INDEX: LazyLock<HashMap<&'static str, &'static Recipe>> =
    LazyLock::new(|| RECIPES.iter().map(|r| (r.dish, r)).collect());

/// Ingredients for one unit of `dish`, or `None` if the dish is not catalogued.
///
/// Matching is exact and case-sensitive.
pub fn lookup(dish: &str) -> Option<&'static [RecipeEntry]> {
    INDEX.get(dish).map(|r| r.ingredients)
}

pub fn contains(dish: &str) -> bool {
    INDEX.contains_key(dish)
}

/// Catalogued dish names in catalog order.
pub fn dish_names() -> impl Iterator<Item = &'static str> {
    RECIPES.iter().map(|r| r.dish)
}
