use std::fmt;

use serde::Serialize;

/// Unit an ingredient is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "L")]
    Litres,
    #[serde(rename = "pcs")]
    Pieces,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Kilograms => "kg",
            Unit::Litres => "L",
            Unit::Pieces => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Display grouping for ingredients. Declaration order is the order groups
/// are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Vegetables,
    Grains,
    #[serde(rename = "Oil & Fats")]
    OilAndFats,
    Spices,
    Fruits,
    Bakery,
    Condiments,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Vegetables,
        Category::Grains,
        Category::OilAndFats,
        Category::Spices,
        Category::Fruits,
        Category::Bakery,
        Category::Condiments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Vegetables => "Vegetables",
            Category::Grains => "Grains",
            Category::OilAndFats => "Oil & Fats",
            Category::Spices => "Spices",
            Category::Fruits => "Fruits",
            Category::Bakery => "Bakery",
            Category::Condiments => "Condiments",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One ingredient needed to make a single unit of a dish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeEntry {
    pub ingredient: &'static str,
    pub per_unit: f64,
    pub unit: Unit,
    pub category: Category,
}

impl RecipeEntry {
    pub const fn new(
        ingredient: &'static str,
        per_unit: f64,
        unit: Unit,
        category: Category,
    ) -> Self {
        Self {
            ingredient,
            per_unit,
            unit,
            category,
        }
    }
}

/// A catalogued dish and its per-unit ingredient list.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub dish: &'static str,
    pub ingredients: &'static [RecipeEntry],
}
