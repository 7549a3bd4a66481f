use serde::Serialize;

use super::recipe::{Category, Unit};

/// Total amount of one ingredient needed across every valid dish selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedIngredient {
    pub name: String,
    pub total: f64,
    pub unit: Unit,
    pub category: Category,
}
