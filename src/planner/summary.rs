use crate::models::DishSelection;
use crate::planner::constants::ESTIMATED_COST_INR;

/// Headline numbers shown under a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    /// Number of valid selections. Duplicate dish names count separately.
    pub dish_types: usize,

    /// Sum of every quantity entered, including inert rows.
    pub total_items: f64,

    /// Placeholder estimate in rupees.
    pub estimated_cost: u64,
}

impl PlanSummary {
    pub fn from_selections(selections: &[DishSelection]) -> Self {
        let dish_types = selections.iter().filter(|s| s.is_valid()).count();
        let total_items = selections
            .iter()
            .map(|s| s.quantity)
            .filter(|q| q.is_finite())
            .sum();

        Self {
            dish_types,
            total_items,
            estimated_cost: ESTIMATED_COST_INR,
        }
    }
}

/// Whether any selection would contribute to the plan.
pub fn has_valid_dishes(selections: &[DishSelection]) -> bool {
    selections.iter().any(DishSelection::is_valid)
}
