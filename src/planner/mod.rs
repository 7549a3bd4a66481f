pub mod aggregation;
pub mod constants;
pub mod format;
pub mod summary;

pub use aggregation::{aggregate, group_by_category, IngredientTotals};
pub use constants::*;
pub use format::{format_inr, format_total};
pub use summary::{has_valid_dishes, PlanSummary};
