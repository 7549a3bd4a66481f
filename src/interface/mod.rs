pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_dish_name, prompt_edit_action, prompt_quantity, validate_quantity, DishChoice,
    EditAction,
};
pub use render::{
    display_plan_summary, display_recipes, display_requirements, display_rows, display_suppliers,
    quantity_label, write_totals_csv,
};
