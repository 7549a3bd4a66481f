mod editor;
mod loader;

pub use editor::{parse_quantity, DishPlanEditor, DishRow, RowId};
pub use loader::load_selections;
