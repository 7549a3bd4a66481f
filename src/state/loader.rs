use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::DishSelection;

/// Load dish selections from a JSON plan file.
///
/// The file is a JSON array of `{"name": ..., "quantity": ...}` objects.
/// Missing fields default to an empty name and zero quantity.
pub fn load_selections<P: AsRef<Path>>(path: P) -> Result<Vec<DishSelection>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let selections: Vec<DishSelection> = serde_json::from_str(&content)?;
    info!(path = %path.display(), count = selections.len(), "loaded plan file");
    Ok(selections)
}
