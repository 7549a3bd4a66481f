use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::DishSelection;

pub type RowId = u64;

/// One editable line of the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct DishRow {
    pub id: RowId,
    pub selection: DishSelection,
}

/// Ordered list of dish rows being edited.
///
/// Always holds at least one row. Callers re-aggregate from
/// [`DishPlanEditor::selections`] after every change.
#[derive(Debug, Clone)]
pub struct DishPlanEditor {
    rows: Vec<DishRow>,
    next_id: RowId,
}

impl Default for DishPlanEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DishPlanEditor {
    /// Start with a single blank row.
    pub fn new() -> Self {
        let mut editor = Self {
            rows: Vec::new(),
            next_id: 1,
        };
        editor.add_row();
        editor
    }

    /// Build an editor pre-filled with selections, e.g. from a plan file.
    pub fn from_selections(selections: Vec<DishSelection>) -> Self {
        if selections.is_empty() {
            return Self::new();
        }
        let mut editor = Self {
            rows: Vec::with_capacity(selections.len()),
            next_id: 1,
        };
        for selection in selections {
            let id = editor.allocate_id();
            editor.rows.push(DishRow { id, selection });
        }
        editor
    }

    fn allocate_id(&mut self) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a blank row and return its id.
    pub fn add_row(&mut self) -> RowId {
        let id = self.allocate_id();
        self.rows.push(DishRow {
            id,
            selection: DishSelection::default(),
        });
        debug!(id, "added dish row");
        id
    }

    /// Remove a row. The last remaining row cannot be removed.
    pub fn remove_row(&mut self, id: RowId) -> Result<()> {
        let pos = self.position(id)?;
        if self.rows.len() == 1 {
            return Err(PlannerError::LastRow);
        }
        self.rows.remove(pos);
        debug!(id, "removed dish row");
        Ok(())
    }

    pub fn set_name(&mut self, id: RowId, name: impl Into<String>) -> Result<()> {
        let pos = self.position(id)?;
        self.rows[pos].selection.name = name.into();
        Ok(())
    }

    /// Set a row's quantity. Negative and non-finite values are rejected.
    pub fn set_quantity(&mut self, id: RowId, quantity: f64) -> Result<()> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "quantity must be a non-negative number, got {}",
                quantity
            )));
        }
        let pos = self.position(id)?;
        self.rows[pos].selection.quantity = quantity;
        Ok(())
    }

    /// Fill a row's name from the quick-pick list.
    pub fn select_common(&mut self, id: RowId, dish: &str) -> Result<()> {
        self.set_name(id, dish)
    }

    pub fn get(&self, id: RowId) -> Option<&DishRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn rows(&self) -> &[DishRow] {
        &self.rows
    }

    /// Snapshot of the current selections, in row order.
    pub fn selections(&self) -> Vec<DishSelection> {
        self.rows.iter().map(|r| r.selection.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, id: RowId) -> Result<usize> {
        self.rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(PlannerError::RowNotFound(id))
    }
}

/// Parse a quantity typed into the editor.
///
/// Empty or unparsable text counts as zero, like a cleared number box.
/// Negative numbers are an error.
pub fn parse_quantity(input: &str) -> Result<f64> {
    let value: f64 = match input.trim().parse() {
        Ok(v) => v,
        Err(_) => return Ok(0.0),
    };
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "quantity must be a non-negative number, got '{}'",
            input.trim()
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_blank_row() {
        let editor = DishPlanEditor::new();
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.selections(), vec![DishSelection::default()]);
    }

    #[test]
    fn test_add_and_edit_rows() {
        let mut editor = DishPlanEditor::new();
        let first = editor.rows()[0].id;
        let second = editor.add_row();
        assert_ne!(first, second);

        editor.select_common(first, "Samosa").unwrap();
        editor.set_quantity(first, 2.0).unwrap();
        editor.set_name(second, "Dosa").unwrap();
        editor.set_quantity(second, 5.0).unwrap();

        assert_eq!(
            editor.selections(),
            vec![
                DishSelection::new("Samosa", 2.0),
                DishSelection::new("Dosa", 5.0)
            ]
        );
    }

    #[test]
    fn test_cannot_remove_last_row() {
        let mut editor = DishPlanEditor::new();
        let only = editor.rows()[0].id;
        assert!(matches!(editor.remove_row(only), Err(PlannerError::LastRow)));

        let extra = editor.add_row();
        editor.remove_row(only).unwrap();
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.rows()[0].id, extra);
    }

    #[test]
    fn test_unknown_row() {
        let mut editor = DishPlanEditor::new();
        assert!(matches!(
            editor.set_name(42, "Dosa"),
            Err(PlannerError::RowNotFound(42))
        ));
        assert!(editor.get(42).is_none());
    }

    #[test]
    fn test_ids_not_reused() {
        let mut editor = DishPlanEditor::new();
        let a = editor.add_row();
        editor.remove_row(a).unwrap();
        let b = editor.add_row();
        assert!(b > a);
    }

    #[test]
    fn test_set_quantity_rejects_negative() {
        let mut editor = DishPlanEditor::new();
        let id = editor.rows()[0].id;
        assert!(editor.set_quantity(id, -1.0).is_err());
        assert!(editor.set_quantity(id, f64::NAN).is_err());
        assert_eq!(editor.get(id).unwrap().selection.quantity, 0.0);
    }

    #[test]
    fn test_from_selections() {
        let editor = DishPlanEditor::from_selections(vec![
            DishSelection::new("Samosa", 1.0),
            DishSelection::new("Samosa", 1.0),
        ]);
        assert_eq!(editor.len(), 2);
        assert_ne!(editor.rows()[0].id, editor.rows()[1].id);

        assert_eq!(DishPlanEditor::from_selections(Vec::new()).len(), 1);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12").unwrap(), 12.0);
        assert_eq!(parse_quantity(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_quantity("").unwrap(), 0.0);
        assert_eq!(parse_quantity("abc").unwrap(), 0.0);
        assert!(parse_quantity("-3").is_err());
    }
}
