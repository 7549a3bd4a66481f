use dialoguer::{Confirm, Input, Select};

use crate::catalog::{exact_dish, suggest_dishes, COMMON_DISHES};
use crate::error::Result;
use crate::state::{parse_quantity, DishPlanEditor, RowId};

/// What the user wants to do next in the editor loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditAction {
    AddDish,
    Edit(RowId),
    Remove(RowId),
    ShowSuppliers,
    Done,
}

/// A dish name chosen in the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum DishChoice {
    /// Picked from the quick-pick list.
    Common(&'static str),
    /// Typed in, possibly corrected to a known dish.
    Typed(String),
}

impl DishChoice {
    pub fn name(&self) -> &str {
        match self {
            DishChoice::Common(dish) => dish,
            DishChoice::Typed(name) => name,
        }
    }
}

/// Ask for a dish name: a quick pick from the common list, or free text with
/// fuzzy matching against known dishes.
pub fn prompt_dish_name() -> Result<DishChoice> {
    let mut options: Vec<String> = COMMON_DISHES.iter().map(|d| d.to_string()).collect();
    options.push("Other (type a name)".to_string());

    let selection = Select::new()
        .with_prompt("Dish name")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < COMMON_DISHES.len() {
        return Ok(DishChoice::Common(COMMON_DISHES[selection]));
    }

    let input: String = Input::new()
        .with_prompt("Enter dish name")
        .allow_empty(true)
        .interact_text()?;
    let input = input.trim();

    if input.is_empty() {
        return Ok(DishChoice::Typed(String::new()));
    }

    if let Some(dish) = exact_dish(input) {
        return Ok(DishChoice::Typed(dish.to_string()));
    }

    let candidates = suggest_dishes(input);
    let name = match candidates.as_slice() {
        [] => input.to_string(),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;
            if confirm {
                only.to_string()
            } else {
                input.to_string()
            }
        }
        _ => {
            let mut choices: Vec<String> = candidates.iter().map(|d| d.to_string()).collect();
            choices.push(format!("Keep '{}'", input));

            let picked = Select::new()
                .with_prompt("Which did you mean?")
                .items(&choices)
                .default(0)
                .interact()?;

            candidates
                .get(picked)
                .map(|d| d.to_string())
                .unwrap_or_else(|| input.to_string())
        }
    };
    Ok(DishChoice::Typed(name))
}

/// Check typed quantity text, keeping the message for a re-prompt.
pub fn validate_quantity(input: &str) -> std::result::Result<(), String> {
    parse_quantity(input).map(|_| ()).map_err(|e| e.to_string())
}

/// Ask for a quantity until it is acceptable. Blank or non-numeric input
/// counts as zero; negative numbers are asked again.
pub fn prompt_quantity(dish: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("How many '{}'?", dish))
        .default("0".to_string())
        .validate_with(|input: &String| validate_quantity(input))
        .interact_text()?;

    parse_quantity(&input)
}

/// Ask which editor action to take next.
pub fn prompt_edit_action(editor: &DishPlanEditor) -> Result<EditAction> {
    let mut actions = vec![EditAction::AddDish];
    let mut labels = vec!["Add another dish".to_string()];

    for (i, row) in editor.rows().iter().enumerate() {
        actions.push(EditAction::Edit(row.id));
        labels.push(format!("Edit dish {}", i + 1));
    }

    // The last row stays
    if editor.len() > 1 {
        for (i, row) in editor.rows().iter().enumerate() {
            actions.push(EditAction::Remove(row.id));
            labels.push(format!("Remove dish {}", i + 1));
        }
    }

    actions.push(EditAction::ShowSuppliers);
    labels.push("Show nearby suppliers".to_string());
    actions.push(EditAction::Done);
    labels.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions.get(selection).copied().unwrap_or(EditAction::Done))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity_rejects_negative() {
        let err = validate_quantity("-3").unwrap_err();
        assert!(err.contains("non-negative"), "{}", err);
        assert!(validate_quantity("inf").is_err());
    }

    #[test]
    fn test_validate_quantity_accepts_editor_text() {
        assert!(validate_quantity("12").is_ok());
        assert!(validate_quantity("0.5").is_ok());
        assert!(validate_quantity("").is_ok());
        assert!(validate_quantity("abc").is_ok());
    }

    #[test]
    fn test_dish_choice_name() {
        assert_eq!(DishChoice::Common("Dosa").name(), "Dosa");
        assert_eq!(DishChoice::Typed("Unicorn Stew".to_string()).name(), "Unicorn Stew");
    }
}
