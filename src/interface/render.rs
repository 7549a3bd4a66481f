use std::io::Write;

use crate::catalog::RECIPES;
use crate::error::Result;
use crate::models::{AggregatedIngredient, DishSelection, Supplier};
use crate::planner::{
    format_inr, format_total, group_by_category, has_valid_dishes, IngredientTotals, PlanSummary,
};
use crate::state::DishPlanEditor;

/// Total with unit, e.g. `0.09 L`.
pub fn quantity_label(item: &AggregatedIngredient) -> String {
    format!("{} {}", format_total(item.total), item.unit)
}

/// Display ingredient requirements grouped by category.
pub fn display_requirements(selections: &[DishSelection], totals: &IngredientTotals) {
    println!();
    println!("=== Ingredient Requirements ===");
    println!();

    if !has_valid_dishes(selections) {
        println!("Add dishes to see ingredient requirements.");
        println!();
        return;
    }

    if totals.is_empty() {
        println!("No recipes found for the planned dishes.");
        println!();
        return;
    }

    let width = totals.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (category, items) in group_by_category(totals) {
        println!("[{}]", category);
        for item in &items {
            println!(
                "    {:<width$}  {:>10}",
                item.name,
                quantity_label(item),
                width = width
            );
        }
    }
    println!();
}

/// Display the order summary card.
pub fn display_plan_summary(summary: &PlanSummary) {
    println!("--- Order Summary ---");
    println!("Dish types: {}", summary.dish_types);
    println!("Total items: {}", format_total(summary.total_items));
    println!("Total cost: Est. {}", format_inr(summary.estimated_cost));
    println!();
}

/// Display the dish rows currently in the editor.
pub fn display_rows(editor: &DishPlanEditor) {
    println!();
    println!("=== Plan Your Menu ===");
    for (i, row) in editor.rows().iter().enumerate() {
        let name = if row.selection.name.is_empty() {
            "(no dish)"
        } else {
            row.selection.name.as_str()
        };
        println!(
            "{:>3}. {} x {}",
            i + 1,
            name,
            format_total(row.selection.quantity)
        );
    }
}

/// Display the supplier directory.
pub fn display_suppliers(suppliers: &[Supplier]) {
    println!();
    println!("=== Nearby Suppliers ===");
    println!();

    for supplier in suppliers {
        println!("{}  [{}]  {}", supplier.name, supplier.category, supplier.price_tier);
        println!(
            "    {} rating | {} km away | {} delivery",
            supplier.rating, supplier.distance_km, supplier.delivery_time
        );
        println!("    Specialties: {}", supplier.specialties.join(", "));
        println!("    Phone: {}", supplier.phone);
        println!();
    }
}

/// Display the recipe catalog, optionally restricted to one dish.
pub fn display_recipes(dish: Option<&str>) {
    let recipes: Vec<_> = RECIPES
        .iter()
        .filter(|r| dish.is_none_or(|d| r.dish == d))
        .collect();

    if recipes.is_empty() {
        println!("No recipe found for '{}'", dish.unwrap_or_default());
        return;
    }

    for recipe in recipes {
        println!();
        println!("=== {} (per unit) ===", recipe.dish);
        for entry in recipe.ingredients {
            println!(
                "    {:<18} {:>7} {:<4} {}",
                entry.ingredient, entry.per_unit, entry.unit, entry.category
            );
        }
    }
    println!();
}

/// Write totals as CSV rows: `name,total,unit,category`.
pub fn write_totals_csv<W: Write>(totals: &IngredientTotals, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["name", "total", "unit", "category"])?;
    for item in totals {
        let total = item.total.to_string();
        wtr.write_record([
            item.name.as_str(),
            total.as_str(),
            item.unit.label(),
            item.category.label(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
