use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use street_food_planner::catalog::{self, suppliers};
use street_food_planner::cli::{Cli, Command, OutputFormat};
use street_food_planner::error::Result;
use street_food_planner::interface::{
    display_plan_summary, display_recipes, display_requirements, display_rows, display_suppliers,
    prompt_dish_name, prompt_edit_action, prompt_quantity, write_totals_csv, DishChoice,
    EditAction,
};
use street_food_planner::logging::init_logging;
use street_food_planner::models::DishSelection;
use street_food_planner::planner::{aggregate, has_valid_dishes, PlanSummary};
use street_food_planner::state::{load_selections, DishPlanEditor, RowId};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or_default() {
        Command::Plan { file } => cmd_plan(file),
        Command::Calc {
            dishes,
            file,
            format,
        } => cmd_calc(dishes, file, format),
        Command::Recipes { dish } => {
            display_recipes(dish.as_deref());
            Ok(())
        }
        Command::Suppliers => {
            display_suppliers(suppliers());
            Ok(())
        }
    }
}

/// Interactive menu planning. Requirements are recomputed after every edit.
fn cmd_plan(file: Option<PathBuf>) -> Result<()> {
    let mut editor = match file {
        Some(path) => DishPlanEditor::from_selections(load_selections(path)?),
        None => DishPlanEditor::new(),
    };

    // A fresh plan starts by filling its blank row
    if !has_valid_dishes(&editor.selections()) {
        if let Some(id) = editor.rows().first().map(|r| r.id) {
            edit_row(&mut editor, id)?;
        }
    }

    loop {
        let selections = editor.selections();
        let totals = aggregate(&selections);

        display_rows(&editor);
        display_requirements(&selections, &totals);
        if has_valid_dishes(&selections) {
            display_plan_summary(&PlanSummary::from_selections(&selections));
        }

        match prompt_edit_action(&editor)? {
            EditAction::AddDish => {
                let id = editor.add_row();
                edit_row(&mut editor, id)?;
            }
            EditAction::Edit(id) => edit_row(&mut editor, id)?,
            EditAction::Remove(id) => editor.remove_row(id)?,
            EditAction::ShowSuppliers => display_suppliers(suppliers()),
            EditAction::Done => break,
        }
    }

    Ok(())
}

fn edit_row(editor: &mut DishPlanEditor, id: RowId) -> Result<()> {
    let choice = prompt_dish_name()?;
    let name = choice.name();
    if !name.is_empty() && !catalog::contains(name) {
        println!("No recipe for '{}' yet; it will not add any ingredients.", name);
    }
    let quantity = prompt_quantity(name)?;

    match &choice {
        DishChoice::Common(dish) => editor.select_common(id, dish)?,
        DishChoice::Typed(name) => editor.set_name(id, name.as_str())?,
    }
    editor.set_quantity(id, quantity)?;
    Ok(())
}

/// One-shot aggregation for a fixed set of dishes.
fn cmd_calc(
    mut dishes: Vec<DishSelection>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    if let Some(path) = file {
        let mut from_file = load_selections(path)?;
        from_file.append(&mut dishes);
        dishes = from_file;
    }

    if dishes.is_empty() {
        warn!("no dishes given; use --dish NAME=QTY or --file");
    }

    for dish in dishes.iter().filter(|d| d.is_valid()) {
        if !catalog::contains(&dish.name) {
            warn!(dish = %dish.name, "no recipe for dish, it contributes nothing");
        }
    }

    let totals = aggregate(&dishes);
    info!(dishes = dishes.len(), ingredients = totals.len(), "computed requirements");

    match format {
        OutputFormat::Table => {
            display_requirements(&dishes, &totals);
            if has_valid_dishes(&dishes) {
                display_plan_summary(&PlanSummary::from_selections(&dishes));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&totals.into_vec())?;
            println!("{}", json);
        }
        OutputFormat::Csv => write_totals_csv(&totals, io::stdout().lock())?,
    }

    Ok(())
}
