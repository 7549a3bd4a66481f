use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::DishSelection;

/// Street food planner: turn a menu of dishes into raw material requirements.
#[derive(Parser, Debug)]
#[command(name = "street-food-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a menu interactively and see ingredient requirements as you go.
    Plan {
        /// Start from the dishes in a JSON plan file.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Compute ingredient requirements for a fixed list of dishes.
    Calc {
        /// Dish and quantity as NAME=QTY, e.g. --dish "Vada Pav=40". Repeatable.
        #[arg(short, long = "dish", value_parser = parse_dish_arg)]
        dishes: Vec<DishSelection>,

        /// Read dishes from a JSON plan file (combined with any --dish).
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show per-unit recipes.
    Recipes {
        /// Only show this dish.
        #[arg(short, long)]
        dish: Option<String>,
    },

    /// Show nearby suppliers.
    Suppliers,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { file: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Parse a `NAME=QTY` dish argument.
pub fn parse_dish_arg(s: &str) -> Result<DishSelection, String> {
    let (name, qty) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=QTY, got '{}'", s))?;

    let quantity: f64 = qty
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", qty.trim()))?;

    if !quantity.is_finite() || quantity < 0.0 {
        return Err(format!("quantity must be non-negative, got '{}'", qty.trim()));
    }

    Ok(DishSelection::new(name.trim(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dish_arg() {
        assert_eq!(
            parse_dish_arg("Vada Pav=40").unwrap(),
            DishSelection::new("Vada Pav", 40.0)
        );
        assert_eq!(
            parse_dish_arg(" Dosa = 2.5 ").unwrap(),
            DishSelection::new("Dosa", 2.5)
        );
        assert!(parse_dish_arg("Samosa").is_err());
        assert!(parse_dish_arg("Samosa=lots").is_err());
        assert!(parse_dish_arg("Samosa=-1").is_err());
    }

    #[test]
    fn test_cli_parses_calc() {
        let cli = Cli::try_parse_from([
            "street-food-planner",
            "-v",
            "calc",
            "--dish",
            "Samosa=2",
            "--dish",
            "Dosa=5",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Command::Calc { dishes, file, format }) => {
                assert_eq!(dishes.len(), 2);
                assert!(file.is_none());
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_defaults_to_plan() {
        let cli = Cli::try_parse_from(["street-food-planner"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Plan { file: None }
        ));
    }
}
