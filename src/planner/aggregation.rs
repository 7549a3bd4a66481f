use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::catalog;
use crate::models::{AggregatedIngredient, Category, DishSelection, RecipeEntry};

/// Ingredient totals keyed by ingredient name, kept in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientTotals {
    items: Vec<AggregatedIngredient>,
    index: HashMap<String, usize>,
}

impl IngredientTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` of an ingredient. A name seen before keeps its original
    /// unit and category.
    fn accumulate(&mut self, entry: &RecipeEntry, amount: f64) {
        match self.index.get(entry.ingredient) {
            Some(&i) => self.items[i].total += amount,
            None => {
                self.index
                    .insert(entry.ingredient.to_string(), self.items.len());
                self.items.push(AggregatedIngredient {
                    name: entry.ingredient.to_string(),
                    total: amount,
                    unit: entry.unit,
                    category: entry.category,
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AggregatedIngredient> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregatedIngredient> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<AggregatedIngredient> {
        self.items
    }
}

impl<'a> IntoIterator for &'a IngredientTotals {
    type Item = &'a AggregatedIngredient;
    type IntoIter = std::slice::Iter<'a, AggregatedIngredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Sum the ingredients needed for every valid selection.
///
/// Blank names, non-positive quantities and dishes missing from the catalog
/// contribute nothing. Duplicate dish names are summed.
pub fn aggregate(selections: &[DishSelection]) -> IngredientTotals {
    let mut totals = IngredientTotals::new();

    for selection in selections {
        if !selection.is_valid() {
            debug!(name = %selection.name, quantity = selection.quantity, "skipping inert selection");
            continue;
        }

        let Some(entries) = catalog::lookup(&selection.name) else {
            debug!(name = %selection.name, "no recipe for dish, skipping");
            continue;
        };

        for entry in entries {
            totals.accumulate(entry, entry.per_unit * selection.quantity);
        }
    }

    debug!(ingredients = totals.len(), "aggregation complete");
    totals
}

/// Partition totals by category. Groups follow `Category` order; items keep
/// their first-insertion order within a group.
pub fn group_by_category(
    totals: &IngredientTotals,
) -> BTreeMap<Category, Vec<AggregatedIngredient>> {
    let mut groups: BTreeMap<Category, Vec<AggregatedIngredient>> = BTreeMap::new();
    for item in totals {
        groups.entry(item.category).or_default().push(item.clone());
    }
    groups
}
