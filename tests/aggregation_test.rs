use assert_float_eq::assert_float_absolute_eq;

use street_food_planner::catalog::{dish_names, lookup};
use street_food_planner::models::{Category, DishSelection, Unit};
use street_food_planner::planner::{aggregate, format_total, group_by_category, IngredientTotals};

fn dish(name: &str, quantity: f64) -> DishSelection {
    DishSelection::new(name, quantity)
}

fn assert_same_totals(a: &IngredientTotals, b: &IngredientTotals) {
    assert_eq!(a.len(), b.len());
    for item in a {
        let other = b.get(&item.name).expect("ingredient missing");
        assert_float_absolute_eq!(item.total, other.total, 1e-9);
        assert_eq!(item.unit, other.unit);
        assert_eq!(item.category, other.category);
    }
}

#[test]
fn test_empty_selection_list() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn test_inert_selections_contribute_nothing() {
    for name in dish_names() {
        let totals = aggregate(&[dish(name, 0.0), dish("", 7.0), dish("  ", 3.0)]);
        assert!(totals.is_empty(), "{} with zero quantity contributed", name);
    }
}

#[test]
fn test_unknown_dishes_contribute_nothing() {
    let totals = aggregate(&[dish("", 3.0), dish("Unicorn Stew", 10.0)]);
    assert!(totals.is_empty());

    let with_known = aggregate(&[dish("Unicorn Stew", 10.0), dish("Dosa", 1.0)]);
    assert_same_totals(&with_known, &aggregate(&[dish("Dosa", 1.0)]));
}

#[test]
fn test_samosa_scenario() {
    let totals = aggregate(&[dish("Samosa", 2.0)]);
    let expected = [
        ("Potatoes", 0.4, Unit::Kilograms),
        ("Green Peas", 0.1, Unit::Kilograms),
        ("Maida Flour", 0.08, Unit::Kilograms),
        ("Oil", 0.06, Unit::Litres),
        ("Cumin Seeds", 0.004, Unit::Kilograms),
        ("Garam Masala", 0.002, Unit::Kilograms),
    ];

    assert_eq!(totals.len(), expected.len());
    for (name, total, unit) in expected {
        let item = totals.get(name).unwrap();
        assert_float_absolute_eq!(item.total, total, 1e-9);
        assert_eq!(item.unit, unit);
    }
}

#[test]
fn test_shared_ingredient_summed_across_recipes() {
    let totals = aggregate(&[dish("Samosa", 2.0), dish("Dosa", 5.0)]);
    let oil = totals.get("Oil").unwrap();
    assert_float_absolute_eq!(oil.total, 0.085, 1e-9);
    assert_eq!(oil.unit, Unit::Litres);
    assert_eq!(oil.category, Category::OilAndFats);
    assert_eq!(format_total(oil.total), "0.09");
}

#[test]
fn test_additive_in_quantity() {
    for name in dish_names() {
        let split = aggregate(&[dish(name, 3.0), dish(name, 4.0)]);
        let joined = aggregate(&[dish(name, 7.0)]);
        assert_same_totals(&split, &joined);
    }
}

#[test]
fn test_order_independent() {
    let forward = vec![
        dish("Samosa", 2.0),
        dish("Vada Pav", 10.0),
        dish("Pani Puri", 6.0),
        dish("Chole Bhature", 3.0),
        dish("Dosa", 5.0),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(2);

    let base = aggregate(&forward);
    assert_same_totals(&base, &aggregate(&reversed));
    assert_same_totals(&base, &aggregate(&rotated));
}

#[test]
fn test_deterministic() {
    let selections = [dish("Vada Pav", 12.0), dish("Pani Puri", 4.0)];
    assert_eq!(aggregate(&selections), aggregate(&selections));
}

#[test]
fn test_totals_match_recipe_scaling() {
    for name in dish_names() {
        let totals = aggregate(&[dish(name, 2.5)]);
        for entry in lookup(name).unwrap() {
            let item = totals.get(entry.ingredient).unwrap();
            assert_float_absolute_eq!(item.total, entry.per_unit * 2.5, 1e-9);
        }
    }
}

#[test]
fn test_every_ingredient_in_exactly_one_group() {
    let totals = aggregate(&[
        dish("Samosa", 1.0),
        dish("Dosa", 1.0),
        dish("Vada Pav", 1.0),
        dish("Chole Bhature", 1.0),
        dish("Pani Puri", 1.0),
    ]);
    let groups = group_by_category(&totals);

    assert_eq!(groups.len(), Category::ALL.len());
    for item in &totals {
        let hits = groups
            .values()
            .filter(|items| items.iter().any(|i| i.name == item.name))
            .count();
        assert_eq!(hits, 1, "{} grouped {} times", item.name, hits);
    }
}

#[test]
fn test_display_policy() {
    assert_eq!(format_total(1.0), "1");
    assert_eq!(format_total(0.085), "0.09");

    // 5 pav, 2 x 8 puri shells
    let totals = aggregate(&[dish("Samosa", 4.0), dish("Pani Puri", 2.0), dish("Vada Pav", 5.0)]);
    assert_eq!(format_total(totals.get("Pav Bread").unwrap().total), "5");
    assert_eq!(format_total(totals.get("Puri Shells").unwrap().total), "16");
}
