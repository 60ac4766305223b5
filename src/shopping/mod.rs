//! Shopping list aggregation.
//!
//! Merges the ingredients of the selected recipes by (name, unit), sums
//! quantities, promotes large totals to a bigger unit and sorts the result
//! in Finnish alphabetical order. The list is rebuilt from scratch on every
//! call; see [`Checklist`] for keeping check marks across rebuilds.

mod checklist;
mod collate;
mod promote;

pub use checklist::Checklist;
pub use collate::{collation_key, finnish_cmp};
pub use promote::{promote, Promotion, PROMOTIONS};

use log::debug;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{round2, Recipe, ShoppingItem};
use crate::units::{normalize_unit, PIECE};

/// Running totals for one (name, unit) bucket.
#[derive(Debug, Default)]
struct Tally {
    total: f64,
    /// At least one occurrence gave a quantity.
    specified: bool,
    /// At least one occurrence left the quantity out.
    unspecified: bool,
    recipes: BTreeSet<String>,
}

impl Tally {
    fn add(&mut self, amount: Option<f64>, recipe: &str) {
        match amount.filter(|a| a.is_finite()) {
            Some(amount) => {
                self.total += amount;
                self.specified = true;
            }
            None => self.unspecified = true,
        }
        if !recipe.is_empty() {
            self.recipes.insert(recipe.to_string());
        }
    }

    fn absorb(&mut self, other: Tally) {
        self.total += other.total;
        self.specified |= other.specified;
        self.unspecified |= other.unspecified;
        self.recipes.extend(other.recipes);
    }

    fn scaled(mut self, divisor: f64) -> Self {
        self.total /= divisor;
        self
    }

    fn amount(&self) -> Option<f64> {
        self.specified.then_some(self.total)
    }
}

/// All buckets sharing one normalized ingredient name.
#[derive(Debug, Default)]
struct NameGroup {
    /// Name as first written, used for display.
    display: String,
    units: BTreeMap<String, Tally>,
}

impl NameGroup {
    /// Fold unit-less occurrences into the piece bucket when the same
    /// ingredient also appears with an explicit unit.
    fn resolve_bare_amounts(&mut self) {
        if !self.units.keys().any(|unit| !unit.is_empty()) {
            return;
        }
        let Some(bare) = self.units.remove("") else {
            return;
        };
        if bare.specified && bare.total > 0.0 {
            debug!(
                "Counting unit-less '{}' ({}) as {}",
                self.display, bare.total, PIECE
            );
            self.units.entry(PIECE.to_string()).or_default().absorb(bare);
        } else {
            debug!("Dropping unit-less '{}' covered by other units", self.display);
        }
    }

    /// Walk the promotion table smallest unit first. A promoted bucket is
    /// folded into its target before the target is considered, so 150 ml
    /// next to 10 dl ends up as one litre line. Buckets that only exist
    /// because of a promotion are never promoted again.
    fn promote_buckets(&mut self) {
        let written: BTreeSet<String> = self.units.keys().cloned().collect();
        for step in PROMOTIONS {
            if !written.contains(step.from) {
                continue;
            }
            let Some(tally) = self.units.remove(step.from) else {
                continue;
            };
            match tally.amount() {
                Some(total) if total >= step.threshold => {
                    debug!(
                        "Promoted '{}' {} {} to {} {}",
                        self.display,
                        total,
                        step.from,
                        total / step.divisor,
                        step.to
                    );
                    self.units
                        .entry(step.to.to_string())
                        .or_default()
                        .absorb(tally.scaled(step.divisor));
                }
                _ => {
                    self.units.insert(step.from.to_string(), tally);
                }
            }
        }
    }

    fn into_items(mut self) -> Vec<ShoppingItem> {
        self.resolve_bare_amounts();
        self.promote_buckets();

        let display = self.display;
        self.units
            .into_iter()
            .filter_map(|(unit, tally)| {
                let amount = tally.amount().map(round2);
                if unit.is_empty() && amount == Some(0.0) {
                    debug!("Dropping zero placeholder '{}'", display);
                    return None;
                }
                Some(ShoppingItem {
                    name: display.clone(),
                    amount,
                    unit,
                    source_recipes: tally.recipes,
                })
            })
            .collect()
    }
}

/// Build the consolidated shopping list for a set of recipes.
///
/// Ingredients are merged by lower-cased name and canonical unit. Different
/// units of the same ingredient stay on separate lines. Missing or invalid
/// amounts count as zero and never fail the aggregation.
pub fn aggregate<'a, I>(recipes: I) -> Vec<ShoppingItem>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut groups: BTreeMap<String, NameGroup> = BTreeMap::new();
    let mut recipe_count = 0;

    for recipe in recipes {
        recipe_count += 1;
        let recipe_name = recipe.name.trim();
        for ingredient in &recipe.ingredients {
            let name = ingredient.name.trim();
            if name.is_empty() {
                continue;
            }

            let group = groups.entry(name.to_lowercase()).or_insert_with(|| NameGroup {
                display: name.to_string(),
                units: BTreeMap::new(),
            });
            group
                .units
                .entry(normalize_unit(&ingredient.unit))
                .or_default()
                .add(ingredient.amount, recipe_name);
        }
    }

    let mut items: Vec<ShoppingItem> = groups
        .into_values()
        .flat_map(NameGroup::into_items)
        .collect();
    items.sort_by(|a, b| {
        finnish_cmp(&a.name, &b.name).then_with(|| finnish_cmp(&a.unit, &b.unit))
    });

    debug!(
        "Aggregated {} recipes into {} shopping list lines",
        recipe_count,
        items.len()
    );
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn recipe(name: &str, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients,
            steps: Vec::new(),
        }
    }

    fn lines(items: &[ShoppingItem]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_sums_same_name_and_unit() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("Sokeri", Some(1.0), "dl")]),
            recipe("B", vec![Ingredient::new(" sokeri ", Some(2.5), "desilitraa")]),
        ]);
        assert_eq!(lines(&items), vec!["Sokeri: 3.5 dl"]);
        assert_eq!(
            items[0].source_recipes,
            BTreeSet::from(["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_different_units_stay_separate() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("sokeri", Some(200.0), "g")]),
            recipe("B", vec![Ingredient::new("sokeri", Some(1.0), "tl")]),
        ]);
        assert_eq!(lines(&items), vec!["sokeri: 200 g", "sokeri: 1 tl"]);
    }

    #[test]
    fn test_unitless_count_merges_into_pieces() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("kananmuna", Some(2.0), "")]),
            recipe("B", vec![Ingredient::new("kananmuna", Some(1.0), "kpl")]),
            recipe("C", vec![Ingredient::new("kananmuna", Some(50.0), "g")]),
        ]);
        assert_eq!(lines(&items), vec!["kananmuna: 50 g", "kananmuna: 3 kpl"]);
        assert_eq!(items[1].source_recipes.len(), 2);
    }

    #[test]
    fn test_unitless_alone_stays_unitless() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("sitruuna", Some(1.0), "")]),
            recipe("B", vec![Ingredient::new("sitruuna", Some(2.0), "")]),
        ]);
        assert_eq!(lines(&items), vec!["sitruuna: 3"]);
        assert_eq!(items[0].unit, "");
    }

    #[test]
    fn test_unspecified_unitless_absorbed_by_unit_line() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("suola", None, "")]),
            recipe("B", vec![Ingredient::new("suola", Some(1.0), "tl")]),
        ]);
        assert_eq!(lines(&items), vec!["suola: 1 tl"]);
    }

    #[test]
    fn test_unspecified_only_is_kept_without_amount() {
        let items = aggregate(&[recipe("A", vec![Ingredient::new("pippuri", None, "")])]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount, None);
        assert_eq!(lines(&items), vec!["pippuri"]);
    }

    #[test]
    fn test_zero_without_unit_is_dropped_but_zero_with_unit_kept() {
        let items = aggregate(&[recipe(
            "A",
            vec![
                Ingredient::new("vesi", Some(0.0), ""),
                Ingredient::new("voi", Some(0.0), "g"),
            ],
        )]);
        assert_eq!(lines(&items), vec!["voi: 0 g"]);
    }

    #[test]
    fn test_promotion_to_litres() {
        let milk = || recipe("A", vec![Ingredient::new("maito", Some(40.0), "dl")]);
        let items = aggregate(&[milk(), milk(), milk()]);
        assert_eq!(items[0].amount, Some(12.0));
        assert_eq!(items[0].unit, "l");
    }

    #[test]
    fn test_promotion_does_not_cascade() {
        let items = aggregate(&[recipe("A", vec![Ingredient::new("kerma", Some(1500.0), "ml")])]);
        assert_eq!(lines(&items), vec!["kerma: 15 dl"]);
    }

    #[test]
    fn test_promoted_line_merges_with_existing_unit() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("maito", Some(150.0), "ml")]),
            recipe("B", vec![Ingredient::new("maito", Some(2.0), "dl")]),
        ]);
        assert_eq!(lines(&items), vec!["maito: 3.5 dl"]);
    }

    #[test]
    fn test_promoted_millilitres_join_decilitres_before_their_promotion() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("maito", Some(150.0), "ml")]),
            recipe("B", vec![Ingredient::new("maito", Some(10.0), "dl")]),
        ]);
        assert_eq!(lines(&items), vec!["maito: 1.15 l"]);
        assert_eq!(items[0].source_recipes.len(), 2);

        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("maito", Some(950.0), "ml")]),
            recipe("B", vec![Ingredient::new("maito", Some(0.5), "dl")]),
        ]);
        assert_eq!(lines(&items), vec!["maito: 1 l"]);
    }

    #[test]
    fn test_small_millilitres_stay_separate() {
        let items = aggregate(&[
            recipe("A", vec![Ingredient::new("kerma", Some(50.0), "ml")]),
            recipe("B", vec![Ingredient::new("kerma", Some(2.0), "dl")]),
        ]);
        assert_eq!(lines(&items), vec!["kerma: 2 dl", "kerma: 50 ml"]);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let third = || recipe("A", vec![Ingredient::new("jauho", Some(1.0 / 3.0), "dl")]);
        let items = aggregate(&[third(), third()]);
        assert_eq!(items[0].amount, Some(0.67));
    }

    #[test]
    fn test_sorted_in_finnish_order() {
        let items = aggregate(&[recipe(
            "A",
            vec![
                Ingredient::new("öljy", Some(1.0), "rkl"),
                Ingredient::new("Appelsiini", Some(1.0), ""),
                Ingredient::new("ärtsoppa", Some(1.0), "tlk"),
                Ingredient::new("voi", Some(10.0), "g"),
            ],
        )]);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Appelsiini", "voi", "ärtsoppa", "öljy"]);
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let items = aggregate(&[recipe("A", vec![Ingredient::new("  ", Some(3.0), "dl")])]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let recipes: Vec<Recipe> = Vec::new();
        assert!(aggregate(&recipes).is_empty());
    }
}
