use std::collections::BTreeMap;

use crate::models::{Food, FoodName, MenuDay};
use crate::parser::classify::{parse_date, parse_kcal};
use crate::parser::headings::HeadingToken;
use crate::parser::slug::slugify;

/// Canteen walk state.
///
/// The page is a flat run of h5/h6 headings: a date line opens a day, a plain
/// label names a food, and the following `Kalori:` line completes it. Lines
/// arriving out of that order are dropped, never errors; a label with no
/// calorie line after it is overwritten by the next label.
#[derive(Debug, Default)]
pub struct KantinWalk {
    foods: BTreeMap<String, Food>,
    menus: BTreeMap<String, Vec<String>>,
    current_date: Option<String>,
    pending_food: Option<String>,
}

impl KantinWalk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: &HeadingToken) {
        let text = token.text.as_str();

        if let Some(date) = parse_date(text) {
            self.current_date = Some(date);
            self.pending_food = None;
            return;
        }

        if let Some(kcal) = parse_kcal(text) {
            let Some(date) = self.current_date.clone() else {
                return;
            };
            let Some(name) = self.pending_food.take() else {
                return;
            };

            let id = self.resolve_id(&name, kcal);
            self.foods.insert(
                id.clone(),
                Food {
                    id: id.clone(),
                    name: FoodName::untranslated(&name),
                    calories_kcal: kcal,
                },
            );
            self.menus.entry(date).or_default().push(id);
            return;
        }

        if self.current_date.is_some() {
            self.pending_food = Some(text.to_string());
        }
    }

    /// Slug collisions keep appending `_2` until the id is free or the
    /// existing entry is the same (name, calories) pair, which is reused.
    fn resolve_id(&self, name: &str, kcal: u32) -> String {
        let mut id = slugify(name);
        loop {
            match self.foods.get(&id) {
                None => return id,
                Some(existing)
                    if existing.name.tr == name && existing.calories_kcal == kcal =>
                {
                    return id;
                }
                Some(_) => id.push_str("_2"),
            }
        }
    }

    /// Materialize the catalog (sorted by id) and the menu list (sorted by
    /// date); both maps are BTreeMaps, so the orderings come from iteration.
    pub fn finish(self) -> (Vec<Food>, Vec<MenuDay>) {
        let foods = self.foods.into_values().collect();
        let menus = self
            .menus
            .into_iter()
            .map(|(date, items)| MenuDay { date, items })
            .collect();
        (foods, menus)
    }
}
