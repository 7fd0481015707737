use crate::models::{Category, Item};
use crate::parser::classify::parse_price;
use crate::parser::headings::{HeadingLevel, HeadingToken};
use crate::parser::slug::slugify;

/// Russian titles for the category headings the site currently shows.
/// Categories without an entry keep their Turkish label as the title.
const CATEGORY_TITLES_RU: &[(&str, &str)] = &[
    ("SICAK İÇECEK", "Горячие напитки"),
    ("PİZZA VE PİDELER", "Пицца и пиде"),
    ("UNLU MAMÜLLER", "Выпечка"),
    ("KAHVALTILIKLAR", "Завтраки"),
];

fn title_for(label: &str) -> String {
    CATEGORY_TITLES_RU
        .iter()
        .find(|(tr, _)| *tr == label)
        .map(|(_, ru)| (*ru).to_string())
        .unwrap_or_else(|| label.to_string())
}

/// Buffet walk state.
///
/// Here the level is the structure: h4 opens a category, h5 names an item,
/// h6 carries its `Fiyatı:` price. Orphan price lines and unpriced labels are
/// dropped the same way the canteen walk drops them.
#[derive(Debug, Default)]
pub struct BuffetWalk {
    categories: Vec<Category>,
    current: Option<Category>,
    pending_item: Option<String>,
}

impl BuffetWalk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: &HeadingToken) {
        match token.level {
            HeadingLevel::H4 => {
                if let Some(done) = self.current.take() {
                    self.categories.push(done);
                }
                self.current = Some(Category {
                    id: slugify(&token.text),
                    title: title_for(&token.text),
                    items: Vec::new(),
                });
                self.pending_item = None;
            }
            HeadingLevel::H6 => {
                let Some(category) = self.current.as_mut() else {
                    return;
                };
                let Some(name) = self.pending_item.as_ref() else {
                    return;
                };
                // A malformed annotation leaves the pending name in place;
                // the next well-formed price line still completes the item.
                let Some(price) = parse_price(&token.text) else {
                    return;
                };
                category.items.push(Item {
                    id: slugify(name),
                    name: name.clone(),
                    price,
                });
                self.pending_item = None;
            }
            HeadingLevel::H5 => {
                if self.current.is_some() {
                    self.pending_item = Some(token.text.clone());
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Category> {
        if let Some(done) = self.current.take() {
            self.categories.push(done);
        }
        self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(level: HeadingLevel, text: &str) -> HeadingToken {
        HeadingToken {
            level,
            text: text.to_string(),
        }
    }

    fn h4(text: &str) -> HeadingToken {
        token(HeadingLevel::H4, text)
    }

    fn h5(text: &str) -> HeadingToken {
        token(HeadingLevel::H5, text)
    }

    fn h6(text: &str) -> HeadingToken {
        token(HeadingLevel::H6, text)
    }

    fn run(tokens: &[HeadingToken]) -> Vec<Category> {
        let mut walk = BuffetWalk::new();
        for t in tokens {
            walk.push(t);
        }
        walk.finish()
    }

    #[test]
    fn category_with_priced_item() {
        let categories = run(&[h4("SICAK İÇECEK"), h5("Çay"), h6("Fiyatı: 18 som")]);
        assert_eq!(categories.len(), 1);
        let cat = &categories[0];
        assert_eq!(cat.id, "sicak_icecek");
        assert_eq!(cat.title, "Горячие напитки");
        assert_eq!(cat.items.len(), 1);
        assert_eq!(cat.items[0].id, "cay");
        assert_eq!(cat.items[0].name, "Çay");
        assert_eq!(cat.items[0].price, 18);
    }

    #[test]
    fn unknown_category_keeps_turkish_title() {
        let categories = run(&[h4("TATLILAR"), h5("Baklava"), h6("Fiyatı: 120")]);
        assert_eq!(categories[0].id, "tatlilar");
        assert_eq!(categories[0].title, "TATLILAR");
    }

    #[test]
    fn price_without_open_category_ignored() {
        let categories = run(&[h6("Fiyatı: 18"), h5("Çay")]);
        assert!(categories.is_empty());
    }

    #[test]
    fn price_without_pending_item_ignored() {
        let categories = run(&[h4("SICAK İÇECEK"), h6("Fiyatı: 18")]);
        assert_eq!(categories.len(), 1);
        assert!(categories[0].items.is_empty());
    }

    #[test]
    fn malformed_price_keeps_pending_item() {
        let categories = run(&[
            h4("SICAK İÇECEK"),
            h5("Çay"),
            h6("fiyat bilgisi yok"),
            h6("Fiyatı: 18"),
        ]);
        assert_eq!(categories[0].items.len(), 1);
        assert_eq!(categories[0].items[0].price, 18);
    }

    #[test]
    fn second_label_overwrites_unpriced_first() {
        let categories = run(&[
            h4("SICAK İÇECEK"),
            h5("Çay"),
            h5("Kahve"),
            h6("Fiyatı: 40"),
        ]);
        let items = &categories[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Kahve");
    }

    #[test]
    fn label_outside_any_category_ignored() {
        let categories = run(&[h5("Çay"), h4("SICAK İÇECEK"), h6("Fiyatı: 18")]);
        assert_eq!(categories.len(), 1);
        assert!(categories[0].items.is_empty());
    }

    #[test]
    fn encounter_order_preserved_not_sorted() {
        let categories = run(&[
            h4("UNLU MAMÜLLER"),
            h5("Poğaça"),
            h6("Fiyatı: 25"),
            h4("KAHVALTILIKLAR"),
            h5("Menemen"),
            h6("Fiyatı: 90"),
        ]);
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        // document order, even though it is not alphabetical
        assert_eq!(ids, vec!["unlu_mamuller", "kahvaltiliklar"]);
    }

    #[test]
    fn trailing_open_category_finalized() {
        let categories = run(&[
            h4("SICAK İÇECEK"),
            h5("Çay"),
            h6("Fiyatı: 18"),
            h4("UNLU MAMÜLLER"),
        ]);
        assert_eq!(categories.len(), 2);
        assert!(categories[1].items.is_empty());
    }

    #[test]
    fn item_ids_may_repeat_across_categories() {
        let categories = run(&[
            h4("SICAK İÇECEK"),
            h5("Çay"),
            h6("Fiyatı: 18"),
            h4("KAHVALTILIKLAR"),
            h5("Çay"),
            h6("Fiyatı: 20"),
        ]);
        assert_eq!(categories[0].items[0].id, "cay");
        assert_eq!(categories[1].items[0].id, "cay");
        assert_eq!(categories[1].items[0].price, 20);
    }
}
