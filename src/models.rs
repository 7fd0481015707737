use serde::Serialize;

// ── Kantin output ──

/// The site publishes Turkish only; until translations appear there the same
/// string is carried in all three language fields.
#[derive(Debug, Clone, Serialize)]
pub struct FoodName {
    pub tr: String,
    pub ru: String,
    pub en: String,
}

impl FoodName {
    pub fn untranslated(name: &str) -> Self {
        Self {
            tr: name.to_string(),
            ru: name.to_string(),
            en: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Food {
    pub id: String,
    pub name: FoodName,
    #[serde(rename = "caloriesKcal")]
    pub calories_kcal: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuDay {
    /// YYYY-MM-DD
    pub date: String,
    /// Food ids, one per occurrence, in page order.
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KantinMeta {
    pub timezone: String,
    pub source: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct KantinDoc {
    pub foods: Vec<Food>,
    pub menus: Vec<MenuDay>,
    pub meta: KantinMeta,
}

// ── Buffet output ──

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuffetMeta {
    pub timezone: String,
    pub currency: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct BuffetDoc {
    pub categories: Vec<Category>,
    pub meta: BuffetMeta,
}
