pub mod buffet;
pub mod classify;
pub mod headings;
pub mod kantin;
pub mod slug;

use crate::models::{Category, Food, MenuDay};
use buffet::BuffetWalk;
use headings::{heading_stream, HeadingLevel};
use kantin::KantinWalk;

/// Kantin pipeline: HTML → h5/h6 heading stream → date/label/calorie walk.
///
/// The site is inconsistent about h5 vs h6 for labels and annotations, so
/// both levels go through the same text-driven walk; h4 headings on this
/// page are section chrome and are excluded.
pub fn process_kantin(html: &str) -> (Vec<Food>, Vec<MenuDay>) {
    let mut walk = KantinWalk::new();
    for token in heading_stream(html)
        .iter()
        .filter(|t| t.level != HeadingLevel::H4)
    {
        walk.push(token);
    }
    walk.finish()
}

/// Buffet pipeline: HTML → h4/h5/h6 heading stream → category/item/price walk.
pub fn process_buffet(html: &str) -> Vec<Category> {
    let mut walk = BuffetWalk::new();
    for token in &heading_stream(html) {
        walk.push(token);
    }
    walk.finish()
}

// ── Tests ──
