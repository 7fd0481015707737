use scraper::{Html, Selector};

/// Heading depths the menu pages encode data in. Everything else on the page
/// (navigation, banners) lives outside h4–h6 and is never selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H4,
    H5,
    H6,
}

/// One heading element in document order, the only input the walks consume.
#[derive(Debug, Clone)]
pub struct HeadingToken {
    pub level: HeadingLevel,
    pub text: String,
}

/// Flatten a page into its ordered h4/h5/h6 stream.
///
/// Element text is the concatenation of descendant text nodes, trimmed;
/// headings whose text ends up empty are markup noise and are skipped.
pub fn heading_stream(html: &str) -> Vec<HeadingToken> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h4, h5, h6").unwrap();

    document
        .select(&selector)
        .filter_map(|element| {
            let level = match element.value().name() {
                "h4" => HeadingLevel::H4,
                "h5" => HeadingLevel::H5,
                _ => HeadingLevel::H6,
            };
            let text = element.text().collect::<String>().trim().to_string();
            if text.is_empty() {
                None
            } else {
                Some(HeadingToken { level, text })
            }
        })
        .collect()
}
