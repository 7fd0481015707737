use std::sync::LazyLock;

use regex::Regex;

// Patterns carried verbatim from the site's markup. The price suffix accepts
// the dotted and dotless lowercase i; `(?i)` is simple case folding, so
// all-caps forms written with the Turkish capital İ stay unmatched.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{2})\.(\d{2})\.(\d{4})\b").unwrap());
static KCAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Kalori:\s*([0-9]+)").unwrap());
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Fiyat[ıi]:\s*([0-9]+)").unwrap());

/// Leading `DD.MM.YYYY` (trailing weekday name and the like allowed),
/// converted to ISO `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Option<String> {
    let caps = DATE_RE.captures(text)?;
    Some(format!("{}-{}-{}", &caps[3], &caps[2], &caps[1]))
}

/// `Kalori: <n>` anywhere in the line, any ASCII case.
pub fn parse_kcal(text: &str) -> Option<u32> {
    KCAL_RE.captures(text)?[1].parse().ok()
}

/// `Fiyatı: <n>` / `Fiyati: <n>`. A capture that fails to parse as a number
/// counts as a non-match.
pub fn parse_price(text: &str) -> Option<u32> {
    PRICE_RE.captures(text)?[1].parse().ok()
}
