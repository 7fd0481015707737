/// Turkish text → ASCII slug, safe for ids.
///
/// Total and pure: the same input always yields the same slug, and the result
/// is non-empty `[a-z0-9_]` with no leading, trailing, or doubled
/// underscores. Falls back to `"item"` when nothing survives.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut prev_underscore = false;

    for c in lowered.chars() {
        let c = match c {
            'ç' => 'c',
            'ğ' => 'g',
            'ı' => 'i',
            'ö' => 'o',
            'ş' => 's',
            'ü' => 'u',
            // `İ`.to_lowercase() is "i\u{307}"; some encodings also ship the
            // combining dot directly
            '\u{307}' => continue,
            '-' | '/' => ' ',
            '\'' | '’' => continue,
            c => c,
        };

        match c {
            'a'..='z' | '0'..='9' => {
                out.push(c);
                prev_underscore = false;
            }
            ' ' | '_' => {
                if !prev_underscore {
                    out.push('_');
                    prev_underscore = true;
                }
            }
            // other punctuation dropped
            _ => {}
        }
    }

    let out = out.trim_matches('_');
    if out.is_empty() {
        "item".to_string()
    } else {
        out.to_string()
    }
}
