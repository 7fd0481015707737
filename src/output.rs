use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::models::{BuffetMeta, KantinMeta};

pub const TIMEZONE: &str = "Asia/Bishkek";
pub const CURRENCY: &str = "KGS";
pub const KANTIN_SOURCE: &str = "manas_kantin";

/// Current UTC time as RFC 3339 with seconds precision,
/// e.g. `2026-02-07T09:30:00Z`.
pub fn now_utc_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn kantin_meta() -> KantinMeta {
    KantinMeta {
        timezone: TIMEZONE.to_string(),
        source: KANTIN_SOURCE.to_string(),
        last_updated: now_utc_rfc3339(),
    }
}

pub fn buffet_meta() -> BuffetMeta {
    BuffetMeta {
        timezone: TIMEZONE.to_string(),
        currency: CURRENCY.to_string(),
        last_updated: now_utc_rfc3339(),
    }
}

/// Pretty-print `value` as JSON to `path`, creating parent directories as
/// needed. Field order follows struct declaration order, so documents stay
/// diff-friendly across runs.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let ts = now_utc_rfc3339();
        // 2026-02-07T09:30:00Z
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }

    #[test]
    fn meta_constants() {
        let kantin = kantin_meta();
        assert_eq!(kantin.timezone, "Asia/Bishkek");
        assert_eq!(kantin.source, "manas_kantin");

        let buffet = buffet_meta();
        assert_eq!(buffet.timezone, "Asia/Bishkek");
        assert_eq!(buffet.currency, "KGS");
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = std::env::temp_dir().join("manas_scraper_write_json_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("out.json");

        write_json(&path, &serde_json::json!({ "ok": true })).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"ok\": true"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
