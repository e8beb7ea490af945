use std::fs::File;
use std::io::Write;
use std::path::Path;

use nb_core::{Result, TranslatedNewsItem};

pub const FIELD_SEPARATOR: &str = " | ";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One knowledge-file record: original title, translated title, link,
/// publish time in UTC.
pub fn format_line(item: &TranslatedNewsItem) -> String {
    let published = item.item.published_at.format(TIMESTAMP_FORMAT).to_string();
    [
        item.item.title.as_str(),
        item.translated_title.as_str(),
        item.item.link.as_str(),
        published.as_str(),
    ]
    .join(FIELD_SEPARATOR)
}

/// Write the knowledge file, one line per item in input order. An existing
/// file at `path` is truncated, never appended to.
pub fn write_knowledge_file(path: &Path, items: &[TranslatedNewsItem]) -> Result<()> {
    let mut file = File::create(path)?;
    for item in items {
        writeln!(file, "{}", format_line(item))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nb_core::NewsItem;

    fn item(title: &str, translated: &str) -> TranslatedNewsItem {
        TranslatedNewsItem {
            item: NewsItem {
                title: title.to_string(),
                link: "http://example.com/a".to_string(),
                published_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
            },
            translated_title: translated.to_string(),
        }
    }

    #[test]
    fn test_line_format() {
        let line = format_line(&item("สวัสดี", "Hello"));
        assert_eq!(
            line,
            "สวัสดี | Hello | http://example.com/a | 2026-08-30 12:00:00"
        );
    }

    #[test]
    fn test_one_line_per_item_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news_titles.txt");

        let items = vec![item("a", "A"), item("b", "B"), item("c", "C")];
        write_knowledge_file(&path, &items).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("a | A"));
        assert!(lines[2].starts_with("c | C"));
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news_titles.txt");

        write_knowledge_file(&path, &[item("a", "A"), item("b", "B")]).unwrap();
        write_knowledge_file(&path, &[item("c", "C")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("c | C"));
    }
}
