use chrono::{DateTime, Duration, Utc};
use nb_core::{Error, NewsItem, Result};
use tracing::{debug, info};

/// Entries older than this are dropped.
const RECENCY_WINDOW_HOURS: i64 = 24;

/// Parse raw feed bytes into news items. Entries without a parseable
/// publish timestamp are skipped; missing titles or links fall back to
/// empty strings rather than dropping the entry.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<NewsItem>> {
    let feed = feed_rs::parser::parse(bytes).map_err(|e| Error::Feed(e.to_string()))?;
    let mut items = Vec::new();
    for entry in feed.entries {
        let Some(published_at) = entry.published else {
            debug!("Skipping entry without a publish timestamp: {}", entry.id);
            continue;
        };
        items.push(NewsItem {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default(),
            published_at,
        });
    }
    Ok(items)
}

/// Keep only items published within the recency window ending at `now`.
pub fn filter_recent(items: Vec<NewsItem>, now: DateTime<Utc>) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter(|item| now - item.published_at < Duration::hours(RECENCY_WINDOW_HOURS))
        .collect()
}

/// Fetch one feed and return its items from the last 24 hours.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<Vec<NewsItem>> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(filter_recent(parse_feed(&bytes)?, Utc::now()))
}

/// Fetch every configured feed in order and concatenate the results.
/// The first failing feed aborts the whole run.
pub async fn fetch_all(client: &reqwest::Client, urls: &[String]) -> Result<Vec<NewsItem>> {
    let mut all_items = Vec::new();
    for url in urls {
        let items = fetch_feed(client, url).await?;
        info!("📰 {}: {} recent items", url, items.len());
        all_items.extend(items);
    }
    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rss_feed(items: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rss version=\"2.0\"><channel><title>test feed</title>{}</channel></rss>",
            items
        )
    }

    fn rss_item(title: &str, link: &str, pub_date: Option<DateTime<Utc>>) -> String {
        let date = pub_date
            .map(|d| format!("<pubDate>{}</pubDate>", d.to_rfc2822()))
            .unwrap_or_default();
        format!(
            "<item><title>{}</title><link>{}</link>{}</item>",
            title, link, date
        )
    }

    #[test]
    fn test_parse_skips_entries_without_timestamp() {
        let now = Utc::now();
        let xml = rss_feed(&format!(
            "{}{}",
            rss_item("dated", "http://example.com/a", Some(now)),
            rss_item("undated", "http://example.com/b", None),
        ));

        let items = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "dated");
        assert_eq!(items[0].link, "http://example.com/a");
    }

    #[test]
    fn test_filter_recent_window() {
        let now = Utc::now();
        let item = |hours_ago: i64| NewsItem {
            title: format!("{}h ago", hours_ago),
            link: "http://example.com".to_string(),
            published_at: now - Duration::hours(hours_ago),
        };

        let kept = filter_recent(vec![item(1), item(23), item(24), item(48)], now);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "1h ago");
        assert_eq!(kept[1].title, "23h ago");
    }

    #[test]
    fn test_parse_and_filter_end_to_end() {
        let now = Utc::now();
        let xml = rss_feed(&format!(
            "{}{}",
            rss_item("fresh", "http://example.com/fresh", Some(now - Duration::hours(1))),
            rss_item("stale", "http://example.com/stale", Some(now - Duration::hours(25))),
        ));

        let items = filter_recent(parse_feed(xml.as_bytes()).unwrap(), now);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "fresh");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_feed(b"not a feed at all").is_err());
    }
}
