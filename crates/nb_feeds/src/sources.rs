/// Feeds polled when the user supplies none on the command line.
pub const DEFAULT_FEEDS: [&str; 5] = [
    "https://www.thairath.co.th/rss/news.xml",
    "https://www.matichon.co.th/feed",
    "https://www.khaosod.co.th/feed",
    "https://www.prachachat.net/feed",
    "https://workpointtoday.com/feed/",
];
