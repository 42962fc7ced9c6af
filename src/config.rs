/// Compile-time settings for the scroll tracker and the article feed

use url::Url;

/// Thresholds for the header's scroll tracking, in CSS pixels
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Offset above which the header switches to its compact style
    pub compact_threshold: u32,
    /// Offsets below this always show the navigation bar
    pub top_dead_zone: u32,
    /// A section becomes active this far before reaching the viewport top
    pub look_ahead: f64,
    /// Minimum gap between two handled scroll events
    pub throttle_ms: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            compact_threshold: 20,
            top_dead_zone: 10,
            look_ahead: 120.0,
            throttle_ms: 16.0,
        }
    }
}

const RSS2JSON_API: &str = "https://api.rss2json.com/v1/api.json";
const MEDIUM_FEED: &str = "https://medium.com/feed/@thavinduwrites";

/// Where articles come from and how they are displayed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub endpoint: String,
    pub fallback_image: String,
    pub excerpt_words: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            endpoint: feed_endpoint(RSS2JSON_API, MEDIUM_FEED),
            fallback_image: "https://via.placeholder.com/600x400/0891b2/ffffff?text=Article".to_string(),
            excerpt_words: 50,
        }
    }
}

/// Build the conversion endpoint URL for an RSS feed
///
/// Falls back to plain concatenation if the API base does not parse,
/// which only happens if the constant above is edited badly.
pub fn feed_endpoint(api: &str, rss_url: &str) -> String {
    match Url::parse_with_params(api, &[("rss_url", rss_url)]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::warn!("Invalid feed API base {}: {}", api, e);
            format!("{}?rss_url={}", api, rss_url)
        }
    }
}
