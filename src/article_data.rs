/// Data structures for the Medium article feed
use crate::error::SiteError;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Raw rss2json response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

/// One item of the rss2json response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pub_date: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// An article ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    pub title: String,
    pub published_at: Option<NaiveDateTime>,
    pub body_html: String,
    pub link: String,
    pub thumbnail: Option<String>,
    pub categories: Vec<String>,
}

impl From<FeedItem> for ArticleRecord {
    fn from(item: FeedItem) -> Self {
        let thumbnail = item
            .thumbnail
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        ArticleRecord {
            published_at: parse_pub_date(&item.pub_date),
            title: item.title,
            body_html: item.description,
            link: item.link,
            thumbnail,
            categories: item.categories,
        }
    }
}

impl ArticleRecord {
    /// Date in the short "Wed May 01 2024" form, empty if the feed date was unreadable
    pub fn published_label(&self) -> String {
        self.published_at
            .map(|d| d.format("%a %b %d %Y").to_string())
            .unwrap_or_default()
    }

    /// List key for position `index`; the link alone can be empty or repeated
    pub fn display_key(&self, index: usize) -> String {
        format!("{}-{}", index, self.link)
    }
}

impl FeedResponse {
    /// Items from a successful response; an error status yields nothing
    pub fn into_articles(self) -> Vec<ArticleRecord> {
        match self.status.as_deref() {
            Some("ok") | None => self.items.into_iter().map(ArticleRecord::from).collect(),
            Some(status) => {
                log::warn!(
                    "Feed returned status {}: {}",
                    status,
                    self.message.as_deref().unwrap_or("no message")
                );
                Vec::new()
            }
        }
    }
}

/// Parse an rss2json body into articles
pub fn parse_feed(json: &str) -> Result<Vec<ArticleRecord>, SiteError> {
    let response: FeedResponse = serde_json::from_str(json)?;
    Ok(response.into_articles())
}

/// rss2json uses "YYYY-MM-DD HH:MM:SS"; raw RSS dates are RFC 2822
fn parse_pub_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|d| d.naive_utc()))
}

/// Where the article pipeline is for the current page view
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    NotStarted,
    Loading,
    Loaded(Vec<ArticleRecord>),
    LoadedEmpty,
}

impl FeedState {
    pub fn from_articles(articles: Vec<ArticleRecord>) -> FeedState {
        if articles.is_empty() {
            FeedState::LoadedEmpty
        } else {
            FeedState::Loaded(articles)
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FeedState::Loaded(_) | FeedState::LoadedEmpty)
    }
}
