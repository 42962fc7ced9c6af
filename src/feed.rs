/// Fetching the article feed from the browser

use crate::article_data::{ArticleRecord, FeedResponse};
use crate::error::SiteError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch articles; every failure is logged and reads as an empty feed
pub async fn fetch_articles(endpoint: &str) -> Vec<ArticleRecord> {
    match request_feed(endpoint).await {
        Ok(articles) => {
            log::info!("Loaded {} articles", articles.len());
            articles
        }
        Err(e) => {
            log::error!("Error fetching Medium articles: {}", e);
            Vec::new()
        }
    }
}

async fn request_feed(endpoint: &str) -> Result<Vec<ArticleRecord>, SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;

    let response: Response = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(SiteError::js)?
        .dyn_into()
        .map_err(SiteError::js)?;

    if !response.ok() {
        return Err(SiteError::Status(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(SiteError::js)?)
        .await
        .map_err(SiteError::js)?;

    let feed: FeedResponse = serde_wasm_bindgen::from_value(body)?;
    Ok(feed.into_articles())
}
