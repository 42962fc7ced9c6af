/// Article operations: excerpt, sanitizing, image resolution
use crate::article_data::ArticleRecord;
use ammonia::Builder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use url::Url;

pub const ELLIPSIS: &str = "...";

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*?\bsrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .expect("valid img regex")
});

/// First `max_words` whitespace-separated tokens of the body, with an
/// ellipsis if anything was cut
pub fn derive_excerpt(body_html: &str, max_words: usize) -> String {
    let mut words = body_html.split_whitespace();
    let excerpt: Vec<&str> = words.by_ref().take(max_words).collect();
    let truncated = words.next().is_some();

    let mut text = excerpt.join(" ");
    if truncated {
        text.push_str(ELLIPSIS);
    }
    text
}

/// Strip everything outside the article allow-list
///
/// Allowed: `p a strong b em i ul li`, and `href` on links (http, https,
/// mailto). Script and style elements are dropped along with their text.
pub fn sanitize(html: &str) -> String {
    Builder::empty()
        .tags(HashSet::from(["p", "a", "strong", "b", "em", "i", "ul", "li"]))
        .tag_attributes(HashMap::from([("a", HashSet::from(["href"]))]))
        .url_schemes(HashSet::from(["http", "https", "mailto"]))
        .clean_content_tags(HashSet::from(["script", "style"]))
        .link_rel(None)
        .clean(html)
        .to_string()
}

/// Pick the image shown for an article: thumbnail, then first `<img>` in the body, then `fallback`
pub fn resolve_image(article: &ArticleRecord, fallback: &str) -> String {
    article
        .thumbnail
        .as_deref()
        .and_then(absolute_url)
        .or_else(|| first_image(&article.body_html))
        .unwrap_or_else(|| fallback.to_string())
}

/// `src` of the first `<img>` whose source is an absolute URL
fn first_image(html: &str) -> Option<String> {
    IMG_SRC.captures_iter(html).find_map(|caps| {
        let src = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
        absolute_url(src.as_str())
    })
}

fn absolute_url(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    match Url::parse(candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url.to_string()),
        Ok(_) | Err(_) => None,
    }
}
