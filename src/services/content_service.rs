use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::errors::{AppError, AppResult};

/// Fetches a URL and extracts its main readable content. Behind a trait so
/// handlers and tests can swap in a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch_body(&self, url: &str) -> AppResult<String>;
}

pub struct HttpContentFetcher {
    client: reqwest::Client,
}

impl HttpContentFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .user_agent("dokhae-trainer/0.1")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }
}

impl Default for HttpContentFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch_body(&self, url: &str) -> AppResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Acquisition(format!("fetch failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Acquisition(format!("fetch failed: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Acquisition(format!("could not read response body: {e}")))?;

        extract_main_content(&html)
            .ok_or_else(|| AppError::Acquisition("no readable content extracted".to_string()))
    }
}

/// Pull the main body text out of an HTML page, skipping navigation and
/// boilerplate. Prefers paragraphs inside `<article>`, then `<main>`, then
/// anywhere in the body.
pub fn extract_main_content(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for scope in ["article p", "main p", "body p"] {
        let selector = Selector::parse(scope).ok()?;
        let text = paragraph_text(&document, &selector);
        if !text.is_empty() {
            return Some(text);
        }
    }

    None
}

fn paragraph_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .map(|element| {
            element
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
