// src/services/pager.rs

//! Cursor-paginated list fetching.
//!
//! List endpoints return one JSON array per page and advertise the next
//! page through a `Link: <url>; rel="next"` response header. The pager
//! follows those links until none is left and concatenates every page.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::utils::{next_link, redact_query, resolve};

/// A single page of a list response.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Raw JSON array
    pub body: String,
    /// `Link` header value, if any
    pub link: Option<String>,
}

/// Transport that retrieves one page of a list endpoint.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch `url` with the given query parameters appended.
    ///
    /// Any transport failure or non-success status is an error.
    async fn fetch_page(&self, url: &str, query: &[(String, String)]) -> Result<Page>;
}

/// `PageSource` backed by a reqwest client.
#[derive(Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str, query: &[(String, String)]) -> Result<Page> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let link = link_header(response.headers());
        let body = response.text().await?;

        Ok(Page { body, link })
    }
}

/// Combine every `Link` field of a response into one value.
///
/// A response may split the header over several lines, and values may
/// carry non-ASCII bytes; both must still yield the `next` entry.
pub(crate) fn link_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(LINK)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect();
    (!values.is_empty()).then(|| values.join(", "))
}

/// Follows continuation links across every page of a list endpoint.
#[derive(Clone)]
pub struct Pager {
    source: Arc<dyn PageSource>,
}

impl Pager {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self { source }
    }

    /// Fetch every item of a paginated collection, in page order.
    ///
    /// `query` is sent with the first request only: continuation links
    /// already carry the full query. Items are not de-duplicated. A failing
    /// page fails the whole fetch.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut params = query;
        let mut next = Some(url.to_string());

        while let Some(current) = next.take() {
            if !visited.insert(current.clone()) {
                return Err(AppError::fetch(
                    redact_query(&current),
                    "continuation link points to an already fetched page",
                ));
            }

            log::debug!("GET {} (page {})", redact_query(&current), visited.len());
            let page = self.source.fetch_page(&current, params).await?;
            params = &[];

            let batch: Vec<T> = serde_json::from_str(&page.body)
                .map_err(|e| AppError::fetch(redact_query(&current), e))?;
            items.extend(batch);

            next = page
                .link
                .as_deref()
                .and_then(next_link)
                .map(|href| resolve(&current, &href).unwrap_or(href));
        }

        Ok(items)
    }
}
