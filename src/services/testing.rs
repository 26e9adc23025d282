//! In-memory `PageSource` for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::services::{Page, PageSource};

type Request = (String, Vec<(String, String)>);

/// Serves canned pages by exact URL; unknown URLs fail like a 404.
///
/// Each fetch yields to the scheduler at least once so sibling fetches
/// interleave. In-flight fetches are counted and the high-water mark kept.
#[derive(Default)]
pub struct StaticPageSource {
    pages: HashMap<String, Page>,
    delays: HashMap<String, usize>,
    requests: Mutex<Vec<Request>>,
    completed: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl StaticPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str, link: Option<&str>) -> Self {
        self.pages.insert(
            url.to_string(),
            Page {
                body: body.to_string(),
                link: link.map(str::to_string),
            },
        );
        self
    }

    /// Hold fetches of `url` for `yields` scheduler turns.
    pub fn delay(mut self, url: &str, yields: usize) -> Self {
        self.delays.insert(url.to_string(), yields);
        self
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs of finished fetches, in completion order.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    /// Most fetches ever in flight at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn fetch_page(&self, url: &str, query: &[(String, String)]) -> Result<Page> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), query.to_vec()));

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        let yields = self.delays.get(url).copied().unwrap_or(1).max(1);
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.lock().unwrap().push(url.to_string());

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::fetch(url, "404 Not Found"))
    }
}
