//! Bounded image byte-cache.
//!
//! [`ImageStore`] is a presentation-layer collaborator: it fetches raw
//! image bytes by URL and keeps the most recently used entries, evicting
//! the oldest once capacity is reached. The section resolver never touches
//! it.

use std::collections::HashMap;

use bytes::Bytes;
use reqwest::Url;
use tracing::debug;

/// Default number of cached images.
pub const DEFAULT_IMAGE_CAPACITY: usize = 50;

/// LRU cache of image bytes keyed by URL.
pub struct ImageStore {
    client: reqwest::Client,
    capacity: usize,
    entries: HashMap<Url, Bytes>,
    /// Cached URLs, most recently used first
    recency: Vec<Url>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_IMAGE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            capacity,
            entries: HashMap::new(),
            recency: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.entries.contains_key(url)
    }

    /// Image bytes for a URL, fetching and caching them on a miss.
    pub async fn get(&mut self, url: &Url) -> Result<Bytes, reqwest::Error> {
        if let Some(bytes) = self.cached(url) {
            return Ok(bytes);
        }
        debug!(%url, "fetching image");
        let response = self.client.get(url.clone()).send().await?;
        let bytes = response.bytes().await?;
        self.put(url.clone(), bytes.clone());
        Ok(bytes)
    }

    /// Cached bytes for a URL, promoting the entry to most recent.
    pub fn cached(&mut self, url: &Url) -> Option<Bytes> {
        let bytes = self.entries.get(url)?.clone();
        self.touch(url);
        Some(bytes)
    }

    /// Insert bytes for a URL, evicting the least recently used entries
    /// past capacity.
    pub fn put(&mut self, url: Url, bytes: Bytes) {
        self.entries.insert(url.clone(), bytes);
        self.touch(&url);
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.recency.pop() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    fn touch(&mut self, url: &Url) {
        self.recency.retain(|u| u != url);
        self.recency.insert(0, url.clone());
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}
