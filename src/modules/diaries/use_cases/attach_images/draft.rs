// Client-side upload draft; `remove` is driven by the client's image strip.

use serde::{Deserialize, Serialize};

/// Image URLs attached to an entry that has not been published yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDraft {
    urls: Vec<String>,
}

impl ImageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn extend(&mut self, urls: impl IntoIterator<Item = String>) {
        self.urls.extend(urls);
    }

    /// Drops the pending URL at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.urls.len()).then(|| self.urls.remove(index))
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}
