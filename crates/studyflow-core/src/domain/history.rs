//! Search History
//!
//! Most-recent-first list of past queries, deduplicated ignoring case.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_CAP: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query at the front, dropping an earlier case-insensitive
    /// match and anything beyond `cap`. Blank queries are ignored.
    pub fn record(&mut self, query: &str, cap: usize) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let lowered = query.to_lowercase();
        self.0.retain(|past| past.to_lowercase() != lowered);
        self.0.insert(0, query.to_string());
        self.0.truncate(cap);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
