//! Resource search generator
//!
//! Produces a fixed set of resource suggestions for a topic. Nothing is fetched:
//! each result is a link to a third-party search page for the topic.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::{ResourceKind, SavedItem};

/// Study level appended to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Parse a `<select>` value; anything unknown is beginner
    pub fn from_label(s: &str) -> Self {
        match s {
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Beginner,
        }
    }
}

/// A validated search waiting for its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub level: Level,
}

/// One generated suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub kind: ResourceKind,
    pub title: String,
    pub desc: String,
    pub link: String,
}

impl SearchResult {
    pub fn into_saved(self, now: DateTime<Utc>) -> SavedItem {
        SavedItem {
            title: self.title,
            link: self.link,
            desc: self.desc,
            icon: self.kind,
            saved_at: now.timestamp_millis(),
        }
    }
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}

/// Build the five suggestions for a request, one per resource kind.
pub fn generate(request: &SearchRequest) -> Vec<SearchResult> {
    let query = request.query.trim();
    let level = request.level;
    let topic = encode(&format!("{} {}", query, level.as_str()));

    ResourceKind::ALL
        .iter()
        .map(|&kind| {
            let (title, desc, link) = match kind {
                ResourceKind::Video => (
                    format!("{} video lessons", query),
                    format!("{} walkthroughs and lectures on YouTube", level.label()),
                    format!("https://www.youtube.com/results?search_query={}{}", topic, encode(" tutorial")),
                ),
                ResourceKind::Pdf => (
                    format!("{} notes (PDF)", query),
                    "Lecture notes and handouts you can download".to_string(),
                    format!("https://www.google.com/search?q={}{}", topic, encode(" filetype:pdf")),
                ),
                ResourceKind::Practice => (
                    format!("{} practice problems", query),
                    format!("{} exercises with worked solutions", level.label()),
                    format!("https://www.google.com/search?q={}{}", topic, encode(" practice problems")),
                ),
                ResourceKind::Book => (
                    format!("Books on {}", query),
                    "Textbooks and references".to_string(),
                    format!("https://www.google.com/search?tbm=bks&q={}", topic),
                ),
                ResourceKind::Community => (
                    format!("{} discussions", query),
                    "Questions and study tips from other learners".to_string(),
                    format!("https://www.reddit.com/search/?q={}", encode(query)),
                ),
            };
            SearchResult { kind, title, desc, link }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn request(query: &str, level: Level) -> SearchRequest {
        SearchRequest { query: query.to_string(), level }
    }

    #[test]
    fn test_generates_one_result_per_kind() {
        let results = generate(&request("Organic Chemistry", Level::Intermediate));
        assert_eq!(results.len(), 5);
        let kinds: HashSet<_> = results.iter().map(|r| r.kind).collect();
        assert_eq!(kinds.len(), 5);
        let links: HashSet<_> = results.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(links.len(), 5);
    }

    #[test]
    fn test_links_are_encoded() {
        let results = generate(&request("C++ & pointers", Level::Advanced));
        let video = &results[0];
        assert_eq!(video.kind, ResourceKind::Video);
        assert!(video.link.starts_with("https://www.youtube.com/results?search_query=C%2B%2B%20%26%20pointers%20advanced"));
        assert!(results.iter().all(|r| !r.link.contains(' ')));
    }

    #[test]
    fn test_level_labels_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_label(level.as_str()), level);
        }
        assert_eq!(Level::from_label("expert"), Level::Beginner);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate(&request("Algebra", Level::Beginner));
        let b = generate(&request("Algebra", Level::Beginner));
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_saved_keeps_link_as_identity() {
        let result = generate(&request("Algebra", Level::Beginner)).remove(3);
        let link = result.link.clone();
        let saved = result.into_saved(Utc::now());
        assert_eq!(saved.link, link);
        assert_eq!(saved.icon, ResourceKind::Book);
    }
}
