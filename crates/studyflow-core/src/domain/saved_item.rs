//! Saved Item Entity
//!
//! A resource kept in the library. The link is the identity.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Resource type produced by the search generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Video,
    Pdf,
    Practice,
    Book,
    Community,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Video,
        ResourceKind::Pdf,
        ResourceKind::Practice,
        ResourceKind::Book,
        ResourceKind::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Pdf => "pdf",
            ResourceKind::Practice => "practice",
            ResourceKind::Book => "book",
            ResourceKind::Community => "community",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Video => "🎥",
            ResourceKind::Pdf => "📄",
            ResourceKind::Practice => "✏️",
            ResourceKind::Book => "📚",
            ResourceKind::Community => "💬",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub icon: ResourceKind,
    /// Epoch milliseconds
    pub saved_at: i64,
}

impl Entity for SavedItem {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.link.clone()
    }
}
