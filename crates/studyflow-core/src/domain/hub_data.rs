//! Study hub document: everything stored under the hub's storage key.

use serde::{Deserialize, Serialize};

use super::{Goal, SavedItem, SearchHistory};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HubData {
    pub saved: Vec<SavedItem>,
    pub goals: Vec<Goal>,
    pub history: SearchHistory,
}

impl HubData {
    pub fn is_saved(&self, link: &str) -> bool {
        self.saved.iter().any(|item| item.link == link)
    }
}
