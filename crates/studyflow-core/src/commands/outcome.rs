//! Command results

use crate::search::SearchRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

/// Transient message for the user (a toast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, message: message.into() }
    }
}

/// What a dispatched command did
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// The store was mutated and must be persisted
    pub changed: bool,
    pub notice: Option<Notice>,
    /// Set by a search command: results should be generated for this request
    pub search: Option<SearchRequest>,
}

impl Outcome {
    /// Nothing happened, e.g. an unknown id
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self { changed: true, ..Self::default() }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}
