//! Preset subjects and their style classes.

/// A preset subject chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub class: &'static str,
}

pub const SUBJECTS: &[Subject] = &[
    Subject { name: "Math", class: "subject-math" },
    Subject { name: "Science", class: "subject-science" },
    Subject { name: "English", class: "subject-english" },
    Subject { name: "History", class: "subject-history" },
    Subject { name: "Art", class: "subject-art" },
    Subject { name: "CS", class: "subject-cs" },
];

const DEFAULT_CLASS: &str = "subject-default";

/// Style class for a subject name; custom subjects get the default class.
pub fn subject_class(subject: &str) -> &'static str {
    SUBJECTS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(subject.trim()))
        .map(|s| s.class)
        .unwrap_or(DEFAULT_CLASS)
}
