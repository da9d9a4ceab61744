//! Destination folder suggestion from a classification.

use serde::Serialize;

use crate::classifier::{Classification, ParaCategory};

pub const INBOX_PATH: &str = "0. 📬 Inbox/";
pub const INBOX_REASON: &str = "Unclear classification or new content";

/// Suggested vault folder for a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSuggestion {
    pub path: String,
    pub reason: String,
}

/// Vault base folder for a PARA category
pub fn base_path(category: ParaCategory) -> &'static str {
    match category {
        ParaCategory::Project => "1. ⚙ Project/",
        ParaCategory::Area => "2. 🛸 Area/",
        ParaCategory::Resource => "3. 💭 Resource/",
        ParaCategory::Archive => "4. 📦 Archive/",
        ParaCategory::Inbox => INBOX_PATH,
    }
}

/// Map a classification to a folder.
///
/// Only area and resource notes get a subject subfolder; project and archive
/// notes stay at the base path even when a subject was detected.
pub fn resolve_location(classification: &Classification) -> LocationSuggestion {
    let primary = classification.primary_location;
    if primary == ParaCategory::Inbox {
        return LocationSuggestion {
            path: INBOX_PATH.to_string(),
            reason: INBOX_REASON.to_string(),
        };
    }

    let base = base_path(primary);
    let subject = classification.subject_tags.first();

    let path = match (primary, subject) {
        (ParaCategory::Area | ParaCategory::Resource, Some(subject)) => {
            format!("{}{}/", base, capitalize(subject))
        }
        _ => base.to_string(),
    };

    let mut reason = format!("Based on {} classification", primary);
    if let Some(subject) = subject {
        reason.push_str(&format!(" with {} focus", subject));
    }

    LocationSuggestion { path, reason }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
