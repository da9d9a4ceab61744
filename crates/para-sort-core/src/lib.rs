//! Rule-based note classifier for PARA-organized vaults.
//!
//! Given free-form note content, suggests a PARA category, a destination
//! folder, a note template and a prioritized tag set. All operations are
//! deterministic keyword matching and never fail on arbitrary input.
//!
//! ```rust
//! use para_sort_core::{classify, resolve_location, select_template, suggest_tags, ParaCategory};
//!
//! let note = "I need to finish this project task before the deadline";
//! let classification = classify(note);
//! assert_eq!(classification.primary_location, ParaCategory::Project);
//! assert_eq!(resolve_location(&classification).path, "1. ⚙ Project/");
//! assert_eq!(select_template(note, &classification).as_str(), "task-quick");
//! assert_eq!(suggest_tags(note, None).suggested_tags, vec!["project", "task"]);
//! ```

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod location;
pub mod tags;
pub mod template;

pub use classifier::{Classification, ParaCategory, Scores};
pub use config::{Config, TagsConfig};
pub use engine::{NoteAnalysis, NoteClassifier};
pub use error::{ParaSortError, Result};
pub use location::LocationSuggestion;
pub use tags::{prioritize, ContentType, TagResult, DEFAULT_MAX_TAGS, PRIORITY_ORDER};
pub use template::NoteTemplate;

/// Classify `content` with the builtin catalogs.
pub fn classify(content: &str) -> Classification {
    NoteClassifier::shared().classify(content)
}

/// Suggest a vault folder for a classification.
pub fn resolve_location(classification: &Classification) -> LocationSuggestion {
    location::resolve_location(classification)
}

/// Pick the note template for `content`.
pub fn select_template(content: &str, classification: &Classification) -> NoteTemplate {
    template::select_template(content, classification)
}

/// Suggest tags with the builtin tag catalog and default limit.
pub fn suggest_tags(content: &str, content_type: Option<&str>) -> TagResult {
    NoteClassifier::shared().suggest_tags(content, content_type)
}

/// Every detected tag, in catalog order.
pub fn generate_tags(content: &str) -> Vec<String> {
    tags::generate_tags(content, &catalog::TAG_CATALOG)
}
