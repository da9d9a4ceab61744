//! Tag generation and prioritization.

use std::fmt;

use serde::Serialize;

use crate::catalog::PatternCatalog;

/// Default upper bound for prioritized tags.
pub const DEFAULT_MAX_TAGS: usize = 10;

/// Fixed tag priority: type tags first, then common subjects.
pub const PRIORITY_ORDER: &[&str] = &[
    "project",
    "area",
    "resource",
    "archive",
    "code",
    "ai",
    "business",
    "health",
    "family",
    "task",
    "todo",
    "meeting",
    "idea",
    "python",
    "javascript",
    "typescript",
    "svelte",
    "nutrition",
    "recette",
    "cuisine",
    "gaming",
    "design",
    "video",
    "book",
];

/// Tags always appended for recipe notes.
pub const RECIPE_TAGS: &[&str] = &["nutrition", "recette", "cuisine"];

/// Known note archetypes a caller may hint at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Recipe,
    Code,
    Task,
    Meeting,
    Idea,
}

impl ContentType {
    /// Parse a free-text hint. Matching is exact; anything else yields `None`.
    pub fn parse(hint: &str) -> Option<Self> {
        match hint {
            "recipe" => Some(Self::Recipe),
            "code" => Some(Self::Code),
            "task" => Some(Self::Task),
            "meeting" => Some(Self::Meeting),
            "idea" => Some(Self::Idea),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Code => "code",
            Self::Task => "task",
            Self::Meeting => "meeting",
            Self::Idea => "idea",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag suggestion for one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResult {
    /// Prioritized, truncated, then content-type injected
    pub suggested_tags: Vec<String>,
    /// Every detected tag in catalog order
    pub all_found_tags: Vec<String>,
    /// Number of detected tags (`all_found_tags.len()`)
    pub tag_count: usize,
}

/// Every catalog tag present in `content`, in catalog order.
pub fn generate_tags(content: &str, catalog: &PatternCatalog) -> Vec<String> {
    catalog.present_categories(&content.to_lowercase())
}

/// Reorder by `PRIORITY_ORDER`, keep unlisted tags in detected order, and
/// truncate to `max_tags`.
pub fn prioritize<S: AsRef<str>>(tags: &[S], max_tags: usize) -> Vec<String> {
    let mut prioritized: Vec<String> = PRIORITY_ORDER
        .iter()
        .filter(|p| tags.iter().any(|t| t.as_ref() == **p))
        .map(|p| p.to_string())
        .collect();

    for tag in tags {
        let tag = tag.as_ref();
        if !prioritized.iter().any(|p| p == tag) {
            prioritized.push(tag.to_string());
        }
    }

    prioritized.truncate(max_tags);
    prioritized
}

/// Apply content-type injection to already prioritized tags.
///
/// Runs after truncation, so the result may exceed the tag limit. Recipe
/// tags are appended even when already present.
pub fn inject_content_type(tags: &mut Vec<String>, content_type: ContentType) {
    match content_type {
        ContentType::Recipe => {
            tags.extend(RECIPE_TAGS.iter().map(|t| t.to_string()));
        }
        ContentType::Code | ContentType::Task | ContentType::Meeting | ContentType::Idea => {
            let tag = content_type.as_str();
            if !tags.iter().any(|t| t == tag) {
                tags.insert(0, tag.to_string());
            }
        }
    }
}

/// Generate, prioritize and inject tags for `content`.
pub fn suggest_tag_set(
    content: &str,
    content_type: Option<&str>,
    catalog: &PatternCatalog,
    max_tags: usize,
) -> TagResult {
    let all_found_tags = generate_tags(content, catalog);
    let mut suggested_tags = prioritize(&all_found_tags, max_tags);

    match content_type.map(|hint| (hint, ContentType::parse(hint))) {
        Some((_, Some(ct))) => {
            inject_content_type(&mut suggested_tags, ct);
            tracing::debug!(content_type = %ct, ?suggested_tags, "injected content-type tags");
        }
        Some((hint, None)) => {
            tracing::debug!(hint, "ignoring unknown content type");
        }
        None => {}
    }

    TagResult {
        tag_count: all_found_tags.len(),
        suggested_tags,
        all_found_tags,
    }
}
