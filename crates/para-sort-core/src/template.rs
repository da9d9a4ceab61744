//! Note template selection.
//!
//! An ordered decision table: the first rule that matches the lower-cased
//! content picks the template. Rules overlap, so order matters.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::classifier::{Classification, ParaCategory};

/// Template a note should be created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteTemplate {
    Recipe,
    CodeSnippet,
    TaskQuick,
    IdeaQuick,
    Meeting,
    Book,
    ReferenceQuick,
    QuickNote,
}

impl NoteTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::CodeSnippet => "code-snippet",
            Self::TaskQuick => "task-quick",
            Self::IdeaQuick => "idea-quick",
            Self::Meeting => "meeting",
            Self::Book => "book",
            Self::ReferenceQuick => "reference-quick",
            Self::QuickNote => "quick-note",
        }
    }

    /// Template file name inside the vault's templates folder
    pub fn file_name(&self) -> String {
        format!("{}.md", self.as_str())
    }
}

impl fmt::Display for NoteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Override rules, highest priority first.
const TEMPLATE_RULES: &[(&str, NoteTemplate)] = &[
    (r"\brecette\b|\brecipe\b|\bingredient\b", NoteTemplate::Recipe),
    (
        r"\bdef\s+\w+|\bfunction\b|\bclass\s+\w+|\bimport\s+",
        NoteTemplate::CodeSnippet,
    ),
    (
        r"\bto\s+do\b|\btask\b|\bchecklist\b|\bdeadline\b",
        NoteTemplate::TaskQuick,
    ),
    // matches "ideée", not "idée"
    (
        r"\bidea\b|\bideée\b|\bmaybe\b|\bbrainstorm\b",
        NoteTemplate::IdeaQuick,
    ),
    (
        r"\bmeeting\b|\bmeet\b|\bréunion\b|\bcall\b",
        NoteTemplate::Meeting,
    ),
    (
        r"\bbook\b|\bchapter\b|\bauthor\b|\breading\b",
        NoteTemplate::Book,
    ),
];

static COMPILED_RULES: Lazy<Vec<(Regex, NoteTemplate)>> = Lazy::new(|| {
    TEMPLATE_RULES
        .iter()
        .filter_map(|(pattern, template)| Regex::new(pattern).ok().map(|re| (re, *template)))
        .collect()
});

/// Pick a template for `content`.
///
/// Falls back to `reference-quick` for resource notes and `quick-note`
/// otherwise.
pub fn select_template(content: &str, classification: &Classification) -> NoteTemplate {
    let lowered = content.to_lowercase();

    if let Some((_, template)) = COMPILED_RULES.iter().find(|(re, _)| re.is_match(&lowered)) {
        tracing::debug!(template = %template, "template override matched");
        return *template;
    }

    match classification.primary_location {
        ParaCategory::Resource => NoteTemplate::ReferenceQuick,
        _ => NoteTemplate::QuickNote,
    }
}
