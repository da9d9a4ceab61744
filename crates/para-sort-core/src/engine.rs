//! `NoteClassifier`: catalogs plus settings, wired to every pipeline step.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::catalog::{PatternCatalog, LOCATION_CATALOG, SUBJECT_CATALOG, TAG_CATALOG};
use crate::classifier::{classify_with, Classification};
use crate::config::Config;
use crate::error::Result;
use crate::location::{resolve_location, LocationSuggestion};
use crate::tags::{suggest_tag_set, TagResult, DEFAULT_MAX_TAGS};
use crate::template::{select_template, NoteTemplate};

static BUILTIN: Lazy<NoteClassifier> = Lazy::new(NoteClassifier::builtin);

/// Everything suggested for a single note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteAnalysis {
    pub classification: Classification,
    pub location: LocationSuggestion,
    pub template: NoteTemplate,
    pub tags: TagResult,
}

/// Note classifier
///
/// Builtin catalogs are borrowed from the process-wide statics; only a
/// config with custom tag categories owns its tag catalog.
#[derive(Debug, Clone)]
pub struct NoteClassifier {
    locations: &'static PatternCatalog,
    subjects: &'static PatternCatalog,
    tags: Cow<'static, PatternCatalog>,
    max_tags: usize,
}

impl NoteClassifier {
    /// Classifier over the builtin catalogs
    pub fn builtin() -> Self {
        Self {
            locations: &*LOCATION_CATALOG,
            subjects: &*SUBJECT_CATALOG,
            tags: Cow::Borrowed(&*TAG_CATALOG),
            max_tags: DEFAULT_MAX_TAGS,
        }
    }

    /// Shared builtin instance
    pub fn shared() -> &'static Self {
        &BUILTIN
    }

    /// Build from user config (tag limit and custom tag categories)
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut classifier = Self::builtin().with_max_tags(config.tags.max_tags);
        if !config.tags.custom.is_empty() {
            let tags = TAG_CATALOG.clone().with_custom(&config.tags.custom)?;
            classifier.tags = Cow::Owned(tags);
        }
        Ok(classifier)
    }

    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    pub fn max_tags(&self) -> usize {
        self.max_tags
    }

    pub fn tag_catalog(&self) -> &PatternCatalog {
        &self.tags
    }

    pub fn classify(&self, content: &str) -> Classification {
        classify_with(content, self.locations, self.subjects)
    }

    pub fn resolve_location(&self, classification: &Classification) -> LocationSuggestion {
        resolve_location(classification)
    }

    pub fn select_template(&self, content: &str, classification: &Classification) -> NoteTemplate {
        select_template(content, classification)
    }

    pub fn suggest_tags(&self, content: &str, content_type: Option<&str>) -> TagResult {
        suggest_tag_set(content, content_type, &self.tags, self.max_tags)
    }

    /// Run the full pipeline
    pub fn analyze(&self, content: &str, content_type: Option<&str>) -> NoteAnalysis {
        let classification = self.classify(content);
        let location = self.resolve_location(&classification);
        let template = self.select_template(content, &classification);
        let tags = self.suggest_tags(content, content_type);

        NoteAnalysis {
            classification,
            location,
            template,
            tags,
        }
    }
}

impl Default for NoteClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
