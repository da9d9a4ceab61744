//! PARA classifier: location scoring and subject extraction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::PatternCatalog;

/// PARA filing category, plus the `Inbox` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParaCategory {
    Project,
    Area,
    Resource,
    Archive,
    Inbox,
}

impl ParaCategory {
    /// Scored categories. Order is the tie-break order.
    pub const LOCATIONS: [ParaCategory; 4] = [
        ParaCategory::Project,
        ParaCategory::Area,
        ParaCategory::Resource,
        ParaCategory::Archive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Area => "area",
            Self::Resource => "resource",
            Self::Archive => "archive",
            Self::Inbox => "inbox",
        }
    }
}

impl fmt::Display for ParaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParaCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "project" => Ok(Self::Project),
            "area" => Ok(Self::Area),
            "resource" => Ok(Self::Resource),
            "archive" => Ok(Self::Archive),
            "inbox" => Ok(Self::Inbox),
            other => Err(format!("unknown PARA category: {}", other)),
        }
    }
}

/// Match counts for the four scored categories, in `LOCATIONS` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores(Vec<(ParaCategory, usize)>);

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, n)| (c.as_str(), n)))
    }
}

impl Scores {
    pub fn get(&self, category: ParaCategory) -> usize {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParaCategory, usize)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn max(&self) -> usize {
        self.0.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// First category reaching the maximum, or `Inbox` when nothing scored.
    pub fn best(&self) -> ParaCategory {
        let max = self.max();
        if max == 0 {
            return ParaCategory::Inbox;
        }
        self.0
            .iter()
            .find(|(_, n)| *n == max)
            .map_or(ParaCategory::Inbox, |(c, _)| *c)
    }
}

/// Result of classifying one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub primary_location: ParaCategory,
    /// Matched subject names, in subject catalog order
    pub subject_tags: Vec<String>,
    pub scores: Scores,
}

/// Count every non-overlapping match per location category.
pub fn score(content: &str, catalog: &PatternCatalog) -> Scores {
    let lowered = content.to_lowercase();
    score_lowered(&lowered, catalog)
}

fn score_lowered(lowered: &str, catalog: &PatternCatalog) -> Scores {
    Scores(
        ParaCategory::LOCATIONS
            .iter()
            .map(|cat| (*cat, catalog.count_matches(cat.as_str(), lowered)))
            .collect(),
    )
}

/// Subjects present in `content`, one entry per matching category.
pub fn extract_subjects(content: &str, catalog: &PatternCatalog) -> Vec<String> {
    catalog.present_categories(&content.to_lowercase())
}

/// Score `content` against `locations` and collect `subjects`.
pub fn classify_with(
    content: &str,
    locations: &PatternCatalog,
    subjects: &PatternCatalog,
) -> Classification {
    let lowered = content.to_lowercase();
    let scores = score_lowered(&lowered, locations);
    let primary_location = scores.best();
    let subject_tags = subjects.present_categories(&lowered);

    tracing::debug!(
        primary = %primary_location,
        ?scores,
        ?subject_tags,
        "classified note"
    );

    Classification {
        primary_location,
        subject_tags,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LOCATION_CATALOG, SUBJECT_CATALOG};

    fn classify(content: &str) -> Classification {
        classify_with(content, &LOCATION_CATALOG, &SUBJECT_CATALOG)
    }

    #[test]
    fn test_empty_content_is_inbox() {
        let c = classify("");
        assert_eq!(c.primary_location, ParaCategory::Inbox);
        assert!(c.subject_tags.is_empty());
        assert_eq!(c.scores.len(), 4);
        assert!(c.scores.iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn test_no_match_is_inbox() {
        let c = classify("Lorem ipsum dolor sit amet");
        assert_eq!(c.primary_location, ParaCategory::Inbox);
    }

    #[test]
    fn test_project_scenario() {
        let c = classify("I need to finish this project task before the deadline");
        assert!(c.scores.get(ParaCategory::Project) >= 3);
        assert_eq!(c.primary_location, ParaCategory::Project);
    }

    #[test]
    fn test_repeated_keyword_counts_twice() {
        let s = score("deadline deadline", &LOCATION_CATALOG);
        assert_eq!(s.get(ParaCategory::Project), 2);
    }

    #[test]
    fn test_scoring_is_case_insensitive() {
        let s = score("DEADLINE and Milestone", &LOCATION_CATALOG);
        assert_eq!(s.get(ParaCategory::Project), 2);
    }

    #[test]
    fn test_tie_breaks_on_declaration_order() {
        // one project hit (task), one resource hit (guide)
        let c = classify("guide task");
        assert_eq!(c.scores.get(ParaCategory::Project), 1);
        assert_eq!(c.scores.get(ParaCategory::Resource), 1);
        assert_eq!(c.primary_location, ParaCategory::Project);

        // area before archive
        let c = classify("old family");
        assert_eq!(c.primary_location, ParaCategory::Area);
    }

    #[test]
    fn test_highest_score_wins() {
        let c = classify("A guide and a tutorial with one example, see the task");
        assert_eq!(c.scores.get(ParaCategory::Resource), 3);
        assert_eq!(c.primary_location, ParaCategory::Resource);
    }

    #[test]
    fn test_subjects_in_catalog_order() {
        let c = classify("Reading a book about cooking with python");
        assert_eq!(c.subject_tags, vec!["code", "nutrition", "book"]);
    }

    #[test]
    fn test_subject_counted_once() {
        let subjects = extract_subjects("python rust svelte react", &SUBJECT_CATALOG);
        assert_eq!(subjects, vec!["code"]);
    }

    #[test]
    fn test_accented_subject() {
        let subjects = extract_subjects("Un roman écrit en 1920", &SUBJECT_CATALOG);
        assert_eq!(subjects, vec!["book"]);
    }

    #[test]
    fn test_multiline_rule_stays_on_line() {
        let s = score("code for the\nlearning group", &LOCATION_CATALOG);
        assert_eq!(s.get(ParaCategory::Area), 0);
        let s = score("code while learning", &LOCATION_CATALOG);
        assert_eq!(s.get(ParaCategory::Area), 1);
    }

    #[test]
    fn test_para_category_round_trip() {
        for cat in ParaCategory::LOCATIONS {
            assert_eq!(cat.as_str().parse::<ParaCategory>().unwrap(), cat);
        }
        assert_eq!("Inbox".parse::<ParaCategory>().unwrap(), ParaCategory::Inbox);
        assert!("someday".parse::<ParaCategory>().is_err());
    }
}
