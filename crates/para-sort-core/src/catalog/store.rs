//! Pattern Catalog
//!
//! Compiled, ordered mapping from category name to its match rules.
//! Builtin catalogs are compiled once per process and shared read-only.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ParaSortError, Result};

use super::builtin::{BuiltinCategory, LOCATION_CATEGORIES, SUBJECT_CATEGORIES, TAG_CATEGORIES};

/// Compiled location catalog (project, area, resource, archive).
pub static LOCATION_CATALOG: Lazy<PatternCatalog> =
    Lazy::new(|| PatternCatalog::from_builtin(LOCATION_CATEGORIES));

/// Compiled subject catalog.
pub static SUBJECT_CATALOG: Lazy<PatternCatalog> =
    Lazy::new(|| PatternCatalog::from_builtin(SUBJECT_CATEGORIES));

/// Compiled tag catalog.
pub static TAG_CATALOG: Lazy<PatternCatalog> =
    Lazy::new(|| PatternCatalog::from_builtin(TAG_CATEGORIES));

/// A single category and its alternative rules.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    name: String,
    rules: Vec<Regex>,
}

impl CategoryRules {
    /// Compile a category from raw patterns
    pub fn compile<S: AsRef<str>>(name: &str, patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(ParaSortError::EmptyCategory {
                category: name.to_string(),
            });
        }

        let rules = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| ParaSortError::InvalidPattern {
                    category: name.to_string(),
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.to_string(),
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Regex] {
        &self.rules
    }

    /// Sum of non-overlapping matches of every rule.
    pub fn count_matches(&self, text: &str) -> usize {
        self.rules
            .iter()
            .map(|rule| {
                let count = rule.find_iter(text).count();
                if count > 0 {
                    tracing::trace!(category = %self.name, rule = rule.as_str(), count, "rule matched");
                }
                count
            })
            .sum()
    }

    /// First rule (in declaration order) that matches anywhere in `text`.
    pub fn first_match(&self, text: &str) -> Option<&Regex> {
        self.rules.iter().find(|rule| rule.is_match(text))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

/// Ordered, immutable set of categories.
///
/// Declaration order is kept: it decides emission order for presence
/// extraction and is irrelevant for scoring.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    categories: Vec<CategoryRules>,
}

impl PatternCatalog {
    /// Compile a catalog from runtime definitions.
    ///
    /// Fails on the first invalid rule or on a duplicated category name.
    pub fn compile(defs: &[CategoryDef]) -> Result<Self> {
        let mut catalog = Self::default();
        for def in defs {
            if catalog.get(&def.name).is_some() {
                return Err(ParaSortError::DuplicateCategory {
                    category: def.name.clone(),
                });
            }
            catalog
                .categories
                .push(CategoryRules::compile(&def.name, &def.patterns)?);
        }
        Ok(catalog)
    }

    /// Compile a builtin table. Rules that fail to compile are skipped with a
    /// warning so the catalog is always available.
    pub fn from_builtin(defs: &[BuiltinCategory]) -> Self {
        let categories = defs
            .iter()
            .map(|def| CategoryRules {
                name: def.name.to_string(),
                rules: def
                    .rules
                    .iter()
                    .filter_map(|p| match Regex::new(p) {
                        Ok(re) => Some(re),
                        Err(e) => {
                            tracing::warn!(category = def.name, pattern = p, error = %e, "skipping builtin rule");
                            None
                        }
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Merge user-defined categories.
    ///
    /// - A name that already exists has its rules replaced in place
    /// - New names are appended in name order
    pub fn with_custom(mut self, config: &CustomCategoriesConfig) -> Result<Self> {
        for (name, entry) in &config.categories {
            let compiled = CategoryRules::compile(name, &entry.patterns)?;
            match self.categories.iter_mut().find(|c| c.name == *name) {
                Some(existing) => *existing = compiled,
                None => self.categories.push(compiled),
            }
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&CategoryRules> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryRules> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Match count for one category; unknown names count zero.
    pub fn count_matches(&self, name: &str, text: &str) -> usize {
        self.get(name).map_or(0, |c| c.count_matches(text))
    }

    /// Names of every category with at least one matching rule, in
    /// declaration order. `text` must already be lower-cased.
    pub fn present_categories(&self, text: &str) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.is_match(text))
            .map(|c| c.name.clone())
            .collect()
    }
}

/// Runtime category definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub patterns: Vec<String>,
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            name: builtin.name.to_string(),
            patterns: builtin.rules.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// `[tags.custom]` section of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomCategoriesConfig {
    #[serde(flatten)]
    pub categories: BTreeMap<String, CustomCategoryEntry>,
}

impl CustomCategoriesConfig {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A single user-defined category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCategoryEntry {
    /// Regular expressions matched against lower-cased content
    pub patterns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str, patterns: &[&str]) -> CustomCategoriesConfig {
        CustomCategoriesConfig {
            categories: [(
                name.to_string(),
                CustomCategoryEntry {
                    patterns: patterns.iter().map(|s| s.to_string()).collect(),
                },
            )]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn test_builtin_catalogs_compile_every_rule() {
        for (catalog, defs) in [
            (&*LOCATION_CATALOG, LOCATION_CATEGORIES),
            (&*SUBJECT_CATALOG, SUBJECT_CATEGORIES),
            (&*TAG_CATALOG, TAG_CATEGORIES),
        ] {
            assert_eq!(catalog.len(), defs.len());
            for (compiled, def) in catalog.iter().zip(defs) {
                assert_eq!(compiled.name(), def.name);
                assert_eq!(compiled.rules().len(), def.rules.len(), "{}", def.name);
            }
        }
    }

    #[test]
    fn test_builtin_matches_strict_compile() {
        let defs: Vec<CategoryDef> = TAG_CATEGORIES.iter().map(CategoryDef::from).collect();
        let strict = PatternCatalog::compile(&defs).unwrap();
        assert_eq!(strict.names(), TAG_CATALOG.names());
    }

    #[test]
    fn test_count_matches_counts_repetitions() {
        let n = LOCATION_CATALOG.count_matches("project", "task, another task, deadline");
        assert_eq!(n, 3);
        assert_eq!(LOCATION_CATALOG.count_matches("nonexistent", "task"), 0);
    }

    #[test]
    fn test_unicode_word_boundaries() {
        let health = TAG_CATALOG.get("health").unwrap();
        assert!(health.is_match("rendez-vous santé demain"));
        assert!(!health.is_match("santéx"));

        let meeting = TAG_CATALOG.get("meeting").unwrap();
        assert!(meeting.is_match("compte rendu de réunion"));
    }

    #[test]
    fn test_first_match_follows_declaration_order() {
        let code = SUBJECT_CATALOG.get("code").unwrap();
        let rule = code.first_match("a rust api in python").unwrap();
        assert_eq!(rule.as_str(), r"\bpython\b");
    }

    #[test]
    fn test_present_categories_in_catalog_order() {
        let found = SUBJECT_CATALOG.present_categories("a book about docker and python");
        assert_eq!(found, vec!["code", "selfhosting", "book"]);
    }

    #[test]
    fn test_compile_rejects_invalid_pattern() {
        let err = CategoryRules::compile("broken", &["(unclosed"]).unwrap_err();
        assert!(matches!(err, ParaSortError::InvalidPattern { .. }));
    }

    #[test]
    fn test_compile_rejects_empty_category() {
        let err = CategoryRules::compile::<&str>("empty", &[]).unwrap_err();
        assert!(matches!(err, ParaSortError::EmptyCategory { .. }));
    }

    #[test]
    fn test_compile_rejects_duplicates() {
        let def = CategoryDef {
            name: "dup".to_string(),
            patterns: vec![r"\bx\b".to_string()],
        };
        let err = PatternCatalog::compile(&[def.clone(), def]).unwrap_err();
        assert!(matches!(err, ParaSortError::DuplicateCategory { .. }));
    }

    #[test]
    fn test_with_custom_appends_new_category() {
        let catalog = TAG_CATALOG
            .clone()
            .with_custom(&custom("homelab", &[r"\bproxmox\b"]))
            .unwrap();
        assert_eq!(catalog.len(), TAG_CATALOG.len() + 1);
        assert_eq!(catalog.names().last(), Some(&"homelab"));
        assert!(catalog.get("homelab").unwrap().is_match("my proxmox box"));
    }

    #[test]
    fn test_with_custom_replaces_in_place() {
        let catalog = TAG_CATALOG
            .clone()
            .with_custom(&custom("project", &[r"\bchantier\b"]))
            .unwrap();
        assert_eq!(catalog.names(), TAG_CATALOG.names());
        let project = catalog.get("project").unwrap();
        assert!(project.is_match("nouveau chantier"));
        assert!(!project.is_match("new project"));
    }
}
