use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryRules, CustomCategoriesConfig, CustomCategoryEntry};
use crate::error::{ParaSortError, Result};
use crate::tags::DEFAULT_MAX_TAGS;

const CONFIG_FILE: &str = "config.toml";
const CUSTOM_PREFIX: &str = "tags.custom.";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# para-sort configuration file
# Location: ~/.para-sort/config.toml

[tags]
# Maximum number of prioritized tags (content-type tags may be added on top)
# Default: 10
max_tags = 10

# Extra tag categories. Patterns are regular expressions matched against
# lower-cased note content. A builtin tag name replaces the builtin rules.
# Example:
# [tags.custom.homelab]
# patterns = ['\bproxmox\b', '\bnas\b']
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,
}

/// Tag-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagsConfig {
    /// Maximum number of prioritized tags
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,

    /// User-defined tag categories
    #[serde(default, skip_serializing_if = "CustomCategoriesConfig::is_empty")]
    pub custom: CustomCategoriesConfig,
}

fn default_max_tags() -> usize {
    DEFAULT_MAX_TAGS
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
            custom: CustomCategoriesConfig::default(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| ParaSortError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| ParaSortError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        if key == "tags.max_tags" {
            return Some(self.tags.max_tags.to_string());
        }

        let name = key.strip_prefix(CUSTOM_PREFIX)?;
        self.tags
            .custom
            .categories
            .get(name)
            .map(|entry| format_patterns(&entry.patterns))
    }

    /// Set a config value by dot-notation key
    ///
    /// `tags.custom.<name>` takes a pattern list; an empty list removes the
    /// category.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key == "tags.max_tags" {
            self.tags.max_tags = value
                .trim()
                .parse()
                .map_err(|_| ParaSortError::InvalidConfigValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            return Ok(());
        }

        match key.strip_prefix(CUSTOM_PREFIX) {
            Some(name) if !name.is_empty() && !name.contains('.') => {
                let patterns = parse_pattern_list(value)?;
                if patterns.is_empty() {
                    self.tags.custom.categories.remove(name);
                    return Ok(());
                }
                // reject invalid regexes before they reach the file
                CategoryRules::compile(name, &patterns)?;
                self.tags
                    .custom
                    .categories
                    .insert(name.to_string(), CustomCategoryEntry { patterns });
                Ok(())
            }
            _ => Err(ParaSortError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries = vec![("tags.max_tags".to_string(), self.tags.max_tags.to_string())];
        for (name, entry) in &self.tags.custom.categories {
            entries.push((
                format!("{}{}", CUSTOM_PREFIX, name),
                format_patterns(&entry.patterns),
            ));
        }
        entries
    }
}

/// Render patterns in the form `set` accepts back.
fn format_patterns(patterns: &[String]) -> String {
    patterns.join(",")
}

/// Parse a pattern list: a JSON array of strings, or comma-separated.
///
/// Commas inside `()`, `[]`, `{}` or after a backslash belong to the
/// pattern, so quantifiers like `{2,4}` survive the comma form.
fn parse_pattern_list(value: &str) -> Result<Vec<String>> {
    let trimmed = value.trim();

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return Ok(items.into_iter().filter(|s| !s.is_empty()).collect());
        }
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut escaped = false;

    for c in trimmed.chars() {
        if escaped {
            escaped = false;
        } else {
            match c {
                '\\' => escaped = true,
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    items.push(std::mem::take(&mut current));
                    continue;
                }
                _ => {}
            }
        }
        current.push(c);
    }
    items.push(current);

    Ok(items
        .iter()
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_pattern_list_comma() {
        let result = parse_pattern_list(r"\bnas\b,\bproxmox\b").unwrap();
        assert_eq!(result, vec![r"\bnas\b", r"\bproxmox\b"]);
    }

    #[test]
    fn test_parse_pattern_list_keeps_quantifier_commas() {
        let result = parse_pattern_list(r"\b[a-z]{2,4}-\d+\b, \bx{1,3}y\b,a\,b").unwrap();
        assert_eq!(result, vec![r"\b[a-z]{2,4}-\d+\b", r"\bx{1,3}y\b", r"a\,b"]);
    }

    #[test]
    fn test_parse_pattern_list_json() {
        let result = parse_pattern_list(r#"["\\bnas\\b", "\\d{1,3}"]"#).unwrap();
        assert_eq!(result, vec![r"\bnas\b", r"\d{1,3}"]);
    }

    #[test]
    fn test_parse_pattern_list_character_class_is_not_json() {
        let result = parse_pattern_list("[abc]").unwrap();
        assert_eq!(result, vec!["[abc]"]);
    }

    #[test]
    fn test_parse_pattern_list_empty() {
        assert!(parse_pattern_list("[]").unwrap().is_empty());
        assert!(parse_pattern_list("").unwrap().is_empty());
    }

    #[test]
    fn test_quantified_pattern_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("tags.custom.ids", r"\b[a-z]{2,4}-\d+\b").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(
            loaded.tags.custom.categories["ids"].patterns,
            vec![r"\b[a-z]{2,4}-\d+\b"]
        );
    }

    #[test]
    fn test_get_output_can_be_set_back() {
        let mut config = Config::default();
        config.set("tags.custom.homelab", r"\bproxmox\b,\bx{1,3}\b").unwrap();
        let shown = config.get("tags.custom.homelab").unwrap();
        assert_eq!(shown, r"\bproxmox\b,\bx{1,3}\b");

        let mut copy = Config::default();
        copy.set("tags.custom.homelab", &shown).unwrap();
        assert_eq!(copy, config);
        assert_eq!(config.list()[1].1, shown);
    }

    #[test]
    fn test_config_get_set_max_tags() {
        let mut config = Config::default();
        assert_eq!(config.get("tags.max_tags").unwrap(), "10");

        config.set("tags.max_tags", "5").unwrap();
        assert_eq!(config.tags.max_tags, 5);

        let err = config.set("tags.max_tags", "lots").unwrap_err();
        assert!(matches!(err, ParaSortError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_config_set_custom_category() {
        let mut config = Config::default();
        config.set("tags.custom.homelab", r"\bproxmox\b").unwrap();
        assert!(config.get("tags.custom.homelab").unwrap().contains("proxmox"));
        assert_eq!(config.list().len(), 2);

        config.set("tags.custom.homelab", "[]").unwrap();
        assert!(config.get("tags.custom.homelab").is_none());
    }

    #[test]
    fn test_config_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("tags.custom.broken", "(").unwrap_err(),
            ParaSortError::InvalidPattern { .. }
        ));
        assert!(matches!(
            config.set("output.color", "true").unwrap_err(),
            ParaSortError::ConfigKeyNotFound { .. }
        ));
        assert!(config.get("output.color").is_none());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_init_template_parses() {
        let dir = TempDir::new().unwrap();
        let path = Config::init(dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("tags.max_tags", "7").unwrap();
        config.set("tags.custom.homelab", r"\bproxmox\b,\bnas\b").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.tags.custom.categories["homelab"].patterns,
            vec![r"\bproxmox\b", r"\bnas\b"]
        );
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(Config::path(dir.path()), "[tags\nmax_tags = ").unwrap();
        assert!(matches!(
            Config::load(dir.path()).unwrap_err(),
            ParaSortError::ConfigParse { .. }
        ));
    }
}
