use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParaSortError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Invalid pattern in category '{category}': {pattern}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Category '{category}' has no patterns")]
    EmptyCategory { category: String },

    #[error("Duplicate category: {category}")]
    DuplicateCategory { category: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParaSortError>;

impl ParaSortError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 3,
            Self::InvalidPattern { .. }
            | Self::EmptyCategory { .. }
            | Self::DuplicateCategory { .. } => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = ParaSortError::InputNotFound {
            path: PathBuf::from("note.md"),
        };
        assert_eq!(missing.exit_code(), 2);

        let key = ParaSortError::ConfigKeyNotFound {
            key: "tags.nope".to_string(),
        };
        assert_eq!(key.exit_code(), 3);

        let io = ParaSortError::Io(std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 1);
    }
}
