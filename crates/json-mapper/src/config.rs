//! Mapper configuration.

use json_mapper_key_path::{KeyPath, KeyPathError, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};

/// Settings shared by every field statement of one mapping call.
///
/// ```
/// use json_mapper::MapperConfig;
///
/// let config = MapperConfig::new()
///     .with_key_delimiter("/")
///     .with_include_nulls(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Separator between nested key segments, `"."` by default.
    pub key_delimiter: String,
    /// When false every key is a single literal object key.
    pub nested_keys: bool,
    /// Encode `None` optional fields as `null` instead of leaving them out.
    pub include_nulls: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            key_delimiter: DEFAULT_DELIMITER.to_string(),
            nested_keys: true,
            include_nulls: false,
        }
    }
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_delimiter = delimiter.into();
        self
    }

    pub fn with_nested_keys(mut self, nested: bool) -> Self {
        self.nested_keys = nested;
        self
    }

    pub fn with_include_nulls(mut self, include: bool) -> Self {
        self.include_nulls = include;
        self
    }

    pub fn validate(&self) -> Result<(), KeyPathError> {
        if self.nested_keys && self.key_delimiter.is_empty() {
            return Err(KeyPathError::EmptyDelimiter);
        }
        Ok(())
    }

    /// Parse a field key according to this configuration.
    pub fn key_path(&self, key: &str) -> KeyPath {
        if !self.nested_keys {
            return KeyPath::literal(key);
        }
        KeyPath::parse(key, &self.key_delimiter).unwrap_or_else(|_| KeyPath::literal(key))
    }
}
