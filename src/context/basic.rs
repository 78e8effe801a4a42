use serde::{Deserialize, Serialize};

use super::generator::{ContextError, ContextGenerator};

pub const DEFAULT_SEPARATOR: &str = " ";

// Serializable, explicit defaults. Missing fields fall back to `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub separator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.into(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Reads predicates straight out of a delimited string.
///
/// The input is split on every literal occurrence of the separator and every
/// field is kept, including empty ones from adjacent separators or separators
/// at either end. An empty input is a single empty predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicContextGenerator {
    separator: String,
}

impl Default for BasicContextGenerator {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.into(),
        }
    }
}

impl BasicContextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: impl Into<String>) -> Result<Self, ContextError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(ContextError::EmptySeparator);
        }

        Ok(Self { separator })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ContextError> {
        Self::with_separator(config.separator.clone())
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl ContextGenerator<str> for BasicContextGenerator {
    fn context(&self, input: &str) -> Result<Vec<String>, ContextError> {
        Ok(input.split(self.separator.as_str()).map(str::to_string).collect())
    }
}

impl ContextGenerator<String> for BasicContextGenerator {
    fn context(&self, input: &String) -> Result<Vec<String>, ContextError> {
        self.context(input.as_str())
    }
}

impl ContextGenerator<[u8]> for BasicContextGenerator {
    fn context(&self, input: &[u8]) -> Result<Vec<String>, ContextError> {
        let text = std::str::from_utf8(input).map_err(|_| ContextError::TypeMismatch {
            expected: "UTF-8 string",
        })?;
        self.context(text)
    }
}
