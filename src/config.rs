//! Ranker configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::vectorizer::evaluate::explain::DEFAULT_KEYWORD_COUNT;

/// Default number of ranked results returned.
pub const DEFAULT_LIMIT: usize = 10;

/// Settings for a [`crate::Ranker`].
///
/// Missing TOML keys fall back to the defaults:
/// ```toml
/// limit = 10
/// keyword_count = 3
/// parallel = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// maximum number of ranked results
    pub limit: usize,
    /// maximum number of keywords per result
    pub keyword_count: usize,
    /// score candidates on the rayon pool
    pub parallel: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            keyword_count: DEFAULT_KEYWORD_COUNT,
            parallel: true,
        }
    }
}

impl MatcherConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src).map_err(|e| MatchError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    /// Reject settings the ranker cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(MatchError::Config {
                message: "limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
