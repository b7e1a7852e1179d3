//! Linter configuration, read from `apihero-lint.toml`.
//!
//! ```toml
//! client_id = "github"
//! deny_warnings = false
//! page_params = ["per_page", "page"]
//! cursor_params = ["since", "before", "after", "cursor"]
//!
//! [[allow]]
//! rule = "pagination"
//! id = "orgs/list"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::LintError;
use crate::rules::Rule;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "apihero-lint.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Expected client id. Defaults to the id of the first descriptor.
    pub client_id: Option<String>,
    /// Query parameters that together make a listing page-addressable.
    pub page_params: Vec<String>,
    /// Query parameters any one of which makes a listing cursor-addressable.
    pub cursor_params: Vec<String>,
    pub allow: Vec<Allow>,
    /// Treat warnings as errors.
    pub deny_warnings: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            page_params: vec!["per_page".into(), "page".into()],
            cursor_params: ["since", "before", "after", "cursor"]
                .into_iter()
                .map(String::from)
                .collect(),
            allow: Vec::new(),
            deny_warnings: false,
        }
    }
}

/// Suppresses one rule for one endpoint id, or for every id with `"*"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Allow {
    pub rule: Rule,
    pub id: String,
}

impl LintConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, LintError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LintError::ReadConfig {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&raw).map_err(|source| LintError::ParseConfig {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), allow = config.allow.len(), "loaded lint config");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] when it exists,
    /// else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LintError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn is_allowed(&self, rule: Rule, id: &str) -> bool {
        self.allow
            .iter()
            .any(|allow| allow.rule == rule && (allow.id == "*" || allow.id == id))
    }
}
