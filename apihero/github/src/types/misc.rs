//! Shapes of the stand-alone informational endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Quota of one rate-limit bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    /// Epoch seconds at which the window resets.
    pub reset: u64,
    pub used: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitOverview {
    /// Buckets keyed by name: `core`, `search`, `graphql` and so on.
    pub resources: HashMap<String, RateLimit>,
    pub rate: RateLimit,
}

/// Service overview: IP ranges and SSH key fingerprints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOverview {
    pub verifiable_password_authentication: bool,
    #[serde(default)]
    pub ssh_key_fingerprints: HashMap<String, String>,
    #[serde(default)]
    pub ssh_keys: Vec<String>,
    #[serde(default)]
    pub hooks: Vec<String>,
    #[serde(default)]
    pub web: Vec<String>,
    #[serde(default)]
    pub api: Vec<String>,
    #[serde(default)]
    pub git: Vec<String>,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub importer: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub dependabot: Vec<String>,
}

/// Emoji names mapped to image URLs.
pub type Emojis = HashMap<String, String>;

/// A license with its full text and obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: String,
    pub html_url: String,
    pub description: String,
    pub implementation: String,
    pub permissions: Vec<String>,
    pub conditions: Vec<String>,
    pub limitations: Vec<String>,
    pub body: String,
    pub featured: bool,
}

/// The license detected in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseContent {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub url: String,
    pub html_url: Option<String>,
    pub download_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub encoding: String,
    pub license: Option<super::repos::LicenseSimple>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOfConduct {
    pub key: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitignoreTemplate {
    pub name: String,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rate_limit_buckets_are_keyed() {
        let overview: RateLimitOverview = serde_json::from_value(json!({
            "resources": {
                "core": { "limit": 5000, "remaining": 4999, "reset": 1691591363, "used": 1 },
                "search": { "limit": 30, "remaining": 18, "reset": 1691591091, "used": 12 }
            },
            "rate": { "limit": 5000, "remaining": 4999, "reset": 1372700873, "used": 1 }
        }))
        .unwrap();

        assert_eq!(overview.resources["search"].remaining, 18);
        assert_eq!(overview.rate.limit, 5000);
    }
}
