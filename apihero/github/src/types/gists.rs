//! Gist shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::users::SimpleUser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    pub id: String,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub git_pull_url: String,
    pub git_push_url: String,
    /// Files keyed by file name.
    pub files: BTreeMap<String, GistFile>,
    pub public: bool,
    pub created_at: String,
    pub updated_at: String,
    pub description: Option<String>,
    pub comments: u32,
    pub owner: Option<SimpleUser>,
    pub truncated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork_of: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<GistCommit>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub language: Option<String>,
    pub raw_url: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// File content sent when creating or updating a gist.
///
/// On update, a `null` entry deletes the file and `filename` renames it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFileInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistComment {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub body: String,
    pub user: Option<SimpleUser>,
    pub created_at: String,
    pub updated_at: String,
    pub author_association: String,
}

/// A revision in a gist's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistCommit {
    pub url: String,
    pub version: String,
    pub user: Option<SimpleUser>,
    pub change_status: GistChangeStatus,
    pub committed_at: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistChangeStatus {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub additions: u32,
    #[serde(default)]
    pub deletions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn files_are_keyed_by_name() {
        let gist: Gist = serde_json::from_value(json!({
            "id": "aa5a315d61ae9438b18d",
            "node_id": "MDQ6R2lzdGFhNWEzMTVkNjFhZTk0MzhiMThk",
            "url": "https://api.github.com/gists/aa5a315d61ae9438b18d",
            "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
            "git_pull_url": "https://gist.github.com/aa5a315d61ae9438b18d.git",
            "git_push_url": "https://gist.github.com/aa5a315d61ae9438b18d.git",
            "files": {
                "hello_world.rb": {
                    "filename": "hello_world.rb",
                    "type": "application/x-ruby",
                    "language": "Ruby",
                    "raw_url": "https://gist.githubusercontent.com/octocat/6cad326836d38bd3a7ae/raw/hello_world.rb",
                    "size": 167
                }
            },
            "public": true,
            "created_at": "2010-04-14T02:15:15Z",
            "updated_at": "2011-06-20T11:34:15Z",
            "description": "Hello World Examples",
            "comments": 0,
            "owner": null,
            "truncated": false
        }))
        .unwrap();

        let file = &gist.files["hello_world.rb"];
        assert_eq!(file.mime_type, "application/x-ruby");
        assert_eq!(file.language.as_deref(), Some("Ruby"));
    }
}
