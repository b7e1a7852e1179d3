//! Low-level git database objects.

use serde::{Deserialize, Serialize};

use super::repos::{CommitRef, Signature};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitBlob {
    pub sha: String,
    pub node_id: String,
    pub url: String,
    pub size: Option<u64>,
    pub content: String,
    /// `utf-8` or `base64`.
    pub encoding: String,
}

/// The reference returned after creating a blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortBlob {
    pub sha: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitCommit {
    pub sha: String,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub author: Signature,
    pub committer: Signature,
    pub message: String,
    pub tree: CommitRef,
    pub parents: Vec<GitCommitParent>,
    pub verification: Verification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitCommitParent {
    pub sha: String,
    pub url: String,
    pub html_url: String,
}

/// Signature verification of a commit or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    pub signature: Option<String>,
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRef {
    /// Fully qualified, e.g. `refs/heads/main`.
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub node_id: String,
    pub url: String,
    pub object: GitObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub sha: String,
    pub url: String,
}

/// An annotated tag object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitTag {
    pub node_id: String,
    pub tag: String,
    pub sha: String,
    pub url: String,
    pub message: String,
    pub tagger: Signature,
    pub object: GitObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitTree {
    pub sha: String,
    pub url: String,
    pub truncated: bool,
    pub tree: Vec<TreeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    /// File mode: `100644`, `100755`, `040000`, `160000` or `120000`.
    pub mode: String,
    /// `blob`, `tree` or `commit`.
    #[serde(rename = "type")]
    pub kind: String,
    pub sha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A tree entry as sent when creating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTreeEntry {
    pub path: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Null deletes the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn git_ref_renames_keyword_fields() {
        let git_ref: GitRef = serde_json::from_value(json!({
            "ref": "refs/heads/featureA",
            "node_id": "MDM6UmVmcmVmcy9oZWFkcy9mZWF0dXJlQQ==",
            "url": "https://api.github.com/repos/octocat/Hello-World/git/refs/heads/featureA",
            "object": {
                "type": "commit",
                "sha": "aa218f56b14c9653891f9e74264a383fa43fefbd",
                "url": "https://api.github.com/repos/octocat/Hello-World/git/commits/aa218f56b14c9653891f9e74264a383fa43fefbd"
            }
        }))
        .unwrap();

        assert_eq!(git_ref.git_ref, "refs/heads/featureA");
        assert_eq!(git_ref.object.kind, "commit");
    }

    #[test]
    fn new_tree_entry_omits_missing_sha() {
        let entry = NewTreeEntry {
            path: "file.rb".into(),
            mode: "100644".into(),
            kind: "blob".into(),
            sha: None,
            content: Some("puts 'hi'".into()),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "blob");
        assert!(value.get("sha").is_none());
    }
}
