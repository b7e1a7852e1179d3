//! Repository shapes: the repository itself and the objects hanging off it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::users::SimpleUser;

/// A repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    pub owner: SimpleUser,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    /// `public`, `private` or `internal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseSimple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RepositoryPermissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pushed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
}

/// The caller's permissions on a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPermissions {
    pub admin: bool,
    pub pull: bool,
    pub push: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub triage: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseSimple {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: String,
}

/// A branch as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortBranch {
    pub name: String,
    pub commit: CommitRef,
    pub protected: bool,
}

/// A branch with its head commit and protection summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchWithProtection {
    pub name: String,
    pub commit: Commit,
    pub protected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    pub sha: String,
    pub url: String,
}

/// Protection settings on a branch. Only the commonly used parts are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchProtection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_status_checks: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_admins: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_pull_request_reviews: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<serde_json::Value>,
}

/// A commit as returned by the repository commits API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub commit: CommitDetail,
    pub author: Option<SimpleUser>,
    pub committer: Option<SimpleUser>,
    pub parents: Vec<CommitParent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CommitStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<DiffEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<Signature>,
    pub committer: Option<Signature>,
    pub comment_count: u32,
    pub tree: CommitRef,
}

/// Name, email and date of a git author or committer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitParent {
    pub sha: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    pub additions: u32,
    pub deletions: u32,
    pub total: u32,
}

/// One changed file in a commit, comparison or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub sha: String,
    pub filename: String,
    /// `added`, `removed`, `modified`, `renamed`, `copied`, `changed` or `unchanged`.
    pub status: String,
    pub additions: u32,
    pub deletions: u32,
    pub changes: u32,
    pub blob_url: String,
    pub raw_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_filename: Option<String>,
}

/// The result of comparing two commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitComparison {
    pub url: String,
    pub html_url: String,
    pub base_commit: Commit,
    pub merge_base_commit: Commit,
    /// `diverged`, `ahead`, `behind` or `identical`.
    pub status: String,
    pub ahead_by: u32,
    pub behind_by: u32,
    pub total_commits: u32,
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub files: Vec<DiffEntry>,
}

/// A file, directory, symlink or submodule in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// `file`, `dir`, `symlink` or `submodule`.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub url: String,
    pub html_url: Option<String>,
    pub git_url: Option<String>,
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submodule_git_url: Option<String>,
}

/// The contents endpoint answers with a single item for a file and a list
/// for a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Directory(Vec<ContentItem>),
    Item(Box<ContentItem>),
}

/// The result of creating, updating or deleting a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCommit {
    pub content: Option<ContentItem>,
    pub commit: serde_json::Value,
}

/// A release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub upload_url: String,
    pub tag_name: String,
    pub target_commitish: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub created_at: String,
    pub published_at: Option<String>,
    pub author: SimpleUser,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub browser_download_url: String,
    pub name: String,
    pub label: Option<String>,
    /// `uploaded` or `open`.
    pub state: String,
    pub content_type: String,
    pub size: u64,
    pub download_count: u64,
    pub created_at: String,
    pub updated_at: String,
    pub uploader: Option<SimpleUser>,
}

/// Release notes generated from merged pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes {
    pub name: String,
    pub body: String,
}

/// A lightweight tag as listed by the repository tags endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub commit: CommitRef,
    pub zipball_url: String,
    pub tarball_url: String,
    pub node_id: String,
}

/// A repository webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub id: u64,
    #[serde(rename = "type")]
    pub hook_type: String,
    pub name: String,
    pub active: bool,
    pub events: Vec<String>,
    pub config: HookConfig,
    pub updated_at: String,
    pub created_at: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliveries_url: Option<String>,
}

/// Delivery settings of a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `json` or `form`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// `"0"` or `"1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_ssl: Option<String>,
}

/// A deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub task: String,
    pub payload: serde_json::Value,
    pub environment: String,
    pub description: Option<String>,
    pub creator: Option<SimpleUser>,
    pub created_at: String,
    pub updated_at: String,
    pub statuses_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient_environment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_environment: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    /// `error`, `failure`, `inactive`, `pending`, `success`, `queued` or `in_progress`.
    pub state: String,
    pub creator: Option<SimpleUser>,
    pub description: String,
    #[serde(default)]
    pub environment: String,
    pub target_url: String,
    pub created_at: String,
    pub updated_at: String,
    pub deployment_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<String>,
}

/// A collaborator and their permissions on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub site_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RepositoryPermissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorPermission {
    /// `admin`, `write`, `read` or `none`.
    pub permission: String,
    pub role_name: String,
    pub user: Option<Collaborator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInvitation {
    pub id: u64,
    pub node_id: String,
    pub repository: serde_json::Value,
    pub invitee: Option<SimpleUser>,
    pub inviter: Option<SimpleUser>,
    /// `read`, `write`, `admin`, `triage` or `maintain`.
    pub permissions: String,
    pub created_at: String,
    pub url: String,
    pub html_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

/// A contributor and their commit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub account_type: String,
    pub contributions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Bytes of code per language.
pub type Languages = HashMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topics {
    pub names: Vec<String>,
}

/// A commit status reported by an external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub avatar_url: Option<String>,
    /// `error`, `failure`, `pending` or `success`.
    pub state: String,
    pub description: Option<String>,
    pub target_url: Option<String>,
    pub context: String,
    pub created_at: String,
    pub updated_at: String,
    pub creator: Option<SimpleUser>,
}

/// The latest status of every context for a ref.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedCommitStatus {
    pub state: String,
    pub statuses: Vec<CommitStatus>,
    pub sha: String,
    pub total_count: u32,
    pub repository: serde_json::Value,
    pub commit_url: String,
    pub url: String,
}

/// A deploy key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployKey {
    pub id: u64,
    pub key: String,
    pub url: String,
    pub title: String,
    pub verified: bool,
    pub created_at: String,
    pub read_only: bool,
}

/// GitHub Pages configuration of a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub url: String,
    /// `built`, `building` or `errored`.
    pub status: Option<String>,
    pub cname: Option<String>,
    pub custom_404: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
    pub public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_enforced: Option<bool>,
}

/// A repository fork or generated repository in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedUpstream {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// `merge`, `fast-forward` or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_content_is_single_item() {
        let content: Content = serde_json::from_value(json!({
            "type": "file",
            "encoding": "base64",
            "size": 5362,
            "name": "README.md",
            "path": "README.md",
            "content": "IyBZb2dhIEJvmsgaW4gcHJvZ3Jlc3MhIEZlZWwgdAoKOndhcm5pbmc6IFdvcmsg",
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
            "url": "https://api.github.com/repos/octokit/octokit.rb/contents/README.md",
            "git_url": "https://api.github.com/repos/octokit/octokit.rb/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
            "html_url": "https://github.com/octokit/octokit.rb/blob/master/README.md",
            "download_url": "https://raw.githubusercontent.com/octokit/octokit.rb/master/README.md"
        }))
        .unwrap();

        match content {
            Content::Item(item) => {
                assert_eq!(item.kind, "file");
                assert_eq!(item.encoding.as_deref(), Some("base64"));
            }
            Content::Directory(_) => panic!("Expected a single file"),
        }
    }

    #[test]
    fn directory_content_is_a_list() {
        let content: Content = serde_json::from_value(json!([{
            "type": "dir",
            "size": 0,
            "name": "lib",
            "path": "lib",
            "sha": "a84d88e7554fc1fa21bcbc4efae3c782a70d2b9d",
            "url": "https://api.github.com/repos/octokit/octokit.rb/contents/lib",
            "git_url": null,
            "html_url": null,
            "download_url": null
        }]))
        .unwrap();

        assert!(matches!(content, Content::Directory(items) if items.len() == 1));
    }

    #[test]
    fn deployment_renames_ref() {
        let deployment = json!({
            "id": 1,
            "node_id": "MDEwOkRlcGxveW1lbnQx",
            "url": "https://api.github.com/repos/octocat/example/deployments/1",
            "sha": "a84d88e7554fc1fa21bcbc4efae3c782a70d2b9d",
            "ref": "topic-branch",
            "task": "deploy",
            "payload": {},
            "environment": "production",
            "description": "Deploy request from hubot",
            "creator": null,
            "created_at": "2012-07-20T01:19:13Z",
            "updated_at": "2012-07-20T01:19:13Z",
            "statuses_url": "https://api.github.com/repos/octocat/example/deployments/1/statuses"
        });

        let parsed: Deployment = serde_json::from_value(deployment).unwrap();
        assert_eq!(parsed.git_ref, "topic-branch");
        assert!(parsed.transient_environment.is_none());
    }
}
