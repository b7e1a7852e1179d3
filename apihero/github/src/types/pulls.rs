//! Pull request shapes.

use serde::{Deserialize, Serialize};

use super::issues::{Label, Milestone};
use super::reactions::ReactionRollup;
use super::repos::Repository;
use super::teams::TeamSimple;
use super::users::SimpleUser;

/// A pull request as listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestSimple {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
    pub number: u64,
    pub state: String,
    pub locked: bool,
    pub title: String,
    pub user: Option<SimpleUser>,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
    pub merged_at: Option<String>,
    pub merge_commit_sha: Option<String>,
    pub assignee: Option<SimpleUser>,
    #[serde(default)]
    pub assignees: Vec<SimpleUser>,
    #[serde(default)]
    pub requested_reviewers: Vec<SimpleUser>,
    #[serde(default)]
    pub requested_teams: Vec<TeamSimple>,
    pub head: PullRequestBranch,
    pub base: PullRequestBranch,
    pub author_association: String,
    #[serde(default)]
    pub draft: bool,
}

/// A pull request with merge state and diff counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(flatten)]
    pub summary: PullRequestSimple,
    pub merged: bool,
    pub mergeable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebaseable: Option<bool>,
    pub mergeable_state: String,
    pub merged_by: Option<SimpleUser>,
    pub comments: u32,
    pub review_comments: u32,
    pub maintainer_can_modify: bool,
    pub commits: u32,
    pub additions: u32,
    pub deletions: u32,
    pub changed_files: u32,
}

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestBranch {
    pub label: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub sha: String,
    pub user: Option<SimpleUser>,
    pub repo: Option<Box<Repository>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestReview {
    pub id: u64,
    pub node_id: String,
    pub user: Option<SimpleUser>,
    pub body: String,
    /// `APPROVED`, `CHANGES_REQUESTED`, `COMMENTED`, `DISMISSED` or `PENDING`.
    pub state: String,
    pub html_url: String,
    pub pull_request_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    pub commit_id: Option<String>,
    pub author_association: String,
}

/// A comment on a line of a pull request diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub pull_request_review_id: Option<u64>,
    pub diff_hunk: String,
    pub path: String,
    pub commit_id: String,
    pub original_commit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to_id: Option<u64>,
    pub user: SimpleUser,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
    pub html_url: String,
    pub pull_request_url: String,
    pub author_association: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_line: Option<u32>,
    /// `LEFT` or `RIGHT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<ReactionRollup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestMergeResult {
    pub sha: String,
    pub merged: bool,
    pub message: String,
}

/// Answer of the update-branch operation, which completes asynchronously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchUpdateAccepted {
    pub message: String,
    pub url: String,
}

/// Users and teams whose review has been requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequests {
    pub users: Vec<SimpleUser>,
    pub teams: Vec<TeamSimple>,
}
