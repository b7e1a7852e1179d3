//! Emoji reactions on issues, comments and releases.
//!
//! Every reactable subject exposes the same list, create and delete trio.
//! Creating a reaction that already exists answers `200` with the existing
//! one instead of `201`.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, NoContent, RestMethod, endpoint_input,
};

use crate::endpoint;
use crate::types::Reaction;

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct ListForIssueInput {
        path { owner: String, repo: String, issue_number: u64 }
        query {
            /// Only reactions of this kind.
            content: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateForIssueInput {
        path { owner: String, repo: String, issue_number: u64 }
        body {
            /// `+1`, `-1`, `laugh`, `confused`, `heart`, `hooray`, `rocket` or `eyes`.
            content: String,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DeleteForIssueInput {
        path { owner: String, repo: String, issue_number: u64, reaction_id: u64 }
    }
}

endpoint_input! {
    /// Reactions on an issue, review or commit comment.
    #[derive(Default)]
    pub struct ListForCommentInput {
        path { owner: String, repo: String, comment_id: u64 }
        query { content: Option<String>, per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateForCommentInput {
        path { owner: String, repo: String, comment_id: u64 }
        body { content: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DeleteForCommentInput {
        path { owner: String, repo: String, comment_id: u64, reaction_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListForReleaseInput {
        path { owner: String, repo: String, release_id: u64 }
        query { content: Option<String>, per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateForReleaseInput {
        path { owner: String, repo: String, release_id: u64 }
        body {
            /// Releases accept `+1`, `laugh`, `heart`, `hooray`, `rocket` and `eyes`.
            content: String,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DeleteForReleaseInput {
        path { owner: String, repo: String, release_id: u64, reaction_id: u64 }
    }
}

// =============================================================================
// Issues and issue comments
// =============================================================================

/// List reactions for an issue.
pub const LIST_FOR_ISSUE: ApiHeroEndpoint<ListForIssueInput, Vec<Reaction>, LinkHeader> = endpoint(
    "reactions/listForIssue",
    RestMethod::Get,
    "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
);

/// Create a reaction for an issue.
pub const CREATE_FOR_ISSUE: ApiHeroEndpoint<CreateForIssueInput, Reaction> = endpoint(
    "reactions/createForIssue",
    RestMethod::Post,
    "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
);

/// Delete a reaction from an issue.
///
/// Answers `204 No Content`.
pub const DELETE_FOR_ISSUE: ApiHeroEndpoint<DeleteForIssueInput, NoContent> = endpoint(
    "reactions/deleteForIssue",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/issues/{issue_number}/reactions/{reaction_id}",
);

/// List reactions for an issue comment.
pub const LIST_FOR_ISSUE_COMMENT: ApiHeroEndpoint<ListForCommentInput, Vec<Reaction>, LinkHeader> =
    endpoint(
        "reactions/listForIssueComment",
        RestMethod::Get,
        "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
    );

/// Create a reaction for an issue comment.
pub const CREATE_FOR_ISSUE_COMMENT: ApiHeroEndpoint<CreateForCommentInput, Reaction> = endpoint(
    "reactions/createForIssueComment",
    RestMethod::Post,
    "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
);

/// Delete a reaction from an issue comment.
///
/// Answers `204 No Content`.
pub const DELETE_FOR_ISSUE_COMMENT: ApiHeroEndpoint<DeleteForCommentInput, NoContent> = endpoint(
    "reactions/deleteForIssueComment",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions/{reaction_id}",
);

// =============================================================================
// Review and commit comments
// =============================================================================

/// List reactions for a pull request review comment.
pub const LIST_FOR_PULL_REQUEST_REVIEW_COMMENT: ApiHeroEndpoint<
    ListForCommentInput,
    Vec<Reaction>,
    LinkHeader,
> = endpoint(
    "reactions/listForPullRequestReviewComment",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions",
);

/// Create a reaction for a pull request review comment.
pub const CREATE_FOR_PULL_REQUEST_REVIEW_COMMENT: ApiHeroEndpoint<CreateForCommentInput, Reaction> =
    endpoint(
        "reactions/createForPullRequestReviewComment",
        RestMethod::Post,
        "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions",
    );

/// Delete a reaction from a pull request review comment.
///
/// Answers `204 No Content`.
pub const DELETE_FOR_PULL_REQUEST_COMMENT: ApiHeroEndpoint<DeleteForCommentInput, NoContent> =
    endpoint(
        "reactions/deleteForPullRequestComment",
        RestMethod::Delete,
        "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions/{reaction_id}",
    );

/// List reactions for a commit comment.
pub const LIST_FOR_COMMIT_COMMENT: ApiHeroEndpoint<ListForCommentInput, Vec<Reaction>, LinkHeader> =
    endpoint(
        "reactions/listForCommitComment",
        RestMethod::Get,
        "/repos/{owner}/{repo}/comments/{comment_id}/reactions",
    );

/// Create a reaction for a commit comment.
pub const CREATE_FOR_COMMIT_COMMENT: ApiHeroEndpoint<CreateForCommentInput, Reaction> = endpoint(
    "reactions/createForCommitComment",
    RestMethod::Post,
    "/repos/{owner}/{repo}/comments/{comment_id}/reactions",
);

/// Delete a reaction from a commit comment.
///
/// Answers `204 No Content`.
pub const DELETE_FOR_COMMIT_COMMENT: ApiHeroEndpoint<DeleteForCommentInput, NoContent> = endpoint(
    "reactions/deleteForCommitComment",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/comments/{comment_id}/reactions/{reaction_id}",
);

// =============================================================================
// Releases
// =============================================================================

/// List reactions for a release.
pub const LIST_FOR_RELEASE: ApiHeroEndpoint<ListForReleaseInput, Vec<Reaction>, LinkHeader> =
    endpoint(
        "reactions/listForRelease",
        RestMethod::Get,
        "/repos/{owner}/{repo}/releases/{release_id}/reactions",
    );

/// Create a reaction for a release.
pub const CREATE_FOR_RELEASE: ApiHeroEndpoint<CreateForReleaseInput, Reaction> = endpoint(
    "reactions/createForRelease",
    RestMethod::Post,
    "/repos/{owner}/{repo}/releases/{release_id}/reactions",
);

/// Delete a reaction from a release.
///
/// Answers `204 No Content`.
pub const DELETE_FOR_RELEASE: ApiHeroEndpoint<DeleteForReleaseInput, NoContent> = endpoint(
    "reactions/deleteForRelease",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/releases/{release_id}/reactions/{reaction_id}",
);

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST_FOR_ISSUE.meta(),
        CREATE_FOR_ISSUE.meta(),
        DELETE_FOR_ISSUE.meta(),
        LIST_FOR_ISSUE_COMMENT.meta(),
        CREATE_FOR_ISSUE_COMMENT.meta(),
        DELETE_FOR_ISSUE_COMMENT.meta(),
        LIST_FOR_PULL_REQUEST_REVIEW_COMMENT.meta(),
        CREATE_FOR_PULL_REQUEST_REVIEW_COMMENT.meta(),
        DELETE_FOR_PULL_REQUEST_COMMENT.meta(),
        LIST_FOR_COMMIT_COMMENT.meta(),
        CREATE_FOR_COMMIT_COMMENT.meta(),
        DELETE_FOR_COMMIT_COMMENT.meta(),
        LIST_FOR_RELEASE.meta(),
        CREATE_FOR_RELEASE.meta(),
        DELETE_FOR_RELEASE.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_has_every_reactions_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 15);
        assert!(all.iter().all(|e| e.resource() == "reactions"));
    }

    #[test]
    fn every_subject_has_list_create_and_delete() {
        let all = endpoints();
        for chunk in all.chunks(3) {
            assert_eq!(chunk[0].method, RestMethod::Get);
            assert!(chunk[0].is_paginated());
            assert_eq!(chunk[1].method, RestMethod::Post);
            assert_eq!(chunk[1].path, chunk[0].path);
            assert_eq!(chunk[2].method, RestMethod::Delete);
            assert_eq!(chunk[2].path, format!("{}/{{reaction_id}}", chunk[0].path));
        }
    }

    #[test]
    fn prepare_reaction_filter() {
        let request = LIST_FOR_ISSUE
            .prepare(&ListForIssueInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                issue_number: 1347,
                content: Some("+1".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(request.path, "/repos/octocat/Hello-World/issues/1347/reactions");
        assert_eq!(request.query, vec![("content".to_string(), "+1".to_string())]);
    }
}
