//! Pull requests, reviews, review requests and review comments.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::types::{
    BranchUpdateAccepted, Commit, DiffEntry, PullRequest, PullRequestMergeResult,
    PullRequestReview, PullRequestSimple, ReviewComment, ReviewRequests,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct ListInput {
        path { owner: String, repo: String }
        query {
            /// `open`, `closed` or `all`.
            state: Option<String>,
            /// `user:ref-name` or `organization:ref-name`.
            head: Option<String>,
            base: Option<String>,
            /// `created`, `updated`, `popularity` or `long-running`.
            sort: Option<String>,
            /// `asc` or `desc`. Defaults to `desc` when sorting by `created`.
            direction: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct PullInput {
        path { owner: String, repo: String, pull_number: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct PullPageInput {
        path { owner: String, repo: String, pull_number: u64 }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateInput {
        path { owner: String, repo: String }
        body {
            title: Option<String>,
            /// Branch holding the changes; `username:branch` for cross-repository pulls.
            head: String,
            head_repo: Option<String>,
            base: String,
            body: Option<String>,
            maintainer_can_modify: Option<bool>,
            draft: Option<bool>,
            /// Converts an existing issue into a pull request instead of using `title`.
            issue: Option<u64>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInput {
        path { owner: String, repo: String, pull_number: u64 }
        body {
            title: Option<String>,
            body: Option<String>,
            /// `open` or `closed`.
            state: Option<String>,
            base: Option<String>,
            maintainer_can_modify: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct MergeInput {
        path { owner: String, repo: String, pull_number: u64 }
        body {
            commit_title: Option<String>,
            commit_message: Option<String>,
            /// Head SHA the merge must match.
            sha: Option<String>,
            /// `merge`, `squash` or `rebase`.
            merge_method: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateBranchInput {
        path { owner: String, repo: String, pull_number: u64 }
        body { expected_head_sha: Option<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReviewersInput {
        path { owner: String, repo: String, pull_number: u64 }
        body {
            reviewers: Option<Vec<String>>,
            team_reviewers: Option<Vec<String>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReviewInput {
        path { owner: String, repo: String, pull_number: u64, review_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReviewPageInput {
        path { owner: String, repo: String, pull_number: u64, review_id: u64 }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateReviewInput {
        path { owner: String, repo: String, pull_number: u64 }
        body {
            commit_id: Option<String>,
            body: Option<String>,
            /// `APPROVE`, `REQUEST_CHANGES` or `COMMENT`. Omit to leave the review pending.
            event: Option<String>,
            /// Draft review comments: `path`, `position` or `line`, `body`.
            comments: Option<Vec<serde_json::Value>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateReviewInput {
        path { owner: String, repo: String, pull_number: u64, review_id: u64 }
        body { body: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SubmitReviewInput {
        path { owner: String, repo: String, pull_number: u64, review_id: u64 }
        body {
            body: Option<String>,
            /// `APPROVE`, `REQUEST_CHANGES` or `COMMENT`.
            event: String,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DismissReviewInput {
        path { owner: String, repo: String, pull_number: u64, review_id: u64 }
        body {
            message: String,
            /// Must be `DISMISS` when given.
            event: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListReviewCommentsInput {
        path { owner: String, repo: String, pull_number: u64 }
        query {
            /// `created` or `updated`.
            sort: Option<String>,
            direction: Option<String>,
            since: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListReviewCommentsForRepoInput {
        path { owner: String, repo: String }
        query {
            /// `created`, `updated` or `created_at`.
            sort: Option<String>,
            direction: Option<String>,
            since: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReviewCommentInput {
        path { owner: String, repo: String, comment_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateReviewCommentInput {
        path { owner: String, repo: String, pull_number: u64 }
        body {
            body: String,
            commit_id: String,
            path: String,
            line: Option<u32>,
            /// `LEFT` or `RIGHT`.
            side: Option<String>,
            start_line: Option<u32>,
            start_side: Option<String>,
            in_reply_to: Option<u64>,
            /// `line` or `file`.
            subject_type: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateReplyInput {
        path { owner: String, repo: String, pull_number: u64, comment_id: u64 }
        body { body: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateReviewCommentInput {
        path { owner: String, repo: String, comment_id: u64 }
        body { body: String }
    }
}

// =============================================================================
// Pull requests
// =============================================================================

/// List pull requests.
pub const LIST: ApiHeroEndpoint<ListInput, Vec<PullRequestSimple>, LinkHeader> =
    endpoint("pulls/list", RestMethod::Get, "/repos/{owner}/{repo}/pulls");

/// Get a pull request. `mergeable` is null until GitHub has computed it.
pub const GET: ApiHeroEndpoint<PullInput, PullRequest> =
    endpoint("pulls/get", RestMethod::Get, "/repos/{owner}/{repo}/pulls/{pull_number}");

/// Create a pull request.
pub const CREATE: ApiHeroEndpoint<CreateInput, PullRequest, LocationHeader> =
    endpoint("pulls/create", RestMethod::Post, "/repos/{owner}/{repo}/pulls");

/// Update a pull request.
pub const UPDATE: ApiHeroEndpoint<UpdateInput, PullRequest> =
    endpoint("pulls/update", RestMethod::Patch, "/repos/{owner}/{repo}/pulls/{pull_number}");

/// List commits on a pull request (at most 250).
pub const LIST_COMMITS: ApiHeroEndpoint<PullPageInput, Vec<Commit>, LinkHeader> = endpoint(
    "pulls/listCommits",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/{pull_number}/commits",
);

/// List files changed by a pull request (at most 3000).
pub const LIST_FILES: ApiHeroEndpoint<PullPageInput, Vec<DiffEntry>, LinkHeader> = endpoint(
    "pulls/listFiles",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/{pull_number}/files",
);

/// Check if a pull request has been merged. Answers `204` if so, `404` otherwise.
pub const CHECK_IF_MERGED: ApiHeroEndpoint<PullInput, NoContent> = endpoint(
    "pulls/checkIfMerged",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
);

/// Merge a pull request.
pub const MERGE: ApiHeroEndpoint<MergeInput, PullRequestMergeResult> = endpoint(
    "pulls/merge",
    RestMethod::Put,
    "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
);

/// Update a pull request branch with the latest upstream changes.
pub const UPDATE_BRANCH: ApiHeroEndpoint<UpdateBranchInput, BranchUpdateAccepted> = endpoint(
    "pulls/updateBranch",
    RestMethod::Put,
    "/repos/{owner}/{repo}/pulls/{pull_number}/update-branch",
);

// =============================================================================
// Review requests
// =============================================================================

/// Get users and teams whose review is requested.
pub const LIST_REQUESTED_REVIEWERS: ApiHeroEndpoint<PullInput, ReviewRequests> = endpoint(
    "pulls/listRequestedReviewers",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
);

/// Request reviewers for a pull request.
pub const REQUEST_REVIEWERS: ApiHeroEndpoint<ReviewersInput, PullRequestSimple> = endpoint(
    "pulls/requestReviewers",
    RestMethod::Post,
    "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
);

/// Remove requested reviewers from a pull request.
pub const REMOVE_REQUESTED_REVIEWERS: ApiHeroEndpoint<ReviewersInput, PullRequestSimple> =
    endpoint(
        "pulls/removeRequestedReviewers",
        RestMethod::Delete,
        "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
    );

// =============================================================================
// Reviews
// =============================================================================

/// List reviews for a pull request, oldest first.
pub const LIST_REVIEWS: ApiHeroEndpoint<PullPageInput, Vec<PullRequestReview>, LinkHeader> =
    endpoint(
        "pulls/listReviews",
        RestMethod::Get,
        "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
    );

/// Get a review for a pull request.
pub const GET_REVIEW: ApiHeroEndpoint<ReviewInput, PullRequestReview> = endpoint(
    "pulls/getReview",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
);

/// Create a review. Without `event` the review stays `PENDING`.
pub const CREATE_REVIEW: ApiHeroEndpoint<CreateReviewInput, PullRequestReview> = endpoint(
    "pulls/createReview",
    RestMethod::Post,
    "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
);

/// Update the summary comment of a review.
pub const UPDATE_REVIEW: ApiHeroEndpoint<UpdateReviewInput, PullRequestReview> = endpoint(
    "pulls/updateReview",
    RestMethod::Put,
    "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
);

/// Delete a pending review.
pub const DELETE_PENDING_REVIEW: ApiHeroEndpoint<ReviewInput, PullRequestReview> = endpoint(
    "pulls/deletePendingReview",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
);

/// Submit a pending review.
pub const SUBMIT_REVIEW: ApiHeroEndpoint<SubmitReviewInput, PullRequestReview> = endpoint(
    "pulls/submitReview",
    RestMethod::Post,
    "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/events",
);

/// Dismiss a review. Requires branch protection with review dismissal.
pub const DISMISS_REVIEW: ApiHeroEndpoint<DismissReviewInput, PullRequestReview> = endpoint(
    "pulls/dismissReview",
    RestMethod::Put,
    "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/dismissals",
);

/// List comments for a review.
pub const LIST_COMMENTS_FOR_REVIEW: ApiHeroEndpoint<ReviewPageInput, Vec<ReviewComment>, LinkHeader> =
    endpoint(
        "pulls/listCommentsForReview",
        RestMethod::Get,
        "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/comments",
    );

// =============================================================================
// Review comments
// =============================================================================

/// List review comments on a pull request.
pub const LIST_REVIEW_COMMENTS: ApiHeroEndpoint<
    ListReviewCommentsInput,
    Vec<ReviewComment>,
    LinkHeader,
> = endpoint(
    "pulls/listReviewComments",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
);

/// List review comments across a repository.
pub const LIST_REVIEW_COMMENTS_FOR_REPO: ApiHeroEndpoint<
    ListReviewCommentsForRepoInput,
    Vec<ReviewComment>,
    LinkHeader,
> = endpoint(
    "pulls/listReviewCommentsForRepo",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/comments",
);

/// Get a review comment.
pub const GET_REVIEW_COMMENT: ApiHeroEndpoint<ReviewCommentInput, ReviewComment> = endpoint(
    "pulls/getReviewComment",
    RestMethod::Get,
    "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
);

/// Create a review comment on a line or file of the diff.
pub const CREATE_REVIEW_COMMENT: ApiHeroEndpoint<
    CreateReviewCommentInput,
    ReviewComment,
    LocationHeader,
> = endpoint(
    "pulls/createReviewComment",
    RestMethod::Post,
    "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
);

/// Reply to a top-level review comment.
pub const CREATE_REPLY_FOR_REVIEW_COMMENT: ApiHeroEndpoint<
    CreateReplyInput,
    ReviewComment,
    LocationHeader,
> = endpoint(
    "pulls/createReplyForReviewComment",
    RestMethod::Post,
    "/repos/{owner}/{repo}/pulls/{pull_number}/comments/{comment_id}/replies",
);

/// Update a review comment.
pub const UPDATE_REVIEW_COMMENT: ApiHeroEndpoint<UpdateReviewCommentInput, ReviewComment> =
    endpoint(
        "pulls/updateReviewComment",
        RestMethod::Patch,
        "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
    );

/// Delete a review comment.
///
/// Answers `204 No Content`.
pub const DELETE_REVIEW_COMMENT: ApiHeroEndpoint<ReviewCommentInput, NoContent> = endpoint(
    "pulls/deleteReviewComment",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
);

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST.meta(),
        GET.meta(),
        CREATE.meta(),
        UPDATE.meta(),
        LIST_COMMITS.meta(),
        LIST_FILES.meta(),
        CHECK_IF_MERGED.meta(),
        MERGE.meta(),
        UPDATE_BRANCH.meta(),
        LIST_REQUESTED_REVIEWERS.meta(),
        REQUEST_REVIEWERS.meta(),
        REMOVE_REQUESTED_REVIEWERS.meta(),
        LIST_REVIEWS.meta(),
        GET_REVIEW.meta(),
        CREATE_REVIEW.meta(),
        UPDATE_REVIEW.meta(),
        DELETE_PENDING_REVIEW.meta(),
        SUBMIT_REVIEW.meta(),
        DISMISS_REVIEW.meta(),
        LIST_COMMENTS_FOR_REVIEW.meta(),
        LIST_REVIEW_COMMENTS.meta(),
        LIST_REVIEW_COMMENTS_FOR_REPO.meta(),
        GET_REVIEW_COMMENT.meta(),
        CREATE_REVIEW_COMMENT.meta(),
        CREATE_REPLY_FOR_REVIEW_COMMENT.meta(),
        UPDATE_REVIEW_COMMENT.meta(),
        DELETE_REVIEW_COMMENT.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> EndpointMeta {
        endpoints().into_iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn module_has_every_pulls_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 27);
        assert!(all.iter().all(|e| e.resource() == "pulls"));
    }

    #[test]
    fn merge_is_a_put() {
        let endpoint = find("pulls/merge");
        assert_eq!(endpoint.method, RestMethod::Put);
        assert_eq!(endpoint.path, "/repos/{owner}/{repo}/pulls/{pull_number}/merge");
        assert!(endpoint.body_params.contains(&"merge_method"));
    }

    #[test]
    fn check_if_merged_shares_the_merge_path() {
        assert_eq!(find("pulls/checkIfMerged").path, MERGE.path());
        assert_eq!(CHECK_IF_MERGED.method(), RestMethod::Get);
    }

    #[test]
    fn reviews_are_paginated() {
        assert!(find("pulls/listReviews").is_paginated());
        assert!(find("pulls/listCommentsForReview").is_paginated());
        assert!(!find("pulls/getReview").is_paginated());
    }

    #[test]
    fn prepare_merge_request() {
        let request = MERGE
            .prepare(&MergeInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                pull_number: 1347,
                merge_method: Some("squash".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(request.path, "/repos/octocat/Hello-World/pulls/1347/merge");
        assert_eq!(request.body.unwrap()["merge_method"], "squash");
    }
}
