//! Issues, issue comments and events, labels, milestones and assignees.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::params::RepoPageInput;
use crate::types::{Issue, IssueComment, IssueEvent, Label, Milestone, SimpleUser, TimelineEvent};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    /// Filters shared by the cross-repository issue listings.
    #[derive(Default)]
    pub struct ListIssuesInput {
        query {
            /// `assigned`, `created`, `mentioned`, `subscribed`, `repos` or `all`.
            filter: Option<String>,
            /// `open`, `closed` or `all`.
            state: Option<String>,
            /// Comma-separated label names.
            labels: Option<Vec<String>>,
            /// `created`, `updated` or `comments`.
            sort: Option<String>,
            /// `asc` or `desc`.
            direction: Option<String>,
            /// Only issues updated at or after this ISO 8601 timestamp.
            since: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListForOrgInput {
        path { org: String }
        query {
            filter: Option<String>,
            state: Option<String>,
            labels: Option<Vec<String>>,
            /// `created`, `updated` or `comments`.
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
    pub struct ListForRepoInput {
        path { owner: String, repo: String }
        query {
            /// A milestone number, `*` or `none`.
            milestone: Option<String>,
            /// `open` (the default), `closed` or `all`.
            state: Option<String>,
            /// A login, `none` for unassigned issues or `*` for any assignee.
            assignee: Option<String>,
            creator: Option<String>,
            mentioned: Option<String>,
            labels: Option<Vec<String>>,
            /// `created`, `updated` or `comments`.
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
    pub struct IssueInput {
        path { owner: String, repo: String, issue_number: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct IssuePageInput {
        path { owner: String, repo: String, issue_number: u64 }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateInput {
        path { owner: String, repo: String }
        body {
            title: String,
            body: Option<String>,
            milestone: Option<u64>,
            labels: Option<Vec<String>>,
            assignees: Option<Vec<String>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInput {
        path { owner: String, repo: String, issue_number: u64 }
        body {
            title: Option<String>,
            body: Option<String>,
            /// `open` or `closed`.
            state: Option<String>,
            /// `completed`, `not_planned` or `reopened`.
            state_reason: Option<String>,
            milestone: Option<u64>,
            labels: Option<Vec<String>>,
            assignees: Option<Vec<String>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct LockInput {
        path { owner: String, repo: String, issue_number: u64 }
        body {
            /// `off-topic`, `too heated`, `resolved` or `spam`.
            lock_reason: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListCommentsInput {
        path { owner: String, repo: String, issue_number: u64 }
        query {
            since: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListCommentsForRepoInput {
        path { owner: String, repo: String }
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
    pub struct CommentInput {
        path { owner: String, repo: String, comment_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateCommentInput {
        path { owner: String, repo: String, issue_number: u64 }
        body { body: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateCommentInput {
        path { owner: String, repo: String, comment_id: u64 }
        body { body: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct EventInput {
        path { owner: String, repo: String, event_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct LabelInput {
        path { owner: String, repo: String, name: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateLabelInput {
        path { owner: String, repo: String }
        body {
            name: String,
            color: Option<String>,
            description: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateLabelInput {
        path { owner: String, repo: String, name: String }
        body {
            new_name: Option<String>,
            color: Option<String>,
            description: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct LabelsInput {
        path { owner: String, repo: String, issue_number: u64 }
        body { labels: Vec<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RemoveLabelInput {
        path { owner: String, repo: String, issue_number: u64, name: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct MilestoneInput {
        path { owner: String, repo: String, milestone_number: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct MilestonePageInput {
        path { owner: String, repo: String, milestone_number: u64 }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListMilestonesInput {
        path { owner: String, repo: String }
        query {
            /// `open` (the default), `closed` or `all`.
            state: Option<String>,
            /// `due_on` or `completeness`.
            sort: Option<String>,
            direction: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateMilestoneInput {
        path { owner: String, repo: String }
        body {
            title: String,
            /// `open` or `closed`.
            state: Option<String>,
            description: Option<String>,
            /// ISO 8601 timestamp.
            due_on: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateMilestoneInput {
        path { owner: String, repo: String, milestone_number: u64 }
        body {
            title: Option<String>,
            /// `open` or `closed`.
            state: Option<String>,
            description: Option<String>,
            due_on: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct AssigneeInput {
        path { owner: String, repo: String, assignee: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct AssigneesInput {
        path { owner: String, repo: String, issue_number: u64 }
        body { assignees: Vec<String> }
    }
}

// =============================================================================
// Issues
// =============================================================================

/// List issues assigned to the authenticated user across all visible repositories.
///
/// Pull requests come back as issues carrying a `pull_request` key.
/// `filter` defaults to `assigned`.
pub const LIST: ApiHeroEndpoint<ListIssuesInput, Vec<Issue>, LinkHeader> =
    endpoint("issues/list", RestMethod::Get, "/issues");

/// List issues across owned and member repositories of the authenticated user.
pub const LIST_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<ListIssuesInput, Vec<Issue>, LinkHeader> =
    endpoint("issues/listForAuthenticatedUser", RestMethod::Get, "/user/issues");

/// List organization issues assigned to the authenticated user.
pub const LIST_FOR_ORG: ApiHeroEndpoint<ListForOrgInput, Vec<Issue>, LinkHeader> =
    endpoint("issues/listForOrg", RestMethod::Get, "/orgs/{org}/issues");

/// List repository issues. Pull requests are included.
pub const LIST_FOR_REPO: ApiHeroEndpoint<ListForRepoInput, Vec<Issue>, LinkHeader> =
    endpoint("issues/listForRepo", RestMethod::Get, "/repos/{owner}/{repo}/issues");

/// Get an issue. A transferred issue answers `301`, a deleted one `410`.
pub const GET: ApiHeroEndpoint<IssueInput, Issue> =
    endpoint("issues/get", RestMethod::Get, "/repos/{owner}/{repo}/issues/{issue_number}");

/// Create an issue.
///
/// Without push access, `milestone`, `labels` and `assignees` are dropped
/// silently. Creating content quickly can trip the secondary rate limit.
pub const CREATE: ApiHeroEndpoint<CreateInput, Issue, LocationHeader> =
    endpoint("issues/create", RestMethod::Post, "/repos/{owner}/{repo}/issues");

/// Update an issue.
///
/// `labels` and `assignees` replace the current sets; an empty list clears
/// them. Closing with `state_reason` records why.
pub const UPDATE: ApiHeroEndpoint<UpdateInput, Issue> =
    endpoint("issues/update", RestMethod::Patch, "/repos/{owner}/{repo}/issues/{issue_number}");

/// Lock an issue's conversation. Requires push access. Answers `204 No Content`.
pub const LOCK: ApiHeroEndpoint<LockInput, NoContent> = endpoint(
    "issues/lock",
    RestMethod::Put,
    "/repos/{owner}/{repo}/issues/{issue_number}/lock",
);

/// Unlock an issue's conversation. Requires push access. Answers `204 No Content`.
pub const UNLOCK: ApiHeroEndpoint<IssueInput, NoContent> = endpoint(
    "issues/unlock",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/issues/{issue_number}/lock",
);

// =============================================================================
// Comments
// =============================================================================

/// List comments on an issue, oldest first.
pub const LIST_COMMENTS: ApiHeroEndpoint<ListCommentsInput, Vec<IssueComment>, LinkHeader> =
    endpoint(
        "issues/listComments",
        RestMethod::Get,
        "/repos/{owner}/{repo}/issues/{issue_number}/comments",
    );

/// List issue comments across a repository.
pub const LIST_COMMENTS_FOR_REPO: ApiHeroEndpoint<
    ListCommentsForRepoInput,
    Vec<IssueComment>,
    LinkHeader,
> = endpoint(
    "issues/listCommentsForRepo",
    RestMethod::Get,
    "/repos/{owner}/{repo}/issues/comments",
);

/// Get an issue comment.
pub const GET_COMMENT: ApiHeroEndpoint<CommentInput, IssueComment> = endpoint(
    "issues/getComment",
    RestMethod::Get,
    "/repos/{owner}/{repo}/issues/comments/{comment_id}",
);

/// Create an issue comment.
pub const CREATE_COMMENT: ApiHeroEndpoint<CreateCommentInput, IssueComment, LocationHeader> =
    endpoint(
        "issues/createComment",
        RestMethod::Post,
        "/repos/{owner}/{repo}/issues/{issue_number}/comments",
    );

/// Update an issue comment.
pub const UPDATE_COMMENT: ApiHeroEndpoint<UpdateCommentInput, IssueComment> = endpoint(
    "issues/updateComment",
    RestMethod::Patch,
    "/repos/{owner}/{repo}/issues/comments/{comment_id}",
);

/// Delete an issue comment.
///
/// Answers `204 No Content`.
pub const DELETE_COMMENT: ApiHeroEndpoint<CommentInput, NoContent> = endpoint(
    "issues/deleteComment",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/issues/comments/{comment_id}",
);

// =============================================================================
// Events
// =============================================================================

/// List events on an issue.
pub const LIST_EVENTS: ApiHeroEndpoint<IssuePageInput, Vec<IssueEvent>, LinkHeader> = endpoint(
    "issues/listEvents",
    RestMethod::Get,
    "/repos/{owner}/{repo}/issues/{issue_number}/events",
);

/// List issue events across a repository.
pub const LIST_EVENTS_FOR_REPO: ApiHeroEndpoint<RepoPageInput, Vec<IssueEvent>, LinkHeader> =
    endpoint("issues/listEventsForRepo", RestMethod::Get, "/repos/{owner}/{repo}/issues/events");

/// Get an issue event.
pub const GET_EVENT: ApiHeroEndpoint<EventInput, IssueEvent> = endpoint(
    "issues/getEvent",
    RestMethod::Get,
    "/repos/{owner}/{repo}/issues/events/{event_id}",
);

/// List timeline events for an issue.
pub const LIST_EVENTS_FOR_TIMELINE: ApiHeroEndpoint<IssuePageInput, Vec<TimelineEvent>, LinkHeader> =
    endpoint(
        "issues/listEventsForTimeline",
        RestMethod::Get,
        "/repos/{owner}/{repo}/issues/{issue_number}/timeline",
    );

// =============================================================================
// Labels
// =============================================================================

/// List labels for a repository.
pub const LIST_LABELS_FOR_REPO: ApiHeroEndpoint<RepoPageInput, Vec<Label>, LinkHeader> =
    endpoint("issues/listLabelsForRepo", RestMethod::Get, "/repos/{owner}/{repo}/labels");

/// Get a label.
pub const GET_LABEL: ApiHeroEndpoint<LabelInput, Label> =
    endpoint("issues/getLabel", RestMethod::Get, "/repos/{owner}/{repo}/labels/{name}");

/// Create a label. `color` is a hex code without the leading `#`.
pub const CREATE_LABEL: ApiHeroEndpoint<CreateLabelInput, Label, LocationHeader> =
    endpoint("issues/createLabel", RestMethod::Post, "/repos/{owner}/{repo}/labels");

/// Update a label. `new_name` renames it.
pub const UPDATE_LABEL: ApiHeroEndpoint<UpdateLabelInput, Label> =
    endpoint("issues/updateLabel", RestMethod::Patch, "/repos/{owner}/{repo}/labels/{name}");

/// Delete a label.
///
/// Answers `204 No Content`.
pub const DELETE_LABEL: ApiHeroEndpoint<LabelInput, NoContent> =
    endpoint("issues/deleteLabel", RestMethod::Delete, "/repos/{owner}/{repo}/labels/{name}");

/// List labels on an issue.
pub const LIST_LABELS_ON_ISSUE: ApiHeroEndpoint<IssuePageInput, Vec<Label>, LinkHeader> =
    endpoint(
        "issues/listLabelsOnIssue",
        RestMethod::Get,
        "/repos/{owner}/{repo}/issues/{issue_number}/labels",
    );

/// Add labels to an issue. Names unknown to the repository are created.
pub const ADD_LABELS: ApiHeroEndpoint<LabelsInput, Vec<Label>> = endpoint(
    "issues/addLabels",
    RestMethod::Post,
    "/repos/{owner}/{repo}/issues/{issue_number}/labels",
);

/// Replace every label on an issue. An empty list removes them all.
pub const SET_LABELS: ApiHeroEndpoint<LabelsInput, Vec<Label>> = endpoint(
    "issues/setLabels",
    RestMethod::Put,
    "/repos/{owner}/{repo}/issues/{issue_number}/labels",
);

/// Remove a label from an issue. Answers with the remaining labels, or `404`
/// when the label is not on the issue.
pub const REMOVE_LABEL: ApiHeroEndpoint<RemoveLabelInput, Vec<Label>> = endpoint(
    "issues/removeLabel",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/issues/{issue_number}/labels/{name}",
);

/// Remove all labels from an issue.
///
/// Answers `204 No Content`.
pub const REMOVE_ALL_LABELS: ApiHeroEndpoint<IssueInput, NoContent> = endpoint(
    "issues/removeAllLabels",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/issues/{issue_number}/labels",
);

/// List labels on the issues of a milestone.
pub const LIST_LABELS_FOR_MILESTONE: ApiHeroEndpoint<MilestonePageInput, Vec<Label>, LinkHeader> =
    endpoint(
        "issues/listLabelsForMilestone",
        RestMethod::Get,
        "/repos/{owner}/{repo}/milestones/{milestone_number}/labels",
    );

// =============================================================================
// Milestones
// =============================================================================

/// List milestones. Sorted by `due_on` unless `sort` says otherwise.
pub const LIST_MILESTONES: ApiHeroEndpoint<ListMilestonesInput, Vec<Milestone>, LinkHeader> =
    endpoint("issues/listMilestones", RestMethod::Get, "/repos/{owner}/{repo}/milestones");

/// Get a milestone.
pub const GET_MILESTONE: ApiHeroEndpoint<MilestoneInput, Milestone> = endpoint(
    "issues/getMilestone",
    RestMethod::Get,
    "/repos/{owner}/{repo}/milestones/{milestone_number}",
);

/// Create a milestone.
pub const CREATE_MILESTONE: ApiHeroEndpoint<CreateMilestoneInput, Milestone, LocationHeader> =
    endpoint("issues/createMilestone", RestMethod::Post, "/repos/{owner}/{repo}/milestones");

/// Update a milestone.
pub const UPDATE_MILESTONE: ApiHeroEndpoint<UpdateMilestoneInput, Milestone> = endpoint(
    "issues/updateMilestone",
    RestMethod::Patch,
    "/repos/{owner}/{repo}/milestones/{milestone_number}",
);

/// Delete a milestone.
///
/// Answers `204 No Content`.
pub const DELETE_MILESTONE: ApiHeroEndpoint<MilestoneInput, NoContent> = endpoint(
    "issues/deleteMilestone",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/milestones/{milestone_number}",
);

// =============================================================================
// Assignees
// =============================================================================

/// List users that issues can be assigned to.
pub const LIST_ASSIGNEES: ApiHeroEndpoint<RepoPageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("issues/listAssignees", RestMethod::Get, "/repos/{owner}/{repo}/assignees");

/// Check if a user can be assigned. Answers `204` if so, `404` otherwise.
pub const CHECK_USER_CAN_BE_ASSIGNED: ApiHeroEndpoint<AssigneeInput, NoContent> = endpoint(
    "issues/checkUserCanBeAssigned",
    RestMethod::Get,
    "/repos/{owner}/{repo}/assignees/{assignee}",
);

/// Add assignees to an issue. At most ten assignees are kept.
pub const ADD_ASSIGNEES: ApiHeroEndpoint<AssigneesInput, Issue> = endpoint(
    "issues/addAssignees",
    RestMethod::Post,
    "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
);

/// Remove assignees from an issue. Logins that are not assigned are ignored.
pub const REMOVE_ASSIGNEES: ApiHeroEndpoint<AssigneesInput, Issue> = endpoint(
    "issues/removeAssignees",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
);

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST.meta(),
        LIST_FOR_AUTHENTICATED_USER.meta(),
        LIST_FOR_ORG.meta(),
        LIST_FOR_REPO.meta(),
        GET.meta(),
        CREATE.meta(),
        UPDATE.meta(),
        LOCK.meta(),
        UNLOCK.meta(),
        LIST_COMMENTS.meta(),
        LIST_COMMENTS_FOR_REPO.meta(),
        GET_COMMENT.meta(),
        CREATE_COMMENT.meta(),
        UPDATE_COMMENT.meta(),
        DELETE_COMMENT.meta(),
        LIST_EVENTS.meta(),
        LIST_EVENTS_FOR_REPO.meta(),
        GET_EVENT.meta(),
        LIST_EVENTS_FOR_TIMELINE.meta(),
        LIST_LABELS_FOR_REPO.meta(),
        GET_LABEL.meta(),
        CREATE_LABEL.meta(),
        UPDATE_LABEL.meta(),
        DELETE_LABEL.meta(),
        LIST_LABELS_ON_ISSUE.meta(),
        ADD_LABELS.meta(),
        SET_LABELS.meta(),
        REMOVE_LABEL.meta(),
        REMOVE_ALL_LABELS.meta(),
        LIST_LABELS_FOR_MILESTONE.meta(),
        LIST_MILESTONES.meta(),
        GET_MILESTONE.meta(),
        CREATE_MILESTONE.meta(),
        UPDATE_MILESTONE.meta(),
        DELETE_MILESTONE.meta(),
        LIST_ASSIGNEES.meta(),
        CHECK_USER_CAN_BE_ASSIGNED.meta(),
        ADD_ASSIGNEES.meta(),
        REMOVE_ASSIGNEES.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn find(id: &str) -> EndpointMeta {
        endpoints().into_iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn module_has_every_issues_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 39);
        assert!(all.iter().all(|e| e.resource() == "issues"));
    }

    #[test]
    fn list_for_repo_joins_labels() {
        let request = LIST_FOR_REPO
            .prepare(&ListForRepoInput {
                owner: "rust-lang".into(),
                repo: "rust".into(),
                state: Some("open".into()),
                labels: Some(vec!["C-bug".into(), "T-compiler".into()]),
                per_page: Some(100),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(request.path, "/repos/rust-lang/rust/issues");
        assert_eq!(
            request.query,
            vec![
                ("state".to_string(), "open".to_string()),
                ("labels".to_string(), "C-bug,T-compiler".to_string()),
                ("per_page".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn create_issue() {
        let endpoint = find("issues/create");
        assert_eq!(endpoint.method, RestMethod::Post);
        assert_eq!(endpoint.path, "/repos/{owner}/{repo}/issues");
        assert_eq!(
            endpoint.body_params,
            &["title", "body", "milestone", "labels", "assignees"]
        );

        let request = CREATE
            .prepare(&CreateInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                title: "Found a bug".into(),
                labels: Some(vec!["bug".into()]),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(request.body, Some(json!({ "title": "Found a bug", "labels": ["bug"] })));
    }

    #[test]
    fn remove_label_has_two_level_path() {
        let endpoint = find("issues/removeLabel");
        assert_eq!(endpoint.path_params, &["owner", "repo", "issue_number", "name"]);
        assert!(!endpoint.is_paginated());
    }

    #[test]
    fn label_names_stay_in_their_segment() {
        let request = DELETE_LABEL
            .prepare(&LabelInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                name: "a?b#c".into(),
            })
            .unwrap();
        assert_eq!(request.method, RestMethod::Delete);
        assert_eq!(request.path, "/repos/octocat/Hello-World/labels/a%3Fb%23c");
        assert!(request.query.is_empty());

        let request = REMOVE_LABEL
            .prepare(&RemoveLabelInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                issue_number: 1347,
                name: "good first issue".into(),
            })
            .unwrap();
        assert_eq!(
            request.path,
            "/repos/octocat/Hello-World/issues/1347/labels/good%20first%20issue"
        );
    }

    #[test]
    fn remove_assignees_deletes_with_body() {
        let endpoint = find("issues/removeAssignees");
        assert_eq!(endpoint.method, RestMethod::Delete);
        assert_eq!(endpoint.body_params, &["assignees"]);
    }
}
