//! Integration tests for turning typed inputs into request parts.
//!
//! These tests verify that:
//! - Declared path parameters match the placeholders of the path template
//! - `prepare()` substitutes every placeholder
//! - Query and body groups follow the wire names declared in `endpoint_input!`

use apihero_define::input::extract_path_params;
use apihero_define::prelude::*;
use apihero_define::{InputError, PreparedRequest};
use serde_json::json;

endpoint_input! {
    #[derive(Default)]
    pub struct GetContentInput {
        path { owner: String, repo: String, path: String }
        query { git_ref as "ref": Option<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateIssueInput {
        path { owner: String, repo: String, issue_number: u64 }
        body {
            title: Option<String>,
            state: Option<String>,
            labels: Option<Vec<String>>,
            assignees: Option<Vec<String>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListCommitsInput {
        path { owner: String, repo: String }
        query {
            sha: Option<String>,
            since: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

const GET_CONTENT: ApiHeroEndpoint<GetContentInput, serde_json::Value> = ApiHeroEndpoint::new(
    "repos/getContent",
    "github",
    RestMethod::Get,
    "/repos/{owner}/{repo}/contents/{path}",
);

const UPDATE_ISSUE: ApiHeroEndpoint<UpdateIssueInput, serde_json::Value> = ApiHeroEndpoint::new(
    "issues/update",
    "github",
    RestMethod::Patch,
    "/repos/{owner}/{repo}/issues/{issue_number}",
);

const LIST_COMMITS: ApiHeroEndpoint<ListCommitsInput, Vec<serde_json::Value>, LinkHeader> =
    ApiHeroEndpoint::new(
        "repos/listCommits",
        "github",
        RestMethod::Get,
        "/repos/{owner}/{repo}/commits",
    );

// =============================================================================
// Template / declaration agreement
// =============================================================================

#[test]
fn declared_path_params_match_template() {
    for meta in [GET_CONTENT.meta(), UPDATE_ISSUE.meta(), LIST_COMMITS.meta()] {
        assert_eq!(
            extract_path_params(meta.path),
            meta.path_params.to_vec(),
            "path parameters of {} disagree with its template",
            meta.id
        );
    }
}

// =============================================================================
// prepare()
// =============================================================================

#[test]
fn renamed_query_param_uses_wire_name() {
    let request = GET_CONTENT
        .prepare(&GetContentInput {
            owner: "octocat".into(),
            repo: "hello-world".into(),
            path: "src/main.rs".into(),
            git_ref: Some("v1.0.0".into()),
        })
        .unwrap();

    assert_eq!(request.path, "/repos/octocat/hello-world/contents/src/main.rs");
    assert_eq!(request.query, vec![("ref".to_string(), "v1.0.0".to_string())]);
    assert!(request.body.is_none());
}

#[test]
fn file_path_keeps_slashes_but_escapes_reserved_characters() {
    let request = GET_CONTENT
        .prepare(&GetContentInput {
            owner: "octocat".into(),
            repo: "hello-world".into(),
            path: "docs/100% done?/notes #1.md".into(),
            git_ref: None,
        })
        .unwrap();

    assert_eq!(
        request.path,
        "/repos/octocat/hello-world/contents/docs/100%25%20done%3F/notes%20%231.md"
    );
    assert!(request.query.is_empty());
}

#[test]
fn patch_body_contains_only_set_fields() {
    let request = UPDATE_ISSUE
        .prepare(&UpdateIssueInput {
            owner: "octocat".into(),
            repo: "hello-world".into(),
            issue_number: 1347,
            state: Some("closed".into()),
            labels: Some(vec!["bug".into(), "wontfix".into()]),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(request.method, RestMethod::Patch);
    assert_eq!(request.path, "/repos/octocat/hello-world/issues/1347");
    assert_eq!(
        request.body,
        Some(json!({ "state": "closed", "labels": ["bug", "wontfix"] }))
    );
}

#[test]
fn paginated_listing_forwards_page_params() {
    let request = LIST_COMMITS
        .prepare(&ListCommitsInput {
            owner: "octocat".into(),
            repo: "hello-world".into(),
            per_page: Some(100),
            page: Some(3),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        request.query,
        vec![
            ("per_page".to_string(), "100".to_string()),
            ("page".to_string(), "3".to_string()),
        ]
    );
    assert!(LIST_COMMITS.meta().is_paginated());
}

#[test]
fn prepared_request_serializes_for_runtimes() {
    let request: PreparedRequest = UPDATE_ISSUE
        .prepare(&UpdateIssueInput {
            owner: "octocat".into(),
            repo: "hello-world".into(),
            issue_number: 1,
            title: Some("New title".into()),
            ..Default::default()
        })
        .unwrap();

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["id"], "issues/update");
    assert_eq!(json["method"], "PATCH");
    assert_eq!(json["body"]["title"], "New title");
}

#[test]
fn template_with_unknown_placeholder_fails_to_render() {
    const BROKEN: ApiHeroEndpoint<ListCommitsInput, serde_json::Value> = ApiHeroEndpoint::new(
        "repos/broken",
        "github",
        RestMethod::Get,
        "/repos/{owner}/{repo}/branches/{branch}",
    );

    let err = BROKEN
        .prepare(&ListCommitsInput {
            owner: "octocat".into(),
            repo: "hello-world".into(),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, InputError::MissingPathParam(name) if name == "branch"));
}
