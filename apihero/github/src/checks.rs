//! Check runs and check suites.

use apihero_define::{ApiHeroEndpoint, EndpointMeta, LinkHeader, RestMethod, endpoint_input};

use crate::endpoint;
use crate::types::{
    CheckAnnotation, CheckRun, CheckRunList, CheckSuite, CheckSuiteList, CheckSuitePreference,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct CreateInput {
        path { owner: String, repo: String }
        body {
            name: String,
            head_sha: String,
            details_url: Option<String>,
            external_id: Option<String>,
            /// `queued`, `in_progress` or `completed`.
            status: Option<String>,
            started_at: Option<String>,
            /// Required when `status` is `completed`.
            conclusion: Option<String>,
            completed_at: Option<String>,
            /// `title`, `summary`, optional `text`, up to 50 `annotations` and `images`.
            output: Option<serde_json::Value>,
            /// Up to three requested-action buttons.
            actions: Option<Vec<serde_json::Value>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CheckRunInput {
        path { owner: String, repo: String, check_run_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInput {
        path { owner: String, repo: String, check_run_id: u64 }
        body {
            name: Option<String>,
            details_url: Option<String>,
            external_id: Option<String>,
            started_at: Option<String>,
            /// `queued`, `in_progress` or `completed`.
            status: Option<String>,
            /// Required with `status: completed`: `action_required`, `cancelled`, `failure`,
            /// `neutral`, `success`, `skipped` or `timed_out`.
            conclusion: Option<String>,
            completed_at: Option<String>,
            output: Option<serde_json::Value>,
            actions: Option<Vec<serde_json::Value>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListAnnotationsInput {
        path { owner: String, repo: String, check_run_id: u64 }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListForRefInput {
        path { owner: String, repo: String, git_ref as "ref": String }
        query {
            check_name: Option<String>,
            /// `queued`, `in_progress` or `completed`.
            status: Option<String>,
            /// `latest` or `all`.
            filter: Option<String>,
            app_id: Option<u64>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListForSuiteInput {
        path { owner: String, repo: String, check_suite_id: u64 }
        query {
            check_name: Option<String>,
            status: Option<String>,
            /// `latest` (the default) or `all`.
            filter: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateSuiteInput {
        path { owner: String, repo: String }
        body { head_sha: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SuiteInput {
        path { owner: String, repo: String, check_suite_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListSuitesForRefInput {
        path { owner: String, repo: String, git_ref as "ref": String }
        query {
            app_id: Option<u64>,
            check_name: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SetSuitesPreferencesInput {
        path { owner: String, repo: String }
        body {
            /// Entries of `app_id` and `setting`.
            auto_trigger_checks: Option<Vec<serde_json::Value>>,
        }
    }
}

// =============================================================================
// Check runs
// =============================================================================

/// Create a check run. Only GitHub Apps may create check runs.
pub const CREATE: ApiHeroEndpoint<CreateInput, CheckRun> =
    endpoint("checks/create", RestMethod::Post, "/repos/{owner}/{repo}/check-runs");

/// Get a check run.
pub const GET: ApiHeroEndpoint<CheckRunInput, CheckRun> =
    endpoint("checks/get", RestMethod::Get, "/repos/{owner}/{repo}/check-runs/{check_run_id}");

/// Update a check run.
pub const UPDATE: ApiHeroEndpoint<UpdateInput, CheckRun> =
    endpoint("checks/update", RestMethod::Patch, "/repos/{owner}/{repo}/check-runs/{check_run_id}");

/// List annotations of a check run.
pub const LIST_ANNOTATIONS: ApiHeroEndpoint<ListAnnotationsInput, Vec<CheckAnnotation>, LinkHeader> =
    endpoint(
        "checks/listAnnotations",
        RestMethod::Get,
        "/repos/{owner}/{repo}/check-runs/{check_run_id}/annotations",
    );

/// Ask the owning app to re-run a check. Answers `201` with an empty object.
pub const REREQUEST_RUN: ApiHeroEndpoint<CheckRunInput, serde_json::Value> = endpoint(
    "checks/rerequestRun",
    RestMethod::Post,
    "/repos/{owner}/{repo}/check-runs/{check_run_id}/rerequest",
);

/// List check runs for a commit SHA, branch or tag.
pub const LIST_FOR_REF: ApiHeroEndpoint<ListForRefInput, CheckRunList, LinkHeader> = endpoint(
    "checks/listForRef",
    RestMethod::Get,
    "/repos/{owner}/{repo}/commits/{ref}/check-runs",
);

/// List check runs in a check suite.
pub const LIST_FOR_SUITE: ApiHeroEndpoint<ListForSuiteInput, CheckRunList, LinkHeader> = endpoint(
    "checks/listForSuite",
    RestMethod::Get,
    "/repos/{owner}/{repo}/check-suites/{check_suite_id}/check-runs",
);

// =============================================================================
// Check suites
// =============================================================================

/// Create a check suite when automatic creation is disabled.
pub const CREATE_SUITE: ApiHeroEndpoint<CreateSuiteInput, CheckSuite> =
    endpoint("checks/createSuite", RestMethod::Post, "/repos/{owner}/{repo}/check-suites");

/// Get a check suite.
pub const GET_SUITE: ApiHeroEndpoint<SuiteInput, CheckSuite> = endpoint(
    "checks/getSuite",
    RestMethod::Get,
    "/repos/{owner}/{repo}/check-suites/{check_suite_id}",
);

/// List check suites for a commit SHA, branch or tag.
pub const LIST_SUITES_FOR_REF: ApiHeroEndpoint<ListSuitesForRefInput, CheckSuiteList, LinkHeader> =
    endpoint(
        "checks/listSuitesForRef",
        RestMethod::Get,
        "/repos/{owner}/{repo}/commits/{ref}/check-suites",
    );

/// Trigger a fresh `check_suite` webhook. Answers `201` with an empty object.
pub const REREQUEST_SUITE: ApiHeroEndpoint<SuiteInput, serde_json::Value> = endpoint(
    "checks/rerequestSuite",
    RestMethod::Post,
    "/repos/{owner}/{repo}/check-suites/{check_suite_id}/rerequest",
);

/// Change automatic check suite creation for a repository.
pub const SET_SUITES_PREFERENCES: ApiHeroEndpoint<SetSuitesPreferencesInput, CheckSuitePreference> =
    endpoint(
        "checks/setSuitesPreferences",
        RestMethod::Patch,
        "/repos/{owner}/{repo}/check-suites/preferences",
    );

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        CREATE.meta(),
        GET.meta(),
        UPDATE.meta(),
        LIST_ANNOTATIONS.meta(),
        REREQUEST_RUN.meta(),
        LIST_FOR_REF.meta(),
        LIST_FOR_SUITE.meta(),
        CREATE_SUITE.meta(),
        GET_SUITE.meta(),
        LIST_SUITES_FOR_REF.meta(),
        REREQUEST_SUITE.meta(),
        SET_SUITES_PREFERENCES.meta(),
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
    fn module_has_every_checks_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 12);
        assert!(all.iter().all(|e| e.resource() == "checks"));
    }

    #[test]
    fn ref_listings_use_the_commit_path() {
        let endpoint = find("checks/listForRef");
        assert_eq!(endpoint.path_params, &["owner", "repo", "ref"]);
        assert!(endpoint.is_paginated());
        assert!(find("checks/listSuitesForRef").is_paginated());
    }

    #[test]
    fn prepare_completed_check_run() {
        let request = CREATE
            .prepare(&CreateInput {
                owner: "octocat".into(),
                repo: "hello-world".into(),
                name: "mighty_readme".into(),
                head_sha: "ce587453ced02b1526dfb4cb910479d431683101".into(),
                status: Some("completed".into()),
                conclusion: Some("success".into()),
                output: Some(json!({ "title": "Readme report", "summary": "All good" })),
                ..Default::default()
            })
            .unwrap();

        let body = request.body.unwrap();
        assert_eq!(body["conclusion"], "success");
        assert_eq!(body["output"]["title"], "Readme report");
        assert!(body.get("actions").is_none());
    }
}
