//! GitHub Actions: workflows, runs, jobs, artifacts, secrets, variables and
//! self-hosted runners.
//!
//! Listings here wrap their items in an object carrying `total_count`
//! rather than returning a bare array, but still paginate with `Link`.

use std::collections::BTreeMap;

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::params::{RepoInput, RepoPageInput};
use crate::types::{
    ActionsPublicKey, ActionsSecret, ActionsSecretList, ActionsVariable, ActionsVariableList,
    Artifact, ArtifactList, Job, JobList, Runner, RunnerList, RunnerToken, Workflow, WorkflowList,
    WorkflowRun, WorkflowRunList,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    /// A workflow, by numeric id or by file name such as `main.yaml`.
    #[derive(Default)]
    pub struct WorkflowInput {
        path { owner: String, repo: String, workflow_id: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DispatchInput {
        path { owner: String, repo: String, workflow_id: String }
        body {
            /// Branch or tag holding the workflow file.
            git_ref as "ref": String,
            /// Values for the workflow's `workflow_dispatch` inputs.
            inputs: Option<BTreeMap<String, serde_json::Value>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListWorkflowRunsInput {
        path { owner: String, repo: String, workflow_id: String }
        query {
            actor: Option<String>,
            branch: Option<String>,
            /// Webhook event that triggered the run, such as `push` or `pull_request`.
            event: Option<String>,
            /// A status such as `completed` or a conclusion such as `failure`.
            status: Option<String>,
            /// Date range filter, for example `>=2024-01-01`.
            created: Option<String>,
            head_sha: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListRepoRunsInput {
        path { owner: String, repo: String }
        query {
            actor: Option<String>,
            branch: Option<String>,
            event: Option<String>,
            /// `queued`, `in_progress`, `completed`, or a conclusion such as `success` or `failure`.
            status: Option<String>,
            created: Option<String>,
            head_sha: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RunInput {
        path { owner: String, repo: String, run_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GetRunInput {
        path { owner: String, repo: String, run_id: u64 }
        query { exclude_pull_requests: Option<bool> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReRunInput {
        path { owner: String, repo: String, run_id: u64 }
        body { enable_debug_logging: Option<bool> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListJobsInput {
        path { owner: String, repo: String, run_id: u64 }
        query {
            /// `latest` or `all` attempts.
            filter: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct JobInput {
        path { owner: String, repo: String, job_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListArtifactsInput {
        path { owner: String, repo: String }
        query {
            /// Exact artifact name.
            name: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListRunArtifactsInput {
        path { owner: String, repo: String, run_id: u64 }
        query { name: Option<String>, per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ArtifactInput {
        path { owner: String, repo: String, artifact_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DownloadArtifactInput {
        path {
            owner: String,
            repo: String,
            artifact_id: u64,
            /// Must be `zip`.
            archive_format: String,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SecretInput {
        path { owner: String, repo: String, secret_name: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct PutSecretInput {
        path { owner: String, repo: String, secret_name: String }
        body {
            /// Sealed with the repository public key, base64 encoded.
            encrypted_value: String,
            key_id: String,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct VariableInput {
        path { owner: String, repo: String, name: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateVariableInput {
        path { owner: String, repo: String }
        body { name: String, value: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateVariableInput {
        path { owner: String, repo: String, name: String }
        body { value: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListRunnersInput {
        path { owner: String, repo: String }
        query { name: Option<String>, per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RunnerInput {
        path { owner: String, repo: String, runner_id: u64 }
    }
}

// =============================================================================
// Workflows
// =============================================================================

/// List repository workflows.
pub const LIST_REPO_WORKFLOWS: ApiHeroEndpoint<RepoPageInput, WorkflowList, LinkHeader> =
    endpoint("actions/listRepoWorkflows", RestMethod::Get, "/repos/{owner}/{repo}/actions/workflows");

/// Get a workflow.
pub const GET_WORKFLOW: ApiHeroEndpoint<WorkflowInput, Workflow> = endpoint(
    "actions/getWorkflow",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/workflows/{workflow_id}",
);

/// Trigger a `workflow_dispatch` event.
///
/// The workflow must declare a `workflow_dispatch` trigger. Answers `204 No Content`.
pub const CREATE_WORKFLOW_DISPATCH: ApiHeroEndpoint<DispatchInput, NoContent> = endpoint(
    "actions/createWorkflowDispatch",
    RestMethod::Post,
    "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/dispatches",
);

/// Disable a workflow.
///
/// Answers `204 No Content`.
pub const DISABLE_WORKFLOW: ApiHeroEndpoint<WorkflowInput, NoContent> = endpoint(
    "actions/disableWorkflow",
    RestMethod::Put,
    "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/disable",
);

/// Enable a workflow.
///
/// Answers `204 No Content`.
pub const ENABLE_WORKFLOW: ApiHeroEndpoint<WorkflowInput, NoContent> = endpoint(
    "actions/enableWorkflow",
    RestMethod::Put,
    "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/enable",
);

// =============================================================================
// Workflow runs
// =============================================================================

/// List runs of one workflow.
pub const LIST_WORKFLOW_RUNS: ApiHeroEndpoint<ListWorkflowRunsInput, WorkflowRunList, LinkHeader> =
    endpoint(
        "actions/listWorkflowRuns",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/runs",
    );

/// List workflow runs across a repository.
pub const LIST_WORKFLOW_RUNS_FOR_REPO: ApiHeroEndpoint<ListRepoRunsInput, WorkflowRunList, LinkHeader> =
    endpoint(
        "actions/listWorkflowRunsForRepo",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/runs",
    );

/// Get a workflow run.
pub const GET_WORKFLOW_RUN: ApiHeroEndpoint<GetRunInput, WorkflowRun> = endpoint(
    "actions/getWorkflowRun",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/runs/{run_id}",
);

/// Delete a workflow run.
///
/// Requires write access. Answers `204 No Content`.
pub const DELETE_WORKFLOW_RUN: ApiHeroEndpoint<RunInput, NoContent> = endpoint(
    "actions/deleteWorkflowRun",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/actions/runs/{run_id}",
);

/// Cancel a workflow run. Answers `202` with an empty object.
pub const CANCEL_WORKFLOW_RUN: ApiHeroEndpoint<RunInput, serde_json::Value> = endpoint(
    "actions/cancelWorkflowRun",
    RestMethod::Post,
    "/repos/{owner}/{repo}/actions/runs/{run_id}/cancel",
);

/// Re-run a workflow. Answers `201` with an empty object.
pub const RE_RUN_WORKFLOW: ApiHeroEndpoint<ReRunInput, serde_json::Value> = endpoint(
    "actions/reRunWorkflow",
    RestMethod::Post,
    "/repos/{owner}/{repo}/actions/runs/{run_id}/rerun",
);

/// Re-run only the failed jobs of a workflow run.
pub const RE_RUN_WORKFLOW_FAILED_JOBS: ApiHeroEndpoint<ReRunInput, serde_json::Value> = endpoint(
    "actions/reRunWorkflowFailedJobs",
    RestMethod::Post,
    "/repos/{owner}/{repo}/actions/runs/{run_id}/rerun-failed-jobs",
);

/// Redirect to a short-lived archive of the run's logs.
///
/// Answers `302 Found`; the `Location` URL expires after a minute.
pub const DOWNLOAD_WORKFLOW_RUN_LOGS: ApiHeroEndpoint<RunInput, NoContent, LocationHeader> =
    endpoint(
        "actions/downloadWorkflowRunLogs",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/runs/{run_id}/logs",
    );

// =============================================================================
// Jobs
// =============================================================================

/// List jobs of a workflow run.
pub const LIST_JOBS_FOR_WORKFLOW_RUN: ApiHeroEndpoint<ListJobsInput, JobList, LinkHeader> =
    endpoint(
        "actions/listJobsForWorkflowRun",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/runs/{run_id}/jobs",
    );

/// Get a job of a workflow run.
pub const GET_JOB_FOR_WORKFLOW_RUN: ApiHeroEndpoint<JobInput, Job> = endpoint(
    "actions/getJobForWorkflowRun",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/jobs/{job_id}",
);

/// Redirect to a short-lived plain-text copy of a job's log.
///
/// Answers `302 Found`; the `Location` URL expires after a minute.
pub const DOWNLOAD_JOB_LOGS_FOR_WORKFLOW_RUN: ApiHeroEndpoint<JobInput, NoContent, LocationHeader> =
    endpoint(
        "actions/downloadJobLogsForWorkflowRun",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/jobs/{job_id}/logs",
    );

// =============================================================================
// Artifacts
// =============================================================================

/// List artifacts of a repository.
pub const LIST_ARTIFACTS_FOR_REPO: ApiHeroEndpoint<ListArtifactsInput, ArtifactList, LinkHeader> =
    endpoint(
        "actions/listArtifactsForRepo",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/artifacts",
    );

/// List artifacts of a workflow run.
pub const LIST_WORKFLOW_RUN_ARTIFACTS: ApiHeroEndpoint<ListRunArtifactsInput, ArtifactList, LinkHeader> =
    endpoint(
        "actions/listWorkflowRunArtifacts",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/runs/{run_id}/artifacts",
    );

/// Get an artifact.
pub const GET_ARTIFACT: ApiHeroEndpoint<ArtifactInput, Artifact> = endpoint(
    "actions/getArtifact",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/artifacts/{artifact_id}",
);

/// Delete an artifact.
///
/// Answers `204 No Content`.
pub const DELETE_ARTIFACT: ApiHeroEndpoint<ArtifactInput, NoContent> = endpoint(
    "actions/deleteArtifact",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/actions/artifacts/{artifact_id}",
);

/// Redirect to a short-lived download URL for an artifact.
///
/// Answers `302 Found`; the `Location` URL expires after a minute. Expired
/// artifacts answer `410 Gone`.
pub const DOWNLOAD_ARTIFACT: ApiHeroEndpoint<DownloadArtifactInput, NoContent, LocationHeader> =
    endpoint(
        "actions/downloadArtifact",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/artifacts/{artifact_id}/{archive_format}",
    );

// =============================================================================
// Secrets and variables
// =============================================================================

/// Get the public key used to encrypt repository secrets.
pub const GET_REPO_PUBLIC_KEY: ApiHeroEndpoint<RepoInput, ActionsPublicKey> = endpoint(
    "actions/getRepoPublicKey",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/secrets/public-key",
);

/// List repository secrets without their values.
pub const LIST_REPO_SECRETS: ApiHeroEndpoint<RepoPageInput, ActionsSecretList, LinkHeader> =
    endpoint("actions/listRepoSecrets", RestMethod::Get, "/repos/{owner}/{repo}/actions/secrets");

/// Get a repository secret without its value.
pub const GET_REPO_SECRET: ApiHeroEndpoint<SecretInput, ActionsSecret> = endpoint(
    "actions/getRepoSecret",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/secrets/{secret_name}",
);

/// Create or update a repository secret from an encrypted value.
///
/// Seal the value with the key from [`GET_REPO_PUBLIC_KEY`] (libsodium sealed
/// box) and send it base64-encoded. Answers `201 Created` with an empty object
/// for a new secret and `204 No Content` for an update.
pub const CREATE_OR_UPDATE_REPO_SECRET: ApiHeroEndpoint<PutSecretInput, serde_json::Value> =
    endpoint(
        "actions/createOrUpdateRepoSecret",
        RestMethod::Put,
        "/repos/{owner}/{repo}/actions/secrets/{secret_name}",
    );

/// Delete a repository secret.
///
/// Answers `204 No Content`.
pub const DELETE_REPO_SECRET: ApiHeroEndpoint<SecretInput, NoContent> = endpoint(
    "actions/deleteRepoSecret",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/actions/secrets/{secret_name}",
);

/// List repository variables. At most 30 per page.
pub const LIST_REPO_VARIABLES: ApiHeroEndpoint<RepoPageInput, ActionsVariableList, LinkHeader> =
    endpoint(
        "actions/listRepoVariables",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/variables",
    );

/// Get a repository variable.
pub const GET_REPO_VARIABLE: ApiHeroEndpoint<VariableInput, ActionsVariable> = endpoint(
    "actions/getRepoVariable",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/variables/{name}",
);

/// Create a repository variable. Answers `201 Created` with an empty object.
pub const CREATE_REPO_VARIABLE: ApiHeroEndpoint<CreateVariableInput, serde_json::Value> =
    endpoint(
        "actions/createRepoVariable",
        RestMethod::Post,
        "/repos/{owner}/{repo}/actions/variables",
    );

/// Update the value of a repository variable.
///
/// Answers `204 No Content`.
pub const UPDATE_REPO_VARIABLE: ApiHeroEndpoint<UpdateVariableInput, NoContent> = endpoint(
    "actions/updateRepoVariable",
    RestMethod::Patch,
    "/repos/{owner}/{repo}/actions/variables/{name}",
);

/// Delete a repository variable.
///
/// Answers `204 No Content`.
pub const DELETE_REPO_VARIABLE: ApiHeroEndpoint<VariableInput, NoContent> = endpoint(
    "actions/deleteRepoVariable",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/actions/variables/{name}",
);

// =============================================================================
// Self-hosted runners
// =============================================================================

/// List self-hosted runners of a repository.
pub const LIST_SELF_HOSTED_RUNNERS_FOR_REPO: ApiHeroEndpoint<ListRunnersInput, RunnerList, LinkHeader> =
    endpoint(
        "actions/listSelfHostedRunnersForRepo",
        RestMethod::Get,
        "/repos/{owner}/{repo}/actions/runners",
    );

/// Get a self-hosted runner.
pub const GET_SELF_HOSTED_RUNNER_FOR_REPO: ApiHeroEndpoint<RunnerInput, Runner> = endpoint(
    "actions/getSelfHostedRunnerForRepo",
    RestMethod::Get,
    "/repos/{owner}/{repo}/actions/runners/{runner_id}",
);

/// Force-remove a self-hosted runner.
///
/// Requires admin access. Answers `204 No Content`.
pub const DELETE_SELF_HOSTED_RUNNER_FROM_REPO: ApiHeroEndpoint<RunnerInput, NoContent> = endpoint(
    "actions/deleteSelfHostedRunnerFromRepo",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/actions/runners/{runner_id}",
);

/// Create a one-hour token for `config.sh` registration.
pub const CREATE_REGISTRATION_TOKEN_FOR_REPO: ApiHeroEndpoint<RepoInput, RunnerToken> = endpoint(
    "actions/createRegistrationTokenForRepo",
    RestMethod::Post,
    "/repos/{owner}/{repo}/actions/runners/registration-token",
);

/// Create a one-hour token for `config.sh remove`.
pub const CREATE_REMOVE_TOKEN_FOR_REPO: ApiHeroEndpoint<RepoInput, RunnerToken> = endpoint(
    "actions/createRemoveTokenForRepo",
    RestMethod::Post,
    "/repos/{owner}/{repo}/actions/runners/remove-token",
);

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST_REPO_WORKFLOWS.meta(),
        GET_WORKFLOW.meta(),
        CREATE_WORKFLOW_DISPATCH.meta(),
        DISABLE_WORKFLOW.meta(),
        ENABLE_WORKFLOW.meta(),
        LIST_WORKFLOW_RUNS.meta(),
        LIST_WORKFLOW_RUNS_FOR_REPO.meta(),
        GET_WORKFLOW_RUN.meta(),
        DELETE_WORKFLOW_RUN.meta(),
        CANCEL_WORKFLOW_RUN.meta(),
        RE_RUN_WORKFLOW.meta(),
        RE_RUN_WORKFLOW_FAILED_JOBS.meta(),
        DOWNLOAD_WORKFLOW_RUN_LOGS.meta(),
        LIST_JOBS_FOR_WORKFLOW_RUN.meta(),
        GET_JOB_FOR_WORKFLOW_RUN.meta(),
        DOWNLOAD_JOB_LOGS_FOR_WORKFLOW_RUN.meta(),
        LIST_ARTIFACTS_FOR_REPO.meta(),
        LIST_WORKFLOW_RUN_ARTIFACTS.meta(),
        GET_ARTIFACT.meta(),
        DELETE_ARTIFACT.meta(),
        DOWNLOAD_ARTIFACT.meta(),
        GET_REPO_PUBLIC_KEY.meta(),
        LIST_REPO_SECRETS.meta(),
        GET_REPO_SECRET.meta(),
        CREATE_OR_UPDATE_REPO_SECRET.meta(),
        DELETE_REPO_SECRET.meta(),
        LIST_REPO_VARIABLES.meta(),
        GET_REPO_VARIABLE.meta(),
        CREATE_REPO_VARIABLE.meta(),
        UPDATE_REPO_VARIABLE.meta(),
        DELETE_REPO_VARIABLE.meta(),
        LIST_SELF_HOSTED_RUNNERS_FOR_REPO.meta(),
        GET_SELF_HOSTED_RUNNER_FOR_REPO.meta(),
        DELETE_SELF_HOSTED_RUNNER_FROM_REPO.meta(),
        CREATE_REGISTRATION_TOKEN_FOR_REPO.meta(),
        CREATE_REMOVE_TOKEN_FOR_REPO.meta(),
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
    fn module_has_every_actions_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 36);
        assert!(all.iter().all(|e| e.resource() == "actions"));
    }

    #[test]
    fn wrapped_listings_still_paginate() {
        let runs = find("actions/listWorkflowRunsForRepo");
        assert!(runs.is_paginated());
        assert!(runs.output_type.ends_with("WorkflowRunList"));
        assert!(runs.query_params.contains(&"per_page"));
        assert!(runs.query_params.contains(&"page"));
    }

    #[test]
    fn downloads_redirect() {
        for id in [
            "actions/downloadWorkflowRunLogs",
            "actions/downloadJobLogsForWorkflowRun",
            "actions/downloadArtifact",
        ] {
            assert_eq!(find(id).response_headers, &["location"], "{id}");
        }
    }

    #[test]
    fn creations_answering_empty_objects_are_untyped() {
        for id in ["actions/createRepoVariable", "actions/createOrUpdateRepoSecret"] {
            let endpoint = find(id);
            assert!(endpoint.output_type.ends_with("Value"), "{id}: {}", endpoint.output_type);
            assert!(endpoint.response_headers.is_empty(), "{id}");
        }
        assert!(find("actions/deleteRepoVariable").output_type.ends_with("NoContent"));
    }

    #[test]
    fn variable_update_names_the_variable_in_the_path() {
        let endpoint = find("actions/updateRepoVariable");
        assert_eq!(endpoint.path_params, &["owner", "repo", "name"]);
        assert_eq!(endpoint.body_params, &["value"]);
    }

    #[test]
    fn prepare_workflow_dispatch() {
        let mut inputs = BTreeMap::new();
        inputs.insert("environment".to_string(), json!("staging"));

        let request = CREATE_WORKFLOW_DISPATCH
            .prepare(&DispatchInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                workflow_id: "deploy.yml".into(),
                git_ref: "main".into(),
                inputs: Some(inputs),
            })
            .unwrap();

        assert_eq!(
            request.path,
            "/repos/octocat/Hello-World/actions/workflows/deploy.yml/dispatches"
        );
        assert_eq!(
            request.body,
            Some(json!({ "ref": "main", "inputs": { "environment": "staging" } }))
        );
    }
}
