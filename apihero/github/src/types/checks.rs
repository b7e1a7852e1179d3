//! Check run and check suite shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRun {
    pub id: u64,
    pub head_sha: String,
    pub node_id: String,
    pub external_id: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub details_url: Option<String>,
    /// `queued`, `in_progress` or `completed`.
    pub status: String,
    pub conclusion: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub output: CheckRunOutput,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_suite: Option<CheckSuiteRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<serde_json::Value>,
    #[serde(default)]
    pub pull_requests: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunOutput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub text: Option<String>,
    pub annotations_count: u32,
    pub annotations_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSuiteRef {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRunList {
    pub total_count: u32,
    pub check_runs: Vec<CheckRun>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAnnotation {
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
    pub start_column: Option<u32>,
    pub end_column: Option<u32>,
    /// `notice`, `warning` or `failure`.
    pub annotation_level: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub raw_details: Option<String>,
    pub blob_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSuite {
    pub id: u64,
    pub node_id: String,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub status: Option<String>,
    pub conclusion: Option<String>,
    pub url: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    #[serde(default)]
    pub pull_requests: Vec<serde_json::Value>,
    pub app: Option<serde_json::Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub latest_check_runs_count: u32,
    pub check_runs_url: String,
    pub rerequestable: Option<bool>,
    pub runs_rerequestable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSuiteList {
    pub total_count: u32,
    pub check_suites: Vec<CheckSuite>,
}

/// Automatic check suite creation settings of a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSuitePreference {
    pub preferences: serde_json::Value,
    pub repository: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pending_check_run_has_no_conclusion() {
        let run: CheckRun = serde_json::from_value(json!({
            "id": 4,
            "head_sha": "ce587453ced02b1526dfb4cb910479d431683101",
            "node_id": "MDg6Q2hlY2tSdW40",
            "external_id": "",
            "url": "https://api.github.com/repos/github/hello-world/check-runs/4",
            "html_url": "https://github.com/github/hello-world/runs/4",
            "details_url": "https://example.com",
            "status": "in_progress",
            "conclusion": null,
            "started_at": "2018-05-04T01:14:52Z",
            "completed_at": null,
            "output": {
                "title": "Mighty Readme report",
                "summary": "There are 0 failures, 2 warnings, and 1 notice.",
                "text": null,
                "annotations_count": 2,
                "annotations_url": "https://api.github.com/repos/github/hello-world/check-runs/4/annotations"
            },
            "name": "mighty_readme",
            "check_suite": { "id": 5 }
        }))
        .unwrap();

        assert!(run.conclusion.is_none());
        assert_eq!(run.check_suite, Some(CheckSuiteRef { id: 5 }));
        assert!(run.pull_requests.is_empty());
    }
}
