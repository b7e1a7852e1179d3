//! Search result shapes.

use serde::{Deserialize, Serialize};

use super::repos::{CommitDetail, Repository};
use super::users::SimpleUser;

/// The envelope every search endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub total_count: u64,
    /// True when the query timed out and `items` is partial.
    pub incomplete_results: bool,
    pub items: Vec<T>,
}

/// Relevance score attached to every search hit.
pub type Score = f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSearchItem {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub url: String,
    pub git_url: String,
    pub html_url: String,
    pub repository: serde_json::Value,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitSearchItem {
    pub url: String,
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
    pub author: Option<SimpleUser>,
    pub committer: Option<serde_json::Value>,
    pub repository: serde_json::Value,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySearchItem {
    #[serde(flatten)]
    pub repository: Repository,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSearchItem {
    #[serde(flatten)]
    pub issue: super::issues::Issue,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSearchItem {
    #[serde(flatten)]
    pub user: SimpleUser,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSearchItem {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub name: String,
    pub color: String,
    pub default: bool,
    pub description: Option<String>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSearchItem {
    pub name: String,
    pub display_name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub released: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub featured: bool,
    pub curated: bool,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_results_parse() {
        let results: SearchResults<LabelSearchItem> = serde_json::from_value(json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 418327088,
                "node_id": "MDU6TGFiZWw0MTgzMjcwODg=",
                "url": "https://api.github.com/repos/octocat/linguist/labels/enhancement",
                "name": "enhancement",
                "color": "84b6eb",
                "default": true,
                "description": "New feature or request.",
                "score": 1.0
            }]
        }))
        .unwrap();

        assert_eq!(results.total_count, 1);
        assert!(!results.incomplete_results);
        assert_eq!(results.items[0].name, "enhancement");
    }
}
