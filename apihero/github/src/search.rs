//! Search. Each endpoint returns at most 1000 results in total, and `q`
//! combines free text with qualifiers such as `repo:`, `language:` or `is:`.

use apihero_define::{ApiHeroEndpoint, EndpointMeta, LinkHeader, RestMethod, endpoint_input};

use crate::endpoint;
use crate::types::{
    CodeSearchItem, CommitSearchItem, IssueSearchItem, LabelSearchItem, RepositorySearchItem,
    SearchResults, TopicSearchItem, UserSearchItem,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct SearchInput {
        query {
            q: String,
            /// Endpoint-specific sort field. Best match when omitted.
            sort: Option<String>,
            /// `desc` or `asc`; ignored without `sort`.
            order: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SearchLabelsInput {
        query {
            repository_id: u64,
            q: String,
            /// `created` or `updated`.
            sort: Option<String>,
            /// `desc` (the default) or `asc`. Ignored without `sort`.
            order: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SearchTopicsInput {
        query { q: String, per_page: Option<u32>, page: Option<u32> }
    }
}

impl SearchInput {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// Search code. Requires authentication and searches the default branch only.
pub const CODE: ApiHeroEndpoint<SearchInput, SearchResults<CodeSearchItem>, LinkHeader> =
    endpoint("search/code", RestMethod::Get, "/search/code");

/// Search commits on the default branch.
pub const COMMITS: ApiHeroEndpoint<SearchInput, SearchResults<CommitSearchItem>, LinkHeader> =
    endpoint("search/commits", RestMethod::Get, "/search/commits");

/// Search issues and pull requests. `q` must contain `is:issue` or `is:pull-request`.
pub const ISSUES_AND_PULL_REQUESTS: ApiHeroEndpoint<
    SearchInput,
    SearchResults<IssueSearchItem>,
    LinkHeader,
> = endpoint("search/issuesAndPullRequests", RestMethod::Get, "/search/issues");

/// Search labels of one repository.
pub const LABELS: ApiHeroEndpoint<SearchLabelsInput, SearchResults<LabelSearchItem>, LinkHeader> =
    endpoint("search/labels", RestMethod::Get, "/search/labels");

/// Search repositories.
pub const REPOS: ApiHeroEndpoint<SearchInput, SearchResults<RepositorySearchItem>, LinkHeader> =
    endpoint("search/repos", RestMethod::Get, "/search/repositories");

/// Search topics.
pub const TOPICS: ApiHeroEndpoint<SearchTopicsInput, SearchResults<TopicSearchItem>, LinkHeader> =
    endpoint("search/topics", RestMethod::Get, "/search/topics");

/// Search users and organizations.
pub const USERS: ApiHeroEndpoint<SearchInput, SearchResults<UserSearchItem>, LinkHeader> =
    endpoint("search/users", RestMethod::Get, "/search/users");

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        CODE.meta(),
        COMMITS.meta(),
        ISSUES_AND_PULL_REQUESTS.meta(),
        LABELS.meta(),
        REPOS.meta(),
        TOPICS.meta(),
        USERS.meta(),
    ]
}
