//! Repositories and the objects directly beneath them: branches, commits,
//! contents, releases, tags, collaborators, webhooks, deployments, statuses
//! and deploy keys.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::params::{PageInput, RepoInput, RepoPageInput};
use crate::types::{
    BranchProtection, BranchWithProtection, CollaboratorPermission, Collaborator,
    CombinedCommitStatus, Commit, CommitComparison, CommitStatus, Content, ContentItem,
    Contributor, DeployKey, Deployment, DeploymentStatus, FileCommit, Hook, HookConfig,
    Languages, MergedUpstream, Page, PullRequestSimple, Release, ReleaseAsset, ReleaseNotes,
    Repository, RepositoryInvitation, ShortBranch, Signature, Tag, Topics,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct ListForAuthenticatedUserInput {
        query {
            /// `all`, `public` or `private`.
            visibility: Option<String>,
            /// Comma-separated `owner`, `collaborator`, `organization_member`.
            affiliation: Option<String>,
            /// `all`, `owner`, `public`, `private` or `member`. Cannot be combined with
            /// `visibility` or `affiliation`.
            kind as "type": Option<String>,
            /// `created`, `updated`, `pushed` or `full_name`.
            sort: Option<String>,
            direction: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
            since: Option<String>,
            before: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListForUserInput {
        path { username: String }
        query {
            /// `all`, `owner` or `member`.
            kind as "type": Option<String>,
            /// `created`, `updated`, `pushed` or `full_name`.
            sort: Option<String>,
            direction: Option<String>,
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
            /// `all`, `public`, `private`, `forks`, `sources` or `member`.
            kind as "type": Option<String>,
            /// `created`, `updated`, `pushed` or `full_name`.
            sort: Option<String>,
            direction: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListPublicInput {
        query {
            /// Only repositories with an id greater than this.
            since: Option<u64>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateForAuthenticatedUserInput {
        body {
            name: String,
            description: Option<String>,
            homepage: Option<String>,
            private: Option<bool>,
            has_issues: Option<bool>,
            has_projects: Option<bool>,
            has_wiki: Option<bool>,
            has_discussions: Option<bool>,
            team_id: Option<u64>,
            auto_init: Option<bool>,
            gitignore_template: Option<String>,
            license_template: Option<String>,
            allow_squash_merge: Option<bool>,
            allow_merge_commit: Option<bool>,
            allow_rebase_merge: Option<bool>,
            allow_auto_merge: Option<bool>,
            delete_branch_on_merge: Option<bool>,
            is_template: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateInOrgInput {
        path { org: String }
        body {
            name: String,
            description: Option<String>,
            homepage: Option<String>,
            private: Option<bool>,
            /// `public`, `private` or `internal`.
            visibility: Option<String>,
            has_issues: Option<bool>,
            has_projects: Option<bool>,
            has_wiki: Option<bool>,
            is_template: Option<bool>,
            team_id: Option<u64>,
            auto_init: Option<bool>,
            gitignore_template: Option<String>,
            license_template: Option<String>,
            allow_squash_merge: Option<bool>,
            allow_merge_commit: Option<bool>,
            allow_rebase_merge: Option<bool>,
            delete_branch_on_merge: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateUsingTemplateInput {
        path { template_owner: String, template_repo: String }
        body {
            owner: Option<String>,
            name: String,
            description: Option<String>,
            include_all_branches: Option<bool>,
            private: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInput {
        path { owner: String, repo: String }
        body {
            name: Option<String>,
            description: Option<String>,
            homepage: Option<String>,
            private: Option<bool>,
            /// `public` or `private`.
            visibility: Option<String>,
            has_issues: Option<bool>,
            has_projects: Option<bool>,
            has_wiki: Option<bool>,
            is_template: Option<bool>,
            default_branch: Option<String>,
            allow_squash_merge: Option<bool>,
            allow_merge_commit: Option<bool>,
            allow_rebase_merge: Option<bool>,
            allow_auto_merge: Option<bool>,
            delete_branch_on_merge: Option<bool>,
            archived: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateForkInput {
        path { owner: String, repo: String }
        body {
            organization: Option<String>,
            name: Option<String>,
            default_branch_only: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListForksInput {
        path { owner: String, repo: String }
        query {
            /// `newest`, `oldest`, `stargazers` or `watchers`.
            sort: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct TransferInput {
        path { owner: String, repo: String }
        body {
            new_owner: String,
            new_name: Option<String>,
            team_ids: Option<Vec<u64>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateDispatchEventInput {
        path { owner: String, repo: String }
        body {
            event_type: String,
            client_payload: Option<serde_json::Value>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListBranchesInput {
        path { owner: String, repo: String }
        query {
            protected: Option<bool>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct BranchInput {
        path { owner: String, repo: String, branch: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RenameBranchInput {
        path { owner: String, repo: String, branch: String }
        body { new_name: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateBranchProtectionInput {
        path { owner: String, repo: String, branch: String }
        body {
            required_status_checks: Option<serde_json::Value>,
            enforce_admins: Option<bool>,
            required_pull_request_reviews: Option<serde_json::Value>,
            restrictions: Option<serde_json::Value>,
            required_linear_history: Option<bool>,
            allow_force_pushes: Option<bool>,
            allow_deletions: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct MergeUpstreamInput {
        path { owner: String, repo: String }
        body { branch: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct MergeInput {
        path { owner: String, repo: String }
        body {
            base: String,
            head: String,
            commit_message: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListCommitsInput {
        path { owner: String, repo: String }
        query {
            /// SHA or branch to start listing from.
            sha: Option<String>,
            path: Option<String>,
            author: Option<String>,
            committer: Option<String>,
            since: Option<String>,
            until: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GetCommitInput {
        path { owner: String, repo: String, git_ref as "ref": String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CommitShaInput {
        path { owner: String, repo: String, commit_sha: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CommitShaPageInput {
        path { owner: String, repo: String, commit_sha: String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CompareCommitsInput {
        path {
            owner: String,
            repo: String,
            /// `BASE...HEAD`, optionally `owner:branch` on either side.
            basehead: String,
        }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GetContentInput {
        path { owner: String, repo: String, path: String }
        query { git_ref as "ref": Option<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateOrUpdateFileContentsInput {
        path { owner: String, repo: String, path: String }
        body {
            message: String,
            /// Base64-encoded file content.
            content: String,
            /// Blob SHA of the file being replaced. Required when updating.
            sha: Option<String>,
            branch: Option<String>,
            committer: Option<Signature>,
            author: Option<Signature>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DeleteFileInput {
        path { owner: String, repo: String, path: String }
        body {
            message: String,
            sha: String,
            branch: Option<String>,
            committer: Option<Signature>,
            author: Option<Signature>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GetReadmeInput {
        path { owner: String, repo: String }
        query { git_ref as "ref": Option<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RefInput {
        path { owner: String, repo: String, git_ref as "ref": String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RefPageInput {
        path { owner: String, repo: String, git_ref as "ref": String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReleaseInput {
        path { owner: String, repo: String, release_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReleasePageInput {
        path { owner: String, repo: String, release_id: u64 }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReleaseByTagInput {
        path { owner: String, repo: String, tag: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateReleaseInput {
        path { owner: String, repo: String }
        body {
            tag_name: String,
            target_commitish: Option<String>,
            name: Option<String>,
            body: Option<String>,
            draft: Option<bool>,
            prerelease: Option<bool>,
            discussion_category_name: Option<String>,
            generate_release_notes: Option<bool>,
            /// `true`, `false` or `legacy`.
            make_latest: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateReleaseInput {
        path { owner: String, repo: String, release_id: u64 }
        body {
            tag_name: Option<String>,
            target_commitish: Option<String>,
            name: Option<String>,
            body: Option<String>,
            draft: Option<bool>,
            prerelease: Option<bool>,
            make_latest: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GenerateReleaseNotesInput {
        path { owner: String, repo: String }
        body {
            tag_name: String,
            target_commitish: Option<String>,
            previous_tag_name: Option<String>,
            configuration_file_path: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReleaseAssetInput {
        path { owner: String, repo: String, asset_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateReleaseAssetInput {
        path { owner: String, repo: String, asset_id: u64 }
        body {
            name: Option<String>,
            label: Option<String>,
            /// Only `uploaded` is accepted.
            state: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ReplaceAllTopicsInput {
        path { owner: String, repo: String }
        body { names: Vec<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListContributorsInput {
        path { owner: String, repo: String }
        query {
            /// `"1"` or `"true"` to include anonymous contributors.
            anon: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListCollaboratorsInput {
        path { owner: String, repo: String }
        query {
            /// `outside`, `direct` or `all`.
            affiliation: Option<String>,
            /// `pull`, `triage`, `push`, `maintain` or `admin`.
            permission: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CollaboratorInput {
        path { owner: String, repo: String, username: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct AddCollaboratorInput {
        path { owner: String, repo: String, username: String }
        body {
            /// `pull`, `triage`, `push`, `maintain`, `admin` or a custom role.
            permission: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RepoInvitationInput {
        path { owner: String, repo: String, invitation_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInvitationInput {
        path { owner: String, repo: String, invitation_id: u64 }
        body { permissions: Option<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UserInvitationInput {
        path { invitation_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct HookInput {
        path { owner: String, repo: String, hook_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateWebhookInput {
        path { owner: String, repo: String }
        body {
            /// Must be `web` when given.
            name: Option<String>,
            config: HookConfig,
            events: Option<Vec<String>>,
            active: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateWebhookInput {
        path { owner: String, repo: String, hook_id: u64 }
        body {
            config: Option<HookConfig>,
            events: Option<Vec<String>>,
            add_events: Option<Vec<String>>,
            remove_events: Option<Vec<String>>,
            active: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListDeploymentsInput {
        path { owner: String, repo: String }
        query {
            sha: Option<String>,
            git_ref as "ref": Option<String>,
            task: Option<String>,
            environment: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DeploymentInput {
        path { owner: String, repo: String, deployment_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DeploymentPageInput {
        path { owner: String, repo: String, deployment_id: u64 }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateDeploymentInput {
        path { owner: String, repo: String }
        body {
            git_ref as "ref": String,
            task: Option<String>,
            auto_merge: Option<bool>,
            required_contexts: Option<Vec<String>>,
            payload: Option<serde_json::Value>,
            environment: Option<String>,
            description: Option<String>,
            transient_environment: Option<bool>,
            production_environment: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateDeploymentStatusInput {
        path { owner: String, repo: String, deployment_id: u64 }
        body {
            /// `error`, `failure`, `inactive`, `in_progress`, `queued`, `pending` or `success`.
            state: String,
            target_url: Option<String>,
            log_url: Option<String>,
            description: Option<String>,
            environment: Option<String>,
            environment_url: Option<String>,
            auto_inactive: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateCommitStatusInput {
        path { owner: String, repo: String, sha: String }
        body {
            /// `error`, `failure`, `pending` or `success`.
            state: String,
            target_url: Option<String>,
            description: Option<String>,
            context: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct DeployKeyInput {
        path { owner: String, repo: String, key_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateDeployKeyInput {
        path { owner: String, repo: String }
        body {
            title: Option<String>,
            key: String,
            read_only: Option<bool>,
        }
    }
}

// =============================================================================
// Repositories
// =============================================================================

/// List repositories the authenticated user can access.
pub const LIST_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    ListForAuthenticatedUserInput,
    Vec<Repository>,
    LinkHeader,
> = endpoint("repos/listForAuthenticatedUser", RestMethod::Get, "/user/repos");

/// List public repositories for a user.
pub const LIST_FOR_USER: ApiHeroEndpoint<ListForUserInput, Vec<Repository>, LinkHeader> =
    endpoint("repos/listForUser", RestMethod::Get, "/users/{username}/repos");

/// List repositories for an organization.
pub const LIST_FOR_ORG: ApiHeroEndpoint<ListForOrgInput, Vec<Repository>, LinkHeader> =
    endpoint("repos/listForOrg", RestMethod::Get, "/orgs/{org}/repos");

/// List all public repositories in creation order.
///
/// Pagination is driven by the `since` cursor only; the `Link` header's
/// `next` relation carries the next value.
pub const LIST_PUBLIC: ApiHeroEndpoint<ListPublicInput, Vec<Repository>, LinkHeader> =
    endpoint("repos/listPublic", RestMethod::Get, "/repositories");

/// Get a repository.
pub const GET: ApiHeroEndpoint<RepoInput, Repository> =
    endpoint("repos/get", RestMethod::Get, "/repos/{owner}/{repo}");

/// Update a repository's settings.
pub const UPDATE: ApiHeroEndpoint<UpdateInput, Repository> =
    endpoint("repos/update", RestMethod::Patch, "/repos/{owner}/{repo}");

/// Delete a repository. Requires admin access.
///
/// Organizations can restrict deletion to owners, in which case members get `403`.
/// Answers `204 No Content`.
pub const DELETE: ApiHeroEndpoint<RepoInput, NoContent> =
    endpoint("repos/delete", RestMethod::Delete, "/repos/{owner}/{repo}");

/// Create a repository for the authenticated user.
pub const CREATE_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    CreateForAuthenticatedUserInput,
    Repository,
    LocationHeader,
> = endpoint("repos/createForAuthenticatedUser", RestMethod::Post, "/user/repos");

/// Create a repository in an organization.
pub const CREATE_IN_ORG: ApiHeroEndpoint<CreateInOrgInput, Repository, LocationHeader> =
    endpoint("repos/createInOrg", RestMethod::Post, "/orgs/{org}/repos");

/// Create a repository from a template repository.
pub const CREATE_USING_TEMPLATE: ApiHeroEndpoint<
    CreateUsingTemplateInput,
    Repository,
    LocationHeader,
> = endpoint(
    "repos/createUsingTemplate",
    RestMethod::Post,
    "/repos/{template_owner}/{template_repo}/generate",
);

/// Create a fork. Forking happens asynchronously.
pub const CREATE_FORK: ApiHeroEndpoint<CreateForkInput, Repository> =
    endpoint("repos/createFork", RestMethod::Post, "/repos/{owner}/{repo}/forks");

/// List forks.
pub const LIST_FORKS: ApiHeroEndpoint<ListForksInput, Vec<Repository>, LinkHeader> =
    endpoint("repos/listForks", RestMethod::Get, "/repos/{owner}/{repo}/forks");

/// Transfer a repository to another user or organization.
pub const TRANSFER: ApiHeroEndpoint<TransferInput, Repository> =
    endpoint("repos/transfer", RestMethod::Post, "/repos/{owner}/{repo}/transfer");

/// Trigger a `repository_dispatch` webhook event.
///
/// `event_type` is at most 100 characters. Answers `204 No Content`.
pub const CREATE_DISPATCH_EVENT: ApiHeroEndpoint<CreateDispatchEventInput, NoContent> = endpoint(
    "repos/createDispatchEvent",
    RestMethod::Post,
    "/repos/{owner}/{repo}/dispatches",
);

/// List languages, in bytes of code.
pub const LIST_LANGUAGES: ApiHeroEndpoint<RepoInput, Languages> =
    endpoint("repos/listLanguages", RestMethod::Get, "/repos/{owner}/{repo}/languages");

/// Get all repository topics.
pub const GET_ALL_TOPICS: ApiHeroEndpoint<RepoPageInput, Topics> =
    endpoint("repos/getAllTopics", RestMethod::Get, "/repos/{owner}/{repo}/topics");

/// Replace all repository topics. An empty list clears them.
pub const REPLACE_ALL_TOPICS: ApiHeroEndpoint<ReplaceAllTopicsInput, Topics> =
    endpoint("repos/replaceAllTopics", RestMethod::Put, "/repos/{owner}/{repo}/topics");

/// List contributors, sorted by number of commits.
pub const LIST_CONTRIBUTORS: ApiHeroEndpoint<ListContributorsInput, Vec<Contributor>, LinkHeader> =
    endpoint("repos/listContributors", RestMethod::Get, "/repos/{owner}/{repo}/contributors");

/// List repository tags.
pub const LIST_TAGS: ApiHeroEndpoint<RepoPageInput, Vec<Tag>, LinkHeader> =
    endpoint("repos/listTags", RestMethod::Get, "/repos/{owner}/{repo}/tags");

/// Get a GitHub Pages site.
pub const GET_PAGES: ApiHeroEndpoint<RepoInput, Page> =
    endpoint("repos/getPages", RestMethod::Get, "/repos/{owner}/{repo}/pages");

// =============================================================================
// Branches
// =============================================================================

/// List branches.
pub const LIST_BRANCHES: ApiHeroEndpoint<ListBranchesInput, Vec<ShortBranch>, LinkHeader> =
    endpoint("repos/listBranches", RestMethod::Get, "/repos/{owner}/{repo}/branches");

/// Get a branch.
pub const GET_BRANCH: ApiHeroEndpoint<BranchInput, BranchWithProtection> =
    endpoint("repos/getBranch", RestMethod::Get, "/repos/{owner}/{repo}/branches/{branch}");

/// Rename a branch. Open pull requests and branch protection follow the rename.
pub const RENAME_BRANCH: ApiHeroEndpoint<RenameBranchInput, BranchWithProtection> = endpoint(
    "repos/renameBranch",
    RestMethod::Post,
    "/repos/{owner}/{repo}/branches/{branch}/rename",
);

/// Get branch protection.
pub const GET_BRANCH_PROTECTION: ApiHeroEndpoint<BranchInput, BranchProtection> = endpoint(
    "repos/getBranchProtection",
    RestMethod::Get,
    "/repos/{owner}/{repo}/branches/{branch}/protection",
);

/// Update branch protection. Replaces the whole protection configuration.
pub const UPDATE_BRANCH_PROTECTION: ApiHeroEndpoint<UpdateBranchProtectionInput, BranchProtection> =
    endpoint(
        "repos/updateBranchProtection",
        RestMethod::Put,
        "/repos/{owner}/{repo}/branches/{branch}/protection",
    );

/// Delete branch protection.
///
/// Answers `204 No Content`.
pub const DELETE_BRANCH_PROTECTION: ApiHeroEndpoint<BranchInput, NoContent> = endpoint(
    "repos/deleteBranchProtection",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/branches/{branch}/protection",
);

/// Sync a fork branch with the upstream repository.
pub const MERGE_UPSTREAM: ApiHeroEndpoint<MergeUpstreamInput, MergedUpstream> =
    endpoint("repos/mergeUpstream", RestMethod::Post, "/repos/{owner}/{repo}/merge-upstream");

/// Merge a branch. Answers `204` when the base already contains the head.
pub const MERGE: ApiHeroEndpoint<MergeInput, Commit> =
    endpoint("repos/merge", RestMethod::Post, "/repos/{owner}/{repo}/merges");

// =============================================================================
// Commits
// =============================================================================

/// List commits.
pub const LIST_COMMITS: ApiHeroEndpoint<ListCommitsInput, Vec<Commit>, LinkHeader> =
    endpoint("repos/listCommits", RestMethod::Get, "/repos/{owner}/{repo}/commits");

/// Get a commit, including its diff. Files are paginated past 300 entries.
pub const GET_COMMIT: ApiHeroEndpoint<GetCommitInput, Commit> =
    endpoint("repos/getCommit", RestMethod::Get, "/repos/{owner}/{repo}/commits/{ref}");

/// Compare two commits.
pub const COMPARE_COMMITS: ApiHeroEndpoint<CompareCommitsInput, CommitComparison> = endpoint(
    "repos/compareCommits",
    RestMethod::Get,
    "/repos/{owner}/{repo}/compare/{basehead}",
);

/// List branches for a HEAD commit.
pub const LIST_BRANCHES_FOR_HEAD_COMMIT: ApiHeroEndpoint<CommitShaInput, Vec<ShortBranch>> =
    endpoint(
        "repos/listBranchesForHeadCommit",
        RestMethod::Get,
        "/repos/{owner}/{repo}/commits/{commit_sha}/branches-where-head",
    );

/// List pull requests associated with a commit.
pub const LIST_PULL_REQUESTS_ASSOCIATED_WITH_COMMIT: ApiHeroEndpoint<
    CommitShaPageInput,
    Vec<PullRequestSimple>,
    LinkHeader,
> = endpoint(
    "repos/listPullRequestsAssociatedWithCommit",
    RestMethod::Get,
    "/repos/{owner}/{repo}/commits/{commit_sha}/pulls",
);

// =============================================================================
// Contents
// =============================================================================

/// Get repository content. Answers with a list for directories.
pub const GET_CONTENT: ApiHeroEndpoint<GetContentInput, Content> =
    endpoint("repos/getContent", RestMethod::Get, "/repos/{owner}/{repo}/contents/{path}");

/// Create or update file contents.
pub const CREATE_OR_UPDATE_FILE_CONTENTS: ApiHeroEndpoint<
    CreateOrUpdateFileContentsInput,
    FileCommit,
> = endpoint(
    "repos/createOrUpdateFileContents",
    RestMethod::Put,
    "/repos/{owner}/{repo}/contents/{path}",
);

/// Delete a file. The blob SHA of the file is required.
pub const DELETE_FILE: ApiHeroEndpoint<DeleteFileInput, FileCommit> =
    endpoint("repos/deleteFile", RestMethod::Delete, "/repos/{owner}/{repo}/contents/{path}");

/// Get the preferred README.
pub const GET_README: ApiHeroEndpoint<GetReadmeInput, ContentItem> =
    endpoint("repos/getReadme", RestMethod::Get, "/repos/{owner}/{repo}/readme");

/// Download a tar archive. Answers with a `302` redirect to the archive.
pub const DOWNLOAD_TARBALL_ARCHIVE: ApiHeroEndpoint<RefInput, NoContent, LocationHeader> =
    endpoint(
        "repos/downloadTarballArchive",
        RestMethod::Get,
        "/repos/{owner}/{repo}/tarball/{ref}",
    );

/// Download a zip archive. Answers with a `302` redirect to the archive.
pub const DOWNLOAD_ZIPBALL_ARCHIVE: ApiHeroEndpoint<RefInput, NoContent, LocationHeader> =
    endpoint(
        "repos/downloadZipballArchive",
        RestMethod::Get,
        "/repos/{owner}/{repo}/zipball/{ref}",
    );

// =============================================================================
// Releases
// =============================================================================

/// List releases. Draft releases are only visible to users with push access.
pub const LIST_RELEASES: ApiHeroEndpoint<RepoPageInput, Vec<Release>, LinkHeader> =
    endpoint("repos/listReleases", RestMethod::Get, "/repos/{owner}/{repo}/releases");

/// Get a release.
pub const GET_RELEASE: ApiHeroEndpoint<ReleaseInput, Release> = endpoint(
    "repos/getRelease",
    RestMethod::Get,
    "/repos/{owner}/{repo}/releases/{release_id}",
);

/// Get the latest published full release.
pub const GET_LATEST_RELEASE: ApiHeroEndpoint<RepoInput, Release> = endpoint(
    "repos/getLatestRelease",
    RestMethod::Get,
    "/repos/{owner}/{repo}/releases/latest",
);

/// Get a release by tag name.
pub const GET_RELEASE_BY_TAG: ApiHeroEndpoint<ReleaseByTagInput, Release> = endpoint(
    "repos/getReleaseByTag",
    RestMethod::Get,
    "/repos/{owner}/{repo}/releases/tags/{tag}",
);

/// Create a release.
pub const CREATE_RELEASE: ApiHeroEndpoint<CreateReleaseInput, Release, LocationHeader> =
    endpoint("repos/createRelease", RestMethod::Post, "/repos/{owner}/{repo}/releases");

/// Update a release.
pub const UPDATE_RELEASE: ApiHeroEndpoint<UpdateReleaseInput, Release> = endpoint(
    "repos/updateRelease",
    RestMethod::Patch,
    "/repos/{owner}/{repo}/releases/{release_id}",
);

/// Delete a release.
///
/// Answers `204 No Content`.
pub const DELETE_RELEASE: ApiHeroEndpoint<ReleaseInput, NoContent> = endpoint(
    "repos/deleteRelease",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/releases/{release_id}",
);

/// Generate release notes content for a release without creating it.
pub const GENERATE_RELEASE_NOTES: ApiHeroEndpoint<GenerateReleaseNotesInput, ReleaseNotes> =
    endpoint(
        "repos/generateReleaseNotes",
        RestMethod::Post,
        "/repos/{owner}/{repo}/releases/generate-notes",
    );

/// List release assets.
pub const LIST_RELEASE_ASSETS: ApiHeroEndpoint<ReleasePageInput, Vec<ReleaseAsset>, LinkHeader> =
    endpoint(
        "repos/listReleaseAssets",
        RestMethod::Get,
        "/repos/{owner}/{repo}/releases/{release_id}/assets",
    );

/// Get a release asset.
pub const GET_RELEASE_ASSET: ApiHeroEndpoint<ReleaseAssetInput, ReleaseAsset> = endpoint(
    "repos/getReleaseAsset",
    RestMethod::Get,
    "/repos/{owner}/{repo}/releases/assets/{asset_id}",
);

/// Update a release asset.
pub const UPDATE_RELEASE_ASSET: ApiHeroEndpoint<UpdateReleaseAssetInput, ReleaseAsset> = endpoint(
    "repos/updateReleaseAsset",
    RestMethod::Patch,
    "/repos/{owner}/{repo}/releases/assets/{asset_id}",
);

/// Delete a release asset.
///
/// Answers `204 No Content`.
pub const DELETE_RELEASE_ASSET: ApiHeroEndpoint<ReleaseAssetInput, NoContent> = endpoint(
    "repos/deleteReleaseAsset",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/releases/assets/{asset_id}",
);

// =============================================================================
// Collaborators and invitations
// =============================================================================

/// List repository collaborators.
pub const LIST_COLLABORATORS: ApiHeroEndpoint<ListCollaboratorsInput, Vec<Collaborator>, LinkHeader> =
    endpoint("repos/listCollaborators", RestMethod::Get, "/repos/{owner}/{repo}/collaborators");

/// Check if a user is a collaborator. Answers `204` if so, `404` otherwise.
pub const CHECK_COLLABORATOR: ApiHeroEndpoint<CollaboratorInput, NoContent> = endpoint(
    "repos/checkCollaborator",
    RestMethod::Get,
    "/repos/{owner}/{repo}/collaborators/{username}",
);

/// Add a collaborator. Sends an invitation unless the user already has access.
pub const ADD_COLLABORATOR: ApiHeroEndpoint<AddCollaboratorInput, RepositoryInvitation> = endpoint(
    "repos/addCollaborator",
    RestMethod::Put,
    "/repos/{owner}/{repo}/collaborators/{username}",
);

/// Remove a collaborator.
///
/// Answers `204 No Content`.
pub const REMOVE_COLLABORATOR: ApiHeroEndpoint<CollaboratorInput, NoContent> = endpoint(
    "repos/removeCollaborator",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/collaborators/{username}",
);

/// Get repository permissions for a user.
pub const GET_COLLABORATOR_PERMISSION_LEVEL: ApiHeroEndpoint<
    CollaboratorInput,
    CollaboratorPermission,
> = endpoint(
    "repos/getCollaboratorPermissionLevel",
    RestMethod::Get,
    "/repos/{owner}/{repo}/collaborators/{username}/permission",
);

/// List open invitations on a repository.
pub const LIST_INVITATIONS: ApiHeroEndpoint<RepoPageInput, Vec<RepositoryInvitation>, LinkHeader> =
    endpoint("repos/listInvitations", RestMethod::Get, "/repos/{owner}/{repo}/invitations");

/// Update a repository invitation's permissions.
pub const UPDATE_INVITATION: ApiHeroEndpoint<UpdateInvitationInput, RepositoryInvitation> =
    endpoint(
        "repos/updateInvitation",
        RestMethod::Patch,
        "/repos/{owner}/{repo}/invitations/{invitation_id}",
    );

/// Delete a repository invitation.
///
/// Answers `204 No Content`.
pub const DELETE_INVITATION: ApiHeroEndpoint<RepoInvitationInput, NoContent> = endpoint(
    "repos/deleteInvitation",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/invitations/{invitation_id}",
);

/// List invitations addressed to the authenticated user.
pub const LIST_INVITATIONS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    PageInput,
    Vec<RepositoryInvitation>,
    LinkHeader,
> = endpoint(
    "repos/listInvitationsForAuthenticatedUser",
    RestMethod::Get,
    "/user/repository_invitations",
);

/// Accept a repository invitation.
///
/// Answers `204 No Content`.
pub const ACCEPT_INVITATION_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<UserInvitationInput, NoContent> =
    endpoint(
        "repos/acceptInvitationForAuthenticatedUser",
        RestMethod::Patch,
        "/user/repository_invitations/{invitation_id}",
    );

/// Decline a repository invitation.
///
/// Answers `204 No Content`.
pub const DECLINE_INVITATION_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    UserInvitationInput,
    NoContent,
> = endpoint(
    "repos/declineInvitationForAuthenticatedUser",
    RestMethod::Delete,
    "/user/repository_invitations/{invitation_id}",
);

// =============================================================================
// Webhooks
// =============================================================================

/// List repository webhooks.
pub const LIST_WEBHOOKS: ApiHeroEndpoint<RepoPageInput, Vec<Hook>, LinkHeader> =
    endpoint("repos/listWebhooks", RestMethod::Get, "/repos/{owner}/{repo}/hooks");

/// Get a repository webhook.
pub const GET_WEBHOOK: ApiHeroEndpoint<HookInput, Hook> =
    endpoint("repos/getWebhook", RestMethod::Get, "/repos/{owner}/{repo}/hooks/{hook_id}");

/// Create a repository webhook.
pub const CREATE_WEBHOOK: ApiHeroEndpoint<CreateWebhookInput, Hook, LocationHeader> =
    endpoint("repos/createWebhook", RestMethod::Post, "/repos/{owner}/{repo}/hooks");

/// Update a repository webhook.
pub const UPDATE_WEBHOOK: ApiHeroEndpoint<UpdateWebhookInput, Hook> =
    endpoint("repos/updateWebhook", RestMethod::Patch, "/repos/{owner}/{repo}/hooks/{hook_id}");

/// Delete a repository webhook.
///
/// Answers `204 No Content`.
pub const DELETE_WEBHOOK: ApiHeroEndpoint<HookInput, NoContent> =
    endpoint("repos/deleteWebhook", RestMethod::Delete, "/repos/{owner}/{repo}/hooks/{hook_id}");

/// Trigger a ping event to be sent to the hook.
///
/// Answers `204 No Content`.
pub const PING_WEBHOOK: ApiHeroEndpoint<HookInput, NoContent> = endpoint(
    "repos/pingWebhook",
    RestMethod::Post,
    "/repos/{owner}/{repo}/hooks/{hook_id}/pings",
);

/// Trigger the hook with the latest push, if it subscribes to `push`.
///
/// Answers `204 No Content`.
pub const TEST_PUSH_WEBHOOK: ApiHeroEndpoint<HookInput, NoContent> = endpoint(
    "repos/testPushWebhook",
    RestMethod::Post,
    "/repos/{owner}/{repo}/hooks/{hook_id}/tests",
);

// =============================================================================
// Deployments and statuses
// =============================================================================

/// List deployments.
pub const LIST_DEPLOYMENTS: ApiHeroEndpoint<ListDeploymentsInput, Vec<Deployment>, LinkHeader> =
    endpoint("repos/listDeployments", RestMethod::Get, "/repos/{owner}/{repo}/deployments");

/// Get a deployment.
pub const GET_DEPLOYMENT: ApiHeroEndpoint<DeploymentInput, Deployment> = endpoint(
    "repos/getDeployment",
    RestMethod::Get,
    "/repos/{owner}/{repo}/deployments/{deployment_id}",
);

/// Create a deployment.
///
/// Answers `202` with a message instead of a deployment when an auto-merge
/// happened first; that case surfaces as a deserialization failure of `O`.
pub const CREATE_DEPLOYMENT: ApiHeroEndpoint<CreateDeploymentInput, Deployment> =
    endpoint("repos/createDeployment", RestMethod::Post, "/repos/{owner}/{repo}/deployments");

/// Delete an inactive deployment.
///
/// Active deployments answer `422`; mark them `inactive` first. Answers `204 No Content`.
pub const DELETE_DEPLOYMENT: ApiHeroEndpoint<DeploymentInput, NoContent> = endpoint(
    "repos/deleteDeployment",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/deployments/{deployment_id}",
);

/// List deployment statuses.
pub const LIST_DEPLOYMENT_STATUSES: ApiHeroEndpoint<
    DeploymentPageInput,
    Vec<DeploymentStatus>,
    LinkHeader,
> = endpoint(
    "repos/listDeploymentStatuses",
    RestMethod::Get,
    "/repos/{owner}/{repo}/deployments/{deployment_id}/statuses",
);

/// Create a deployment status.
pub const CREATE_DEPLOYMENT_STATUS: ApiHeroEndpoint<
    CreateDeploymentStatusInput,
    DeploymentStatus,
    LocationHeader,
> = endpoint(
    "repos/createDeploymentStatus",
    RestMethod::Post,
    "/repos/{owner}/{repo}/deployments/{deployment_id}/statuses",
);

/// List commit statuses for a reference, newest first.
pub const LIST_COMMIT_STATUSES_FOR_REF: ApiHeroEndpoint<RefPageInput, Vec<CommitStatus>, LinkHeader> =
    endpoint(
        "repos/listCommitStatusesForRef",
        RestMethod::Get,
        "/repos/{owner}/{repo}/commits/{ref}/statuses",
    );

/// Get the combined status for a reference.
pub const GET_COMBINED_STATUS_FOR_REF: ApiHeroEndpoint<RefPageInput, CombinedCommitStatus> =
    endpoint(
        "repos/getCombinedStatusForRef",
        RestMethod::Get,
        "/repos/{owner}/{repo}/commits/{ref}/status",
    );

/// Create a commit status.
pub const CREATE_COMMIT_STATUS: ApiHeroEndpoint<CreateCommitStatusInput, CommitStatus, LocationHeader> =
    endpoint("repos/createCommitStatus", RestMethod::Post, "/repos/{owner}/{repo}/statuses/{sha}");

// =============================================================================
// Deploy keys
// =============================================================================

/// List deploy keys.
pub const LIST_DEPLOY_KEYS: ApiHeroEndpoint<RepoPageInput, Vec<DeployKey>, LinkHeader> =
    endpoint("repos/listDeployKeys", RestMethod::Get, "/repos/{owner}/{repo}/keys");

/// Get a deploy key.
pub const GET_DEPLOY_KEY: ApiHeroEndpoint<DeployKeyInput, DeployKey> =
    endpoint("repos/getDeployKey", RestMethod::Get, "/repos/{owner}/{repo}/keys/{key_id}");

/// Create a deploy key.
pub const CREATE_DEPLOY_KEY: ApiHeroEndpoint<CreateDeployKeyInput, DeployKey, LocationHeader> =
    endpoint("repos/createDeployKey", RestMethod::Post, "/repos/{owner}/{repo}/keys");

/// Delete a deploy key. Keys are immutable; delete and recreate to change one.
///
/// Answers `204 No Content`.
pub const DELETE_DEPLOY_KEY: ApiHeroEndpoint<DeployKeyInput, NoContent> =
    endpoint("repos/deleteDeployKey", RestMethod::Delete, "/repos/{owner}/{repo}/keys/{key_id}");

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST_FOR_AUTHENTICATED_USER.meta(),
        LIST_FOR_USER.meta(),
        LIST_FOR_ORG.meta(),
        LIST_PUBLIC.meta(),
        GET.meta(),
        UPDATE.meta(),
        DELETE.meta(),
        CREATE_FOR_AUTHENTICATED_USER.meta(),
        CREATE_IN_ORG.meta(),
        CREATE_USING_TEMPLATE.meta(),
        CREATE_FORK.meta(),
        LIST_FORKS.meta(),
        TRANSFER.meta(),
        CREATE_DISPATCH_EVENT.meta(),
        LIST_LANGUAGES.meta(),
        GET_ALL_TOPICS.meta(),
        REPLACE_ALL_TOPICS.meta(),
        LIST_CONTRIBUTORS.meta(),
        LIST_TAGS.meta(),
        GET_PAGES.meta(),
        LIST_BRANCHES.meta(),
        GET_BRANCH.meta(),
        RENAME_BRANCH.meta(),
        GET_BRANCH_PROTECTION.meta(),
        UPDATE_BRANCH_PROTECTION.meta(),
        DELETE_BRANCH_PROTECTION.meta(),
        MERGE_UPSTREAM.meta(),
        MERGE.meta(),
        LIST_COMMITS.meta(),
        GET_COMMIT.meta(),
        COMPARE_COMMITS.meta(),
        LIST_BRANCHES_FOR_HEAD_COMMIT.meta(),
        LIST_PULL_REQUESTS_ASSOCIATED_WITH_COMMIT.meta(),
        GET_CONTENT.meta(),
        CREATE_OR_UPDATE_FILE_CONTENTS.meta(),
        DELETE_FILE.meta(),
        GET_README.meta(),
        DOWNLOAD_TARBALL_ARCHIVE.meta(),
        DOWNLOAD_ZIPBALL_ARCHIVE.meta(),
        LIST_RELEASES.meta(),
        GET_RELEASE.meta(),
        GET_LATEST_RELEASE.meta(),
        GET_RELEASE_BY_TAG.meta(),
        CREATE_RELEASE.meta(),
        UPDATE_RELEASE.meta(),
        DELETE_RELEASE.meta(),
        GENERATE_RELEASE_NOTES.meta(),
        LIST_RELEASE_ASSETS.meta(),
        GET_RELEASE_ASSET.meta(),
        UPDATE_RELEASE_ASSET.meta(),
        DELETE_RELEASE_ASSET.meta(),
        LIST_COLLABORATORS.meta(),
        CHECK_COLLABORATOR.meta(),
        ADD_COLLABORATOR.meta(),
        REMOVE_COLLABORATOR.meta(),
        GET_COLLABORATOR_PERMISSION_LEVEL.meta(),
        LIST_INVITATIONS.meta(),
        UPDATE_INVITATION.meta(),
        DELETE_INVITATION.meta(),
        LIST_INVITATIONS_FOR_AUTHENTICATED_USER.meta(),
        ACCEPT_INVITATION_FOR_AUTHENTICATED_USER.meta(),
        DECLINE_INVITATION_FOR_AUTHENTICATED_USER.meta(),
        LIST_WEBHOOKS.meta(),
        GET_WEBHOOK.meta(),
        CREATE_WEBHOOK.meta(),
        UPDATE_WEBHOOK.meta(),
        DELETE_WEBHOOK.meta(),
        PING_WEBHOOK.meta(),
        TEST_PUSH_WEBHOOK.meta(),
        LIST_DEPLOYMENTS.meta(),
        GET_DEPLOYMENT.meta(),
        CREATE_DEPLOYMENT.meta(),
        DELETE_DEPLOYMENT.meta(),
        LIST_DEPLOYMENT_STATUSES.meta(),
        CREATE_DEPLOYMENT_STATUS.meta(),
        LIST_COMMIT_STATUSES_FOR_REF.meta(),
        GET_COMBINED_STATUS_FOR_REF.meta(),
        CREATE_COMMIT_STATUS.meta(),
        LIST_DEPLOY_KEYS.meta(),
        GET_DEPLOY_KEY.meta(),
        CREATE_DEPLOY_KEY.meta(),
        DELETE_DEPLOY_KEY.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use apihero_define::EndpointInput;

    fn find(id: &str) -> EndpointMeta {
        endpoints().into_iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn module_has_every_repos_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 82);
        assert!(all.iter().all(|e| e.resource() == "repos"));
    }

    #[test]
    fn get_repository() {
        let endpoint = find("repos/get");
        assert_eq!(endpoint.method, RestMethod::Get);
        assert_eq!(endpoint.path, "/repos/{owner}/{repo}");
        assert_eq!(endpoint.path_params, &["owner", "repo"]);
        assert!(!endpoint.is_paginated());
    }

    #[test]
    fn list_for_org_is_paginated() {
        let endpoint = find("repos/listForOrg");
        assert!(endpoint.is_paginated());
        assert!(endpoint.query_params.contains(&"type"));
        assert!(endpoint.query_params.contains(&"per_page"));
    }

    #[test]
    fn commit_ref_uses_keyword_placeholder() {
        assert_eq!(GetCommitInput::PATH_PARAMS, &["owner", "repo", "ref"]);
        let request = GET_COMMIT
            .prepare(&GetCommitInput {
                owner: "octocat".into(),
                repo: "hello-world".into(),
                git_ref: "main".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(request.path, "/repos/octocat/hello-world/commits/main");
    }

    #[test]
    fn create_release_returns_location() {
        let endpoint = find("repos/createRelease");
        assert_eq!(endpoint.method, RestMethod::Post);
        assert_eq!(endpoint.response_headers, &["location"]);
        assert_eq!(endpoint.body_params[0], "tag_name");
    }

    #[test]
    fn delete_file_sends_body() {
        let request = DELETE_FILE
            .prepare(&DeleteFileInput {
                owner: "octocat".into(),
                repo: "hello-world".into(),
                path: "notes/todo.md".into(),
                message: "remove todo".into(),
                sha: "329688480d39049927147c162b9d2deaf885005f".into(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(request.method, RestMethod::Delete);
        assert_eq!(request.path, "/repos/octocat/hello-world/contents/notes/todo.md");
        let body = request.body.unwrap();
        assert_eq!(body["message"], "remove todo");
        assert!(body.get("branch").is_none());
    }

    #[test]
    fn archive_downloads_redirect() {
        for id in ["repos/downloadTarballArchive", "repos/downloadZipballArchive"] {
            let endpoint = find(id);
            assert_eq!(endpoint.response_headers, &["location"]);
            assert_eq!(endpoint.path_params, &["owner", "repo", "ref"]);
        }
    }

    #[test]
    fn list_public_pages_by_cursor() {
        let endpoint = find("repos/listPublic");
        assert!(endpoint.is_paginated());
        assert_eq!(endpoint.query_params, &["since"]);
    }
}
