//! Gists, gist comments, forks and stars.

use std::collections::BTreeMap;

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::types::{Gist, GistComment, GistCommit, GistFileInput};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct ListInput {
        query {
            /// Only gists updated at or after this ISO 8601 timestamp.
            since: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListForUserInput {
        path { username: String }
        query { since: Option<String>, per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GistInput {
        path { gist_id: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GistPageInput {
        path { gist_id: String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateInput {
        body {
            description: Option<String>,
            /// Contents keyed by file name.
            files: BTreeMap<String, GistFileInput>,
            public: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInput {
        path { gist_id: String }
        body {
            description: Option<String>,
            /// A `None` value deletes that file.
            files: Option<BTreeMap<String, Option<GistFileInput>>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CommentInput {
        path { gist_id: String, comment_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateCommentInput {
        path { gist_id: String }
        body { body: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateCommentInput {
        path { gist_id: String, comment_id: u64 }
        body { body: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RevisionInput {
        path { gist_id: String, sha: String }
    }
}

// =============================================================================
// Gists
// =============================================================================

/// List gists of the authenticated user, or public gists when anonymous.
pub const LIST: ApiHeroEndpoint<ListInput, Vec<Gist>, LinkHeader> =
    endpoint("gists/list", RestMethod::Get, "/gists");

/// List public gists, most recently updated first.
pub const LIST_PUBLIC: ApiHeroEndpoint<ListInput, Vec<Gist>, LinkHeader> =
    endpoint("gists/listPublic", RestMethod::Get, "/gists/public");

/// List the authenticated user's starred gists.
pub const LIST_STARRED: ApiHeroEndpoint<ListInput, Vec<Gist>, LinkHeader> =
    endpoint("gists/listStarred", RestMethod::Get, "/gists/starred");

/// List public gists of a user.
pub const LIST_FOR_USER: ApiHeroEndpoint<ListForUserInput, Vec<Gist>, LinkHeader> =
    endpoint("gists/listForUser", RestMethod::Get, "/users/{username}/gists");

/// Get a gist. File contents over one megabyte are truncated.
pub const GET: ApiHeroEndpoint<GistInput, Gist> =
    endpoint("gists/get", RestMethod::Get, "/gists/{gist_id}");

/// Create a gist.
pub const CREATE: ApiHeroEndpoint<CreateInput, Gist, LocationHeader> =
    endpoint("gists/create", RestMethod::Post, "/gists");

/// Update a gist's description, or add, rename and delete files.
pub const UPDATE: ApiHeroEndpoint<UpdateInput, Gist> =
    endpoint("gists/update", RestMethod::Patch, "/gists/{gist_id}");

/// Delete a gist.
///
/// Answers `204 No Content`.
pub const DELETE: ApiHeroEndpoint<GistInput, NoContent> =
    endpoint("gists/delete", RestMethod::Delete, "/gists/{gist_id}");

/// Get a specific revision of a gist.
pub const GET_REVISION: ApiHeroEndpoint<RevisionInput, Gist> =
    endpoint("gists/getRevision", RestMethod::Get, "/gists/{gist_id}/{sha}");

/// List the revisions of a gist.
pub const LIST_COMMITS: ApiHeroEndpoint<GistPageInput, Vec<GistCommit>, LinkHeader> =
    endpoint("gists/listCommits", RestMethod::Get, "/gists/{gist_id}/commits");

// =============================================================================
// Comments
// =============================================================================

/// List comments on a gist.
pub const LIST_COMMENTS: ApiHeroEndpoint<GistPageInput, Vec<GistComment>, LinkHeader> =
    endpoint("gists/listComments", RestMethod::Get, "/gists/{gist_id}/comments");

/// Get a gist comment.
pub const GET_COMMENT: ApiHeroEndpoint<CommentInput, GistComment> =
    endpoint("gists/getComment", RestMethod::Get, "/gists/{gist_id}/comments/{comment_id}");

/// Create a gist comment.
pub const CREATE_COMMENT: ApiHeroEndpoint<CreateCommentInput, GistComment, LocationHeader> =
    endpoint("gists/createComment", RestMethod::Post, "/gists/{gist_id}/comments");

/// Update a gist comment.
pub const UPDATE_COMMENT: ApiHeroEndpoint<UpdateCommentInput, GistComment> = endpoint(
    "gists/updateComment",
    RestMethod::Patch,
    "/gists/{gist_id}/comments/{comment_id}",
);

/// Delete a gist comment.
///
/// Answers `204 No Content`.
pub const DELETE_COMMENT: ApiHeroEndpoint<CommentInput, NoContent> = endpoint(
    "gists/deleteComment",
    RestMethod::Delete,
    "/gists/{gist_id}/comments/{comment_id}",
);

// =============================================================================
// Forks and stars
// =============================================================================

/// List forks of a gist.
pub const LIST_FORKS: ApiHeroEndpoint<GistPageInput, Vec<Gist>, LinkHeader> =
    endpoint("gists/listForks", RestMethod::Get, "/gists/{gist_id}/forks");

/// Fork a gist.
pub const FORK: ApiHeroEndpoint<GistInput, Gist, LocationHeader> =
    endpoint("gists/fork", RestMethod::Post, "/gists/{gist_id}/forks");

/// Star a gist.
///
/// Idempotent. Answers `204 No Content`.
pub const STAR: ApiHeroEndpoint<GistInput, NoContent> =
    endpoint("gists/star", RestMethod::Put, "/gists/{gist_id}/star");

/// Unstar a gist.
///
/// Answers `204 No Content`.
pub const UNSTAR: ApiHeroEndpoint<GistInput, NoContent> =
    endpoint("gists/unstar", RestMethod::Delete, "/gists/{gist_id}/star");

/// Check if a gist is starred. Answers `204` if so, `404` otherwise.
pub const CHECK_IS_STARRED: ApiHeroEndpoint<GistInput, NoContent> =
    endpoint("gists/checkIsStarred", RestMethod::Get, "/gists/{gist_id}/star");

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST.meta(),
        LIST_PUBLIC.meta(),
        LIST_STARRED.meta(),
        LIST_FOR_USER.meta(),
        GET.meta(),
        CREATE.meta(),
        UPDATE.meta(),
        DELETE.meta(),
        GET_REVISION.meta(),
        LIST_COMMITS.meta(),
        LIST_COMMENTS.meta(),
        GET_COMMENT.meta(),
        CREATE_COMMENT.meta(),
        UPDATE_COMMENT.meta(),
        DELETE_COMMENT.meta(),
        LIST_FORKS.meta(),
        FORK.meta(),
        STAR.meta(),
        UNSTAR.meta(),
        CHECK_IS_STARRED.meta(),
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
    fn module_has_every_gists_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 20);
        assert!(all.iter().all(|e| e.resource() == "gists"));
    }

    #[test]
    fn star_endpoints_share_a_path() {
        let paths: Vec<_> = ["gists/star", "gists/unstar", "gists/checkIsStarred"]
            .into_iter()
            .map(|id| find(id).path)
            .collect();
        assert!(paths.iter().all(|path| *path == "/gists/{gist_id}/star"));
        assert_eq!(STAR.method(), RestMethod::Put);
        assert_eq!(UNSTAR.method(), RestMethod::Delete);
    }

    #[test]
    fn listings_use_since_and_pages() {
        let list = find("gists/list");
        assert!(list.is_paginated());
        assert_eq!(list.query_params, &["since", "per_page", "page"]);
    }

    #[test]
    fn prepare_update_keeps_file_deletions() {
        let mut files = BTreeMap::new();
        files.insert(
            "hello.rb".to_string(),
            Some(GistFileInput {
                content: Some("puts 'hello'".into()),
                filename: None,
            }),
        );
        files.insert("old.txt".to_string(), None);

        let request = UPDATE
            .prepare(&UpdateInput {
                gist_id: "aa5a315d61ae9438b18d".into(),
                files: Some(files),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(request.path, "/gists/aa5a315d61ae9438b18d");
        assert_eq!(
            request.body,
            Some(json!({
                "files": {
                    "hello.rb": { "content": "puts 'hello'" },
                    "old.txt": null
                }
            }))
        );
    }
}
