//! The Git database: blobs, commits, references, tags and trees.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LocationHeader, NoContent, RestMethod, endpoint_input,
};

use crate::endpoint;
use crate::types::{GitBlob, GitCommit, GitRef, GitTag, GitTree, NewTreeEntry, ShortBlob, Signature};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct BlobInput {
        path { owner: String, repo: String, file_sha: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateBlobInput {
        path { owner: String, repo: String }
        body {
            /// Raw text, or base64 when `encoding` is `base64`.
            content: String,
            /// `utf-8` or `base64`.
            encoding: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CommitInput {
        path { owner: String, repo: String, commit_sha: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateCommitInput {
        path { owner: String, repo: String }
        body {
            message: String,
            tree: String,
            parents: Option<Vec<String>>,
            author: Option<Signature>,
            committer: Option<Signature>,
            /// ASCII-armored detached signature.
            signature: Option<String>,
        }
    }
}

endpoint_input! {
    /// A reference without the `refs/` prefix, such as `heads/main`.
    #[derive(Default)]
    pub struct RefInput {
        path { owner: String, repo: String, git_ref as "ref": String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateRefInput {
        path { owner: String, repo: String }
        body {
            /// Fully qualified, starting with `refs/`.
            full_ref as "ref": String,
            sha: String,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateRefInput {
        path { owner: String, repo: String, git_ref as "ref": String }
        body {
            sha: String,
            force: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct TagInput {
        path { owner: String, repo: String, tag_sha: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateTagInput {
        path { owner: String, repo: String }
        body {
            tag: String,
            message: String,
            object: String,
            /// `commit`, `tree` or `blob`.
            kind as "type": String,
            tagger: Option<Signature>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct TreeInput {
        path { owner: String, repo: String, tree_sha: String }
        query {
            /// Any value enables recursion; omit to disable it.
            recursive: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateTreeInput {
        path { owner: String, repo: String }
        body {
            tree: Vec<NewTreeEntry>,
            base_tree: Option<String>,
        }
    }
}

// =============================================================================
// Blobs and commits
// =============================================================================

/// Get a blob. The content is base64 encoded.
pub const GET_BLOB: ApiHeroEndpoint<BlobInput, GitBlob> =
    endpoint("git/getBlob", RestMethod::Get, "/repos/{owner}/{repo}/git/blobs/{file_sha}");

/// Create a blob.
pub const CREATE_BLOB: ApiHeroEndpoint<CreateBlobInput, ShortBlob, LocationHeader> =
    endpoint("git/createBlob", RestMethod::Post, "/repos/{owner}/{repo}/git/blobs");

/// Get a commit object.
pub const GET_COMMIT: ApiHeroEndpoint<CommitInput, GitCommit> = endpoint(
    "git/getCommit",
    RestMethod::Get,
    "/repos/{owner}/{repo}/git/commits/{commit_sha}",
);

/// Create a commit object.
pub const CREATE_COMMIT: ApiHeroEndpoint<CreateCommitInput, GitCommit, LocationHeader> =
    endpoint("git/createCommit", RestMethod::Post, "/repos/{owner}/{repo}/git/commits");

// =============================================================================
// References
// =============================================================================

/// Get a single reference.
pub const GET_REF: ApiHeroEndpoint<RefInput, GitRef> =
    endpoint("git/getRef", RestMethod::Get, "/repos/{owner}/{repo}/git/ref/{ref}");

/// List references whose name starts with `ref`. An empty list means no match.
pub const LIST_MATCHING_REFS: ApiHeroEndpoint<RefInput, Vec<GitRef>> = endpoint(
    "git/listMatchingRefs",
    RestMethod::Get,
    "/repos/{owner}/{repo}/git/matching-refs/{ref}",
);

/// Create a reference.
pub const CREATE_REF: ApiHeroEndpoint<CreateRefInput, GitRef, LocationHeader> =
    endpoint("git/createRef", RestMethod::Post, "/repos/{owner}/{repo}/git/refs");

/// Move a reference. Non-fast-forward updates need `force`.
pub const UPDATE_REF: ApiHeroEndpoint<UpdateRefInput, GitRef> =
    endpoint("git/updateRef", RestMethod::Patch, "/repos/{owner}/{repo}/git/refs/{ref}");

/// Delete a reference.
///
/// `ref` is the full name below `refs/`, such as `heads/main`. Answers `204 No Content`.
pub const DELETE_REF: ApiHeroEndpoint<RefInput, NoContent> =
    endpoint("git/deleteRef", RestMethod::Delete, "/repos/{owner}/{repo}/git/refs/{ref}");

// =============================================================================
// Tags and trees
// =============================================================================

/// Get an annotated tag object.
pub const GET_TAG: ApiHeroEndpoint<TagInput, GitTag> =
    endpoint("git/getTag", RestMethod::Get, "/repos/{owner}/{repo}/git/tags/{tag_sha}");

/// Create an annotated tag object. The `refs/tags/*` reference is created separately.
pub const CREATE_TAG: ApiHeroEndpoint<CreateTagInput, GitTag, LocationHeader> =
    endpoint("git/createTag", RestMethod::Post, "/repos/{owner}/{repo}/git/tags");

/// Get a tree, optionally recursive.
pub const GET_TREE: ApiHeroEndpoint<TreeInput, GitTree> =
    endpoint("git/getTree", RestMethod::Get, "/repos/{owner}/{repo}/git/trees/{tree_sha}");

/// Create a tree, optionally on top of `base_tree`.
pub const CREATE_TREE: ApiHeroEndpoint<CreateTreeInput, GitTree, LocationHeader> =
    endpoint("git/createTree", RestMethod::Post, "/repos/{owner}/{repo}/git/trees");

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        GET_BLOB.meta(),
        CREATE_BLOB.meta(),
        GET_COMMIT.meta(),
        CREATE_COMMIT.meta(),
        GET_REF.meta(),
        LIST_MATCHING_REFS.meta(),
        CREATE_REF.meta(),
        UPDATE_REF.meta(),
        DELETE_REF.meta(),
        GET_TAG.meta(),
        CREATE_TAG.meta(),
        GET_TREE.meta(),
        CREATE_TREE.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> EndpointMeta {
        endpoints().into_iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn module_has_every_git_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 13);
        assert!(all.iter().all(|e| e.resource() == "git"));
    }

    #[test]
    fn ref_placeholder_uses_wire_name() {
        let endpoint = find("git/updateRef");
        assert_eq!(endpoint.path_params, &["owner", "repo", "ref"]);
        assert_eq!(endpoint.template_params(), vec!["owner", "repo", "ref"]);
        assert_eq!(endpoint.body_params, &["sha", "force"]);
    }

    #[test]
    fn create_tag_renames_kind() {
        assert_eq!(find("git/createTag").body_params, &["tag", "message", "object", "type", "tagger"]);
    }

    #[test]
    fn prepare_get_ref_keeps_slashes() {
        let request = GET_REF
            .prepare(&RefInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                git_ref: "heads/feature-a".into(),
            })
            .unwrap();

        assert_eq!(request.path, "/repos/octocat/Hello-World/git/ref/heads/feature-a");
        assert!(request.body.is_none());
    }

    #[test]
    fn prepare_create_tree_sends_entries() {
        let request = CREATE_TREE
            .prepare(&CreateTreeInput {
                owner: "octocat".into(),
                repo: "Hello-World".into(),
                tree: vec![NewTreeEntry {
                    path: "file.rb".into(),
                    mode: "100644".into(),
                    kind: "blob".into(),
                    sha: None,
                    content: Some("puts 'hi'".into()),
                }],
                base_tree: Some("9fb037999f264ba9a7fc6274d15fa3ae2ab98312".into()),
            })
            .unwrap();

        let body = request.body.unwrap();
        assert_eq!(body["tree"][0]["type"], "blob");
        assert_eq!(body["base_tree"], "9fb037999f264ba9a7fc6274d15fa3ae2ab98312");
    }
}
