//! Structural contract of the assembled GitHub catalog.
//!
//! These tests verify that:
//! - Every id is unique and well formed, and every descriptor is tagged `github`
//! - Paginated descriptors accept page or cursor controls
//! - Path placeholders and declared path parameters agree
//! - GET and HEAD descriptors declare no body
//! - Pinned versions parse as semver

use std::collections::HashSet;

use apihero_github::prelude::*;

const CURSOR_PARAMS: &[&str] = &["since", "before", "after", "cursor"];

#[test]
fn catalog_assembles_without_duplicates() {
    let catalog = catalog().expect("catalog should assemble");
    assert_eq!(catalog.len(), endpoints().len());
    assert_eq!(catalog.client_id(), CLIENT_ID);

    let unique: HashSet<_> = catalog.iter().map(|e| e.id).collect();
    assert_eq!(unique.len(), catalog.len());
}

#[test]
fn every_descriptor_targets_github() {
    for endpoint in endpoints() {
        assert_eq!(endpoint.client_id, "github", "{}", endpoint.id);
    }
}

#[test]
fn paginated_descriptors_take_page_or_cursor_params() {
    let catalog = catalog().unwrap();
    let mut checked = 0;

    for endpoint in catalog.paginated() {
        let query = endpoint.query_params;
        let paged = query.contains(&"per_page") && query.contains(&"page");
        let cursor = CURSOR_PARAMS.iter().any(|param| query.contains(param));
        assert!(
            paged || cursor,
            "{} is paginated but has neither page nor cursor params: {:?}",
            endpoint.id,
            query
        );
        checked += 1;
    }

    assert!(checked > 50, "expected most listings to paginate, found {checked}");
}

#[test]
fn path_placeholders_match_declared_path_params() {
    for endpoint in endpoints() {
        let mut template = endpoint.template_params();
        let mut declared = endpoint.path_params.to_vec();
        template.sort_unstable();
        declared.sort_unstable();
        assert_eq!(template, declared, "{} ({})", endpoint.id, endpoint.path);
    }
}

#[test]
fn safe_methods_carry_no_body() {
    for endpoint in endpoints() {
        if endpoint.method.is_safe() {
            assert!(
                !endpoint.has_body(),
                "{} is {} but declares body params {:?}",
                endpoint.id,
                endpoint.method,
                endpoint.body_params
            );
        }
    }
}

#[test]
fn versions_parse_as_semver() {
    for endpoint in endpoints() {
        assert!(endpoint.parsed_version().is_ok(), "{}", endpoint.id);
    }
}

#[test]
fn parameter_names_do_not_collide_across_groups() {
    for endpoint in endpoints() {
        let mut seen = HashSet::new();
        for name in endpoint
            .path_params
            .iter()
            .chain(endpoint.query_params)
            .chain(endpoint.body_params)
        {
            assert!(seen.insert(name), "{} declares '{name}' twice", endpoint.id);
        }
    }
}

#[test]
fn catalog_covers_every_resource() {
    let resources = catalog().unwrap().resources();
    for expected in [
        "actions",
        "activity",
        "checks",
        "codesOfConduct",
        "emojis",
        "gists",
        "git",
        "gitignore",
        "issues",
        "licenses",
        "markdown",
        "meta",
        "orgs",
        "pulls",
        "rateLimit",
        "reactions",
        "repos",
        "search",
        "teams",
        "users",
    ] {
        assert!(resources.contains(&expected), "missing resource {expected}");
    }
}

#[test]
fn well_known_operations_are_routed() {
    let catalog = catalog().unwrap();
    let route = |id: &str| {
        let endpoint = catalog.get(id).unwrap_or_else(|| panic!("missing {id}"));
        (endpoint.method, endpoint.path)
    };

    assert_eq!(route("repos/get"), (RestMethod::Get, "/repos/{owner}/{repo}"));
    assert_eq!(
        route("issues/create"),
        (RestMethod::Post, "/repos/{owner}/{repo}/issues")
    );
    assert_eq!(
        route("pulls/merge"),
        (RestMethod::Put, "/repos/{owner}/{repo}/pulls/{pull_number}/merge")
    );
    assert_eq!(
        route("git/deleteRef"),
        (RestMethod::Delete, "/repos/{owner}/{repo}/git/refs/{ref}")
    );
    assert_eq!(route("rateLimit/get"), (RestMethod::Get, "/rate_limit"));
    assert_eq!(route("search/repos"), (RestMethod::Get, "/search/repositories"));
}

#[test]
fn typed_descriptor_prepares_through_the_prelude() {
    let request = apihero_github::issues::GET
        .prepare(&apihero_github::issues::IssueInput {
            owner: "octocat".into(),
            repo: "Hello-World".into(),
            issue_number: 1347,
        })
        .unwrap();

    assert_eq!(request.client_id, CLIENT_ID);
    assert_eq!(request.path, "/repos/octocat/Hello-World/issues/1347");
}

#[test]
fn reserved_characters_in_path_values_are_escaped() {
    let request = apihero_github::git::GET_REF
        .prepare(&apihero_github::git::RefInput {
            owner: "octocat".into(),
            repo: "Hello-World".into(),
            git_ref: "heads/fix #12?draft".into(),
        })
        .unwrap();
    assert_eq!(
        request.path,
        "/repos/octocat/Hello-World/git/ref/heads/fix%20%2312%3Fdraft"
    );

    let request = apihero_github::repos::GET_BRANCH
        .prepare(&apihero_github::repos::BranchInput {
            owner: "octocat".into(),
            repo: "Hello-World".into(),
            branch: "100%-done".into(),
        })
        .unwrap();
    assert_eq!(request.path, "/repos/octocat/Hello-World/branches/100%25-done");
}
