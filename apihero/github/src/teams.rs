//! Organization teams, team membership and team repositories.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::params::{OrgPageInput, PageInput};
use crate::types::{
    OrganizationInvitation, Repository, SimpleUser, Team, TeamFull, TeamMembership,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct TeamInput {
        path { org: String, team_slug: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct TeamPageInput {
        path { org: String, team_slug: String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateInput {
        path { org: String }
        body {
            name: String,
            description: Option<String>,
            /// Logins of organization members to add as maintainers.
            maintainers: Option<Vec<String>>,
            /// Full names (`org/repo`) of repositories to add.
            repo_names: Option<Vec<String>>,
            /// `secret` or `closed`. Nested teams must be `closed`.
            privacy: Option<String>,
            /// `notifications_enabled` or `notifications_disabled`.
            notification_setting: Option<String>,
            parent_team_id: Option<u64>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInput {
        path { org: String, team_slug: String }
        body {
            name: Option<String>,
            description: Option<String>,
            /// `secret` or `closed`. Nested teams must be `closed`.
            privacy: Option<String>,
            /// `notifications_enabled` or `notifications_disabled`.
            notification_setting: Option<String>,
            parent_team_id: Option<u64>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListMembersInput {
        path { org: String, team_slug: String }
        query {
            /// `member`, `maintainer` or `all`.
            role: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct MembershipInput {
        path { org: String, team_slug: String, username: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SetMembershipInput {
        path { org: String, team_slug: String, username: String }
        body {
            /// `member` or `maintainer`.
            role: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct TeamRepoInput {
        path { org: String, team_slug: String, owner: String, repo: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RepoPermissionInput {
        path { org: String, team_slug: String, owner: String, repo: String }
        body {
            /// `pull`, `triage`, `push`, `maintain`, `admin` or a custom role name.
            permission: Option<String>,
        }
    }
}

// =============================================================================
// Teams
// =============================================================================

/// List teams visible to the caller in an organization.
pub const LIST: ApiHeroEndpoint<OrgPageInput, Vec<Team>, LinkHeader> =
    endpoint("teams/list", RestMethod::Get, "/orgs/{org}/teams");

/// Get a team by its slug.
pub const GET_BY_NAME: ApiHeroEndpoint<TeamInput, TeamFull> =
    endpoint("teams/getByName", RestMethod::Get, "/orgs/{org}/teams/{team_slug}");

/// Create a team. The creator becomes a maintainer.
pub const CREATE: ApiHeroEndpoint<CreateInput, TeamFull, LocationHeader> =
    endpoint("teams/create", RestMethod::Post, "/orgs/{org}/teams");

/// Update a team.
pub const UPDATE_IN_ORG: ApiHeroEndpoint<UpdateInput, TeamFull> =
    endpoint("teams/updateInOrg", RestMethod::Patch, "/orgs/{org}/teams/{team_slug}");

/// Delete a team and all of its child teams.
///
/// Requires an organization owner or team maintainer. Answers `204 No Content`.
pub const DELETE_IN_ORG: ApiHeroEndpoint<TeamInput, NoContent> =
    endpoint("teams/deleteInOrg", RestMethod::Delete, "/orgs/{org}/teams/{team_slug}");

/// List child teams.
pub const LIST_CHILD_IN_ORG: ApiHeroEndpoint<TeamPageInput, Vec<Team>, LinkHeader> =
    endpoint("teams/listChildInOrg", RestMethod::Get, "/orgs/{org}/teams/{team_slug}/teams");

/// List teams the authenticated user belongs to, across organizations.
pub const LIST_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<PageInput, Vec<TeamFull>, LinkHeader> =
    endpoint("teams/listForAuthenticatedUser", RestMethod::Get, "/user/teams");

// =============================================================================
// Members
// =============================================================================

/// List team members, including members of child teams.
pub const LIST_MEMBERS_IN_ORG: ApiHeroEndpoint<ListMembersInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("teams/listMembersInOrg", RestMethod::Get, "/orgs/{org}/teams/{team_slug}/members");

/// Get team membership for a user.
pub const GET_MEMBERSHIP_FOR_USER_IN_ORG: ApiHeroEndpoint<MembershipInput, TeamMembership> =
    endpoint(
        "teams/getMembershipForUserInOrg",
        RestMethod::Get,
        "/orgs/{org}/teams/{team_slug}/memberships/{username}",
    );

/// Add or update team membership for a user.
pub const ADD_OR_UPDATE_MEMBERSHIP_FOR_USER_IN_ORG: ApiHeroEndpoint<
    SetMembershipInput,
    TeamMembership,
> = endpoint(
    "teams/addOrUpdateMembershipForUserInOrg",
    RestMethod::Put,
    "/orgs/{org}/teams/{team_slug}/memberships/{username}",
);

/// Remove team membership for a user.
///
/// Answers `204 No Content`.
pub const REMOVE_MEMBERSHIP_FOR_USER_IN_ORG: ApiHeroEndpoint<MembershipInput, NoContent> =
    endpoint(
        "teams/removeMembershipForUserInOrg",
        RestMethod::Delete,
        "/orgs/{org}/teams/{team_slug}/memberships/{username}",
    );

/// List pending team invitations.
pub const LIST_PENDING_INVITATIONS_IN_ORG: ApiHeroEndpoint<
    TeamPageInput,
    Vec<OrganizationInvitation>,
    LinkHeader,
> = endpoint(
    "teams/listPendingInvitationsInOrg",
    RestMethod::Get,
    "/orgs/{org}/teams/{team_slug}/invitations",
);

// =============================================================================
// Repositories
// =============================================================================

/// List team repositories.
pub const LIST_REPOS_IN_ORG: ApiHeroEndpoint<TeamPageInput, Vec<Repository>, LinkHeader> =
    endpoint("teams/listReposInOrg", RestMethod::Get, "/orgs/{org}/teams/{team_slug}/repos");

/// Check if a team has access to a repository. Answers `204` if so, `404` otherwise.
pub const CHECK_PERMISSIONS_FOR_REPO_IN_ORG: ApiHeroEndpoint<TeamRepoInput, NoContent> =
    endpoint(
        "teams/checkPermissionsForRepoInOrg",
        RestMethod::Get,
        "/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}",
    );

/// Grant a team access to a repository, or change its permission.
///
/// `permission` is `pull`, `triage`, `push`, `maintain`, `admin` or a custom
/// role name. Answers `204 No Content`.
pub const ADD_OR_UPDATE_REPO_PERMISSIONS_IN_ORG: ApiHeroEndpoint<RepoPermissionInput, NoContent> =
    endpoint(
        "teams/addOrUpdateRepoPermissionsInOrg",
        RestMethod::Put,
        "/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}",
    );

/// Remove a repository from a team.
///
/// The repository itself is not deleted. Answers `204 No Content`.
pub const REMOVE_REPO_IN_ORG: ApiHeroEndpoint<TeamRepoInput, NoContent> = endpoint(
    "teams/removeRepoInOrg",
    RestMethod::Delete,
    "/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}",
);

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST.meta(),
        GET_BY_NAME.meta(),
        CREATE.meta(),
        UPDATE_IN_ORG.meta(),
        DELETE_IN_ORG.meta(),
        LIST_CHILD_IN_ORG.meta(),
        LIST_FOR_AUTHENTICATED_USER.meta(),
        LIST_MEMBERS_IN_ORG.meta(),
        GET_MEMBERSHIP_FOR_USER_IN_ORG.meta(),
        ADD_OR_UPDATE_MEMBERSHIP_FOR_USER_IN_ORG.meta(),
        REMOVE_MEMBERSHIP_FOR_USER_IN_ORG.meta(),
        LIST_PENDING_INVITATIONS_IN_ORG.meta(),
        LIST_REPOS_IN_ORG.meta(),
        CHECK_PERMISSIONS_FOR_REPO_IN_ORG.meta(),
        ADD_OR_UPDATE_REPO_PERMISSIONS_IN_ORG.meta(),
        REMOVE_REPO_IN_ORG.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> EndpointMeta {
        endpoints().into_iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn module_has_every_teams_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 16);
        assert!(all.iter().all(|e| e.resource() == "teams"));
    }

    #[test]
    fn team_repo_paths_nest_the_repository() {
        let endpoint = find("teams/addOrUpdateRepoPermissionsInOrg");
        assert_eq!(endpoint.path_params, &["org", "team_slug", "owner", "repo"]);
        assert_eq!(endpoint.method, RestMethod::Put);
        assert_eq!(endpoint.body_params, &["permission"]);
    }

    #[test]
    fn prepare_membership_update() {
        let request = ADD_OR_UPDATE_MEMBERSHIP_FOR_USER_IN_ORG
            .prepare(&SetMembershipInput {
                org: "github".into(),
                team_slug: "justice-league".into(),
                username: "octocat".into(),
                role: Some("maintainer".into()),
            })
            .unwrap();

        assert_eq!(request.path, "/orgs/github/teams/justice-league/memberships/octocat");
        assert_eq!(request.body.unwrap()["role"], "maintainer");
    }
}
