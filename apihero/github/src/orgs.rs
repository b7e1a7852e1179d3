//! Organizations, memberships, invitations and organization webhooks.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::params::{OrgInput, OrgPageInput, OrgUserInput, PageInput, UserPageInput};
use crate::types::{
    HookConfig, OrgHook, OrgMembership, OrganizationFull, OrganizationInvitation,
    OrganizationSimple, SimpleUser,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct ListInput {
        query {
            /// Only organizations with an id greater than this.
            since: Option<u64>,
            per_page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateInput {
        path { org: String }
        body {
            billing_email: Option<String>,
            company: Option<String>,
            email: Option<String>,
            twitter_username: Option<String>,
            location: Option<String>,
            name: Option<String>,
            description: Option<String>,
            blog: Option<String>,
            /// `read`, `write`, `admin` or `none`.
            default_repository_permission: Option<String>,
            members_can_create_repositories: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListMembersInput {
        path { org: String }
        query {
            /// `2fa_disabled` or `all`.
            filter: Option<String>,
            /// `all`, `admin` or `member`.
            role: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SetMembershipInput {
        path { org: String, username: String }
        body {
            /// `admin` or `member`.
            role: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListMembershipsInput {
        query {
            /// `active` or `pending`.
            state: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    /// Invite by account id or by email address; exactly one is required.
    #[derive(Default)]
    pub struct CreateInvitationInput {
        path { org: String }
        body {
            invitee_id: Option<u64>,
            email: Option<String>,
            /// `admin`, `direct_member` or `billing_manager`.
            role: Option<String>,
            team_ids: Option<Vec<u64>>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct InvitationInput {
        path { org: String, invitation_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct HookInput {
        path { org: String, hook_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateWebhookInput {
        path { org: String }
        body {
            /// Must be `web`.
            name: String,
            config: HookConfig,
            events: Option<Vec<String>>,
            active: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateWebhookInput {
        path { org: String, hook_id: u64 }
        body {
            config: Option<HookConfig>,
            events: Option<Vec<String>>,
            active: Option<bool>,
            name: Option<String>,
        }
    }
}

// =============================================================================
// Organizations
// =============================================================================

/// List all organizations in creation order. Pages with `since`, not `page`.
pub const LIST: ApiHeroEndpoint<ListInput, Vec<OrganizationSimple>, LinkHeader> =
    endpoint("orgs/list", RestMethod::Get, "/organizations");

/// List organizations of the authenticated user.
pub const LIST_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<PageInput, Vec<OrganizationSimple>, LinkHeader> =
    endpoint("orgs/listForAuthenticatedUser", RestMethod::Get, "/user/orgs");

/// List public organization memberships of a user.
pub const LIST_FOR_USER: ApiHeroEndpoint<UserPageInput, Vec<OrganizationSimple>, LinkHeader> =
    endpoint("orgs/listForUser", RestMethod::Get, "/users/{username}/orgs");

/// Get an organization.
pub const GET: ApiHeroEndpoint<OrgInput, OrganizationFull> =
    endpoint("orgs/get", RestMethod::Get, "/orgs/{org}");

/// Update an organization's profile and member privileges.
pub const UPDATE: ApiHeroEndpoint<UpdateInput, OrganizationFull> =
    endpoint("orgs/update", RestMethod::Patch, "/orgs/{org}");

// =============================================================================
// Members
// =============================================================================

/// List organization members.
pub const LIST_MEMBERS: ApiHeroEndpoint<ListMembersInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("orgs/listMembers", RestMethod::Get, "/orgs/{org}/members");

/// Check organization membership for a user.
///
/// Answers `204` for a member, `404` for a non-member, and `302` when the
/// requester is not a member and may only see public members.
pub const CHECK_MEMBERSHIP_FOR_USER: ApiHeroEndpoint<OrgUserInput, NoContent> =
    endpoint("orgs/checkMembershipForUser", RestMethod::Get, "/orgs/{org}/members/{username}");

/// Remove a user from an organization and all its teams.
///
/// Requires an organization owner. Answers `204 No Content`.
pub const REMOVE_MEMBER: ApiHeroEndpoint<OrgUserInput, NoContent> =
    endpoint("orgs/removeMember", RestMethod::Delete, "/orgs/{org}/members/{username}");

/// Get organization membership for a user.
pub const GET_MEMBERSHIP_FOR_USER: ApiHeroEndpoint<OrgUserInput, OrgMembership> = endpoint(
    "orgs/getMembershipForUser",
    RestMethod::Get,
    "/orgs/{org}/memberships/{username}",
);

/// Add a member or change a member's role. New members are invited first.
pub const SET_MEMBERSHIP_FOR_USER: ApiHeroEndpoint<SetMembershipInput, OrgMembership> = endpoint(
    "orgs/setMembershipForUser",
    RestMethod::Put,
    "/orgs/{org}/memberships/{username}",
);

/// Remove organization membership, or cancel a pending invitation.
///
/// Requires an organization owner. Answers `204 No Content`.
pub const REMOVE_MEMBERSHIP_FOR_USER: ApiHeroEndpoint<OrgUserInput, NoContent> = endpoint(
    "orgs/removeMembershipForUser",
    RestMethod::Delete,
    "/orgs/{org}/memberships/{username}",
);

/// List public organization members.
pub const LIST_PUBLIC_MEMBERS: ApiHeroEndpoint<OrgPageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("orgs/listPublicMembers", RestMethod::Get, "/orgs/{org}/public_members");

/// Check public organization membership for a user.
///
/// Answers `204` if public, `404` otherwise.
pub const CHECK_PUBLIC_MEMBERSHIP_FOR_USER: ApiHeroEndpoint<OrgUserInput, NoContent> = endpoint(
    "orgs/checkPublicMembershipForUser",
    RestMethod::Get,
    "/orgs/{org}/public_members/{username}",
);

/// Publicize the authenticated user's membership.
///
/// Answers `204 No Content`.
pub const SET_PUBLIC_MEMBERSHIP_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<OrgUserInput, NoContent> =
    endpoint(
        "orgs/setPublicMembershipForAuthenticatedUser",
        RestMethod::Put,
        "/orgs/{org}/public_members/{username}",
    );

/// Conceal the authenticated user's membership.
///
/// Answers `204 No Content`.
pub const REMOVE_PUBLIC_MEMBERSHIP_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<OrgUserInput, NoContent> =
    endpoint(
        "orgs/removePublicMembershipForAuthenticatedUser",
        RestMethod::Delete,
        "/orgs/{org}/public_members/{username}",
    );

/// List organization memberships of the authenticated user.
pub const LIST_MEMBERSHIPS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    ListMembershipsInput,
    Vec<OrgMembership>,
    LinkHeader,
> = endpoint(
    "orgs/listMembershipsForAuthenticatedUser",
    RestMethod::Get,
    "/user/memberships/orgs",
);

// =============================================================================
// Invitations
// =============================================================================

/// List pending organization invitations.
pub const LIST_PENDING_INVITATIONS: ApiHeroEndpoint<
    OrgPageInput,
    Vec<OrganizationInvitation>,
    LinkHeader,
> = endpoint("orgs/listPendingInvitations", RestMethod::Get, "/orgs/{org}/invitations");

/// Invite a user to an organization.
pub const CREATE_INVITATION: ApiHeroEndpoint<
    CreateInvitationInput,
    OrganizationInvitation,
    LocationHeader,
> = endpoint("orgs/createInvitation", RestMethod::Post, "/orgs/{org}/invitations");

/// Cancel an organization invitation.
///
/// Requires an organization owner. Answers `204 No Content`.
pub const CANCEL_INVITATION: ApiHeroEndpoint<InvitationInput, NoContent> = endpoint(
    "orgs/cancelInvitation",
    RestMethod::Delete,
    "/orgs/{org}/invitations/{invitation_id}",
);

// =============================================================================
// Webhooks
// =============================================================================

/// List organization webhooks.
pub const LIST_WEBHOOKS: ApiHeroEndpoint<OrgPageInput, Vec<OrgHook>, LinkHeader> =
    endpoint("orgs/listWebhooks", RestMethod::Get, "/orgs/{org}/hooks");

/// Get an organization webhook.
pub const GET_WEBHOOK: ApiHeroEndpoint<HookInput, OrgHook> =
    endpoint("orgs/getWebhook", RestMethod::Get, "/orgs/{org}/hooks/{hook_id}");

/// Create an organization webhook.
pub const CREATE_WEBHOOK: ApiHeroEndpoint<CreateWebhookInput, OrgHook, LocationHeader> =
    endpoint("orgs/createWebhook", RestMethod::Post, "/orgs/{org}/hooks");

/// Update an organization webhook. A `config` replaces the stored one entirely.
pub const UPDATE_WEBHOOK: ApiHeroEndpoint<UpdateWebhookInput, OrgHook> =
    endpoint("orgs/updateWebhook", RestMethod::Patch, "/orgs/{org}/hooks/{hook_id}");

/// Delete an organization webhook.
///
/// Answers `204 No Content`.
pub const DELETE_WEBHOOK: ApiHeroEndpoint<HookInput, NoContent> =
    endpoint("orgs/deleteWebhook", RestMethod::Delete, "/orgs/{org}/hooks/{hook_id}");

/// Trigger a ping event to be sent to the hook.
///
/// Answers `204 No Content`.
pub const PING_WEBHOOK: ApiHeroEndpoint<HookInput, NoContent> =
    endpoint("orgs/pingWebhook", RestMethod::Post, "/orgs/{org}/hooks/{hook_id}/pings");

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST.meta(),
        LIST_FOR_AUTHENTICATED_USER.meta(),
        LIST_FOR_USER.meta(),
        GET.meta(),
        UPDATE.meta(),
        LIST_MEMBERS.meta(),
        CHECK_MEMBERSHIP_FOR_USER.meta(),
        REMOVE_MEMBER.meta(),
        GET_MEMBERSHIP_FOR_USER.meta(),
        SET_MEMBERSHIP_FOR_USER.meta(),
        REMOVE_MEMBERSHIP_FOR_USER.meta(),
        LIST_PUBLIC_MEMBERS.meta(),
        CHECK_PUBLIC_MEMBERSHIP_FOR_USER.meta(),
        SET_PUBLIC_MEMBERSHIP_FOR_AUTHENTICATED_USER.meta(),
        REMOVE_PUBLIC_MEMBERSHIP_FOR_AUTHENTICATED_USER.meta(),
        LIST_MEMBERSHIPS_FOR_AUTHENTICATED_USER.meta(),
        LIST_PENDING_INVITATIONS.meta(),
        CREATE_INVITATION.meta(),
        CANCEL_INVITATION.meta(),
        LIST_WEBHOOKS.meta(),
        GET_WEBHOOK.meta(),
        CREATE_WEBHOOK.meta(),
        UPDATE_WEBHOOK.meta(),
        DELETE_WEBHOOK.meta(),
        PING_WEBHOOK.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> EndpointMeta {
        endpoints().into_iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn module_has_every_orgs_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 25);
        assert!(all.iter().all(|e| e.resource() == "orgs"));
    }

    #[test]
    fn organization_listing_pages_by_cursor() {
        let endpoint = find("orgs/list");
        assert_eq!(endpoint.path, "/organizations");
        assert_eq!(endpoint.query_params, &["since", "per_page"]);
        assert!(endpoint.is_paginated());
    }

    #[test]
    fn membership_mutations() {
        assert_eq!(SET_MEMBERSHIP_FOR_USER.method(), RestMethod::Put);
        assert_eq!(find("orgs/removeMembershipForUser").method, RestMethod::Delete);
        assert_eq!(
            find("orgs/getMembershipForUser").path_params,
            &["org", "username"]
        );
    }

    #[test]
    fn prepare_webhook_creation() {
        let request = CREATE_WEBHOOK
            .prepare(&CreateWebhookInput {
                org: "github".into(),
                name: "web".into(),
                config: HookConfig {
                    url: Some("https://example.com/webhook".into()),
                    content_type: Some("json".into()),
                    ..Default::default()
                },
                events: Some(vec!["push".into(), "pull_request".into()]),
                active: None,
            })
            .unwrap();

        assert_eq!(request.path, "/orgs/github/hooks");
        let body = request.body.unwrap();
        assert_eq!(body["config"]["url"], "https://example.com/webhook");
        assert_eq!(body["events"][1], "pull_request");
        assert!(body.get("active").is_none());
    }
}
