//! Organization shapes.

use serde::{Deserialize, Serialize};

use super::users::SimpleUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSimple {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub repos_url: String,
    pub events_url: String,
    pub hooks_url: String,
    pub issues_url: String,
    pub members_url: String,
    pub public_members_url: String,
    pub avatar_url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationFull {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub avatar_url: String,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    pub is_verified: Option<bool>,
    pub has_organization_projects: bool,
    pub has_repository_projects: bool,
    pub public_repos: u32,
    pub public_gists: u32,
    pub followers: u32,
    pub following: u32,
    pub html_url: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_repository_permission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_can_create_repositories: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_requirement_enabled: Option<bool>,
}

/// A user's membership in an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMembership {
    pub url: String,
    /// `active` or `pending`.
    pub state: String,
    /// `admin`, `member` or `billing_manager`.
    pub role: String,
    pub organization_url: String,
    pub organization: OrganizationSimple,
    pub user: Option<SimpleUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationInvitation {
    pub id: u64,
    pub login: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_reason: Option<String>,
    pub inviter: SimpleUser,
    pub team_count: u32,
    pub node_id: String,
    pub invitation_teams_url: String,
}

/// An organization webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgHook {
    pub id: u64,
    pub url: String,
    pub ping_url: String,
    pub name: String,
    pub events: Vec<String>,
    pub active: bool,
    pub config: super::repos::HookConfig,
    pub updated_at: String,
    pub created_at: String,
    #[serde(rename = "type")]
    pub hook_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn membership_parses_role_and_state() {
        let membership: OrgMembership = serde_json::from_value(json!({
            "url": "https://api.github.com/orgs/octocat/memberships/defunkt",
            "state": "pending",
            "role": "admin",
            "organization_url": "https://api.github.com/orgs/octocat",
            "organization": {
                "login": "github",
                "id": 1,
                "node_id": "MDEyOk9yZ2FuaXphdGlvbjE=",
                "url": "https://api.github.com/orgs/github",
                "repos_url": "https://api.github.com/orgs/github/repos",
                "events_url": "https://api.github.com/orgs/github/events",
                "hooks_url": "https://api.github.com/orgs/github/hooks",
                "issues_url": "https://api.github.com/orgs/github/issues",
                "members_url": "https://api.github.com/orgs/github/members{/member}",
                "public_members_url": "https://api.github.com/orgs/github/public_members{/member}",
                "avatar_url": "https://github.com/images/error/octocat_happy.gif",
                "description": "A great organization"
            },
            "user": null
        }))
        .unwrap();

        assert_eq!(membership.role, "admin");
        assert_eq!(membership.organization.login, "github");
    }
}
