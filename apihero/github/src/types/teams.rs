//! Team shapes.

use serde::{Deserialize, Serialize};

use super::orgs::OrganizationFull;

/// The compact team object embedded in other resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSimple {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// `secret` or `closed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    pub permission: String,
    pub members_url: String,
    pub repositories_url: String,
}

/// A team as listed, possibly nested under a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(flatten)]
    pub team: TeamSimple,
    pub parent: Option<TeamSimple>,
}

/// A team with member and repository counts and its organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamFull {
    #[serde(flatten)]
    pub team: TeamSimple,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TeamSimple>,
    pub members_count: u32,
    pub repos_count: u32,
    pub created_at: String,
    pub updated_at: String,
    pub organization: OrganizationFull,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub url: String,
    /// `member` or `maintainer`.
    pub role: String,
    /// `active` or `pending`.
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_flattens_simple_fields() {
        let team: Team = serde_json::from_value(json!({
            "id": 1,
            "node_id": "MDQ6VGVhbTE=",
            "url": "https://api.github.com/teams/1",
            "html_url": "https://github.com/orgs/github/teams/justice-league",
            "name": "Justice League",
            "slug": "justice-league",
            "description": "A great team.",
            "privacy": "closed",
            "permission": "admin",
            "members_url": "https://api.github.com/teams/1/members{/member}",
            "repositories_url": "https://api.github.com/teams/1/repos",
            "parent": null
        }))
        .unwrap();

        assert_eq!(team.team.slug, "justice-league");
        assert!(team.parent.is_none());
    }
}
