//! Account shapes shared by nearly every resource.

use serde::{Deserialize, Serialize};

/// The compact user object embedded in other resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleUser {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub html_url: String,
    /// `User`, `Organization` or `Bot`.
    #[serde(rename = "type")]
    pub account_type: String,
    pub site_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A user's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub site_admin: bool,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u32,
    pub public_gists: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// The authenticated user, including private counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateUser {
    #[serde(flatten)]
    pub profile: PublicUser,
    pub private_gists: u32,
    pub total_private_repos: u32,
    pub owned_private_repos: u32,
    pub disk_usage: u64,
    pub collaborators: u32,
    pub two_factor_authentication: bool,
}

/// A user as returned by user lookups: public or, for the caller, private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserProfile {
    Private(Box<PrivateUser>),
    Public(Box<PublicUser>),
}

/// An email address attached to the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub email: String,
    pub primary: bool,
    pub verified: bool,
    /// `public`, `private` or null.
    pub visibility: Option<String>,
}

/// A public SSH key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

/// A GPG key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpgKey {
    pub id: u64,
    pub name: Option<String>,
    pub key_id: String,
    pub public_key: String,
    pub emails: Vec<GpgKeyEmail>,
    pub can_sign: bool,
    pub can_encrypt_comms: bool,
    pub can_encrypt_storage: bool,
    pub can_certify: bool,
    pub created_at: String,
    pub expires_at: Option<String>,
    pub revoked: bool,
    pub raw_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpgKeyEmail {
    pub email: String,
    pub verified: bool,
}

/// Contextual information shown on a user's hovercard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hovercard {
    pub contexts: Vec<HovercardContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HovercardContext {
    pub message: String,
    pub octicon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn octocat() -> serde_json::Value {
        json!({
            "login": "octocat",
            "id": 1,
            "node_id": "MDQ6VXNlcjE=",
            "avatar_url": "https://github.com/images/error/octocat_happy.gif",
            "html_url": "https://github.com/octocat",
            "type": "User",
            "site_admin": false,
            "name": "monalisa octocat",
            "company": "GitHub",
            "blog": "https://github.com/blog",
            "location": "San Francisco",
            "email": null,
            "hireable": false,
            "bio": "There once was...",
            "twitter_username": "monatheoctocat",
            "public_repos": 2,
            "public_gists": 1,
            "followers": 20,
            "following": 0,
            "created_at": "2008-01-14T04:33:35Z",
            "updated_at": "2008-01-14T04:33:35Z"
        })
    }

    #[test]
    fn simple_user_renames_type() {
        let user: SimpleUser = serde_json::from_value(octocat()).unwrap();
        assert_eq!(user.account_type, "User");
        assert_eq!(user.name.as_deref(), Some("monalisa octocat"));
    }

    #[test]
    fn public_profile_is_not_private() {
        let profile: UserProfile = serde_json::from_value(octocat()).unwrap();
        assert!(matches!(profile, UserProfile::Public(user) if user.login == "octocat"));
    }

    #[test]
    fn private_profile_flattens_public_fields() {
        let mut value = octocat();
        let extra = json!({
            "private_gists": 81,
            "total_private_repos": 100,
            "owned_private_repos": 100,
            "disk_usage": 10000,
            "collaborators": 8,
            "two_factor_authentication": true
        });
        if let (Some(target), Some(source)) = (value.as_object_mut(), extra.as_object()) {
            target.extend(source.clone());
        }

        let profile: UserProfile = serde_json::from_value(value).unwrap();
        match profile {
            UserProfile::Private(user) => {
                assert_eq!(user.profile.login, "octocat");
                assert!(user.two_factor_authentication);
            }
            UserProfile::Public(_) => panic!("Expected a private profile"),
        }
    }
}
