//! Users, followers, emails and SSH and GPG keys.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, LocationHeader, NoContent, RestMethod,
    endpoint_input,
};

use crate::endpoint;
use crate::params::{PageInput, UserInput, UserPageInput};
use crate::types::{Email, GpgKey, Hovercard, PrivateUser, SimpleUser, SshKey, UserProfile};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct UpdateAuthenticatedInput {
        body {
            name: Option<String>,
            /// Must be a verified address; shown publicly.
            email: Option<String>,
            blog: Option<String>,
            twitter_username: Option<String>,
            company: Option<String>,
            location: Option<String>,
            hireable: Option<bool>,
            bio: Option<String>,
        }
    }
}

endpoint_input! {
    /// Cursor listing of every account, in sign-up order.
    #[derive(Default)]
    pub struct ListInput {
        query {
            /// Only users with an id greater than this.
            since: Option<u64>,
            per_page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct HovercardInput {
        path { username: String }
        query {
            /// `organization`, `repository`, `issue` or `pull_request`.
            subject_type: Option<String>,
            subject_id: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct FollowingInput {
        path { username: String, target_user: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct EmailsInput {
        body { emails: Vec<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SshKeyInput {
        path { key_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateSshKeyInput {
        body {
            title: Option<String>,
            /// Begins with `ssh-rsa`, `ssh-ed25519` or an ECDSA prefix.
            key: String,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GpgKeyInput {
        path { gpg_key_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct CreateGpgKeyInput {
        body {
            name: Option<String>,
            armored_public_key: String,
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

/// Get the authenticated user.
pub const GET_AUTHENTICATED: ApiHeroEndpoint<(), PrivateUser> =
    endpoint("users/getAuthenticated", RestMethod::Get, "/user");

/// Update the authenticated user's public profile.
pub const UPDATE_AUTHENTICATED: ApiHeroEndpoint<UpdateAuthenticatedInput, PrivateUser> =
    endpoint("users/updateAuthenticated", RestMethod::Patch, "/user");

/// Get a user. The private shape is returned when the caller is that user.
pub const GET_BY_USERNAME: ApiHeroEndpoint<UserInput, UserProfile> =
    endpoint("users/getByUsername", RestMethod::Get, "/users/{username}");

/// List all users in sign-up order. Pages with `since`, not `page`.
pub const LIST: ApiHeroEndpoint<ListInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("users/list", RestMethod::Get, "/users");

/// Get contextual hovercard information for a user.
pub const GET_CONTEXT_FOR_USER: ApiHeroEndpoint<HovercardInput, Hovercard> =
    endpoint("users/getContextForUser", RestMethod::Get, "/users/{username}/hovercard");

// =============================================================================
// Followers
// =============================================================================

/// List followers of the authenticated user.
pub const LIST_FOLLOWERS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<PageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("users/listFollowersForAuthenticatedUser", RestMethod::Get, "/user/followers");

/// List people the authenticated user follows.
pub const LIST_FOLLOWED_BY_AUTHENTICATED_USER: ApiHeroEndpoint<PageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("users/listFollowedByAuthenticatedUser", RestMethod::Get, "/user/following");

/// Check if the authenticated user follows a person.
///
/// Answers `204` if so, `404` otherwise.
pub const CHECK_PERSON_IS_FOLLOWED_BY_AUTHENTICATED: ApiHeroEndpoint<UserInput, NoContent> =
    endpoint(
        "users/checkPersonIsFollowedByAuthenticated",
        RestMethod::Get,
        "/user/following/{username}",
    );

/// Follow a user.
///
/// Requires the `user:follow` scope. Answers `204 No Content`.
pub const FOLLOW: ApiHeroEndpoint<UserInput, NoContent> =
    endpoint("users/follow", RestMethod::Put, "/user/following/{username}");

/// Unfollow a user.
///
/// Requires the `user:follow` scope. Answers `204 No Content`.
pub const UNFOLLOW: ApiHeroEndpoint<UserInput, NoContent> =
    endpoint("users/unfollow", RestMethod::Delete, "/user/following/{username}");

/// List followers of a user.
pub const LIST_FOLLOWERS_FOR_USER: ApiHeroEndpoint<UserPageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("users/listFollowersForUser", RestMethod::Get, "/users/{username}/followers");

/// List people a user follows.
pub const LIST_FOLLOWING_FOR_USER: ApiHeroEndpoint<UserPageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("users/listFollowingForUser", RestMethod::Get, "/users/{username}/following");

/// Check if one user follows another.
///
/// Answers `204` if so, `404` otherwise.
pub const CHECK_FOLLOWING_FOR_USER: ApiHeroEndpoint<FollowingInput, NoContent> = endpoint(
    "users/checkFollowingForUser",
    RestMethod::Get,
    "/users/{username}/following/{target_user}",
);

// =============================================================================
// Emails
// =============================================================================

/// List email addresses of the authenticated user.
pub const LIST_EMAILS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<PageInput, Vec<Email>, LinkHeader> =
    endpoint("users/listEmailsForAuthenticatedUser", RestMethod::Get, "/user/emails");

/// Add email addresses to the authenticated account.
pub const ADD_EMAIL_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<EmailsInput, Vec<Email>> =
    endpoint("users/addEmailForAuthenticatedUser", RestMethod::Post, "/user/emails");

/// Remove email addresses from the authenticated account.
///
/// Requires the `user` scope. Answers `204 No Content`.
pub const DELETE_EMAIL_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<EmailsInput, NoContent> =
    endpoint("users/deleteEmailForAuthenticatedUser", RestMethod::Delete, "/user/emails");

// =============================================================================
// SSH keys
// =============================================================================

/// List public SSH keys of the authenticated user.
pub const LIST_PUBLIC_SSH_KEYS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<PageInput, Vec<SshKey>, LinkHeader> =
    endpoint("users/listPublicSshKeysForAuthenticatedUser", RestMethod::Get, "/user/keys");

/// Get a public SSH key of the authenticated user.
pub const GET_PUBLIC_SSH_KEY_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<SshKeyInput, SshKey> =
    endpoint("users/getPublicSshKeyForAuthenticatedUser", RestMethod::Get, "/user/keys/{key_id}");

/// Add a public SSH key to the authenticated account.
pub const CREATE_PUBLIC_SSH_KEY_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    CreateSshKeyInput,
    SshKey,
    LocationHeader,
> = endpoint("users/createPublicSshKeyForAuthenticatedUser", RestMethod::Post, "/user/keys");

/// Remove a public SSH key from the authenticated account.
///
/// Requires the `admin:public_key` scope. Answers `204 No Content`.
pub const DELETE_PUBLIC_SSH_KEY_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<SshKeyInput, NoContent> =
    endpoint(
        "users/deletePublicSshKeyForAuthenticatedUser",
        RestMethod::Delete,
        "/user/keys/{key_id}",
    );

/// List verified public SSH keys of a user.
pub const LIST_PUBLIC_KEYS_FOR_USER: ApiHeroEndpoint<UserPageInput, Vec<SshKey>, LinkHeader> =
    endpoint("users/listPublicKeysForUser", RestMethod::Get, "/users/{username}/keys");

// =============================================================================
// GPG keys
// =============================================================================

/// List GPG keys of the authenticated user.
pub const LIST_GPG_KEYS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<PageInput, Vec<GpgKey>, LinkHeader> =
    endpoint("users/listGpgKeysForAuthenticatedUser", RestMethod::Get, "/user/gpg_keys");

/// Get a GPG key of the authenticated user.
pub const GET_GPG_KEY_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<GpgKeyInput, GpgKey> = endpoint(
    "users/getGpgKeyForAuthenticatedUser",
    RestMethod::Get,
    "/user/gpg_keys/{gpg_key_id}",
);

/// Add a GPG key to the authenticated account.
pub const CREATE_GPG_KEY_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    CreateGpgKeyInput,
    GpgKey,
    LocationHeader,
> = endpoint("users/createGpgKeyForAuthenticatedUser", RestMethod::Post, "/user/gpg_keys");

/// Remove a GPG key from the authenticated account.
///
/// Requires the `admin:gpg_key` scope. Answers `204 No Content`.
pub const DELETE_GPG_KEY_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<GpgKeyInput, NoContent> =
    endpoint(
        "users/deleteGpgKeyForAuthenticatedUser",
        RestMethod::Delete,
        "/user/gpg_keys/{gpg_key_id}",
    );

/// List GPG keys of a user.
pub const LIST_GPG_KEYS_FOR_USER: ApiHeroEndpoint<UserPageInput, Vec<GpgKey>, LinkHeader> =
    endpoint("users/listGpgKeysForUser", RestMethod::Get, "/users/{username}/gpg_keys");

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        GET_AUTHENTICATED.meta(),
        UPDATE_AUTHENTICATED.meta(),
        GET_BY_USERNAME.meta(),
        LIST.meta(),
        GET_CONTEXT_FOR_USER.meta(),
        LIST_FOLLOWERS_FOR_AUTHENTICATED_USER.meta(),
        LIST_FOLLOWED_BY_AUTHENTICATED_USER.meta(),
        CHECK_PERSON_IS_FOLLOWED_BY_AUTHENTICATED.meta(),
        FOLLOW.meta(),
        UNFOLLOW.meta(),
        LIST_FOLLOWERS_FOR_USER.meta(),
        LIST_FOLLOWING_FOR_USER.meta(),
        CHECK_FOLLOWING_FOR_USER.meta(),
        LIST_EMAILS_FOR_AUTHENTICATED_USER.meta(),
        ADD_EMAIL_FOR_AUTHENTICATED_USER.meta(),
        DELETE_EMAIL_FOR_AUTHENTICATED_USER.meta(),
        LIST_PUBLIC_SSH_KEYS_FOR_AUTHENTICATED_USER.meta(),
        GET_PUBLIC_SSH_KEY_FOR_AUTHENTICATED_USER.meta(),
        CREATE_PUBLIC_SSH_KEY_FOR_AUTHENTICATED_USER.meta(),
        DELETE_PUBLIC_SSH_KEY_FOR_AUTHENTICATED_USER.meta(),
        LIST_PUBLIC_KEYS_FOR_USER.meta(),
        LIST_GPG_KEYS_FOR_AUTHENTICATED_USER.meta(),
        GET_GPG_KEY_FOR_AUTHENTICATED_USER.meta(),
        CREATE_GPG_KEY_FOR_AUTHENTICATED_USER.meta(),
        DELETE_GPG_KEY_FOR_AUTHENTICATED_USER.meta(),
        LIST_GPG_KEYS_FOR_USER.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> EndpointMeta {
        endpoints().into_iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn module_has_every_users_endpoint() {
        let all = endpoints();
        assert_eq!(all.len(), 26);
        assert!(all.iter().all(|e| e.resource() == "users"));
    }

    #[test]
    fn authenticated_user_takes_no_input() {
        let endpoint = find("users/getAuthenticated");
        assert_eq!(endpoint.path, "/user");
        assert!(endpoint.path_params.is_empty());
        assert!(endpoint.query_params.is_empty());
        assert_eq!(endpoint.input_type, "()");
    }

    #[test]
    fn user_listing_pages_by_cursor() {
        let endpoint = find("users/list");
        assert!(endpoint.is_paginated());
        assert_eq!(endpoint.query_params, &["since", "per_page"]);
    }

    #[test]
    fn email_removal_sends_a_body() {
        let endpoint = find("users/deleteEmailForAuthenticatedUser");
        assert_eq!(endpoint.method, RestMethod::Delete);
        assert!(endpoint.has_body());

        let request = DELETE_EMAIL_FOR_AUTHENTICATED_USER
            .prepare(&EmailsInput {
                emails: vec!["octocat@github.com".into()],
            })
            .unwrap();
        assert_eq!(request.body.unwrap()["emails"][0], "octocat@github.com");
    }

    #[test]
    fn prepare_following_check() {
        let request = CHECK_FOLLOWING_FOR_USER
            .prepare(&FollowingInput {
                username: "octocat".into(),
                target_user: "hubot".into(),
            })
            .unwrap();
        assert_eq!(request.path, "/users/octocat/following/hubot");
    }
}
