//! Events, notifications, stars and watching.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, NoContent, RestMethod, endpoint_input,
};

use crate::endpoint;
use crate::params::{OrgPageInput, PageInput, RepoInput, RepoPageInput, UserPageInput};
use crate::types::{
    Event, MarkedRead, Repository, RepositorySubscription, SimpleUser, Thread, ThreadSubscription,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct ListNotificationsInput {
        query {
            /// Include notifications already marked as read.
            all: Option<bool>,
            /// Only notifications the user directly participates in.
            participating: Option<bool>,
            since: Option<String>,
            before: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListRepoNotificationsInput {
        path { owner: String, repo: String }
        query {
            all: Option<bool>,
            participating: Option<bool>,
            since: Option<String>,
            before: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct MarkAsReadInput {
        body {
            /// Notifications updated after this timestamp stay unread. Defaults to now.
            last_read_at: Option<String>,
            read: Option<bool>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ThreadInput {
        path { thread_id: u64 }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SetThreadSubscriptionInput {
        path { thread_id: u64 }
        body { ignored: Option<bool> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListStarredInput {
        query {
            /// `created` or `updated`.
            sort: Option<String>,
            /// `asc` or `desc`.
            direction: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListStarredByUserInput {
        path { username: String }
        query {
            /// `created` or `updated`.
            sort: Option<String>,
            direction: Option<String>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct SetRepoSubscriptionInput {
        path { owner: String, repo: String }
        body {
            subscribed: Option<bool>,
            ignored: Option<bool>,
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// List public events across GitHub. Delayed by at least five minutes.
pub const LIST_PUBLIC_EVENTS: ApiHeroEndpoint<PageInput, Vec<Event>, LinkHeader> =
    endpoint("activity/listPublicEvents", RestMethod::Get, "/events");

/// List repository events.
pub const LIST_REPO_EVENTS: ApiHeroEndpoint<RepoPageInput, Vec<Event>, LinkHeader> =
    endpoint("activity/listRepoEvents", RestMethod::Get, "/repos/{owner}/{repo}/events");

/// List public organization events.
pub const LIST_PUBLIC_ORG_EVENTS: ApiHeroEndpoint<OrgPageInput, Vec<Event>, LinkHeader> =
    endpoint("activity/listPublicOrgEvents", RestMethod::Get, "/orgs/{org}/events");

/// List events performed by a user. Private events are included for the user themself.
pub const LIST_EVENTS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<UserPageInput, Vec<Event>, LinkHeader> =
    endpoint(
        "activity/listEventsForAuthenticatedUser",
        RestMethod::Get,
        "/users/{username}/events",
    );

/// List public events performed by a user.
pub const LIST_PUBLIC_EVENTS_FOR_USER: ApiHeroEndpoint<UserPageInput, Vec<Event>, LinkHeader> =
    endpoint(
        "activity/listPublicEventsForUser",
        RestMethod::Get,
        "/users/{username}/events/public",
    );

/// List events received by a user through watching and following.
pub const LIST_RECEIVED_EVENTS_FOR_USER: ApiHeroEndpoint<UserPageInput, Vec<Event>, LinkHeader> =
    endpoint(
        "activity/listReceivedEventsForUser",
        RestMethod::Get,
        "/users/{username}/received_events",
    );

// =============================================================================
// Notifications
// =============================================================================

/// List notifications for the authenticated user.
pub const LIST_NOTIFICATIONS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    ListNotificationsInput,
    Vec<Thread>,
    LinkHeader,
> = endpoint(
    "activity/listNotificationsForAuthenticatedUser",
    RestMethod::Get,
    "/notifications",
);

/// Mark notifications as read. Large backlogs answer `202` and finish asynchronously.
pub const MARK_NOTIFICATIONS_AS_READ: ApiHeroEndpoint<MarkAsReadInput, MarkedRead> =
    endpoint("activity/markNotificationsAsRead", RestMethod::Put, "/notifications");

/// List repository notifications for the authenticated user.
pub const LIST_REPO_NOTIFICATIONS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    ListRepoNotificationsInput,
    Vec<Thread>,
    LinkHeader,
> = endpoint(
    "activity/listRepoNotificationsForAuthenticatedUser",
    RestMethod::Get,
    "/repos/{owner}/{repo}/notifications",
);

/// Get a notification thread.
pub const GET_THREAD: ApiHeroEndpoint<ThreadInput, Thread> =
    endpoint("activity/getThread", RestMethod::Get, "/notifications/threads/{thread_id}");

/// Mark a thread as read.
///
/// Answers `205 Reset Content`.
pub const MARK_THREAD_AS_READ: ApiHeroEndpoint<ThreadInput, NoContent> =
    endpoint("activity/markThreadAsRead", RestMethod::Patch, "/notifications/threads/{thread_id}");

/// Get the authenticated user's subscription to a thread.
pub const GET_THREAD_SUBSCRIPTION_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    ThreadInput,
    ThreadSubscription,
> = endpoint(
    "activity/getThreadSubscriptionForAuthenticatedUser",
    RestMethod::Get,
    "/notifications/threads/{thread_id}/subscription",
);

/// Subscribe to or ignore a thread.
pub const SET_THREAD_SUBSCRIPTION: ApiHeroEndpoint<SetThreadSubscriptionInput, ThreadSubscription> =
    endpoint(
        "activity/setThreadSubscription",
        RestMethod::Put,
        "/notifications/threads/{thread_id}/subscription",
    );

/// Mute all future notifications for a thread.
///
/// Answers `204 No Content`.
pub const DELETE_THREAD_SUBSCRIPTION: ApiHeroEndpoint<ThreadInput, NoContent> = endpoint(
    "activity/deleteThreadSubscription",
    RestMethod::Delete,
    "/notifications/threads/{thread_id}/subscription",
);

// =============================================================================
// Stars
// =============================================================================

/// List users who starred a repository.
pub const LIST_STARGAZERS_FOR_REPO: ApiHeroEndpoint<RepoPageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("activity/listStargazersForRepo", RestMethod::Get, "/repos/{owner}/{repo}/stargazers");

/// List repositories starred by the authenticated user.
pub const LIST_REPOS_STARRED_BY_AUTHENTICATED_USER: ApiHeroEndpoint<
    ListStarredInput,
    Vec<Repository>,
    LinkHeader,
> = endpoint(
    "activity/listReposStarredByAuthenticatedUser",
    RestMethod::Get,
    "/user/starred",
);

/// List repositories starred by a user.
pub const LIST_REPOS_STARRED_BY_USER: ApiHeroEndpoint<
    ListStarredByUserInput,
    Vec<Repository>,
    LinkHeader,
> = endpoint("activity/listReposStarredByUser", RestMethod::Get, "/users/{username}/starred");

/// Check if the authenticated user starred a repository.
///
/// Answers `204` if so, `404` otherwise.
pub const CHECK_REPO_IS_STARRED_BY_AUTHENTICATED_USER: ApiHeroEndpoint<RepoInput, NoContent> =
    endpoint(
        "activity/checkRepoIsStarredByAuthenticatedUser",
        RestMethod::Get,
        "/user/starred/{owner}/{repo}",
    );

/// Star a repository.
///
/// Idempotent. Answers `204 No Content`.
pub const STAR_REPO_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<RepoInput, NoContent> = endpoint(
    "activity/starRepoForAuthenticatedUser",
    RestMethod::Put,
    "/user/starred/{owner}/{repo}",
);

/// Unstar a repository.
///
/// Answers `204 No Content`.
pub const UNSTAR_REPO_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<RepoInput, NoContent> = endpoint(
    "activity/unstarRepoForAuthenticatedUser",
    RestMethod::Delete,
    "/user/starred/{owner}/{repo}",
);

// =============================================================================
// Watching
// =============================================================================

/// List users watching a repository.
pub const LIST_WATCHERS_FOR_REPO: ApiHeroEndpoint<RepoPageInput, Vec<SimpleUser>, LinkHeader> =
    endpoint("activity/listWatchersForRepo", RestMethod::Get, "/repos/{owner}/{repo}/subscribers");

/// List repositories watched by the authenticated user.
pub const LIST_WATCHED_REPOS_FOR_AUTHENTICATED_USER: ApiHeroEndpoint<
    PageInput,
    Vec<Repository>,
    LinkHeader,
> = endpoint(
    "activity/listWatchedReposForAuthenticatedUser",
    RestMethod::Get,
    "/user/subscriptions",
);

/// Get the authenticated user's subscription to a repository.
pub const GET_REPO_SUBSCRIPTION: ApiHeroEndpoint<RepoInput, RepositorySubscription> = endpoint(
    "activity/getRepoSubscription",
    RestMethod::Get,
    "/repos/{owner}/{repo}/subscription",
);

/// Watch or ignore a repository.
pub const SET_REPO_SUBSCRIPTION: ApiHeroEndpoint<SetRepoSubscriptionInput, RepositorySubscription> =
    endpoint(
        "activity/setRepoSubscription",
        RestMethod::Put,
        "/repos/{owner}/{repo}/subscription",
    );

/// Stop watching a repository.
///
/// Answers `204 No Content`.
pub const DELETE_REPO_SUBSCRIPTION: ApiHeroEndpoint<RepoInput, NoContent> = endpoint(
    "activity/deleteRepoSubscription",
    RestMethod::Delete,
    "/repos/{owner}/{repo}/subscription",
);

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        LIST_PUBLIC_EVENTS.meta(),
        LIST_REPO_EVENTS.meta(),
        LIST_PUBLIC_ORG_EVENTS.meta(),
        LIST_EVENTS_FOR_AUTHENTICATED_USER.meta(),
        LIST_PUBLIC_EVENTS_FOR_USER.meta(),
        LIST_RECEIVED_EVENTS_FOR_USER.meta(),
        LIST_NOTIFICATIONS_FOR_AUTHENTICATED_USER.meta(),
        MARK_NOTIFICATIONS_AS_READ.meta(),
        LIST_REPO_NOTIFICATIONS_FOR_AUTHENTICATED_USER.meta(),
        GET_THREAD.meta(),
        MARK_THREAD_AS_READ.meta(),
        GET_THREAD_SUBSCRIPTION_FOR_AUTHENTICATED_USER.meta(),
        SET_THREAD_SUBSCRIPTION.meta(),
        DELETE_THREAD_SUBSCRIPTION.meta(),
        LIST_STARGAZERS_FOR_REPO.meta(),
        LIST_REPOS_STARRED_BY_AUTHENTICATED_USER.meta(),
        LIST_REPOS_STARRED_BY_USER.meta(),
        CHECK_REPO_IS_STARRED_BY_AUTHENTICATED_USER.meta(),
        STAR_REPO_FOR_AUTHENTICATED_USER.meta(),
        UNSTAR_REPO_FOR_AUTHENTICATED_USER.meta(),
        LIST_WATCHERS_FOR_REPO.meta(),
        LIST_WATCHED_REPOS_FOR_AUTHENTICATED_USER.meta(),
        GET_REPO_SUBSCRIPTION.meta(),
        SET_REPO_SUBSCRIPTION.meta(),
        DELETE_REPO_SUBSCRIPTION.meta(),
    ]
}
