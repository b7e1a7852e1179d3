//! Activity shapes: events, notifications, stars and watches.

use serde::{Deserialize, Serialize};

use super::users::SimpleUser;

/// A public timeline event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// `PushEvent`, `IssuesEvent`, `WatchEvent` and so on.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub actor: EventActor,
    pub repo: EventRepo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<EventActor>,
    pub payload: serde_json::Value,
    pub public: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventActor {
    pub id: u64,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_login: Option<String>,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRepo {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// A notification thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub repository: serde_json::Value,
    pub subject: ThreadSubject,
    /// `assign`, `author`, `mention`, `review_requested` and so on.
    pub reason: String,
    pub unread: bool,
    pub updated_at: String,
    pub last_read_at: Option<String>,
    pub url: String,
    pub subscription_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSubject {
    pub title: String,
    pub url: Option<String>,
    pub latest_comment_url: Option<String>,
    #[serde(rename = "type")]
    pub subject_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSubscription {
    pub subscribed: bool,
    pub ignored: bool,
    pub reason: Option<String>,
    pub created_at: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
}

/// The caller's watch settings on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySubscription {
    pub subscribed: bool,
    pub ignored: bool,
    pub reason: Option<String>,
    pub created_at: String,
    pub url: String,
    pub repository_url: String,
}

/// Answer of the mark-as-read endpoints when processing is deferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedRead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A stargazer with the time of starring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stargazer {
    pub starred_at: String,
    pub user: Option<SimpleUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_renames_type() {
        let event: Event = serde_json::from_value(json!({
            "id": "22249084947",
            "type": "WatchEvent",
            "actor": {
                "id": 583231,
                "login": "octocat",
                "display_login": "octocat",
                "gravatar_id": "",
                "url": "https://api.github.com/users/octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4"
            },
            "repo": {
                "id": 1296269,
                "name": "octocat/Hello-World",
                "url": "https://api.github.com/repos/octocat/Hello-World"
            },
            "payload": { "action": "started" },
            "public": true,
            "created_at": "2022-06-09T12:47:28Z"
        }))
        .unwrap();

        assert_eq!(event.event_type.as_deref(), Some("WatchEvent"));
        assert_eq!(event.payload["action"], "started");
    }
}
