//! Reaction shapes.

use serde::{Deserialize, Serialize};

use super::users::SimpleUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: u64,
    pub node_id: String,
    pub user: Option<SimpleUser>,
    /// `+1`, `-1`, `laugh`, `confused`, `heart`, `hooray`, `rocket` or `eyes`.
    pub content: String,
    pub created_at: String,
}

/// Per-emoji reaction counters embedded in issues and comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRollup {
    pub url: String,
    pub total_count: u32,
    #[serde(rename = "+1")]
    pub plus_one: u32,
    #[serde(rename = "-1")]
    pub minus_one: u32,
    pub laugh: u32,
    pub confused: u32,
    pub heart: u32,
    pub hooray: u32,
    pub eyes: u32,
    pub rocket: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rollup_uses_emoji_keys() {
        let rollup: ReactionRollup = serde_json::from_value(json!({
            "url": "https://api.github.com/repos/octocat/Hello-World/issues/1347/reactions",
            "total_count": 5,
            "+1": 3,
            "-1": 1,
            "laugh": 0,
            "confused": 0,
            "heart": 1,
            "hooray": 0,
            "eyes": 0,
            "rocket": 0
        }))
        .unwrap();

        assert_eq!(rollup.plus_one, 3);
        assert_eq!(rollup.minus_one, 1);
        assert_eq!(serde_json::to_value(&rollup).unwrap()["+1"], 3);
    }
}
