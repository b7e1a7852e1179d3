//! HTTP method types for endpoint descriptors.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// HTTP methods an endpoint descriptor can route to.
///
/// ## Examples
///
/// ```rust
/// use apihero_define::RestMethod;
///
/// let method = RestMethod::Get;
/// assert!(!method.has_body());
/// assert!(method.is_idempotent());
///
/// let parsed: RestMethod = "PATCH".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Patch);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource, or toggle a relationship on.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
    /// HTTP HEAD - Retrieve headers only.
    Head,
}

impl RestMethod {
    /// Returns `true` if this method typically has a request body.
    ///
    /// DELETE is not counted here even though several upstream operations
    /// (removing labels, deleting files) accept one.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns `true` if repeating the call has the same effect as calling once.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }

    /// Returns `true` if this method must not modify server state.
    ///
    /// Safe methods never carry a request body in this catalog.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get | Self::Head)
    }

    /// Returns the uppercase wire name (e.g. `"GET"`).
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_is_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
        assert_eq!(RestMethod::Head.as_str(), "HEAD");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(RestMethod::from_str("PUT").unwrap(), RestMethod::Put);
        assert!(RestMethod::from_str("put").is_err());
        assert!(RestMethod::from_str("").is_err());
    }

    #[test]
    fn body_and_safety_classification() {
        assert!(!RestMethod::Get.has_body());
        assert!(RestMethod::Post.has_body());
        assert!(RestMethod::Put.has_body());
        assert!(RestMethod::Patch.has_body());
        assert!(!RestMethod::Delete.has_body());

        assert!(RestMethod::Get.is_safe());
        assert!(RestMethod::Head.is_safe());
        assert!(!RestMethod::Delete.is_safe());

        assert!(RestMethod::Put.is_idempotent());
        assert!(!RestMethod::Post.is_idempotent());
        assert!(!RestMethod::Patch.is_idempotent());
    }

    #[test]
    fn iterates_every_variant() {
        assert_eq!(RestMethod::iter().count(), 6);
    }

    #[test]
    fn serde_uses_uppercase() {
        let serialized = serde_json::to_string(&RestMethod::Patch).unwrap();
        assert_eq!(serialized, "\"PATCH\"");

        let parsed: RestMethod = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(parsed, RestMethod::Delete);
    }
}
