//! Output shapes that are not JSON documents.
//!
//! Ordinary operations use their domain type as the output parameter. These
//! markers cover the two other cases the upstream API has: an empty
//! `204 No Content` response and a raw text/HTML body.

use serde::{Deserialize, Serialize};

/// The operation answers with an empty body (usually `204 No Content`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoContent;

/// The operation answers with a raw text body rather than JSON.
///
/// ## Examples
///
/// ```
/// use apihero_define::RawText;
///
/// let html = RawText::from("<p>Hello <strong>world</strong></p>");
/// assert_eq!(html.as_str(), "<p>Hello <strong>world</strong></p>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawText(pub String);

impl RawText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RawText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_deserializes_from_null() {
        let parsed: NoContent = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, NoContent);
    }

    #[test]
    fn raw_text_is_transparent() {
        let text = RawText::from("hello");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"hello\"");
    }
}
