//! Validated `<resource>/<operation>` endpoint identifiers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Separator between the resource and operation segments.
pub const SEPARATOR: char = '/';

/// A validated endpoint identifier such as `repos/get` or `pulls/listReviews`.
///
/// Rules:
/// 1. Exactly one `/` splits the id into a resource and an operation.
/// 2. Each segment starts with an ASCII lowercase letter.
/// 3. Remaining characters are ASCII alphanumeric (operations are camelCase).
///
/// ## Examples
///
/// ```rust
/// use apihero_define::EndpointId;
///
/// let id = EndpointId::parse("issues/listForRepo").unwrap();
/// assert_eq!(id.resource(), "issues");
/// assert_eq!(id.operation(), "listForRepo");
///
/// assert!(EndpointId::parse("issues").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId {
    raw: String,
    split: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointIdError {
    #[error("endpoint id cannot be empty")]
    Empty,
    #[error("endpoint id '{0}' must have the form <resource>/<operation>")]
    MissingSeparator(String),
    #[error("endpoint id '{0}' has more than one '/'")]
    TooManySegments(String),
    #[error("segment '{segment}' of endpoint id must start with a lowercase letter")]
    InvalidStartCharacter { segment: String },
    #[error("endpoint id contains invalid character: '{0}'")]
    InvalidCharacter(char),
}

impl EndpointId {
    /// Parses and validates an endpoint identifier.
    pub fn parse(id: impl Into<String>) -> Result<Self, EndpointIdError> {
        let raw = id.into();
        if raw.is_empty() {
            return Err(EndpointIdError::Empty);
        }

        let split = raw
            .find(SEPARATOR)
            .ok_or_else(|| EndpointIdError::MissingSeparator(raw.clone()))?;
        let (resource, rest) = raw.split_at(split);
        let operation = &rest[1..];

        if operation.contains(SEPARATOR) {
            return Err(EndpointIdError::TooManySegments(raw.clone()));
        }

        validate_segment(resource)?;
        validate_segment(operation)?;

        Ok(Self { raw, split })
    }

    /// The resource segment (e.g. `repos`).
    pub fn resource(&self) -> &str {
        &self.raw[..self.split]
    }

    /// The operation segment (e.g. `listForOrg`).
    pub fn operation(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn validate_segment(segment: &str) -> Result<(), EndpointIdError> {
    let mut chars = segment.chars();

    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => {
            return Err(EndpointIdError::InvalidStartCharacter {
                segment: segment.to_string(),
            });
        }
    }

    match chars.find(|c| !c.is_ascii_alphanumeric()) {
        Some(c) => Err(EndpointIdError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<EndpointId> for String {
    fn from(id: EndpointId) -> Self {
        id.raw
    }
}

impl TryFrom<String> for EndpointId {
    type Error = EndpointIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for EndpointId {
    type Error = EndpointIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for EndpointId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for EndpointId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
