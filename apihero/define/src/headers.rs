//! Response header shapes.
//!
//! Most operations only describe a body. Paginated listings additionally
//! return a `Link` header and several creation endpoints return a
//! `Location` header; those are modelled as the third type parameter of
//! [`ApiHeroEndpoint`](crate::ApiHeroEndpoint).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("required response header '{0}' is missing")]
    Missing(&'static str),
    #[error("malformed Link header: {0}")]
    MalformedLink(String),
}

/// A typed view over selected response headers.
///
/// `NAMES` holds lowercase header names. `from_lookup` receives a
/// case-insensitive lookup supplied by the client runtime.
pub trait ResponseHeaders: Sized {
    const NAMES: &'static [&'static str];

    fn from_lookup<'a, F>(lookup: F) -> Result<Self, HeaderError>
    where
        F: Fn(&str) -> Option<&'a str>;
}

/// No response headers are described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoHeaders;

impl ResponseHeaders for NoHeaders {
    const NAMES: &'static [&'static str] = &[];

    fn from_lookup<'a, F>(_lookup: F) -> Result<Self, HeaderError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Ok(Self)
    }
}

/// The `Link` header of a paginated listing.
///
/// Absent on single-page results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkHeader {
    pub link: Option<Link>,
}

impl ResponseHeaders for LinkHeader {
    const NAMES: &'static [&'static str] = &["link"];

    fn from_lookup<'a, F>(lookup: F) -> Result<Self, HeaderError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let link = lookup("link").map(Link::from_str).transpose()?;
        Ok(Self { link })
    }
}

/// The `Location` header returned when a resource is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHeader {
    pub location: String,
}

impl ResponseHeaders for LocationHeader {
    const NAMES: &'static [&'static str] = &["location"];

    fn from_lookup<'a, F>(lookup: F) -> Result<Self, HeaderError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let location = lookup("location").ok_or(HeaderError::Missing("location"))?;
        Ok(Self {
            location: location.to_string(),
        })
    }
}

/// One target of a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRel {
    pub url: String,
    pub rel: String,
}

impl LinkRel {
    /// The `page` query parameter of the target URL, if present.
    ///
    /// ## Examples
    ///
    /// ```
    /// use apihero_define::headers::LinkRel;
    ///
    /// let rel = LinkRel {
    ///     url: "https://api.github.com/user/repos?page=3&per_page=100".into(),
    ///     rel: "next".into(),
    /// };
    /// assert_eq!(rel.page(), Some(3));
    /// ```
    pub fn page(&self) -> Option<u32> {
        let url = Url::parse(&self.url).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    }
}

/// A parsed RFC 8288 `Link` header value.
///
/// ## Examples
///
/// ```
/// use apihero_define::headers::Link;
///
/// let link: Link = r#"<https://api.github.com/repositories/1300192/issues?page=2>; rel="next", <https://api.github.com/repositories/1300192/issues?page=515>; rel="last""#
///     .parse()
///     .unwrap();
///
/// assert_eq!(link.next().and_then(|rel| rel.page()), Some(2));
/// assert_eq!(link.last().and_then(|rel| rel.page()), Some(515));
/// assert!(link.prev().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rels: Vec<LinkRel>,
}

impl Link {
    pub fn get(&self, rel: &str) -> Option<&LinkRel> {
        self.rels.iter().find(|candidate| candidate.rel == rel)
    }

    pub fn next(&self) -> Option<&LinkRel> {
        self.get("next")
    }

    pub fn prev(&self) -> Option<&LinkRel> {
        self.get("prev")
    }

    pub fn first(&self) -> Option<&LinkRel> {
        self.get("first")
    }

    pub fn last(&self) -> Option<&LinkRel> {
        self.get("last")
    }
}

impl FromStr for Link {
    type Err = HeaderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || HeaderError::MalformedLink(value.to_string());
        let mut rels = Vec::new();
        let mut rest = value.trim();

        while !rest.is_empty() {
            let after_open = rest.strip_prefix('<').ok_or_else(malformed)?;
            let close = after_open.find('>').ok_or_else(malformed)?;
            let url = &after_open[..close];

            let params_and_rest = &after_open[close + 1..];
            let end = unquoted_end(params_and_rest, ',');
            let params = &params_and_rest[..end];

            let rel = link_params(params)
                .find_map(|(key, value)| key.eq_ignore_ascii_case("rel").then_some(value))
                .ok_or_else(malformed)?;

            // A single entry may carry several space-separated relations.
            for name in rel.split_whitespace() {
                rels.push(LinkRel {
                    url: url.to_string(),
                    rel: name.to_string(),
                });
            }

            let remaining = &params_and_rest[end..];
            rest = remaining.strip_prefix(',').unwrap_or(remaining).trim_start();
        }

        Ok(Self { rels })
    }
}

/// Index of the first `delimiter` outside a quoted string, or the input length.
fn unquoted_end(input: &str, delimiter: char) -> usize {
    let mut in_quotes = false;
    for (idx, c) in input.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => return idx,
            _ => {}
        }
    }
    input.len()
}

/// `key=value` pairs of one link entry, split on unquoted `;`.
///
/// Whitespace around `=` is allowed and quotes around the value are removed.
fn link_params(mut params: &str) -> impl Iterator<Item = (&str, &str)> {
    std::iter::from_fn(move || {
        loop {
            if params.is_empty() {
                return None;
            }
            let end = unquoted_end(params, ';');
            let param = params[..end].trim();
            params = params.get(end + 1..).unwrap_or("");

            if let Some((key, value)) = param.split_once('=') {
                return Some((key.trim(), value.trim().trim_matches('"')));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(headers: &'a HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<&'a str> {
        move |name| headers.get(name).copied()
    }

    #[test]
    fn no_headers_ignores_lookup() {
        let headers = HashMap::new();
        assert_eq!(NoHeaders::from_lookup(lookup_from(&headers)), Ok(NoHeaders));
        assert!(NoHeaders::NAMES.is_empty());
    }

    #[test]
    fn link_header_is_optional() {
        let headers = HashMap::new();
        let parsed = LinkHeader::from_lookup(lookup_from(&headers)).unwrap();
        assert!(parsed.link.is_none());
    }

    #[test]
    fn link_header_parses_every_rel() {
        let mut headers = HashMap::new();
        headers.insert(
            "link",
            "<https://api.github.com/user/repos?page=1>; rel=\"prev\", \
             <https://api.github.com/user/repos?page=3>; rel=\"next\", \
             <https://api.github.com/user/repos?page=5>; rel=\"last\", \
             <https://api.github.com/user/repos?page=1>; rel=\"first\"",
        );

        let parsed = LinkHeader::from_lookup(lookup_from(&headers)).unwrap();
        let link = parsed.link.unwrap();

        assert_eq!(link.rels.len(), 4);
        assert_eq!(link.prev().and_then(LinkRel::page), Some(1));
        assert_eq!(link.next().and_then(LinkRel::page), Some(3));
        assert_eq!(link.last().and_then(LinkRel::page), Some(5));
        assert_eq!(link.first().and_then(LinkRel::page), Some(1));
    }

    #[test]
    fn link_with_cursor_urls_has_no_page() {
        let link: Link = "<https://api.github.com/users?since=135>; rel=\"next\""
            .parse()
            .unwrap();
        let next = link.next().unwrap();
        assert_eq!(next.url, "https://api.github.com/users?since=135");
        assert_eq!(next.page(), None);
    }

    #[test]
    fn link_with_extra_params_and_multiple_rels() {
        let link: Link = "<https://example.com/a?page=2>; title=\"a, b\"; rel=\"next last\""
            .parse()
            .unwrap();
        assert_eq!(link.rels.len(), 2);
        assert_eq!(link.next(), link.get("next"));
        assert_eq!(link.last().map(|rel| rel.url.as_str()), Some("https://example.com/a?page=2"));
    }

    #[test]
    fn quoted_semicolons_do_not_split_params() {
        let link: Link = "<https://example.com/a?page=4>; title=\"x; rel=prev\"; rel=\"next\""
            .parse()
            .unwrap();
        assert_eq!(link.rels.len(), 1);
        assert_eq!(link.next().and_then(LinkRel::page), Some(4));
        assert!(link.prev().is_none());
    }

    #[test]
    fn whitespace_around_equals_is_accepted() {
        let link: Link = "<https://example.com/a?page=2> ; rel = \"next\" , <https://example.com/a?page=9>;REL=last"
            .parse()
            .unwrap();
        assert_eq!(link.next().and_then(LinkRel::page), Some(2));
        assert_eq!(link.last().and_then(LinkRel::page), Some(9));
    }

    #[test]
    fn malformed_links_are_rejected() {
        assert!(matches!(
            "https://example.com; rel=\"next\"".parse::<Link>(),
            Err(HeaderError::MalformedLink(_))
        ));
        assert!(matches!(
            "<https://example.com>; title=\"x\"".parse::<Link>(),
            Err(HeaderError::MalformedLink(_))
        ));
        assert!(matches!(
            "<https://example.com; rel=\"next\"".parse::<Link>(),
            Err(HeaderError::MalformedLink(_))
        ));
    }

    #[test]
    fn location_header_is_required() {
        let headers = HashMap::new();
        assert_eq!(
            LocationHeader::from_lookup(lookup_from(&headers)),
            Err(HeaderError::Missing("location"))
        );

        let mut headers = HashMap::new();
        headers.insert("location", "https://api.github.com/repos/octocat/Hello-World/issues/1347");
        let parsed = LocationHeader::from_lookup(lookup_from(&headers)).unwrap();
        assert!(parsed.location.ends_with("/issues/1347"));
    }
}
