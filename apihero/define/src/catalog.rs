//! Type-erased endpoint metadata and the catalog that indexes it.

use std::collections::{BTreeSet, HashMap};

use semver::Version;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::endpoint_id::{EndpointId, EndpointIdError};
use crate::input::extract_path_params;
use crate::method::RestMethod;

/// Everything a descriptor knows, without its type parameters.
///
/// Produced by [`ApiHeroEndpoint::meta`](crate::ApiHeroEndpoint::meta).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointMeta {
    pub id: &'static str,
    pub client_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
    pub method: RestMethod,
    pub path: &'static str,
    pub path_params: &'static [&'static str],
    pub query_params: &'static [&'static str],
    pub body_params: &'static [&'static str],
    pub response_headers: &'static [&'static str],
    pub input_type: &'static str,
    pub output_type: &'static str,
}

impl EndpointMeta {
    /// The resource segment of the id (`repos` for `repos/get`).
    pub fn resource(&self) -> &'static str {
        self.id.split_once('/').map_or(self.id, |(resource, _)| resource)
    }

    /// Whether the response carries a `Link` pagination header.
    pub fn is_paginated(&self) -> bool {
        self.response_headers.contains(&"link")
    }

    /// Placeholder names found in the path template.
    pub fn template_params(&self) -> Vec<&'static str> {
        extract_path_params(self.path)
    }

    /// Whether any declared parameter is sent in the request body.
    pub fn has_body(&self) -> bool {
        !self.body_params.is_empty()
    }

    /// The pinned revision, parsed. `Ok(None)` when no version is set.
    pub fn parsed_version(&self) -> Result<Option<Version>, semver::Error> {
        self.version.map(Version::parse).transpose()
    }
}

/// Strips module paths from a `std::any::type_name` string.
///
/// ## Examples
///
/// ```
/// use apihero_define::catalog::short_type_name;
///
/// assert_eq!(
///     short_type_name("alloc::vec::Vec<apihero_github::types::repos::Repository>"),
///     "Vec<Repository>"
/// );
/// assert_eq!(short_type_name("()"), "()");
/// ```
pub fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;

    for (idx, c) in full.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            continue;
        }
        short.push_str(last_path_segment(&full[segment_start..idx]));
        short.push(c);
        segment_start = idx + c.len_utf8();
    }
    short.push_str(last_path_segment(&full[segment_start..]));
    short
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate endpoint id '{0}'")]
    DuplicateId(&'static str),
    #[error("invalid endpoint id '{id}': {source}")]
    InvalidId {
        id: &'static str,
        #[source]
        source: EndpointIdError,
    },
}

/// An indexed, duplicate-free set of endpoint descriptions for one client.
///
/// ## Examples
///
/// ```
/// use apihero_define::{ApiHeroEndpoint, Catalog, RestMethod};
///
/// const GET: ApiHeroEndpoint<(), serde_json::Value> =
///     ApiHeroEndpoint::new("meta/get", "github", RestMethod::Get, "/meta");
/// const EMOJIS: ApiHeroEndpoint<(), serde_json::Value> =
///     ApiHeroEndpoint::new("emojis/get", "github", RestMethod::Get, "/emojis");
///
/// let catalog = Catalog::from_entries("github", vec![GET.meta(), EMOJIS.meta()]).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("emojis/get").is_some());
///
/// let duplicate = Catalog::from_entries("github", vec![GET.meta(), GET.meta()]);
/// assert!(duplicate.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    client_id: &'static str,
    entries: Vec<EndpointMeta>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed or duplicate ids.
    pub fn from_entries(
        client_id: &'static str,
        entries: Vec<EndpointMeta>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            EndpointId::parse(entry.id)
                .map_err(|source| CatalogError::InvalidId { id: entry.id, source })?;
            if index.insert(entry.id, position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }

        debug!(client_id, endpoints = entries.len(), "catalog assembled");

        Ok(Self {
            client_id,
            entries,
            index,
        })
    }

    pub fn client_id(&self) -> &'static str {
        self.client_id
    }

    pub fn get(&self, id: &str) -> Option<&EndpointMeta> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[EndpointMeta] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointMeta> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct resource names, sorted.
    pub fn resources(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(EndpointMeta::resource)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn by_resource<'a>(&'a self, resource: &'a str) -> impl Iterator<Item = &'a EndpointMeta> {
        self.entries
            .iter()
            .filter(move |entry| entry.resource() == resource)
    }

    pub fn paginated(&self) -> impl Iterator<Item = &EndpointMeta> {
        self.entries.iter().filter(|entry| entry.is_paginated())
    }

    pub fn into_entries(self) -> Vec<EndpointMeta> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EndpointMeta;
    type IntoIter = std::slice::Iter<'a, EndpointMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: &'static str, path: &'static str, headers: &'static [&'static str]) -> EndpointMeta {
        EndpointMeta {
            id,
            client_id: "github",
            version: None,
            method: RestMethod::Get,
            path,
            path_params: &[],
            query_params: &[],
            body_params: &[],
            response_headers: headers,
            input_type: "()",
            output_type: "()",
        }
    }

    fn sample() -> Catalog {
        Catalog::from_entries(
            "github",
            vec![
                meta("repos/get", "/repos/{owner}/{repo}", &[]),
                meta("repos/listForOrg", "/orgs/{org}/repos", &["link"]),
                meta("issues/get", "/repos/{owner}/{repo}/issues/{issue_number}", &[]),
                meta("gists/list", "/gists", &["link"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let catalog = sample();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.client_id(), "github");
        assert_eq!(catalog.get("issues/get").map(|e| e.path), Some("/repos/{owner}/{repo}/issues/{issue_number}"));
        assert!(catalog.get("issues/delete").is_none());
    }

    #[test]
    fn resources_are_sorted_and_distinct() {
        assert_eq!(sample().resources(), vec!["gists", "issues", "repos"]);
    }

    #[test]
    fn filter_by_resource_and_pagination() {
        let catalog = sample();
        let repos: Vec<_> = catalog.by_resource("repos").map(|e| e.id).collect();
        assert_eq!(repos, vec!["repos/get", "repos/listForOrg"]);

        let paginated: Vec<_> = catalog.paginated().map(|e| e.id).collect();
        assert_eq!(paginated, vec!["repos/listForOrg", "gists/list"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_entries(
            "github",
            vec![meta("repos/get", "/a", &[]), meta("repos/get", "/b", &[])],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("repos/get"));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        let err = Catalog::from_entries("github", vec![meta("getRepo", "/a", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId { id: "getRepo", .. }));
    }

    #[test]
    fn template_params_follow_path() {
        let entry = meta("issues/get", "/repos/{owner}/{repo}/issues/{issue_number}", &[]);
        assert_eq!(entry.template_params(), vec!["owner", "repo", "issue_number"]);
        assert_eq!(entry.resource(), "issues");
        assert!(!entry.has_body());
    }

    #[test]
    fn versions_parse_as_semver() {
        let mut entry = meta("gists/list", "/gists", &["link"]);
        assert_eq!(entry.parsed_version().unwrap(), None);

        entry.version = Some("2.1.0");
        assert_eq!(entry.parsed_version().unwrap(), Some(Version::new(2, 1, 0)));

        entry.version = Some("v2");
        assert!(entry.parsed_version().is_err());
    }

    #[test]
    fn short_type_names() {
        assert_eq!(short_type_name("apihero_github::types::users::SimpleUser"), "SimpleUser");
        assert_eq!(
            short_type_name("std::collections::hash::map::HashMap<alloc::string::String, u64>"),
            "HashMap<String, u64>"
        );
        assert_eq!(short_type_name("u32"), "u32");
    }

    #[test]
    fn meta_serializes_without_empty_version() {
        let json = serde_json::to_value(meta("gists/list", "/gists", &["link"])).unwrap();
        assert_eq!(json["method"], "GET");
        assert!(json.get("version").is_none());
        assert_eq!(json["response_headers"][0], "link");
    }
}
