//! The typed endpoint descriptor.
//!
//! An [`ApiHeroEndpoint`] is a `const` value carrying an id, a client tag and
//! the route, with the input, output and response-header shapes recorded
//! only in its type. It performs no I/O; a client runtime reads the route
//! from it and uses [`ApiHeroEndpoint::prepare`] to turn an input value into
//! request parts.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::trace;

use crate::catalog::EndpointMeta;
use crate::headers::{NoHeaders, ResponseHeaders};
use crate::input::{EndpointInput, InputError, render_path};
use crate::method::RestMethod;

/// A typed REST endpoint descriptor.
///
/// ## Type Parameters
///
/// - `I`: the input shape ([`EndpointInput`]): path, query and body parameters.
/// - `O`: the response body shape.
/// - `H`: the response-header shape ([`ResponseHeaders`]), [`NoHeaders`] by default.
///
/// ## Examples
///
/// ```rust
/// use apihero_define::{endpoint_input, ApiHeroEndpoint, LinkHeader, RestMethod};
///
/// endpoint_input! {
///     pub struct ListTagsInput {
///         path { owner: String, repo: String }
///         query { per_page: Option<u32>, page: Option<u32> }
///     }
/// }
///
/// #[derive(Debug, Clone, serde::Deserialize)]
/// pub struct Tag {
///     pub name: String,
/// }
///
/// pub const LIST_TAGS: ApiHeroEndpoint<ListTagsInput, Vec<Tag>, LinkHeader> =
///     ApiHeroEndpoint::new("repos/listTags", "github", RestMethod::Get, "/repos/{owner}/{repo}/tags");
///
/// assert_eq!(LIST_TAGS.id(), "repos/listTags");
/// assert_eq!(LIST_TAGS.client_id(), "github");
/// assert!(LIST_TAGS.meta().is_paginated());
///
/// let request = LIST_TAGS
///     .prepare(&ListTagsInput {
///         owner: "octocat".into(),
///         repo: "hello-world".into(),
///         per_page: Some(100),
///         page: None,
///     })
///     .unwrap();
/// assert_eq!(request.path, "/repos/octocat/hello-world/tags");
/// ```
pub struct ApiHeroEndpoint<I, O, H = NoHeaders> {
    id: &'static str,
    client_id: &'static str,
    version: Option<&'static str>,
    method: RestMethod,
    path: &'static str,
    _shape: PhantomData<fn(I) -> (O, H)>,
}

// Manual impls: derives would demand the shape types be Clone/Copy/Debug too.
impl<I, O, H> Clone for ApiHeroEndpoint<I, O, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, O, H> Copy for ApiHeroEndpoint<I, O, H> {}

impl<I, O, H> fmt::Debug for ApiHeroEndpoint<I, O, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiHeroEndpoint")
            .field("id", &self.id)
            .field("client_id", &self.client_id)
            .field("version", &self.version)
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

impl<I, O, H> ApiHeroEndpoint<I, O, H> {
    /// Creates a descriptor. Usable in `const` items.
    pub const fn new(
        id: &'static str,
        client_id: &'static str,
        method: RestMethod,
        path: &'static str,
    ) -> Self {
        Self {
            id,
            client_id,
            version: None,
            method,
            path,
            _shape: PhantomData,
        }
    }

    /// Pins the descriptor to a semantic version.
    pub const fn with_version(self, version: &'static str) -> Self {
        Self {
            id: self.id,
            client_id: self.client_id,
            version: Some(version),
            method: self.method,
            path: self.path,
            _shape: PhantomData,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn client_id(&self) -> &'static str {
        self.client_id
    }

    pub const fn version(&self) -> Option<&'static str> {
        self.version
    }

    pub const fn method(&self) -> RestMethod {
        self.method
    }

    /// Path template with `{param}` placeholders.
    pub const fn path(&self) -> &'static str {
        self.path
    }
}

impl<I, O, H> ApiHeroEndpoint<I, O, H>
where
    I: EndpointInput,
    H: ResponseHeaders,
{
    /// Returns the type-erased description of this endpoint.
    pub fn meta(&self) -> EndpointMeta {
        EndpointMeta {
            id: self.id,
            client_id: self.client_id,
            version: self.version,
            method: self.method,
            path: self.path,
            path_params: I::PATH_PARAMS,
            query_params: I::QUERY_PARAMS,
            body_params: I::BODY_PARAMS,
            response_headers: H::NAMES,
            input_type: std::any::type_name::<I>(),
            output_type: std::any::type_name::<O>(),
        }
    }
}

impl<I, O, H> ApiHeroEndpoint<I, O, H>
where
    I: EndpointInput,
{
    /// Splits `input` into the parts of a request against this endpoint.
    pub fn prepare(&self, input: &I) -> Result<PreparedRequest, InputError> {
        let parts = input.to_parts()?;
        let path = render_path(self.path, &parts.path)?;

        trace!(
            id = self.id,
            method = %self.method,
            path = %path,
            query = parts.query.len(),
            has_body = parts.body.is_some(),
            "prepared request"
        );

        Ok(PreparedRequest {
            id: self.id,
            client_id: self.client_id,
            method: self.method,
            path,
            query: parts.query,
            body: parts.body,
        })
    }
}

/// A request ready to hand to a client runtime.
///
/// The path is relative to the client's base URL, which is selected by
/// `client_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRequest {
    pub id: &'static str,
    pub client_id: &'static str,
    pub method: RestMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::{LinkHeader, LocationHeader};
    use serde_json::json;

    crate::endpoint_input! {
        struct ReleaseInput {
            path { owner: String, repo: String, release_id: u64 }
        }
    }

    crate::endpoint_input! {
        #[derive(Default)]
        struct CreateLabelInput {
            path { owner: String, repo: String }
            body { name: String, color: Option<String>, description: Option<String> }
        }
    }

    #[derive(Debug, Clone, serde::Deserialize)]
    struct Label {
        #[allow(dead_code)]
        name: String,
    }

    const GET_RELEASE: ApiHeroEndpoint<ReleaseInput, serde_json::Value> = ApiHeroEndpoint::new(
        "repos/getRelease",
        "github",
        RestMethod::Get,
        "/repos/{owner}/{repo}/releases/{release_id}",
    );

    const CREATE_LABEL: ApiHeroEndpoint<CreateLabelInput, Label, LocationHeader> =
        ApiHeroEndpoint::new(
            "issues/createLabel",
            "github",
            RestMethod::Post,
            "/repos/{owner}/{repo}/labels",
        )
        .with_version("1.1.0");

    const RATE_LIMIT: ApiHeroEndpoint<(), serde_json::Value> =
        ApiHeroEndpoint::new("rateLimit/get", "github", RestMethod::Get, "/rate_limit");

    #[test]
    fn accessors_return_const_fields() {
        assert_eq!(GET_RELEASE.id(), "repos/getRelease");
        assert_eq!(GET_RELEASE.client_id(), "github");
        assert_eq!(GET_RELEASE.method(), RestMethod::Get);
        assert_eq!(GET_RELEASE.path(), "/repos/{owner}/{repo}/releases/{release_id}");
        assert_eq!(GET_RELEASE.version(), None);
        assert_eq!(CREATE_LABEL.version(), Some("1.1.0"));
    }

    #[test]
    fn descriptors_are_copy() {
        let copy = CREATE_LABEL;
        let again = copy;
        assert_eq!(copy.id(), again.id());
    }

    #[test]
    fn meta_carries_shape_information() {
        let meta = CREATE_LABEL.meta();
        assert_eq!(meta.path_params, &["owner", "repo"]);
        assert_eq!(meta.body_params, &["name", "color", "description"]);
        assert!(meta.query_params.is_empty());
        assert_eq!(meta.response_headers, &["location"]);
        assert!(meta.input_type.ends_with("CreateLabelInput"));
        assert!(meta.output_type.ends_with("Label"));
        assert!(!meta.is_paginated());
    }

    #[test]
    fn paginated_meta_reports_link_header() {
        const LIST: ApiHeroEndpoint<(), Vec<Label>, LinkHeader> =
            ApiHeroEndpoint::new("issues/listLabelsForRepo", "github", RestMethod::Get, "/labels");
        assert!(LIST.meta().is_paginated());
    }

    #[test]
    fn prepare_renders_numeric_path_params() {
        let request = GET_RELEASE
            .prepare(&ReleaseInput {
                owner: "octocat".into(),
                repo: "hello-world".into(),
                release_id: 42,
            })
            .unwrap();

        assert_eq!(request.method, RestMethod::Get);
        assert_eq!(request.path, "/repos/octocat/hello-world/releases/42");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn prepare_builds_json_body() {
        let request = CREATE_LABEL
            .prepare(&CreateLabelInput {
                owner: "octocat".into(),
                repo: "hello-world".into(),
                name: "bug".into(),
                color: Some("f29513".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(request.path, "/repos/octocat/hello-world/labels");
        assert_eq!(request.body, Some(json!({ "name": "bug", "color": "f29513" })));
    }

    #[test]
    fn prepare_unit_input() {
        let request = RATE_LIMIT.prepare(&()).unwrap();
        assert_eq!(request.path, "/rate_limit");
        assert_eq!(request.client_id, "github");
    }

    #[test]
    fn debug_shows_route() {
        let debug = format!("{GET_RELEASE:?}");
        assert!(debug.contains("repos/getRelease"));
        assert!(debug.contains("Get"));
    }
}
