//! Endpoint input shapes.
//!
//! An input type is a flat serde struct whose fields are partitioned into
//! path, query and body parameters. The partition is declared once, through
//! the [`endpoint_input!`](crate::endpoint_input) macro, and exposed as the
//! wire-name lists on [`EndpointInput`]. A client runtime calls
//! [`EndpointInput::to_parts`] to get the pieces of an HTTP request without
//! knowing anything about the concrete type.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Bytes escaped in substituted path values: everything but RFC 3986
/// unreserved characters and `/`, which multi-segment params (`{path}`,
/// `{ref}`) rely on.
const PATH_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Errors raised while splitting an input value into request parts.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input could not be serialized to JSON.
    #[error("failed to serialize endpoint input: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The input serialized to something other than an object or null.
    #[error("endpoint input must serialize to an object, got {0}")]
    NotAnObject(&'static str),

    /// A path parameter has no value.
    #[error("missing value for path parameter '{0}'")]
    MissingPathParam(String),

    /// A path parameter serialized to an array or object.
    #[error("path parameter '{0}' must be a string, number or boolean")]
    NonScalarPathValue(String),

    /// A query parameter serialized to an object or a nested array.
    #[error("query parameter '{0}' must be a scalar or a list of scalars")]
    UnsupportedQueryValue(String),

    /// The input carries a field none of the parameter lists mention.
    #[error("field '{0}' is not declared as a path, query or body parameter")]
    UndeclaredField(String),
}

/// The pieces of an HTTP request derived from an input value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputParts {
    /// Path parameter values keyed by placeholder name, in declaration order.
    pub path: Vec<(String, String)>,
    /// Query string pairs. Lists are comma-joined.
    pub query: Vec<(String, String)>,
    /// JSON body, `None` when no body field carries a value.
    pub body: Option<Value>,
}

/// A typed endpoint input.
///
/// Implemented by the [`endpoint_input!`](crate::endpoint_input) macro; the
/// parameter lists hold wire names (after serde renames).
///
/// ## Examples
///
/// ```rust
/// use apihero_define::{endpoint_input, EndpointInput};
///
/// endpoint_input! {
///     pub struct ListIssuesInput {
///         path { owner: String, repo: String }
///         query { state: Option<String>, per_page: Option<u32>, page: Option<u32> }
///     }
/// }
///
/// assert_eq!(ListIssuesInput::PATH_PARAMS, &["owner", "repo"]);
/// assert_eq!(ListIssuesInput::QUERY_PARAMS, &["state", "per_page", "page"]);
/// assert!(ListIssuesInput::BODY_PARAMS.is_empty());
///
/// let input = ListIssuesInput {
///     owner: "rust-lang".into(),
///     repo: "rust".into(),
///     state: Some("open".into()),
///     per_page: None,
///     page: Some(2),
/// };
/// let parts = input.to_parts().unwrap();
/// assert_eq!(parts.query, vec![
///     ("state".to_string(), "open".to_string()),
///     ("page".to_string(), "2".to_string()),
/// ]);
/// ```
pub trait EndpointInput: Serialize {
    /// Placeholder names substituted into the path template.
    const PATH_PARAMS: &'static [&'static str];
    /// Query-string parameter names.
    const QUERY_PARAMS: &'static [&'static str];
    /// Top-level JSON body field names.
    const BODY_PARAMS: &'static [&'static str];

    /// Splits this value into path, query and body parts.
    fn to_parts(&self) -> Result<InputParts, InputError> {
        split_input(
            self,
            Self::PATH_PARAMS,
            Self::QUERY_PARAMS,
            Self::BODY_PARAMS,
        )
    }
}

impl EndpointInput for () {
    const PATH_PARAMS: &'static [&'static str] = &[];
    const QUERY_PARAMS: &'static [&'static str] = &[];
    const BODY_PARAMS: &'static [&'static str] = &[];
}

/// Partitions a serializable value by the given wire-name lists.
///
/// Null values are dropped from every group except the path group, where
/// they are an error.
pub fn split_input<T: Serialize + ?Sized>(
    input: &T,
    path: &[&str],
    query: &[&str],
    body: &[&str],
) -> Result<InputParts, InputError> {
    let mut fields = match serde_json::to_value(input)? {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => return Err(InputError::NotAnObject(json_kind(&other))),
    };

    let mut parts = InputParts::default();

    for &name in path {
        let value = match fields.remove(name) {
            None | Some(Value::Null) => return Err(InputError::MissingPathParam(name.to_string())),
            Some(value) => value,
        };
        let rendered =
            scalar_to_string(&value).ok_or_else(|| InputError::NonScalarPathValue(name.to_string()))?;
        parts.path.push((name.to_string(), rendered));
    }

    for &name in query {
        let rendered = match fields.remove(name) {
            None | Some(Value::Null) => continue,
            Some(Value::Array(items)) => join_list(name, &items)?,
            Some(Value::Object(_)) => return Err(InputError::UnsupportedQueryValue(name.to_string())),
            Some(scalar) => scalar_to_string(&scalar)
                .ok_or_else(|| InputError::UnsupportedQueryValue(name.to_string()))?,
        };
        parts.query.push((name.to_string(), rendered));
    }

    let mut body_fields = Map::new();
    for &name in body {
        match fields.remove(name) {
            None | Some(Value::Null) => {}
            Some(value) => {
                body_fields.insert(name.to_string(), value);
            }
        }
    }

    if let Some(name) = fields.keys().next() {
        return Err(InputError::UndeclaredField(name.clone()));
    }

    if !body_fields.is_empty() {
        parts.body = Some(Value::Object(body_fields));
    }

    Ok(parts)
}

fn join_list(name: &str, items: &[Value]) -> Result<String, InputError> {
    let mut rendered = Vec::with_capacity(items.len());
    for item in items.iter().filter(|item| !item.is_null()) {
        let value = scalar_to_string(item)
            .ok_or_else(|| InputError::UnsupportedQueryValue(name.to_string()))?;
        rendered.push(value);
    }
    Ok(rendered.join(","))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extracts placeholder names from a path template, in order.
///
/// ## Examples
///
/// ```
/// use apihero_define::input::extract_path_params;
///
/// assert_eq!(extract_path_params("/user/repos"), Vec::<&str>::new());
/// assert_eq!(
///     extract_path_params("/repos/{owner}/{repo}/pulls/{pull_number}"),
///     vec!["owner", "repo", "pull_number"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = None;

    for (idx, c) in path.char_indices() {
        match c {
            '{' => start = Some(idx + 1),
            '}' => {
                if let Some(begin) = start.take() {
                    let param = &path[begin..idx];
                    if !param.is_empty() {
                        params.push(param);
                    }
                }
            }
            _ => {}
        }
    }

    params
}

/// Substitutes `{name}` placeholders in a path template.
///
/// Values are percent-encoded, so `?`, `#`, `%` and spaces stay inside
/// their segment. `/` is kept as-is.
///
/// ## Examples
///
/// ```
/// use apihero_define::input::render_path;
///
/// let params = vec![
///     ("owner".to_string(), "octocat".to_string()),
///     ("repo".to_string(), "hello-world".to_string()),
/// ];
/// let path = render_path("/repos/{owner}/{repo}", &params).unwrap();
/// assert_eq!(path, "/repos/octocat/hello-world");
///
/// let params = vec![("name".to_string(), "good first issue".to_string())];
/// let path = render_path("/labels/{name}", &params).unwrap();
/// assert_eq!(path, "/labels/good%20first%20issue");
///
/// assert!(render_path("/orgs/{org}", &[]).is_err());
/// ```
pub fn render_path(template: &str, params: &[(String, String)]) -> Result<String, InputError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };
        let name = &rest[open + 1..close];
        let value = params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| InputError::MissingPathParam(name.to_string()))?;

        rendered.push_str(&rest[..open]);
        rendered.extend(utf8_percent_encode(value, PATH_VALUE_ENCODE_SET));
        rest = &rest[close + 1..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $wire:literal) => {
        $wire
    };
}

/// Declares an endpoint input struct and its [`EndpointInput`] implementation.
///
/// Fields are grouped into `path`, `query` and `body` blocks (each optional,
/// in that order). A field written `name as "wire"` is renamed on the wire,
/// which is how keyword-named parameters such as `type` or `ref` are spelled.
/// Every field becomes `pub`. The struct derives `Debug`, `Clone`,
/// `PartialEq`, `Serialize` and `Deserialize`; further attributes (including
/// `#[derive(Default)]`) may be placed on the struct or on individual fields.
///
/// ## Examples
///
/// ```rust
/// use apihero_define::{endpoint_input, EndpointInput};
///
/// endpoint_input! {
///     /// Input for creating a git reference.
///     pub struct CreateRefInput {
///         path { owner: String, repo: String }
///         body { full_ref as "ref": String, sha: String }
///     }
/// }
///
/// assert_eq!(CreateRefInput::BODY_PARAMS, &["ref", "sha"]);
///
/// let parts = CreateRefInput {
///     owner: "octocat".into(),
///     repo: "hello-world".into(),
///     full_ref: "refs/heads/main".into(),
///     sha: "aa218f56b14c9653891f9e74264a383fa43fefbd".into(),
/// }
/// .to_parts()
/// .unwrap();
///
/// let body = parts.body.unwrap();
/// assert_eq!(body["ref"], "refs/heads/main");
/// ```
#[macro_export]
macro_rules! endpoint_input {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(path {
                $( $(#[$pmeta:meta])* $pfield:ident $(as $pwire:literal)? : $pty:ty ),* $(,)?
            })?
            $(query {
                $( $(#[$qmeta:meta])* $qfield:ident $(as $qwire:literal)? : $qty:ty ),* $(,)?
            })?
            $(body {
                $( $(#[$bmeta:meta])* $bfield:ident $(as $bwire:literal)? : $bty:ty ),* $(,)?
            })?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $($(
                $(#[$pmeta])*
                $(#[serde(rename = $pwire)])?
                pub $pfield: $pty,
            )*)?
            $($(
                $(#[$qmeta])*
                $(#[serde(rename = $qwire)])?
                pub $qfield: $qty,
            )*)?
            $($(
                $(#[$bmeta])*
                $(#[serde(rename = $bwire)])?
                pub $bfield: $bty,
            )*)?
        }

        impl $crate::EndpointInput for $name {
            const PATH_PARAMS: &'static [&'static str] =
                &[$($($crate::__wire_name!($pfield $(, $pwire)?),)*)?];
            const QUERY_PARAMS: &'static [&'static str] =
                &[$($($crate::__wire_name!($qfield $(, $qwire)?),)*)?];
            const BODY_PARAMS: &'static [&'static str] =
                &[$($($crate::__wire_name!($bfield $(, $bwire)?),)*)?];
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::endpoint_input! {
        #[derive(Default)]
        struct SearchInput {
            path { owner: String }
            query {
                kind as "type": Option<String>,
                labels: Option<Vec<String>>,
                per_page: Option<u32>,
            }
            body {
                title: Option<String>,
                draft: Option<bool>,
            }
        }
    }

    crate::endpoint_input! {
        struct NoPathInput {
            query { q: String }
        }
    }

    #[test]
    fn macro_records_wire_names() {
        assert_eq!(SearchInput::PATH_PARAMS, &["owner"]);
        assert_eq!(SearchInput::QUERY_PARAMS, &["type", "labels", "per_page"]);
        assert_eq!(SearchInput::BODY_PARAMS, &["title", "draft"]);
        assert!(NoPathInput::PATH_PARAMS.is_empty());
        assert!(NoPathInput::BODY_PARAMS.is_empty());
    }

    #[test]
    fn renamed_field_serializes_with_wire_name() {
        let input = SearchInput {
            owner: "octocat".into(),
            kind: Some("public".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], "public");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn to_parts_splits_groups() {
        let input = SearchInput {
            owner: "octocat".into(),
            kind: Some("all".into()),
            labels: Some(vec!["bug".into(), "ui".into()]),
            per_page: Some(50),
            title: Some("Found a bug".into()),
            draft: Some(false),
        };

        let parts = input.to_parts().unwrap();
        assert_eq!(parts.path, vec![("owner".to_string(), "octocat".to_string())]);
        assert_eq!(
            parts.query,
            vec![
                ("type".to_string(), "all".to_string()),
                ("labels".to_string(), "bug,ui".to_string()),
                ("per_page".to_string(), "50".to_string()),
            ]
        );
        assert_eq!(
            parts.body,
            Some(json!({ "title": "Found a bug", "draft": false }))
        );
    }

    #[test]
    fn unset_optionals_are_dropped() {
        let input = SearchInput {
            owner: "octocat".into(),
            ..Default::default()
        };
        let parts = input.to_parts().unwrap();
        assert!(parts.query.is_empty());
        assert!(parts.body.is_none());
    }

    #[test]
    fn unit_input_has_no_parts() {
        let parts = ().to_parts().unwrap();
        assert_eq!(parts, InputParts::default());
    }

    #[test]
    fn missing_path_value_is_an_error() {
        let value = json!({ "owner": null });
        let err = split_input(&value, &["owner"], &[], &[]).unwrap_err();
        assert!(matches!(err, InputError::MissingPathParam(name) if name == "owner"));
    }

    #[test]
    fn non_scalar_path_value_is_an_error() {
        let value = json!({ "owner": ["a", "b"] });
        let err = split_input(&value, &["owner"], &[], &[]).unwrap_err();
        assert!(matches!(err, InputError::NonScalarPathValue(_)));
    }

    #[test]
    fn object_query_value_is_an_error() {
        let value = json!({ "filter": { "a": 1 } });
        let err = split_input(&value, &[], &["filter"], &[]).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedQueryValue(_)));
    }

    #[test]
    fn undeclared_field_is_an_error() {
        let value = json!({ "owner": "octocat", "extra": 1 });
        let err = split_input(&value, &["owner"], &[], &[]).unwrap_err();
        assert!(matches!(err, InputError::UndeclaredField(name) if name == "extra"));
    }

    #[test]
    fn scalar_input_is_rejected() {
        let err = split_input(&42, &[], &[], &[]).unwrap_err();
        assert!(matches!(err, InputError::NotAnObject("a number")));
    }

    #[test]
    fn extract_params_in_order() {
        assert_eq!(extract_path_params("/"), Vec::<&str>::new());
        assert_eq!(extract_path_params("/{a}/{b}"), vec!["a", "b"]);
        assert_eq!(
            extract_path_params("/repos/{owner}/{repo}/git/ref/{ref}"),
            vec!["owner", "repo", "ref"]
        );
    }

    #[test]
    fn render_path_substitutes_every_placeholder() {
        let params = vec![
            ("owner".to_string(), "octocat".to_string()),
            ("repo".to_string(), "hello".to_string()),
            ("path".to_string(), "docs/README.md".to_string()),
        ];
        assert_eq!(
            render_path("/repos/{owner}/{repo}/contents/{path}", &params).unwrap(),
            "/repos/octocat/hello/contents/docs/README.md"
        );
    }

    #[test]
    fn render_path_escapes_reserved_characters() {
        let params = vec![
            ("name".to_string(), "a?b#c".to_string()),
            ("other".to_string(), "50% off {now}".to_string()),
        ];
        assert_eq!(
            render_path("/labels/{name}/{other}", &params).unwrap(),
            "/labels/a%3Fb%23c/50%25%20off%20%7Bnow%7D"
        );
    }

    #[test]
    fn render_path_keeps_slashes_and_unreserved() {
        let params = vec![
            ("ref".to_string(), "heads/release-1.x_~".to_string()),
            ("path".to_string(), "docs/été.md".to_string()),
        ];
        assert_eq!(
            render_path("/git/ref/{ref}/{path}", &params).unwrap(),
            "/git/ref/heads/release-1.x_~/docs/%C3%A9t%C3%A9.md"
        );
    }

    #[test]
    fn render_path_without_placeholders_is_unchanged() {
        assert_eq!(render_path("/rate_limit", &[]).unwrap(), "/rate_limit");
    }

    #[test]
    fn render_path_reports_missing_param() {
        let params = vec![("org".to_string(), "github".to_string())];
        let err = render_path("/orgs/{org}/teams/{team_slug}", &params).unwrap_err();
        assert!(matches!(err, InputError::MissingPathParam(name) if name == "team_slug"));
    }
}
