//! apihero endpoint primitives
//!
//! This crate provides the building blocks for typed REST endpoint catalogs.
//! A catalog crate (such as `apihero-github`) uses them to declare one
//! `const` descriptor per upstream operation; a client runtime consumes the
//! descriptors to issue requests. Nothing in here performs I/O.
//!
//! ## Core Types
//!
//! - [`ApiHeroEndpoint`] - A typed descriptor: id, client tag, method, path and
//!   the input/output/header shapes as type parameters
//! - [`EndpointInput`] - Path/query/body partition of an input type, declared
//!   with [`endpoint_input!`]
//! - [`ResponseHeaders`] - Response header shapes ([`NoHeaders`],
//!   [`LinkHeader`], [`LocationHeader`])
//! - [`NoContent`], [`RawText`] - Output markers for non-JSON responses
//! - [`EndpointId`] - Validated `<resource>/<operation>` identifier
//! - [`RestMethod`] - HTTP methods
//! - [`EndpointMeta`], [`Catalog`] - Type-erased descriptions and their index
//!
//! ## Examples
//!
//! ```
//! use apihero_define::prelude::*;
//!
//! endpoint_input! {
//!     pub struct GetRepoInput {
//!         path { owner: String, repo: String }
//!     }
//! }
//!
//! pub const GET_REPO: ApiHeroEndpoint<GetRepoInput, serde_json::Value> =
//!     ApiHeroEndpoint::new("repos/get", "github", RestMethod::Get, "/repos/{owner}/{repo}");
//!
//! let request = GET_REPO
//!     .prepare(&GetRepoInput { owner: "rust-lang".into(), repo: "cargo".into() })
//!     .unwrap();
//! assert_eq!(request.path, "/repos/rust-lang/cargo");
//!
//! let catalog = Catalog::from_entries("github", vec![GET_REPO.meta()]).unwrap();
//! assert_eq!(catalog.resources(), vec!["repos"]);
//! ```

pub mod catalog;
pub mod endpoint;
pub mod endpoint_id;
pub mod headers;
pub mod input;
pub mod method;
pub mod prelude;
pub mod response;

// Re-export main types at crate root
pub use catalog::{Catalog, CatalogError, EndpointMeta};
pub use endpoint::{ApiHeroEndpoint, PreparedRequest};
pub use endpoint_id::{EndpointId, EndpointIdError};
pub use headers::{HeaderError, Link, LinkHeader, LinkRel, LocationHeader, NoHeaders, ResponseHeaders};
pub use input::{EndpointInput, InputError, InputParts};
pub use method::RestMethod;
pub use response::{NoContent, RawText};
