//! Re-exports needed to declare endpoint descriptors.
//!
//! ```
//! use apihero_define::prelude::*;
//!
//! endpoint_input! {
//!     pub struct DeleteGistInput {
//!         path { gist_id: String }
//!     }
//! }
//!
//! const DELETE: ApiHeroEndpoint<DeleteGistInput, NoContent> =
//!     ApiHeroEndpoint::new("gists/delete", "github", RestMethod::Delete, "/gists/{gist_id}");
//!
//! assert!(DELETE.method().is_idempotent());
//! ```

pub use crate::catalog::{Catalog, EndpointMeta};
pub use crate::endpoint::ApiHeroEndpoint;
pub use crate::endpoint_input;
pub use crate::headers::{LinkHeader, LocationHeader, NoHeaders, ResponseHeaders};
pub use crate::input::EndpointInput;
pub use crate::method::RestMethod;
pub use crate::response::{NoContent, RawText};
