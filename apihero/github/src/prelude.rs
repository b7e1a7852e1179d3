//! Convenient re-exports for consumers of the GitHub catalog.

pub use crate::params::*;
pub use crate::types::*;
pub use crate::{CLIENT_ID, catalog, endpoints};
pub use apihero_define::prelude::*;
