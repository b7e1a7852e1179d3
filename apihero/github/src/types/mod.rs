//! Domain shapes mirroring the upstream response schemas.
//!
//! These are plain serde structs. Fields the upstream marks as nullable are
//! `Option`; objects whose layout varies by context are kept as
//! `serde_json::Value`.

pub mod actions;
pub mod activity;
pub mod checks;
pub mod gists;
pub mod git;
pub mod issues;
pub mod misc;
pub mod orgs;
pub mod pulls;
pub mod reactions;
pub mod repos;
pub mod search;
pub mod teams;
pub mod users;

pub use actions::*;
pub use activity::*;
pub use checks::*;
pub use gists::*;
pub use git::*;
pub use issues::*;
pub use misc::*;
pub use orgs::*;
pub use pulls::*;
pub use reactions::*;
pub use repos::*;
pub use search::*;
pub use teams::*;
pub use users::*;
