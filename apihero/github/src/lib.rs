//! GitHub REST API endpoint catalog
//!
//! One `const` [`ApiHeroEndpoint`](apihero_define::ApiHeroEndpoint) per
//! upstream operation, grouped by resource. Each descriptor carries its id
//! (`"<resource>/<operation>"`), the [`CLIENT_ID`] tag, the HTTP method and
//! path template; the input, output and response-header shapes are carried
//! by its type.
//!
//! ## Modules
//!
//! - [`actions`] - Workflows, runs, jobs, artifacts, secrets and runners
//! - [`activity`] - Events, notifications, stars and watching
//! - [`checks`] - Check runs and check suites
//! - [`gists`] - Gists, gist comments, forks and stars
//! - [`git`] - Blobs, commits, refs, tags and trees
//! - [`issues`] - Issues, comments, labels, milestones and assignees
//! - [`misc`] - Rate limit, meta, emojis, markdown, licenses, codes of conduct, gitignore
//! - [`orgs`] - Organizations, members, invitations and hooks
//! - [`pulls`] - Pull requests, reviews and review comments
//! - [`reactions`] - Reactions on issues and comments
//! - [`repos`] - Repositories and everything directly beneath them
//! - [`search`] - Code, commit, issue, label, repository, topic and user search
//! - [`teams`] - Teams, team members and team repositories
//! - [`users`] - Users, followers, emails and keys
//!
//! ## Examples
//!
//! ```rust
//! use apihero_github::repos;
//! use apihero_github::params::RepoInput;
//!
//! let request = repos::GET
//!     .prepare(&RepoInput { owner: "rust-lang".into(), repo: "rust".into() })
//!     .unwrap();
//!
//! assert_eq!(repos::GET.id(), "repos/get");
//! assert_eq!(request.path, "/repos/rust-lang/rust");
//!
//! let catalog = apihero_github::catalog().unwrap();
//! assert!(catalog.get("pulls/merge").is_some());
//! ```

use apihero_define::{ApiHeroEndpoint, Catalog, CatalogError, EndpointMeta, RestMethod};
use tracing::debug;

pub mod actions;
pub mod activity;
pub mod checks;
pub mod gists;
pub mod git;
pub mod issues;
pub mod misc;
pub mod orgs;
pub mod params;
pub mod prelude;
pub mod pulls;
pub mod reactions;
pub mod repos;
pub mod search;
pub mod teams;
pub mod types;
pub mod users;

/// Routing tag carried by every descriptor in this crate.
pub const CLIENT_ID: &str = "github";

/// Shorthand used by the resource modules to build descriptors for this client.
pub(crate) const fn endpoint<I, O, H>(
    id: &'static str,
    method: RestMethod,
    path: &'static str,
) -> ApiHeroEndpoint<I, O, H> {
    ApiHeroEndpoint::new(id, CLIENT_ID, method, path)
}

/// Metadata of every descriptor, module by module.
pub fn endpoints() -> Vec<EndpointMeta> {
    let mut all = Vec::new();
    all.extend(actions::endpoints());
    all.extend(activity::endpoints());
    all.extend(checks::endpoints());
    all.extend(gists::endpoints());
    all.extend(git::endpoints());
    all.extend(issues::endpoints());
    all.extend(misc::endpoints());
    all.extend(orgs::endpoints());
    all.extend(pulls::endpoints());
    all.extend(reactions::endpoints());
    all.extend(repos::endpoints());
    all.extend(search::endpoints());
    all.extend(teams::endpoints());
    all.extend(users::endpoints());
    all
}

/// Builds the indexed GitHub catalog.
///
/// Fails if two descriptors share an id or an id is malformed.
pub fn catalog() -> Result<Catalog, CatalogError> {
    let entries = endpoints();
    debug!(count = entries.len(), "collected github endpoint descriptors");
    Catalog::from_entries(CLIENT_ID, entries)
}
