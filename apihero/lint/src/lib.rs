//! Contract checks for apihero endpoint catalogs.
//!
//! The checks operate on [`EndpointMeta`](apihero_define::EndpointMeta)
//! values, so they apply to any catalog crate. The `apihero-lint` binary
//! runs them over the GitHub catalog and can list, inspect and export it.
//!
//! ## Examples
//!
//! ```
//! use apihero_lint::{lint, LintConfig};
//!
//! let report = lint(&apihero_github::endpoints(), &LintConfig::default());
//! assert!(!report.has_errors(false));
//! ```

pub mod config;
pub mod errors;
pub mod report;
pub mod rules;

pub use config::{Allow, DEFAULT_CONFIG_FILE, LintConfig};
pub use errors::LintError;
pub use report::{Manifest, ManifestEntry, OutputFormat, format_json, format_list, format_show, format_terminal};
pub use rules::{Finding, LintReport, Rule, Severity, all_rules, lint};
