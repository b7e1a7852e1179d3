//! Structural contract checks over endpoint metadata.
//!
//! Every check works on [`EndpointMeta`] only, so any client crate's
//! descriptors can be linted without knowing their concrete types. Checks
//! run over the raw entry list rather than a [`Catalog`](apihero_define::Catalog)
//! so duplicate ids are reported instead of aborting the run.

use std::collections::{BTreeMap, HashMap};

use apihero_define::{EndpointId, EndpointMeta};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, IntoEnumIterator};
use tracing::{debug, info};

use crate::config::LintConfig;

/// A named contract check.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
    UniqueId,
    IdFormat,
    ClientId,
    PathParams,
    Pagination,
    BodyOnSafeMethod,
    Version,
}

impl Rule {
    pub fn severity(self) -> Severity {
        match self {
            Self::Pagination => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// One-line summary shown by `apihero-lint rules`.
    pub fn description(self) -> &'static str {
        match self {
            Self::UniqueId => "every endpoint id appears once",
            Self::IdFormat => "ids have the form <resource>/<operation> in camelCase",
            Self::ClientId => "every descriptor carries the expected client id",
            Self::PathParams => "path placeholders equal the declared path parameters",
            Self::Pagination => "Link-paginated listings accept page or cursor parameters",
            Self::BodyOnSafeMethod => "GET and HEAD descriptors declare no body parameters",
            Self::Version => "pinned versions parse as semver",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One violation of one rule by one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: Rule,
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn new(rule: Rule, id: &str, message: impl Into<String>) -> Self {
        Self {
            rule,
            id: id.to_string(),
            severity: rule.severity(),
            message: message.into(),
        }
    }
}

/// The outcome of a lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Number of descriptors checked.
    pub checked: usize,
    pub findings: Vec<Finding>,
    /// Findings suppressed by `allow` entries.
    pub suppressed: usize,
}

impl LintReport {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    /// Whether the run should fail. With `deny_warnings`, warnings count too.
    pub fn has_errors(&self, deny_warnings: bool) -> bool {
        if deny_warnings {
            !self.findings.is_empty()
        } else {
            self.errors().next().is_some()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Runs every rule over `entries`.
///
/// ## Examples
///
/// ```
/// use apihero_define::{ApiHeroEndpoint, RestMethod};
/// use apihero_lint::{lint, LintConfig};
///
/// const ZEN: ApiHeroEndpoint<(), String> =
///     ApiHeroEndpoint::new("meta/getZen", "github", RestMethod::Get, "/zen");
///
/// let report = lint(&[ZEN.meta()], &LintConfig::default());
/// assert_eq!(report.checked, 1);
/// assert!(report.is_clean());
/// ```
pub fn lint(entries: &[EndpointMeta], config: &LintConfig) -> LintReport {
    let mut findings = Vec::new();

    check_unique_ids(entries, &mut findings);
    check_client_id(entries, config, &mut findings);

    for entry in entries {
        check_id_format(entry, &mut findings);
        check_path_params(entry, &mut findings);
        check_pagination(entry, config, &mut findings);
        check_body_on_safe_method(entry, &mut findings);
        check_version(entry, &mut findings);
    }

    let total = findings.len();
    findings.retain(|finding| !config.is_allowed(finding.rule, &finding.id));
    findings.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.rule.cmp(&b.rule))
    });

    for finding in &findings {
        debug!(rule = %finding.rule, id = %finding.id, "{}", finding.message);
    }

    let report = LintReport {
        checked: entries.len(),
        suppressed: total - findings.len(),
        findings,
    };

    info!(
        checked = report.checked,
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        suppressed = report.suppressed,
        "lint complete"
    );

    report
}

/// Every rule, in reporting order.
pub fn all_rules() -> impl Iterator<Item = Rule> {
    Rule::iter()
}

fn check_unique_ids(entries: &[EndpointMeta], findings: &mut Vec<Finding>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.id).or_default() += 1;
    }

    let mut duplicates: Vec<_> = counts.into_iter().filter(|(_, count)| *count > 1).collect();
    duplicates.sort_unstable();

    for (id, count) in duplicates {
        findings.push(Finding::new(
            Rule::UniqueId,
            id,
            format!("id is declared {count} times"),
        ));
    }
}

fn check_id_format(entry: &EndpointMeta, findings: &mut Vec<Finding>) {
    if let Err(err) = EndpointId::parse(entry.id) {
        findings.push(Finding::new(Rule::IdFormat, entry.id, err.to_string()));
    }
}

fn check_client_id(entries: &[EndpointMeta], config: &LintConfig, findings: &mut Vec<Finding>) {
    // Without a configured id, the first descriptor sets the expectation.
    let Some(expected) = config
        .client_id
        .as_deref()
        .or_else(|| entries.first().map(|entry| entry.client_id))
    else {
        return;
    };

    for entry in entries.iter().filter(|entry| entry.client_id != expected) {
        findings.push(Finding::new(
            Rule::ClientId,
            entry.id,
            format!("client id is '{}', expected '{expected}'", entry.client_id),
        ));
    }
}

fn check_path_params(entry: &EndpointMeta, findings: &mut Vec<Finding>) {
    // (occurrences in the template, declarations)
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for placeholder in entry.template_params() {
        counts.entry(placeholder).or_default().0 += 1;
    }
    for &param in entry.path_params {
        counts.entry(param).or_default().1 += 1;
    }

    for (name, (in_template, declared)) in counts {
        let message = if declared == 0 {
            format!("placeholder '{{{name}}}' in '{}' has no path parameter", entry.path)
        } else if in_template == 0 {
            format!("path parameter '{name}' does not appear in '{}'", entry.path)
        } else if in_template > 1 || declared > 1 {
            format!(
                "'{name}' appears {in_template} times in '{}' and is declared {declared} times",
                entry.path
            )
        } else {
            continue;
        };
        findings.push(Finding::new(Rule::PathParams, entry.id, message));
    }
}

fn check_pagination(entry: &EndpointMeta, config: &LintConfig, findings: &mut Vec<Finding>) {
    if !entry.is_paginated() {
        return;
    }

    let declares = |name: &String| entry.query_params.contains(&name.as_str());
    let paged = !config.page_params.is_empty() && config.page_params.iter().all(declares);
    let cursor = config.cursor_params.iter().any(declares);

    if !paged && !cursor {
        findings.push(Finding::new(
            Rule::Pagination,
            entry.id,
            format!(
                "paginated by Link header but accepts neither [{}] nor any of [{}]",
                config.page_params.join(", "),
                config.cursor_params.join(", ")
            ),
        ));
    }
}

fn check_body_on_safe_method(entry: &EndpointMeta, findings: &mut Vec<Finding>) {
    if entry.method.is_safe() && entry.has_body() {
        findings.push(Finding::new(
            Rule::BodyOnSafeMethod,
            entry.id,
            format!(
                "{} declares body parameters [{}]",
                entry.method,
                entry.body_params.join(", ")
            ),
        ));
    }
}

fn check_version(entry: &EndpointMeta, findings: &mut Vec<Finding>) {
    if let (Some(version), Err(err)) = (entry.version, entry.parsed_version()) {
        findings.push(Finding::new(
            Rule::Version,
            entry.id,
            format!("version '{version}' is not semver: {err}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Allow;
    use apihero_define::RestMethod;
    use std::str::FromStr;

    fn meta(id: &'static str, method: RestMethod, path: &'static str) -> EndpointMeta {
        EndpointMeta {
            id,
            client_id: "github",
            version: None,
            method,
            path,
            path_params: &[],
            query_params: &[],
            body_params: &[],
            response_headers: &[],
            input_type: "()",
            output_type: "()",
        }
    }

    fn rules_of(report: &LintReport) -> Vec<Rule> {
        report.findings.iter().map(|f| f.rule).collect()
    }

    #[test]
    fn rule_names_are_kebab_case() {
        assert_eq!(Rule::BodyOnSafeMethod.to_string(), "body-on-safe-method");
        assert_eq!(Rule::from_str("unique-id").unwrap(), Rule::UniqueId);
        assert_eq!(all_rules().count(), 7);
        assert!(all_rules().all(|rule| !rule.description().is_empty()));
    }

    #[test]
    fn clean_entries_produce_no_findings() {
        let mut get = meta("repos/get", RestMethod::Get, "/repos/{owner}/{repo}");
        get.path_params = &["owner", "repo"];
        let mut list = meta("repos/listForOrg", RestMethod::Get, "/orgs/{org}/repos");
        list.path_params = &["org"];
        list.query_params = &["per_page", "page"];
        list.response_headers = &["link"];

        let report = lint(&[get, list], &LintConfig::default());
        assert!(report.is_clean(), "{:?}", report.findings);
        assert!(!report.has_errors(true));
    }

    #[test]
    fn duplicate_ids_are_reported_once() {
        let entries = [
            meta("meta/get", RestMethod::Get, "/meta"),
            meta("meta/get", RestMethod::Get, "/meta"),
            meta("meta/get", RestMethod::Get, "/meta"),
        ];
        let report = lint(&entries, &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::UniqueId]);
        assert!(report.findings[0].message.contains("3 times"));
    }

    #[test]
    fn malformed_ids_are_errors() {
        let report = lint(&[meta("GetZen", RestMethod::Get, "/zen")], &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::IdFormat]);
        assert!(report.has_errors(false));
    }

    #[test]
    fn client_id_follows_config_or_first_entry() {
        let mut other = meta("meta/getZen", RestMethod::Get, "/zen");
        other.client_id = "gitlab";
        let entries = [meta("meta/get", RestMethod::Get, "/meta"), other];

        let report = lint(&entries, &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::ClientId]);
        assert_eq!(report.findings[0].id, "meta/getZen");

        let config = LintConfig {
            client_id: Some("gitlab".into()),
            ..Default::default()
        };
        let report = lint(&entries, &config);
        assert_eq!(report.findings[0].id, "meta/get");
    }

    #[test]
    fn path_param_mismatches_are_reported_both_ways() {
        let mut entry = meta("issues/get", RestMethod::Get, "/repos/{owner}/{repo}/issues/{issue_number}");
        entry.path_params = &["owner", "repo", "number"];

        let report = lint(&[entry], &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::PathParams, Rule::PathParams]);
        let messages: Vec<_> = report.findings.iter().map(|f| f.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("{issue_number}")));
        assert!(messages.iter().any(|m| m.contains("'number'")));
    }

    #[test]
    fn repeated_path_params_are_reported() {
        let mut twice_in_template = meta("git/compare", RestMethod::Get, "/a/{x}/{x}");
        twice_in_template.path_params = &["x"];
        let mut declared_twice = meta("git/getTree", RestMethod::Get, "/a/{x}");
        declared_twice.path_params = &["x", "x"];

        let report = lint(&[twice_in_template, declared_twice], &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::PathParams, Rule::PathParams]);
        assert!(report.findings[0].message.contains("appears 2 times"));
        assert!(report.findings[1].message.contains("declared 2 times"));
    }

    #[test]
    fn pagination_accepts_pages_or_cursor() {
        let mut paged = meta("gists/list", RestMethod::Get, "/gists");
        paged.response_headers = &["link"];
        paged.query_params = &["per_page", "page"];

        let mut cursor = meta("users/list", RestMethod::Get, "/users");
        cursor.response_headers = &["link"];
        cursor.query_params = &["since", "per_page"];

        let mut bare = meta("orgs/list", RestMethod::Get, "/organizations");
        bare.response_headers = &["link"];
        bare.query_params = &["per_page"];

        let report = lint(&[paged, cursor, bare], &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::Pagination]);
        assert_eq!(report.findings[0].id, "orgs/list");
        assert_eq!(report.findings[0].severity, Severity::Warning);
        assert!(!report.has_errors(false));
        assert!(report.has_errors(true));
    }

    #[test]
    fn safe_methods_must_not_declare_bodies() {
        let mut get = meta("markdown/render", RestMethod::Get, "/markdown");
        get.body_params = &["text"];
        let mut delete = meta("users/deleteEmailForAuthenticatedUser", RestMethod::Delete, "/user/emails");
        delete.body_params = &["emails"];

        let report = lint(&[get, delete], &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::BodyOnSafeMethod]);
        assert!(report.findings[0].message.starts_with("GET"));
    }

    #[test]
    fn versions_must_be_semver() {
        let mut good = meta("meta/get", RestMethod::Get, "/meta");
        good.version = Some("1.2.0");
        let mut bad = meta("meta/getZen", RestMethod::Get, "/zen");
        bad.version = Some("2022-11-28");

        let report = lint(&[good, bad], &LintConfig::default());
        assert_eq!(rules_of(&report), vec![Rule::Version]);
        assert_eq!(report.findings[0].id, "meta/getZen");
    }

    #[test]
    fn allow_entries_suppress_findings() {
        let mut bare = meta("orgs/list", RestMethod::Get, "/organizations");
        bare.response_headers = &["link"];

        let config = LintConfig {
            allow: vec![Allow {
                rule: Rule::Pagination,
                id: "orgs/list".into(),
            }],
            ..Default::default()
        };

        let report = lint(&[bare], &config);
        assert!(report.is_clean());
        assert_eq!(report.suppressed, 1);
    }

    #[test]
    fn errors_sort_before_warnings() {
        let mut warning = meta("activity/listPublicEvents", RestMethod::Get, "/events");
        warning.response_headers = &["link"];
        let error = meta("zen", RestMethod::Get, "/zen");

        let report = lint(&[warning, error], &LintConfig::default());
        let severities: Vec<_> = report.findings.iter().map(|f| f.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }
}
