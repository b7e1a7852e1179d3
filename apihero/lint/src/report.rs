//! Output formatting for lint reports, listings and the manifest export.
//!
//! Terminal formatting colors by severity:
//! - **RED + BOLD**: errors
//! - **ORANGE + BOLD**: warnings
//! - **GREEN**: a clean run

use apihero_define::catalog::short_type_name;
use apihero_define::{Catalog, EndpointMeta, RestMethod};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use strum::Display;

use crate::rules::{LintReport, Severity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Formats a report as pretty-printed JSON.
pub fn format_json(report: &LintReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Formats a report for the terminal, one line per finding plus a summary.
///
/// ## Examples
///
/// ```
/// use apihero_lint::{format_terminal, LintReport};
///
/// let output = format_terminal(&LintReport { checked: 3, ..Default::default() });
/// assert!(output.contains("3 endpoints"));
/// ```
pub fn format_terminal(report: &LintReport) -> String {
    let mut output = String::new();

    for finding in &report.findings {
        let label = match finding.severity {
            Severity::Error => "error".bold().red().to_string(),
            Severity::Warning => "warning".bold().truecolor(255, 165, 0).to_string(),
        };
        output.push_str(&format!(
            "{label}[{}] {}: {}\n",
            finding.rule,
            finding.id.bold(),
            finding.message
        ));
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    let summary = format!(
        "{} endpoints checked, {errors} errors, {warnings} warnings",
        report.checked
    );

    if report.is_clean() {
        output.push_str(&summary.green().to_string());
    } else {
        output.push('\n');
        output.push_str(&summary.bold().to_string());
    }

    if report.suppressed > 0 {
        output.push_str(&format!(" ({} allowed)", report.suppressed).dimmed().to_string());
    }

    output
}

fn method_label(method: RestMethod) -> String {
    let padded = format!("{:<6}", method.as_str());
    match method {
        RestMethod::Get | RestMethod::Head => padded.green().to_string(),
        RestMethod::Post => padded.blue().to_string(),
        RestMethod::Put | RestMethod::Patch => padded.yellow().to_string(),
        RestMethod::Delete => padded.red().to_string(),
    }
}

/// One line per endpoint: method, path, id.
pub fn format_list<'a>(entries: impl IntoIterator<Item = &'a EndpointMeta>) -> String {
    entries
        .into_iter()
        .map(|entry| {
            format!(
                "{} {}  {}",
                method_label(entry.method),
                entry.path,
                entry.id.dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every recorded detail of one endpoint.
pub fn format_show(entry: &EndpointMeta) -> String {
    let list = |names: &[&str]| {
        if names.is_empty() {
            "-".to_string()
        } else {
            names.join(", ")
        }
    };

    let mut lines = vec![
        format!("{}", entry.id.bold()),
        format!("  client:   {}", entry.client_id),
        format!("  route:    {} {}", method_label(entry.method), entry.path),
    ];
    if let Some(version) = entry.version {
        lines.push(format!("  version:  {version}"));
    }
    lines.push(format!("  path:     {}", list(entry.path_params)));
    lines.push(format!("  query:    {}", list(entry.query_params)));
    lines.push(format!("  body:     {}", list(entry.body_params)));
    lines.push(format!("  headers:  {}", list(entry.response_headers)));
    lines.push(format!("  input:    {}", short_type_name(entry.input_type)));
    lines.push(format!("  output:   {}", short_type_name(entry.output_type)));
    if entry.is_paginated() {
        lines.push(format!("  {}", "paginated".cyan()));
    }

    lines.join("\n")
}

/// Machine-readable description of a whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub client_id: &'static str,
    pub count: usize,
    pub resources: Vec<&'static str>,
    pub endpoints: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub id: &'static str,
    pub method: RestMethod,
    pub path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
    pub path_params: &'static [&'static str],
    pub query_params: &'static [&'static str],
    pub body_params: &'static [&'static str],
    pub response_headers: &'static [&'static str],
    pub input: String,
    pub output: String,
}

impl From<&EndpointMeta> for ManifestEntry {
    fn from(meta: &EndpointMeta) -> Self {
        Self {
            id: meta.id,
            method: meta.method,
            path: meta.path,
            version: meta.version,
            path_params: meta.path_params,
            query_params: meta.query_params,
            body_params: meta.body_params,
            response_headers: meta.response_headers,
            input: short_type_name(meta.input_type),
            output: short_type_name(meta.output_type),
        }
    }
}

impl Manifest {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            client_id: catalog.client_id(),
            count: catalog.len(),
            resources: catalog.resources(),
            endpoints: catalog.iter().map(ManifestEntry::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
