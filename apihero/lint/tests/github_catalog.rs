//! Lints the real GitHub catalog.

use apihero_lint::{LintConfig, Manifest, Rule, lint};

#[test]
fn github_catalog_passes_every_check() {
    let entries = apihero_github::endpoints();
    let report = lint(&entries, &LintConfig::default());

    assert_eq!(report.checked, entries.len());
    assert!(report.is_clean(), "unexpected findings: {:#?}", report.findings);
    assert!(!report.has_errors(true));
}

#[test]
fn wrong_client_id_flags_every_descriptor() {
    let entries = apihero_github::endpoints();
    let config = LintConfig {
        client_id: Some("gitlab".into()),
        ..Default::default()
    };

    let report = lint(&entries, &config);
    assert_eq!(report.findings.len(), entries.len());
    assert!(report.findings.iter().all(|f| f.rule == Rule::ClientId));
}

#[test]
fn stricter_page_params_are_allowed_through_config() {
    let mut config = LintConfig::from_toml_str(
        r#"
        page_params = ["per_page", "page", "direction"]
        cursor_params = []
        "#,
    )
    .unwrap();

    let entries = apihero_github::endpoints();
    let report = lint(&entries, &config);
    assert!(report.errors().next().is_none());
    assert!(report.warnings().count() > 0);

    config.deny_warnings = true;
    assert!(report.has_errors(config.deny_warnings));

    let wildcard = LintConfig::from_toml_str(
        r#"
        page_params = ["per_page", "page", "direction"]
        cursor_params = []

        [[allow]]
        rule = "pagination"
        id = "*"
        "#,
    )
    .unwrap();
    let report = lint(&entries, &wildcard);
    assert!(report.is_clean());
    assert!(report.suppressed > 0);
}

#[test]
fn config_file_on_disk_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("apihero-lint.toml");
    std::fs::write(&path, "client_id = \"github\"\ndeny_warnings = true\n").unwrap();

    let config = LintConfig::load_or_default(Some(&path)).unwrap();
    let report = lint(&apihero_github::endpoints(), &config);
    assert!(!report.has_errors(config.deny_warnings));
}

#[test]
fn manifest_covers_the_catalog() {
    let catalog = apihero_github::catalog().unwrap();
    let manifest = Manifest::from_catalog(&catalog);

    assert_eq!(manifest.client_id, "github");
    assert_eq!(manifest.count, catalog.len());
    assert!(manifest.resources.contains(&"repos"));

    let get = manifest.endpoints.iter().find(|e| e.id == "repos/get").unwrap();
    assert_eq!(get.path, "/repos/{owner}/{repo}");
    assert_eq!(get.output, "Repository");
}
