//! apihero-lint - check, list and export the GitHub endpoint catalog

use std::path::PathBuf;
use std::process::ExitCode;

use apihero_define::Catalog;
use apihero_lint::{
    LintConfig, LintError, Manifest, OutputFormat, all_rules, format_json, format_list,
    format_show, format_terminal, lint,
};
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "apihero-lint")]
#[command(author, version, about = "Contract checks for the GitHub endpoint catalog", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file [default: ./apihero-lint.toml when present]
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every contract check over the catalog
    Check {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Fail on warnings too
        #[arg(long)]
        deny_warnings: bool,
    },

    /// List endpoints, optionally for one resource
    List {
        /// Resource name (e.g. "repos", "issues")
        #[arg(short, long)]
        resource: Option<String>,

        /// Only Link-paginated listings
        #[arg(long)]
        paginated: bool,
    },

    /// Show every detail of one endpoint
    Show {
        /// Endpoint id (e.g. "repos/get")
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Describe the available checks
    Rules,

    /// Write the catalog as a JSON manifest
    Export {
        /// Output file [default: stdout]
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,apihero_lint=info".to_string(),
            2 => "info,apihero_lint=debug,apihero_define=debug".to_string(),
            _ => "debug,apihero_lint=trace,apihero_define=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, LintError> {
    let mut config = LintConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            format,
            deny_warnings,
        } => {
            config.deny_warnings |= deny_warnings;
            debug!(%format, deny_warnings = config.deny_warnings, "running checks");

            let report = lint(&apihero_github::endpoints(), &config);
            match format {
                OutputFormat::Human => println!("{}", format_terminal(&report)),
                OutputFormat::Json => println!("{}", format_json(&report)?),
            }

            if report.has_errors(config.deny_warnings) {
                Ok(ExitCode::from(1))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }

        Commands::List {
            resource,
            paginated,
        } => {
            let catalog = apihero_github::catalog()?;
            let entries = catalog.iter().filter(|entry| {
                resource.as_deref().is_none_or(|r| entry.resource() == r)
                    && (!paginated || entry.is_paginated())
            });
            println!("{}", format_list(entries));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Show { id } => {
            let catalog = apihero_github::catalog()?;
            let entry = catalog
                .get(&id)
                .ok_or_else(|| LintError::UnknownEndpoint(id.clone()))?;
            println!("{}", format_show(entry));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Rules => {
            for rule in all_rules() {
                println!("{:<22} {:<8} {}", rule.to_string(), rule.severity().to_string(), rule.description());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Export { output } => {
            let catalog: Catalog = apihero_github::catalog()?;
            let json = Manifest::from_catalog(&catalog).to_json()?;
            match output {
                Some(path) => std::fs::write(&path, json).map_err(|source| LintError::Write {
                    path: path.display().to_string(),
                    source,
                })?,
                None => println!("{json}"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
