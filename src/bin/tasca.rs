//! tasca command line interface
//!
//! Renders and checks the JSON-LD embedded in the site's pages.
//!
//! # Usage
//!
//! ```bash
//! # Render a page bundle (JSON or YAML) to JSON-LD
//! tasca render --file bundles/casa-pepe.yaml --script
//!
//! # Check a JSON-LD document before publishing
//! tasca validate --file out/casa-pepe.json
//!
//! # Fetch content from Sanity and render it
//! SANITY_PROJECT_ID=abc123 tasca fetch venue madrid casa-pepe
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides the default `tasca=info`.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tasca::jsonld::{validate, SchemaBuilder, SchemaObject};
use tasca::pages::{self, PageBundle};
use tasca::script::{script_tag, script_tag_pretty};
use tasca::{AppConfig, SanityClient};

#[derive(Parser)]
#[command(name = "tasca")]
#[command(version)]
#[command(about = "Structured data tooling for the tasca restaurant guide")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page bundle to JSON-LD
    Render {
        /// Bundle file (.json, .yaml or .yml)
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate a JSON-LD document
    Validate {
        /// Document file (.json, .yaml or .yml)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Fetch a page's content from Sanity and render it
    Fetch {
        #[command(subcommand)]
        target: FetchTarget,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand)]
enum FetchTarget {
    /// Venue detail page
    Venue { city: String, slug: String },
    /// Review detail page
    Review { slug: String },
    /// Blog post
    Post { slug: String },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Wrap the document in a <script type="application/ld+json"> tag
    #[arg(long, global = true)]
    script: bool,

    /// Indent the output
    #[arg(long, global = true)]
    pretty: bool,
}

// =============================================================================
// MAIN
// =============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasca=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { file, output } => cmd_render(&file, &output),
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Fetch { target, output } => cmd_fetch(target, &output).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_render(file: &Path, output: &OutputArgs) -> Result<ExitCode> {
    let bundle: PageBundle = read_document(file)?;
    let builder = site_builder()?;
    tracing::info!(page = bundle.kind(), file = %file.display(), "Rendering");

    emit(bundle.render(&builder)?, output)
}

fn cmd_validate(file: &Path) -> Result<ExitCode> {
    let value: serde_json::Value = read_document(file)?;
    let document = SchemaObject::from_value(value)
        .ok_or_else(|| anyhow!("{} is not a JSON object", file.display()))?;

    let result = validate(&document);

    for error in &result.errors {
        println!("{} [{}] {}", "error".red().bold(), error.code(), error);
    }
    for warning in &result.warnings {
        println!("{} [{}] {}", "warning".yellow().bold(), warning.code(), warning);
    }

    if result.is_valid() {
        println!(
            "{} {} ({} warning(s))",
            "OK".green().bold(),
            file.display(),
            result.warnings.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} error(s), {} warning(s)",
            "FAILED".red().bold(),
            result.errors.len(),
            result.warnings.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

async fn cmd_fetch(target: FetchTarget, output: &OutputArgs) -> Result<ExitCode> {
    let config = AppConfig::from_env()?;
    let client = SanityClient::new(&config.sanity)?;
    let builder = SchemaBuilder::new(config.site);

    let bundle = match target {
        FetchTarget::Venue { city, slug } => pages::load_venue(&client, &city, &slug).await?,
        FetchTarget::Review { slug } => pages::load_review(&client, &slug).await?,
        FetchTarget::Post { slug } => pages::load_post(&client, &slug).await?,
    };

    emit(bundle.render(&builder)?, output)
}

// =============================================================================
// HELPERS
// =============================================================================

fn site_builder() -> Result<SchemaBuilder> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    Ok(SchemaBuilder::new(config.site))
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid YAML in {}", path.display())),
        _ => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in {}", path.display())),
    }
}

fn emit(document: Option<SchemaObject>, output: &OutputArgs) -> Result<ExitCode> {
    let Some(document) = document else {
        eprintln!("{} page has no structured data", "note".cyan());
        return Ok(ExitCode::SUCCESS);
    };

    let rendered = match (output.script, output.pretty) {
        (true, true) => script_tag_pretty(&document)?,
        (true, false) => script_tag(&document)?,
        (false, true) => serde_json::to_string_pretty(&document)?,
        (false, false) => serde_json::to_string(&document)?,
    };
    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}
