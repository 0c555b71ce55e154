//! CLI for `schema-mock`.
//!
//! # Subcommands
//!
//! ```text
//! # Example value for one schema of an OpenAPI document
//! schema-mock mock --input openapi.yaml --pointer /components/schemas/Order
//!
//! # Flattened field paths, projecting selected attributes
//! schema-mock paths \
//!   --input openapi.yaml \
//!   --pointer /components/schemas/Order \
//!   --attributes type,description,required \
//!   --format yaml \
//!   --output target/order-paths.yaml
//! ```

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use schema_mock::{OutputFormat, ProjectConfig};
use serde::Serialize;

/// Deterministic example values and field-path maps from OpenAPI / JSON Schema.
#[derive(Parser)]
#[command(name = "schema-mock", version, about)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize a representative value for the schema.
    Mock(SourceArgs),

    /// Flatten the schema into a `path → attributes` map.
    Paths(PathsArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// Path to the schema document (YAML or JSON).
    #[arg(short, long)]
    input: PathBuf,

    /// Path to a project config YAML file.
    ///
    /// Provides the attribute list, schema pointer and output format.
    /// CLI flags override values from the config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON Pointer of the schema inside the document
    /// (e.g., `/components/schemas/Order`). Defaults to the whole document.
    #[arg(short, long)]
    pointer: Option<String>,

    /// Output format. Overrides `output` from the config file.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Emit compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PathsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Comma-separated attribute names to project into each entry.
    /// Overrides `attributes` from the config file.
    #[arg(short, long, value_delimiter = ',')]
    attributes: Vec<String>,
}

/// Effective settings after layering CLI flags over the project config.
#[derive(Debug)]
struct Settings {
    pointer: Option<String>,
    format: OutputFormat,
    pretty: bool,
    attributes: Vec<String>,
}

impl Settings {
    fn resolve(args: &SourceArgs, attributes: &[String], project: ProjectConfig) -> Self {
        Self {
            pointer: args.pointer.clone().or(project.pointer),
            format: args.format.unwrap_or(project.output),
            pretty: project.pretty && !args.compact,
            attributes: if attributes.is_empty() {
                project.attributes
            } else {
                attributes.to_vec()
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Mock(args) => run_mock(&args),
        Command::Paths(args) => run_paths(&args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_mock(args: &SourceArgs) -> anyhow::Result<()> {
    let settings = Settings::resolve(args, &[], load_project(args.config.as_deref())?);
    let doc = load_input(&args.input)?;
    let schema = schema_mock::select_schema(&doc, settings.pointer.as_deref())
        .with_context(|| format!("Failed to select schema in {}", args.input.display()))?;

    let example = schema_mock::synthesize(schema);
    emit(&example, &settings, args.output.as_deref())
}

fn run_paths(args: &PathsArgs) -> anyhow::Result<()> {
    let source = &args.source;
    let settings = Settings::resolve(
        source,
        &args.attributes,
        load_project(source.config.as_deref())?,
    );
    let doc = load_input(&source.input)?;
    let schema = schema_mock::select_schema(&doc, settings.pointer.as_deref())
        .with_context(|| format!("Failed to select schema in {}", source.input.display()))?;

    let paths = schema_mock::flatten(schema, &settings.attributes);
    eprintln!("Flattened {} paths", paths.len());
    emit(&paths, &settings, source.output.as_deref())
}

/// Load the project config (if provided), otherwise use defaults.
fn load_project(path: Option<&Path>) -> anyhow::Result<ProjectConfig> {
    match path {
        Some(path) => {
            eprintln!("Loading config: {}", path.display());
            ProjectConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => Ok(ProjectConfig::default()),
    }
}

fn load_input(path: &Path) -> anyhow::Result<serde_json::Value> {
    schema_mock::load_document(path)
        .with_context(|| format!("Failed to load schema: {}", path.display()))
}

/// Render `value` and write it to `output`, or stdout when absent.
fn emit<T: Serialize>(value: &T, settings: &Settings, output: Option<&Path>) -> anyhow::Result<()> {
    let mut rendered = schema_mock::render(value, settings.format, settings.pretty)
        .context("Failed to render output")?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
