use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use codearch_core::error::json_type_name;
use codearch_core::prompts::{build_extraction_prompt, system_prompt};
use codearch_core::registry::EntityRegistry;
use codearch_core::{
    validate_extraction, Config, GraphEntity, SchemaError, StatusPolicy, UnknownFieldPolicy,
    ValidationPolicy,
};
use serde_json::Value;
use color_eyre::eyre::{bail, Result};

mod input;

#[derive(Parser)]
#[command(name = "codearch")]
#[command(about = "Inspect and validate architecture knowledge graph entities", long_about = None)]
struct Cli {
    /// Config file (defaults to ./codearch.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List entity kinds
    Kinds,
    /// Show the fields of an entity kind
    Schema {
        /// Entity kind, e.g. Resource
        kind: String,
    },
    /// Validate candidate entities
    Validate {
        /// Validate a single object of this kind instead of an extraction document
        #[arg(short, long)]
        kind: Option<String>,

        /// Input file (.json, .yaml or .yml); reads JSON from stdin if omitted
        file: Option<PathBuf>,

        /// Only accept active, deprecated and planned as status
        #[arg(long)]
        strict_status: bool,

        /// Drop unrecognized fields instead of rejecting the entity
        #[arg(long)]
        ignore_unknown: bool,
    },
    /// Render the entity extraction prompt
    Prompt {
        /// Source text to embed; reads stdin if omitted
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Print the system prompt instead
        #[arg(long)]
        system: bool,
    },
    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Kinds => cmd_kinds(),
        Commands::Schema { kind } => cmd_schema(&kind)?,
        Commands::Validate {
            kind,
            file,
            strict_status,
            ignore_unknown,
        } => {
            let mut policy = load_config(cli.config.as_deref())?.validation;
            if strict_status {
                policy.status = StatusPolicy::Strict;
            }
            if ignore_unknown {
                policy.unknown_fields = UnknownFieldPolicy::Ignore;
            }
            cmd_validate(kind.as_deref(), file, &policy)?;
        }
        Commands::Prompt { source, system } => {
            let config = load_config(cli.config.as_deref())?;
            if system {
                println!("{}", system_prompt(&config.prompt));
            } else {
                let text = input::read_text(source.as_deref())?;
                println!("{}", build_extraction_prompt(&config.prompt, &text));
            }
        }
        Commands::Config => print!("{}", Config::default_config_string()),
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose {
        "codearch=debug,codearch_core=debug"
    } else {
        "codearch=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_kinds() {
    let registry = EntityRegistry::new();
    for schema in registry.schemas() {
        println!("{:<10} {}", schema.name(), schema.summary);
    }
}

fn cmd_schema(kind: &str) -> Result<()> {
    let schema = EntityRegistry::new().lookup(kind)?;

    println!("{} - {}", schema.name(), schema.summary);
    println!();
    println!("{:<18} {:<9} {:<9} DESCRIPTION", "FIELD", "REQUIRED", "DEFAULT");
    for spec in schema.fields() {
        let default = if spec.required {
            "-".to_string()
        } else {
            format!("\"{}\"", spec.default)
        };
        println!(
            "{:<18} {:<9} {:<9} {}",
            spec.name,
            if spec.required { "yes" } else { "no" },
            default,
            spec.description
        );
    }
    println!();
    println!(
        "Style: {} {} {}px",
        schema.style.color,
        schema.style.shape.as_str(),
        schema.style.size
    );

    Ok(())
}

fn cmd_validate(
    kind: Option<&str>,
    file: Option<PathBuf>,
    policy: &ValidationPolicy,
) -> Result<()> {
    let document = input::read_document(file.as_deref())?;

    match kind {
        Some(kind) => {
            let entity = validate_single(kind, &document, policy)?;
            println!("{}", serde_json::to_string_pretty(&entity)?);
        }
        None => {
            let report = validate_extraction(&document, policy)?;
            println!("{}", serde_json::to_string_pretty(&report.accepted)?);

            for (kind, name) in report.duplicate_names() {
                tracing::warn!("Duplicate {} name: {}", kind, name);
            }
            for rejected in &report.rejected {
                eprintln!(
                    "Rejected entity #{}{}: {}",
                    rejected.index,
                    rejected
                        .name
                        .as_deref()
                        .map(|name| format!(" ({})", name))
                        .unwrap_or_default(),
                    rejected.error
                );
            }

            if !report.is_clean() {
                bail!(
                    "{} of {} entities failed validation",
                    report.rejected.len(),
                    report.total()
                );
            }
        }
    }

    Ok(())
}

/// Validate one object as `kind`. Accepts the tagged output of a previous run.
fn validate_single(
    kind: &str,
    document: &Value,
    policy: &ValidationPolicy,
) -> Result<GraphEntity, SchemaError> {
    let fields = document.as_object().ok_or(SchemaError::NotAnObject {
        found: json_type_name(document),
    })?;
    EntityRegistry::new().validate_with(kind, fields, policy)
}
