//! Garden CLI
//!
//! Command-line interface for the notes viewer:
//! - Serve the site
//! - List and inspect notes
//! - Validate the note manifest
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use garden::api::{serve, AppState};
use garden::config::{generate_default_config, Config, LoggingConfig};
use garden::notes::NoteRegistry;

#[derive(Parser)]
#[command(name = "garden")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal notes viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Note manifest, overriding the configured one
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the notes over HTTP
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List all notes
    List {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show one note
    Show {
        /// Note slug
        slug: String,
        /// Print the rendered HTML body
        #[arg(long)]
        html: bool,
    },

    /// Validate the note manifest
    Check,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(manifest) = cli.manifest {
        config.notes.manifest = manifest;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }

            tracing::info!("Starting Garden v{}", env!("CARGO_PKG_VERSION"));
            let registry = load_registry(&config)?;
            if registry.is_empty() {
                tracing::warn!("Note manifest is empty; only the index will be served");
            }

            let state = AppState::new(Arc::new(registry), &config);
            serve(state, &config.api).await?;
        }

        Commands::List { format } => {
            let registry = load_registry(&config)?;
            let links = config.links.templates();

            match format.as_str() {
                "json" => {
                    let notes: Vec<serde_json::Value> = registry
                        .all()
                        .iter()
                        .map(|note| {
                            serde_json::json!({
                                "slug": note.slug(),
                                "title": note.title(),
                                "href": links.note_href(note.slug()),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&notes)?);
                }
                "table" => {
                    let width = registry
                        .all()
                        .iter()
                        .map(|note| note.slug().len())
                        .max()
                        .unwrap_or(4)
                        .max(4);
                    println!("{:<width$}  TITLE", "SLUG", width = width);
                    for note in registry.all() {
                        println!("{:<width$}  {}", note.slug(), note.title(), width = width);
                    }
                }
                other => anyhow::bail!("Unknown output format '{}' (expected table or json)", other),
            }
        }

        Commands::Show { slug, html } => {
            let registry = load_registry(&config)?;
            let links = config.links.templates();
            let note = registry
                .lookup(&slug)
                .with_context(|| format!("No note with slug '{}'", slug))?;

            if html {
                println!("{}", note.content().as_html());
            } else {
                println!("Title:  {}", note.title());
                println!("Slug:   {}", note.slug());
                println!("Path:   {}", links.note_href(note.slug()));
                println!("Source: {}", note.source_path());
                println!("Edit:   {}", links.edit_url(note.source_path(), note.slug()));
            }
        }

        Commands::Check => {
            let registry = load_registry(&config)?;
            let empty: Vec<&str> = registry
                .all()
                .iter()
                .filter(|note| note.content().is_empty())
                .map(|note| note.slug())
                .collect();

            for slug in &empty {
                tracing::warn!(slug = %slug, "Note has an empty body");
            }
            println!(
                "{}: {} notes OK{}",
                config.notes.manifest.display(),
                registry.len(),
                if empty.is_empty() {
                    String::new()
                } else {
                    format!(" ({} with empty bodies)", empty.len())
                }
            );
        }

        Commands::Config { output } => write_default_config(output.as_ref())?,
    }

    Ok(())
}

fn load_registry(config: &Config) -> anyhow::Result<NoteRegistry> {
    NoteRegistry::load(&config.notes.manifest).with_context(|| {
        format!(
            "Failed to load note manifest {}",
            config.notes.manifest.display()
        )
    })
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote default config to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Initialize tracing; `RUST_LOG` wins over the configured level
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("garden={},tower_http=debug", config.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
