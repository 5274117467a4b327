//! dkg CLI - Command-line driver
//!
//! Usage:
//!   dkg extract <path>
//!   dkg annotate <path>
//!
//! Reads plain UTF-8 text (from a file or stdin when no path is given), runs
//! the pipeline against the configured annotation service, and prints JSON.
//! Document format detection and graph rendering are owned by other tools;
//! this binary is a demonstration driver only.

use std::io::Read;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dkg_annotate::{Annotator, HttpAnnotator};
use dkg_core::{AppConfig, Document};
use dkg_pipeline::GraphPipeline;

#[derive(Parser)]
#[command(name = "dkg")]
#[command(about = "Document Knowledge Graph CLI")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (environment variables apply otherwise)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a knowledge graph from a text document
    Extract {
        /// Path to a plain-text file; stdin when omitted
        path: Option<String>,
    },
    /// Dump the raw linguistic annotation for a text document
    Annotate {
        /// Path to a plain-text file; stdin when omitted
        path: Option<String>,
    },
}

fn read_input(path: Option<&str>) -> anyhow::Result<(String, Option<String>)> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok((text, Some(path.to_string())))
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok((text, None))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let annotator = Arc::new(HttpAnnotator::new(&config.annotator)?);

    match cli.command {
        Commands::Extract { path } => {
            let (text, title) = read_input(path.as_deref())?;
            let mut document = Document::new(text);
            if let Some(title) = title {
                document = document.with_title(title);
            }

            let pipeline = GraphPipeline::new(annotator);
            let output = pipeline.process(&document).await?;

            let report = serde_json::json!({
                "document_id": document.id,
                "entities": output.extraction.entities,
                "relationships": output.extraction.relationships,
                "graph": output.graph.export(),
                "processing_time_ms": output.processing_time_ms,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Annotate { path } => {
            let (text, _) = read_input(path.as_deref())?;
            let annotated = annotator.annotate(&text).await?;
            println!("{}", serde_json::to_string_pretty(&annotated)?);
        }
    }

    Ok(())
}
