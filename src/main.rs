//! CLI entry point and command handlers for stratum.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use stratum::formatters;
use stratum::loader;
use stratum::model::RelationshipType;
use stratum::validation::relationship_info;

#[derive(Parser)]
#[command(name = "stratum")]
#[command(version)]
#[command(about = "Architecture models as code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a models directory and print a summary
    Load {
        /// Models directory with business/, application/ and technology/ subdirectories
        dir: PathBuf,
    },
    /// Load a models directory and validate the merged architecture
    Validate {
        /// Models directory with business/, application/ and technology/ subdirectories
        dir: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the elements of one layer
    List {
        /// Models directory with business/, application/ and technology/ subdirectories
        dir: PathBuf,
        /// Layer to list (business, application, technology)
        #[arg(long, default_value = "business")]
        layer: String,
    },
    /// Describe a relationship type (category, strength, semantics)
    Info {
        /// Relationship type, e.g. composition or serving
        relationship_type: String,
    },
    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Load { dir } => cmd_load(&dir),
        Commands::Validate { dir, json } => cmd_validate(&dir, json),
        Commands::List { dir, layer } => cmd_list(&dir, &layer),
        Commands::Info { relationship_type } => cmd_info(&relationship_type),
        Commands::Version => cmd_version(),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn cmd_load(dir: &std::path::Path) -> Result<()> {
    let outcome = loader::load_architecture(dir)?;
    println!("{}", formatters::format_load_summary(&outcome.architecture, &outcome.skipped));
    Ok(())
}

fn cmd_validate(dir: &std::path::Path, json: bool) -> Result<()> {
    let outcome = loader::load_architecture(dir)?;
    let report = loader::validate_loaded(&outcome.architecture);

    if json {
        println!("{}", serde_json::to_string_pretty(&formatters::validation_report_json(&report))?);
    } else {
        for file in &outcome.skipped {
            eprintln!("{} skipped {}: {}", "warning:".yellow(), file.path.display(), file.reason);
        }
        println!("{}", formatters::format_validation_report(&report));
    }

    // Findings are advisory for loading, but the exit code reflects them
    if !report.is_valid() {
        process::exit(1);
    }
    Ok(())
}

fn cmd_list(dir: &std::path::Path, layer: &str) -> Result<()> {
    let layer = layer.to_lowercase();
    if !["business", "application", "technology"].contains(&layer.as_str()) {
        anyhow::bail!("unknown layer '{layer}' (expected business, application or technology)");
    }

    let outcome = loader::load_architecture(dir)?;
    println!("{}", format!("{layer} layer").bold());
    println!("{}", formatters::format_layer_listing(&outcome.architecture, &layer));
    Ok(())
}

fn cmd_info(raw: &str) -> Result<()> {
    let Some(relationship_type) = RelationshipType::parse(raw) else {
        anyhow::bail!("unknown relationship type '{raw}'");
    };

    let info = relationship_info(relationship_type);
    println!("{}", info.name.bold());
    println!("{}", info.description);
    println!();
    println!("category:    {:?}", info.category);
    println!("strength:    {}", info.strength);
    println!("directional: {}", info.directional);
    println!();
    println!("{}", info.semantics.dimmed());
    Ok(())
}

fn cmd_version() -> Result<()> {
    const GIT_SHA: &str = env!("GIT_SHA");
    const BUILD_DATE: &str = env!("BUILD_DATE");
    println!("stratum {}", env!("CARGO_PKG_VERSION"));
    println!("commit: {}", GIT_SHA);
    println!("built: {}", BUILD_DATE);
    Ok(())
}
