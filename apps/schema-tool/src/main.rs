//! CLI tool for record schema inspection.
//!
//! Provides commands for:
//! - Describing a schema definition file
//! - Merging two schemas as a join would
//! - Resolving field names and comparing schemas

mod commands;
mod definition;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use schema_core::{ByteSizeMode, SchemaConfig};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the schema tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the fields, field count and record size of a schema
    Inspect {
        /// Schema definition file (JSON)
        file: PathBuf,

        /// Record size computation: per-field or first-field-repeated
        #[arg(long, default_value_t = ByteSizeMode::PerField)]
        size_mode: ByteSizeMode,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the schema formed by LEFT followed by RIGHT
    Merge {
        left: PathBuf,
        right: PathBuf,

        /// Record size computation: per-field or first-field-repeated
        #[arg(long, default_value_t = ByteSizeMode::PerField)]
        size_mode: ByteSizeMode,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the index of the first field called NAME
    Lookup { file: PathBuf, name: String },
    /// Report whether two schemas have the same field types in order
    Compare { left: PathBuf, right: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so command output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = match args.command {
        Command::Inspect {
            file,
            size_mode,
            json,
        } => {
            let config = SchemaConfig {
                byte_size_mode: size_mode,
            };
            commands::inspect(&file, &config, json)?
        }
        Command::Merge {
            left,
            right,
            size_mode,
            json,
        } => {
            let config = SchemaConfig {
                byte_size_mode: size_mode,
            };
            commands::merge(&left, &right, &config, json)?
        }
        Command::Lookup { file, name } => commands::lookup(&file, &name)?,
        Command::Compare { left, right } => commands::compare(&left, &right)?,
    };

    println!("{}", output);
    Ok(())
}
