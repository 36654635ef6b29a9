//! oxide-field CLI
//!
//! Renders form fields from JSON configuration files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_field::config::FieldConfig;
use oxide_field::{FieldType, FormField, ValidationErrors};

/// Render Bootstrap form fields from the command line.
#[derive(Parser)]
#[command(name = "oxide-field")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one field to stdout.
    Render {
        /// Input name.
        name: String,

        /// Field configuration file (JSON).
        #[arg(short, long, env = "OXIDE_FIELD_CONFIG")]
        config: Option<PathBuf>,

        /// Label text (derived from the name if omitted).
        #[arg(short, long, default_value = "")]
        label: String,

        /// Field type, overriding the configuration.
        #[arg(short = 't', long = "type")]
        field_type: Option<FieldType>,

        /// Validation errors file (JSON object of field -> messages).
        #[arg(short, long)]
        errors: Option<PathBuf>,
    },

    /// List the supported field types.
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            name,
            config,
            label,
            field_type,
            errors,
        } => {
            let config = match config {
                Some(path) => FieldConfig::from_path(path)?,
                None => FieldConfig::new(),
            };

            let mut field = FormField::from_config(name, label, config);
            if let Some(field_type) = field_type {
                field = field.type_(field_type);
            }

            let html = match errors {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)?;
                    let errors: ValidationErrors = serde_json::from_str(&json)?;
                    debug!("Loaded errors for {} fields", errors.len());
                    field.to_html_with(&errors)
                }
                None => field.to_html(),
            };

            println!("{html}");
        }

        Commands::Types => {
            info!("Supported field types:");
            for field_type in FieldType::ALL {
                println!("  {field_type}");
            }
        }
    }

    Ok(())
}
