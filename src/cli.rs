use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "encodeforge")]
#[command(author, version, about = "Transcode jobs on remote encoding services")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Provider to talk to
    #[arg(short, long, global = true, default_value = "zencoder")]
    pub provider: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered providers
    Providers,

    /// Show the formats and destinations the provider supports
    Capabilities,

    /// Manage local presets
    Preset {
        #[command(subcommand)]
        action: PresetCommand,
    },

    /// Submit a transcode profile as a new job
    Transcode {
        /// JSON file holding the transcode profile
        #[arg(required = true)]
        profile: PathBuf,

        /// Job identifier (a random UUID if not specified)
        #[arg(long)]
        job_id: Option<String>,
    },

    /// Show the status of a submitted job
    Status {
        /// Identifier the provider assigned to the job
        provider_job_id: String,
    },

    /// Cancel a submitted job
    Cancel {
        /// Identifier the provider assigned to the job
        provider_job_id: String,
    },

    /// Check that the provider is reachable with the configured credentials
    Healthcheck,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
pub enum PresetCommand {
    /// Store a preset read from a JSON file
    Create {
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Print a stored preset as JSON
    Get { name: String },

    /// Remove a stored preset
    Delete { name: String },

    /// List stored preset names
    List,
}
