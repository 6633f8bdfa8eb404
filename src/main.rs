mod cli;

use encodeforge::config;
use encodeforge::transcode::{LocalPresetStore, ProviderRegistry, TranscodeProvider};
use encodeforge_common::{Job, Preset, TranscodeProfile};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PresetCommand};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "encodeforge=trace,encodeforge_db=debug,encodeforge_common=debug,reqwest=debug"
                .to_string()
        } else {
            "encodeforge=info,encodeforge_db=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = ProviderRegistry::with_builtin();

    match cli.command {
        Commands::Providers => {
            for name in registry.names() {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(&registry, path.as_deref())
        }
        Commands::Version => {
            println!("encodeforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        command => {
            let provider = build_provider(&registry, &cli.provider, cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_command(provider.as_ref(), command))
        }
    }
}

fn build_provider(
    registry: &ProviderRegistry,
    name: &str,
    config_path: Option<&Path>,
) -> Result<Arc<dyn TranscodeProvider>> {
    let config = config::load_config_or_default(config_path)?;
    let presets = LocalPresetStore::open(&config.database)
        .context("Failed to open preset database")?;
    let provider = registry
        .build(name, &config, presets)
        .with_context(|| format!("Failed to initialize provider {:?}", name))?;
    Ok(provider)
}

async fn run_command(provider: &dyn TranscodeProvider, command: Commands) -> Result<()> {
    match command {
        Commands::Capabilities => {
            let caps = provider.capabilities();
            println!("{}", serde_json::to_string_pretty(&caps)?);
        }
        Commands::Preset { action } => run_preset(provider, action)?,
        Commands::Transcode { profile, job_id } => {
            let profile: TranscodeProfile = read_json(&profile)?;
            let mut job = Job::new(job_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()));
            let status = provider.transcode(&mut job, &profile).await?;
            tracing::info!(
                "Job {} submitted to {} as {}",
                job.id,
                job.provider_name,
                job.provider_job_id
            );
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Commands::Status { provider_job_id } => {
            let job = Job {
                provider_name: provider.name().to_string(),
                provider_job_id,
                ..Default::default()
            };
            let status = provider.job_status(&job).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Commands::Cancel { provider_job_id } => {
            provider.cancel_job(&provider_job_id).await?;
            println!("Cancelled {}", provider_job_id);
        }
        Commands::Healthcheck => {
            provider.healthcheck().await?;
            println!("✓ {} is healthy", provider.name());
        }
        Commands::Providers | Commands::Validate { .. } | Commands::Version => {
            unreachable!("handled before the provider is built")
        }
    }

    Ok(())
}

fn run_preset(provider: &dyn TranscodeProvider, action: PresetCommand) -> Result<()> {
    match action {
        PresetCommand::Create { file } => {
            let preset: Preset = read_json(&file)?;
            let name = provider.create_preset(preset)?;
            println!("Created preset {}", name);
        }
        PresetCommand::Get { name } => {
            let preset = provider.get_preset(&name)?;
            println!("{}", serde_json::to_string_pretty(&preset)?);
        }
        PresetCommand::Delete { name } => {
            provider.delete_preset(&name)?;
            println!("Deleted preset {}", name);
        }
        PresetCommand::List => {
            for preset in provider.list_presets()? {
                println!("{}", preset.name);
            }
        }
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

fn validate_config(registry: &ProviderRegistry, path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            config::load_config(p)?
        }
        None => {
            println!("No config file specified, searching default locations");
            config::load_config_or_default(None)?
        }
    };

    println!("✓ Configuration is valid");
    match &config.zencoder {
        Some(zencoder) => {
            println!("  Zencoder API: {}", zencoder.api_url);
            println!(
                "  Destination: {}",
                if zencoder.destination.is_empty() { "not set" } else { "set" }
            );
            println!("  Timeout: {}s", zencoder.timeout_secs);
        }
        None => println!("  Zencoder: not configured"),
    }
    if let Some(p) = &config.database.path {
        println!("  Presets database: {:?}", p);
    }
    println!("  Providers: {}", registry.names().join(", "));

    Ok(())
}
