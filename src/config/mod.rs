mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Preset database file name used when `database.path` is not set.
pub const DEFAULT_DATABASE_FILE: &str = "encodeforge.db";

/// Load configuration from a TOML file
///
/// Without a `database.path`, presets go to [`DEFAULT_DATABASE_FILE`] next to
/// the config file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.database.path.is_none() {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => working_dir(),
        };
        config.database.path = Some(dir.join(DEFAULT_DATABASE_FILE));
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./encodeforge.toml",
        "~/.config/encodeforge/config.toml",
        "/etc/encodeforge/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    let mut config = Config::default();
    config.database.path = Some(working_dir().join(DEFAULT_DATABASE_FILE));
    Ok(config)
}

fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_default()
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if let Some(zencoder) = &config.zencoder {
        if zencoder.timeout_secs == 0 {
            anyhow::bail!("Zencoder timeout_secs cannot be 0");
        }
        if zencoder.destination.is_empty() {
            tracing::warn!("Zencoder destination is empty; transcode requests will fail");
        }
    }

    if let Some(path) = &config.database.path {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                anyhow::bail!("Database directory does not exist: {:?}", parent);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_zencoder_section_with_defaults() {
        let file = write_config(
            r#"
            [zencoder]
            api_key = "api-key-here"
            destination = "s3://key:secret@bucket/out/"
            "#,
        );
        let config = load_config(file.path()).unwrap();
        let zencoder = config.zencoder.unwrap();
        assert_eq!(zencoder.api_key, "api-key-here");
        assert_eq!(zencoder.destination, "s3://key:secret@bucket/out/");
        assert_eq!(zencoder.api_url, "https://app.zencoder.com/api/v2");
        assert_eq!(zencoder.timeout_secs, 30);
        assert_eq!(
            config.database.path,
            Some(file.path().parent().unwrap().join(DEFAULT_DATABASE_FILE))
        );
    }

    #[test]
    fn explicit_database_path_is_kept() {
        let file = write_config(
            r#"
            [database]
            path = "presets.sqlite"
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.database.path, Some(PathBuf::from("presets.sqlite")));
    }

    #[test]
    fn empty_file_is_default_config() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert!(config.zencoder.is_none());
    }

    #[test]
    fn rejects_zero_timeout() {
        let file = write_config(
            r#"
            [zencoder]
            api_key = "k"
            timeout_secs = 0
            "#,
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn rejects_missing_database_directory() {
        let file = write_config(
            r#"
            [database]
            path = "/definitely/not/here/presets.sqlite"
            "#,
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn rejects_unparsable_file() {
        let file = write_config("[zencoder\napi_key =");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(load_config_or_default(Some(Path::new("/no/such/encodeforge.toml"))).is_err());
    }
}
