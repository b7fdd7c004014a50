//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `/etc/hostcli/config.toml`. A missing file is fine and
//! leaves the defaults in place; a malformed one is an error.

use log::{LevelFilter, debug, info};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct HostcliConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub require_root: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    pub data_file: Option<String>,
    pub hosts_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "/etc/hostcli/config.toml";
pub const DEFAULT_DATA_FILE: &str = "/etc/hostcli/data.txt";
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";
pub const DEFAULT_LOG_FILE: &str = "/etc/hostcli/hostcli.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub hosts_file: PathBuf,
    /// None = logging disabled
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub require_root: bool,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub hosts_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
    pub skip_root_check: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level {0:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Load config from `path`, or the defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<HostcliConfig, ConfigError> {
    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(HostcliConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: HostcliConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Fails only on a log level that does not name a `LevelFilter`.
pub fn resolve(
    config: &HostcliConfig,
    cli: &CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &HostcliConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Data file: CLI → env → config → default
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| env("HOSTCLI_DATA_FILE").map(PathBuf::from))
        .or_else(|| config.storage.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let hosts_file = cli
        .hosts_file
        .clone()
        .or_else(|| env("HOSTCLI_HOSTS_FILE").map(PathBuf::from))
        .or_else(|| config.storage.hosts_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOSTS_FILE));

    // An empty log file setting turns logging off
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("HOSTCLI_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let log_file = (!log_file.as_os_str().is_empty()).then_some(log_file);

    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        let name = env("HOSTCLI_LOG_LEVEL")
            .or_else(|| config.general.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        name.parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(name.clone()))?
    };

    let require_root = !cli.skip_root_check && config.general.require_root.unwrap_or(true);

    Ok(ResolvedConfig {
        data_file,
        hosts_file,
        log_file,
        log_level,
        require_root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&HostcliConfig::default(), &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(resolved.hosts_file, PathBuf::from(DEFAULT_HOSTS_FILE));
        assert_eq!(resolved.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert!(resolved.require_root);
    }

    #[test]
    fn test_config_values_override_defaults() {
        let config = HostcliConfig {
            general: GeneralConfig {
                log_file: Some("/tmp/h.log".to_string()),
                log_level: Some("warn".to_string()),
                require_root: Some(false),
            },
            storage: StorageConfig {
                data_file: Some("/tmp/data.txt".to_string()),
                hosts_file: Some("/tmp/hosts".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.data_file, PathBuf::from("/tmp/data.txt"));
        assert_eq!(resolved.hosts_file, PathBuf::from("/tmp/hosts"));
        assert_eq!(resolved.log_file, Some(PathBuf::from("/tmp/h.log")));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert!(!resolved.require_root);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = HostcliConfig {
            storage: StorageConfig {
                data_file: Some("/config/data.txt".to_string()),
                hosts_file: Some("/config/hosts".to_string()),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("HOSTCLI_DATA_FILE", "/env/data.txt"),
            ("HOSTCLI_HOSTS_FILE", "/env/hosts"),
        ]);
        let cli = CliOverrides {
            hosts_file: Some(PathBuf::from("/cli/hosts")),
            ..Default::default()
        };

        let resolved =
            resolve_with_env(&config, &cli, |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(resolved.data_file, PathBuf::from("/env/data.txt"));
        assert_eq!(resolved.hosts_file, PathBuf::from("/cli/hosts"));
    }

    #[test]
    fn test_empty_log_file_disables_logging() {
        let cli = CliOverrides {
            log_file: Some(PathBuf::new()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&HostcliConfig::default(), &cli, no_env).unwrap();
        assert_eq!(resolved.log_file, None);
    }

    #[test]
    fn test_cli_flags_win() {
        let config = HostcliConfig {
            general: GeneralConfig {
                log_level: Some("error".to_string()),
                require_root: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            verbose: true,
            skip_root_check: true,
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, no_env).unwrap();
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(!resolved.require_root);
    }

    #[test]
    fn test_misspelled_log_level_is_rejected() {
        let config = HostcliConfig {
            general: GeneralConfig {
                log_level: Some("verbose".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = resolve_with_env(&config, &CliOverrides::default(), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref name) if name == "verbose"));

        let env_err = resolve_with_env(&HostcliConfig::default(), &CliOverrides::default(), |k| {
            (k == "HOSTCLI_LOG_LEVEL").then(|| "loud".to_string())
        })
        .unwrap_err();
        assert!(matches!(env_err, ConfigError::InvalidLogLevel(_)));
    }

    #[test]
    fn test_log_level_names_are_case_insensitive() {
        let config = HostcliConfig {
            general: GeneralConfig {
                log_level: Some("TRACE".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[storage]
hosts_file = "/tmp/hosts"
"#;
        let config: HostcliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.hosts_file.as_deref(), Some("/tmp/hosts"));
        assert!(config.storage.data_file.is_none());
        assert!(config.general.require_root.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
log_file = "/var/log/hostcli.log"
log_level = "debug"
require_root = false

[storage]
data_file = "/srv/hostcli/data.txt"
hosts_file = "/etc/hosts"
"#;
        let config: HostcliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.general.require_root, Some(false));
        assert_eq!(
            config.storage.data_file.as_deref(),
            Some("/srv/hostcli/data.txt")
        );
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result: Result<HostcliConfig, _> = toml::from_str("[storage\ndata_file = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let config = load_config(Path::new("/nonexistent/hostcli/config.toml")).unwrap();
        assert!(config.storage.data_file.is_none());
    }
}
