//! Layered server configuration.
//!
//! Sources, lowest precedence first:
//! 1) built-in defaults -> 2) YAML file (if provided) -> 3) env (`CALCULATOR__*`) -> 4) CLI overrides

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment variable prefix; `__` separates nesting levels.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
    /// Requests running longer are answered with `504`.
    pub request_timeout_secs: u64,
    /// Permissive CORS for browser clients.
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            body_limit_bytes: 1024 * 1024,
            request_timeout_secs: 30,
            cors_enabled: false,
        }
    }
}

/// Log filter settings. `RUST_LOG`, when set, replaces all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level applied to every target without an override.
    pub default: String,
    /// Per-target overrides, e.g. `calculator: debug`.
    pub modules: BTreeMap<String, String>,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "info".to_owned(),
            modules: BTreeMap::new(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Filter directive string: the default level followed by overrides.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut filter = self.default.clone();
        for (target, level) in &self.modules {
            filter.push(',');
            filter.push_str(target);
            filter.push('=');
            filter.push_str(level);
        }
        filter
    }
}

/// Command-line values that take precedence over every other source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the YAML file at `path` (when given), then the environment.
    ///
    /// # Errors
    /// Fails when the file is missing or unreadable, or when any source
    /// holds unknown keys or values of the wrong type.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file_exact(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.bind_addr.set_port(port);
        }
        let level = match cli.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.default);
        }
    }

    /// # Errors
    /// Fails if the configuration cannot be serialized.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.server.body_limit_bytes, 1_048_576);
        assert_eq!(config.server.request_timeout_secs, 30);
        assert!(!config.server.cors_enabled);
        assert_eq!(config.logging.default, "info");
    }

    #[test]
    fn yaml_overrides_defaults() {
        let file = yaml_file(
            "server:\n  bind_addr: 0.0.0.0:8080\n  cors_enabled: true\nlogging:\n  default: warn\n  modules:\n    calculator: debug\n",
        );
        let config = AppConfig::load_or_default(Some(file.path())).unwrap();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert!(config.server.cors_enabled);
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.logging.directives(), "warn,calculator=debug");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load_or_default(Some(Path::new("/nonexistent/calculator.yaml")))
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = yaml_file("server:\n  bind_address: 0.0.0.0:8080\n");
        assert!(AppConfig::load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&CliOverrides {
            port: Some(9000),
            verbose: 2,
        });
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.logging.default, "debug");

        config.apply_cli_overrides(&CliOverrides {
            port: None,
            verbose: 7,
        });
        assert_eq!(config.server.bind_addr.port(), 9000);
        assert_eq!(config.logging.default, "trace");
    }

    #[test]
    fn zero_verbosity_keeps_configured_level() {
        let mut config = AppConfig::default();
        config.logging.default = "warn".to_owned();
        config.apply_cli_overrides(&CliOverrides::default());
        assert_eq!(config.logging.default, "warn");
    }

    #[test]
    fn yaml_output_parses_back() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("bind_addr"));

        let file = yaml_file(&yaml);
        assert_eq!(AppConfig::load_or_default(Some(file.path())).unwrap(), config);
    }
}
