//! CLI argument definitions for the BankBot application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// BankBot — a local-LLM banking assistant chat front-end.
#[derive(Parser, Debug)]
#[command(name = "bankbot", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Completion endpoint URL of the model server.
    #[arg(short = 'e', long = "endpoint")]
    pub endpoint: Option<String>,

    /// Model identifier to request completions from.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > BANKBOT_CONFIG env var > ~/.bankbot/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("BANKBOT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the backend endpoint.
    ///
    /// Priority: --endpoint flag > BANKBOT_ENDPOINT env var > config file value.
    pub fn resolve_endpoint(&self, config_endpoint: &str) -> String {
        if let Some(ref e) = self.endpoint {
            return e.clone();
        }
        if let Ok(e) = std::env::var("BANKBOT_ENDPOINT") {
            return e;
        }
        config_endpoint.to_string()
    }

    /// Resolve the model identifier.
    ///
    /// Priority: --model flag > BANKBOT_MODEL env var > config file value.
    pub fn resolve_model(&self, config_model: &str) -> String {
        if let Some(ref m) = self.model {
            return m.clone();
        }
        if let Ok(m) = std::env::var("BANKBOT_MODEL") {
            return m;
        }
        config_model.to_string()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".bankbot").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".bankbot").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            endpoint: None,
            model: None,
            log_level: None,
        }
    }

    #[test]
    fn test_flag_beats_config_value() {
        let mut a = args();
        a.endpoint = Some("http://other:11434/api/generate".to_string());
        a.model = Some("phi3".to_string());
        a.log_level = Some("debug".to_string());

        assert_eq!(
            a.resolve_endpoint("http://localhost:11434/api/generate"),
            "http://other:11434/api/generate"
        );
        assert_eq!(a.resolve_model("tinyllama"), "phi3");
        assert_eq!(a.resolve_log_level("info"), "debug");
    }

    #[test]
    fn test_config_value_used_when_no_flag() {
        let a = args();
        assert_eq!(a.resolve_model("tinyllama"), "tinyllama");
        assert_eq!(a.resolve_log_level("warn"), "warn");
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let mut a = args();
        a.config = Some(PathBuf::from("/tmp/bankbot.toml"));
        assert_eq!(a.resolve_config_path(), PathBuf::from("/tmp/bankbot.toml"));
    }
}
