//! Runtime settings for the `campus-trade` binary.
//!
//! Sources, later ones winning:
//! 1. `campus-trade.toml` in the working directory (optional)
//! 2. `CAMPUS_TRADE_*` environment variables, e.g. `CAMPUS_TRADE_LOG_FORMAT=full`

use anyhow::Context;
use catalog_framework::tracing::LogFormat;
use serde::Deserialize;

const CONFIG_FILE: &str = "campus-trade";
const ENV_PREFIX: &str = "CAMPUS_TRADE";

/// Log line layout as spelled in configuration.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogStyle {
    #[default]
    Compact,
    Full,
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Compact => LogFormat::Compact,
            LogStyle::Full => LogFormat::Full,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub log_format: LogStyle,
}

impl Settings {
    /// Load settings from the optional config file and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_sources(
            config::File::with_name(CONFIG_FILE).required(false),
            config::Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Layer `env` over `file`; values from `env` win.
    pub fn from_sources<F>(file: F, env: config::Environment) -> anyhow::Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let cfg = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("failed to build configuration")?;

        cfg.try_deserialize()
            .context("failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_format_is_compact() {
        let settings = Settings::default();
        assert_eq!(settings.log_format, LogStyle::Compact);
        assert_eq!(LogFormat::from(settings.log_format), LogFormat::Compact);
    }

    #[test]
    fn log_format_reads_from_toml() {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(
                "log_format = \"full\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let settings: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(settings.log_format, LogStyle::Full);
    }

    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn toml(contents: &str) -> config::File<config::FileSourceString, config::FileFormat> {
        config::File::from_str(contents, config::FileFormat::Toml)
    }

    #[test]
    fn log_format_reads_from_environment() {
        let settings =
            Settings::from_sources(toml(""), env_with(&[("CAMPUS_TRADE_LOG_FORMAT", "full")]))
                .unwrap();
        assert_eq!(settings.log_format, LogStyle::Full);
    }

    #[test]
    fn environment_overrides_file() {
        let settings = Settings::from_sources(
            toml("log_format = \"compact\""),
            env_with(&[("CAMPUS_TRADE_LOG_FORMAT", "full")]),
        )
        .unwrap();
        assert_eq!(settings.log_format, LogStyle::Full);
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let settings = Settings::from_sources(
            toml("log_format = \"full\""),
            env_with(&[("LOG_FORMAT", "compact")]),
        )
        .unwrap();
        assert_eq!(settings.log_format, LogStyle::Full);
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        let result =
            Settings::from_sources(toml(""), env_with(&[("CAMPUS_TRADE_LOG_FORMAT", "json")]));
        assert!(result.is_err());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = config::Config::builder().build().unwrap();
        let settings: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(settings.log_format, LogStyle::Compact);
    }
}
