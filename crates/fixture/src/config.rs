//! Fixture configuration, read from the environment.

use gilded_rose_core::{DomainError, DomainResult};
use gilded_rose_observability::LogFormat;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const OUTPUT_VAR: &str = "GILDED_ROSE_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";

const DEFAULT_DAYS: u32 = 2;

/// How each day's inventory is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Days to simulate after printing day 0.
    pub days: u32,
    pub output: OutputFormat,
    pub log_format: LogFormat,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            output: OutputFormat::Text,
            log_format: LogFormat::Text,
        }
    }
}

impl FixtureConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DAYS_VAR) {
            config.days = parse_days(DAYS_VAR, &raw)?;
        }
        if let Some(raw) = lookup(OUTPUT_VAR) {
            config.output = match parse_format(OUTPUT_VAR, &raw)? {
                Format::Text => OutputFormat::Text,
                Format::Json => OutputFormat::Json,
            };
        }
        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = match parse_format(LOG_FORMAT_VAR, &raw)? {
                Format::Text => LogFormat::Text,
                Format::Json => LogFormat::Json,
            };
        }

        Ok(config)
    }

    /// Positional day count from the command line wins over the environment.
    pub fn with_days_arg(mut self, arg: Option<&str>) -> DomainResult<Self> {
        if let Some(raw) = arg {
            self.days = parse_days("days", raw)?;
        }
        Ok(self)
    }
}

enum Format {
    Text,
    Json,
}

fn parse_days(key: &str, raw: &str) -> DomainResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| DomainError::invalid_setting(key, format!("{raw:?} is not a day count ({e})")))
}

fn parse_format(key: &str, raw: &str) -> DomainResult<Format> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => Err(DomainError::invalid_setting(
            key,
            format!("expected `text` or `json`, got {other:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = FixtureConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, FixtureConfig::default());
        assert_eq!(config.days, 2);
    }

    #[test]
    fn reads_all_settings() {
        let config = FixtureConfig::from_lookup(lookup_from(&[
            (DAYS_VAR, "30"),
            (OUTPUT_VAR, "JSON"),
            (LOG_FORMAT_VAR, " json "),
        ]))
        .unwrap();
        assert_eq!(config.days, 30);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_negative_days() {
        let err = FixtureConfig::from_lookup(lookup_from(&[(DAYS_VAR, "-1")])).unwrap_err();
        match err {
            DomainError::InvalidSetting { key, .. } => assert_eq!(key, DAYS_VAR),
            _ => panic!("Expected InvalidSetting for negative days"),
        }
    }

    #[test]
    fn rejects_unknown_output_format() {
        let err = FixtureConfig::from_lookup(lookup_from(&[(OUTPUT_VAR, "xml")])).unwrap_err();
        match err {
            DomainError::InvalidSetting { key, reason } => {
                assert_eq!(key, OUTPUT_VAR);
                assert!(reason.contains("xml"));
            }
            _ => panic!("Expected InvalidSetting for unknown format"),
        }
    }

    #[test]
    fn days_argument_overrides_environment() {
        let config = FixtureConfig::from_lookup(lookup_from(&[(DAYS_VAR, "5")]))
            .unwrap()
            .with_days_arg(Some("12"))
            .unwrap();
        assert_eq!(config.days, 12);

        let config = config.with_days_arg(None).unwrap();
        assert_eq!(config.days, 12);
    }

    #[test]
    fn bad_days_argument_is_rejected() {
        let err = FixtureConfig::default().with_days_arg(Some("soon")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSetting { .. }));
    }
}
