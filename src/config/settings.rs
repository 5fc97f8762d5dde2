use crate::error::{CoinstringError, Result};
use log::LevelFilter;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_VERSION_KEY: &str = "COINSTRING_DEFAULT_VERSION";
pub const LOG_LEVEL_KEY: &str = "COINSTRING_LOG";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Read settings from the process environment
    pub fn new() -> Config {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut map = HashMap::new();
        map.insert(
            String::from(LOG_LEVEL_KEY),
            lookup(LOG_LEVEL_KEY).unwrap_or_else(|| String::from(DEFAULT_LOG_LEVEL)),
        );
        if let Some(version) = lookup(DEFAULT_VERSION_KEY) {
            map.insert(String::from(DEFAULT_VERSION_KEY), version);
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(key), value);
    }

    /// Version byte used when a command is given none; `Ok(None)` if unset
    pub fn get_default_version(&self) -> Result<Option<u8>> {
        self.get(DEFAULT_VERSION_KEY)
            .map(|raw| parse_version(&raw))
            .transpose()
    }

    pub fn set_default_version(&self, version: u8) {
        self.set(DEFAULT_VERSION_KEY, format!("{version:#04x}"));
    }

    pub fn get_log_level(&self) -> Result<LevelFilter> {
        let raw = self
            .get(LOG_LEVEL_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_LOG_LEVEL));
        raw.parse::<LevelFilter>()
            .map_err(|_| CoinstringError::Config(format!("Invalid log level: {raw}")))
    }

    pub fn set_log_level(&self, level: LevelFilter) {
        self.set(LOG_LEVEL_KEY, level.to_string());
    }
}

/// Parse a version byte written in decimal (`128`) or hex (`0x80`)
pub fn parse_version(input: &str) -> Result<u8> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => trimmed.parse::<u8>(),
    };
    parsed.map_err(|e| {
        CoinstringError::Config(format!(
            "Invalid version byte {input:?}: {e}. Use 0-255 or 0x00-0xff"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("0").unwrap(), 0x00);
        assert_eq!(parse_version("128").unwrap(), 0x80);
        assert_eq!(parse_version("0x1E").unwrap(), 0x1e);
        assert_eq!(parse_version(" 0x9e ").unwrap(), 0x9e);
        assert!(matches!(parse_version("256"), Err(CoinstringError::Config(_))));
        assert!(matches!(parse_version("0x"), Err(CoinstringError::Config(_))));
        assert!(matches!(parse_version("btc"), Err(CoinstringError::Config(_))));
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_with(&[]);
        assert_eq!(config.get_default_version().unwrap(), None);
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = config_with(&[(DEFAULT_VERSION_KEY, "0x80"), (LOG_LEVEL_KEY, "debug")]);
        assert_eq!(config.get_default_version().unwrap(), Some(0x80));
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let config = config_with(&[(DEFAULT_VERSION_KEY, "bitcoin"), (LOG_LEVEL_KEY, "loud")]);
        assert!(config.get_default_version().is_err());
        assert!(config.get_log_level().is_err());
    }

    #[test]
    fn test_setters_override() {
        let config = config_with(&[]);
        config.set_default_version(0x1e);
        config.set_log_level(LevelFilter::Warn);
        assert_eq!(config.get_default_version().unwrap(), Some(0x1e));
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Warn);
    }
}
