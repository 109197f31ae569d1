use crate::core::{Result, TableError};
use crate::facade::DEFAULT_SIZE_UNIT;
use std::env;
use std::path::PathBuf;

/// Application configuration.
///
/// Values come from the environment (a `.env` file is honoured) and can be
/// overridden with the builder methods, which is what the command line does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the page server binds to
    pub host: String,

    pub port: u16,

    /// JSON seed file replacing the built-in tables
    pub seed_file: Option<PathBuf>,

    /// Unit appended to sizes in rendered rows
    pub size_unit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            seed_file: None,
            size_unit: DEFAULT_SIZE_UNIT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("ANIMAL_TABLES_HOST").unwrap_or(defaults.host);

        let port = match lookup("ANIMAL_TABLES_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                TableError::Config(format!("ANIMAL_TABLES_PORT must be a valid u16, got '{}'", raw))
            })?,
            None => defaults.port,
        };

        let seed_file = lookup("ANIMAL_TABLES_SEED")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let size_unit = lookup("ANIMAL_TABLES_SIZE_UNIT").unwrap_or(defaults.size_unit);

        Ok(Self {
            host,
            port,
            seed_file,
            size_unit,
        })
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }

    pub fn size_unit(mut self, unit: &str) -> Self {
        self.size_unit = unit.to_string();
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ANIMAL_TABLES_HOST", "0.0.0.0"),
            ("ANIMAL_TABLES_PORT", "3000"),
            ("ANIMAL_TABLES_SEED", "seed.json"),
            ("ANIMAL_TABLES_SIZE_UNIT", "m"),
        ]))
        .unwrap();
        assert_eq!(config.address(), "0.0.0.0:3000");
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
        assert_eq!(config.size_unit, "m");
    }

    #[test]
    fn test_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("ANIMAL_TABLES_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("ANIMAL_TABLES_PORT"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::default().host("localhost").port(9000).size_unit("cm");
        assert_eq!(config.address(), "localhost:9000");
        assert_eq!(config.size_unit, "cm");
    }
}
