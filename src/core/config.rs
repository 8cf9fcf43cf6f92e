// src/core/config.rs
use std::env;
use log::LevelFilter;

// Runtime configuration for the field service
#[derive(Debug, Clone)]
pub struct Config {
    // Hashing
    pub kdf_memory_cost: u32,
    pub kdf_time_cost: u32,
    pub kdf_parallelism: u32,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Hashing
            kdf_memory_cost: 65536,
            kdf_time_cost: 3,
            kdf_parallelism: 4,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Hashing
        if let Some(val) = lookup("KDF_MEMORY_COST") {
            if let Ok(memory_cost) = val.parse() {
                config.kdf_memory_cost = memory_cost;
            }
        }

        if let Some(val) = lookup("KDF_TIME_COST") {
            if let Ok(time_cost) = val.parse() {
                config.kdf_time_cost = time_cost;
            }
        }

        if let Some(val) = lookup("KDF_PARALLELISM") {
            if let Ok(parallelism) = val.parse() {
                config.kdf_parallelism = parallelism;
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_from(&[]);

        assert_eq!(config.kdf_memory_cost, 65536);
        assert_eq!(config.kdf_time_cost, 3);
        assert_eq!(config.kdf_parallelism, 4);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.web_address, "127.0.0.1");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = load_from(&[
            ("KDF_MEMORY_COST", "19456"),
            ("KDF_TIME_COST", "2"),
            ("KDF_PARALLELISM", "1"),
            ("WEB_PORT", "8080"),
            ("WEB_ADDRESS", "0.0.0.0"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.kdf_memory_cost, 19456);
        assert_eq!(config.kdf_time_cost, 2);
        assert_eq!(config.kdf_parallelism, 1);
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_unparsable_values_keep_defaults() {
        let config = load_from(&[
            ("KDF_TIME_COST", "three"),
            ("WEB_PORT", "99999"),
            ("LOG_LEVEL", "verbose"),
        ]);

        assert_eq!(config.kdf_time_cost, 3);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
