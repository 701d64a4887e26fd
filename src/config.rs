use std::env;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    /// Shared secret expected in the `X-ADMIN-TOKEN` header.
    pub admin_token: String,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:5000"),
            database_url: var("DATABASE_URL", "sqlite://attendance.db?mode=rwc"),
            admin_token: var("ADMIN_TOKEN", "secret-admin"),

            log_dir: var("LOG_DIR", "logs"),
            log_level: lookup("LOG_LEVEL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(Level::DEBUG),
        }
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests(admin_token: &str) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            admin_token: admin_token.to_string(),
            log_dir: "logs".to_string(),
            log_level: Level::DEBUG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_pairs(&[]);

        assert_eq!(config.server_addr, "127.0.0.1:5000");
        assert_eq!(config.database_url, "sqlite://attendance.db?mode=rwc");
        assert_eq!(config.admin_token, "secret-admin");
        assert_eq!(config.log_dir, "logs");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn values_override_defaults() {
        let config = from_pairs(&[
            ("SERVER_ADDR", "0.0.0.0:8080"),
            ("ADMIN_TOKEN", "hunter2"),
            ("LOG_LEVEL", "warn"),
        ]);

        assert_eq!(config.server_addr, "0.0.0.0:8080");
        assert_eq!(config.admin_token, "hunter2");
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn invalid_log_level_falls_back_to_debug() {
        let config = from_pairs(&[("LOG_LEVEL", "bogus")]);
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
