use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, layered as defaults < `NOTES_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:notes.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 1,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("NOTES_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_port_3000_with_single_connection() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
        assert_eq!(cfg.database_url, "sqlite:notes.db");
        assert_eq!(cfg.max_connections, 1);
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NOTES_LISTEN_ADDR", "127.0.0.1:8080");
            jail.set_env("NOTES_MAX_CONNECTIONS", "4");

            let cfg = Config::load()?;
            assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
            assert_eq!(cfg.max_connections, 4);
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }
}
