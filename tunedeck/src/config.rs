//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. The configuration file path defaults to `config.yaml` but can
//! be specified via `-f` flag or the `TUNEDECK_CONFIG` environment variable.
//!
//! ## Loading Priority
//!
//! Sources are merged in order, later sources overriding earlier ones:
//!
//! 1. **YAML config file** - base configuration (default: `config.yaml`)
//! 2. **Environment variables** - variables prefixed with `TUNEDECK_`
//!
//! For nested values, use double underscores in environment variables, e.g.
//! `TUNEDECK_PORT=8080`.
//!
//! ## Structure
//!
//! - **Server**: `host`, `port` - HTTP server binding
//! - **Accounts**: `accounts` - seeded login records (user ID, username,
//!   SHA3-512 password hash); passwords are never configured in plaintext
//! - **Catalog**: `catalog` - the seeded track catalog

use chrono::NaiveDate;
use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::store::TrackRecord;
use crate::types::{TrackId, UserId};

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "TUNEDECK_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Seeded accounts. IDs must be strictly positive and usernames unique.
    pub accounts: Vec<AccountConfig>,
    /// Seeded track catalog.
    pub catalog: Vec<TrackConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            accounts: Vec::new(),
            catalog: Vec::new(),
        }
    }
}

/// One seeded login record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountConfig {
    /// Strictly positive user ID; `0` is the "no identity" sentinel.
    pub id: UserId,
    pub username: String,
    /// SHA3-512 hex digest of the password.
    pub password_hash: String,
}

/// One seeded catalog track.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackConfig {
    pub id: TrackId,
    pub title: String,
    pub performer: String,
    /// Duration in seconds.
    pub duration: u32,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub playcount: u32,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub offline_available: bool,
}

impl From<TrackConfig> for TrackRecord {
    fn from(track: TrackConfig) -> Self {
        Self {
            id: track.id,
            title: track.title,
            performer: track.performer,
            duration: track.duration,
            album: track.album,
            playcount: track.playcount,
            publication_date: track.publication_date,
            description: track.description,
            offline_available: track.offline_available,
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(args).extract()?;
        config.validate().map_err(figment::Error::from)?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required fields
    fn validate(&self) -> Result<(), String> {
        let mut usernames = std::collections::HashSet::new();
        let mut ids = std::collections::HashSet::new();
        for account in &self.accounts {
            if account.id <= 0 {
                return Err(format!(
                    "Config validation: account '{}' has non-positive id {}; 0 is reserved for \"no identity\"",
                    account.username, account.id
                ));
            }
            if !usernames.insert(account.username.as_str()) {
                return Err(format!("Config validation: duplicate account username '{}'", account.username));
            }
            if !ids.insert(account.id) {
                return Err(format!("Config validation: duplicate account id {}", account.id));
            }
        }
        Ok(())
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("TUNEDECK_").split("__"))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    fn args_for(path: &str) -> Args {
        Args {
            config: path.to_string(),
            validate: false,
        }
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&args_for("missing.yaml"))?;
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert!(config.accounts.is_empty());
            Ok(())
        });
    }

    #[test]
    fn yaml_file_provides_values() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
host: 127.0.0.1
port: 9000
accounts:
  - id: 123
    username: mark
    password_hash: abc123
catalog:
  - id: 1
    title: Song One
    performer: Somebody
    duration: 215
"#,
            )?;
            let config = Config::load(&args_for("config.yaml"))?;
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 9000);
            assert_eq!(config.accounts.len(), 1);
            assert_eq!(config.accounts[0].id, 123);
            assert_eq!(config.catalog[0].duration, 215);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_the_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "port: 9000\n")?;
            jail.set_env("TUNEDECK_PORT", "9001");
            let config = Config::load(&args_for("config.yaml"))?;
            assert_eq!(config.port, 9001);
            assert_eq!(config.bind_address(), "0.0.0.0:9001");
            Ok(())
        });
    }

    #[test]
    fn zero_account_id_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
accounts:
  - id: 0
    username: ghost
    password_hash: abc
"#,
            )?;
            assert!(Config::load(&args_for("config.yaml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn duplicate_usernames_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
accounts:
  - id: 1
    username: mark
    password_hash: abc
  - id: 2
    username: mark
    password_hash: def
"#,
            )?;
            assert!(Config::load(&args_for("config.yaml")).is_err());
            Ok(())
        });
    }
}
