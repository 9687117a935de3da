//! Configuration validation.

use crate::{Config, ConfigError};

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.hysteria.secret.trim().is_empty() {
        return Err(ConfigError::Validation("hysteria.secret is empty".into()));
    }
    if config.hysteria.traffic_stats_port == 0 {
        return Err(ConfigError::Validation(
            "hysteria.traffic_stats_port must be > 0".into(),
        ));
    }
    if config.http_server.address.trim().is_empty() {
        return Err(ConfigError::Validation(
            "http_server.address is empty".into(),
        ));
    }
    if config.http_server.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "http_server.timeout_secs must be > 0".into(),
        ));
    }
    if config.http_server.idle_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "http_server.idle_timeout_secs must be > 0".into(),
        ));
    }
    if config.database.connection_url().is_none() {
        return Err(ConfigError::Validation(
            "database requires either url or dbname/user/password".into(),
        ));
    }
    Ok(())
}
