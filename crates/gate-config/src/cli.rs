//! CLI overrides applied on top of the config file.

use clap::Parser;

use crate::Config;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override HTTP listen address, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub listen: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Override log format (json/pretty/compact)
    #[arg(long)]
    pub log_format: Option<String>,
    /// Override the proxy traffic-stats port
    #[arg(long)]
    pub stats_port: Option<u16>,
    /// Override the shared stats secret
    #[arg(long)]
    pub secret: Option<String>,
    /// Override the registry database URL
    #[arg(long)]
    pub database_url: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.listen {
        config.http_server.address = v.clone();
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
    if let Some(v) = &overrides.log_format {
        config.logging.format = Some(v.clone());
    }
    if let Some(v) = overrides.stats_port {
        config.hysteria.traffic_stats_port = v;
    }
    if let Some(v) = &overrides.secret {
        config.hysteria.secret = v.clone();
    }
    if let Some(v) = &overrides.database_url {
        config.database.url = Some(v.clone());
    }
}
