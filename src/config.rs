use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub rate_limit: u32,
    pub rate_limit_window_secs: u64,
    pub honeypot_field: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("CLEANFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CLEANFORM_HOST: {e}"))?;

        let port: u16 = env_or("CLEANFORM_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CLEANFORM_PORT: {e}"))?;

        let max_body_size: usize = env_or("CLEANFORM_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid CLEANFORM_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("CLEANFORM_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid CLEANFORM_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rate_limit: u32 = env_or("CLEANFORM_RATE_LIMIT", "30")
            .parse()
            .map_err(|e| format!("Invalid CLEANFORM_RATE_LIMIT: {e}"))?;

        let rate_limit_window_secs: u64 = env_or("CLEANFORM_RATE_LIMIT_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid CLEANFORM_RATE_LIMIT_WINDOW_SECS: {e}"))?;

        let honeypot_field = match env_or("CLEANFORM_HONEYPOT_FIELD", "") {
            s if s.trim().is_empty() => None,
            s => Some(s),
        };

        let log_level = env_or("CLEANFORM_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            max_body_size,
            trusted_proxies,
            rate_limit,
            rate_limit_window_secs,
            honeypot_field,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
