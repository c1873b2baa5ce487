use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub booking_horizon_days: u32,
    pub preview_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            booking_horizon_days: 30,
            preview_limit: 30,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HEALTHTRACK_HOST")
                .unwrap_or_else(|_| {
                    warn!("HEALTHTRACK_HOST not set, using default");
                    defaults.host.clone()
                }),
            port: parse_var("HEALTHTRACK_PORT", defaults.port),
            booking_horizon_days: parse_var("BOOKING_HORIZON_DAYS", defaults.booking_horizon_days),
            preview_limit: parse_var("QUEUE_PREVIEW_LIMIT", defaults.preview_limit),
        };

        if !config.is_valid() {
            warn!("Preview limit is zero - queue previews will always be empty");
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_valid(&self) -> bool {
        !self.host.is_empty() && self.preview_limit > 0
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}
