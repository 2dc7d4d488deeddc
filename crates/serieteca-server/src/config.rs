use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub shutdown_drain: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            shutdown_drain: Duration::from_secs(3),
        }
    }
}

pub fn validate_startup_config(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("api body limit must be > 0".to_string());
    }
    if api.shutdown_drain > Duration::from_secs(60) {
        return Err("shutdown drain must be <= 60s".to_string());
    }
    Ok(())
}
