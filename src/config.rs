use anyhow::{Context, Result, anyhow};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // MongoDB Configuration
    pub mongo_url: String,
    pub db_name: String,

    // Application Configuration
    pub log_level: String,
    pub publisher_type: String,
    pub query_timeout: u64,

    // Connectivity Configuration
    pub connectivity_max_retries: u32,
    pub connectivity_retry_interval: u64,
    pub connectivity_timeout: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load required MongoDB configuration
        let mongo_url = get_env_required("MONGO_URL")?;
        let db_name = get_env_required("DB_NAME")?;

        // Load application configuration with defaults
        let log_level = get_env_with_default("LOG_LEVEL", "INFO");
        let publisher_type = get_env_with_default("PUBLISHER_TYPE", "console");
        let query_timeout = get_env_u64_with_default("QUERY_TIMEOUT", 30);

        // Load connectivity configuration with defaults
        let connectivity_max_retries = get_env_u32_with_default("CONNECTIVITY_MAX_RETRIES", 3);
        let connectivity_retry_interval =
            get_env_u64_with_default("CONNECTIVITY_RETRY_INTERVAL", 5);
        let connectivity_timeout = get_env_u64_with_default("CONNECTIVITY_TIMEOUT", 5);

        Ok(Config {
            mongo_url,
            db_name,
            log_level,
            publisher_type,
            query_timeout,
            connectivity_max_retries,
            connectivity_retry_interval,
            connectivity_timeout,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mongo_url.starts_with("mongodb://") && !self.mongo_url.starts_with("mongodb+srv://")
        {
            return Err(anyhow!(
                "MONGO_URL must start with 'mongodb://' or 'mongodb+srv://'"
            ));
        }

        if self.db_name.is_empty() {
            return Err(anyhow!("DB_NAME must not be empty"));
        }

        match self.publisher_type.as_str() {
            "console" | "json" => {}
            _ => {
                return Err(anyhow!(
                    "Invalid publisher type: {}. Supported types: console, json",
                    self.publisher_type
                ));
            }
        }

        if self.connectivity_max_retries == 0 {
            return Err(anyhow!("CONNECTIVITY_MAX_RETRIES must be at least 1"));
        }

        Ok(())
    }
}

fn get_env_required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("Environment variable {} is required but not set", key))
}

fn get_env_with_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_u64_with_default(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn get_env_u32_with_default(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
impl Config {
    pub fn new_for_test(mongo_url: String, db_name: String) -> Self {
        Self {
            mongo_url,
            db_name,
            log_level: "INFO".to_string(),
            publisher_type: "console".to_string(),
            query_timeout: 30,
            connectivity_max_retries: 3,
            connectivity_retry_interval: 5,
            connectivity_timeout: 5,
        }
    }
}
