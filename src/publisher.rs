pub mod console;
pub mod json;

use crate::config::Config;
use crate::models::DatabaseReport;
use anyhow::{Result, anyhow};
use async_trait::async_trait;

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, report: &DatabaseReport) -> Result<()>;
    fn name(&self) -> &str;
}

pub struct PublisherFactory;

impl PublisherFactory {
    pub fn create(config: &Config) -> Result<Box<dyn Publisher>> {
        match config.publisher_type.as_str() {
            "console" => Ok(Box::new(console::ConsolePublisher::new())),
            "json" => Ok(Box::new(json::JsonPublisher::new())),
            _ => Err(anyhow!(
                "Unknown publisher type: {}. Supported types: console, json",
                config.publisher_type
            )),
        }
    }
}
