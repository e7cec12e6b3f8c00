use crate::models::DatabaseReport;
use crate::publisher::Publisher;
use crate::reporter::mask_password_hash;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Machine-readable output mode. Password hashes are masked here too;
/// the JSON output carries the same redaction as the console report.
pub struct JsonPublisher;

impl JsonPublisher {
    pub fn new() -> Self {
        Self
    }

    fn redact(report: &DatabaseReport) -> DatabaseReport {
        let mut redacted = report.clone();
        for user in &mut redacted.users {
            user.password_hash = mask_password_hash(&user.password_hash);
        }
        redacted
    }
}

impl Default for JsonPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Publisher for JsonPublisher {
    async fn publish(&self, report: &DatabaseReport) -> Result<()> {
        let output = serde_json::to_string_pretty(&Self::redact(report))
            .context("Failed to serialize report")?;
        println!("{}", output);
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
