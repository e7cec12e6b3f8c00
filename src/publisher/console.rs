use crate::models::DatabaseReport;
use crate::publisher::Publisher;
use crate::reporter::{ConsoleFormatter, ReportFormatter};
use anyhow::Result;
use async_trait::async_trait;

pub struct ConsolePublisher {
    formatter: ConsoleFormatter,
}

impl ConsolePublisher {
    pub fn new() -> Self {
        Self {
            formatter: ConsoleFormatter::new(),
        }
    }
}

impl Default for ConsolePublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Publisher for ConsolePublisher {
    async fn publish(&self, report: &DatabaseReport) -> Result<()> {
        let output = self.formatter.format(report)?;
        println!("{}", output);
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
