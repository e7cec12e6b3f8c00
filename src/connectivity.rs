use crate::config::Config;
use crate::store::TravelStore;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

pub struct ConnectivityChecker {
    max_retries: u32,
    retry_interval: Duration,
}

impl ConnectivityChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            max_retries: config.connectivity_max_retries,
            retry_interval: Duration::from_secs(config.connectivity_retry_interval),
        }
    }

    pub async fn verify_connectivity<S: TravelStore + ?Sized>(&self, store: &S) -> Result<()> {
        for attempt in 1..=self.max_retries {
            let start = std::time::Instant::now();
            match store.ping().await {
                Ok(()) => {
                    let elapsed = start.elapsed();
                    info!(
                        response_time_ms = elapsed.as_millis() as u64,
                        "Successfully connected to MongoDB deployment"
                    );
                    return Ok(());
                }
                Err(e) => {
                    let elapsed = start.elapsed();
                    if attempt < self.max_retries {
                        warn!(
                            attempt = attempt,
                            max_retries = self.max_retries,
                            response_time_ms = elapsed.as_millis() as u64,
                            retry_interval_secs = self.retry_interval.as_secs(),
                            error = %e,
                            "Connectivity check failed, retrying"
                        );
                        tokio::time::sleep(self.retry_interval).await;
                    } else {
                        return Err(e).context(format!(
                            "Failed to connect to MongoDB deployment after {} attempts",
                            self.max_retries
                        ));
                    }
                }
            }
        }

        unreachable!()
    }
}
