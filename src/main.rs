mod config;
mod connectivity;
mod error;
mod inspector;
mod logger;
mod models;
mod publisher;
mod reporter;
mod store;

use anyhow::{Context, Result};
use config::Config;
use connectivity::ConnectivityChecker;
use inspector::Inspector;
use publisher::PublisherFactory;
use store::MongoTravelStore;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logger
    logger::init_logger(&config.log_level);
    info!("Starting travel database reporter");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Log configuration summary (connection string withheld, it may carry
    // credentials)
    info!(
        db_name = %config.db_name,
        log_level = %config.log_level,
        publisher_type = %config.publisher_type,
        query_timeout = config.query_timeout,
        connectivity_max_retries = config.connectivity_max_retries,
        connectivity_retry_interval = config.connectivity_retry_interval,
        connectivity_timeout = config.connectivity_timeout,
        "Configuration loaded"
    );

    // Validate configuration
    config
        .validate()
        .context("Configuration validation failed")?;

    // Build the MongoDB-backed store
    let store = MongoTravelStore::connect(&config)
        .await
        .context("Failed to create MongoDB client")?;

    // Check connectivity to the deployment
    info!("Verifying connectivity to MongoDB deployment");
    let connectivity_checker = ConnectivityChecker::new(&config);
    connectivity_checker
        .verify_connectivity(&store)
        .await
        .context("Connectivity verification failed")?;

    // Run the read-only queries and assemble the report
    info!("Inspecting database: {}", config.db_name);
    let inspector = Inspector::new(store, config.query_timeout);
    let report = inspector
        .build_report()
        .await
        .context("Failed to inspect database")?;

    // Create and use publisher
    let publisher = PublisherFactory::create(&config).context("Failed to create publisher")?;

    info!("Publishing report using {} publisher", publisher.name());
    publisher
        .publish(&report)
        .await
        .context("Failed to publish report")?;

    info!("Travel database report completed successfully");
    Ok(())
}
