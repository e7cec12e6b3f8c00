use crate::config::Config;
use crate::error::ReportError;
use crate::models::{ItineraryRecord, TripRecord, UserRecord};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{Document, doc, from_document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const USERS_COLLECTION: &str = "users";
pub const TRIPS_COLLECTION: &str = "trips";
pub const ITINERARIES_COLLECTION: &str = "itineraries";

/// Narrow read-only view of the travel planner database. The reporting
/// logic only ever sees this trait, never the driver.
#[async_trait]
pub trait TravelStore: Send + Sync {
    async fn ping(&self) -> Result<(), ReportError>;

    async fn count_users(&self) -> Result<u64, ReportError>;
    async fn count_trips(&self) -> Result<u64, ReportError>;
    async fn count_itineraries(&self) -> Result<u64, ReportError>;

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ReportError>;
    async fn fetch_trips(&self) -> Result<Vec<TripRecord>, ReportError>;
    async fn fetch_itineraries(&self) -> Result<Vec<ItineraryRecord>, ReportError>;
}

/// MongoDB-backed store. The driver's `Client` carries its own connection
/// pool; no connection is opened until the first operation runs.
pub struct MongoTravelStore {
    database: Database,
}

impl MongoTravelStore {
    pub async fn connect(config: &Config) -> Result<Self, ReportError> {
        let mut options = ClientOptions::parse(&config.mongo_url)
            .await
            .map_err(|e| ReportError::Connection(e.to_string()))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout =
            Some(Duration::from_secs(config.connectivity_timeout));
        options.connect_timeout = Some(Duration::from_secs(config.connectivity_timeout));

        let client =
            Client::with_options(options).map_err(|e| ReportError::Connection(e.to_string()))?;

        Ok(Self {
            database: client.database(&config.db_name),
        })
    }

    async fn count(&self, collection: &str) -> Result<u64, ReportError> {
        debug!("Counting documents in collection: {}", collection);

        self.database
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await
            .map_err(|e| ReportError::Query(collection.to_string(), e.to_string()))
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, ReportError> {
        debug!("Fetching all documents from collection: {}", collection);

        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(doc! {})
            .await
            .map_err(|e| ReportError::Query(collection.to_string(), e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| ReportError::Query(collection.to_string(), e.to_string()))?;

        documents
            .into_iter()
            .map(|document| {
                from_document(document)
                    .map_err(|e| ReportError::Decode(collection.to_string(), e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl TravelStore for MongoTravelStore {
    async fn ping(&self) -> Result<(), ReportError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| ReportError::Connection(e.to_string()))
    }

    async fn count_users(&self) -> Result<u64, ReportError> {
        self.count(USERS_COLLECTION).await
    }

    async fn count_trips(&self) -> Result<u64, ReportError> {
        self.count(TRIPS_COLLECTION).await
    }

    async fn count_itineraries(&self) -> Result<u64, ReportError> {
        self.count(ITINERARIES_COLLECTION).await
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ReportError> {
        self.fetch_all(USERS_COLLECTION).await
    }

    async fn fetch_trips(&self) -> Result<Vec<TripRecord>, ReportError> {
        self.fetch_all(TRIPS_COLLECTION).await
    }

    async fn fetch_itineraries(&self) -> Result<Vec<ItineraryRecord>, ReportError> {
        self.fetch_all(ITINERARIES_COLLECTION).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_is_lazy() {
        // Building the store performs no I/O, so it succeeds even when
        // nothing is listening on the endpoint.
        let config = Config::new_for_test(
            "mongodb://localhost:27017".to_string(),
            "travel_planner".to_string(),
        );

        let store = MongoTravelStore::connect(&config).await;
        assert!(store.is_ok());
    }

    #[tokio::test]
    async fn test_connect_rejects_unparseable_url() {
        let config =
            Config::new_for_test("mongodb://".to_string(), "travel_planner".to_string());

        let result = MongoTravelStore::connect(&config).await;
        assert!(matches!(result, Err(ReportError::Connection(_))));
    }
}
