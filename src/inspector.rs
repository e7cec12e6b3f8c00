use crate::error::ReportError;
use crate::models::{CollectionCounts, DatabaseReport};
use crate::store::{ITINERARIES_COLLECTION, TRIPS_COLLECTION, TravelStore, USERS_COLLECTION};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs the read-only query groups against the store, strictly in
/// sequence: three counts, then the three full-collection fetches.
/// Sections are independent queries; a document inserted between two of
/// them may appear in one section and not another.
pub struct Inspector<S> {
    store: S,
    query_timeout: Duration,
}

impl<S: TravelStore> Inspector<S> {
    pub fn new(store: S, query_timeout_secs: u64) -> Self {
        Self {
            store,
            query_timeout: Duration::from_secs(query_timeout_secs),
        }
    }

    pub async fn build_report(&self) -> Result<DatabaseReport, ReportError> {
        let start = Instant::now();

        debug!("Counting documents per collection");
        let counts = CollectionCounts {
            users: self.run(USERS_COLLECTION, self.store.count_users()).await?,
            trips: self.run(TRIPS_COLLECTION, self.store.count_trips()).await?,
            itineraries: self
                .run(ITINERARIES_COLLECTION, self.store.count_itineraries())
                .await?,
        };

        debug!("Fetching user documents");
        let users = self.run(USERS_COLLECTION, self.store.fetch_users()).await?;

        debug!("Fetching trip documents");
        let trips = self.run(TRIPS_COLLECTION, self.store.fetch_trips()).await?;

        debug!("Fetching itinerary documents");
        let itineraries = self
            .run(ITINERARIES_COLLECTION, self.store.fetch_itineraries())
            .await?;

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            users = counts.users,
            trips = counts.trips,
            itineraries = counts.itineraries,
            "Database inspection finished"
        );

        Ok(DatabaseReport {
            counts,
            users,
            trips,
            itineraries,
        })
    }

    async fn run<T>(
        &self,
        collection: &str,
        query: impl Future<Output = Result<T, ReportError>>,
    ) -> Result<T, ReportError> {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result,
            Err(_) => Err(ReportError::Timeout(
                collection.to_string(),
                self.query_timeout.as_secs(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItineraryData, ItineraryRecord, TripRecord, UserRecord};
    use async_trait::async_trait;

    struct FixtureStore {
        users: Vec<UserRecord>,
        trips: Vec<TripRecord>,
        itineraries: Vec<ItineraryRecord>,
        hang_fetches: bool,
    }

    impl FixtureStore {
        fn empty() -> Self {
            Self {
                users: Vec::new(),
                trips: Vec::new(),
                itineraries: Vec::new(),
                hang_fetches: false,
            }
        }

        fn with_user(name: &str) -> Self {
            let mut store = Self::empty();
            store.users.push(UserRecord {
                id: "user-1".to_string(),
                name: name.to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "$2b$12$hash".to_string(),
                created_at: "2025-01-15T09:30:00+00:00".to_string(),
            });
            store
        }
    }

    #[async_trait]
    impl TravelStore for FixtureStore {
        async fn ping(&self) -> Result<(), ReportError> {
            Ok(())
        }

        async fn count_users(&self) -> Result<u64, ReportError> {
            Ok(self.users.len() as u64)
        }

        async fn count_trips(&self) -> Result<u64, ReportError> {
            Ok(self.trips.len() as u64)
        }

        async fn count_itineraries(&self) -> Result<u64, ReportError> {
            Ok(self.itineraries.len() as u64)
        }

        async fn fetch_users(&self) -> Result<Vec<UserRecord>, ReportError> {
            if self.hang_fetches {
                std::future::pending::<()>().await;
            }
            Ok(self.users.clone())
        }

        async fn fetch_trips(&self) -> Result<Vec<TripRecord>, ReportError> {
            Ok(self.trips.clone())
        }

        async fn fetch_itineraries(&self) -> Result<Vec<ItineraryRecord>, ReportError> {
            Ok(self.itineraries.clone())
        }
    }

    #[tokio::test]
    async fn test_empty_database_report() {
        let inspector = Inspector::new(FixtureStore::empty(), 30);
        let report = inspector.build_report().await.unwrap();

        assert_eq!(report.counts.users, 0);
        assert_eq!(report.counts.trips, 0);
        assert_eq!(report.counts.itineraries, 0);
        assert!(report.users.is_empty());
        assert!(report.trips.is_empty());
        assert!(report.itineraries.is_empty());
    }

    #[tokio::test]
    async fn test_report_carries_records_and_counts() {
        let mut store = FixtureStore::with_user("Jane Doe");
        store.trips.push(TripRecord {
            id: "trip-1".to_string(),
            user_id: "user-1".to_string(),
            location: "Paris".to_string(),
            number_of_days: 5,
            ..Default::default()
        });
        store.itineraries.push(ItineraryRecord {
            id: "itin-1".to_string(),
            trip_id: "trip-1".to_string(),
            user_id: "user-1".to_string(),
            itinerary_data: ItineraryData {
                days: vec![Default::default(); 5],
            },
            created_at: String::new(),
        });

        let inspector = Inspector::new(store, 30);
        let report = inspector.build_report().await.unwrap();

        assert_eq!(report.counts.users, 1);
        assert_eq!(report.counts.trips, 1);
        assert_eq!(report.counts.itineraries, 1);
        assert_eq!(report.users[0].name, "Jane Doe");
        assert_eq!(report.trips[0].location, "Paris");
        assert_eq!(report.itineraries[0].day_count(), 5);
    }

    #[tokio::test]
    async fn test_hanging_query_times_out() {
        let mut store = FixtureStore::with_user("Jane Doe");
        store.hang_fetches = true;

        let inspector = Inspector::new(store, 0);
        let result = inspector.build_report().await;

        assert!(matches!(result, Err(ReportError::Timeout(_, _))));
    }
}
