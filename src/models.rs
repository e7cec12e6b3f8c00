use serde::{Deserialize, Serialize};

/// A registered user document. Owned by the travel planner backend;
/// read-only here. The password hash must never be displayed in full.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password_hash: String,
    #[serde(default)]
    pub created_at: String,
}

/// Trip criteria as captured by the backend at creation time.
/// Timestamps and datetimes are stored as strings and reported verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time_of_arrival: String,
    #[serde(default)]
    pub time_of_departure: String,
    #[serde(default)]
    pub location_of_stay: String,
    #[serde(default)]
    pub check_in_datetime: String,
    #[serde(default)]
    pub check_out_datetime: String,
    #[serde(default)]
    pub number_of_days: i64,
    #[serde(default)]
    pub trip_type: String,
    #[serde(default)]
    pub trip_vibe: String,
    #[serde(default)]
    pub hectic_level: String,
    #[serde(default)]
    pub places_preference: String,
    #[serde(default)]
    pub created_at: String,
}

/// A generated itinerary with its nested day-by-day activity structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItineraryRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub trip_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub itinerary_data: ItineraryData,
    #[serde(default)]
    pub created_at: String,
}

impl ItineraryRecord {
    pub fn day_count(&self) -> usize {
        self.itinerary_data.days.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItineraryData {
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default)]
    pub day: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub travel_time: String,
    #[serde(default)]
    pub tips: String,
}

/// Document counts per collection, gathered before the full fetches.
/// Counts and listings are separate queries with no consistency guarantee
/// between them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CollectionCounts {
    pub users: u64,
    pub trips: u64,
    pub itineraries: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseReport {
    pub counts: CollectionCounts,
    pub users: Vec<UserRecord>,
    pub trips: Vec<TripRecord>,
    pub itineraries: Vec<ItineraryRecord>,
}

impl DatabaseReport {
    pub fn new() -> Self {
        Self {
            counts: CollectionCounts::default(),
            users: Vec::new(),
            trips: Vec::new(),
            itineraries: Vec::new(),
        }
    }
}

impl Default for DatabaseReport {
    fn default() -> Self {
        Self::new()
    }
}
