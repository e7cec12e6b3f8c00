use crate::models::DatabaseReport;
use anyhow::Result;

const BANNER_WIDTH: usize = 50;
const RECORD_SEPARATOR: &str = "---";
const PASSWORD_HASH_PREVIEW_LEN: usize = 20;

pub trait ReportFormatter: Send + Sync {
    fn format(&self, report: &DatabaseReport) -> Result<String>;
}

pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self
    }

    fn section_banner(title: &str) -> String {
        format!(
            "{}\n {}\n{}\n",
            "=".repeat(BANNER_WIDTH),
            title,
            "=".repeat(BANNER_WIDTH)
        )
    }
}

/// Only a short prefix of a stored password hash is ever printed,
/// regardless of output mode.
pub fn mask_password_hash(hash: &str) -> String {
    if hash.is_empty() {
        return "(none)".to_string();
    }
    let preview: String = hash.chars().take(PASSWORD_HASH_PREVIEW_LEN).collect();
    format!("{preview}...")
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &DatabaseReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&Self::section_banner("DATABASE STATISTICS"));
        output.push_str(&format!("Users: {}\n", report.counts.users));
        output.push_str(&format!("Trips: {}\n", report.counts.trips));
        output.push_str(&format!("Itineraries: {}\n", report.counts.itineraries));
        output.push('\n');

        output.push_str(&Self::section_banner("USERS"));
        for user in &report.users {
            output.push_str(&format!("ID: {}\n", user.id));
            output.push_str(&format!("Name: {}\n", user.name));
            output.push_str(&format!("Email: {}\n", user.email));
            output.push_str(&format!(
                "Password hash: {}\n",
                mask_password_hash(&user.password_hash)
            ));
            output.push_str(&format!("Created: {}\n", user.created_at));
            output.push_str(RECORD_SEPARATOR);
            output.push('\n');
        }
        output.push('\n');

        output.push_str(&Self::section_banner("TRIPS"));
        for trip in &report.trips {
            output.push_str(&format!("ID: {}\n", trip.id));
            output.push_str(&format!("User ID: {}\n", trip.user_id));
            output.push_str(&format!("Location: {}\n", trip.location));
            output.push_str(&format!("Stay: {}\n", trip.location_of_stay));
            output.push_str(&format!("Arrival: {}\n", trip.time_of_arrival));
            output.push_str(&format!("Departure: {}\n", trip.time_of_departure));
            output.push_str(&format!("Check-in: {}\n", trip.check_in_datetime));
            output.push_str(&format!("Check-out: {}\n", trip.check_out_datetime));
            output.push_str(&format!("Days: {}\n", trip.number_of_days));
            output.push_str(&format!("Type: {}\n", trip.trip_type));
            output.push_str(&format!("Vibe: {}\n", trip.trip_vibe));
            output.push_str(&format!("Hectic level: {}\n", trip.hectic_level));
            output.push_str(&format!("Places: {}\n", trip.places_preference));
            output.push_str(&format!("Created: {}\n", trip.created_at));
            output.push_str(RECORD_SEPARATOR);
            output.push('\n');
        }
        output.push('\n');

        output.push_str(&Self::section_banner("ITINERARIES"));
        for itinerary in &report.itineraries {
            output.push_str(&format!("ID: {}\n", itinerary.id));
            output.push_str(&format!("Trip ID: {}\n", itinerary.trip_id));
            output.push_str(&format!("User ID: {}\n", itinerary.user_id));
            output.push_str(&format!("Days in itinerary: {}\n", itinerary.day_count()));
            output.push_str(&format!("Created: {}\n", itinerary.created_at));
            output.push_str(RECORD_SEPARATOR);
            output.push('\n');
        }

        Ok(output)
    }
}
