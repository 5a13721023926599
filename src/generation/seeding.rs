//! Bulk place seeding

use serde::Serialize;
use tracing::{info, warn};

use crate::population::service::{create_place, PlaceRequest};
use crate::store::EntityStore;

/// The fifty U.S. states with their postal codes
pub const US_STATES: [(&str, &str); 50] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub successes: usize,
    pub failures: usize,
}

/// Create every state that does not exist yet. Existing ones count as failures.
pub fn seed_places<S: EntityStore + ?Sized>(store: &mut S) -> SeedReport {
    let mut report = SeedReport::default();

    for (name, code) in US_STATES {
        let request = PlaceRequest {
            id: None,
            name: Some(name.to_string()),
            two_letter_code: Some(code.to_lowercase()),
        };
        match create_place(store, request) {
            Ok(_) => report.successes += 1,
            Err(e) => {
                warn!("Could not seed {}: {}", name, e);
                report.failures += 1;
            }
        }
    }

    info!("Seeded places: {} created, {} failed", report.successes, report.failures);
    report
}
