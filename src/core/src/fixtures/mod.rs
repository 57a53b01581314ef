use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A scheduled match. `kickoff` is `None` while the broadcaster slot is
/// still to be confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub kickoff: Option<NaiveDateTime>,
}

impl Fixture {
    pub fn new(home: &str, away: &str, kickoff: Option<NaiveDateTime>) -> Self {
        Fixture {
            home: String::from(home),
            away: String::from(away),
            kickoff,
        }
    }
}

/// Fixtures kicking off inside `[from, from + days)`, earliest first.
/// Unconfirmed fixtures cannot be placed in the window and are dropped.
pub fn upcoming(fixtures: &[Fixture], from: NaiveDateTime, days: i64) -> Vec<Fixture> {
    let until = from + Duration::days(days);

    let mut window: Vec<Fixture> = fixtures
        .iter()
        .filter(|f| matches!(f.kickoff, Some(k) if k >= from && k < until))
        .cloned()
        .collect();

    window.sort_by_key(|f| f.kickoff);
    window
}
