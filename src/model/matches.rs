use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Deserialize;

/// One side of a match. Goals are null until kickoff.
#[derive(Clone, Debug, Deserialize)]
pub struct TeamSide {
    pub country: String,
    #[serde(default)]
    pub goals: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Match {
    pub datetime: String,
    pub home_team: TeamSide,
    pub away_team: TeamSide,
    #[serde(default)]
    pub winner: Option<String>,
}

impl Match {
    /// Kickoff instant, when the API timestamp parses. RFC 3339 first,
    /// then a naive timestamp interpreted as UTC.
    pub fn kickoff(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.datetime).ok().or_else(|| {
            chrono::NaiveDateTime::parse_from_str(&self.datetime, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
        })
    }
}
