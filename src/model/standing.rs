use serde::Deserialize;

/// One row of a group stage table.
#[derive(Clone, Debug, Deserialize)]
pub struct GroupStanding {
    pub country: String,
    #[serde(default)]
    pub group_id: Option<i64>,
    pub wins: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    #[serde(default)]
    pub knocked_out: bool,
}
