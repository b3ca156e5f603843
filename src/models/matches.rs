use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::team::Team;

/// A fixture of the season schedule. Seeded matches carry `match-{round}-{n}`
/// ids; matches ingested from the external feed carry `api-{event id}` ids,
/// so the same fixture can appear under two different identifiers depending
/// on which source currently owns its round.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub home_team: Team,
    pub away_team: Team,
    pub kickoff: DateTime<Utc>,
    pub stadium: String,
    pub round: u32,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
}

impl Match {
    /// Score embedded by the schedule feed, if the feed already knows it.
    pub fn embedded_score(&self) -> Option<Score> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some(Score { home, away }),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

/// Final score of a match. Also the shape of a prediction's guess.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Three-way sign of the goal difference: -1 away win, 0 draw, 1 home win.
    pub fn outcome_sign(&self) -> i64 {
        (self.home as i64 - self.away as i64).signum()
    }
}

#[derive(Debug, Deserialize)]
pub struct SetResultRequest {
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingMatchesQuery {
    pub limit: Option<usize>,
}
