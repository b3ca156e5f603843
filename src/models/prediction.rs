use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::matches::Score;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prediction {
    pub id: String,
    pub pool_id: Uuid,
    pub user_id: Uuid,
    pub match_id: String,
    pub home_score: u32,
    pub away_score: u32,
    pub created_at: DateTime<Utc>,
}

impl Prediction {
    /// Deterministic id so that re-submission for the same (pool, match, user)
    /// triple always addresses the same record.
    pub fn derive_id(pool_id: Uuid, match_id: &str, user_id: Uuid) -> String {
        format!("pred-{}-{}-{}", pool_id, match_id, user_id)
    }

    pub fn score(&self) -> Score {
        Score::new(self.home_score, self.away_score)
    }
}

#[derive(Debug, Deserialize)]
pub struct SavePredictionRequest {
    pub match_id: String,
    pub home_score: u32,
    pub away_score: u32,
}

/// Answer to a save attempt: `accepted == false` means the match was already
/// closed for predictions (not an error).
#[derive(Debug, Serialize)]
pub struct SavePredictionResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
}
