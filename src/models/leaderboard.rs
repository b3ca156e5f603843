use serde::{Deserialize, Serialize};

use crate::models::matches::Score;
use crate::models::user::UserRef;

/// One row of the global leaderboard: a user's best standing across all of
/// their pools. Derived on demand, never stored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LeaderboardEntry {
    pub user: UserRef,
    pub points: u32,
    pub exact_scores: u32,
    pub correct_results: u32,
    pub pool_name: String,
    pub rank: u32,
}

/// One decided prediction in a user's chronological history.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PredictionHistoryEntry {
    pub home_team: String,
    pub away_team: String,
    pub round: u32,
    pub prediction: Score,
    pub result: Score,
    pub points: u32,
    pub pool_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}
