use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::leaderboard::PredictionHistoryEntry;
use crate::models::prediction::Prediction;
use crate::pool::leaderboard;
use crate::store::{effective_result_in, recompute, AppStore, StoreError};

/// Predictions close this many minutes before kickoff.
pub const PREDICTION_CUTOFF_MINUTES: i64 = 5;

/// Result of a save attempt. `Closed` is a deliberate no-op, not an error:
/// the match is past its cutoff and the store contents are untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(Prediction),
    Closed,
}

impl AppStore {
    /// Save a prediction. Replaces any prior prediction for the same
    /// (pool, match, user) triple, so the triple never has more than one
    /// live prediction and the last successful save wins.
    #[tracing::instrument(name = "Save prediction", skip(self), fields(match_id = %match_id))]
    pub async fn save_prediction(
        &self,
        pool_id: Uuid,
        user_id: Uuid,
        match_id: &str,
        home_score: u32,
        away_score: u32,
    ) -> Result<SaveOutcome, StoreError> {
        let prediction = {
            let mut state = self.state().write().await;
            if !state.pools.iter().any(|p| p.id == pool_id) {
                return Err(StoreError::PoolNotFound);
            }
            let kickoff = state
                .matches
                .iter()
                .find(|m| m.id == match_id)
                .map(|m| m.kickoff)
                .ok_or(StoreError::MatchNotFound)?;
            if Utc::now() >= kickoff - Duration::minutes(PREDICTION_CUTOFF_MINUTES) {
                tracing::info!("Prediction for {} rejected: past cutoff", match_id);
                return Ok(SaveOutcome::Closed);
            }

            let prediction = Prediction {
                id: Prediction::derive_id(pool_id, match_id, user_id),
                pool_id,
                user_id,
                match_id: match_id.to_string(),
                home_score,
                away_score,
                created_at: Utc::now(),
            };
            state
                .predictions
                .retain(|p| !(p.pool_id == pool_id && p.match_id == match_id && p.user_id == user_id));
            state.predictions.push(prediction.clone());
            recompute(&mut state, self.rules());
            prediction
        };
        self.persist_predictions().await?;
        Ok(SaveOutcome::Saved(prediction))
    }

    pub async fn get_user_prediction(
        &self,
        pool_id: Uuid,
        user_id: Uuid,
        match_id: &str,
    ) -> Option<Prediction> {
        let state = self.state().read().await;
        state
            .predictions
            .iter()
            .find(|p| p.pool_id == pool_id && p.user_id == user_id && p.match_id == match_id)
            .cloned()
    }

    /// All predictions of a pool. When the pool keeps predictions private,
    /// only members may list them.
    pub async fn pool_predictions(
        &self,
        pool_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<Prediction>, StoreError> {
        let state = self.state().read().await;
        let pool = state
            .pools
            .iter()
            .find(|p| p.id == pool_id)
            .ok_or(StoreError::PoolNotFound)?;
        if pool.predictions_private && !pool.is_member(requester_id) {
            return Err(StoreError::PredictionsPrivate);
        }
        Ok(state
            .predictions
            .iter()
            .filter(|p| p.pool_id == pool_id)
            .cloned()
            .collect())
    }

    /// Administrative removal of a single prediction.
    #[tracing::instrument(name = "Delete prediction", skip(self))]
    pub async fn delete_prediction(&self, prediction_id: &str) -> Result<(), StoreError> {
        {
            let mut state = self.state().write().await;
            let before = state.predictions.len();
            state.predictions.retain(|p| p.id != prediction_id);
            if state.predictions.len() == before {
                return Err(StoreError::PredictionNotFound);
            }
            recompute(&mut state, self.rules());
        }
        self.persist_predictions().await?;
        Ok(())
    }

    /// The user's decided predictions, most recent round first.
    pub async fn user_prediction_history(&self, user_id: Uuid) -> Vec<PredictionHistoryEntry> {
        let state = self.state().read().await;
        let effective =
            |match_id: &str| effective_result_in(&state.results, &state.matches, match_id);
        leaderboard::user_history(
            user_id,
            &state.pools,
            &state.predictions,
            &state.matches,
            &effective,
            self.rules(),
        )
    }
}
