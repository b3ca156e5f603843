mod matches;
mod pools;
mod predictions;
mod results;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::data;
use crate::feed::FeedError;
use crate::models::matches::{Match, Score};
use crate::models::pool::Pool;
use crate::models::prediction::Prediction;
use crate::pool::scoring::ScoringRules;
use crate::pool::standings;
use crate::storage::{self, collections, Backend, StorageError};

pub use predictions::SaveOutcome;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    // Validation rejections — the caller gets a 4xx and decides messaging.
    #[error("pool not found")]
    PoolNotFound,
    #[error("incorrect join code")]
    InvalidJoinCode,
    #[error("the pool owner cannot leave the pool")]
    OwnerCannotLeave,
    #[error("only the pool owner can do this")]
    NotOwner,
    #[error("match not found")]
    MatchNotFound,
    #[error("prediction not found")]
    PredictionNotFound,
    #[error("predictions in this pool are private to its members")]
    PredictionsPrivate,
    // Transient I/O — retryable by the caller, swallowed by background jobs.
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// In-memory image of every persisted collection. All mutation paths go
/// through `AppStore`, which keeps this consistent and recomputes derived
/// state (member points/ranks) after every relevant change.
#[derive(Debug, Default)]
pub(crate) struct AppState {
    pub pools: Vec<Pool>,
    pub predictions: Vec<Prediction>,
    pub results: HashMap<String, Score>,
    pub matches: Vec<Match>,
}

/// Effective result for scoring: the explicit override wins, then the score
/// embedded on the match by the schedule feed, else the match is undecided.
pub(crate) fn effective_result_in(
    results: &HashMap<String, Score>,
    matches: &[Match],
    match_id: &str,
) -> Option<Score> {
    if let Some(score) = results.get(match_id) {
        return Some(*score);
    }
    matches
        .iter()
        .find(|m| m.id == match_id)
        .and_then(|m| m.embedded_score())
}

/// Recompute all derived pool state from the current collections. Borrows
/// are split so the effective-result lookup can read results/matches while
/// pools are mutated.
pub(crate) fn recompute(state: &mut AppState, rules: ScoringRules) {
    let AppState {
        pools,
        predictions,
        results,
        matches,
    } = state;
    let effective = |match_id: &str| effective_result_in(results, matches, match_id);
    standings::recompute_all_pools(pools, predictions, &effective, rules);
}

/// The application store: shared in-memory state over a pluggable
/// persistence backend. Mutations update memory first (readers never wait on
/// I/O), then persist the affected collection and emit a change hint.
#[derive(Clone)]
pub struct AppStore {
    backend: Backend,
    rules: ScoringRules,
    state: Arc<RwLock<AppState>>,
}

impl AppStore {
    /// Build the store and hydrate it from the backend. Missing or discarded
    /// documents fall back to empty collections; a missing schedule falls
    /// back to the static seed.
    pub async fn init(backend: Backend, rules: ScoringRules) -> Result<Self, StorageError> {
        let store = Self {
            backend,
            rules,
            state: Arc::new(RwLock::new(AppState::default())),
        };
        store.reload_all().await?;
        Ok(store)
    }

    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    pub(crate) fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    /// Replace all in-memory collections with the backend's current
    /// documents and recompute. Runs at startup and on every resync trigger
    /// (change hint or poll).
    pub async fn reload_all(&self) -> Result<(), StorageError> {
        let pools: Vec<Pool> = storage::load_collection(&self.backend, collections::POOLS)
            .await?
            .unwrap_or_default();
        let predictions: Vec<Prediction> =
            storage::load_collection(&self.backend, collections::PREDICTIONS)
                .await?
                .unwrap_or_default();
        let results: HashMap<String, Score> =
            storage::load_collection(&self.backend, collections::MATCH_RESULTS)
                .await?
                .unwrap_or_default();
        let matches: Vec<Match> = storage::load_collection(&self.backend, collections::SCHEDULE)
            .await?
            .unwrap_or_else(data::schedule::seed_matches);

        let mut state = self.state.write().await;
        state.pools = pools;
        state.predictions = predictions;
        state.results = results;
        state.matches = matches;
        recompute(&mut state, self.rules);
        Ok(())
    }

    /// Drop all in-memory contents. Called when the session identity goes
    /// away so no state leaks across users in embedded deployments.
    pub async fn teardown(&self) {
        let mut state = self.state.write().await;
        *state = AppState::default();
    }

    pub(crate) async fn persist_pools(&self) -> Result<(), StorageError> {
        let snapshot = { self.state.read().await.pools.clone() };
        self.persist(collections::POOLS, &snapshot).await
    }

    pub(crate) async fn persist_predictions(&self) -> Result<(), StorageError> {
        let snapshot = { self.state.read().await.predictions.clone() };
        self.persist(collections::PREDICTIONS, &snapshot).await
    }

    pub(crate) async fn persist_results(&self) -> Result<(), StorageError> {
        let snapshot = { self.state.read().await.results.clone() };
        self.persist(collections::MATCH_RESULTS, &snapshot).await
    }

    pub(crate) async fn persist_schedule(&self) -> Result<(), StorageError> {
        let snapshot = { self.state.read().await.matches.clone() };
        self.persist(collections::SCHEDULE, &snapshot).await
    }

    async fn persist<T: serde::Serialize>(
        &self,
        collection: &str,
        snapshot: &T,
    ) -> Result<(), StorageError> {
        let payload = storage::encode_document(snapshot)?;
        self.backend.save(collection, &payload).await?;
        self.backend.notify_change(collection).await;
        Ok(())
    }
}
