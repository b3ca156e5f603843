use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::data;
use crate::feed::client::FeedClient;
use crate::feed::events;
use crate::models::leaderboard::LeaderboardEntry;
use crate::models::matches::Match;
use crate::pool::{leaderboard, schedule};
use crate::store::{effective_result_in, recompute, AppStore, StoreError};

impl AppStore {
    pub async fn match_by_id(&self, match_id: &str) -> Option<Match> {
        let state = self.state().read().await;
        state.matches.iter().find(|m| m.id == match_id).cloned()
    }

    pub async fn matches_by_round(&self, round: u32) -> Vec<Match> {
        let state = self.state().read().await;
        state
            .matches
            .iter()
            .filter(|m| m.round == round)
            .cloned()
            .collect()
    }

    pub async fn current_round(&self) -> u32 {
        let state = self.state().read().await;
        schedule::current_round(&state.matches, Utc::now())
    }

    pub async fn upcoming_matches(&self, limit: Option<usize>) -> Vec<Match> {
        let state = self.state().read().await;
        schedule::upcoming_matches(&state.matches, Utc::now(), limit)
    }

    pub async fn upcoming_by_round(&self) -> BTreeMap<u32, Vec<Match>> {
        let state = self.state().read().await;
        schedule::upcoming_matches_by_round(&state.matches, Utc::now())
    }

    /// Install a schedule wholesale. Used by the feed refresh and by tests
    /// that need matches with controlled kickoffs.
    pub async fn replace_schedule(&self, matches: Vec<Match>) -> Result<(), StoreError> {
        {
            let mut state = self.state().write().await;
            state.matches = matches;
            recompute(&mut state, self.rules());
        }
        self.persist_schedule().await?;
        Ok(())
    }

    /// Rebuild the schedule from the feed, merged round by round over the
    /// static seed. Rounds the feed knows nothing about keep their seeded
    /// fixtures.
    #[tracing::instrument(name = "Refresh schedule from feed", skip(self, feed))]
    pub async fn refresh_schedule(&self, feed: &FeedClient) -> Result<usize, StoreError> {
        let fetched = feed.fetch_season_events().await?;
        let feed_matches: Vec<Match> = fetched.iter().filter_map(events::event_to_match).collect();
        let merged = schedule::merge_schedules(&data::schedule::seed_matches(), &feed_matches);
        let total = merged.len();
        self.replace_schedule(merged).await?;
        tracing::info!("Schedule refreshed, {} matches", total);
        Ok(total)
    }

    /// Cross-pool leaderboard: each user counted once, at their best pool.
    pub async fn global_leaderboard(&self, limit: Option<usize>) -> Vec<LeaderboardEntry> {
        let state = self.state().read().await;
        let effective =
            |match_id: &str| effective_result_in(&state.results, &state.matches, match_id);
        leaderboard::global_leaderboard(
            &state.pools,
            &state.predictions,
            &effective,
            self.rules(),
            limit,
        )
    }

    /// The pool's members with points and ranks, already recomputed.
    pub async fn pool_standings(
        &self,
        pool_id: Uuid,
    ) -> Result<Vec<crate::models::pool::PoolMember>, StoreError> {
        let state = self.state().read().await;
        state
            .pools
            .iter()
            .find(|p| p.id == pool_id)
            .map(|p| p.members.clone())
            .ok_or(StoreError::PoolNotFound)
    }
}
