use std::collections::HashMap;

use uuid::Uuid;

use crate::models::matches::Score;
use crate::models::pool::{Pool, PoolMember};
use crate::models::prediction::Prediction;
use crate::pool::scoring::{score_prediction, ScoringRules};

/// Full recompute of member points and ranks for every pool.
///
/// Deliberately not incremental: points are rebuilt from scratch out of the
/// current predictions and effective results, so the outcome is the same no
/// matter in which order mutations arrived, and re-running it is a no-op.
pub fn recompute_all_pools<F>(
    pools: &mut [Pool],
    predictions: &[Prediction],
    effective_result: &F,
    rules: ScoringRules,
) where
    F: Fn(&str) -> Option<Score>,
{
    for pool in pools.iter_mut() {
        let mut member_points: HashMap<Uuid, u32> = HashMap::new();
        for prediction in predictions.iter().filter(|p| p.pool_id == pool.id) {
            if let Some(result) = effective_result(&prediction.match_id) {
                let points = score_prediction(prediction.score(), result, rules);
                *member_points.entry(prediction.user_id).or_insert(0) += points;
            }
        }
        for member in pool.members.iter_mut() {
            member.points = member_points.get(&member.user_id).copied().unwrap_or(0);
        }
        rank_members(&mut pool.members);
    }
}

/// Sort descending by points (stable, so earlier members keep their position
/// among ties) and assign ranks 1..N.
pub fn rank_members(members: &mut [PoolMember]) {
    members.sort_by(|a, b| b.points.cmp(&a.points));
    for (index, member) in members.iter_mut().enumerate() {
        member.rank = index as u32 + 1;
    }
}
