use std::collections::HashMap;

use uuid::Uuid;

use crate::models::leaderboard::{LeaderboardEntry, PredictionHistoryEntry};
use crate::models::matches::{Match, Score};
use crate::models::pool::Pool;
use crate::models::prediction::Prediction;
use crate::pool::scoring::{score_prediction, ScoringRules};

/// Cross-pool global ranking: each user appears once, attributed to their
/// best-standing pool (highest points; the first membership seen wins ties).
/// Exact/correct counters come from replaying that user's predictions in that
/// specific pool against effective results.
pub fn global_leaderboard<F>(
    pools: &[Pool],
    predictions: &[Prediction],
    effective_result: &F,
    rules: ScoringRules,
    limit: Option<usize>,
) -> Vec<LeaderboardEntry>
where
    F: Fn(&str) -> Option<Score>,
{
    struct Best<'a> {
        member: &'a crate::models::pool::PoolMember,
        pool_name: &'a str,
    }

    // Entries keep the order the user was first seen in; the stable sort
    // below then breaks point ties by that order, so the ranking is the
    // same on every call over the same pools.
    let mut index_by_user: HashMap<Uuid, usize> = HashMap::new();
    let mut best: Vec<Best> = Vec::new();
    for pool in pools {
        for member in &pool.members {
            match index_by_user.get(&member.user_id) {
                Some(&index) => {
                    if member.points > best[index].member.points {
                        best[index] = Best {
                            member,
                            pool_name: &pool.name,
                        };
                    }
                }
                None => {
                    index_by_user.insert(member.user_id, best.len());
                    best.push(Best {
                        member,
                        pool_name: &pool.name,
                    });
                }
            }
        }
    }

    let mut entries: Vec<LeaderboardEntry> = best
        .into_iter()
        .map(|best| {
            let mut exact_scores = 0;
            let mut correct_results = 0;
            for prediction in predictions.iter().filter(|p| {
                p.user_id == best.member.user_id && p.pool_id == best.member.pool_id
            }) {
                if let Some(result) = effective_result(&prediction.match_id) {
                    let points = score_prediction(prediction.score(), result, rules);
                    if points >= rules.exact_points {
                        exact_scores += 1;
                    }
                    if points >= rules.result_points {
                        correct_results += 1;
                    }
                }
            }
            LeaderboardEntry {
                user: best.member.user.clone(),
                points: best.member.points,
                exact_scores,
                correct_results,
                pool_name: best.pool_name.to_string(),
                rank: 0,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }
    entries
}

/// Every decided prediction of one user, most recent round first.
pub fn user_history<F>(
    user_id: Uuid,
    pools: &[Pool],
    predictions: &[Prediction],
    matches: &[Match],
    effective_result: &F,
    rules: ScoringRules,
) -> Vec<PredictionHistoryEntry>
where
    F: Fn(&str) -> Option<Score>,
{
    let mut history: Vec<PredictionHistoryEntry> = predictions
        .iter()
        .filter(|p| p.user_id == user_id)
        .filter_map(|prediction| {
            let result = effective_result(&prediction.match_id)?;
            let m = matches.iter().find(|m| m.id == prediction.match_id)?;
            let pool = pools.iter().find(|p| p.id == prediction.pool_id)?;
            Some(PredictionHistoryEntry {
                home_team: m.home_team.display_name().to_string(),
                away_team: m.away_team.display_name().to_string(),
                round: m.round,
                prediction: prediction.score(),
                result,
                points: score_prediction(prediction.score(), result, rules),
                pool_name: pool.name.clone(),
            })
        })
        .collect();

    history.sort_by(|a, b| b.round.cmp(&a.round));
    history
}
